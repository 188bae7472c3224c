//! Opaque ID newtypes for netlist entities.
//!
//! [`NetlistCellId`] and [`NetlistNetId`] are thin `u32` wrappers used as
//! arena indices into the [`Netlist`](crate::Netlist). They are `Copy`,
//! `Hash`, and `Serialize`/`Deserialize`.
//!
//! Net IDs double as the identity used by every control-sharing legality
//! rule: two nets are "the same signal" exactly when their IDs are equal,
//! never when their structural properties happen to coincide.

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
        pub struct $name(u32);

        impl $name {
            /// Creates an ID from a raw `u32` index.
            pub fn from_raw(index: u32) -> Self {
                Self(index)
            }

            /// Returns the raw `u32` index.
            pub fn as_raw(self) -> u32 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_id!(
    /// Opaque, copyable ID for a cell in the netlist.
    NetlistCellId
);

define_id!(
    /// Opaque, copyable ID for a net in the netlist.
    NetlistNetId
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn cell_id_roundtrip() {
        let id = NetlistCellId::from_raw(42);
        assert_eq!(id.as_raw(), 42);
    }

    #[test]
    fn net_id_roundtrip() {
        let id = NetlistNetId::from_raw(99);
        assert_eq!(id.as_raw(), 99);
    }

    #[test]
    fn id_equality() {
        let a = NetlistNetId::from_raw(3);
        let b = NetlistNetId::from_raw(3);
        let c = NetlistNetId::from_raw(4);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn id_hash_in_set() {
        let mut set = HashSet::new();
        set.insert(NetlistCellId::from_raw(1));
        set.insert(NetlistCellId::from_raw(2));
        set.insert(NetlistCellId::from_raw(1));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn id_serde_roundtrip() {
        let id = NetlistNetId::from_raw(55);
        let json = serde_json::to_string(&id).unwrap();
        let restored: NetlistNetId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, restored);
    }

    #[test]
    fn id_zero_and_max() {
        let zero = NetlistCellId::from_raw(0);
        let max = NetlistCellId::from_raw(u32::MAX);
        assert_ne!(zero, max);
        assert_eq!(zero.as_raw(), 0);
        assert_eq!(max.as_raw(), u32::MAX);
    }

    #[test]
    fn id_display() {
        let id = NetlistNetId::from_raw(42);
        assert_eq!(format!("{id}"), "42");
    }
}
