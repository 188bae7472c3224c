//! Opaque ID newtypes for fabric entities.
//!
//! [`FabricBelId`] and [`FabricWireId`] are thin `u32` wrappers used as
//! arena indices into the [`Fabric`](crate::Fabric) model.

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
    };
}

define_id!(
    /// Opaque, copyable ID for a bel (physical placement site).
    FabricBelId
);

define_id!(
    /// Opaque, copyable ID for a routing wire in the fabric.
    FabricWireId
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn id_roundtrip() {
        let id = FabricBelId::from_raw(42);
        assert_eq!(id.as_raw(), 42);
    }

    #[test]
    fn id_equality() {
        let a = FabricWireId::from_raw(7);
        let b = FabricWireId::from_raw(7);
        let c = FabricWireId::from_raw(8);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn id_hash_in_set() {
        let mut set = HashSet::new();
        set.insert(FabricBelId::from_raw(1));
        set.insert(FabricBelId::from_raw(2));
        set.insert(FabricBelId::from_raw(1));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn id_serde_roundtrip() {
        let id = FabricWireId::from_raw(99);
        let json = serde_json::to_string(&id).unwrap();
        let restored: FabricWireId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, restored);
    }
}
