//! Structural fabric types: locations, bels, and wires.

use crate::ids::{FabricBelId, FabricWireId};
use serde::{Deserialize, Serialize};

/// A grid position in the fabric.
///
/// `x`/`y` address the tile; `z` is the sub-index of the site within its
/// tile (logic tiles offer 8 z-indexed sites, IO tiles a pair at z 0 and 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// Tile column (0-based, left to right).
    pub x: u32,
    /// Tile row (0-based, bottom to top).
    pub y: u32,
    /// Site sub-index within the tile.
    pub z: u32,
}

impl Location {
    /// Creates a location from its three coordinates.
    pub fn new(x: u32, y: u32, z: u32) -> Self {
        Self { x, y, z }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// The functional type of a bel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BelType {
    /// A logic site (LUT + DFF sharing the tile's control set).
    LogicSite,
    /// An IO site, one half of a differential-capable pad pair.
    IoSite,
    /// A site driving one of the dedicated low-skew global networks.
    GlobalBufferSite,
    /// A PLL clock-synthesis site.
    PllSite,
    /// A block RAM site.
    BramSite,
}

/// A physical site in the fabric, capable of hosting one cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bel {
    /// The unique ID of this bel.
    pub id: FabricBelId,
    /// The instance name (e.g. "X2/Y3/lc4", "X0/Y5/io1").
    pub name: String,
    /// The functional type of this bel.
    pub bel_type: BelType,
    /// The grid position of this bel.
    pub location: Location,
    /// External package pin bonded to this site (IO sites only; `None`
    /// for unbonded pads).
    pub package_pin: Option<String>,
    /// Index of the global network this site drives (global buffer sites
    /// only).
    pub global_network: Option<u32>,
}

/// A routing wire connecting bel pins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wire {
    /// The unique ID of this wire.
    pub id: FabricWireId,
    /// The wire name (e.g. "X4/Y0/io0/d_in_0").
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_display() {
        let loc = Location::new(3, 7, 1);
        assert_eq!(format!("{loc}"), "(3, 7, 1)");
    }

    #[test]
    fn location_equality_and_hash() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Location::new(1, 2, 3));
        set.insert(Location::new(1, 2, 3));
        set.insert(Location::new(1, 2, 4));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn bel_type_variants_distinct() {
        let types = [
            BelType::LogicSite,
            BelType::IoSite,
            BelType::GlobalBufferSite,
            BelType::PllSite,
            BelType::BramSite,
        ];
        for (i, a) in types.iter().enumerate() {
            for (j, b) in types.iter().enumerate() {
                assert_eq!(i == j, a == b);
            }
        }
    }

    #[test]
    fn bel_construction() {
        let bel = Bel {
            id: FabricBelId::from_raw(0),
            name: "X1/Y1/lc0".to_string(),
            bel_type: BelType::LogicSite,
            location: Location::new(1, 1, 0),
            package_pin: None,
            global_network: None,
        };
        assert_eq!(bel.location.z, 0);
        assert_eq!(bel.bel_type, BelType::LogicSite);
    }

    #[test]
    fn bel_serde_roundtrip() {
        let bel = Bel {
            id: FabricBelId::from_raw(5),
            name: "X0/Y2/io1".to_string(),
            bel_type: BelType::IoSite,
            location: Location::new(0, 2, 1),
            package_pin: Some("P12".to_string()),
            global_network: None,
        };
        let json = serde_json::to_string(&bel).unwrap();
        let restored: Bel = serde_json::from_str(&json).unwrap();
        assert_eq!(bel, restored);
    }
}
