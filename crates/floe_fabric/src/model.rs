//! Concrete in-memory fabric model.
//!
//! [`Fabric`] holds the bel and wire arenas, the location and tile indices,
//! the bel-pin connectivity, and the binding table that maps bels to the
//! cells currently occupying them. It is built once through
//! [`FabricBuilder`] before the search starts; afterwards only the binding
//! table changes, through [`Fabric::bind`] / [`Fabric::unbind`], which are
//! exclusively the search engine's to call.

use crate::ids::{FabricBelId, FabricWireId};
use crate::types::{Bel, BelType, Location, Wire};
use crate::view::FabricView;
use floe_netlist::{NetlistCellId, PinName};
use std::collections::HashMap;

/// Number of z-indexed logic sites in a logic tile.
pub const LOGIC_SITES_PER_TILE: u32 = 8;

/// Number of dedicated low-skew global networks in the fabric.
pub const GLOBAL_NETWORK_COUNT: u32 = 8;

/// Errors from fabric construction or binding misuse.
///
/// These report misassembled fabrics and binding conflicts at build/bind
/// time. They are unrelated to placement legality, which is always a plain
/// boolean answer, never an error.
#[derive(Debug, thiserror::Error)]
pub enum FabricError {
    /// Two bels were added at the same grid position.
    #[error("a bel already exists at {0}")]
    DuplicateLocation(Location),
    /// A package pin was assigned to a bel that is not an IO site.
    #[error("bel '{0}' is not an IO site")]
    NotAnIoSite(String),
    /// A global network index was assigned to a bel that cannot drive one.
    #[error("bel '{0}' is not a global buffer site")]
    NotAGlobalBufferSite(String),
    /// A bel pin was connected to a second wire.
    #[error("pin {1:?} of bel '{0}' is already wired")]
    PinAlreadyWired(String, PinName),
    /// A cell was bound to a bel that already hosts one.
    #[error("bel '{0}' already has a bound cell")]
    BelOccupied(String),
}

/// Incremental builder for a [`Fabric`].
#[derive(Debug, Default)]
pub struct FabricBuilder {
    bels: Vec<Bel>,
    wires: Vec<Wire>,
    by_location: HashMap<Location, FabricBelId>,
    pin_to_wire: HashMap<(FabricBelId, PinName), FabricWireId>,
    wire_pins: Vec<Vec<(FabricBelId, PinName)>>,
}

impl FabricBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a bel at `location` and returns its ID.
    ///
    /// # Errors
    ///
    /// Returns [`FabricError::DuplicateLocation`] if the position is taken.
    pub fn add_bel(
        &mut self,
        name: impl Into<String>,
        bel_type: BelType,
        location: Location,
    ) -> Result<FabricBelId, FabricError> {
        if self.by_location.contains_key(&location) {
            return Err(FabricError::DuplicateLocation(location));
        }
        let id = FabricBelId::from_raw(self.bels.len() as u32);
        self.bels.push(Bel {
            id,
            name: name.into(),
            bel_type,
            location,
            package_pin: None,
            global_network: None,
        });
        self.by_location.insert(location, id);
        Ok(id)
    }

    /// Bonds an external package pin to an IO site.
    ///
    /// # Errors
    ///
    /// Returns [`FabricError::NotAnIoSite`] for any other bel type.
    pub fn set_package_pin(
        &mut self,
        bel: FabricBelId,
        pin: impl Into<String>,
    ) -> Result<(), FabricError> {
        let bel = &mut self.bels[bel.as_raw() as usize];
        if bel.bel_type != BelType::IoSite {
            return Err(FabricError::NotAnIoSite(bel.name.clone()));
        }
        bel.package_pin = Some(pin.into());
        Ok(())
    }

    /// Assigns the driven global network index to a global buffer site.
    ///
    /// # Errors
    ///
    /// Returns [`FabricError::NotAGlobalBufferSite`] for any other bel type.
    pub fn set_global_network(
        &mut self,
        bel: FabricBelId,
        network: u32,
    ) -> Result<(), FabricError> {
        let bel = &mut self.bels[bel.as_raw() as usize];
        if bel.bel_type != BelType::GlobalBufferSite {
            return Err(FabricError::NotAGlobalBufferSite(bel.name.clone()));
        }
        bel.global_network = Some(network);
        Ok(())
    }

    /// Adds a routing wire and returns its ID.
    pub fn add_wire(&mut self, name: impl Into<String>) -> FabricWireId {
        let id = FabricWireId::from_raw(self.wires.len() as u32);
        self.wires.push(Wire {
            id,
            name: name.into(),
        });
        self.wire_pins.push(Vec::new());
        id
    }

    /// Attaches a bel pin to a wire.
    ///
    /// # Errors
    ///
    /// Returns [`FabricError::PinAlreadyWired`] if the pin is already
    /// attached to a wire.
    pub fn connect_pin(
        &mut self,
        bel: FabricBelId,
        pin: PinName,
        wire: FabricWireId,
    ) -> Result<(), FabricError> {
        if self.pin_to_wire.contains_key(&(bel, pin)) {
            let name = self.bels[bel.as_raw() as usize].name.clone();
            return Err(FabricError::PinAlreadyWired(name, pin));
        }
        self.pin_to_wire.insert((bel, pin), wire);
        self.wire_pins[wire.as_raw() as usize].push((bel, pin));
        Ok(())
    }

    /// Finalizes the fabric, computing the tile index and an empty binding
    /// table.
    pub fn build(self) -> Fabric {
        let mut by_tile: HashMap<(u32, u32), Vec<FabricBelId>> = HashMap::new();
        for bel in &self.bels {
            by_tile
                .entry((bel.location.x, bel.location.y))
                .or_default()
                .push(bel.id);
        }
        for bels in by_tile.values_mut() {
            bels.sort_by_key(|b| self.bels[b.as_raw() as usize].location.z);
        }
        let bindings = vec![None; self.bels.len()];
        Fabric {
            bels: self.bels,
            wires: self.wires,
            by_location: self.by_location,
            by_tile,
            pin_to_wire: self.pin_to_wire,
            wire_pins: self.wire_pins,
            bindings,
        }
    }
}

/// The fabric: site geometry, wiring, and the current cell bindings.
#[derive(Debug)]
pub struct Fabric {
    bels: Vec<Bel>,
    wires: Vec<Wire>,
    by_location: HashMap<Location, FabricBelId>,
    by_tile: HashMap<(u32, u32), Vec<FabricBelId>>,
    pin_to_wire: HashMap<(FabricBelId, PinName), FabricWireId>,
    wire_pins: Vec<Vec<(FabricBelId, PinName)>>,
    bindings: Vec<Option<NetlistCellId>>,
}

impl Fabric {
    /// Returns the number of bels in the fabric.
    pub fn bel_count(&self) -> usize {
        self.bels.len()
    }

    /// Returns the number of wires in the fabric.
    pub fn wire_count(&self) -> usize {
        self.wires.len()
    }

    /// Returns the bel with the given ID.
    pub fn bel(&self, id: FabricBelId) -> &Bel {
        &self.bels[id.as_raw() as usize]
    }

    /// Returns the wire with the given ID.
    pub fn wire(&self, id: FabricWireId) -> &Wire {
        &self.wires[id.as_raw() as usize]
    }

    /// Returns all bels of the given type, in ID order.
    pub fn bels_of_type(&self, bel_type: BelType) -> Vec<FabricBelId> {
        self.bels
            .iter()
            .filter(|b| b.bel_type == bel_type)
            .map(|b| b.id)
            .collect()
    }

    /// Binds `cell` to `bel`.
    ///
    /// # Errors
    ///
    /// Returns [`FabricError::BelOccupied`] if the bel already hosts a
    /// cell. Rebinding requires an explicit [`unbind`](Self::unbind) first.
    pub fn bind(&mut self, bel: FabricBelId, cell: NetlistCellId) -> Result<(), FabricError> {
        let slot = &mut self.bindings[bel.as_raw() as usize];
        if slot.is_some() {
            return Err(FabricError::BelOccupied(
                self.bels[bel.as_raw() as usize].name.clone(),
            ));
        }
        *slot = Some(cell);
        Ok(())
    }

    /// Clears the binding of `bel`, returning the cell that occupied it.
    pub fn unbind(&mut self, bel: FabricBelId) -> Option<NetlistCellId> {
        self.bindings[bel.as_raw() as usize].take()
    }

    /// Builds a small fabric with the site menu of an iCE40-class device:
    /// interior logic tiles of [`LOGIC_SITES_PER_TILE`] sites, paired IO
    /// sites along the perimeter, [`GLOBAL_NETWORK_COUNT`] global buffer
    /// sites split across the corner tiles, and one PLL whose clock
    /// outputs share the input-data wires of the IO pair above it.
    ///
    /// The IO tile at `(0, 1)` is left without package pins, standing in
    /// for the config-only pads real packages have. Requires
    /// `width >= 4 && height >= 4`.
    pub fn ice40_like(width: u32, height: u32) -> Fabric {
        assert!(
            width >= 4 && height >= 4,
            "ice40_like needs at least a 4x4 grid"
        );

        let mut b = FabricBuilder::new();
        let mut package_pin = 0u32;
        let mut network = 0u32;

        for y in 0..height {
            for x in 0..width {
                let on_edge_x = x == 0 || x == width - 1;
                let on_edge_y = y == 0 || y == height - 1;
                if on_edge_x && on_edge_y {
                    // Corner tiles carry two global buffer sites each.
                    for z in 0..GLOBAL_NETWORK_COUNT / 4 {
                        let gb = b
                            .add_bel(
                                format!("X{x}/Y{y}/gb{z}"),
                                BelType::GlobalBufferSite,
                                Location::new(x, y, z),
                            )
                            .expect("corner tiles are empty");
                        b.set_global_network(gb, network)
                            .expect("gb site accepts a network index");
                        network += 1;
                    }
                } else if on_edge_x || on_edge_y {
                    let mut din_wires = [FabricWireId::from_raw(0); 2];
                    for z in 0..2 {
                        let io = b
                            .add_bel(
                                format!("X{x}/Y{y}/io{z}"),
                                BelType::IoSite,
                                Location::new(x, y, z),
                            )
                            .expect("edge tiles are empty");
                        let wire = b.add_wire(format!("X{x}/Y{y}/io{z}/d_in_0"));
                        b.connect_pin(io, PinName::DIn0, wire)
                            .expect("fresh io pin");
                        din_wires[z as usize] = wire;
                        if (x, y) != (0, 1) {
                            package_pin += 1;
                            b.set_package_pin(io, format!("P{package_pin}"))
                                .expect("io site accepts a package pin");
                        }
                    }
                    if x == width / 2 && y == 0 {
                        let pll = b
                            .add_bel(
                                format!("X{x}/Y{y}/pll"),
                                BelType::PllSite,
                                Location::new(x, y, 2),
                            )
                            .expect("pll slot is empty");
                        b.connect_pin(pll, PinName::PllOutA, din_wires[0])
                            .expect("fresh pll pin");
                        b.connect_pin(pll, PinName::PllOutB, din_wires[1])
                            .expect("fresh pll pin");
                    }
                } else {
                    for z in 0..LOGIC_SITES_PER_TILE {
                        b.add_bel(
                            format!("X{x}/Y{y}/lc{z}"),
                            BelType::LogicSite,
                            Location::new(x, y, z),
                        )
                        .expect("interior tiles are empty");
                    }
                }
            }
        }

        b.build()
    }
}

impl FabricView for Fabric {
    fn bels_in_tile(&self, x: u32, y: u32) -> Vec<FabricBelId> {
        self.by_tile.get(&(x, y)).cloned().unwrap_or_default()
    }

    fn bound_cell(&self, bel: FabricBelId) -> Option<NetlistCellId> {
        self.bindings[bel.as_raw() as usize]
    }

    fn bel_location(&self, bel: FabricBelId) -> Location {
        self.bels[bel.as_raw() as usize].location
    }

    fn bel_by_location(&self, loc: Location) -> Option<FabricBelId> {
        self.by_location.get(&loc).copied()
    }

    fn bel_type(&self, bel: FabricBelId) -> BelType {
        self.bels[bel.as_raw() as usize].bel_type
    }

    fn bel_pin_wire(&self, bel: FabricBelId, pin: PinName) -> Option<FabricWireId> {
        self.pin_to_wire.get(&(bel, pin)).copied()
    }

    fn wire_bel_pins(&self, wire: FabricWireId) -> Vec<(FabricBelId, PinName)> {
        self.wire_pins[wire.as_raw() as usize].clone()
    }

    fn package_pin(&self, bel: FabricBelId) -> Option<&str> {
        self.bels[bel.as_raw() as usize].package_pin.as_deref()
    }

    fn bel_name(&self, bel: FabricBelId) -> &str {
        &self.bels[bel.as_raw() as usize].name
    }

    fn driven_global_network(&self, bel: FabricBelId) -> Option<u32> {
        self.bels[bel.as_raw() as usize].global_network
    }
}
