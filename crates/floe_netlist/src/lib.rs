//! Netlist data model for the Floe placement subsystem.
//!
//! Defines the cells, nets, ports, and attributes the placement engine and
//! its legality oracle operate on. The [`Netlist`] is a flat arena container:
//! cells and nets are stored in vectors and referenced everywhere else by
//! opaque `u32` IDs, so that identity comparisons (the basis of every
//! control-sharing rule) are a single integer compare.
//!
//! The netlist is constructed once from the synthesized design before the
//! search starts; during the search only bel bindings change, which live in
//! the fabric model, not here.

#![warn(missing_docs)]

pub mod cell;
pub mod ids;
pub mod net;
pub mod pins;

pub use cell::{
    Cell, CellKind, GlobalBufferSpec, IoCellSpec, IoPinType, LogicCellSpec, PllSpec,
    ATTR_PAD_INPUT_BEL,
};
pub use ids::{NetlistCellId, NetlistNetId};
pub use net::Net;
pub use pins::PinName;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The flat netlist container.
///
/// Cells and nets are appended through [`add_cell`](Self::add_cell) /
/// [`add_net`](Self::add_net), which assign their IDs. Name lookup goes
/// through auxiliary indices that are skipped during serialization and
/// rebuilt with [`rebuild_indices`](Self::rebuild_indices).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Netlist {
    /// All cells in the netlist.
    pub cells: Vec<Cell>,
    /// All nets in the netlist.
    pub nets: Vec<Net>,
    /// Auxiliary index: cell name to ID (rebuilt on deserialization).
    #[serde(skip)]
    pub cell_by_name: HashMap<String, NetlistCellId>,
    /// Auxiliary index: net name to ID (rebuilt on deserialization).
    #[serde(skip)]
    pub net_by_name: HashMap<String, NetlistNetId>,
}

impl Netlist {
    /// Creates an empty netlist.
    pub fn new() -> Self {
        Self {
            cells: Vec::new(),
            nets: Vec::new(),
            cell_by_name: HashMap::new(),
            net_by_name: HashMap::new(),
        }
    }

    /// Adds a cell and returns its ID.
    pub fn add_cell(&mut self, mut cell: Cell) -> NetlistCellId {
        let id = NetlistCellId::from_raw(self.cells.len() as u32);
        cell.id = id;
        self.cell_by_name.insert(cell.name.clone(), id);
        self.cells.push(cell);
        id
    }

    /// Adds a net and returns its ID.
    pub fn add_net(&mut self, mut net: Net) -> NetlistNetId {
        let id = NetlistNetId::from_raw(self.nets.len() as u32);
        net.id = id;
        self.net_by_name.insert(net.name.clone(), id);
        self.nets.push(net);
        id
    }

    /// Returns the cell with the given ID.
    pub fn cell(&self, id: NetlistCellId) -> &Cell {
        &self.cells[id.as_raw() as usize]
    }

    /// Returns a mutable reference to the cell with the given ID.
    pub fn cell_mut(&mut self, id: NetlistCellId) -> &mut Cell {
        &mut self.cells[id.as_raw() as usize]
    }

    /// Returns the net with the given ID.
    pub fn net(&self, id: NetlistNetId) -> &Net {
        &self.nets[id.as_raw() as usize]
    }

    /// Returns a mutable reference to the net with the given ID.
    pub fn net_mut(&mut self, id: NetlistNetId) -> &mut Net {
        &mut self.nets[id.as_raw() as usize]
    }

    /// Returns the number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Returns the number of nets.
    pub fn net_count(&self) -> usize {
        self.nets.len()
    }

    /// Rebuilds auxiliary indices after deserialization.
    pub fn rebuild_indices(&mut self) {
        self.cell_by_name.clear();
        for (i, cell) in self.cells.iter().enumerate() {
            self.cell_by_name
                .insert(cell.name.clone(), NetlistCellId::from_raw(i as u32));
        }
        self.net_by_name.clear();
        for (i, net) in self.nets.iter().enumerate() {
            self.net_by_name
                .insert(net.name.clone(), NetlistNetId::from_raw(i as u32));
        }
    }
}

impl Default for Netlist {
    fn default() -> Self {
        Self::new()
    }
}
