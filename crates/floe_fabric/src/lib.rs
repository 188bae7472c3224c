//! Fabric model for the Floe placement subsystem.
//!
//! This crate describes the physical side of placement: bels (sites), their
//! grid locations and tile grouping, package pins, global buffer networks,
//! and the little bit of wiring the legality rules trace (IO input-data
//! paths shared with PLL outputs). It also owns the binding table mapping
//! bels to the cells occupying them.
//!
//! The oracle in `floe_place` sees only the read-only [`FabricView`],
//! passed explicitly into every call, while the search engine mutates
//! bindings through the concrete [`Fabric`]. Tests exercise the oracle
//! against either hand-built [`FabricBuilder`] fixtures or the canned
//! [`Fabric::ice40_like`] grid.

#![warn(missing_docs)]

pub mod ids;
pub mod model;
pub mod types;
pub mod view;

pub use ids::{FabricBelId, FabricWireId};
pub use model::{Fabric, FabricBuilder, FabricError, GLOBAL_NETWORK_COUNT, LOGIC_SITES_PER_TILE};
pub use types::{Bel, BelType, Location, Wire};
pub use view::FabricView;
