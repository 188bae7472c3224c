//! Placement legality and desirability oracle for the Floe PnR flow.
//!
//! The annealing search proposes bel assignments; this crate answers, for
//! each proposal, whether it is legal on this fabric family and how
//! desirable it is. The rules it encodes are the dense, fabric-specific
//! ones: shared control sets and the local input budget within a logic
//! tile, differential-IO site pairing, clock and enable sharing between
//! paired IO sites, PLL pad-input conflicts, and parity-constrained
//! global network assignment for buffer cells.
//!
//! Every operation is a pure, re-entrant read over an explicit
//! [`Netlist`](floe_netlist::Netlist) and
//! [`FabricView`](floe_fabric::FabricView) pair: the same snapshot always
//! yields the same answer, and a hypothetical probe never mutates binding
//! state. Illegality is the routine outcome of most calls during a search
//! and is reported as a plain `false` or a low score, never as an error;
//! only a type-mismatched probe (caller corruption) aborts.
//!
//! # Operations
//!
//! - [`is_bel_location_valid`] — is this site legal as currently bound?
//! - [`is_valid_bel_for_cell`] — would this site be legal for this cell?
//! - [`score_bel_for_cell`] — how desirable is this site for this cell?
//! - [`logic_cells_compatible`] — can these logic cells share a tile?

#![warn(missing_docs)]

mod gbuf;
mod io;
mod legality;
mod score;
mod tile;

pub use legality::{is_bel_location_valid, is_valid_bel_for_cell};
pub use score::score_bel_for_cell;
pub use tile::{logic_cells_compatible, TILE_LOCAL_INPUT_BUDGET};
