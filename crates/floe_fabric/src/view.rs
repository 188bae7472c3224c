//! The read-only fabric query interface consumed by the oracle.

use crate::ids::{FabricBelId, FabricWireId};
use crate::types::{BelType, Location};
use floe_netlist::{NetlistCellId, PinName};

/// Read-only view of the fabric and its current cell bindings.
///
/// This is the entire surface the legality and desirability predicates see:
/// they take a `&dyn FabricView` explicitly on every call, so the same
/// snapshot question always yields the same answer and the predicates stay
/// testable against hand-built fixtures. Binding mutation is not part of
/// this trait; it belongs to the search engine, which owns the concrete
/// [`Fabric`](crate::Fabric).
pub trait FabricView {
    /// Returns the bels of the tile at `(x, y)`, ordered by z sub-index.
    fn bels_in_tile(&self, x: u32, y: u32) -> Vec<FabricBelId>;

    /// Returns the cell currently bound to `bel`, if any.
    fn bound_cell(&self, bel: FabricBelId) -> Option<NetlistCellId>;

    /// Returns the grid position of `bel`.
    fn bel_location(&self, bel: FabricBelId) -> Location;

    /// Returns the bel at the given position, if one exists.
    fn bel_by_location(&self, loc: Location) -> Option<FabricBelId>;

    /// Returns the functional type of `bel`.
    fn bel_type(&self, bel: FabricBelId) -> BelType;

    /// Returns the wire attached to the given pin of `bel`, if the pin is
    /// wired in this fabric.
    fn bel_pin_wire(&self, bel: FabricBelId, pin: PinName) -> Option<FabricWireId>;

    /// Returns every `(bel, pin)` attached to `wire`.
    fn wire_bel_pins(&self, wire: FabricWireId) -> Vec<(FabricBelId, PinName)>;

    /// Returns the package pin bonded to `bel`, if any.
    fn package_pin(&self, bel: FabricBelId) -> Option<&str>;

    /// Returns the instance name of `bel`.
    fn bel_name(&self, bel: FabricBelId) -> &str;

    /// Returns the index of the global network driven from `bel`
    /// (global buffer sites only).
    fn driven_global_network(&self, bel: FabricBelId) -> Option<u32>;
}
