//! Top-level legality queries over the current binding snapshot.
//!
//! Two entry points serve the search engine's two questions: is a site
//! legal as currently bound ([`is_bel_location_valid`]), and would a site
//! be legal if a given cell landed there ([`is_valid_bel_for_cell`]). Both
//! are pure reads of the netlist and the fabric view passed in; probing a
//! hypothetical assignment never touches the binding table.

use crate::{gbuf, io, tile};
use floe_fabric::{BelType, FabricBelId, FabricView};
use floe_netlist::{Cell, CellKind, LogicCellSpec, Netlist};

/// Returns whether `bel` is legal under the current bindings.
///
/// For a logic site the whole tile is re-checked, since any occupant can
/// invalidate the shared control set or the input budget. Any other site
/// stands alone: unbound sites are trivially legal, bound ones are checked
/// through [`is_valid_bel_for_cell`].
pub fn is_bel_location_valid(netlist: &Netlist, fabric: &dyn FabricView, bel: FabricBelId) -> bool {
    if fabric.bel_type(bel) == BelType::LogicSite {
        let loc = fabric.bel_location(bel);
        let occupants = tile::tile_logic_occupants(netlist, fabric, loc.x, loc.y, None);
        tile::logic_cells_compatible(netlist, &occupants)
    } else {
        match fabric.bound_cell(bel) {
            None => true,
            Some(id) => is_valid_bel_for_cell(netlist, fabric, netlist.cell(id), bel),
        }
    }
}

/// Returns whether `cell` could legally occupy `bel`.
///
/// Evaluates the hypothetical assignment: `bel`'s own current occupant is
/// ignored and `cell` takes its place, so the search can probe a move
/// before committing it. Cell families with no packing rule are always
/// legal.
///
/// # Panics
///
/// Panics if a logic cell is probed against a non-logic bel (and likewise
/// for the IO and buffer predicates); a type-mismatched probe is caller
/// corruption, and guessing an answer could let an illegal configuration
/// through silently.
pub fn is_valid_bel_for_cell(
    netlist: &Netlist,
    fabric: &dyn FabricView,
    cell: &Cell,
    bel: FabricBelId,
) -> bool {
    match &cell.kind {
        CellKind::Logic(lc) => {
            assert_eq!(
                fabric.bel_type(bel),
                BelType::LogicSite,
                "logic cell '{}' probed against non-logic bel '{}'",
                cell.name,
                fabric.bel_name(bel)
            );
            let loc = fabric.bel_location(bel);
            let mut cells: Vec<&LogicCellSpec> =
                tile::tile_logic_occupants(netlist, fabric, loc.x, loc.y, Some(bel));
            cells.push(lc);
            tile::logic_cells_compatible(netlist, &cells)
        }
        CellKind::Io(io_spec) => io::is_valid_io_bel(netlist, fabric, cell, io_spec, bel),
        CellKind::GlobalBuffer(gb) => gbuf::is_valid_gbuf_bel(netlist, fabric, cell, gb, bel),
        CellKind::Pll(_) | CellKind::Bram | CellKind::Other => true,
    }
}
