//! Desirability scoring for candidate logic sites.
//!
//! Advisory only: the search consults the score when choosing among
//! already-legal candidates, never to decide legality.

use floe_fabric::{BelType, FabricBelId, FabricView, LOGIC_SITES_PER_TILE};
use floe_netlist::{Cell, CellKind};

/// Scores how desirable `bel` is as a home for `cell`.
///
/// Non-logic cells have no preference and score 0. A logic cell without a
/// DFF can join any tile, so every site scores the full tile capacity. A
/// DFF-using cell scores the capacity minus the number of occupied sibling
/// sites, which steers the search toward finishing partially filled,
/// control-compatible slices before opening fresh ones. The decrement is
/// left unclamped; sibling count is bounded by the tile size.
///
/// # Panics
///
/// Panics if a logic cell is scored against a non-logic bel.
pub fn score_bel_for_cell(fabric: &dyn FabricView, cell: &Cell, bel: FabricBelId) -> i32 {
    let CellKind::Logic(lc) = &cell.kind else {
        return 0;
    };

    assert_eq!(
        fabric.bel_type(bel),
        BelType::LogicSite,
        "logic cell '{}' scored against non-logic bel '{}'",
        cell.name,
        fabric.bel_name(bel)
    );

    if !lc.dff_enable {
        return LOGIC_SITES_PER_TILE as i32;
    }

    let loc = fabric.bel_location(bel);
    let occupied = fabric
        .bels_in_tile(loc.x, loc.y)
        .into_iter()
        .filter(|&other| other != bel && fabric.bound_cell(other).is_some())
        .count();

    LOGIC_SITES_PER_TILE as i32 - occupied as i32
}
