//! Tile-level compatibility of co-resident logic cells.
//!
//! All logic sites of one tile share a single control set: every DFF-using
//! cell in the tile must agree on the clock-enable, clock, and set/reset
//! nets and on the clock polarity. The tile also has a fixed budget of
//! local routing inputs, consumed by each cell's LUT fan-in and by each
//! distinct non-global control net.

use floe_fabric::{FabricBelId, FabricView};
use floe_netlist::{CellKind, LogicCellSpec, Netlist, NetlistNetId};

/// Local routing inputs available to the logic sites of one tile.
///
/// Nets on the global low-skew network bypass local routing and are free.
pub const TILE_LOCAL_INPUT_BUDGET: u32 = 32;

/// Returns whether `cells` can legally share one logic tile.
///
/// Single pass: the first DFF-using cell fixes the tile control set and
/// pays one budget unit per distinct non-global control net; every later
/// DFF-using cell must reference the identical nets (compared by net ID,
/// never by value) with the same clock polarity. Each cell's LUT fan-in
/// is added to the running budget, and the group is compatible iff the
/// total stays within [`TILE_LOCAL_INPUT_BUDGET`].
///
/// A group with no DFF users has no control constraint and only the
/// budget check applies. Never fails on well-formed input; the answer is
/// always a plain boolean.
pub fn logic_cells_compatible(netlist: &Netlist, cells: &[&LogicCellSpec]) -> bool {
    let mut control: Option<ControlSet> = None;
    let mut locals = 0u32;

    for lc in cells {
        if lc.dff_enable {
            let set = ControlSet {
                cen: lc.cen,
                clk: lc.clk,
                sr: lc.sr,
                neg_clk: lc.neg_clk,
            };
            match control {
                None => {
                    locals += local_control_net_count(netlist, &set);
                    control = Some(set);
                }
                Some(first) => {
                    if first != set {
                        return false;
                    }
                }
            }
        }

        locals += lc.input_count;
    }

    locals <= TILE_LOCAL_INPUT_BUDGET
}

/// The control signals a tile's DFF-using logic cells must share.
#[derive(Clone, Copy, PartialEq, Eq)]
struct ControlSet {
    cen: Option<NetlistNetId>,
    clk: Option<NetlistNetId>,
    sr: Option<NetlistNetId>,
    neg_clk: bool,
}

/// Counts the distinct non-global nets of a control set, each once.
fn local_control_net_count(netlist: &Netlist, set: &ControlSet) -> u32 {
    let nets = [set.cen, set.clk, set.sr];
    let mut count = 0;
    for (i, net) in nets.iter().enumerate() {
        if let Some(id) = net {
            if !netlist.net(*id).is_global && !nets[..i].contains(net) {
                count += 1;
            }
        }
    }
    count
}

/// Collects the logic-cell payloads bound in the tile at `(x, y)`,
/// skipping `exclude` if given.
///
/// # Panics
///
/// Panics if a bound occupant of the tile is not a logic cell; a foreign
/// cell on a logic site means the binding table is corrupt, and answering
/// either way would let an illegal configuration pass unnoticed.
pub(crate) fn tile_logic_occupants<'a>(
    netlist: &'a Netlist,
    fabric: &dyn FabricView,
    x: u32,
    y: u32,
    exclude: Option<FabricBelId>,
) -> Vec<&'a LogicCellSpec> {
    let mut occupants = Vec::with_capacity(floe_fabric::LOGIC_SITES_PER_TILE as usize);
    for bel in fabric.bels_in_tile(x, y) {
        if Some(bel) == exclude {
            continue;
        }
        let Some(cell_id) = fabric.bound_cell(bel) else {
            continue;
        };
        let cell = netlist.cell(cell_id);
        match &cell.kind {
            CellKind::Logic(lc) => occupants.push(lc),
            _ => panic!(
                "cell '{}' bound to logic site '{}' is not a logic cell",
                cell.name,
                fabric.bel_name(bel)
            ),
        }
    }
    occupants
}
