//! Legality of IO cells on paired pad sites.
//!
//! IO sites come in pairs sharing one tile: a differential (LVDS) IO owns
//! both sites, and two single-ended IOs sharing a pair must agree on the
//! clock and enable nets their pin modes require. A site whose input-data
//! path is claimed by a PLL output is additionally off limits to any IO
//! cell that reads the pad, unless the PLL explicitly reserves the site
//! for its pad input.

use floe_fabric::{BelType, FabricBelId, FabricView, Location};
use floe_netlist::{Cell, CellKind, IoCellSpec, Netlist, PinName};

/// Returns whether the IO cell `cell` may occupy `bel`.
///
/// # Panics
///
/// Panics if `bel` is not an IO site, or if the paired site is occupied
/// by something that is not an IO cell; both mean the caller's binding
/// table is corrupt.
pub(crate) fn is_valid_io_bel(
    netlist: &Netlist,
    fabric: &dyn FabricView,
    cell: &Cell,
    io: &IoCellSpec,
    bel: FabricBelId,
) -> bool {
    assert_eq!(
        fabric.bel_type(bel),
        BelType::IoSite,
        "IO cell '{}' probed against non-IO bel '{}'",
        cell.name,
        fabric.bel_name(bel)
    );

    // A bound PLL driving this site's input-data wire claims the pad for
    // its reference input. An IO cell that reads the pad may land here
    // only if the PLL names this exact site as its pad input.
    if let Some(wire) = fabric.bel_pin_wire(bel, PinName::DIn0) {
        for (sibling, pin) in fabric.wire_bel_pins(wire) {
            if pin != PinName::PllOutA && pin != PinName::PllOutB {
                continue;
            }
            let Some(pll_id) = fabric.bound_cell(sibling) else {
                break;
            };
            let pll = netlist.cell(pll_id);
            if pin == PinName::PllOutB && !drives_second_pll_output(pll) {
                break;
            }
            if cell.port_net(PinName::DIn0).is_none() && cell.port_net(PinName::DIn1).is_none() {
                break;
            }
            return pll.pad_input_bel() == Some(fabric.bel_name(bel));
        }
    }

    let loc = fabric.bel_location(bel);

    if io.lvds {
        // A differential pair anchors at z 0 and owns the complement site.
        if loc.z != 0 {
            return false;
        }
        let complement = Location::new(loc.x, loc.y, 1);
        if fabric
            .bel_by_location(complement)
            .and_then(|b| fabric.bound_cell(b))
            .is_some()
        {
            return false;
        }
    } else {
        let complement = Location::new(loc.x, loc.y, 1 - loc.z);
        let paired = fabric
            .bel_by_location(complement)
            .and_then(|b| fabric.bound_cell(b))
            .map(|id| netlist.cell(id));
        if let Some(other) = paired {
            let CellKind::Io(other_io) = &other.kind else {
                panic!(
                    "cell '{}' bound to IO site at {} is not an IO cell",
                    other.name, complement
                );
            };
            if other_io.lvds {
                return false;
            }
            if !shared_control_nets_agree(cell, io, other, other_io) {
                return false;
            }
        }
    }

    fabric.package_pin(bel).is_some()
}

/// Whether a cell bound at a PLL output is actually driving its second
/// clock output.
fn drives_second_pll_output(cell: &Cell) -> bool {
    matches!(&cell.kind, CellKind::Pll(pll) if pll.dual_output)
}

/// Checks the three net classes two paired single-ended IOs share.
///
/// For each class, a side that needs it must see the identical net on the
/// other side, or nothing at all when the other side neither needs the
/// class nor has a net wired there.
fn shared_control_nets_agree(
    a: &Cell,
    a_io: &IoCellSpec,
    b: &Cell,
    b_io: &IoCellSpec,
) -> bool {
    let classes = [
        (
            PinName::InputClk,
            a_io.pin_type.needs_input_clock(),
            b_io.pin_type.needs_input_clock(),
        ),
        (
            PinName::OutputClk,
            a_io.pin_type.needs_output_clock(),
            b_io.pin_type.needs_output_clock(),
        ),
        (
            PinName::ClockEnable,
            a_io.pin_type.needs_clock_enable(),
            b_io.pin_type.needs_clock_enable(),
        ),
    ];

    for (pin, a_needs, b_needs) in classes {
        let a_net = a.port_net(pin);
        let b_net = b.port_net(pin);
        if a_needs && a_net != b_net && (b_needs || b_net.is_some()) {
            return false;
        }
        if b_needs && b_net != a_net && (a_needs || a_net.is_some()) {
            return false;
        }
    }
    true
}
