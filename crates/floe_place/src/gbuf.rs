//! Legality of global buffer cells on network-driving sites.
//!
//! Each global buffer site drives one fixed low-skew network, and the
//! networks are split by parity between the two control roles: reset-class
//! nets may only ride even-indexed networks, enable-class nets odd ones.

use floe_fabric::{BelType, FabricBelId, FabricView};
use floe_netlist::{Cell, GlobalBufferSpec, Netlist, PinName};

/// Returns whether the global buffer cell `cell` may occupy `bel`.
///
/// Pad-input buffers are exempt: they are created pinned to their pad's
/// buffer site and carry no routed output net of their own.
///
/// # Panics
///
/// Panics if `bel` is not a global buffer site, if a non-pad-input buffer
/// has no output net, or if the site has no driven-network index; all
/// three mean the netlist or fabric handed to the oracle is malformed.
pub(crate) fn is_valid_gbuf_bel(
    netlist: &Netlist,
    fabric: &dyn FabricView,
    cell: &Cell,
    gb: &GlobalBufferSpec,
    bel: FabricBelId,
) -> bool {
    assert_eq!(
        fabric.bel_type(bel),
        BelType::GlobalBufferSite,
        "global buffer cell '{}' probed against non-buffer bel '{}'",
        cell.name,
        fabric.bel_name(bel)
    );

    if gb.for_pad_in {
        return true;
    }

    let net_id = cell
        .port_net(PinName::GlobalBufferOutput)
        .unwrap_or_else(|| panic!("global buffer cell '{}' has no output net", cell.name));
    let net = netlist.net(net_id);
    let network = fabric.driven_global_network(bel).unwrap_or_else(|| {
        panic!(
            "global buffer site '{}' has no driven network index",
            fabric.bel_name(bel)
        )
    });

    if net.is_reset && net.is_enable {
        false
    } else if net.is_reset {
        network % 2 == 0
    } else if net.is_enable {
        network % 2 == 1
    } else {
        true
    }
}
