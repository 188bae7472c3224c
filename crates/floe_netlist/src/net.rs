//! Nets and their placement-relevant classification.

use crate::ids::NetlistNetId;
use serde::{Deserialize, Serialize};

/// A net in the netlist: one signal from a driver to its sinks.
///
/// The placement rules never look at a net's fan-out; they only read the
/// three classification flags. `is_global` marks nets promoted onto the
/// dedicated low-skew distribution network, which exempts them from the
/// per-tile local input budget. `is_reset`/`is_enable` classify which
/// control role a globally buffered net plays, constraining which global
/// networks may carry it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Net {
    /// The unique ID of this net. ID equality is signal identity.
    pub id: NetlistNetId,
    /// Human-readable net name (e.g. "clk", "rst_n").
    pub name: String,
    /// Whether the net rides the global low-skew network.
    pub is_global: bool,
    /// Whether the net is used as a set/reset control somewhere.
    pub is_reset: bool,
    /// Whether the net is used as a clock-enable control somewhere.
    pub is_enable: bool,
}

impl Net {
    /// Creates a local, unclassified net. The ID is assigned when the net
    /// is added to a [`Netlist`](crate::Netlist).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: NetlistNetId::from_raw(0),
            name: name.into(),
            is_global: false,
            is_reset: false,
            is_enable: false,
        }
    }
}
