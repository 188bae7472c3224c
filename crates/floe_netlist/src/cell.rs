//! Netlist cells and their placement-relevant configuration.
//!
//! [`CellKind`] is a tagged sum over the cell families the placement
//! subsystem distinguishes. Each variant carries the configuration the
//! legality rules read: control-set nets and input fan-in for logic cells,
//! differential mode and the pin-mode mask for IO cells, the pad-input
//! shortcut flag for global buffers, and the output configuration for PLLs.
//! Everything else in the design is [`CellKind::Bram`] or [`CellKind::Other`]
//! and carries no packing rule.

use crate::ids::{NetlistCellId, NetlistNetId};
use crate::pins::PinName;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Attribute key naming the IO site a PLL reserves for its pad input.
///
/// When a PLL sources its reference clock from a package pad, the pad's IO
/// cell must land on this exact site even though the PLL drives the site's
/// input-data path.
pub const ATTR_PAD_INPUT_BEL: &str = "PAD_INPUT_BEL";

/// Placement-relevant configuration of a logic cell (LUT + optional DFF).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogicCellSpec {
    /// Whether the cell uses its flip-flop.
    pub dff_enable: bool,
    /// Whether the flip-flop clocks on the negative edge.
    pub neg_clk: bool,
    /// Clock-enable net of the flip-flop, if connected.
    pub cen: Option<NetlistNetId>,
    /// Clock net of the flip-flop, if connected.
    pub clk: Option<NetlistNetId>,
    /// Set/reset net of the flip-flop, if connected.
    pub sr: Option<NetlistNetId>,
    /// Number of LUT inputs fed from tile-local routing.
    pub input_count: u32,
}

/// 6-bit IO pin-mode mask.
///
/// The raw mask is what the bitstream encodes; the placement rules only
/// care about three derived facts, exposed as named predicates. Bit 0
/// selects the unregistered input path, bits 2–5 configure the output
/// stage (bits 2–3 pick the output data source, bits 4–5 the output
/// enable mode).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IoPinType(u8);

/// Bit 0: set when the input path is unregistered (no input clock needed).
const INPUT_UNREGISTERED_BIT: u8 = 0x01;
/// Bits 4–5: output-enable mode field.
const OUTPUT_ENABLE_MASK: u8 = 0x30;
/// Bits 2–5: full output-stage configuration field.
const OUTPUT_MODE_MASK: u8 = 0x3c;
/// Bits 2–3: output data source field.
const OUTPUT_SELECT_MASK: u8 = 0x0c;
/// Output data source value selecting the unregistered DOUT path.
const OUTPUT_SELECT_UNREGISTERED: u8 = 0x08;

impl IoPinType {
    /// Creates a pin mode from the low 6 bits of `bits`.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & 0x3f)
    }

    /// Returns the raw 6-bit mask.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether this mode registers the input path and so needs the
    /// shared input clock.
    pub fn needs_input_clock(self) -> bool {
        self.0 & INPUT_UNREGISTERED_BIT == 0
    }

    /// Whether this mode registers any part of the output stage and so
    /// needs the shared output clock.
    pub fn needs_output_clock(self) -> bool {
        (self.0 & OUTPUT_ENABLE_MASK) == OUTPUT_ENABLE_MASK
            || ((self.0 & OUTPUT_MODE_MASK) != 0
                && (self.0 & OUTPUT_SELECT_MASK) != OUTPUT_SELECT_UNREGISTERED)
    }

    /// Whether this mode needs the shared clock enable (it does whenever
    /// either clocked path is in use).
    pub fn needs_clock_enable(self) -> bool {
        self.needs_input_clock() || self.needs_output_clock()
    }
}

/// Placement-relevant configuration of an IO cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IoCellSpec {
    /// Whether the cell is a differential (LVDS) IO occupying a site pair.
    pub lvds: bool,
    /// The 6-bit pin-mode mask.
    pub pin_type: IoPinType,
}

/// Placement-relevant configuration of a global buffer cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalBufferSpec {
    /// Whether the buffer forwards a package pad input onto the global
    /// network. Pad-input buffers are pinned to the pad's site by
    /// construction and are exempt from the network parity rules.
    pub for_pad_in: bool,
}

/// Placement-relevant configuration of a PLL cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PllSpec {
    /// Whether the second clock output is configured. Single-output
    /// variants leave the `PllOutB` path dark, so IO cells may still use
    /// the input-data path it would otherwise occupy.
    pub dual_output: bool,
}

/// The family of a netlist cell, with per-family configuration.
///
/// The legality predicate matches on this exhaustively; there is no
/// runtime type tag to assert against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellKind {
    /// A logic cell: one LUT plus an optional DFF sharing tile controls.
    Logic(LogicCellSpec),
    /// An IO cell bound to a package pad.
    Io(IoCellSpec),
    /// A buffer driving a dedicated low-skew global network.
    GlobalBuffer(GlobalBufferSpec),
    /// A phase-locked loop clock synthesizer.
    Pll(PllSpec),
    /// A block RAM primitive.
    Bram,
    /// Any other primitive with no modeled packing rule.
    Other,
}

/// A cell in the netlist: one instance to be mapped onto exactly one bel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// The unique ID of this cell.
    pub id: NetlistCellId,
    /// Human-readable cell name (e.g. "lut_0", "io_clk_pad").
    pub name: String,
    /// The cell family and its configuration.
    pub kind: CellKind,
    /// Port-to-net map. A present key with `None` is a connected port
    /// left unwired; an absent key is a port the cell does not have.
    pub ports: HashMap<PinName, Option<NetlistNetId>>,
    /// Free-form string attributes (constraint annotations, site hints).
    pub attrs: HashMap<String, String>,
}

impl Cell {
    /// Creates a cell with no ports or attributes. The ID is assigned when
    /// the cell is added to a [`Netlist`](crate::Netlist).
    pub fn new(name: impl Into<String>, kind: CellKind) -> Self {
        Self {
            id: NetlistCellId::from_raw(0),
            name: name.into(),
            kind,
            ports: HashMap::new(),
            attrs: HashMap::new(),
        }
    }

    /// Connects `pin` to `net`, creating the port if needed.
    pub fn connect(&mut self, pin: PinName, net: NetlistNetId) {
        self.ports.insert(pin, Some(net));
    }

    /// Adds `pin` as a port with no net attached.
    pub fn add_unconnected_port(&mut self, pin: PinName) {
        self.ports.insert(pin, None);
    }

    /// Returns the net attached to `pin`, or `None` if the port is absent
    /// or unwired.
    pub fn port_net(&self, pin: PinName) -> Option<NetlistNetId> {
        self.ports.get(&pin).copied().flatten()
    }

    /// Returns the string attribute stored under `key`.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    /// Stores `value` as the string attribute under `key`.
    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(key.into(), value.into());
    }

    /// Returns the bel name this cell reserves as a PLL pad input, if any.
    pub fn pad_input_bel(&self) -> Option<&str> {
        self.attr(ATTR_PAD_INPUT_BEL)
    }
}
