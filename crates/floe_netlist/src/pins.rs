//! Pin and port names shared between the netlist and the fabric.
//!
//! [`PinName`] covers the fabric-significant pins the placement subsystem
//! inspects: the IO input-data and shared-clock ports, the global buffer
//! output, and the PLL clock outputs. Cell port maps and fabric bel-pin
//! connectivity are both keyed by this enum.

use serde::{Deserialize, Serialize};

/// A named pin on a cell or a bel.
///
/// The same name space is used for cell ports (e.g. an IO cell's
/// `InputClk` port) and for bel pins (e.g. the `PllOutA` pin of a PLL
/// site), mirroring how the two meet on a shared wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PinName {
    /// Primary input-data pin of an IO site (pad-to-fabric path 0).
    DIn0,
    /// Secondary input-data pin of an IO site (pad-to-fabric path 1).
    DIn1,
    /// Shared input-path clock of a paired IO site.
    InputClk,
    /// Shared output-path clock of a paired IO site.
    OutputClk,
    /// Shared clock enable of a paired IO site.
    ClockEnable,
    /// Output of a global buffer cell onto a low-skew network.
    GlobalBufferOutput,
    /// First clock output of a PLL site.
    PllOutA,
    /// Second clock output of a PLL site (dual-output variants only).
    PllOutB,
}
