//! The power-save negotiation state of the radio.

use std::fmt;

/// Where the radio currently stands in the power-save negotiation.
///
/// At most one request is outstanding at any time: the two `*RequestSent`
/// states mean a request is on the wire and the matching confirmation has
/// not arrived yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PsState {
    /// Power save is inactive and the radio is fully awake.
    None,
    /// An enable request was sent, awaiting the firmware's confirmation.
    EnableRequestSent,
    /// Power save is active and confirmed by the firmware.
    Enabled,
    /// A disable request was sent, awaiting the firmware's confirmation.
    DisableRequestSent,
}

impl fmt::Display for PsState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PsState::None => write!(f, "none"),
            PsState::EnableRequestSent => write!(f, "enable request sent"),
            PsState::Enabled => write!(f, "enabled"),
            PsState::DisableRequestSent => write!(f, "disable request sent"),
        }
    }
}

impl Default for PsState {
    fn default() -> Self {
        PsState::None
    }
}
