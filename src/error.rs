//! Error kinds reported by the power-save controller.

use thiserror::Error;

use crate::PsState;

/// The ways a power-save operation can fail.
///
/// None of these are fatal: after any operation the controller is either
/// unchanged or in the intended next state, never partially updated.
#[derive(Debug, Error)]
pub enum PsError {
    /// The requested operation is not legal in the current state.
    #[error("operation not allowed in {current} state")]
    InvalidStateTransition {
        /// The state the controller was in when the operation was rejected.
        current: PsState,
    },
    /// The transport failed to dispatch the request to the firmware.
    #[error(transparent)]
    Transport(#[from] anyhow::Error),
    /// The firmware sent a confirmation type this driver does not know.
    #[error("unknown confirmation type {raw:#06x} in {current} state")]
    UnrecognizedConfirmation {
        /// The raw 16-bit confirmation type from the message buffer.
        raw: u16,
        /// The state the controller was in when the message arrived.
        current: PsState,
    },
    /// The confirmation buffer is too short to contain the type field.
    #[error("confirmation message of {len} bytes is too short")]
    TruncatedConfirm {
        /// The length of the received buffer.
        len: usize,
    },
}
