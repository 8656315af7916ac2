//! Decoding of power-save confirmation messages from the firmware.

use crate::PsError;

/// Byte offset of the 16-bit confirmation-type field in a firmware
/// confirmation message.
///
/// Offset and byte order are part of the deployed firmware contract and
/// must match it exactly.
pub const CONFIRM_TYPE_OFFSET: usize = 12;

/// Confirmation type sent after the radio entered power save.
pub const SLEEP_CONFIRM: u16 = 1;

/// Confirmation type sent after the radio woke back up.
pub const WAKEUP_CONFIRM: u16 = 2;

/// A decoded power-save confirmation from the firmware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationEvent {
    /// The firmware confirmed that the radio entered power save.
    SleepConfirmed,
    /// The firmware confirmed that the radio is awake again.
    WakeupConfirmed,
    /// The confirmation type is not known to this driver.
    Unrecognized(u16),
}

impl ConfirmationEvent {
    /// Decodes the confirmation type from a raw firmware message buffer.
    ///
    /// Only the type field is consumed here; the rest of the buffer is
    /// opaque to the power-save path. An unknown type still decodes (as
    /// [`ConfirmationEvent::Unrecognized`]), but a buffer too short to
    /// contain the field is rejected.
    pub fn parse(msg: &[u8]) -> Result<Self, PsError> {
        let bytes = msg
            .get(CONFIRM_TYPE_OFFSET..CONFIRM_TYPE_OFFSET + 2)
            .ok_or(PsError::TruncatedConfirm { len: msg.len() })?;

        let raw = u16::from_le_bytes(bytes.try_into().unwrap());

        Ok(match raw {
            SLEEP_CONFIRM => ConfirmationEvent::SleepConfirmed,
            WAKEUP_CONFIRM => ConfirmationEvent::WakeupConfirmed,
            raw => ConfirmationEvent::Unrecognized(raw),
        })
    }
}

/// Builds a minimal confirmation message carrying the given type.
///
/// Real firmware messages carry more than the type field, but everything
/// outside of it is opaque to the power-save path, so simulated firmware
/// and tests can get away with zeroes.
pub fn confirm_frame(raw: u16) -> [u8; CONFIRM_TYPE_OFFSET + 2] {
    let mut frame = [0; CONFIRM_TYPE_OFFSET + 2];
    frame[CONFIRM_TYPE_OFFSET..].copy_from_slice(&raw.to_le_bytes());
    frame
}
