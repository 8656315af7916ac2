//! Power-save negotiation with an attached wireless radio firmware.
//!
//! The radio may only sleep once the firmware has confirmed an enable
//! request, and it stays asleep until a disable request is confirmed in
//! turn. [`PsController`] tracks that handshake: it serializes the
//! outgoing requests through an injected [`Transport`] and advances its
//! state from the asynchronous confirmation messages the firmware sends
//! back.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(unreachable_pub)]

mod confirm;
mod controller;
mod error;
mod params;
mod state;
mod transport;

pub use crate::{
    confirm::{confirm_frame, ConfirmationEvent, CONFIRM_TYPE_OFFSET, SLEEP_CONFIRM, WAKEUP_CONFIRM},
    controller::{PsController, StateChangeHandler},
    error::PsError,
    params::{PsParams, SleepType},
    state::PsState,
    transport::{ChannelTransport, Transport},
};
