//! The power-save negotiation state machine.

use std::{
    fmt,
    sync::{Mutex, MutexGuard, PoisonError},
};

use crate::{ConfirmationEvent, PsError, PsParams, PsState, Transport};

/// A handler that observes power-save state transitions as `(old, new)`.
pub type StateChangeHandler = Box<dyn FnMut(PsState, PsState) + Send>;

/// Negotiates power save with the radio firmware.
///
/// One controller exists per adapter and owns its single negotiation
/// state. Requests go out through the injected [`Transport`]; the
/// firmware's confirmations come back in through
/// [`PsController::handle_confirm_frame`]. The two sides may run on
/// different threads, so every operation holds an internal lock for its
/// full duration, including the transport send.
pub struct PsController<T> {
    /// The negotiation state, shared between the request and confirm paths.
    state: Mutex<PsState>,
    /// The parameter block the transport reads when building requests.
    params: Mutex<PsParams>,
    /// The link used to dispatch requests to the firmware.
    transport: T,
    /// The observer called after every state transition.
    on_state_change: Mutex<Option<StateChangeHandler>>,
}

impl<T> fmt::Debug for PsController<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("PsController").finish_non_exhaustive()
    }
}

impl<T: Transport> PsController<T> {
    /// Creates a controller for a freshly initialized adapter.
    ///
    /// The state always starts out as [`PsState::None`], regardless of
    /// what the radio was last doing.
    pub fn new(transport: T) -> Self {
        Self::with_params(transport, PsParams::default())
    }

    /// Creates a controller with a non-default parameter block.
    pub fn with_params(transport: T, params: PsParams) -> Self {
        Self {
            state: Mutex::new(PsState::None),
            params: Mutex::new(params),
            transport,
            on_state_change: Mutex::new(None),
        }
    }

    /// Returns the current negotiation state.
    pub fn state(&self) -> PsState {
        *self.lock_state()
    }

    /// Returns a copy of the active parameter block.
    pub fn params(&self) -> PsParams {
        *self.params.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces the parameter block.
    ///
    /// The state machine is not touched. To push the new parameters to
    /// the firmware while power save is active, follow up with
    /// [`PsController::reconfigure_uapsd`].
    pub fn set_params(&self, params: PsParams) {
        *self.params.lock().unwrap_or_else(PoisonError::into_inner) = params;
    }

    /// Sets the observer for state transitions.
    ///
    /// Purely advisory, every transition is also logged. The handler runs
    /// with the controller lock held and must not call back into the
    /// controller.
    pub fn set_state_change_handler(&self, handler: Option<StateChangeHandler>) {
        *self
            .on_state_change
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = handler;
    }

    /// Asks the firmware to let the radio sleep.
    ///
    /// Legal only while power save is fully inactive. Once the request is
    /// on the wire the state advances to [`PsState::EnableRequestSent`]
    /// and stays there until the firmware confirms the sleep.
    pub fn enable(&self) -> Result<(), PsError> {
        let mut state = self.lock_state();

        if *state != PsState::None {
            log::error!("cannot accept an enable request in {} state", *state);
            return Err(PsError::InvalidStateTransition { current: *state });
        }

        if let Err(err) = self.transport.send_ps_request(true) {
            log::error!("failed to send the power-save enable request: {err}");
            return Err(PsError::Transport(err));
        }

        self.transition(&mut state, PsState::EnableRequestSent);

        Ok(())
    }

    /// Asks the firmware to wake the radio back up.
    ///
    /// Legal only while power save is active and confirmed. Once the
    /// request is on the wire the state advances to
    /// [`PsState::DisableRequestSent`] until the firmware confirms the
    /// wakeup.
    pub fn disable(&self) -> Result<(), PsError> {
        let mut state = self.lock_state();

        if *state != PsState::Enabled {
            log::error!("cannot accept a disable request in {} state", *state);
            return Err(PsError::InvalidStateTransition { current: *state });
        }

        if let Err(err) = self.transport.send_ps_request(false) {
            log::error!("failed to send the power-save disable request: {err}");
            return Err(PsError::Transport(err));
        }

        self.transition(&mut state, PsState::DisableRequestSent);

        Ok(())
    }

    /// Restarts the negotiation to push new UAPSD parameters.
    ///
    /// Outside of [`PsState::Enabled`] this returns without doing
    /// anything. Otherwise the firmware is sent a disable request
    /// followed by an enable request; if the disable request cannot be
    /// dispatched, the enable request is not attempted.
    ///
    /// The stored state is left alone: the sequence re-asserts what the
    /// firmware already confirmed, and the confirmations it provokes fall
    /// through the regular ignore paths of [`PsController::on_confirm`].
    pub fn reconfigure_uapsd(&self) -> Result<(), PsError> {
        let state = self.lock_state();

        if *state != PsState::Enabled {
            return Ok(());
        }

        if let Err(err) = self.transport.send_ps_request(false) {
            log::error!("failed to send the power-save disable request: {err}");
            return Err(PsError::Transport(err));
        }

        if let Err(err) = self.transport.send_ps_request(true) {
            log::error!("failed to send the power-save enable request: {err}");
            return Err(PsError::Transport(err));
        }

        Ok(())
    }

    /// Processes a decoded confirmation from the firmware.
    ///
    /// A recognized confirmation that does not match the pending request
    /// is ignored: duplicate or stray confirmations must not corrupt the
    /// state machine. Only a confirmation type unknown to the driver is
    /// an error, and it never changes state either.
    pub fn on_confirm(&self, event: ConfirmationEvent) -> Result<(), PsError> {
        let mut state = self.lock_state();

        match event {
            ConfirmationEvent::SleepConfirmed => {
                if *state == PsState::EnableRequestSent {
                    self.transition(&mut state, PsState::Enabled);
                }
            }
            ConfirmationEvent::WakeupConfirmed => {
                if *state == PsState::DisableRequestSent {
                    self.transition(&mut state, PsState::None);
                }
            }
            ConfirmationEvent::Unrecognized(raw) => {
                let current = *state;
                log::error!("unknown confirmation type {raw:#06x} in {current} state");
                return Err(PsError::UnrecognizedConfirmation { raw, current });
            }
        }

        Ok(())
    }

    /// Decodes a raw confirmation message and processes it.
    ///
    /// This is the entry point for the firmware message layer. Only the
    /// confirmation-type field of the buffer is consumed.
    pub fn handle_confirm_frame(&self, msg: &[u8]) -> Result<(), PsError> {
        self.on_confirm(ConfirmationEvent::parse(msg)?)
    }

    /// Moves to a new state, notifying the log and the observer.
    fn transition(&self, state: &mut PsState, next: PsState) {
        let old = std::mem::replace(state, next);

        log::debug!("power-save state changed {old} => {next}");

        let mut handler = self
            .on_state_change
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(handler) = handler.as_mut() {
            handler(old, next);
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, PsState> {
        // the state is a plain enum, a panicking holder cannot leave it torn
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
