//! The transport seam between the controller and the firmware link.

use crossbeam_channel::Sender;

/// Dispatches power-save requests towards the radio firmware.
///
/// A successful send only means the request left the host. Whether the
/// firmware actually applied it is reported later through a separate
/// confirmation message, see
/// [`PsController::handle_confirm_frame`](crate::PsController::handle_confirm_frame).
pub trait Transport {
    /// Sends a power-save request to the firmware.
    ///
    /// `enable` selects between the enable and the disable request.
    fn send_ps_request(&self, enable: bool) -> anyhow::Result<()>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send_ps_request(&self, enable: bool) -> anyhow::Result<()> {
        (**self).send_ps_request(enable)
    }
}

/// A transport that hands requests to another thread over a channel.
///
/// The receiving end plays the firmware; the demo binary runs the
/// controller against this with a simulator thread on the other side.
#[derive(Debug, Clone)]
pub struct ChannelTransport {
    /// The sending half connected to the simulated firmware.
    requests: Sender<bool>,
}

impl ChannelTransport {
    /// Creates a transport feeding the given channel.
    pub fn new(requests: Sender<bool>) -> Self {
        Self { requests }
    }
}

impl Transport for ChannelTransport {
    fn send_ps_request(&self, enable: bool) -> anyhow::Result<()> {
        self.requests
            .send(enable)
            .map_err(|_| anyhow::anyhow!("firmware link is down"))
    }
}
