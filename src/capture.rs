//! # Barcode Capture Seam
//!
//! The camera pipeline lives outside this crate. What the core needs from
//! it is narrow: one decoded barcode string per activation, then the
//! session is over. That contract is modeled as a paired single-shot
//! channel so it holds by construction:
//!
//! - [`ScanActivation`] is the device side. Delivering a code consumes it,
//!   so a session can never emit twice.
//! - [`ScanSession`] is the client side. Dropping or cancelling it is
//!   observable on the device side, which is the signal to stop the camera
//!   and release the device.
//!
//! Re-activating after a completed scan means constructing a fresh pair;
//! a stale decoded value has nowhere to replay into.
//!
//! Which symbologies get decoded (EAN-8, EAN-13, UPC-E) is the device's
//! concern; the core only sees the resulting string.

use tokio::sync::oneshot;
use tracing::debug;

/// Starts a capture session, returning the device side and client side.
pub fn activation() -> (ScanActivation, ScanSession) {
    let (tx, rx) = oneshot::channel();

    (ScanActivation { code: tx }, ScanSession { code: rx })
}

/// Device side of a capture session. Held by the camera pipeline for the
/// lifetime of one activation.
pub struct ScanActivation {
    code: oneshot::Sender<String>,
}

impl ScanActivation {
    /// Delivers the decoded barcode, consuming the activation. Returns
    /// false if the session was already cancelled; the device should stop
    /// the camera either way.
    pub fn deliver(self, code: String) -> bool {
        debug!("delivering scanned code {code}");
        self.code.send(code).is_ok()
    }

    /// True once the client side has cancelled or dropped the session.
    pub fn is_cancelled(&self) -> bool {
        self.code.is_closed()
    }

    /// Resolves when the client side cancels, so the device loop can stop
    /// without polling.
    pub async fn cancelled(&mut self) {
        self.code.closed().await;
    }
}

/// Client side of a capture session.
pub struct ScanSession {
    code: oneshot::Receiver<String>,
}

impl ScanSession {
    /// Waits for the single barcode. `None` means the device side shut
    /// down without decoding anything.
    pub async fn code(self) -> Option<String> {
        self.code.await.ok()
    }

    /// Tears down the session; any barcode not yet delivered is discarded.
    pub fn cancel(self) {
        debug!("capture session cancelled");
    }
}
