//! Logical button → IR transmission.

use super::{code_for, IrEmitter};
use crate::input::LogicalButton;

/// Owns the IR emitter and sends one frame per dispatched press.
pub struct Transmitter<E> {
    emitter: E,
}

impl<E: IrEmitter> Transmitter<E> {
    pub fn new(emitter: E) -> Self {
        Self { emitter }
    }

    /// Transmit the code for `button` once.
    ///
    /// There is no retry. An emitter failure is logged and swallowed so the
    /// control loop carries on polling.
    pub async fn send(&mut self, button: LogicalButton) {
        let code = code_for(button);
        match self.emitter.emit(code).await {
            Ok(()) => info!("{}", button.tag()),
            Err(e) => warn!("IR {}: {}", button.tag(), e),
        }
    }

    /// Access the underlying emitter.
    pub fn emitter(&self) -> &E {
        &self.emitter
    }
}
