//! Render-pass supervision with panic recovery.
//!
//! Wraps render passes so a panic anywhere inside one substitutes a
//! fallback view instead of tearing down the application. Once a pass has
//! failed, the supervisor keeps serving the fallback until `reset` returns
//! it to a clean state.

use std::panic::{AssertUnwindSafe, catch_unwind};

use parking_lot::Mutex;

/// Supervisor wrapping render passes with catch-and-recover semantics.
#[derive(Debug, Default)]
pub struct RenderSupervisor {
    failure: Mutex<Option<String>>,
}

impl RenderSupervisor {
    /// Creates a supervisor in the clean state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs a render pass, substituting `fallback` if this or an earlier
    /// pass panicked and the supervisor has not been reset since.
    ///
    /// The fallback receives the recorded panic message.
    pub fn render<T>(&self, pass: impl FnOnce() -> T, fallback: impl FnOnce(&str) -> T) -> T {
        if let Some(message) = self.failure.lock().clone() {
            return fallback(&message);
        }

        match catch_unwind(AssertUnwindSafe(pass)) {
            Ok(view) => view,
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                tracing::error!("Render pass panicked: {message}");
                *self.failure.lock() = Some(message.clone());
                fallback(&message)
            }
        }
    }

    /// Checks whether the supervisor is currently serving the fallback.
    pub fn has_failed(&self) -> bool {
        self.failure.lock().is_some()
    }

    /// Message recorded from the failing pass, if any.
    pub fn last_failure(&self) -> Option<String> {
        self.failure.lock().clone()
    }

    /// Clears the failure state so the next pass renders normally.
    pub fn reset(&self) {
        *self.failure.lock() = None;
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
