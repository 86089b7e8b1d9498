//! Single-flight guard for front-end forms.
//!
//! A panel allows one outstanding request at a time. A submission made while another
//! is pending is rejected with [`PanelError::Busy`]; the slot is released when the
//! [`InFlight`] guard drops, whether the request succeeded, failed, or was cancelled.

use crate::error::{PanelError, ValidationError};
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

#[derive(Debug)]
pub struct Panel {
    name: String,
    busy: AtomicBool,
}

/// Proof that the owning panel's request slot is taken.
#[derive(Debug)]
pub struct InFlight<'a> {
    panel: &'a Panel,
}

impl Panel {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), busy: AtomicBool::new(false) }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Takes the request slot, or fails if it is already taken.
    pub fn try_begin(&self) -> Result<InFlight<'_>, PanelError> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| {
                debug!(panel = %self.name, "Rejecting submission while a request is in flight");
                PanelError::Busy(self.name.clone())
            })?;
        Ok(InFlight { panel: self })
    }

    /// Runs `request` while holding the slot.
    pub async fn run<F, T>(&self, request: F) -> Result<T, PanelError>
    where
        F: Future<Output = T>,
    {
        let _guard = self.try_begin()?;
        Ok(request.await)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.panel.busy.store(false, Ordering::Release);
    }
}

/// Returns `value` unless it is empty or whitespace.
pub fn require_text(value: &str, error: ValidationError) -> Result<&str, ValidationError> {
    if value.trim().is_empty() { Err(error) } else { Ok(value) }
}
