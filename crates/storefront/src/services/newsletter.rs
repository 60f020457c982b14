//! Newsletter signup form state.
//!
//! Local feedback only: an accepted address clears the input and shows a
//! confirmation for [`CONFIRMATION_DURATION`], after which the form returns
//! to its input-ready state. Nothing is sent anywhere.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use sharp_style_core::{Email, EmailError};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// How long the confirmation stays up after an accepted submission.
pub const CONFIRMATION_DURATION: Duration = Duration::from_millis(3000);

/// Result of submitting the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted(Email),
    Rejected(EmailError),
}

impl SubmitOutcome {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// The footer's newsletter form.
///
/// Dropping the form cancels a pending confirmation reset.
#[derive(Debug, Default)]
pub struct NewsletterForm {
    email: String,
    submitted: Arc<AtomicBool>,
    reset: Option<JoinHandle<()>>,
}

impl NewsletterForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A form with the input pre-filled.
    #[must_use]
    pub fn with_email(email: impl Into<String>) -> Self {
        let mut form = Self::default();
        form.email = email.into();
        form
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Current contents of the input.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Whether the confirmation is showing.
    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.submitted.load(Ordering::Acquire)
    }

    /// Validate and submit the current input.
    ///
    /// On acceptance the input is cleared, the confirmation flag is set and
    /// a timer clears it again after [`CONFIRMATION_DURATION`]. A rejected
    /// submission leaves the form as it was.
    ///
    /// The reset timer runs on the current Tokio runtime. Outside a runtime
    /// the flag stays set until the form is dropped.
    pub fn submit(&mut self) -> SubmitOutcome {
        let email = match Email::parse(&self.email) {
            Ok(email) => email,
            Err(e) => return SubmitOutcome::Rejected(e),
        };

        self.email.clear();
        self.submitted.store(true, Ordering::Release);
        self.schedule_reset();

        SubmitOutcome::Accepted(email)
    }

    fn schedule_reset(&mut self) {
        if let Some(previous) = self.reset.take() {
            previous.abort();
        }

        let Ok(handle) = Handle::try_current() else {
            tracing::debug!("No runtime available, confirmation reset not scheduled");
            return;
        };

        let submitted = Arc::clone(&self.submitted);
        self.reset = Some(handle.spawn(async move {
            tokio::time::sleep(CONFIRMATION_DURATION).await;
            submitted.store(false, Ordering::Release);
        }));
    }
}

impl Drop for NewsletterForm {
    fn drop(&mut self) {
        if let Some(reset) = self.reset.take() {
            reset.abort();
        }
    }
}
