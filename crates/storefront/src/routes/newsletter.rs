//! Newsletter subscription route handlers.
//!
//! Local feedback only: a valid address swaps the form for a confirmation
//! that reloads the empty form after a few seconds. No address is stored or
//! sent anywhere.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use sharp_style_core::EmailError;
use tracing::instrument;

use crate::components::PageFooter;
use crate::error::add_breadcrumb;
use crate::services::SubmitOutcome;

/// Newsletter subscription form data.
#[derive(Debug, Deserialize)]
pub struct SubscribeForm {
    #[serde(default)]
    pub email: String,
}

/// Confirmation fragment template (replaces the form via HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "fragments/newsletter_success.html")]
pub struct SubscribeSuccessTemplate {
    pub confirmation_ms: u64,
}

/// Form fragment template (replaces the confirmation or a rejected form).
#[derive(Template, WebTemplate)]
#[template(path = "fragments/newsletter_form.html")]
pub struct SubscribeFormTemplate {
    pub email: String,
    pub error: String,
}

/// Subscribe to newsletter (HTMX).
#[instrument(skip_all)]
pub async fn subscribe(Form(form): Form<SubscribeForm>) -> Response {
    let mut footer = PageFooter::with_email(form.email);

    match footer.subscribe() {
        SubmitOutcome::Accepted(email) => {
            add_breadcrumb("newsletter", "Newsletter subscription accepted", None);
            tracing::info!(email = %email, "Newsletter subscription accepted");
            SubscribeSuccessTemplate {
                confirmation_ms: footer.confirmation_ms(),
            }
            .into_response()
        }
        SubmitOutcome::Rejected(err) => {
            tracing::debug!(error = %err, "Newsletter subscription rejected");
            SubscribeFormTemplate {
                email: footer.newsletter().email().to_string(),
                error: rejection_message(&err).to_string(),
            }
            .into_response()
        }
    }
}

/// Input-ready form, loaded when the confirmation expires.
#[instrument]
pub async fn form() -> SubscribeFormTemplate {
    SubscribeFormTemplate {
        email: String::new(),
        error: String::new(),
    }
}

const fn rejection_message(err: &EmailError) -> &'static str {
    match err {
        EmailError::Empty => "Please enter your email address.",
        EmailError::MissingAtSymbol | EmailError::MissingDot => {
            "Please enter a valid email address."
        }
    }
}
