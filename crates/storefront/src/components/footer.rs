//! Page footer component.
//!
//! Static link columns plus the newsletter form, the only footer state.

use crate::models::footer::{self, FooterSection, SocialLink};
use crate::services::{CONFIRMATION_DURATION, NewsletterForm, SubmitOutcome};

/// Footer state for one page view.
#[derive(Debug, Default)]
pub struct PageFooter {
    newsletter: NewsletterForm,
}

impl PageFooter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A footer whose newsletter input holds `email`.
    #[must_use]
    pub fn with_email(email: impl Into<String>) -> Self {
        Self {
            newsletter: NewsletterForm::with_email(email),
        }
    }

    #[must_use]
    pub const fn newsletter(&self) -> &NewsletterForm {
        &self.newsletter
    }

    /// Submit whatever is in the newsletter input.
    pub fn subscribe(&mut self) -> SubmitOutcome {
        self.newsletter.submit()
    }

    /// Milliseconds the confirmation stays up before the form returns.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // 3000 fits
    pub const fn confirmation_ms(&self) -> u64 {
        CONFIRMATION_DURATION.as_millis() as u64
    }

    #[must_use]
    pub const fn sections(&self) -> &'static [FooterSection] {
        &footer::SECTIONS
    }

    #[must_use]
    pub const fn social_links(&self) -> &'static [SocialLink] {
        &footer::SOCIAL_LINKS
    }

    #[must_use]
    pub const fn contact_email(&self) -> &'static str {
        footer::CONTACT_EMAIL
    }

    #[must_use]
    pub const fn contact_phone(&self) -> &'static str {
        footer::CONTACT_PHONE
    }

    #[must_use]
    pub const fn contact_phone_href(&self) -> &'static str {
        footer::CONTACT_PHONE_HREF
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_subscribe_shows_confirmation_then_reverts() {
        let mut footer = PageFooter::with_email("user@example.com");
        assert!(footer.subscribe().is_accepted());
        assert!(footer.newsletter().is_submitted());
        assert_eq!(footer.newsletter().email(), "");

        tokio::time::sleep(CONFIRMATION_DURATION + std::time::Duration::from_millis(1)).await;
        assert!(!footer.newsletter().is_submitted());
    }

    #[tokio::test]
    async fn test_subscribe_rejects_bad_address() {
        let mut footer = PageFooter::with_email("not-an-email");
        assert!(!footer.subscribe().is_accepted());
        assert!(!footer.newsletter().is_submitted());
        assert_eq!(footer.newsletter().email(), "not-an-email");
    }

    #[test]
    fn test_static_content() {
        let footer = PageFooter::new();
        assert_eq!(footer.sections().len(), 3);
        assert_eq!(footer.social_links().len(), 4);
        assert_eq!(footer.confirmation_ms(), 3000);
    }
}
