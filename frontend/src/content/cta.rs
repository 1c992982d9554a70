use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use validator::Validate;

use super::table::ContentTable;
use crate::audience::selection::Audience;

/// Simulated round-trip of the sign-up form.
pub const SUBMIT_DELAY_MS: u32 = 2000;
/// How long the confirmation stays before the form resets.
pub const RESET_DELAY_MS: u32 = 3000;

pub struct CtaCopy {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub primary_cta: &'static str,
    pub secondary_cta: &'static str,
    pub urgency: &'static str,
    pub benefits: [&'static str; 4],
    pub email_placeholder: &'static str,
    pub phone_placeholder: &'static str,
    pub confirmation: &'static str,
    pub next_step: &'static str,
}

static CTA_COPY: ContentTable<CtaCopy> = ContentTable::new(
    CtaCopy {
        title: "Join 10,000+ Students Earning Today",
        subtitle: "Start your flexible income journey with zero commission forever. Earn rewards, badges, and bonuses as you complete tasks.",
        primary_cta: "Start Earning Now",
        secondary_cta: "Watch Demo",
        urgency: "Zero commission forever - workers never pay",
        benefits: [
            "Zero commission forever",
            "Worker rewards program",
            "Instant UPI payments",
            "Earn credits & bonuses",
        ],
        email_placeholder: "Enter your college email",
        phone_placeholder: "Enter your mobile number",
        confirmation: "Check your email for verification instructions. Start earning today!",
        next_step: "Next: Complete your profile and start browsing available tasks.",
    },
    CtaCopy {
        title: "Choose Your Subscription Plan",
        subtitle: "Post tasks with zero commission up to your limit. AI-powered invoicing, dynamic delivery fees, and automatic refunds.",
        primary_cta: "View Pricing Plans",
        secondary_cta: "Schedule Demo",
        urgency: "Flexible plans starting at ₹299/month",
        benefits: [
            "Flexible subscription plans",
            "AI invoice generation",
            "Dynamic delivery fees",
            "Automatic refunds",
        ],
        email_placeholder: "Enter your business email",
        phone_placeholder: "Enter your contact number",
        confirmation: "We'll contact you within 24 hours to set up your account.",
        next_step: "Next: Prepare your first task posting and budget requirements.",
    },
    CtaCopy {
        title: "Join Our Partnership Waitlist",
        subtitle: "Interested in partnering with WE Universal? Get early access to future investment and business collaboration opportunities.",
        primary_cta: "Join Waitlist",
        secondary_cta: "Learn More",
        urgency: "Early access to partnership opportunities",
        benefits: [
            "Early access to opportunities",
            "Market insights and metrics",
            "Partnership options",
            "Platform updates",
        ],
        email_placeholder: "Enter your investment email",
        phone_placeholder: "Enter your contact number",
        confirmation: "Our team will reach out to schedule your investment meeting.",
        next_step: "Next: Review our pitch deck and prepare your investment criteria.",
    },
);

pub fn copy(audience: Audience) -> &'static CtaCopy {
    CTA_COPY.get(audience)
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LeadError {
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a valid 10-digit mobile number")]
    InvalidPhone,
}

/// Indian mobile number with an optional `+91`/`91`/`0` prefix.
static MOBILE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\+?91|0)?([6-9][0-9]{9})$").expect("valid mobile pattern")
});

/// Sign-up form contents. Nothing is sent anywhere; the form only checks
/// the input and plays a confirmation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct LeadForm {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    pub phone: String,
}

impl LeadForm {
    pub fn validate(&self) -> Result<(), LeadError> {
        <Self as Validate>::validate(self).map_err(|_| LeadError::InvalidEmail)?;
        normalize_phone(&self.phone).ok_or(LeadError::InvalidPhone)?;
        Ok(())
    }
}

/// Ten national digits, ignoring spaces and dashes between groups.
pub fn normalize_phone(value: &str) -> Option<String> {
    let compact: String = value.chars().filter(|c| !matches!(c, ' ' | '-')).collect();
    MOBILE_RE
        .captures(&compact)
        .and_then(|caps| caps.get(1))
        .map(|national| national.as_str().to_string())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

impl SubmitState {
    pub fn button_label(&self, audience: Audience) -> &'static str {
        match self {
            SubmitState::Submitting => "Processing...",
            _ => copy(audience).primary_cta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(email: &str, phone: &str) -> LeadForm {
        LeadForm {
            email: email.to_string(),
            phone: phone.to_string(),
        }
    }

    #[test]
    fn each_audience_has_its_own_call_to_action() {
        assert_eq!(copy(Audience::Worker).primary_cta, "Start Earning Now");
        assert_eq!(copy(Audience::Business).primary_cta, "View Pricing Plans");
        assert_eq!(copy(Audience::Investor).primary_cta, "Join Waitlist");
    }

    #[test]
    fn accepts_common_indian_numbers() {
        assert_eq!(normalize_phone("98765 43210").as_deref(), Some("9876543210"));
        assert_eq!(normalize_phone("+91-98765-43210").as_deref(), Some("9876543210"));
        assert_eq!(normalize_phone("09876543210").as_deref(), Some("9876543210"));
        assert_eq!(normalize_phone("1234567890"), None);
        assert_eq!(normalize_phone("98765"), None);
        assert_eq!(normalize_phone("98765abcde"), None);
        assert_eq!(normalize_phone("919876543210").as_deref(), Some("9876543210"));
        assert_eq!(normalize_phone("9198765432").as_deref(), Some("9198765432"));
    }

    #[test]
    fn validate_checks_email_before_phone() {
        assert_eq!(form("student@college.edu", "9502414128").validate(), Ok(()));
        assert_eq!(form("student", "bad").validate(), Err(LeadError::InvalidEmail));
        assert_eq!(form("a@b..c", "9502414128").validate(), Err(LeadError::InvalidEmail));
        assert_eq!(form("student@", "9502414128").validate(), Err(LeadError::InvalidEmail));
        assert_eq!(form("a@b.in", "12").validate(), Err(LeadError::InvalidPhone));
    }

    #[test]
    fn submit_button_shows_progress() {
        assert_eq!(SubmitState::Idle.button_label(Audience::Business), "View Pricing Plans");
        assert_eq!(SubmitState::Submitting.button_label(Audience::Business), "Processing...");
    }
}
