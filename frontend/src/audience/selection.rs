use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Logical name of the audience broadcast. Kept for analytics payloads and
/// log lines; delivery itself goes through [`super::channel::AudienceChannel`].
pub const AUDIENCE_CHANGED: &str = "audienceChanged";

/// Who the landing page is currently talking to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    #[default]
    Worker,
    Business,
    Investor,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a known audience")]
pub struct InvalidAudience(pub String);

/// Payload carried by every audience broadcast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudienceChanged {
    pub audience: Audience,
}

impl Audience {
    pub const ALL: [Audience; 3] = [Audience::Worker, Audience::Business, Audience::Investor];

    pub fn as_str(&self) -> &'static str {
        match self {
            Audience::Worker => "worker",
            Audience::Business => "business",
            Audience::Investor => "investor",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Audience::Worker => "Worker",
            Audience::Business => "Business",
            Audience::Investor => "Investor",
        }
    }

    pub fn short_label(&self) -> &'static str {
        match self {
            Audience::Worker => "W",
            Audience::Business => "B",
            Audience::Investor => "I",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Audience::Worker => "Earn money completing tasks",
            Audience::Business => "Find reliable talent",
            Audience::Investor => "Invest in the platform",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Audience::Worker => "👥",
            Audience::Business => "🏢",
            Audience::Investor => "📈",
        }
    }

    /// CSS accent used for the audience's badge.
    pub fn accent_class(&self) -> &'static str {
        match self {
            Audience::Worker => "accent-success",
            Audience::Business => "accent-secondary",
            Audience::Investor => "accent-warning",
        }
    }
}

impl FromStr for Audience {
    type Err = InvalidAudience;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "worker" => Ok(Audience::Worker),
            "business" => Ok(Audience::Business),
            "investor" => Ok(Audience::Investor),
            other => Err(InvalidAudience(other.to_string())),
        }
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_exactly_the_three_members() {
        for audience in Audience::ALL {
            assert_eq!(audience.as_str().parse::<Audience>(), Ok(audience));
        }
    }

    #[test]
    fn rejects_anything_else() {
        for candidate in ["admin", "", "Worker", " worker", "investors", "null"] {
            assert_eq!(
                candidate.parse::<Audience>(),
                Err(InvalidAudience(candidate.to_string()))
            );
        }
    }

    #[test]
    fn default_is_worker() {
        assert_eq!(Audience::default(), Audience::Worker);
    }

    #[test]
    fn payload_serializes_with_lowercase_audience() {
        let payload = AudienceChanged { audience: Audience::Business };
        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(json, r#"{"audience":"business"}"#);

        let back: AudienceChanged = serde_json::from_str(r#"{"audience":"investor"}"#).unwrap();
        assert_eq!(back.audience, Audience::Investor);
        assert!(serde_json::from_str::<AudienceChanged>(r#"{"audience":"admin"}"#).is_err());
    }
}
