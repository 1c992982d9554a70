use super::table::ContentTable;
use crate::audience::selection::Audience;

pub struct HeroCopy {
    pub label: &'static str,
    pub description: &'static str,
    pub hero_title: &'static str,
    pub hero_subtitle: &'static str,
    pub cta_text: &'static str,
    pub benefits: &'static [&'static str],
}

pub struct HeroCard {
    pub audience: Audience,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub highlight: &'static str,
    pub icon: &'static str,
    pub gradient: &'static str,
    pub features: &'static [&'static str],
}

static HERO_COPY: ContentTable<HeroCopy> = ContentTable::new(
    HeroCopy {
        label: "Student/Worker",
        description: "Earn flexible income",
        hero_title: "Start Earning Today with Zero Commission",
        hero_subtitle: "Join 10,000+ students earning ₹10,000+/month with verified tasks and instant UPI payments",
        cta_text: "Start Earning Now",
        benefits: &[
            "Zero commission first month",
            "Instant UPI payments",
            "College ID verification",
        ],
    },
    HeroCopy {
        label: "Business",
        description: "Find verified talent",
        hero_title: "Find Verified Local Talent Instantly",
        hero_subtitle: "Connect with 100% verified students and professionals for reliable task completion",
        cta_text: "Post Your First Task",
        benefits: &[
            "100% verified workers",
            "Escrow protection",
            "Local talent pool",
        ],
    },
    HeroCopy {
        label: "Investor",
        description: "High-growth investment",
        hero_title: "Invest in India's Fastest Growing Gig Platform",
        hero_subtitle: "Early investment opportunity with 15-25x return potential in India's ₹400Cr gig economy",
        cta_text: "View Investment Details",
        benefits: &[
            "15-25x return potential",
            "Growing market",
            "Proven traction",
        ],
    },
);

pub static HERO_CARDS: [HeroCard; 3] = [
    HeroCard {
        audience: Audience::Worker,
        title: "₹10,000+/month",
        subtitle: "Flexible Income",
        highlight: "Zero Commission First Month",
        icon: "💰",
        gradient: "card-success",
        features: &["Instant UPI payments", "College ID verified", "Flexible timing"],
    },
    HeroCard {
        audience: Audience::Business,
        title: "Verified Talent",
        subtitle: "Zero Hassle",
        highlight: "100% Verified Workers",
        icon: "🛡️",
        gradient: "card-secondary",
        features: &["Escrow protection", "Local professionals", "Quality guarantee"],
    },
    HeroCard {
        audience: Audience::Investor,
        title: "15-25x Returns",
        subtitle: "Growth Potential",
        highlight: "Early Investment Opportunity",
        icon: "📈",
        gradient: "card-warning",
        features: &["₹400Cr market size", "Proven traction", "Scalable model"],
    },
];

pub const TRUST_INDICATORS: [(&str, &str); 3] = [
    ("👥", "10,000+ Active Users"),
    ("⭐", "4.8/5 Rating"),
    ("🛡️", "100% Verified"),
];

/// Milliseconds each rotating headline stays up.
pub const HEADLINE_ROTATION_MS: u32 = 3000;

pub fn copy(audience: Audience) -> &'static HeroCopy {
    HERO_COPY.get(audience)
}

/// Headlines the hero cycles through for an audience.
pub fn headlines(audience: Audience) -> [String; 3] {
    let copy = copy(audience);
    [
        copy.hero_title.to_string(),
        "Join India's Most Trusted Gig Platform".to_string(),
        format!("{} - Limited Time", copy.benefits[0]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_audience_has_complete_copy() {
        for (audience, copy) in HERO_COPY.iter() {
            assert!(!copy.hero_title.is_empty(), "{}", audience);
            assert!(!copy.hero_subtitle.is_empty(), "{}", audience);
            assert!(!copy.cta_text.is_empty(), "{}", audience);
            assert!(!copy.benefits.is_empty(), "{}", audience);
        }
    }

    #[test]
    fn one_card_per_audience() {
        for audience in Audience::ALL {
            assert_eq!(
                HERO_CARDS.iter().filter(|card| card.audience == audience).count(),
                1
            );
        }
    }

    #[test]
    fn headlines_lead_with_audience_title() {
        let lines = headlines(Audience::Worker);
        assert_eq!(lines[0], "Start Earning Today with Zero Commission");
        assert_eq!(lines[2], "Zero commission first month - Limited Time");
    }
}
