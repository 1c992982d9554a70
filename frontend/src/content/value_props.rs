use super::table::{scoped, AudienceScoped};
use crate::audience::selection::Audience;

use Audience::{Business, Investor, Worker};

pub const ROTATION_MS: u32 = 3000;
/// Cards listed under the rotating showcase.
pub const GRID_LIMIT: usize = 3;

pub struct ValueProp {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub audiences: &'static [Audience],
}

impl AudienceScoped for ValueProp {
    fn audiences(&self) -> &[Audience] {
        self.audiences
    }
}

pub static VALUE_PROPS: [ValueProp; 10] = [
    ValueProp {
        id: "community-verified",
        title: "Community Verified Platform",
        description: "India's first gig platform with 100% College ID and Aadhaar verification ensuring trusted connections between all participants.",
        icon: "🛡️",
        audiences: &[Worker, Business, Investor],
    },
    ValueProp {
        id: "instant-payments",
        title: "Instant UPI Payments",
        description: "Get paid immediately after task completion with direct UPI transfers. No waiting periods, no payment delays.",
        icon: "⚡",
        audiences: &[Worker, Business],
    },
    ValueProp {
        id: "zero-commission",
        title: "Zero Commission Forever",
        description: "Workers never pay commission - keep 100% of your earnings forever. Earn rewards, badges, and bonuses as you complete tasks.",
        icon: "💯",
        audiences: &[Worker],
    },
    ValueProp {
        id: "worker-rewards",
        title: "Worker Rewards Program",
        description: "Earn rewards for milestones: 25 tasks = free t-shirt, 50 tasks = hoodie, 100 tasks = verified badge + bonus. Rewards improve your visibility.",
        icon: "🏆",
        audiences: &[Worker],
    },
    ValueProp {
        id: "ai-invoice",
        title: "AI-Powered Invoice Generation",
        description: "AI generates upfront price estimates using real-time online data. Transparent buffer system (12% tier-2, 18% metro) with automatic refunds.",
        icon: "🧾",
        audiences: &[Business],
    },
    ValueProp {
        id: "dynamic-fees",
        title: "Dynamic Delivery Fees",
        description: "Delivery fees calculated by distance and grocery cost. Automatic proportional refunds if actual bill is less than estimate. Complete transparency.",
        icon: "📦",
        audiences: &[Business],
    },
    ValueProp {
        id: "flexible-subscription",
        title: "Flexible Subscription Plans",
        description: "Choose a plan that fits your needs (₹299, ₹599, or ₹799/month). Unused limits carry over up to 3 months. Zero commission within limit.",
        icon: "💳",
        audiences: &[Business],
    },
    ValueProp {
        id: "quality-talent",
        title: "Pre-Verified Quality Talent",
        description: "Access a pool of verified students and professionals from top colleges and institutions across India.",
        icon: "👥",
        audiences: &[Business],
    },
    ValueProp {
        id: "partnership-opportunities",
        title: "Partnership Opportunities",
        description: "Join our waitlist for future investment and business partnership opportunities. Get early access to collaborations and market insights.",
        icon: "📈",
        audiences: &[Investor],
    },
    ValueProp {
        id: "local-focus",
        title: "Local Market Understanding",
        description: "Built specifically for Indian market with local payment methods, verification systems, and cultural understanding.",
        icon: "📍",
        audiences: &[Worker, Business, Investor],
    },
];

/// Platform-wide stats under the showcase. Not audience-specific.
pub const STATS: [(&str, &str); 4] = [
    ("₹50L+", "Paid to Workers"),
    ("10,000+", "Completed Tasks"),
    ("4.8/5", "Average Rating"),
    ("100%", "Verified Users"),
];

pub fn for_audience(audience: Audience) -> Vec<&'static ValueProp> {
    scoped(&VALUE_PROPS, audience)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(audience: Audience) -> Vec<&'static str> {
        for_audience(audience).iter().map(|prop| prop.id).collect()
    }

    #[test]
    fn filtering_keeps_declaration_order() {
        assert_eq!(
            ids(Worker),
            vec!["community-verified", "instant-payments", "zero-commission", "worker-rewards", "local-focus"]
        );
        assert_eq!(
            ids(Investor),
            vec!["community-verified", "partnership-opportunities", "local-focus"]
        );
    }

    #[test]
    fn every_audience_fills_the_grid() {
        for audience in Audience::ALL {
            assert!(for_audience(audience).len() >= GRID_LIMIT, "{}", audience);
        }
    }

    #[test]
    fn business_sees_no_worker_only_props() {
        assert!(!ids(Business).contains(&"zero-commission"));
        assert_eq!(ids(Business).len(), 7);
    }
}
