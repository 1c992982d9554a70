use super::table::ContentTable;
use crate::audience::selection::Audience;

#[derive(Debug, PartialEq)]
pub struct PricingTier {
    pub id: &'static str,
    pub name: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub highlighted: bool,
    pub cta_text: &'static str,
    pub badge: Option<&'static str>,
}

impl PricingTier {
    pub fn is_custom(&self) -> bool {
        self.price == "Custom"
    }

    /// Monthly zero-commission posting limit, for business plans.
    pub fn monthly_task_limit(&self) -> Option<&'static str> {
        match self.id {
            "business-starter" => Some("₹2,500"),
            "business-growth" => Some("₹5,000"),
            "business-pro" => Some("₹9,000"),
            _ => None,
        }
    }
}

pub struct PricingHeading {
    pub title: &'static str,
    pub subtitle: &'static str,
}

static WORKER_TIERS: [PricingTier; 1] = [PricingTier {
    id: "worker-free",
    name: "Free Forever",
    price: "₹0",
    period: "/month",
    description: "Workers never pay commission - earn 100% of task payments",
    features: &[
        "Zero commission forever",
        "Instant UPI payments",
        "College ID verification",
        "Access to all tasks",
        "Earn credits & rewards",
        "Referral bonuses (₹100 per referral)",
        "Worker rewards program",
        "Mobile app access",
    ],
    highlighted: true,
    cta_text: "Start Earning Free",
    badge: Some("Most Popular"),
}];

static BUSINESS_TIERS: [PricingTier; 3] = [
    PricingTier {
        id: "business-starter",
        name: "Starter",
        price: "₹299",
        period: "/month",
        description: "Perfect for occasional task posting",
        features: &[
            "₹2,500 task limit per month",
            "Unused limit carries over (up to 3 months)",
            "Zero commission within limit",
            "6% commission after limit exceeded",
            "AI invoice generation",
            "Dynamic delivery fee calculation",
            "Escrow protection",
            "Basic support",
        ],
        highlighted: false,
        cta_text: "Start Starter Plan",
        badge: None,
    },
    PricingTier {
        id: "business-growth",
        name: "Growth",
        price: "₹599",
        period: "/month",
        description: "Ideal for regular task posting",
        features: &[
            "₹5,000 task limit per month",
            "Unused limit carries over (up to 3 months)",
            "Zero commission within limit",
            "6% commission after limit exceeded",
            "Verified badge eligibility",
            "AI invoice generation",
            "Dynamic delivery fee calculation",
            "Escrow protection",
            "Priority support",
            "Advanced analytics",
        ],
        highlighted: true,
        cta_text: "Choose Growth Plan",
        badge: Some("Recommended"),
    },
    PricingTier {
        id: "business-pro",
        name: "Professional",
        price: "₹799",
        period: "/month",
        description: "Best for high-volume task posting",
        features: &[
            "₹9,000 task limit per month",
            "Unused limit carries over (up to 3 months)",
            "Zero commission within limit",
            "6% commission after limit exceeded",
            "Verified badge eligibility",
            "AI invoice generation",
            "Dynamic delivery fee calculation",
            "Escrow protection",
            "Priority support",
            "Advanced analytics",
            "API access",
            "Dedicated account manager",
        ],
        highlighted: false,
        cta_text: "Go Professional",
        badge: None,
    },
];

static INVESTOR_TIERS: [PricingTier; 2] = [
    PricingTier {
        id: "investor-waitlist",
        name: "Partnership Waitlist",
        price: "Free",
        period: "to join",
        description: "Join our waitlist for future investment and partnership opportunities",
        features: &[
            "Early access to investment rounds",
            "Regular platform updates",
            "Market insights and metrics",
            "Partnership opportunities",
            "Business collaboration options",
            "Priority notifications",
        ],
        highlighted: true,
        cta_text: "Join Waitlist",
        badge: Some("Coming Soon"),
    },
    PricingTier {
        id: "investor-business",
        name: "Business Partnership",
        price: "Custom",
        period: "pricing",
        description: "Explore custom business partnerships and collaborations",
        features: &[
            "Custom partnership terms",
            "API integrations",
            "White-label solutions",
            "Bulk task management",
            "Dedicated support",
            "Co-marketing opportunities",
            "Revenue sharing options",
        ],
        highlighted: false,
        cta_text: "Contact Us",
        badge: None,
    },
];

static TIERS: ContentTable<&[PricingTier]> =
    ContentTable::new(&WORKER_TIERS, &BUSINESS_TIERS, &INVESTOR_TIERS);

static HEADINGS: ContentTable<PricingHeading> = ContentTable::new(
    PricingHeading {
        title: "Workers Never Pay Commission",
        subtitle: "Earn 100% of task payments with zero commission forever. Access worker rewards program and referral bonuses.",
    },
    PricingHeading {
        title: "Flexible Subscription Plans",
        subtitle: "Choose a subscription plan that fits your needs. Unused limits carry over, and you only pay commission after exceeding your monthly limit.",
    },
    PricingHeading {
        title: "Partnership Opportunities",
        subtitle: "Interested in partnering with us? Join our waitlist to learn about future investment and business partnership opportunities.",
    },
);

/// Extra bullet points shown under the investor waitlist card.
pub const WAITLIST_PERKS: [&str; 4] = [
    "Updates on platform growth and metrics",
    "Early notification of investment opportunities",
    "Access to market research and insights",
    "Priority consideration for partnerships",
];

pub const BUSINESS_HOW_IT_WORKS: [&str; 5] = [
    "Subscribe to a plan (₹299, ₹599, or ₹799/month)",
    "Post tasks up to your monthly limit with zero commission",
    "Unused limit carries over to next month (up to 3 months)",
    "After exceeding limit, pay only 6% commission per task",
    "Non-subscribers pay 6% commission on all tasks",
];

pub struct Comparison {
    pub title: &'static str,
    /// (icon, headline, detail)
    pub points: [(&'static str, &'static str, &'static str); 3],
}

static COMPARISONS: ContentTable<Comparison> = ContentTable::new(
    Comparison {
        title: "Why Workers Love WE Community",
        points: [
            ("💯", "Zero Commission Forever", "Keep 100% of your earnings - no commission, ever"),
            ("⚡", "Instant UPI Payments", "Get paid instantly after task completion"),
            ("🏆", "Rewards Program", "Earn badges, credits, and bonuses for milestones"),
        ],
    },
    Comparison {
        title: "Key Benefits of Our Pricing Model",
        points: [
            ("📦", "Flexible Limits", "Unused limits carry over up to 3 months"),
            ("🧾", "AI-Powered Invoicing", "AI generates accurate upfront price estimates"),
            ("🔒", "Escrow Protection", "Secure escrow with automatic refunds"),
        ],
    },
    Comparison {
        title: "Partnership Benefits",
        points: [
            ("📊", "Transparent Model", "Clear pricing structure and growth metrics"),
            ("🤖", "Tech-Driven Platform", "Advanced technology and automation"),
            ("🌱", "Growing Market", "Expanding gig economy market opportunity"),
        ],
    },
);

pub fn comparison(audience: Audience) -> &'static Comparison {
    COMPARISONS.get(audience)
}

pub fn tiers(audience: Audience) -> &'static [PricingTier] {
    *TIERS.get(audience)
}

pub fn heading(audience: Audience) -> &'static PricingHeading {
    HEADINGS.get(audience)
}

/// CSS grid modifier for the number of cards shown.
pub fn grid_class(tier_count: usize) -> &'static str {
    match tier_count {
        2 => "pricing-grid two",
        3 => "pricing-grid three",
        _ => "pricing-grid one",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_audience_has_tiers_with_features() {
        for (audience, tiers) in TIERS.iter() {
            assert!(!tiers.is_empty(), "{}", audience);
            for tier in tiers.iter() {
                assert!(!tier.features.is_empty(), "{}", tier.id);
                assert!(tier.id.starts_with(audience.as_str()), "{}", tier.id);
            }
            assert_eq!(
                tiers.iter().filter(|tier| tier.highlighted).count(),
                1,
                "{} should highlight exactly one tier",
                audience
            );
        }
    }

    #[test]
    fn worker_has_single_free_tier() {
        let worker = tiers(Audience::Worker);
        assert_eq!(worker.len(), 1);
        assert_eq!(worker[0].price, "₹0");
    }

    #[test]
    fn business_tiers_carry_limits() {
        let limits: Vec<_> = tiers(Audience::Business)
            .iter()
            .map(|tier| tier.monthly_task_limit())
            .collect();
        assert_eq!(limits, vec![Some("₹2,500"), Some("₹5,000"), Some("₹9,000")]);
        assert!(tiers(Audience::Investor)[1].is_custom());
        assert_eq!(tiers(Audience::Investor)[0].monthly_task_limit(), None);
    }

    #[test]
    fn grid_class_follows_count() {
        assert_eq!(grid_class(tiers(Audience::Business).len()), "pricing-grid three");
        assert_eq!(grid_class(tiers(Audience::Investor).len()), "pricing-grid two");
        assert_eq!(grid_class(tiers(Audience::Worker).len()), "pricing-grid one");
    }
}
