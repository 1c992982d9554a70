use super::table::{AudienceScoped, ContentTable};
use crate::audience::selection::Audience;
use crate::config;

/// Select value meaning "no category restriction".
pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, PartialEq)]
pub struct FaqItem {
    pub id: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
    pub audiences: &'static [Audience],
    pub category: &'static str,
}

impl AudienceScoped for FaqItem {
    fn audiences(&self) -> &[Audience] {
        self.audiences
    }
}

pub static FAQS: [FaqItem; 24] = [
    FaqItem {
        id: "worker-1",
        question: "Do workers pay commission?",
        answer: "No! Workers never pay commission. You keep 100% of task payments forever. WE Community is completely free for workers - sign up, verify, and start earning with zero commission on all your earnings.",
        audiences: &[Audience::Worker],
        category: "pricing",
    },
    FaqItem {
        id: "worker-2",
        question: "How does the worker rewards program work?",
        answer: "Complete tasks to unlock rewards: 25 tasks = free WE-branded t-shirt, 50 tasks = free WE hoodie, 100 tasks = verified badge + choice of ₹500 bonus + internship (students) or ₹1,000 bonus (workers). Rewards improve your visibility and help you get more task offers.",
        audiences: &[Audience::Worker],
        category: "rewards",
    },
    FaqItem {
        id: "worker-3",
        question: "How do credits and referral bonuses work?",
        answer: "Earn credits by completing tasks and referring others. Referrers earn ₹100 when their referee completes their first task. 100 credits = ₹1 (for workers, can be used for discounts or cashed to wallet). Credits can be redeemed for discounts, cash in wallet, or special offers.",
        audiences: &[Audience::Worker],
        category: "credits",
    },
    FaqItem {
        id: "worker-4",
        question: "How do I get a verified badge?",
        answer: "Workers earn a verified badge after completing 100 tasks. Verified workers are shown first in listings, get higher matching priority, and have better visibility. This helps you get more and better-paying tasks.",
        audiences: &[Audience::Worker],
        category: "verification",
    },
    FaqItem {
        id: "worker-5",
        question: "When do I get paid?",
        answer: "Payments are instant via UPI after task completion and approval. Payments are secured in escrow before you start work, so you're guaranteed payment. If the actual grocery bill is less than the estimate, you still get paid the full amount - the refund goes to the business.",
        audiences: &[Audience::Worker],
        category: "payment",
    },
    FaqItem {
        id: "worker-6",
        question: "What types of tasks are available?",
        answer: "We offer diverse tasks including home/garden services, delivery, groceries, cleaning, shopping, pharmacy, home essentials, data entry, content writing, and more. Tasks are categorized by skill level, duration, and payment. Filter by location, remote options, and your expertise.",
        audiences: &[Audience::Worker],
        category: "tasks",
    },
    FaqItem {
        id: "business-1",
        question: "How do subscription plans work?",
        answer: "Choose from three plans: Starter (₹299/month, ₹2,500 limit), Growth (₹599/month, ₹5,000 limit), or Professional (₹799/month, ₹9,000 limit). Post tasks up to your monthly limit with zero commission. Unused limits carry over up to 3 months. After exceeding your limit, pay 6% commission per task. Non-subscribers pay 6% commission on all tasks.",
        audiences: &[Audience::Business],
        category: "pricing",
    },
    FaqItem {
        id: "business-2",
        question: "How are delivery fees calculated?",
        answer: "Delivery fees are calculated dynamically based on distance AND proportional to actual vs estimated grocery cost. For example: 1km = ₹X, 3km = ₹Y, 5km = ₹Z, 10km = ₹W (varies by grocery cost). If the final bill is less than the estimate, the delivery fee is refunded proportionally.",
        audiences: &[Audience::Business],
        category: "fees",
    },
    FaqItem {
        id: "business-3",
        question: "How does AI invoice generation work?",
        answer: "Our AI generates upfront estimated price invoices based on real-time online price data. We add a buffer (12% for tier-2 cities, 18% for metros) to account for price variations. If the actual bill is less than the estimate, the unused buffer is automatically refunded to you. This ensures transparency and fairness.",
        audiences: &[Audience::Business],
        category: "invoice",
    },
    FaqItem {
        id: "business-4",
        question: "How does escrow and refunds work?",
        answer: "Payments are locked in escrow when you approve the AI-generated invoice. When the worker completes the task and uploads the receipt, the system compares the actual bill vs the estimate. If the actual bill is less, you automatically get a refund for the difference plus proportional delivery fee adjustment. Funds are released to the worker only after your approval.",
        audiences: &[Audience::Business],
        category: "payment",
    },
    FaqItem {
        id: "business-5",
        question: "What happens if my actual grocery bill is more than estimated?",
        answer: "If the actual bill exceeds the estimate, you only pay the estimated amount (the buffer covers the difference). However, if it exceeds significantly, you may need to approve an additional payment. The system will notify you and you can approve or dispute the difference.",
        audiences: &[Audience::Business],
        category: "invoice",
    },
    FaqItem {
        id: "business-6",
        question: "How do subscription limits and carry-over work?",
        answer: "Your monthly limit (₹2,500, ₹5,000, or ₹9,000) resets each month. Unused limit carries over to the next month, up to a maximum of 3 months. For example, if you have ₹1,000 unused in month 1, it carries to month 2. If you don't use it in month 2, it carries to month 3. After 3 months, unused limits expire.",
        audiences: &[Audience::Business],
        category: "pricing",
    },
    FaqItem {
        id: "business-7",
        question: "Can I change or upgrade my subscription mid-month?",
        answer: "Yes! You can upgrade your plan anytime. When you upgrade, you get the new limit immediately and pay a prorated amount for the remaining days. Downgrades take effect at the start of the next billing cycle. Contact support for assistance with subscription changes.",
        audiences: &[Audience::Business],
        category: "pricing",
    },
    FaqItem {
        id: "business-8",
        question: "How do I get a verified badge?",
        answer: "Businesses subscribed to Growth (₹599) or Professional (₹799) plans are eligible for verified badges. Verified businesses are shown first in worker listings, get higher matching priority, and build more trust with workers.",
        audiences: &[Audience::Business],
        category: "verification",
    },
    FaqItem {
        id: "business-9",
        question: "Who pays commission - me or the worker?",
        answer: "Only task posters (businesses) pay commission. Workers never pay commission. If you're a subscriber, you pay zero commission within your monthly limit, then 6% after exceeding it. Non-subscribers pay 6% commission on all tasks.",
        audiences: &[Audience::Business],
        category: "pricing",
    },
    FaqItem {
        id: "investor-1",
        question: "How can I invest or partner with WE Community?",
        answer: "We're currently building our partnership program. Join our waitlist to get early access to future investment rounds and partnership opportunities. You'll receive regular platform updates, market insights, metrics, and priority notifications about investment and business collaboration opportunities.",
        audiences: &[Audience::Investor],
        category: "investment",
    },
    FaqItem {
        id: "investor-2",
        question: "What business partnership options are available?",
        answer: "We offer custom business partnerships including API integrations, white-label solutions, bulk task management, co-marketing opportunities, and revenue sharing options. Contact us to discuss custom partnership terms that fit your needs.",
        audiences: &[Audience::Investor],
        category: "partnership",
    },
    FaqItem {
        id: "investor-3",
        question: "What makes WE Community different?",
        answer: "Our AI-powered invoicing, dynamic delivery fees, transparent escrow system with automatic refunds, worker rewards program, and flexible subscription model create a unique value proposition. We focus on transparency, fairness, and user-centric design with verified users and instant UPI payments.",
        audiences: &[Audience::Investor],
        category: "competitive",
    },
    FaqItem {
        id: "general-1",
        question: "How are delivery fees calculated and refunded?",
        answer: "Delivery fees are calculated by distance and proportional to grocery cost. Fee structure varies: 1km, 3km, 5km, 10km have different base rates that scale with grocery cost. If the final bill is less than estimated, the delivery fee is refunded proportionally. For example, if the bill is 20% less, you get 20% of the delivery fee refunded.",
        audiences: &[Audience::Worker, Audience::Business],
        category: "fees",
    },
    FaqItem {
        id: "general-2",
        question: "How does the escrow system protect me?",
        answer: "Payments are locked in escrow when the business approves the invoice. The worker can't access funds until task completion and business approval. If there's a dispute, our team mediates. If the actual bill is less than estimated, automatic refunds are processed. This protects both parties and ensures fair transactions.",
        audiences: &[Audience::Worker, Audience::Business],
        category: "payment",
    },
    FaqItem {
        id: "general-3",
        question: "What task categories are available?",
        answer: "We offer comprehensive task categories: Home/garden, Delivery, Groceries, Cleaning, Shopping, Pharmacy, Home essentials, Data entry, Content writing, Graphic design, Social media management, Research, Translation, Tutoring, and more. Categories are expanding based on user demand.",
        audiences: &[Audience::Worker, Audience::Business],
        category: "tasks",
    },
    FaqItem {
        id: "general-4",
        question: "How do credits work for both posters and workers?",
        answer: "Both posters and workers earn credits by using the platform. Workers: 100 credits = ₹1 (can be cashed to wallet or used for discounts). Posters: Credits can be redeemed for discounts on subscription or task posting. Referral bonuses: Only the referrer earns ₹100 when the referee completes their first task (workers) or posts their first task (posters).",
        audiences: &[Audience::Worker, Audience::Business],
        category: "credits",
    },
    FaqItem {
        id: "general-5",
        question: "Is WE Community available in my city?",
        answer: "We currently operate in 25+ cities across India including Bangalore, Mumbai, Delhi, Chennai, Hyderabad, Pune, and expanding rapidly. We focus on tier-1 and tier-2 cities with strong educational institutions. Check our website for the latest city availability or express interest for your city.",
        audiences: &[Audience::Worker, Audience::Business, Audience::Investor],
        category: "availability",
    },
    FaqItem {
        id: "general-6",
        question: "How do I contact customer support?",
        answer: "Our support team is available 24/7 through multiple channels: in-app chat, WhatsApp, email (support@weCommunity.com), and phone support. Subscribers get priority support. Average response time is under 2 hours. For urgent issues, use in-app chat for fastest response.",
        audiences: &[Audience::Worker, Audience::Business, Audience::Investor],
        category: "support",
    },
];

const INTROS: ContentTable<&str> = ContentTable::new(
    "Everything you need to know about earning on our platform, from verification to payments.",
    "Learn how to find quality talent, manage projects, and ensure successful task completion.",
    "Understand our investment opportunities, returns, and growth potential in detail.",
);

pub fn intro(audience: Audience) -> &'static str {
    *INTROS.get(audience)
}

/// Local refinements of the FAQ list. They never leave the FAQ section and
/// are not persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FaqFilter {
    pub query: String,
    pub category: Option<String>,
}

impl FaqFilter {
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Takes the raw `<select>` value; `"all"` clears the restriction.
    pub fn with_category(mut self, value: &str) -> Self {
        self.category = match value {
            ALL_CATEGORIES | "" => None,
            other => Some(other.to_string()),
        };
        self
    }

    pub fn is_active(&self) -> bool {
        !self.query.is_empty() || self.category.is_some()
    }

    pub fn category_value(&self) -> &str {
        self.category.as_deref().unwrap_or(ALL_CATEGORIES)
    }

    pub fn matches(&self, item: &FaqItem, audience: Audience) -> bool {
        if !item.shown_to(audience) {
            return false;
        }
        if let Some(category) = &self.category {
            if item.category != category {
                return false;
            }
        }
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        item.question.to_lowercase().contains(&needle) || item.answer.to_lowercase().contains(&needle)
    }

    pub fn apply(&self, audience: Audience) -> Vec<&'static FaqItem> {
        FAQS.iter().filter(|item| self.matches(item, audience)).collect()
    }
}

/// `"all"` followed by the audience's categories in first-seen order.
pub fn categories(audience: Audience) -> Vec<&'static str> {
    let mut categories = vec![ALL_CATEGORIES];
    for item in FAQS.iter().filter(|item| item.shown_to(audience)) {
        if !categories.contains(&item.category) {
            categories.push(item.category);
        }
    }
    categories
}

pub fn category_label(category: &str) -> String {
    if category == ALL_CATEGORIES {
        return "All Categories".to_string();
    }
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// "Showing 3 questions for \"escrow\"".
pub fn results_summary(count: usize, query: &str) -> String {
    let noun = if count == 1 { "question" } else { "questions" };
    if query.is_empty() {
        format!("Showing {} {}", count, noun)
    } else {
        format!("Showing {} {} for \"{}\"", count, noun, query)
    }
}

/// `mailto:` link with a subject naming the visitor's role.
pub fn support_email_link(audience: Audience) -> String {
    let subject = format!("Question from a {} visitor", audience.label());
    format!(
        "mailto:{}?subject={}",
        config::SUPPORT_EMAIL,
        urlencoding::encode(&subject)
    )
}

/// WhatsApp chat link with a prefilled greeting.
pub fn support_whatsapp_link(audience: Audience) -> String {
    let text = format!("Hi WE Universal, I'm a {} with a question.", audience.label());
    format!(
        "https://wa.me/91{}?text={}",
        config::SUPPORT_WHATSAPP,
        urlencoding::encode(&text)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(items: &[&FaqItem]) -> Vec<&'static str> {
        items.iter().map(|item| item.id).collect()
    }

    #[test]
    fn every_audience_has_questions() {
        for audience in Audience::ALL {
            assert!(!FaqFilter::default().apply(audience).is_empty(), "{}", audience);
        }
    }

    #[test]
    fn ids_are_unique() {
        let mut seen: Vec<_> = FAQS.iter().map(|item| item.id).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), FAQS.len());
    }

    #[test]
    fn audience_filter_keeps_shared_entries() {
        let investor = FaqFilter::default().apply(Audience::Investor);
        assert_eq!(
            ids(&investor),
            vec!["investor-1", "investor-2", "investor-3", "general-5", "general-6"]
        );
    }

    #[test]
    fn search_is_case_insensitive_over_question_and_answer() {
        let by_question = FaqFilter::default()
            .with_query("GET A VERIFIED")
            .apply(Audience::Worker);
        assert_eq!(ids(&by_question), vec!["worker-4"]);

        // "hoodie" only appears in an answer.
        let by_answer = FaqFilter::default().with_query("Hoodie").apply(Audience::Worker);
        assert_eq!(ids(&by_answer), vec!["worker-2"]);
    }

    #[test]
    fn search_does_not_leak_other_audiences() {
        let results = FaqFilter::default().with_query("hoodie").apply(Audience::Business);
        assert!(results.is_empty());
    }

    #[test]
    fn category_composes_with_search() {
        let filter = FaqFilter::default()
            .with_category("pricing")
            .with_query("limit");
        assert_eq!(
            ids(&filter.apply(Audience::Business)),
            vec!["business-1", "business-6", "business-7", "business-9"]
        );
        assert!(filter.is_active());

        let cleared = filter.with_category("all").with_query("");
        assert!(!cleared.is_active());
        assert_eq!(cleared.category_value(), "all");
    }

    #[test]
    fn categories_start_with_all_in_first_seen_order() {
        assert_eq!(
            categories(Audience::Investor),
            vec!["all", "investment", "partnership", "competitive", "availability", "support"]
        );
        let worker = categories(Audience::Worker);
        assert_eq!(worker[..3], ["all", "pricing", "rewards"]);
    }

    #[test]
    fn labels_and_summary() {
        assert_eq!(category_label("all"), "All Categories");
        assert_eq!(category_label("pricing"), "Pricing");
        assert_eq!(results_summary(1, ""), "Showing 1 question");
        assert_eq!(results_summary(3, "escrow"), "Showing 3 questions for \"escrow\"");
    }

    #[test]
    fn support_links_are_encoded() {
        let mail = support_email_link(Audience::Business);
        assert!(mail.starts_with("mailto:workearn.community@gmail.com?subject="));
        assert!(!mail.contains(' '));
        let chat = support_whatsapp_link(Audience::Worker);
        assert!(chat.starts_with("https://wa.me/919502414128?text=Hi%20WE%20Universal"));
    }
}
