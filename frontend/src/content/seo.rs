use serde_json::{json, Value};

use super::table::ContentTable;
use crate::audience::selection::Audience;
use crate::config;

pub const BASE_TITLE: &str = "WE Universal - India's Most Trusted Gig Platform";
pub const CANONICAL_PATH: &str = "/landing-page";
pub const OG_IMAGE_PATH: &str = "/og-image.jpg";

pub struct SeoCopy {
    pub title_suffix: &'static str,
    pub description: &'static str,
    pub keywords: &'static str,
}

impl SeoCopy {
    pub fn title(&self) -> String {
        format!("{} | {}", BASE_TITLE, self.title_suffix)
    }
}

static SEO: ContentTable<SeoCopy> = ContentTable::new(
    SeoCopy {
        title_suffix: "Zero Commission Forever - Earn 100%",
        description: "Workers never pay commission - keep 100% of your earnings forever. Earn rewards, badges, and bonuses. Join 10,000+ students earning ₹10,000+/month with instant UPI payments.",
        keywords: "zero commission, worker rewards, student jobs, flexible income, part-time work, online earning, UPI payments, gig work, worker rewards program, verified badge, credits, referral bonuses",
    },
    SeoCopy {
        title_suffix: "Flexible Subscription Plans - AI Invoicing",
        description: "Choose subscription plans (₹299, ₹599, ₹799/month) with zero commission up to your limit. AI-powered invoicing, dynamic delivery fees, automatic refunds. Post tasks with complete transparency.",
        keywords: "subscription plans, task posting, AI invoice, dynamic delivery fees, escrow protection, verified workers, business solutions, flexible pricing, automatic refunds",
    },
    SeoCopy {
        title_suffix: "Partnership Opportunities & Waitlist",
        description: "Join our partnership waitlist for future investment and business collaboration opportunities. Get early access to platform metrics, market insights, and partnership options.",
        keywords: "partnership opportunities, business partnerships, investment waitlist, gig economy, platform metrics, market insights, collaboration",
    },
);

pub fn copy(audience: Audience) -> &'static SeoCopy {
    SEO.get(audience)
}

pub fn canonical_url() -> String {
    format!("{}{}", config::SITE_URL, CANONICAL_PATH)
}

pub fn og_image_url() -> String {
    format!("{}{}", config::SITE_URL, OG_IMAGE_PATH)
}

/// `<meta>` tags to keep in sync with the audience, as
/// (attribute, key, content). `attribute` is `name` or `property`.
pub fn meta_tags(audience: Audience) -> Vec<(&'static str, &'static str, String)> {
    let seo = copy(audience);
    let title = seo.title();
    vec![
        ("name", "description", seo.description.to_string()),
        ("name", "keywords", seo.keywords.to_string()),
        ("property", "og:title", title.clone()),
        ("property", "og:description", seo.description.to_string()),
        ("property", "og:type", "website".to_string()),
        ("property", "og:url", canonical_url()),
        ("property", "og:image", og_image_url()),
        ("name", "twitter:card", "summary_large_image".to_string()),
        ("name", "twitter:title", title),
        ("name", "twitter:description", seo.description.to_string()),
        ("name", "twitter:image", og_image_url()),
    ]
}

/// schema.org `WebSite` block for the page head.
pub fn structured_data(audience: Audience) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "WebSite",
        "name": "WE Universal",
        "url": config::SITE_URL,
        "description": copy(audience).description,
        "potentialAction": {
            "@type": "SearchAction",
            "target": format!("{}/search?q={{search_term_string}}", config::SITE_URL),
            "query-input": "required name=search_term_string",
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_share_the_base() {
        for (audience, seo) in SEO.iter() {
            assert!(seo.title().starts_with(BASE_TITLE), "{}", audience);
        }
        assert_eq!(
            copy(Audience::Investor).title(),
            "WE Universal - India's Most Trusted Gig Platform | Partnership Opportunities & Waitlist"
        );
    }

    #[test]
    fn meta_tags_follow_audience() {
        let tags = meta_tags(Audience::Business);
        let og_title = tags
            .iter()
            .find(|(_, key, _)| *key == "og:title")
            .map(|(_, _, content)| content.as_str());
        assert_eq!(og_title, Some(copy(Audience::Business).title().as_str()));
        assert!(tags
            .iter()
            .any(|(_, key, content)| *key == "og:url" && content == "https://weuniversal.com/landing-page"));
    }

    #[test]
    fn structured_data_is_a_website_with_search() {
        let data = structured_data(Audience::Worker);
        assert_eq!(data["@type"], "WebSite");
        assert_eq!(data["description"], copy(Audience::Worker).description);
        assert_eq!(
            data["potentialAction"]["target"],
            "https://weuniversal.com/search?q={search_term_string}"
        );
    }
}
