use super::table::ContentTable;
use crate::audience::selection::Audience;

/// Height of the sticky header, subtracted when scrolling to a section.
pub const HEADER_HEIGHT: f64 = 64.0;
/// A section is "active" once its top has passed this line.
pub const ACTIVE_OFFSET: f64 = 100.0;

pub struct NavSection {
    pub id: &'static str,
    pub label: &'static str,
    pub audience_labels: ContentTable<&'static str>,
}

impl NavSection {
    pub fn label_for(&self, audience: Audience) -> &'static str {
        *self.audience_labels.get(audience)
    }
}

pub static NAV_SECTIONS: [NavSection; 5] = [
    NavSection {
        id: "for-you",
        label: "For You",
        audience_labels: ContentTable::new("Start Earning", "Find Talent", "Invest Now"),
    },
    NavSection {
        id: "how-it-works",
        label: "How It Works",
        audience_labels: ContentTable::new("Get Verified", "Post Tasks", "See Returns"),
    },
    NavSection {
        id: "success-stories",
        label: "Success Stories",
        audience_labels: ContentTable::new("Real Earnings", "Happy Clients", "ROI Stories"),
    },
    NavSection {
        id: "pricing",
        label: "Pricing",
        audience_labels: ContentTable::new("Zero Fees", "Fair Rates", "Investment Plans"),
    },
    NavSection {
        id: "get-started",
        label: "Get Started",
        audience_labels: ContentTable::new("Join Now", "Hire Now", "Invest Now"),
    },
];

const HEADER_CTA: ContentTable<&str> = ContentTable::new("Start Earning", "Find Talent", "Invest Now");
const MOBILE_CTA: ContentTable<&str> =
    ContentTable::new("Start Earning Today", "Find Talent Now", "Start Investing");
const FLOATING_ACTION: ContentTable<&str> = ContentTable::new("Earn", "Post", "Join");

pub fn header_cta(audience: Audience) -> &'static str {
    *HEADER_CTA.get(audience)
}

pub fn mobile_cta(audience: Audience) -> &'static str {
    *MOBILE_CTA.get(audience)
}

pub fn floating_action(audience: Audience) -> &'static str {
    *FLOATING_ACTION.get(audience)
}

/// Viewport position of a rendered section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds<'a> {
    pub id: &'a str,
    pub top: f64,
    pub bottom: f64,
}

/// Picks the nav entry to highlight. Sections are given in page order; the
/// first one straddling the offset line wins, otherwise the last one
/// scrolled past. Before any section is reached the first nav entry is
/// active.
pub fn active_section<'a>(sections: &[SectionBounds<'a>], offset: f64) -> &'a str {
    let mut current = NAV_SECTIONS[0].id;
    for section in sections {
        if section.top <= offset && section.bottom >= offset {
            return section.id;
        }
        if section.top < offset {
            current = section.id;
        }
    }
    current
}

/// Where to scroll so a section's top lands under the sticky header.
pub fn scroll_target(section_top: f64, scroll_y: f64) -> f64 {
    (section_top + scroll_y - HEADER_HEIGHT).max(0.0)
}

/// Percentage of the page scrolled, clamped to 0..=100.
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(id: &str, top: f64, bottom: f64) -> SectionBounds<'_> {
        SectionBounds { id, top, bottom }
    }

    #[test]
    fn every_section_has_a_label_for_every_audience() {
        for section in &NAV_SECTIONS {
            for (audience, label) in section.audience_labels.iter() {
                assert!(!label.is_empty(), "{} / {}", section.id, audience);
            }
        }
    }

    #[test]
    fn first_nav_label_follows_audience() {
        assert_eq!(NAV_SECTIONS[0].label_for(Audience::Worker), "Start Earning");
        assert_eq!(NAV_SECTIONS[0].label_for(Audience::Business), "Find Talent");
        assert_eq!(NAV_SECTIONS[0].label_for(Audience::Investor), "Invest Now");
    }

    #[test]
    fn active_section_defaults_to_first() {
        let sections = [bounds("for-you", 400.0, 900.0), bounds("pricing", 900.0, 1500.0)];
        assert_eq!(active_section(&sections, ACTIVE_OFFSET), "for-you");
        assert_eq!(active_section(&[], ACTIVE_OFFSET), "for-you");
    }

    #[test]
    fn active_section_prefers_straddling_section() {
        let sections = [
            bounds("for-you", -900.0, -100.0),
            bounds("how-it-works", -100.0, 300.0),
            bounds("pricing", 300.0, 800.0),
        ];
        assert_eq!(active_section(&sections, ACTIVE_OFFSET), "how-it-works");
    }

    #[test]
    fn active_section_falls_back_to_last_passed() {
        let sections = [
            bounds("for-you", -900.0, -500.0),
            bounds("how-it-works", -500.0, 50.0),
            bounds("pricing", 400.0, 800.0),
        ];
        assert_eq!(active_section(&sections, ACTIVE_OFFSET), "how-it-works");
    }

    #[test]
    fn scroll_progress_is_clamped() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 50.0);
        assert_eq!(scroll_progress(5000.0, 3000.0, 1000.0), 100.0);
        assert_eq!(scroll_progress(10.0, 800.0, 1000.0), 0.0);
    }

    #[test]
    fn scroll_target_accounts_for_header() {
        assert_eq!(scroll_target(500.0, 1000.0), 1436.0);
        assert_eq!(scroll_target(10.0, 0.0), 0.0);
    }
}
