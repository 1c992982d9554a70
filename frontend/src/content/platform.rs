//! Audience-independent platform numbers and the shared how-it-works
//! timeline.

pub const COUNT_UP_MS: f64 = 2000.0;
/// Delay between successive counters starting.
pub const COUNT_UP_STAGGER_MS: u32 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    Payout,
    Tasks,
    Rating,
    Users,
    Businesses,
    Growth,
}

pub struct Metric {
    pub kind: MetricKind,
    pub label: &'static str,
    pub value: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub accent: &'static str,
}

pub static METRICS: [Metric; 6] = [
    Metric {
        kind: MetricKind::Payout,
        label: "Total Paid Out",
        value: "₹50,00,000",
        icon: "👛",
        description: "Paid to verified workers",
        accent: "success",
    },
    Metric {
        kind: MetricKind::Tasks,
        label: "Completed Tasks",
        value: "10,000",
        icon: "✅",
        description: "Successfully completed",
        accent: "primary",
    },
    Metric {
        kind: MetricKind::Rating,
        label: "Average Rating",
        value: "4.8",
        icon: "⭐",
        description: "Out of 5 stars",
        accent: "warning",
    },
    Metric {
        kind: MetricKind::Users,
        label: "Active Users",
        value: "15,000",
        icon: "👥",
        description: "Verified participants",
        accent: "secondary",
    },
    Metric {
        kind: MetricKind::Businesses,
        label: "Partner Businesses",
        value: "500",
        icon: "🏢",
        description: "Registered companies",
        accent: "accent",
    },
    Metric {
        kind: MetricKind::Growth,
        label: "Monthly Growth",
        value: "25%",
        icon: "📈",
        description: "User base expansion",
        accent: "success",
    },
];

pub const TRUST_BADGES: [(&str, &str, &str); 4] = [
    ("🛡️", "100% Verified", "All users checked"),
    ("⚡", "Instant Payments", "UPI transfers"),
    ("🔒", "Escrow Protected", "Secure transactions"),
    ("🏅", "Quality Assured", "Rated work"),
];

/// Number inside a display value, ignoring `₹`, `,` and `%`. Unparseable
/// input counts as zero.
pub fn numeric_value(display: &str) -> f64 {
    let cleaned: String = display
        .chars()
        .filter(|c| !matches!(c, '₹' | ',' | '%'))
        .collect();
    cleaned.trim().parse().unwrap_or(0.0)
}

pub fn ease_out_quart(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(4)
}

impl Metric {
    /// Integer the counter climbs to. Ratings count in tenths.
    pub fn target(&self) -> u64 {
        let value = numeric_value(self.value);
        let scaled = match self.kind {
            MetricKind::Rating => value * 10.0,
            _ => value,
        };
        scaled.round() as u64
    }

    pub fn value_at(&self, elapsed_ms: f64) -> u64 {
        let eased = ease_out_quart(elapsed_ms / COUNT_UP_MS);
        (self.target() as f64 * eased).floor() as u64
    }

    pub fn format(&self, animated: u64) -> String {
        match self.kind {
            MetricKind::Payout => format!("₹{}", group_indian(animated)),
            MetricKind::Tasks | MetricKind::Users => group_thousands(animated),
            MetricKind::Rating => format!("{:.1}", animated as f64 / 10.0),
            MetricKind::Growth => format!("{}%", animated),
            MetricKind::Businesses => animated.to_string(),
        }
    }

    /// Filled stars for the rating card.
    pub fn stars(animated: u64) -> usize {
        (animated / 10).min(5) as usize
    }

    /// Progress bar width in percent, for the cards that show one.
    pub fn bar_width(&self, animated: u64) -> Option<f64> {
        match self.kind {
            MetricKind::Growth => Some((animated as f64 * 4.0).min(100.0)),
            MetricKind::Rating => Some((animated as f64 / 10.0 * 20.0).min(100.0)),
            _ => None,
        }
    }
}

/// 10000 -> "10,000"
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Lakh/crore grouping: 5000000 -> "50,00,000"
pub fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, last_three) = digits.split_at(digits.len() - 3);
    let mut out = String::new();
    for (i, c) in head.chars().enumerate() {
        if i > 0 && (head.len() - i) % 2 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out.push(',');
    out.push_str(last_three);
    out
}

pub struct TimelineStep {
    pub step: u8,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub static HOW_IT_WORKS: [TimelineStep; 5] = [
    TimelineStep {
        step: 1,
        title: "Community Verification",
        description: "All users undergo strict verification using College ID, Aadhaar, and background checks to ensure a trusted ecosystem.",
        icon: "🛡️",
    },
    TimelineStep {
        step: 2,
        title: "Smart Matching",
        description: "Our AI-powered system matches tasks with the most suitable verified workers based on skills, location, and availability.",
        icon: "⚡",
    },
    TimelineStep {
        step: 3,
        title: "Escrow Protection",
        description: "Payments are held in secure escrow until task completion, protecting both workers and businesses throughout the process.",
        icon: "🔒",
    },
    TimelineStep {
        step: 4,
        title: "Task Completion",
        description: "Workers complete tasks with milestone tracking and real-time communication, ensuring quality and transparency.",
        icon: "✅",
    },
    TimelineStep {
        step: 5,
        title: "Instant Payment",
        description: "Upon approval, payments are instantly transferred via UPI, with ratings and reviews building long-term reputation.",
        icon: "👛",
    },
];

/// How far a section has travelled through the viewport: 0 when its top
/// meets the bottom edge, 1 when its bottom leaves the top edge.
pub fn section_travel(rect_top: f64, rect_height: f64, viewport_height: f64) -> f64 {
    let span = viewport_height + rect_height;
    if span <= 0.0 {
        return 0.0;
    }
    ((viewport_height - rect_top) / span).clamp(0.0, 1.0)
}

/// Timeline step lit up for a given travel. Steps advance evenly between
/// 20% and 80% of the way through.
pub fn timeline_step(travel: f64, steps: usize) -> usize {
    if steps == 0 {
        return 0;
    }
    let last = (steps - 1) as f64;
    let t = ((travel - 0.2) / 0.6).clamp(0.0, 1.0);
    (t * last).floor() as usize
}

/// Time the `index`th counter has been running, `total_ms` after the first
/// one started.
pub fn counter_elapsed(total_ms: f64, index: usize) -> f64 {
    (total_ms - index as f64 * f64::from(COUNT_UP_STAGGER_MS)).max(0.0)
}

/// True once the last of `count` staggered counters has landed.
pub fn count_up_done(total_ms: f64, count: usize) -> bool {
    counter_elapsed(total_ms, count.saturating_sub(1)) >= COUNT_UP_MS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metric(kind: MetricKind) -> &'static Metric {
        METRICS
            .iter()
            .find(|metric| metric.kind == kind)
            .expect("metric present")
    }

    #[test]
    fn numeric_value_strips_currency_and_separators() {
        assert_eq!(numeric_value("₹50,00,000"), 5_000_000.0);
        assert_eq!(numeric_value("25%"), 25.0);
        assert_eq!(numeric_value("4.8"), 4.8);
        assert_eq!(numeric_value("n/a"), 0.0);
    }

    #[test]
    fn easing_hits_both_ends() {
        assert_eq!(ease_out_quart(0.0), 0.0);
        assert_eq!(ease_out_quart(1.0), 1.0);
        assert_eq!(ease_out_quart(2.0), 1.0);
        assert_eq!(ease_out_quart(0.5), 0.9375);
    }

    #[test]
    fn counters_finish_on_the_display_value() {
        for metric in &METRICS {
            let done = metric.value_at(COUNT_UP_MS);
            assert_eq!(metric.format(done), metric.value, "{:?}", metric.kind);
        }
        assert_eq!(metric(MetricKind::Tasks).value_at(0.0), 0);
    }

    #[test]
    fn rating_counts_in_tenths() {
        let rating = metric(MetricKind::Rating);
        assert_eq!(rating.target(), 48);
        assert_eq!(Metric::stars(48), 4);
        assert_eq!(rating.bar_width(48), Some(96.0));
        assert_eq!(metric(MetricKind::Growth).bar_width(25), Some(100.0));
        assert_eq!(metric(MetricKind::Users).bar_width(10), None);
    }

    #[test]
    fn grouping() {
        assert_eq!(group_thousands(15000), "15,000");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1234567), "1,234,567");
        assert_eq!(group_indian(5_000_000), "50,00,000");
        assert_eq!(group_indian(123_456), "1,23,456");
        assert_eq!(group_indian(12), "12");
    }

    #[test]
    fn timeline_advances_through_the_middle_of_the_scroll() {
        assert_eq!(timeline_step(0.1, 5), 0);
        assert_eq!(timeline_step(0.5, 5), 2);
        assert_eq!(timeline_step(0.95, 5), 4);
        assert_eq!(timeline_step(0.5, 0), 0);
        assert_eq!(section_travel(800.0, 600.0, 800.0), 0.0);
        assert_eq!(section_travel(-600.0, 600.0, 800.0), 1.0);
    }

    #[test]
    fn counters_start_staggered() {
        assert_eq!(counter_elapsed(500.0, 0), 500.0);
        assert_eq!(counter_elapsed(500.0, 2), 100.0);
        assert_eq!(counter_elapsed(100.0, 3), 0.0);
        assert!(!count_up_done(2000.0, METRICS.len()));
        assert!(count_up_done(3000.0, METRICS.len()));
    }
}
