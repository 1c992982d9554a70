use super::table::ContentTable;
use crate::audience::selection::Audience;

pub struct JourneyStep {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub details: [&'static str; 4],
}

pub struct JourneyCopy {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub cta_text: &'static str,
    pub steps: [JourneyStep; 4],
}

static JOURNEYS: ContentTable<JourneyCopy> = ContentTable::new(
    JourneyCopy {
        title: "Your Path to Earning",
        subtitle: "From verification to earning - see how easy it is to start making money with verified tasks.",
        cta_text: "Start Your Journey",
        steps: [
            JourneyStep {
                id: "signup",
                title: "Sign Up & Verify",
                description: "Create account with College ID/Aadhaar verification",
                icon: "🪪",
                details: [
                    "Upload College ID or Aadhaar card",
                    "Phone number verification via OTP",
                    "Profile completion with skills",
                    "Background verification (24-48 hours)",
                ],
            },
            JourneyStep {
                id: "browse",
                title: "Browse & Apply",
                description: "Find tasks matching your skills and schedule",
                icon: "🔍",
                details: [
                    "Filter tasks by location, skills, pay",
                    "View AI-generated upfront price estimates",
                    "Apply with custom proposals",
                    "Get instant notifications",
                ],
            },
            JourneyStep {
                id: "work",
                title: "Complete Tasks",
                description: "Work on approved tasks with escrow protection",
                icon: "✅",
                details: [
                    "Start work after business approval",
                    "Track progress with milestones",
                    "Upload receipt after completion",
                    "System compares actual vs estimated bill",
                ],
            },
            JourneyStep {
                id: "earn",
                title: "Get Paid & Earn Rewards",
                description: "Receive instant UPI payments and unlock rewards",
                icon: "👛",
                details: [
                    "Instant UPI payment on approval",
                    "Earn credits for each completed task",
                    "Unlock rewards: 25 tasks = t-shirt, 50 = hoodie, 100 = badge + bonus",
                    "Build reputation and get more offers",
                ],
            },
        ],
    },
    JourneyCopy {
        title: "Your Hiring Journey",
        subtitle: "From posting tasks to completion - discover how to find and hire verified talent efficiently.",
        cta_text: "Post Your First Task",
        steps: [
            JourneyStep {
                id: "register",
                title: "Sign Up & Choose Plan",
                description: "Register and select a subscription plan",
                icon: "🏢",
                details: [
                    "Create business account",
                    "Choose subscription plan (₹299, ₹599, or ₹799/month)",
                    "Verify business details",
                    "Set up payment methods",
                ],
            },
            JourneyStep {
                id: "post",
                title: "Post Task & AI Invoice",
                description: "Create task and get AI-generated upfront price estimate",
                icon: "➕",
                details: [
                    "Define task scope and requirements",
                    "AI generates estimated invoice with buffer",
                    "Dynamic delivery fee calculated",
                    "Review and approve invoice",
                ],
            },
            JourneyStep {
                id: "hire",
                title: "Approve & Escrow Lock",
                description: "Approve invoice and lock payment in escrow",
                icon: "🔒",
                details: [
                    "Review AI-generated invoice",
                    "Approve estimated price",
                    "Payment locked in secure escrow",
                    "Worker accepts and begins task",
                ],
            },
            JourneyStep {
                id: "manage",
                title: "Complete & Automatic Refund",
                description: "Task completed with automatic refunds if bill is less",
                icon: "⚙️",
                details: [
                    "Worker completes task and uploads receipt",
                    "System compares actual vs estimated bill",
                    "Automatic refund if bill is less (buffer + delivery fee)",
                    "Approve and release payment to worker",
                ],
            },
        ],
    },
    JourneyCopy {
        title: "Your Investment Process",
        subtitle: "From interest to returns - understand our transparent investment process and growth potential.",
        cta_text: "Begin Investment Process",
        steps: [
            JourneyStep {
                id: "interest",
                title: "Join Waitlist",
                description: "Join our partnership waitlist for future opportunities",
                icon: "📈",
                details: [
                    "Sign up for partnership waitlist",
                    "Receive platform updates and metrics",
                    "Get market insights and research",
                    "Early access to opportunities",
                ],
            },
            JourneyStep {
                id: "review",
                title: "Review Platform Metrics",
                description: "Access detailed platform metrics and growth data",
                icon: "📄",
                details: [
                    "View platform growth metrics",
                    "Market analysis and opportunity",
                    "User acquisition and retention data",
                    "Revenue and transaction metrics",
                ],
            },
            JourneyStep {
                id: "diligence",
                title: "Explore Partnerships",
                description: "Explore custom business partnership options",
                icon: "🔍",
                details: [
                    "Review partnership opportunities",
                    "API integrations and white-label options",
                    "Bulk task management solutions",
                    "Co-marketing and revenue sharing",
                ],
            },
            JourneyStep {
                id: "invest",
                title: "Partner With Us",
                description: "Establish partnership and track collaboration",
                icon: "🤝",
                details: [
                    "Custom partnership agreement",
                    "Integration and setup",
                    "Regular updates and support",
                    "Track partnership metrics",
                ],
            },
        ],
    },
);

pub fn journey(audience: Audience) -> &'static JourneyCopy {
    JOURNEYS.get(audience)
}

/// Stepper position. Previous/next saturate at the ends instead of wrapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stepper {
    pub active: usize,
    pub len: usize,
}

impl Stepper {
    pub fn new(len: usize) -> Self {
        Self { active: 0, len }
    }

    pub fn previous(self) -> Self {
        Self {
            active: self.active.saturating_sub(1),
            ..self
        }
    }

    pub fn next(self) -> Self {
        Self {
            active: (self.active + 1).min(self.len.saturating_sub(1)),
            ..self
        }
    }

    pub fn jump(self, index: usize) -> Self {
        Self {
            active: index.min(self.len.saturating_sub(1)),
            ..self
        }
    }

    pub fn at_start(&self) -> bool {
        self.active == 0
    }

    pub fn at_end(&self) -> bool {
        self.active + 1 >= self.len
    }

    pub fn reached(&self, index: usize) -> bool {
        index <= self.active
    }

    /// Width of the progress line, in percent.
    pub fn progress(&self) -> f64 {
        if self.len == 0 {
            return 0.0;
        }
        (self.active + 1) as f64 / self.len as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_audience_has_its_own_path() {
        assert_eq!(journey(Audience::Worker).steps[0].title, "Sign Up & Verify");
        assert_eq!(journey(Audience::Business).steps[2].title, "Approve & Escrow Lock");
        assert_eq!(journey(Audience::Investor).title, "Your Investment Process");
    }

    #[test]
    fn stepper_saturates_at_both_ends() {
        let stepper = Stepper::new(4);
        assert!(stepper.at_start());
        assert_eq!(stepper.previous().active, 0);

        let last = stepper.next().next().next().next();
        assert_eq!(last.active, 3);
        assert!(last.at_end());
        assert_eq!(last.progress(), 100.0);
    }

    #[test]
    fn jump_clamps_and_marks_reached_steps() {
        let stepper = Stepper::new(4).jump(9);
        assert_eq!(stepper.active, 3);
        let stepper = stepper.jump(1);
        assert!(stepper.reached(0));
        assert!(stepper.reached(1));
        assert!(!stepper.reached(2));
        assert_eq!(stepper.progress(), 50.0);
    }
}
