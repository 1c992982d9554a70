use super::table::{clamp_index, rotate, ContentTable};
use crate::audience::selection::Audience;

pub const AUTOPLAY_MS: u32 = 5000;

/// Headline number a testimonial is quoted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Earnings(&'static str),
    Savings(&'static str),
    Returns(&'static str),
}

impl Outcome {
    pub fn value(&self) -> &'static str {
        match self {
            Outcome::Earnings(v) | Outcome::Savings(v) | Outcome::Returns(v) => v,
        }
    }

    pub fn caption(&self) -> &'static str {
        match self {
            Outcome::Earnings(_) => "Monthly Earnings",
            Outcome::Savings(_) => "Cost Savings",
            Outcome::Returns(_) => "Return Potential",
        }
    }
}

pub struct Testimonial {
    pub id: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub audience: Audience,
    pub content: &'static str,
    pub rating: u8,
    pub outcome: Outcome,
    pub avatar: &'static str,
    pub alt: &'static str,
    pub verification: &'static str,
    pub location: &'static str,
}

pub static TESTIMONIALS: [Testimonial; 6] = [
    Testimonial {
        id: "worker-1",
        name: "Priya Sharma",
        role: "B.Tech Student, VIT Vellore",
        audience: Audience::Worker,
        content: "WE Universal changed my college life completely! I earn ₹12,000+ every month doing data entry and content writing tasks. The verification process made me feel safe, and instant UPI payments mean I never have to wait for my money. Perfect for students like me who need flexible income.",
        rating: 5,
        outcome: Outcome::Earnings("₹12,000+/month"),
        avatar: "https://images.unsplash.com/photo-1733737272264-6af8f1aa41fc",
        alt: "Young Indian woman student with long black hair smiling at camera in college campus",
        verification: "College ID Verified",
        location: "Vellore, Tamil Nadu",
    },
    Testimonial {
        id: "worker-2",
        name: "Rahul Kumar",
        role: "Engineering Student, NIT Tirupati",
        audience: Audience::Worker,
        content: "Started with small tasks and now I'm earning ₹15,000+ monthly! The platform's verification system ensures I only work with genuine businesses. The escrow protection gives me confidence that I'll always get paid for my work. Highly recommend to all students!",
        rating: 5,
        outcome: Outcome::Earnings("₹15,000+/month"),
        avatar: "https://img.rocket.new/generatedImages/rocket_gen_img_1ff5b3609-1762274360519.png",
        alt: "Young Indian male engineering student with short hair wearing casual shirt smiling confidently",
        verification: "College ID Verified",
        location: "Tirupati, Andhra Pradesh",
    },
    Testimonial {
        id: "worker-3",
        name: "Sneha Reddy",
        role: "Homemaker & Freelancer",
        audience: Audience::Worker,
        content: "As a homemaker, WE Universal gave me the perfect opportunity to earn from home. I do graphic design tasks during my free time and earn ₹8,000+ monthly. The flexible timing and instant payments make it ideal for managing household responsibilities.",
        rating: 5,
        outcome: Outcome::Earnings("₹8,000+/month"),
        avatar: "https://images.unsplash.com/photo-1536133397561-5028208db592",
        alt: "Indian homemaker woman with traditional attire smiling warmly while working on laptop at home",
        verification: "Aadhaar Verified",
        location: "Chittoor, Andhra Pradesh",
    },
    Testimonial {
        id: "business-1",
        name: "Rajesh Patel",
        role: "CEO, TechStart Solutions",
        audience: Audience::Business,
        content: "WE Universal solved our biggest problem - finding reliable talent quickly. We've hired 50+ verified students for various projects and saved 60% on our operational costs. The quality of work and professionalism of workers is outstanding. Game-changer for small businesses!",
        rating: 5,
        outcome: Outcome::Savings("60% cost reduction"),
        avatar: "https://img.rocket.new/generatedImages/rocket_gen_img_1f50b0990-1762274155673.png",
        alt: "Middle-aged Indian businessman in formal shirt and tie smiling confidently in modern office",
        verification: "GST Verified Business",
        location: "Bangalore, Karnataka",
    },
    Testimonial {
        id: "business-2",
        name: "Meera Agarwal",
        role: "Founder, Digital Marketing Pro",
        audience: Audience::Business,
        content: "The verification system on WE Universal is incredible. Every worker we've hired has been professional and skilled. We've completed 100+ projects with zero payment disputes thanks to the escrow system. It's our go-to platform for finding quality talent.",
        rating: 5,
        outcome: Outcome::Savings("40% time saved"),
        avatar: "https://img.rocket.new/generatedImages/rocket_gen_img_1cef3e415-1762274502183.png",
        alt: "Professional Indian businesswoman with shoulder-length hair in business attire smiling in modern workspace",
        verification: "GST Verified Business",
        location: "Mumbai, Maharashtra",
    },
    Testimonial {
        id: "investor-1",
        name: "Vikram Singh",
        role: "Angel Investor & Former VP, Flipkart",
        audience: Audience::Investor,
        content: "WE Universal represents the future of India's gig economy. The community verification model and focus on trust sets them apart. With projected goals of ₹50L+ paid to workers and 10,000+ completed tasks in Year 1, the potential is impressive. Excited to be part of this journey.",
        rating: 5,
        outcome: Outcome::Returns("20x+ projected returns"),
        avatar: "https://img.rocket.new/generatedImages/rocket_gen_img_191605a11-1762274216267.png",
        alt: "Senior Indian investor in formal business suit with gray hair smiling confidently in corporate setting",
        verification: "Accredited Investor",
        location: "Gurgaon, Haryana",
    },
];

const SUBTITLES: ContentTable<&str> = ContentTable::new(
    "Hear from students and professionals who are earning flexible income through our platform.",
    "Discover how businesses are finding quality talent and reducing costs with our verified workers.",
    "Learn why investors are excited about our growth potential and market opportunity.",
);

/// Year-one targets shown under the carousel.
pub const PROJECTED_GOALS: [(&str, &str); 4] = [
    ("4.8/5", "Target Rating"),
    ("10K+", "Target: Tasks"),
    ("₹50L+", "Target: Paid Out"),
    ("100%", "Target: Verified"),
];

pub fn subtitle(audience: Audience) -> &'static str {
    *SUBTITLES.get(audience)
}

pub fn for_audience(audience: Audience) -> Vec<&'static Testimonial> {
    TESTIMONIALS
        .iter()
        .filter(|testimonial| testimonial.audience == audience)
        .collect()
}

/// Carousel position. Manual navigation wraps and stops autoplay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    pub index: usize,
    pub len: usize,
    pub autoplay: bool,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len,
            autoplay: true,
        }
    }

    /// Same position and autoplay state over a list of a different length.
    pub fn resized(self, len: usize) -> Self {
        Self {
            index: clamp_index(self.index, len),
            len,
            ..self
        }
    }

    pub fn tick(self) -> Self {
        if !self.autoplay {
            return self;
        }
        Self {
            index: rotate(self.index, self.len),
            ..self
        }
    }

    pub fn previous(self) -> Self {
        let index = match self.index {
            0 => self.len.saturating_sub(1),
            i => i - 1,
        };
        Self {
            index,
            autoplay: false,
            ..self
        }
    }

    pub fn next(self) -> Self {
        Self {
            index: rotate(self.index, self.len),
            autoplay: false,
            ..self
        }
    }

    pub fn jump(self, index: usize) -> Self {
        Self {
            index: clamp_index(index, self.len),
            autoplay: false,
            ..self
        }
    }

    pub fn set_autoplay(self, autoplay: bool) -> Self {
        Self { autoplay, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn testimonials_match_their_audience_outcome() {
        for testimonial in &TESTIMONIALS {
            let expected = match testimonial.audience {
                Audience::Worker => "Monthly Earnings",
                Audience::Business => "Cost Savings",
                Audience::Investor => "Return Potential",
            };
            assert_eq!(testimonial.outcome.caption(), expected, "{}", testimonial.id);
        }
    }

    #[test]
    fn filtering_by_audience() {
        assert_eq!(for_audience(Audience::Worker).len(), 3);
        assert_eq!(for_audience(Audience::Business).len(), 2);
        assert_eq!(for_audience(Audience::Investor)[0].name, "Vikram Singh");
    }

    #[test]
    fn autoplay_rotates_until_navigated() {
        let carousel = Carousel::new(3).tick().tick();
        assert_eq!(carousel.index, 2);
        assert_eq!(carousel.tick().index, 0);

        let manual = carousel.next();
        assert_eq!(manual.index, 0);
        assert!(!manual.autoplay);
        assert_eq!(manual.tick(), manual);
    }

    #[test]
    fn previous_wraps_to_the_end() {
        let carousel = Carousel::new(3).previous();
        assert_eq!(carousel.index, 2);
        assert_eq!(Carousel::new(1).previous().index, 0);
    }

    #[test]
    fn switching_audience_clamps_the_index() {
        let worker = Carousel::new(3).jump(2).set_autoplay(true);
        let investor = worker.resized(1);
        assert_eq!(investor.index, 0);
        assert!(investor.autoplay);
    }
}
