use gloo_timers::callback::Timeout;
use log::debug;
use yew::prelude::*;

use crate::audience::hooks::use_audience;
use crate::audience::selection::Audience;
use crate::components::banner::PreLaunchBanner;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::scroll_progress::ScrollProgress;
use crate::components::tracking::ConversionTracking;
use crate::content::{navigation, seo};
use crate::dom;
use crate::pages::sections::{
    cta::CtaSection, faq::FaqSection, hero::HeroSection, how_it_works::HowItWorksSection,
    journey::JourneySection, metrics::MetricsSection, pricing::PricingSection,
    testimonials::TestimonialsSection, value_props::ValuePropsSection,
};

const SPLASH_MS: u32 = 1000;
const STRUCTURED_DATA_ID: &str = "we-structured-data";

#[function_component(Landing)]
pub fn landing() -> Html {
    let audience = use_audience();
    let current = audience.get();
    let loading = use_state(|| true);

    // Scroll to top and drop the splash once, on mount.
    {
        let loading = loading.clone();
        use_effect_with_deps(
            move |_| {
                dom::scroll_to_top();
                let timeout = Timeout::new(SPLASH_MS, move || loading.set(false));
                move || drop(timeout)
            },
            (),
        );
    }

    // Head tags follow the audience.
    use_effect_with_deps(
        move |audience: &Audience| {
            let copy = seo::copy(*audience);
            dom::set_title(&copy.title());
            for (attribute, key, content) in seo::meta_tags(*audience) {
                dom::set_meta(attribute, key, &content);
            }
            dom::set_json_ld(STRUCTURED_DATA_ID, &seo::structured_data(*audience).to_string());
            debug!("Head tags updated for {}", audience);
            || ()
        },
        current,
    );

    if *loading {
        return html! {
            <div class="splash">
                <div class="splash-spinner"></div>
                <h2>{"Loading WE Universal"}</h2>
                <p>{"Preparing your personalized experience..."}</p>
                <style>
                    {r#"
                        .splash {
                            min-height: 100vh;
                            display: flex;
                            flex-direction: column;
                            align-items: center;
                            justify-content: center;
                            background: #f9fafb;
                            color: #111827;
                        }

                        .splash p {
                            color: #6b7280;
                        }

                        .splash-spinner {
                            width: 3rem;
                            height: 3rem;
                            border-radius: 9999px;
                            border: 4px solid #dbeafe;
                            border-top-color: #2563eb;
                            animation: splash-spin 1s linear infinite;
                        }

                        @keyframes splash-spin {
                            to { transform: rotate(360deg); }
                        }
                    "#}
                </style>
            </div>
        };
    }

    let on_fab = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        dom::scroll_to_section("get-started");
    });

    html! {
        <div class="landing">
            <ConversionTracking />
            <ScrollProgress />
            <PreLaunchBanner />
            <Header />
            <main>
                <HeroSection />
                <div id="for-you">
                    <ValuePropsSection />
                    <JourneySection />
                </div>
                <HowItWorksSection />
                <TestimonialsSection />
                <MetricsSection />
                <PricingSection />
                <CtaSection />
                <FaqSection />
            </main>
            <Footer />
            <button class="fab" data-cta="floating_action" onclick={on_fab}>
                <span class="fab-icon">{current.icon()}</span>
                <span>{navigation::floating_action(current)}</span>
            </button>
            <style>
                {r#"
                    .landing {
                        font-family: 'Inter', system-ui, sans-serif;
                        color: #111827;
                        background: white;
                    }

                    .fab {
                        display: none;
                        position: fixed;
                        right: 1.25rem;
                        bottom: 1.25rem;
                        z-index: 40;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.875rem 1.25rem;
                        border: none;
                        border-radius: 9999px;
                        background: #2563eb;
                        color: white;
                        font-weight: 600;
                        box-shadow: 0 10px 25px rgba(37, 99, 235, 0.4);
                        cursor: pointer;
                    }

                    @media (max-width: 1024px) {
                        .fab {
                            display: inline-flex;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
