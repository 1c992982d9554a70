use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::content::platform::{section_travel, timeline_step, HOW_IT_WORKS};
use crate::dom;

const SECTION_ID: &str = "how-it-works";

#[function_component(HowItWorksSection)]
pub fn how_it_works_section() -> Html {
    // Re-render on scroll; the lit step is derived from the section's rect.
    let _ = use_window_scroll();

    let active = dom::element_rect(SECTION_ID)
        .map(|(top, height)| {
            timeline_step(
                section_travel(top, height, dom::viewport_height()),
                HOW_IT_WORKS.len(),
            )
        })
        .unwrap_or(0);
    let fill = if HOW_IT_WORKS.len() > 1 {
        active as f64 / (HOW_IT_WORKS.len() - 1) as f64 * 100.0
    } else {
        0.0
    };

    html! {
        <section id={SECTION_ID} class="how-it-works">
            <div class="section-inner">
                <div class="section-heading">
                    <span class="section-pill">{"⚙️ How It Works"}</span>
                    <h2>{"Built on "}<span class="accent">{"Trust & Transparency"}</span></h2>
                    <p>{"Every task on WE Universal follows the same protected path, from verification to instant payment."}</p>
                </div>

                <div class="timeline">
                    <div class="timeline-rail">
                        <div class="timeline-fill" style={format!("height: {:.0}%", fill)}></div>
                    </div>
                    { for HOW_IT_WORKS.iter().enumerate().map(|(i, step)| html! {
                        <div class={classes!("timeline-step", (i <= active).then(|| "lit"), (i == active).then(|| "current"))}>
                            <div class="timeline-marker">{step.icon}</div>
                            <div class="timeline-body">
                                <span class="timeline-number">{format!("Step {}", step.step)}</span>
                                <h3>{step.title}</h3>
                                <p>{step.description}</p>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                    .how-it-works {
                        padding: 5rem 1.5rem;
                        background: #f9fafb;
                    }

                    .timeline {
                        position: relative;
                        max-width: 48rem;
                        margin: 0 auto;
                    }

                    .timeline-rail {
                        position: absolute;
                        left: 1.5rem;
                        top: 0;
                        bottom: 0;
                        width: 3px;
                        background: #e5e7eb;
                    }

                    .timeline-fill {
                        width: 100%;
                        background: linear-gradient(180deg, #2563eb, #14b8a6);
                        transition: height 0.4s ease;
                    }

                    .timeline-step {
                        position: relative;
                        display: flex;
                        gap: 1.5rem;
                        padding: 1.25rem 0;
                        opacity: 0.45;
                        transition: opacity 0.3s ease;
                    }

                    .timeline-step.lit {
                        opacity: 1;
                    }

                    .timeline-marker {
                        flex-shrink: 0;
                        width: 3rem;
                        height: 3rem;
                        border-radius: 9999px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: white;
                        border: 2px solid #e5e7eb;
                        font-size: 1.25rem;
                        z-index: 1;
                    }

                    .timeline-step.current .timeline-marker {
                        border-color: #2563eb;
                        box-shadow: 0 0 0 6px rgba(37, 99, 235, 0.15);
                    }

                    .timeline-number {
                        font-size: 0.75rem;
                        text-transform: uppercase;
                        color: #2563eb;
                        font-weight: 600;
                    }

                    .timeline-body h3 {
                        margin: 0.25rem 0;
                    }

                    .timeline-body p {
                        margin: 0;
                        color: #6b7280;
                        line-height: 1.6;
                    }
                "#}
            </style>
        </section>
    }
}
