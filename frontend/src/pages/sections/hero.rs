use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::audience::hooks::use_audience;
use crate::audience::selection::Audience;
use crate::components::audience_selector::AudienceSelector;
use crate::content::hero::{self, HERO_CARDS, HEADLINE_ROTATION_MS, TRUST_INDICATORS};
use crate::content::table::rotate;
use crate::dom;

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let audience = use_audience();
    let headline = use_state(|| 0usize);
    let current = audience.get();
    let copy = hero::copy(current);
    let headlines = hero::headlines(current);

    {
        let headline = headline.clone();
        let len = headlines.len();
        use_interval(move || headline.set(rotate(*headline, len)), HEADLINE_ROTATION_MS);
    }

    let pick = |choice: Audience| {
        let audience = audience.clone();
        Callback::from(move |_: MouseEvent| audience.select(choice))
    };

    let on_cta = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        dom::scroll_to_section("get-started");
    });

    html! {
        <section class="hero-section">
            <div class="hero-grid">
                <div class="hero-copy">
                    <AudienceSelector class="hero-selector" />
                    <h1 class="hero-headline">{headlines[*headline % headlines.len()].clone()}</h1>
                    <p class="hero-subtitle">{copy.hero_subtitle}</p>
                    <div class="hero-benefits">
                        { for copy.benefits.iter().map(|benefit| html! {
                            <span class="hero-benefit">{"✓ "}{*benefit}</span>
                        }) }
                    </div>
                    <div class="hero-actions">
                        <button class="hero-cta" data-cta="hero_primary" onclick={on_cta}>
                            {copy.cta_text}{" →"}
                        </button>
                        if current == Audience::Worker {
                            <span class="hero-upi">{"⚡ Instant UPI Payments"}</span>
                        }
                    </div>
                    <div class="trust-indicators">
                        { for TRUST_INDICATORS.iter().map(|(icon, text)| html! {
                            <span class="trust-indicator">{*icon}{" "}{*text}</span>
                        }) }
                    </div>
                </div>

                <div class="hero-cards">
                    { for HERO_CARDS.iter().map(|card| {
                        let selected = card.audience == current;
                        html! {
                            <div
                                class={classes!("hero-card", card.gradient, selected.then(|| "selected"))}
                                data-cta={format!("hero_card_{}", card.audience.as_str())}
                                onclick={pick(card.audience)}
                            >
                                <div class="hero-card-top">
                                    <span class="hero-card-icon">{card.icon}</span>
                                    if selected {
                                        <span class="hero-card-check">{"✓"}</span>
                                    }
                                </div>
                                <h3>{card.title}</h3>
                                <p class="hero-card-subtitle">{card.subtitle}</p>
                                <p class="hero-card-highlight">{card.highlight}</p>
                                <ul>
                                    { for card.features.iter().map(|feature| html! { <li>{"✓ "}{*feature}</li> }) }
                                </ul>
                            </div>
                        }
                    }) }
                    <div class="hero-dots">
                        { for Audience::ALL.iter().map(|option| html! {
                            <button
                                class={classes!("hero-dot", (*option == current).then(|| "selected"))}
                                aria-label={option.label()}
                                onclick={pick(*option)}
                            />
                        }) }
                    </div>
                </div>
            </div>
            <style>
                {r#"
                    .hero-section {
                        padding: 5rem 1.5rem;
                        background: linear-gradient(135deg, #eff6ff, #ffffff 50%, #f0fdfa);
                    }

                    .hero-grid {
                        max-width: 1200px;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: 1.1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                    }

                    .hero-headline {
                        font-size: 3rem;
                        line-height: 1.1;
                        min-height: 7rem;
                        margin: 0 0 1.5rem;
                    }

                    .hero-subtitle {
                        font-size: 1.2rem;
                        color: #4b5563;
                    }

                    .hero-benefits,
                    .trust-indicators {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                        margin: 1.5rem 0;
                    }

                    .hero-benefit {
                        color: #059669;
                        font-weight: 500;
                    }

                    .hero-actions {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                    }

                    .hero-cta {
                        background: #2563eb;
                        color: white;
                        border: none;
                        border-radius: 0.75rem;
                        padding: 0.9rem 1.75rem;
                        font-size: 1.05rem;
                        cursor: pointer;
                    }

                    .trust-indicator {
                        font-size: 0.875rem;
                        color: #6b7280;
                    }

                    .hero-cards {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }

                    .hero-card {
                        padding: 1.5rem;
                        border-radius: 1rem;
                        color: white;
                        cursor: pointer;
                        transition: transform 0.2s ease, box-shadow 0.2s ease;
                    }

                    .hero-card:hover,
                    .hero-card.selected {
                        transform: scale(1.03);
                        box-shadow: 0 20px 40px rgba(0, 0, 0, 0.15);
                    }

                    .hero-card.selected {
                        outline: 2px solid #2563eb;
                    }

                    .card-success { background: linear-gradient(135deg, #059669, #10b981); }
                    .card-secondary { background: linear-gradient(135deg, #7c3aed, #a78bfa); }
                    .card-warning { background: linear-gradient(135deg, #d97706, #f59e0b); }

                    .hero-card-top {
                        display: flex;
                        justify-content: space-between;
                        font-size: 2rem;
                    }

                    .hero-card h3 {
                        margin: 0.5rem 0 0;
                    }

                    .hero-card ul {
                        list-style: none;
                        padding: 0;
                        margin: 0.75rem 0 0;
                        font-size: 0.875rem;
                    }

                    .hero-dots {
                        display: none;
                        justify-content: center;
                        gap: 0.5rem;
                    }

                    .hero-dot {
                        width: 0.75rem;
                        height: 0.75rem;
                        border-radius: 9999px;
                        border: none;
                        background: #d1d5db;
                    }

                    .hero-dot.selected {
                        background: #2563eb;
                    }

                    @media (max-width: 768px) {
                        .hero-grid {
                            grid-template-columns: 1fr;
                        }

                        .hero-headline {
                            font-size: 2.1rem;
                        }

                        .hero-dots {
                            display: flex;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
