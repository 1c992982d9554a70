use log::info;
use yew::prelude::*;

use crate::audience::hooks::use_audience;
use crate::audience::selection::Audience;
use crate::content::pricing::{self, BUSINESS_HOW_IT_WORKS, WAITLIST_PERKS};
use crate::dom;

#[function_component(PricingSection)]
pub fn pricing_section() -> Html {
    let audience = use_audience();
    let current = audience.get();
    let tiers = pricing::tiers(current);
    let heading = pricing::heading(current);
    let comparison = pricing::comparison(current);

    let choose = |tier_id: &'static str| {
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            info!("Pricing tier chosen: {}", tier_id);
            dom::scroll_to_section("get-started");
        })
    };

    html! {
        <section id="pricing" class="pricing">
            <div class="section-inner">
                <div class="section-heading">
                    <span class="section-pill">{"💳 Pricing"}</span>
                    <h2>{heading.title}</h2>
                    <p>{heading.subtitle}</p>
                </div>

                <div class={pricing::grid_class(tiers.len())}>
                    { for tiers.iter().map(|tier| html! {
                        <div class={classes!("pricing-card", tier.highlighted.then(|| "highlighted"))} key={tier.id}>
                            if let Some(badge) = tier.badge {
                                <span class="pricing-badge">{badge}</span>
                            }
                            <h3>{tier.name}</h3>
                            <p class="pricing-description">{tier.description}</p>
                            <div class="pricing-price">
                                <span class="price">{tier.price}</span>
                                <span class="period">{tier.period}</span>
                            </div>
                            if let Some(limit) = tier.monthly_task_limit() {
                                <p class="pricing-limit">{format!("Zero commission on up to {} of tasks each month", limit)}</p>
                            }
                            <ul class="pricing-features">
                                { for tier.features.iter().map(|feature| html! { <li>{"✓ "}{*feature}</li> }) }
                            </ul>
                            if tier.id == "investor-waitlist" {
                                <div class="waitlist-perks">
                                    <h4>{"What you'll get"}</h4>
                                    <ul>
                                        { for WAITLIST_PERKS.iter().map(|perk| html! { <li>{"• "}{*perk}</li> }) }
                                    </ul>
                                </div>
                            }
                            <button
                                class={classes!("pricing-cta", tier.highlighted.then(|| "primary"))}
                                data-cta={format!("pricing_{}", tier.id)}
                                onclick={choose(tier.id)}
                            >
                                {tier.cta_text}
                            </button>
                            if tier.is_custom() {
                                <p class="pricing-note">{"Terms are agreed individually with our partnerships team."}</p>
                            }
                        </div>
                    }) }
                </div>

                if current == Audience::Business {
                    <div class="business-how">
                        <h3>{"How Business Subscriptions Work"}</h3>
                        <ol>
                            { for BUSINESS_HOW_IT_WORKS.iter().map(|line| html! { <li>{*line}</li> }) }
                        </ol>
                    </div>
                }

                <div class="pricing-comparison">
                    <h3>{comparison.title}</h3>
                    <div class="comparison-points">
                        { for comparison.points.iter().map(|(icon, headline, detail)| html! {
                            <div class="comparison-point">
                                <span class="comparison-icon">{*icon}</span>
                                <h4>{*headline}</h4>
                                <p>{*detail}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
            <style>
                {r#"
                    .pricing {
                        padding: 5rem 1.5rem;
                    }

                    .pricing-grid {
                        display: grid;
                        gap: 2rem;
                        margin: 0 auto;
                    }

                    .pricing-grid.one {
                        grid-template-columns: 1fr;
                        max-width: 28rem;
                    }

                    .pricing-grid.two {
                        grid-template-columns: repeat(2, 1fr);
                        max-width: 56rem;
                    }

                    .pricing-grid.three {
                        grid-template-columns: repeat(3, 1fr);
                    }

                    .pricing-card {
                        position: relative;
                        display: flex;
                        flex-direction: column;
                        padding: 2rem;
                        border-radius: 1.25rem;
                        border: 1px solid #e5e7eb;
                        background: white;
                    }

                    .pricing-card.highlighted {
                        border: 2px solid #2563eb;
                        box-shadow: 0 20px 40px rgba(37, 99, 235, 0.15);
                    }

                    .pricing-badge {
                        position: absolute;
                        top: -0.75rem;
                        left: 50%;
                        transform: translateX(-50%);
                        padding: 0.25rem 0.875rem;
                        border-radius: 9999px;
                        background: #2563eb;
                        color: white;
                        font-size: 0.75rem;
                        font-weight: 600;
                    }

                    .pricing-description {
                        color: #6b7280;
                    }

                    .pricing-price .price {
                        font-size: 2.5rem;
                        font-weight: 700;
                    }

                    .pricing-price .period {
                        margin-left: 0.25rem;
                        color: #6b7280;
                    }

                    .pricing-limit {
                        font-size: 0.875rem;
                        color: #059669;
                    }

                    .pricing-features {
                        list-style: none;
                        padding: 0;
                        flex-grow: 1;
                        line-height: 2;
                    }

                    .waitlist-perks h4 {
                        margin-bottom: 0.5rem;
                    }

                    .waitlist-perks ul {
                        list-style: none;
                        padding: 0;
                        color: #6b7280;
                        font-size: 0.875rem;
                    }

                    .pricing-cta {
                        margin-top: 1rem;
                        padding: 0.875rem;
                        border-radius: 0.75rem;
                        border: 1px solid #2563eb;
                        background: white;
                        color: #2563eb;
                        font-weight: 600;
                        cursor: pointer;
                    }

                    .pricing-cta.primary {
                        background: #2563eb;
                        color: white;
                    }

                    .pricing-note {
                        font-size: 0.75rem;
                        color: #9ca3af;
                        text-align: center;
                    }

                    .business-how {
                        max-width: 48rem;
                        margin: 3rem auto 0;
                        padding: 2rem;
                        border-radius: 1rem;
                        background: #eff6ff;
                    }

                    .business-how ol {
                        line-height: 2;
                    }

                    .pricing-comparison {
                        margin-top: 4rem;
                        text-align: center;
                    }

                    .comparison-points {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }

                    .comparison-icon {
                        font-size: 2rem;
                    }

                    .comparison-point p {
                        color: #6b7280;
                    }

                    @media (max-width: 900px) {
                        .pricing-grid.two,
                        .pricing-grid.three,
                        .comparison-points {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
