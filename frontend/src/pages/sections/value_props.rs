use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::audience::hooks::use_audience;
use crate::content::table::{clamp_index, rotate};
use crate::content::value_props::{self, GRID_LIMIT, ROTATION_MS, STATS};

#[function_component(ValuePropsSection)]
pub fn value_props_section() -> Html {
    let audience = use_audience();
    let index = use_state(|| 0usize);
    let props = value_props::for_audience(audience.get());
    let len = props.len();

    {
        let index = index.clone();
        use_interval(move || index.set(rotate(*index, len)), ROTATION_MS);
    }

    let shown = clamp_index(*index, len);

    html! {
        <section class="value-props">
            <div class="section-inner">
                <div class="section-heading">
                    <span class="section-pill">{"✨ Why Choose WE Universal"}</span>
                    <h2>{"India's Most Trusted "}<span class="accent">{"Gig Platform"}</span></h2>
                    <p>{"Built by Indians, for Indians. Experience the future of flexible work with complete trust and transparency."}</p>
                </div>

                <div class="showcase">
                    if let Some(prop) = props.get(shown) {
                        <div class="showcase-item" key={prop.id}>
                            <div class="showcase-icon">{prop.icon}</div>
                            <h3>{prop.title}</h3>
                            <p>{prop.description}</p>
                        </div>
                    }
                    <div class="showcase-dots">
                        { for (0..len).map(|i| {
                            let index = index.clone();
                            html! {
                                <button
                                    class={classes!("showcase-dot", (i == shown).then(|| "active"))}
                                    aria-label={format!("Show benefit {}", i + 1)}
                                    onclick={Callback::from(move |_: MouseEvent| index.set(i))}
                                />
                            }
                        }) }
                    </div>
                    <div class="showcase-stats">
                        { for STATS.iter().map(|(value, label)| html! {
                            <div class="stat">
                                <div class="stat-value">{*value}</div>
                                <div class="stat-label">{*label}</div>
                            </div>
                        }) }
                    </div>
                </div>

                <div class="value-grid">
                    { for props.iter().take(GRID_LIMIT).map(|prop| html! {
                        <div class="value-card" key={prop.id}>
                            <div class="value-card-head">
                                <span class="value-card-icon">{prop.icon}</span>
                                <h4>{prop.title}</h4>
                            </div>
                            <p>{prop.description}</p>
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                    .value-props {
                        padding: 5rem 1.5rem;
                        background: linear-gradient(90deg, #f9fafb, #f0fdfa);
                    }

                    .section-inner {
                        max-width: 1200px;
                        margin: 0 auto;
                    }

                    .section-heading {
                        text-align: center;
                        margin-bottom: 3rem;
                    }

                    .section-heading h2 {
                        font-size: 2.5rem;
                        margin: 1rem 0;
                    }

                    .section-heading p {
                        color: #6b7280;
                        max-width: 42rem;
                        margin: 0 auto;
                    }

                    .section-pill {
                        display: inline-block;
                        padding: 0.4rem 1rem;
                        border-radius: 9999px;
                        background: rgba(37, 99, 235, 0.1);
                        color: #2563eb;
                        font-size: 0.875rem;
                    }

                    .accent {
                        color: #2563eb;
                    }

                    .showcase {
                        max-width: 56rem;
                        margin: 0 auto;
                        padding: 3rem;
                        border-radius: 1.5rem;
                        background: white;
                        box-shadow: 0 10px 30px rgba(0, 0, 0, 0.08);
                        text-align: center;
                    }

                    .showcase-icon {
                        font-size: 2.5rem;
                    }

                    .showcase-item p {
                        color: #6b7280;
                        font-size: 1.1rem;
                        line-height: 1.6;
                    }

                    .showcase-dots {
                        display: flex;
                        justify-content: center;
                        gap: 0.75rem;
                        margin: 2rem 0;
                    }

                    .showcase-dot {
                        width: 0.75rem;
                        height: 0.75rem;
                        border-radius: 9999px;
                        border: none;
                        background: #e5e7eb;
                        cursor: pointer;
                    }

                    .showcase-dot.active {
                        background: #2563eb;
                        transform: scale(1.25);
                    }

                    .showcase-stats {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 1.5rem;
                    }

                    .stat-value {
                        font-size: 1.75rem;
                        font-weight: 700;
                        color: #2563eb;
                    }

                    .stat-label {
                        font-size: 0.875rem;
                        color: #6b7280;
                    }

                    .value-grid {
                        margin-top: 4rem;
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }

                    .value-card {
                        padding: 1.5rem;
                        border-radius: 1rem;
                        border: 1px solid #e5e7eb;
                        background: white;
                    }

                    .value-card-head {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                    }

                    .value-card-icon {
                        font-size: 1.5rem;
                    }

                    .value-card p {
                        color: #6b7280;
                        font-size: 0.875rem;
                        line-height: 1.6;
                    }

                    @media (max-width: 768px) {
                        .showcase-stats {
                            grid-template-columns: repeat(2, 1fr);
                        }

                        .value-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
