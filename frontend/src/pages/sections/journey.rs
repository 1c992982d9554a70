use yew::prelude::*;

use crate::audience::hooks::use_audience;
use crate::content::journey::{self, Stepper};
use crate::content::table::clamp_index;
use crate::dom;

#[function_component(JourneySection)]
pub fn journey_section() -> Html {
    let audience = use_audience();
    let current = audience.get();
    let copy = journey::journey(current);
    let stepper = use_state(|| Stepper::new(copy.steps.len()));

    // Each audience starts its own path from the first step.
    {
        let stepper = stepper.clone();
        let len = copy.steps.len();
        use_effect_with_deps(
            move |_| {
                stepper.set(Stepper::new(len));
                || ()
            },
            current,
        );
    }

    let step = &copy.steps[clamp_index(stepper.active, copy.steps.len())];

    let move_to = |next: Stepper| {
        let stepper = stepper.clone();
        Callback::from(move |_: MouseEvent| stepper.set(next))
    };

    let on_cta = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        dom::scroll_to_section("get-started");
    });

    html! {
        <section class="journey">
            <div class="section-inner">
                <div class="section-heading">
                    <span class="section-pill">{"🧭 Your Journey"}</span>
                    <h2>{copy.title}</h2>
                    <p>{copy.subtitle}</p>
                </div>

                <div class="journey-track">
                    <div class="journey-line" style={format!("width: {:.0}%", stepper.progress())}></div>
                    { for copy.steps.iter().enumerate().map(|(i, s)| html! {
                        <button
                            class={classes!("journey-node", stepper.reached(i).then(|| "reached"), (i == stepper.active).then(|| "active"))}
                            onclick={move_to(stepper.jump(i))}
                        >
                            <span class="journey-node-icon">{s.icon}</span>
                            <span class="journey-node-title">{s.title}</span>
                        </button>
                    }) }
                </div>

                <div class="journey-detail" key={step.id}>
                    <div class="journey-detail-head">
                        <span class="journey-detail-icon">{step.icon}</span>
                        <div>
                            <h3>{step.title}</h3>
                            <p>{step.description}</p>
                        </div>
                    </div>
                    <ul>
                        { for step.details.iter().map(|detail| html! { <li>{"✓ "}{*detail}</li> }) }
                    </ul>
                    <div class="journey-controls">
                        <button disabled={stepper.at_start()} onclick={move_to(stepper.previous())}>{"‹ Previous"}</button>
                        <span>{format!("{} / {}", stepper.active + 1, stepper.len)}</span>
                        <button disabled={stepper.at_end()} onclick={move_to(stepper.next())}>{"Next ›"}</button>
                    </div>
                </div>

                <div class="journey-cta">
                    <button class="hero-cta" data-cta="journey" onclick={on_cta}>{copy.cta_text}{" →"}</button>
                </div>
            </div>
            <style>
                {r#"
                    .journey {
                        padding: 5rem 1.5rem;
                    }

                    .journey-track {
                        position: relative;
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        margin-bottom: 2rem;
                    }

                    .journey-line {
                        position: absolute;
                        top: 1.5rem;
                        left: 0;
                        height: 3px;
                        background: #2563eb;
                        transition: width 0.3s ease;
                    }

                    .journey-node {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 0.5rem;
                        background: none;
                        border: none;
                        cursor: pointer;
                        color: #9ca3af;
                        z-index: 1;
                    }

                    .journey-node-icon {
                        width: 3rem;
                        height: 3rem;
                        border-radius: 9999px;
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        background: #f3f4f6;
                        font-size: 1.25rem;
                    }

                    .journey-node.reached {
                        color: #111827;
                    }

                    .journey-node.reached .journey-node-icon {
                        background: #dbeafe;
                    }

                    .journey-node.active .journey-node-icon {
                        outline: 3px solid #2563eb;
                    }

                    .journey-detail {
                        max-width: 48rem;
                        margin: 0 auto;
                        padding: 2rem;
                        border-radius: 1rem;
                        border: 1px solid #e5e7eb;
                    }

                    .journey-detail-head {
                        display: flex;
                        gap: 1rem;
                        align-items: center;
                    }

                    .journey-detail-icon {
                        font-size: 2rem;
                    }

                    .journey-detail ul {
                        list-style: none;
                        padding: 0;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 0.75rem;
                    }

                    .journey-controls {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }

                    .journey-controls button {
                        padding: 0.5rem 1rem;
                        border-radius: 0.5rem;
                        border: 1px solid #e5e7eb;
                        background: white;
                        cursor: pointer;
                    }

                    .journey-controls button:disabled {
                        opacity: 0.4;
                        cursor: default;
                    }

                    .journey-cta {
                        text-align: center;
                        margin-top: 2rem;
                    }
                "#}
            </style>
        </section>
    }
}
