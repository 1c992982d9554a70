use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::audience::hooks::use_audience;
use crate::content::testimonials::{self, Carousel, AUTOPLAY_MS, PROJECTED_GOALS};

#[function_component(TestimonialsSection)]
pub fn testimonials_section() -> Html {
    let audience = use_audience();
    let current = audience.get();
    let stories = testimonials::for_audience(current);
    let carousel = use_state_eq(|| Carousel::new(stories.len()));
    let hovering = use_state_eq(|| false);

    {
        let carousel = carousel.clone();
        let len = stories.len();
        use_effect_with_deps(
            move |_| {
                carousel.set(carousel.resized(len));
                || ()
            },
            current,
        );
    }

    {
        let carousel = carousel.clone();
        let hovering = hovering.clone();
        use_interval(
            move || {
                if !*hovering {
                    carousel.set(carousel.tick());
                }
            },
            AUTOPLAY_MS,
        );
    }

    let step = |f: fn(Carousel) -> Carousel| {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.set(f(*carousel)))
    };
    let jump = |i: usize| {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.set(carousel.jump(i)))
    };
    let toggle_autoplay = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.set(carousel.set_autoplay(!carousel.autoplay)))
    };
    let hover = |value: bool| {
        let hovering = hovering.clone();
        Callback::from(move |_: MouseEvent| hovering.set(value))
    };

    let shown = carousel.resized(stories.len());

    html! {
        <section id="success-stories" class="testimonials">
            <div class="section-inner">
                <div class="section-heading">
                    <span class="section-pill">{"💬 Success Stories"}</span>
                    <h2>{"Real People, "}<span class="accent">{"Real Success"}</span></h2>
                    <p>{testimonials::subtitle(current)}</p>
                </div>

                <div class="carousel" onmouseenter={hover(true)} onmouseleave={hover(false)}>
                    if let Some(story) = stories.get(shown.index) {
                        <article class="testimonial-card" key={story.id}>
                            <div class="testimonial-head">
                                <img src={story.avatar} alt={story.alt} class="testimonial-avatar" />
                                <div>
                                    <h3>{story.name}</h3>
                                    <p class="testimonial-role">{story.role}</p>
                                    <p class="testimonial-location">{"📍 "}{story.location}</p>
                                </div>
                                <div class="testimonial-outcome">
                                    <span class="outcome-value">{story.outcome.value()}</span>
                                    <span class="outcome-caption">{story.outcome.caption()}</span>
                                </div>
                            </div>
                            <div class="testimonial-stars">
                                { for (0..story.rating).map(|_| html! { <span>{"⭐"}</span> }) }
                            </div>
                            <blockquote>{story.content}</blockquote>
                            <span class="testimonial-verification">{"✓ "}{story.verification}</span>
                        </article>
                    }

                    if stories.len() > 1 {
                        <div class="carousel-controls">
                            <button aria-label="Previous testimonial" onclick={step(Carousel::previous)}>{"‹"}</button>
                            <div class="carousel-dots">
                                { for (0..stories.len()).map(|i| html! {
                                    <button
                                        class={classes!("carousel-dot", (i == shown.index).then(|| "active"))}
                                        aria-label={format!("Show testimonial {}", i + 1)}
                                        onclick={jump(i)}
                                    />
                                }) }
                            </div>
                            <button aria-label="Next testimonial" onclick={step(Carousel::next)}>{"›"}</button>
                        </div>
                        <button class="autoplay-toggle" onclick={toggle_autoplay}>
                            { if shown.autoplay { "⏸ Pause Auto-rotation" } else { "▶ Play Auto-rotation" } }
                        </button>
                    }
                </div>

                <div class="projected-goals">
                    { for PROJECTED_GOALS.iter().map(|(value, label)| html! {
                        <div class="goal">
                            <div class="goal-value">{*value}</div>
                            <div class="goal-label">{*label}</div>
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                    .testimonials {
                        padding: 5rem 1.5rem;
                    }

                    .carousel {
                        max-width: 48rem;
                        margin: 0 auto;
                        text-align: center;
                    }

                    .testimonial-card {
                        padding: 2rem;
                        border-radius: 1.5rem;
                        background: white;
                        box-shadow: 0 10px 30px rgba(0, 0, 0, 0.08);
                        text-align: left;
                    }

                    .testimonial-head {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                    }

                    .testimonial-avatar {
                        width: 4rem;
                        height: 4rem;
                        border-radius: 9999px;
                        object-fit: cover;
                    }

                    .testimonial-head h3 {
                        margin: 0;
                    }

                    .testimonial-role,
                    .testimonial-location {
                        margin: 0.125rem 0;
                        font-size: 0.875rem;
                        color: #6b7280;
                    }

                    .testimonial-outcome {
                        margin-left: auto;
                        display: flex;
                        flex-direction: column;
                        align-items: flex-end;
                    }

                    .outcome-value {
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #059669;
                    }

                    .outcome-caption {
                        font-size: 0.75rem;
                        color: #6b7280;
                    }

                    .testimonial-card blockquote {
                        margin: 1rem 0;
                        font-size: 1.1rem;
                        line-height: 1.7;
                        font-style: italic;
                    }

                    .testimonial-verification {
                        font-size: 0.8rem;
                        color: #059669;
                    }

                    .carousel-controls {
                        display: flex;
                        justify-content: center;
                        align-items: center;
                        gap: 1rem;
                        margin-top: 1.5rem;
                    }

                    .carousel-controls > button {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 9999px;
                        border: 1px solid #e5e7eb;
                        background: white;
                        cursor: pointer;
                        font-size: 1.25rem;
                    }

                    .carousel-dots {
                        display: flex;
                        gap: 0.5rem;
                    }

                    .carousel-dot {
                        width: 0.625rem;
                        height: 0.625rem;
                        border-radius: 9999px;
                        border: none;
                        background: #e5e7eb;
                        cursor: pointer;
                    }

                    .carousel-dot.active {
                        background: #2563eb;
                    }

                    .autoplay-toggle {
                        margin-top: 1rem;
                        border: none;
                        background: none;
                        color: #6b7280;
                        cursor: pointer;
                    }

                    .projected-goals {
                        margin-top: 4rem;
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 1.5rem;
                        text-align: center;
                    }

                    .goal-value {
                        font-size: 1.75rem;
                        font-weight: 700;
                        color: #2563eb;
                    }

                    .goal-label {
                        font-size: 0.875rem;
                        color: #6b7280;
                    }

                    @media (max-width: 768px) {
                        .projected-goals {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }
                "#}
            </style>
        </section>
    }
}
