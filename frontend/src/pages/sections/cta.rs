use gloo_timers::future::TimeoutFuture;
use log::{info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::audience::hooks::use_audience;
use crate::content::cta::{self, LeadForm, SubmitState, RESET_DELAY_MS, SUBMIT_DELAY_MS};

#[function_component(CtaSection)]
pub fn cta_section() -> Html {
    let audience = use_audience();
    let current = audience.get();
    let copy = cta::copy(current);

    let form = use_state(LeadForm::default);
    let state = use_state_eq(SubmitState::default);
    let error = use_state(|| None::<String>);

    let on_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(LeadForm {
                email: input.value(),
                ..(*form).clone()
            });
        })
    };

    let on_phone = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(LeadForm {
                phone: input.value(),
                ..(*form).clone()
            });
        })
    };

    let on_submit = {
        let form = form.clone();
        let state = state.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *state != SubmitState::Idle {
                return;
            }
            if let Err(err) = form.validate() {
                warn!("Lead form rejected: {}", err);
                error.set(Some(err.to_string()));
                return;
            }
            error.set(None);
            state.set(SubmitState::Submitting);

            let form = form.clone();
            let state = state.clone();
            spawn_local(async move {
                TimeoutFuture::new(SUBMIT_DELAY_MS).await;
                info!("Lead form submitted for {}", current);
                state.set(SubmitState::Submitted);

                TimeoutFuture::new(RESET_DELAY_MS).await;
                form.set(LeadForm::default());
                state.set(SubmitState::Idle);
            });
        })
    };

    let on_secondary = Callback::from(move |_: MouseEvent| {
        info!("Secondary call to action clicked: {}", current);
    });

    html! {
        <section id="get-started" class="cta-section">
            <div class="section-inner cta-grid">
                <div class="cta-copy">
                    <span class="cta-urgency">{"🔥 "}{copy.urgency}</span>
                    <h2>{copy.title}</h2>
                    <p>{copy.subtitle}</p>
                    <ul class="cta-benefits">
                        { for copy.benefits.iter().map(|benefit| html! { <li>{"✓ "}{*benefit}</li> }) }
                    </ul>
                    <button class="cta-secondary" data-cta="cta_secondary" onclick={on_secondary}>
                        {"▶ "}{copy.secondary_cta}
                    </button>
                </div>

                <div class="cta-form-card">
                    if *state == SubmitState::Submitted {
                        <div class="cta-success">
                            <div class="cta-success-icon">{"🎉"}</div>
                            <h3>{"Welcome Aboard!"}</h3>
                            <p>{copy.confirmation}</p>
                            <p class="cta-next">{copy.next_step}</p>
                        </div>
                    } else {
                        <form onsubmit={on_submit}>
                            <h3>{"Get Started Today"}</h3>
                            <p class="cta-form-subtitle">{"Join thousands of satisfied users"}</p>
                            <label for="lead-email">{"Email"}</label>
                            <input
                                id="lead-email"
                                type="email"
                                placeholder={copy.email_placeholder}
                                value={form.email.clone()}
                                oninput={on_email}
                            />
                            <label for="lead-phone">{"Mobile"}</label>
                            <input
                                id="lead-phone"
                                type="tel"
                                placeholder={copy.phone_placeholder}
                                value={form.phone.clone()}
                                oninput={on_phone}
                            />
                            if let Some(message) = (*error).as_ref() {
                                <p class="cta-error" role="alert">{message.clone()}</p>
                            }
                            <button
                                type="submit"
                                class="cta-submit"
                                data-cta="cta_submit"
                                disabled={*state == SubmitState::Submitting}
                            >
                                {state.button_label(current)}
                            </button>
                            <p class="cta-terms">
                                {"By signing up, you agree to our Terms of Service and Privacy Policy. We respect your privacy and never share your data."}
                            </p>
                        </form>
                    }
                </div>
            </div>
            <style>
                {r#"
                    .cta-section {
                        padding: 5rem 1.5rem;
                        background: linear-gradient(135deg, #1e3a8a, #0f766e);
                        color: white;
                    }

                    .cta-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                    }

                    .cta-urgency {
                        display: inline-block;
                        padding: 0.375rem 0.875rem;
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.15);
                        font-size: 0.875rem;
                    }

                    .cta-copy h2 {
                        font-size: 2.25rem;
                    }

                    .cta-copy p {
                        opacity: 0.85;
                        line-height: 1.7;
                    }

                    .cta-benefits {
                        list-style: none;
                        padding: 0;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 0.5rem;
                    }

                    .cta-secondary {
                        margin-top: 1rem;
                        padding: 0.75rem 1.5rem;
                        border-radius: 0.75rem;
                        border: 1px solid rgba(255, 255, 255, 0.5);
                        background: transparent;
                        color: white;
                        cursor: pointer;
                    }

                    .cta-form-card {
                        padding: 2rem;
                        border-radius: 1.5rem;
                        background: white;
                        color: #111827;
                    }

                    .cta-form-card form {
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                    }

                    .cta-form-card h3 {
                        margin: 0;
                    }

                    .cta-form-subtitle {
                        margin: 0 0 1rem;
                        color: #6b7280;
                    }

                    .cta-form-card label {
                        font-size: 0.875rem;
                        font-weight: 500;
                    }

                    .cta-form-card input {
                        padding: 0.75rem 1rem;
                        border-radius: 0.5rem;
                        border: 1px solid #d1d5db;
                        font-size: 1rem;
                    }

                    .cta-error {
                        margin: 0;
                        color: #dc2626;
                        font-size: 0.875rem;
                    }

                    .cta-submit {
                        margin-top: 0.5rem;
                        padding: 0.875rem;
                        border: none;
                        border-radius: 0.75rem;
                        background: #2563eb;
                        color: white;
                        font-weight: 600;
                        cursor: pointer;
                    }

                    .cta-submit:disabled {
                        opacity: 0.6;
                        cursor: wait;
                    }

                    .cta-terms {
                        font-size: 0.75rem;
                        color: #9ca3af;
                    }

                    .cta-success {
                        text-align: center;
                    }

                    .cta-success-icon {
                        font-size: 3rem;
                    }

                    .cta-next {
                        color: #2563eb;
                        font-size: 0.875rem;
                    }

                    @media (max-width: 900px) {
                        .cta-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
