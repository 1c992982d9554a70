use std::collections::HashSet;

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::audience::hooks::use_audience;
use crate::content::faq::{self, FaqFilter};

#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    let audience = use_audience();
    let current = audience.get();
    let filter = use_state(FaqFilter::default);
    let open = use_state(HashSet::<&'static str>::new);

    // Filters and open answers belong to the audience they were set for.
    {
        let filter = filter.clone();
        let open = open.clone();
        use_effect_with_deps(
            move |_| {
                filter.set(FaqFilter::default());
                open.set(HashSet::new());
                || ()
            },
            current,
        );
    }

    let on_search = {
        let filter = filter.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            filter.set((*filter).clone().with_query(input.value()));
        })
    };

    let on_category = {
        let filter = filter.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            filter.set((*filter).clone().with_category(&select.value()));
        })
    };

    let on_clear = {
        let filter = filter.clone();
        Callback::from(move |_: MouseEvent| filter.set(FaqFilter::default()))
    };

    let toggle = |id: &'static str| {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*open).clone();
            if !next.remove(id) {
                next.insert(id);
            }
            open.set(next);
        })
    };

    let items = filter.apply(current);
    let categories = faq::categories(current);

    html! {
        <section id="faq" class="faq">
            <div class="section-inner faq-inner">
                <div class="section-heading">
                    <span class="section-pill">{"❓ FAQ"}</span>
                    <h2>{"Frequently Asked "}<span class="accent">{"Questions"}</span></h2>
                    <p>{faq::intro(current)}</p>
                </div>

                <div class="faq-filters">
                    <input
                        type="search"
                        class="faq-search"
                        placeholder="Search questions..."
                        value={filter.query.clone()}
                        oninput={on_search}
                    />
                    <select class="faq-category" onchange={on_category}>
                        { for categories.iter().map(|category| html! {
                            <option value={*category} selected={filter.category_value() == *category}>
                                {faq::category_label(category)}
                            </option>
                        }) }
                    </select>
                </div>

                if filter.is_active() {
                    <div class="faq-summary">
                        <span>{faq::results_summary(items.len(), &filter.query)}</span>
                        <button class="faq-clear" onclick={on_clear}>{"Clear filters"}</button>
                    </div>
                }

                <div class="faq-list">
                    if items.is_empty() {
                        <div class="faq-empty">
                            <p>{"No questions match your search. Try different keywords or reach out to us directly."}</p>
                        </div>
                    }
                    { for items.iter().map(|item| {
                        let expanded = open.contains(item.id);
                        html! {
                            <div class={classes!("faq-item", expanded.then(|| "open"))} key={item.id}>
                                <button class="faq-question" aria-expanded={expanded.to_string()} onclick={toggle(item.id)}>
                                    <span>{item.question}</span>
                                    <span class="faq-chevron">{ if expanded { "−" } else { "+" } }</span>
                                </button>
                                if expanded {
                                    <div class="faq-answer">
                                        <p>{item.answer}</p>
                                    </div>
                                }
                            </div>
                        }
                    }) }
                </div>

                <div class="faq-support">
                    <h3>{"Still have questions?"}</h3>
                    <p>{"Our support team is here to help you get started."}</p>
                    <div class="faq-support-links">
                        <a href={faq::support_email_link(current)} data-cta="faq_email">
                            {"✉️ Email Support"}
                        </a>
                        <a
                            href={faq::support_whatsapp_link(current)}
                            target="_blank"
                            rel="noopener noreferrer"
                            data-cta="faq_whatsapp"
                        >
                            {"💬 WhatsApp Us"}
                        </a>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                    .faq {
                        padding: 5rem 1.5rem;
                        background: #f9fafb;
                    }

                    .faq-inner {
                        max-width: 56rem;
                    }

                    .faq-filters {
                        display: flex;
                        gap: 1rem;
                        margin-bottom: 1rem;
                    }

                    .faq-search {
                        flex-grow: 1;
                        padding: 0.75rem 1rem;
                        border-radius: 0.75rem;
                        border: 1px solid #d1d5db;
                        font-size: 1rem;
                    }

                    .faq-category {
                        padding: 0.75rem 1rem;
                        border-radius: 0.75rem;
                        border: 1px solid #d1d5db;
                        background: white;
                    }

                    .faq-summary {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        margin-bottom: 1rem;
                        font-size: 0.875rem;
                        color: #6b7280;
                    }

                    .faq-clear {
                        border: none;
                        background: none;
                        color: #2563eb;
                        cursor: pointer;
                    }

                    .faq-item {
                        margin-bottom: 0.75rem;
                        border-radius: 0.75rem;
                        border: 1px solid #e5e7eb;
                        background: white;
                        overflow: hidden;
                    }

                    .faq-item.open {
                        border-color: #2563eb;
                    }

                    .faq-question {
                        width: 100%;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        gap: 1rem;
                        padding: 1.25rem 1.5rem;
                        border: none;
                        background: none;
                        text-align: left;
                        font-size: 1rem;
                        font-weight: 600;
                        cursor: pointer;
                    }

                    .faq-chevron {
                        font-size: 1.25rem;
                        color: #2563eb;
                    }

                    .faq-answer {
                        padding: 0 1.5rem 1.25rem;
                        color: #4b5563;
                        line-height: 1.7;
                    }

                    .faq-empty {
                        text-align: center;
                        color: #6b7280;
                        padding: 2rem;
                    }

                    .faq-support {
                        margin-top: 3rem;
                        padding: 2rem;
                        border-radius: 1rem;
                        background: #eff6ff;
                        text-align: center;
                    }

                    .faq-support-links {
                        display: flex;
                        justify-content: center;
                        gap: 1rem;
                    }

                    .faq-support-links a {
                        padding: 0.75rem 1.5rem;
                        border-radius: 0.75rem;
                        background: white;
                        color: #2563eb;
                        text-decoration: none;
                        font-weight: 600;
                    }

                    @media (max-width: 640px) {
                        .faq-filters {
                            flex-direction: column;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
