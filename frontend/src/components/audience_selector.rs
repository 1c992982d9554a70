use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::audience::hooks::use_audience;
use crate::audience::selection::Audience;

#[derive(Properties, PartialEq)]
pub struct AudienceSelectorProps {
    /// Round initial badge instead of the full label button.
    #[prop_or_default]
    pub compact: bool,
    #[prop_or_default]
    pub class: Classes,
}

/// Dropdown for switching audience. Stays in sync with every other selector
/// on the page and closes on a click anywhere outside it.
#[function_component(AudienceSelector)]
pub fn audience_selector(props: &AudienceSelectorProps) -> Html {
    let audience = use_audience();
    let open = use_state(|| false);
    let node = use_node_ref();

    {
        let open = open.clone();
        use_click_away(node.clone(), move |_: Event| {
            if *open {
                open.set(false);
            }
        });
    }

    let current = audience.get();

    let toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };

    let choose = |choice: Audience| {
        let audience = audience.clone();
        let open = open.clone();
        Callback::from(move |_: MouseEvent| {
            audience.select(choice);
            open.set(false);
        })
    };

    let option_row = |option: Audience| {
        let selected = option == current;
        html! {
            <button
                class={classes!("selector-option", selected.then(|| "selected"))}
                data-cta={format!("audience_{}", option.as_str())}
                onclick={choose(option)}
            >
                <span class={classes!("selector-icon", option.accent_class())}>{option.icon()}</span>
                <span class="selector-text">
                    <span class="selector-label">{option.label()}</span>
                    <span class="selector-description">{option.description()}</span>
                </span>
                if selected && !props.compact {
                    <span class="selector-check">{"✓"}</span>
                }
            </button>
        }
    };

    let trigger = if props.compact {
        html! {
            <button class="selector-trigger compact" onclick={toggle} aria-label="Change audience">
                <span class={classes!("selector-badge", current.accent_class())}>{current.short_label()}</span>
                <span class="selector-chevron">{"▾"}</span>
            </button>
        }
    } else {
        html! {
            <button class="selector-trigger" onclick={toggle}>
                <span class={classes!("selector-icon", current.accent_class())}>{current.icon()}</span>
                <span class="selector-text">
                    <span class="selector-label">{current.label()}</span>
                    <span class="selector-description">{current.description()}</span>
                </span>
                <span class="selector-chevron">{"▾"}</span>
            </button>
        }
    };

    html! {
        <div class={classes!("audience-selector", props.compact.then(|| "compact"), props.class.clone())} ref={node}>
            {trigger}
            if *open {
                <div class="selector-menu">
                    if !props.compact {
                        <div class="selector-heading">{"Select Your Role"}</div>
                    }
                    { for Audience::ALL.into_iter().map(option_row) }
                </div>
            }
            <style>
                {r#"
                    .audience-selector {
                        position: relative;
                    }

                    .selector-trigger {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        width: 100%;
                        padding: 0.75rem 1rem;
                        background: white;
                        border: 1px solid #e5e7eb;
                        border-radius: 0.5rem;
                        cursor: pointer;
                        text-align: left;
                    }

                    .selector-trigger.compact {
                        width: auto;
                        padding: 0.4rem 0.75rem;
                        gap: 0.5rem;
                    }

                    .selector-badge {
                        width: 1.5rem;
                        height: 1.5rem;
                        border-radius: 9999px;
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        color: white;
                        font-size: 0.75rem;
                        font-weight: 700;
                        background: linear-gradient(135deg, #2563eb, #14b8a6);
                    }

                    .selector-text {
                        display: flex;
                        flex-direction: column;
                        flex: 1;
                    }

                    .selector-label {
                        font-size: 0.875rem;
                        font-weight: 500;
                    }

                    .selector-description {
                        font-size: 0.75rem;
                        color: #6b7280;
                    }

                    .selector-menu {
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        min-width: 12rem;
                        margin-top: 0.5rem;
                        padding: 0.5rem;
                        background: white;
                        border: 1px solid #e5e7eb;
                        border-radius: 0.5rem;
                        box-shadow: 0 10px 25px rgba(0, 0, 0, 0.1);
                        z-index: 50;
                    }

                    .selector-heading {
                        font-size: 0.7rem;
                        text-transform: uppercase;
                        letter-spacing: 0.05em;
                        color: #6b7280;
                        padding: 0.5rem 0.75rem;
                    }

                    .selector-option {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        width: 100%;
                        padding: 0.6rem 0.75rem;
                        border: none;
                        border-radius: 0.5rem;
                        background: none;
                        cursor: pointer;
                        text-align: left;
                    }

                    .selector-option.selected {
                        background: #2563eb;
                        color: white;
                    }

                    .selector-option.selected .selector-description {
                        color: rgba(255, 255, 255, 0.8);
                    }
                "#}
            </style>
        </div>
    }
}
