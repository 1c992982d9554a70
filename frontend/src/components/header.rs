use log::debug;
use wasm_bindgen::JsCast;
use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::audience::hooks::use_audience;
use crate::audience::selection::Audience;
use crate::components::audience_selector::AudienceSelector;
use crate::content::navigation::{self, ACTIVE_OFFSET, NAV_SECTIONS};
use crate::dom;

/// What happened to the mobile menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Toggle,
    PickAudience,
    Navigate,
    ClickAway,
}

/// Menu visibility after `action`. Only the burger button opens it;
/// picking an audience or a section closes it like a click outside does.
pub fn menu_after(open: bool, action: MenuAction) -> bool {
    match action {
        MenuAction::Toggle => !open,
        MenuAction::PickAudience | MenuAction::Navigate | MenuAction::ClickAway => false,
    }
}

/// Sticky page header. Reads and sets the audience: the select and the
/// mobile menu buttons are producers, every label is a consumer.
#[function_component(Header)]
pub fn header() -> Html {
    let audience = use_audience();
    let menu_open = use_state(|| false);
    let menu_ref = use_node_ref();

    // Re-render on scroll and resize; positions are read from the DOM below.
    let _scroll = use_window_scroll();
    let _size = use_window_size();

    {
        let menu_open = menu_open.clone();
        use_click_away(menu_ref.clone(), move |_: Event| {
            if *menu_open {
                menu_open.set(menu_after(true, MenuAction::ClickAway));
            }
        });
    }

    let progress = dom::page_progress();
    let active = navigation::active_section(&dom::nav_section_bounds(), ACTIVE_OFFSET);
    let current = audience.get();

    let go_to = {
        let menu_open = menu_open.clone();
        Callback::from(move |id: &'static str| {
            dom::scroll_to_section(id);
            menu_open.set(menu_after(*menu_open, MenuAction::Navigate));
        })
    };

    let on_logo = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            dom::scroll_to_top();
            menu_open.set(menu_after(*menu_open, MenuAction::Navigate));
        })
    };

    let on_select = {
        let audience = audience.clone();
        Callback::from(move |e: Event| {
            let Some(select) = e.target().and_then(|t| t.dyn_into::<HtmlSelectElement>().ok()) else {
                return;
            };
            if audience.select_str(&select.value()).is_err() {
                return;
            }
        })
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            e.stop_propagation();
            menu_open.set(menu_after(*menu_open, MenuAction::Toggle));
        })
    };

    let pick = |choice: Audience| {
        let audience = audience.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            debug!("Mobile menu picked {}", choice);
            audience.select(choice);
            menu_open.set(menu_after(*menu_open, MenuAction::PickAudience));
        })
    };

    let nav_button = |section: &'static navigation::NavSection, class: &'static str| {
        let go_to = go_to.clone();
        html! {
            <button
                class={classes!(class, (active == section.id).then(|| "active"))}
                data-nav-section={section.id}
                onclick={Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    go_to.emit(section.id);
                })}
            >
                {section.label_for(current)}
            </button>
        }
    };

    let on_cta = {
        let go_to = go_to.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            go_to.emit("get-started");
        })
    };

    html! {
        <header class="site-header" ref={menu_ref}>
            <div class="header-progress" style={format!("width: {:.2}%", progress)}></div>
            <div class="header-content">
                <a href="/" class="header-logo" onclick={on_logo}>
                    <span class="logo-mark">{"WE"}</span>
                    <span class="logo-text">{"WE Universal"}</span>
                </a>

                <nav class="header-nav">
                    { for NAV_SECTIONS.iter().map(|section| nav_button(section, "header-nav-link")) }
                </nav>

                <div class="header-actions">
                    <select class="header-audience" aria-label="Select audience" onchange={on_select}>
                        { for Audience::ALL.iter().map(|option| html! {
                            <option value={option.as_str()} selected={*option == current}>
                                {option.label()}
                            </option>
                        }) }
                    </select>
                    <button class="header-cta" data-cta="header_primary" onclick={on_cta.clone()}>
                        {navigation::header_cta(current)}{" →"}
                    </button>
                </div>

                <AudienceSelector compact=true class="header-compact-selector" />

                <button
                    class="burger-menu"
                    aria-label={if *menu_open { "Close menu" } else { "Open menu" }}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>

            if *menu_open {
                <div class="mobile-menu">
                    <div class="mobile-audiences">
                        { for Audience::ALL.iter().map(|option| html! {
                            <button
                                class={classes!("mobile-audience", (*option == current).then(|| "selected"))}
                                onclick={pick(*option)}
                            >
                                <span>{option.icon()}</span>
                                <span>{option.label()}</span>
                            </button>
                        }) }
                    </div>
                    { for NAV_SECTIONS.iter().map(|section| nav_button(section, "mobile-nav-link")) }
                    <button class="mobile-cta" data-cta="mobile_primary" onclick={on_cta}>
                        {navigation::mobile_cta(current)}
                    </button>
                </div>
            }

            <style>
                {r#"
                    .site-header {
                        position: sticky;
                        top: 0;
                        z-index: 50;
                        background: rgba(255, 255, 255, 0.95);
                        backdrop-filter: blur(8px);
                        border-bottom: 1px solid #e5e7eb;
                    }

                    .header-progress {
                        position: absolute;
                        bottom: -1px;
                        left: 0;
                        height: 2px;
                        background: linear-gradient(90deg, #2563eb, #14b8a6);
                        transition: width 0.1s ease-out;
                    }

                    .header-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        height: 64px;
                        padding: 0 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }

                    .header-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        text-decoration: none;
                        color: #111827;
                        font-weight: 700;
                    }

                    .logo-mark {
                        width: 2.25rem;
                        height: 2.25rem;
                        border-radius: 0.75rem;
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        color: white;
                        background: linear-gradient(135deg, #2563eb, #14b8a6);
                        font-size: 0.875rem;
                    }

                    .header-nav {
                        display: flex;
                        gap: 1.5rem;
                    }

                    .header-nav-link {
                        background: none;
                        border: none;
                        padding: 0 0 0.25rem;
                        color: #6b7280;
                        cursor: pointer;
                        font-size: 0.9rem;
                        border-bottom: 2px solid transparent;
                    }

                    .header-nav-link.active {
                        color: #2563eb;
                        border-bottom-color: #2563eb;
                    }

                    .header-actions {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                    }

                    .header-audience {
                        padding: 0.4rem 0.75rem;
                        border: 1px solid #e5e7eb;
                        border-radius: 0.5rem;
                        background: #f9fafb;
                    }

                    .header-cta,
                    .mobile-cta {
                        background: #2563eb;
                        color: white;
                        border: none;
                        border-radius: 0.5rem;
                        padding: 0.5rem 1rem;
                        cursor: pointer;
                    }

                    .header-compact-selector {
                        display: none;
                    }

                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 4px;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }

                    .burger-menu span {
                        width: 22px;
                        height: 2px;
                        background: #111827;
                    }

                    .mobile-menu {
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                        padding: 1rem 1.5rem 1.5rem;
                        border-top: 1px solid #e5e7eb;
                    }

                    .mobile-audiences {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 0.5rem;
                    }

                    .mobile-audience {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 0.25rem;
                        padding: 0.5rem;
                        border-radius: 0.5rem;
                        border: none;
                        background: #f3f4f6;
                        cursor: pointer;
                    }

                    .mobile-audience.selected {
                        background: #2563eb;
                        color: white;
                    }

                    .mobile-nav-link {
                        text-align: left;
                        background: none;
                        border: none;
                        padding: 0.5rem 0;
                        color: #374151;
                        cursor: pointer;
                    }

                    .mobile-nav-link.active {
                        color: #2563eb;
                        font-weight: 600;
                    }

                    @media (max-width: 768px) {
                        .header-nav,
                        .header-actions {
                            display: none;
                        }

                        .burger-menu {
                            display: flex;
                        }

                        .header-compact-selector {
                            display: block;
                        }
                    }
                "#}
            </style>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_burger_opens_the_menu() {
        assert!(menu_after(false, MenuAction::Toggle));
        assert!(!menu_after(true, MenuAction::Toggle));
        assert!(!menu_after(false, MenuAction::Navigate));
    }

    #[test]
    fn picking_an_audience_closes_the_menu() {
        assert!(!menu_after(true, MenuAction::PickAudience));
        assert!(!menu_after(true, MenuAction::Navigate));
        assert!(!menu_after(true, MenuAction::ClickAway));
    }
}
