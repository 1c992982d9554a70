use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::dom;

pub const BANNER_TEXT: &str = "Pre-Launch | Launching Mar 2026 | Join 500+ on Waitlist";

/// Shown until the visitor has scrolled a full screen down.
pub fn banner_visible(scroll_y: f64, viewport_height: f64) -> bool {
    scroll_y < viewport_height
}

#[function_component(PreLaunchBanner)]
pub fn pre_launch_banner() -> Html {
    let (_, scroll_y) = use_window_scroll();

    if !banner_visible(scroll_y, dom::viewport_height()) {
        return html! {};
    }

    html! {
        <div class="pre-launch-banner" role="status">
            <span class="banner-rocket">{"🚀"}</span>
            <span>{BANNER_TEXT}</span>
            <style>
                {r#"
                    .pre-launch-banner {
                        position: sticky;
                        top: 0;
                        z-index: 60;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                        padding: 0.75rem 1rem;
                        font-size: 0.875rem;
                        font-weight: 500;
                        background: linear-gradient(90deg, #2563eb, #14b8a6);
                        color: #111827;
                    }

                    .banner-rocket {
                        font-size: 1.125rem;
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hides_after_one_screen() {
        assert!(banner_visible(0.0, 800.0));
        assert!(banner_visible(799.0, 800.0));
        assert!(!banner_visible(800.0, 800.0));
    }
}
