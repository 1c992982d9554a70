use yew::prelude::*;

use crate::config;

pub const PRE_LAUNCH_NOTICE: &str = "Platform launching March 2026. Statistics shown are projections, not current data. All metrics including tasks completed, payments to workers, ratings, verified users, and other platform statistics are projected goals for Year 1 and do not represent actual current data.";

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Utc::now().format("%Y").to_string();

    html! {
        <footer class="site-footer">
            <div class="pre-launch-notice">
                <span class="notice-icon">{"⚠️"}</span>
                <div>
                    <h4>{"Pre-Launch Notice"}</h4>
                    <p>{PRE_LAUNCH_NOTICE}</p>
                </div>
            </div>
            <div class="footer-bottom">
                <span>{format!("© {} WE Universal", year)}</span>
                {" | "}
                <a href={format!("mailto:{}", config::SUPPORT_EMAIL)}>{config::SUPPORT_EMAIL}</a>
            </div>
            <style>
                {r#"
                    .site-footer {
                        margin-top: 5rem;
                        padding: 2rem 1.5rem;
                        border-top: 1px solid #e5e7eb;
                        background: white;
                    }

                    .pre-launch-notice {
                        max-width: 56rem;
                        margin: 0 auto;
                        display: flex;
                        gap: 0.75rem;
                        padding: 1.5rem;
                        border-radius: 0.5rem;
                        background: rgba(245, 158, 11, 0.1);
                        border: 1px solid rgba(245, 158, 11, 0.2);
                    }

                    .pre-launch-notice h4 {
                        margin: 0 0 0.5rem;
                    }

                    .pre-launch-notice p {
                        margin: 0;
                        font-size: 0.875rem;
                        line-height: 1.6;
                        color: #6b7280;
                    }

                    .footer-bottom {
                        margin-top: 1.5rem;
                        text-align: center;
                        font-size: 0.8rem;
                        color: #9ca3af;
                    }

                    .footer-bottom a {
                        color: inherit;
                    }
                "#}
            </style>
        </footer>
    }
}
