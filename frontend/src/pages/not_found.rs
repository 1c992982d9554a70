use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::dom;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let navigator = use_navigator();

    let go_back = Callback::from(|_: MouseEvent| {
        info!("404: going back");
        dom::history_back();
    });

    let go_home = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = navigator.as_ref() {
            navigator.push(&Route::Home);
        }
    });

    html! {
        <div class="not-found">
            <div class="not-found-card">
                <div class="not-found-code">{"404"}</div>
                <h1>{"Page Not Found"}</h1>
                <p>{"The page you're looking for doesn't exist. Let's get you back!"}</p>
                <div class="not-found-actions">
                    <button class="not-found-back" onclick={go_back}>{"← Go Back"}</button>
                    <button class="not-found-home" onclick={go_home}>{"🏠 Back to Home"}</button>
                </div>
            </div>
            <style>
                {r#"
                    .not-found {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1.5rem;
                        background: linear-gradient(135deg, #eff6ff, #f0fdfa);
                    }

                    .not-found-card {
                        max-width: 28rem;
                        text-align: center;
                    }

                    .not-found-code {
                        font-size: 6rem;
                        font-weight: 800;
                        color: #2563eb;
                        opacity: 0.25;
                    }

                    .not-found-card p {
                        color: #6b7280;
                    }

                    .not-found-actions {
                        display: flex;
                        justify-content: center;
                        gap: 1rem;
                        margin-top: 2rem;
                    }

                    .not-found-actions button {
                        padding: 0.75rem 1.5rem;
                        border-radius: 0.75rem;
                        font-weight: 600;
                        cursor: pointer;
                    }

                    .not-found-back {
                        border: 1px solid #d1d5db;
                        background: white;
                    }

                    .not-found-home {
                        border: none;
                        background: #2563eb;
                        color: white;
                    }
                "#}
            </style>
        </div>
    }
}
