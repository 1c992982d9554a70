use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod dom;
mod audience {
    pub mod selection;
    pub mod store;
    pub mod channel;
    pub mod service;
    pub mod hooks;
}
mod content {
    pub mod table;
    pub mod navigation;
    pub mod hero;
    pub mod value_props;
    pub mod journey;
    pub mod testimonials;
    pub mod pricing;
    pub mod cta;
    pub mod faq;
    pub mod seo;
    pub mod platform;
}
mod components {
    pub mod header;
    pub mod audience_selector;
    pub mod banner;
    pub mod scroll_progress;
    pub mod tracking;
    pub mod footer;
}
mod pages {
    pub mod landing;
    pub mod not_found;
    pub mod sections {
        pub mod hero;
        pub mod value_props;
        pub mod journey;
        pub mod how_it_works;
        pub mod testimonials;
        pub mod metrics;
        pub mod pricing;
        pub mod cta;
        pub mod faq;
    }
}

use audience::hooks::AudienceProvider;
use audience::service::AudiencePreferenceService;
use pages::{landing::Landing, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/landing-page")]
    LandingPage,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home | Route::LandingPage => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    // One preference service for the whole page; every section reaches it
    // through context.
    let service = use_state(AudiencePreferenceService::with_local_storage);

    html! {
        <AudienceProvider service={(*service).clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </AudienceProvider>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
