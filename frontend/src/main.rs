use log::info;
use yew::prelude::*;
use yew_hooks::prelude::use_title;
use yew_router::prelude::*;

mod config;
mod content;
mod hooks;
mod motion;
mod carousel {
    pub mod autoplay;
    pub mod rotator;
}
mod components {
    pub mod about;
    pub mod cta;
    pub mod footer;
    pub mod hero;
    pub mod navbar;
    pub mod services;
    pub mod testimonials;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        }
        // Single-page site: unknown paths get the landing page too.
        Route::NotFound => {
            info!("Unknown route, rendering Home page");
            html! { <Landing /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    use_title(config::SITE_TITLE.to_string());

    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting FitLife");
    yew::Renderer::<App>::new().render();
}
