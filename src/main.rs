use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod catalog;
mod utils;
mod inquiry {
    pub mod draft;
    pub mod composer;
    pub mod dispatcher;
}
mod components {
    pub mod icon;
    pub mod layout;
    pub mod nav;
    pub mod backdrop;
    pub mod faq_item;
    pub mod pricing;
    pub mod contact_form;
    pub mod footer;
}
mod pages {
    pub mod landing;
}

use components::{backdrop::Backdrop, nav::Nav};
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
        },
        // Single page site, every other path lands on the home page.
        Route::NotFound => {
            info!("Unknown path, redirecting to Home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Backdrop />
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {}", config::BRAND_NAME);
    yew::Renderer::<App>::new().render();
}
