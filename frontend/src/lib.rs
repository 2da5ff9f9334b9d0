use crate::components::footer::Footer;
use crate::components::nav::Nav;
use log::{debug, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod components;
pub mod config;
pub mod countdown;
pub mod form_dom;
pub mod version;
pub mod pages {
    pub mod contest_edit;
    pub mod contest_view;
    pub mod not_found;
}

use pages::{contest_edit::ContestEdit, contest_view::ContestView, not_found::NotFound};

// Unit test modules only
#[cfg(test)]
mod tests;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/contest/:contest_id")]
    ContestView { contest_id: String },
    #[at("/contest/:contest_id/edit")]
    ContestEdit { contest_id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
fn app() -> Html {
    debug!("App component rendering");
    html! {
        <BrowserRouter>
            <div class="app-container">
                <Nav />
                <main class="flex-1">
                    <Switch<Route> render={switch} />
                </main>
                <Footer />
            </div>
        </BrowserRouter>
    }
}

fn switch(routes: Route) -> Html {
    debug!("Route switch: {:?}", routes);
    match routes {
        Route::ContestView { contest_id } => {
            debug!("Rendering Contest view with contest_id: {}", contest_id);
            html! { <ContestView contest_id={contest_id} /> }
        }
        Route::ContestEdit { contest_id } => {
            debug!("Rendering Contest edit with contest_id: {}", contest_id);
            html! { <ContestEdit contest_id={contest_id} /> }
        }
        Route::NotFound => {
            debug!("Rendering 404 Not Found");
            html! { <NotFound /> }
        }
    }
}

#[wasm_bindgen]
pub async fn run_app() -> Result<(), JsValue> {
    // Initialize logging
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    info!("Logger initialized");

    // Set up panic hook
    console_error_panic_hook::set_once();
    info!("Panic hook set");

    // Mount the app
    info!("Mounting application to #app");
    yew::Renderer::<App>::new().render();
    info!("Application mounted");

    Ok(())
}

// Add a start function that Trunk can call
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_bindgen_futures::spawn_local(async {
        run_app().await.expect("Failed to run app");
    });
    Ok(())
}
