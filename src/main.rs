use std::rc::Rc;

use log::info;
use yew::prelude::*;

mod config;
mod dom;
mod quiz;
mod effects {
    pub mod anchor;
    pub mod parallax;
    pub mod reveal;
}
mod components {
    pub mod parallax_shapes;
    pub mod quiz_preview;
}
mod pages {
    pub mod landing;
}

use config::EffectsConfig;
use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    // Read once at mount; the override island does not change afterwards.
    let config = use_state(|| Rc::new(EffectsConfig::load()));

    html! {
        <Landing config={(*config).clone()} />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting landing page");
    yew::Renderer::<App>::new().render();
}
