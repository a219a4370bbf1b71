use log::{debug, info, warn};
use wasm_bindgen::JsValue;
use web_sys::{js_sys, Event, Window};

use tutorials_hub::actions::{self, ActionTable};
use tutorials_hub::components::overlay_host;
use tutorials_hub::config::{self, SiteConfig};
use tutorials_hub::dom;
use tutorials_hub::form::contact;
use tutorials_hub::page::{cards, navigation, reveal};

fn report_service_worker_support(window: &Window) {
    let supported = js_sys::Reflect::has(&window.navigator(), &JsValue::from_str("serviceWorker"))
        .unwrap_or(false);
    if supported {
        info!("Service Worker support detected");
    } else {
        debug!("No Service Worker support");
    }
}

/// Wires every behavior onto the already parsed page.
fn start() {
    let window = match web_sys::window() {
        Some(window) => window,
        None => return,
    };
    let document = match window.document() {
        Some(document) => document,
        None => return,
    };

    let config = SiteConfig::load(&document);
    let dispatcher = match overlay_host::mount(&document, config.clone()) {
        Some(dispatcher) => dispatcher,
        None => {
            warn!("Could not mount the overlay host, page stays static");
            return;
        }
    };

    navigation::install_navbar(&window, &document, &config);
    navigation::install_smooth_scroll(&window, &document, &config);
    contact::install(&document, &config, dispatcher.clone());
    navigation::install_mobile_menu(&document);
    cards::install_tutorial_cards(&document, &dispatcher);
    cards::install_resource_links(&document, &config);
    cards::install_tip_cards(&document, &dispatcher);
    cards::install_floating_cards(&document, &dispatcher);
    reveal::install(&document, &config);
    actions::install(&document, ActionTable::with_defaults(), dispatcher);

    report_service_worker_support(&window);
    info!("Page interactions ready");
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting tutorials hub");
    match web_sys::window().and_then(|w| w.document()) {
        Some(document) if document.ready_state() == "loading" => {
            dom::listen(&document, "DOMContentLoaded", |_: Event| start());
        }
        Some(_) => start(),
        None => warn!("No document to attach to"),
    }
}
