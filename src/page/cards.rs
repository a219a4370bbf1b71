use gloo_timers::callback::Timeout;
use log::info;
use serde_json::json;
use web_sys::{js_sys, Document, Event};

use crate::analytics::track_event;
use crate::components::modal_content::ModalContent;
use crate::components::overlay_host::Dispatcher;
use crate::config::SiteConfig;
use crate::dom::{listen, select_all, select_within, set_style, text_of};

const CARD_LIFT: &str = "translateY(-10px) scale(1.02)";
const CARD_REST: &str = "translateY(0) scale(1)";

/// Animation delay and duration (seconds) of a floating card, from two
/// uniform samples in `[0, 1)`.
pub fn float_timing(delay_sample: f64, duration_sample: f64) -> (f64, f64) {
    (delay_sample * 2.0, 3.0 + duration_sample * 2.0)
}

pub fn is_external(href: &str) -> bool {
    href.starts_with("http")
}

pub fn install_tutorial_cards(document: &Document, dispatcher: &Dispatcher) {
    let cards = select_all(document, ".tutorial-card");

    for card in &cards {
        let lifted = card.clone();
        listen(card, "mouseenter", move |_: Event| set_style(&lifted, "transform", CARD_LIFT));
        let rested = card.clone();
        listen(card, "mouseleave", move |_: Event| set_style(&rested, "transform", CARD_REST));

        for link in select_within(card, ".tutorial-link") {
            let dispatcher = dispatcher.clone();
            let source = link.clone();
            listen(&link, "click", move |e: Event| {
                e.prevent_default();
                let title = source.text_content().unwrap_or_default();
                dispatcher.open(ModalContent::Tutorial { title });
            });
        }

        if let Ok(Some(play)) = card.query_selector(".play-overlay") {
            let dispatcher = dispatcher.clone();
            let card = card.clone();
            listen(&play, "click", move |e: Event| {
                e.prevent_default();
                e.stop_propagation();
                let title = text_of(&card, "h3").unwrap_or_default();
                dispatcher.open(ModalContent::TutorialVideo { title });
            });
        }
    }
    info!("Wired {} tutorial cards", cards.len());
}

pub fn install_tip_cards(document: &Document, dispatcher: &Dispatcher) {
    for card in select_all(document, ".tip-card") {
        if let Ok(Some(link)) = card.query_selector(".tip-link") {
            let dispatcher = dispatcher.clone();
            listen(&link, "click", move |e: Event| {
                e.prevent_default();
                let title = text_of(&card, "h3").unwrap_or_default();
                dispatcher.open(ModalContent::Tip { title });
            });
        }
    }
}

pub fn install_floating_cards(document: &Document, dispatcher: &Dispatcher) {
    for card in select_all(document, ".floating-cards .card") {
        let (delay, duration) = float_timing(js_sys::Math::random(), js_sys::Math::random());
        set_style(&card, "animation-delay", &format!("{}s", delay));
        set_style(&card, "animation-duration", &format!("{}s", duration));

        {
            let dispatcher = dispatcher.clone();
            let source = card.clone();
            listen(&card, "click", move |_: Event| {
                let name = text_of(&source, ".card-content span").unwrap_or_default();
                dispatcher.open(ModalContent::Section { name });
            });
        }

        if let Ok(Some(image)) = card.query_selector(".card-image") {
            let zoomed = image.clone();
            listen(&card, "mouseenter", move |_: Event| set_style(&zoomed, "transform", "scale(1.1)"));
            listen(&card, "mouseleave", move |_: Event| set_style(&image, "transform", "scale(1)"));
        }
    }
}

/// Press feedback on resource links; outbound clicks are tracked.
pub fn install_resource_links(document: &Document, config: &SiteConfig) {
    let feedback_ms = config.press_feedback_ms;

    for link in select_all(document, ".resource-link") {
        let source = link.clone();
        listen(&link, "click", move |_: Event| {
            set_style(&source, "transform", "scale(0.95)");
            let pressed = source.clone();
            Timeout::new(feedback_ms, move || set_style(&pressed, "transform", "scale(1)")).forget();

            if let Some(href) = source.get_attribute("href").filter(|href| is_external(href)) {
                track_event("external_link_click", json!({ "href": href }));
            }
        });
    }
}
