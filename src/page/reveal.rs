use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{js_sys::Array, Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::SiteConfig;
use crate::dom::select_all;
use crate::styles::ensure_style;

pub const ANIMATION_STYLES: &str = "animation-styles";
pub const REVEAL_SELECTOR: &str = ".tutorial-card, .tip-card, .resource-category, .contact-item";
pub const REVEALED_CLASS: &str = "animate-in";

const REVEAL_CSS: &str = r#"
    .tutorial-card, .tip-card, .resource-category, .contact-item {
        opacity: 0;
        transform: translateY(30px);
        transition: all 0.6s ease-out;
    }

    .tutorial-card.animate-in, .tip-card.animate-in, .resource-category.animate-in, .contact-item.animate-in {
        opacity: 1;
        transform: translateY(0);
    }
"#;

/// Hides revealable blocks until they scroll into view, then fades them in.
/// Without an observer the blocks are left visible.
pub fn install(document: &Document, config: &SiteConfig) {
    let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
        for entry in entries.iter() {
            if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                if entry.is_intersecting() {
                    let _ = entry.target().class_list().add_1(REVEALED_CLASS);
                }
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.reveal_threshold));
    options.set_root_margin(&config.reveal_root_margin);

    let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => observer,
        Err(e) => {
            warn!("IntersectionObserver unavailable, scroll reveal disabled: {:?}", e);
            return;
        }
    };
    callback.forget();
    ensure_style(ANIMATION_STYLES, REVEAL_CSS);

    let targets = select_all(document, REVEAL_SELECTOR);
    for target in &targets {
        observer.observe(target);
    }
    info!("Observing {} elements for scroll reveal", targets.len());
}
