//! Process-wide registry of `<style>` blocks injected into `<head>`.
//!
//! A block is keyed by a fixed identifier that doubles as the element id, so
//! each one is inserted at most once per page load no matter how many
//! overlays ask for it.

use std::cell::RefCell;
use std::collections::HashSet;

use log::{debug, warn};
use web_sys::window;

#[derive(Debug, Default)]
pub struct StyleRegistry {
    claimed: HashSet<&'static str>,
}

impl StyleRegistry {
    /// Marks `key` as present. Returns `false` when it already was.
    pub fn claim(&mut self, key: &'static str) -> bool {
        self.claimed.insert(key)
    }

    pub fn is_claimed(&self, key: &str) -> bool {
        self.claimed.contains(key)
    }
}

thread_local! {
    static REGISTRY: RefCell<StyleRegistry> = RefCell::new(StyleRegistry::default());
}

/// Inserts `css` under `key` unless that key was registered before.
pub fn ensure_style(key: &'static str, css: &str) {
    if REGISTRY.with(|registry| registry.borrow().is_claimed(key)) {
        return;
    }

    let document = match window().and_then(|w| w.document()) {
        Some(document) => document,
        None => return,
    };

    // Markup may already ship the block
    if document.get_element_by_id(key).is_none() {
        let style = match document.create_element("style") {
            Ok(style) => style,
            Err(e) => {
                warn!("Could not create style block {}: {:?}", key, e);
                return;
            }
        };
        style.set_id(key);
        style.set_text_content(Some(css));

        match document.head() {
            Some(head) => {
                if let Err(e) = head.append_child(&style) {
                    warn!("Could not insert style block {}: {:?}", key, e);
                    return;
                }
            }
            None => {
                warn!("Document has no <head>, skipping style block {}", key);
                return;
            }
        }
        debug!("Inserted style block {}", key);
    }

    REGISTRY.with(|registry| registry.borrow_mut().claim(key));
}
