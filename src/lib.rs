//! Behavior for the static Creative Tutorials Hub page: overlays, the contact
//! form and the page listeners. `main` wires these onto the live document.

pub mod actions;
pub mod analytics;
pub mod config;
pub mod dom;
pub mod styles;
pub mod components {
    pub mod modal;
    pub mod modal_content;
    pub mod notification;
    pub mod overlay_host;
}
pub mod form {
    pub mod contact;
    pub mod presenter;
    pub mod validation;
}
pub mod page {
    pub mod cards;
    pub mod navigation;
    pub mod reveal;
}
