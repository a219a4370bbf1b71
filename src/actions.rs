//! Delegated click handling for markup-declared actions.
//!
//! Static markup asks for overlay behavior with `data-action="<name>"` plus
//! `data-*` arguments instead of calling page-global functions. One document
//! listener resolves the name in an [`ActionTable`] and forwards the result to
//! the overlay host.

use std::collections::HashMap;

use log::{debug, info, warn};
use web_sys::{Document, Element, Event};

use crate::components::modal_content::ModalContent;
use crate::components::overlay_host::{Dispatcher, OverlayMsg};
use crate::dom::{event_element, listen};

/// Arguments an action can read from the clicked element.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActionContext {
    pub title: Option<String>,
    pub url: Option<String>,
    pub path: Option<String>,
    /// From the closest ancestor carrying `data-notification-id`.
    pub notification_id: Option<u32>,
}

impl ActionContext {
    fn from_element(element: &Element) -> Self {
        Self {
            title: element.get_attribute("data-title"),
            url: element.get_attribute("data-url"),
            path: element.get_attribute("data-path"),
            notification_id: element
                .closest("[data-notification-id]")
                .ok()
                .flatten()
                .and_then(|el| el.get_attribute("data-notification-id"))
                .and_then(|id| id.parse().ok()),
        }
    }
}

pub type ActionHandler = fn(&ActionContext) -> Option<OverlayMsg>;

#[derive(Default)]
pub struct ActionTable {
    handlers: HashMap<&'static str, ActionHandler>,
}

impl ActionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: &'static str, handler: ActionHandler) -> &mut Self {
        if self.handlers.insert(name, handler).is_some() {
            warn!("Action {} registered twice, keeping the last handler", name);
        }
        self
    }

    pub fn resolve(&self, name: &str) -> Option<ActionHandler> {
        self.handlers.get(name).copied()
    }

    /// The page entry points: modal/notification closing, requests and the
    /// two video players.
    pub fn with_defaults() -> Self {
        let mut table = Self::new();
        table
            .register("close-modal", |_| Some(OverlayMsg::CloseModal))
            .register("request-tutorial", |ctx| {
                ctx.title.clone().map(OverlayMsg::RequestTutorial)
            })
            .register("request-tip", |ctx| ctx.title.clone().map(OverlayMsg::RequestTip))
            .register("close-notification", |ctx| {
                ctx.notification_id.map(OverlayMsg::CloseNotification)
            })
            .register("show-video-modal", |ctx| {
                Some(OverlayMsg::OpenModal(ModalContent::VideoEmbed {
                    title: ctx.title.clone()?,
                    url: ctx.url.clone()?,
                }))
            })
            .register("show-local-video", |ctx| {
                Some(OverlayMsg::OpenModal(ModalContent::LocalVideo {
                    title: ctx.title.clone()?,
                    path: ctx.path.clone()?,
                }))
            });
        table
    }
}

pub fn install(document: &Document, table: ActionTable, dispatcher: Dispatcher) {
    listen(document, "click", move |e: Event| {
        let element = match event_element(&e).and_then(|el| el.closest("[data-action]").ok().flatten()) {
            Some(element) => element,
            None => return,
        };
        let name = element.get_attribute("data-action").unwrap_or_default();

        let handler = match table.resolve(&name) {
            Some(handler) => handler,
            None => {
                warn!("No handler registered for action {:?}", name);
                return;
            }
        };

        e.prevent_default();
        match handler(&ActionContext::from_element(&element)) {
            Some(msg) => {
                debug!("Dispatching action {}", name);
                dispatcher.send(msg);
            }
            None => warn!("Action {} is missing its data attributes", name),
        }
    });
    info!("Action table installed");
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT_ACTIONS: [&str; 6] = [
        "close-modal",
        "request-tutorial",
        "request-tip",
        "close-notification",
        "show-video-modal",
        "show-local-video",
    ];

    #[test]
    fn every_entry_point_is_registered() {
        let table = ActionTable::with_defaults();
        for name in DEFAULT_ACTIONS {
            assert!(table.resolve(name).is_some(), "{} missing", name);
        }
        assert!(table.resolve("closeModal").is_none());
        assert!(table.resolve("").is_none());
    }

    #[test]
    fn request_actions_need_a_title() {
        let table = ActionTable::with_defaults();
        let request = table.resolve("request-tutorial").unwrap();

        assert_eq!(request(&ActionContext::default()), None);

        let ctx = ActionContext {
            title: Some("Color Grading".into()),
            ..Default::default()
        };
        assert_eq!(request(&ctx), Some(OverlayMsg::RequestTutorial("Color Grading".into())));
    }

    #[test]
    fn local_video_uses_title_and_path() {
        let table = ActionTable::with_defaults();
        let show = table.resolve("show-local-video").unwrap();

        let ctx = ActionContext {
            title: Some("Intro".into()),
            path: Some("/videos/intro.mp4".into()),
            ..Default::default()
        };
        assert_eq!(
            show(&ctx),
            Some(OverlayMsg::OpenModal(ModalContent::LocalVideo {
                title: "Intro".into(),
                path: "/videos/intro.mp4".into(),
            }))
        );

        let no_path = ActionContext {
            title: Some("Intro".into()),
            ..Default::default()
        };
        assert_eq!(show(&no_path), None);
    }

    #[test]
    fn close_notification_targets_the_enclosing_banner() {
        let table = ActionTable::with_defaults();
        let close = table.resolve("close-notification").unwrap();

        let ctx = ActionContext {
            notification_id: Some(7),
            ..Default::default()
        };
        assert_eq!(close(&ctx), Some(OverlayMsg::CloseNotification(7)));
        assert_eq!(close(&ActionContext::default()), None);
    }

    #[test]
    fn later_registration_wins() {
        let mut table = ActionTable::new();
        table
            .register("close-modal", |_| None)
            .register("close-modal", |_| Some(OverlayMsg::CloseModal));
        let handler = table.resolve("close-modal").unwrap();
        assert_eq!(handler(&ActionContext::default()), Some(OverlayMsg::CloseModal));
    }
}
