//! Owner of every transient overlay: the single modal and the notification
//! stack. Static-page listeners reach it through a [`Dispatcher`].

use gloo_timers::future::TimeoutFuture;
use log::{debug, info};
use web_sys::Document;
use yew::html::Scope;
use yew::prelude::*;

use crate::analytics::track_event;
use crate::components::modal::{ModalView, MODAL_CSS, MODAL_STYLES};
use crate::components::modal_content::ModalContent;
use crate::components::notification::{
    NotificationBanner, NotificationKind, NOTIFICATION_CSS, NOTIFICATION_STYLES,
};
use crate::config::SiteConfig;
use crate::styles::ensure_style;

pub const OVERLAY_ROOT_ID: &str = "overlay-root";

#[derive(Clone, Debug, PartialEq)]
pub enum OverlayMsg {
    OpenModal(ModalContent),
    CloseModal,
    RemoveModal(u32),
    Notify(String, NotificationKind),
    CloseNotification(u32),
    RequestTutorial(String),
    RequestTip(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ModalState {
    pub id: u32,
    pub content: ModalContent,
    pub closing: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub message: String,
    pub kind: NotificationKind,
}

/// Overlay bookkeeping, independent of rendering.
///
/// Ids are never reused, so a removal scheduled for one modal can not take
/// down a newer one that replaced it in the meantime.
#[derive(Debug, Default)]
pub struct Overlays {
    next_id: u32,
    modal: Option<ModalState>,
    notices: Vec<Notice>,
}

impl Overlays {
    fn take_id(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }

    pub fn modal(&self) -> Option<&ModalState> {
        self.modal.as_ref()
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Opens `content`, replacing whatever modal was live.
    pub fn open_modal(&mut self, content: ModalContent) -> u32 {
        let id = self.take_id();
        self.modal = Some(ModalState { id, content, closing: false });
        id
    }

    /// Starts the exit transition and returns the id to remove once it ends.
    /// `None` when there is no modal or it is already closing.
    pub fn begin_close(&mut self) -> Option<u32> {
        match self.modal.as_mut() {
            Some(modal) if !modal.closing => {
                modal.closing = true;
                Some(modal.id)
            }
            _ => None,
        }
    }

    pub fn remove_modal(&mut self, id: u32) -> bool {
        if self.modal.as_ref().map(|m| m.id) == Some(id) {
            self.modal = None;
            true
        } else {
            false
        }
    }

    pub fn push_notice(&mut self, message: String, kind: NotificationKind) -> u32 {
        let id = self.take_id();
        self.notices.push(Notice { id, message, kind });
        id
    }

    pub fn remove_notice(&mut self, id: u32) -> bool {
        let before = self.notices.len();
        self.notices.retain(|n| n.id != id);
        self.notices.len() != before
    }
}

pub fn tutorial_request_notice(title: &str) -> String {
    format!("Tutorial request for \"{}\" has been submitted!", title)
}

pub fn tip_request_notice(title: &str) -> String {
    format!("Tip request for \"{}\" has been submitted!", title)
}

#[derive(Properties, PartialEq)]
pub struct OverlayHostProps {
    pub config: SiteConfig,
}

pub struct OverlayHost {
    overlays: Overlays,
}

impl Component for OverlayHost {
    type Message = OverlayMsg;
    type Properties = OverlayHostProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            overlays: Overlays::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            OverlayMsg::OpenModal(content) => {
                ensure_style(MODAL_STYLES, MODAL_CSS);
                content.ensure_styles();
                let id = self.overlays.open_modal(content);
                debug!("Opened modal {}", id);
                true
            }
            OverlayMsg::CloseModal => match self.overlays.begin_close() {
                Some(id) => {
                    let delay = ctx.props().config.modal_exit_ms;
                    ctx.link().send_future(async move {
                        TimeoutFuture::new(delay).await;
                        OverlayMsg::RemoveModal(id)
                    });
                    true
                }
                None => false,
            },
            OverlayMsg::RemoveModal(id) => self.overlays.remove_modal(id),
            OverlayMsg::Notify(message, kind) => {
                ensure_style(NOTIFICATION_STYLES, NOTIFICATION_CSS);
                let id = self.overlays.push_notice(message, kind);
                debug!("Showing notification {} ({:?})", id, kind);
                true
            }
            OverlayMsg::CloseNotification(id) => self.overlays.remove_notice(id),
            OverlayMsg::RequestTutorial(title) => {
                track_event("tutorial_request", serde_json::json!({ "title": &title }));
                ctx.link().send_message_batch(vec![
                    OverlayMsg::Notify(tutorial_request_notice(&title), NotificationKind::Success),
                    OverlayMsg::CloseModal,
                ]);
                false
            }
            OverlayMsg::RequestTip(title) => {
                track_event("tip_request", serde_json::json!({ "title": &title }));
                ctx.link().send_message_batch(vec![
                    OverlayMsg::Notify(tip_request_notice(&title), NotificationKind::Success),
                    OverlayMsg::CloseModal,
                ]);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let dispatch = ctx.link().callback(|msg: OverlayMsg| msg);
        let on_notice_close = ctx.link().callback(OverlayMsg::CloseNotification);
        let ttl_ms = ctx.props().config.notification_ttl_ms;

        html! {
            <>
                if let Some(modal) = self.overlays.modal() {
                    <ModalView
                        key={modal.id}
                        content={modal.content.clone()}
                        closing={modal.closing}
                        dispatch={dispatch}
                    />
                }
                <div class="notification-stack">
                    { for self.overlays.notices().iter().map(|notice| html! {
                        <NotificationBanner
                            key={notice.id}
                            id={notice.id}
                            message={notice.message.clone()}
                            kind={notice.kind}
                            ttl_ms={ttl_ms}
                            on_close={on_notice_close.clone()}
                        />
                    }) }
                </div>
            </>
        }
    }
}

/// Cloneable handle the page listeners use to drive the overlay host.
#[derive(Clone)]
pub struct Dispatcher {
    scope: Scope<OverlayHost>,
}

impl Dispatcher {
    pub fn new(scope: Scope<OverlayHost>) -> Self {
        Self { scope }
    }

    pub fn send(&self, msg: OverlayMsg) {
        self.scope.send_message(msg);
    }

    pub fn open(&self, content: ModalContent) {
        self.send(OverlayMsg::OpenModal(content));
    }

    pub fn notify(&self, message: impl Into<String>, kind: NotificationKind) {
        self.send(OverlayMsg::Notify(message.into(), kind));
    }
}

/// Mounts the host into `#overlay-root`, creating it at the end of `<body>`
/// when the markup does not provide one.
pub fn mount(document: &Document, config: SiteConfig) -> Option<Dispatcher> {
    let root = match document.get_element_by_id(OVERLAY_ROOT_ID) {
        Some(root) => root,
        None => {
            let root = document.create_element("div").ok()?;
            root.set_id(OVERLAY_ROOT_ID);
            document.body()?.append_child(&root).ok()?;
            root
        }
    };

    let handle =
        yew::Renderer::<OverlayHost>::with_root_and_props(root, OverlayHostProps { config }).render();
    info!("Overlay host mounted");
    Some(Dispatcher::new((*handle).clone()))
}
