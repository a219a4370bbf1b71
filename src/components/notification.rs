use yew::prelude::*;
use yew_hooks::prelude::*;

pub const NOTIFICATION_STYLES: &str = "notification-styles";

pub const NOTIFICATION_CSS: &str = r#"
    .notification-stack {
        position: fixed;
        top: 20px;
        right: 20px;
        z-index: 10001;
        max-width: 400px;
        display: flex;
        flex-direction: column;
        gap: 10px;
    }

    .notification {
        animation: notificationSlideIn 0.3s ease-out;
    }

    .notification-content {
        display: flex;
        align-items: center;
        justify-content: space-between;
        padding: 15px 20px;
        border-radius: 8px;
        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
    }

    .notification-success {
        background: #f0fdf4;
        border: 1px solid #bbf7d0;
        color: #166534;
    }

    .notification-error {
        background: #fef2f2;
        border: 1px solid #fecaca;
        color: #dc2626;
    }

    .notification-info {
        background: #eff6ff;
        border: 1px solid #bfdbfe;
        color: #1e40af;
    }

    .notification-close {
        background: none;
        border: none;
        font-size: 18px;
        cursor: pointer;
        margin-left: 10px;
        opacity: 0.7;
        transition: opacity 0.2s;
    }

    .notification-close:hover {
        opacity: 1;
    }

    @keyframes notificationSlideIn {
        from {
            opacity: 0;
            transform: translateX(100%);
        }
        to {
            opacity: 1;
            transform: translateX(0);
        }
    }
"#;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    pub fn class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "notification-success",
            NotificationKind::Error => "notification-error",
            NotificationKind::Info => "notification-info",
        }
    }
}

impl Default for NotificationKind {
    fn default() -> Self {
        NotificationKind::Info
    }
}

#[derive(Properties, PartialEq)]
pub struct NotificationBannerProps {
    pub id: u32,
    pub message: String,
    pub kind: NotificationKind,
    pub ttl_ms: u32,
    pub on_close: Callback<u32>,
}

/// One corner banner. It asks the host to drop it once `ttl_ms` elapses;
/// closing it earlier unmounts it and takes the timer with it.
#[function_component(NotificationBanner)]
pub fn notification_banner(props: &NotificationBannerProps) -> Html {
    {
        let on_close = props.on_close.clone();
        let id = props.id;
        use_timeout(move || on_close.emit(id), props.ttl_ms);
    }

    let close = {
        let on_close = props.on_close.clone();
        let id = props.id;
        Callback::from(move |_: MouseEvent| on_close.emit(id))
    };

    html! {
        <div class={classes!("notification", props.kind.class())} data-notification-id={props.id.to_string()}>
            <div class="notification-content">
                <span class="notification-message">{&props.message}</span>
                <button class="notification-close" onclick={close}>{"×"}</button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::NotificationKind;

    #[test]
    fn kind_maps_to_its_style_class() {
        assert_eq!(NotificationKind::Success.class(), "notification-success");
        assert_eq!(NotificationKind::Error.class(), "notification-error");
        assert_eq!(NotificationKind::default().class(), "notification-info");
    }
}
