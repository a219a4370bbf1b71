use web_sys::{Element, KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::modal_content::ModalContent;
use crate::components::overlay_host::OverlayMsg;

pub const MODAL_STYLES: &str = "modal-styles";

pub const MODAL_CSS: &str = r#"
    .modal-overlay {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        bottom: 0;
        background: rgba(0, 0, 0, 0.8);
        backdrop-filter: blur(5px);
        display: flex;
        align-items: center;
        justify-content: center;
        z-index: 10000;
        padding: 20px;
        animation: modalFadeIn 0.3s ease-out;
    }

    .modal-overlay.closing {
        animation: modalFadeOut 0.3s ease-out forwards;
    }

    .modal-overlay.closing .modal-content {
        animation: modalSlideOut 0.3s ease-out forwards;
    }

    .modal-content {
        background: rgba(255, 255, 255, 0.95);
        backdrop-filter: blur(20px);
        border: 1px solid rgba(255, 255, 255, 0.2);
        border-radius: 16px;
        padding: 40px;
        max-width: 500px;
        width: 100%;
        position: relative;
        animation: modalSlideIn 0.3s ease-out;
        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
    }

    .modal-close {
        position: absolute;
        top: 15px;
        right: 20px;
        background: rgba(255, 255, 255, 0.9);
        backdrop-filter: blur(10px);
        border: 1px solid rgba(0, 0, 0, 0.1);
        border-radius: 50%;
        width: 40px;
        height: 40px;
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 20px;
        font-weight: bold;
        cursor: pointer;
        color: #6b7280;
        transition: all 0.2s;
        z-index: 1;
        box-shadow: 0 2px 8px rgba(0, 0, 0, 0.1);
    }

    .modal-close:hover {
        color: #ef4444;
        background: rgba(239, 68, 68, 0.1);
        border-color: rgba(239, 68, 68, 0.3);
        transform: scale(1.1);
    }

    .modal-features {
        margin: 20px 0;
    }

    .modal-features ul {
        list-style: none;
        padding: 0;
    }

    .modal-features li {
        padding: 5px 0;
        position: relative;
        padding-left: 20px;
    }

    .modal-features li::before {
        content: '✓';
        position: absolute;
        left: 0;
        color: #10b981;
        font-weight: bold;
    }

    .modal-actions {
        display: flex;
        gap: 15px;
        margin-top: 30px;
        flex-wrap: wrap;
    }

    @keyframes modalFadeIn {
        from { opacity: 0; backdrop-filter: blur(0px); }
        to { opacity: 1; backdrop-filter: blur(5px); }
    }

    @keyframes modalFadeOut {
        from { opacity: 1; backdrop-filter: blur(5px); }
        to { opacity: 0; backdrop-filter: blur(0px); }
    }

    @keyframes modalSlideIn {
        from { opacity: 0; transform: translateY(-50px); }
        to { opacity: 1; transform: translateY(0); }
    }

    @keyframes modalSlideOut {
        from { opacity: 1; transform: translateY(0); }
        to { opacity: 0; transform: translateY(-50px); }
    }

    @media (max-width: 768px) {
        .modal-content {
            padding: 30px 20px;
            margin: 10px;
        }

        .modal-actions {
            flex-direction: column;
        }
    }
"#;

/// True only when the click landed on the backdrop itself. Clicks inside the
/// content bubble up with a different target.
pub fn is_backdrop_click<T: PartialEq>(target: Option<&T>, backdrop: Option<&T>) -> bool {
    matches!((target, backdrop), (Some(target), Some(backdrop)) if target == backdrop)
}

#[derive(Properties, PartialEq)]
pub struct ModalViewProps {
    pub content: ModalContent,
    pub closing: bool,
    pub dispatch: Callback<OverlayMsg>,
}

#[function_component(ModalView)]
pub fn modal_view(props: &ModalViewProps) -> Html {
    // Escape closes whichever modal is mounted; the listener goes away with it.
    {
        let dispatch = props.dispatch.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                dispatch.emit(OverlayMsg::CloseModal);
            }
        });
    }

    let backdrop_ref = use_node_ref();
    let on_backdrop = {
        let dispatch = props.dispatch.clone();
        let backdrop_ref = backdrop_ref.clone();
        Callback::from(move |e: MouseEvent| {
            let target = e.target_dyn_into::<Element>();
            let backdrop = backdrop_ref.cast::<Element>();
            if is_backdrop_click(target.as_ref(), backdrop.as_ref()) {
                dispatch.emit(OverlayMsg::CloseModal);
            }
        })
    };

    let on_close = props.dispatch.reform(|_: MouseEvent| OverlayMsg::CloseModal);

    html! {
        <div ref={backdrop_ref} class={classes!("modal-overlay", props.closing.then(|| "closing"))} onclick={on_backdrop}>
            <div class="modal-content">
                <button class="modal-close" onclick={on_close}>{"×"}</button>
                { props.content.view(&props.dispatch) }
            </div>
        </div>
    }
}
