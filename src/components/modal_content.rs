use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::overlay_host::OverlayMsg;
use crate::styles::ensure_style;

pub const VIDEO_PREVIEW_STYLES: &str = "video-modal-styles";
pub const VIDEO_EMBED_STYLES: &str = "video-embed-styles";
pub const LOCAL_VIDEO_STYLES: &str = "local-video-styles";

const VIDEO_PREVIEW_CSS: &str = r#"
    .video-container {
        margin: 20px 0;
        border-radius: 12px;
        overflow: hidden;
        background: #f8fafc;
        border: 2px solid #e2e8f0;
    }

    .video-placeholder {
        padding: 60px 20px;
        text-align: center;
        background: linear-gradient(135deg, #f8fafc 0%, #e2e8f0 100%);
    }

    .video-placeholder i {
        font-size: 4rem;
        color: var(--primary-color);
        margin-bottom: 20px;
    }

    .video-placeholder p {
        font-size: 1.2rem;
        color: var(--text-primary);
        margin-bottom: 10px;
    }

    .video-description {
        color: var(--text-secondary);
        font-size: 1rem;
    }
"#;

const VIDEO_EMBED_CSS: &str = r#"
    .video-wrapper {
        position: relative;
        width: 100%;
        height: 0;
        padding-bottom: 56.25%;
        overflow: hidden;
        border-radius: 12px;
    }

    .video-wrapper iframe {
        position: absolute;
        top: 0;
        left: 0;
        width: 100%;
        height: 100%;
        border: none;
    }

    .video-container {
        margin: 20px 0;
        border-radius: 12px;
        overflow: hidden;
        background: #000;
        box-shadow: 0 10px 25px rgba(0, 0, 0, 0.2);
    }
"#;

const LOCAL_VIDEO_CSS: &str = r#"
    .video-wrapper video {
        width: 100%;
        height: auto;
        border-radius: 12px;
        box-shadow: 0 10px 25px rgba(0, 0, 0, 0.2);
    }

    .video-container {
        margin: 20px 0;
        border-radius: 12px;
        overflow: hidden;
        background: #000;
    }
"#;

const IFRAME_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

/// Body of the single modal. Each variant is a fixed template filled with the
/// title (or section name / media location) it was opened with.
#[derive(Clone, Debug, PartialEq)]
pub enum ModalContent {
    Tutorial { title: String },
    TutorialVideo { title: String },
    Tip { title: String },
    Section { name: String },
    VideoEmbed { title: String, url: String },
    LocalVideo { title: String, path: String },
}

/// The `.webm` sibling offered as fallback source for a local `.mp4`.
pub fn webm_fallback(path: &str) -> String {
    path.replacen(".mp4", ".webm", 1)
}

pub fn section_blurb(name: &str) -> String {
    format!(
        "Discover comprehensive tutorials and resources for {}.",
        name.to_lowercase()
    )
}

fn features(heading: &'static str, items: &[&'static str]) -> Html {
    html! {
        <div class="modal-features">
            <h3>{heading}</h3>
            <ul>
                { for items.iter().map(|item| html! { <li>{*item}</li> }) }
            </ul>
        </div>
    }
}

fn action_button(
    class: &'static str,
    label: &'static str,
    dispatch: &Callback<OverlayMsg>,
    msg: OverlayMsg,
) -> Html {
    let onclick = dispatch.reform(move |_: MouseEvent| msg.clone());
    html! {
        <button class={classes!("btn", class)} {onclick}>{label}</button>
    }
}

impl ModalContent {
    /// Style block this variant needs on top of the base modal styles.
    pub fn variant_style(&self) -> Option<(&'static str, &'static str)> {
        match self {
            ModalContent::TutorialVideo { .. } => Some((VIDEO_PREVIEW_STYLES, VIDEO_PREVIEW_CSS)),
            ModalContent::VideoEmbed { .. } => Some((VIDEO_EMBED_STYLES, VIDEO_EMBED_CSS)),
            ModalContent::LocalVideo { .. } => Some((LOCAL_VIDEO_STYLES, LOCAL_VIDEO_CSS)),
            _ => None,
        }
    }

    pub fn ensure_styles(&self) {
        if let Some((key, css)) = self.variant_style() {
            ensure_style(key, css);
        }
    }

    pub fn view(&self, dispatch: &Callback<OverlayMsg>) -> Html {
        match self {
            ModalContent::Tutorial { title } => html! {
                <>
                    <h2>{title}</h2>
                    <p>{"This tutorial is coming soon! We're working hard to bring you comprehensive, step-by-step guides for all your creative needs."}</p>
                    { features("What you'll learn:", &[
                        "Step-by-step instructions",
                        "Video demonstrations",
                        "Downloadable resources",
                        "Practice exercises",
                    ]) }
                    <div class="modal-actions">
                        { action_button("btn-primary", "Got it!", dispatch, OverlayMsg::CloseModal) }
                        { action_button("btn-secondary", "Request Tutorial", dispatch, OverlayMsg::RequestTutorial(title.clone())) }
                    </div>
                </>
            },
            ModalContent::TutorialVideo { title } => html! {
                <>
                    <h2>{format!("{} - Video Preview", title)}</h2>
                    <div class="video-container">
                        <div class="video-placeholder">
                            <i class="fas fa-play-circle"></i>
                            <p>{"Video preview coming soon!"}</p>
                            <p class="video-description">{"This will be a comprehensive video tutorial covering all the essential techniques and workflows."}</p>
                        </div>
                    </div>
                    { features("Video includes:", &[
                        "High-quality video demonstrations",
                        "Step-by-step instructions",
                        "Downloadable project files",
                        "Practice exercises",
                        "Expert tips and tricks",
                    ]) }
                    <div class="modal-actions">
                        { action_button("btn-primary", "Got it!", dispatch, OverlayMsg::CloseModal) }
                        { action_button("btn-secondary", "Request Full Tutorial", dispatch, OverlayMsg::RequestTutorial(title.clone())) }
                    </div>
                </>
            },
            ModalContent::Tip { title } => html! {
                <>
                    <h2>{title}</h2>
                    <p>{"This tip and trick guide is coming soon! We're compiling the best practices and shortcuts from industry professionals."}</p>
                    { features("What you'll discover:", &[
                        "Professional shortcuts",
                        "Workflow optimizations",
                        "Time-saving techniques",
                        "Pro tips and tricks",
                    ]) }
                    <div class="modal-actions">
                        { action_button("btn-primary", "Got it!", dispatch, OverlayMsg::CloseModal) }
                        { action_button("btn-secondary", "Request Tip", dispatch, OverlayMsg::RequestTip(title.clone())) }
                    </div>
                </>
            },
            ModalContent::Section { name } => html! {
                <>
                    <h2>{format!("Explore {}", name)}</h2>
                    <p>{section_blurb(name)}</p>
                    { features("What's included:", &[
                        "Beginner to advanced tutorials",
                        "Video demonstrations",
                        "Downloadable project files",
                        "Community support",
                    ]) }
                    <div class="modal-actions">
                        { action_button("btn-primary", "Start Learning", dispatch, OverlayMsg::CloseModal) }
                        { action_button("btn-secondary", "Browse Resources", dispatch, OverlayMsg::CloseModal) }
                    </div>
                </>
            },
            ModalContent::VideoEmbed { title, url } => html! {
                <>
                    <h2>{title}</h2>
                    <div class="video-container">
                        <div class="video-wrapper">
                            <iframe
                                src={url.clone()}
                                title={title.clone()}
                                frameborder="0"
                                allow={IFRAME_ALLOW}
                                allowfullscreen=true
                            ></iframe>
                        </div>
                    </div>
                    { features("What you'll learn:", &[
                        "Step-by-step video instructions",
                        "Professional techniques",
                        "Real-world examples",
                        "Downloadable resources",
                    ]) }
                    <div class="modal-actions">
                        { action_button("btn-primary", "Close Video", dispatch, OverlayMsg::CloseModal) }
                        { action_button("btn-secondary", "Request More Tutorials", dispatch, OverlayMsg::RequestTutorial(title.clone())) }
                    </div>
                </>
            },
            ModalContent::LocalVideo { title, path } => html! {
                <>
                    <h2>{title}</h2>
                    <div class="video-container">
                        <div class="video-wrapper">
                            <video controls=true width="100%" height="auto" preload="metadata">
                                <source src={path.clone()} type="video/mp4" />
                                <source src={webm_fallback(path)} type="video/webm" />
                                {"Your browser does not support the video tag."}
                            </video>
                        </div>
                    </div>
                    { features("Video Features:", &[
                        "Full video controls",
                        "HD quality playback",
                        "Downloadable content",
                        "Mobile optimized",
                    ]) }
                    <div class="modal-actions">
                        { action_button("btn-primary", "Close Video", dispatch, OverlayMsg::CloseModal) }
                        <a href={path.clone()} download="" class="btn btn-secondary">{"Download Video"}</a>
                    </div>
                </>
            },
        }
    }
}
