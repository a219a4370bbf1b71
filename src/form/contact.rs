//! `#contact-form`: inline validation and a simulated submission.

use gloo_timers::future::TimeoutFuture;
use log::{debug, info, warn};
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Event, HtmlButtonElement, HtmlFormElement};

use crate::components::notification::NotificationKind;
use crate::components::overlay_host::Dispatcher;
use crate::config::SiteConfig;
use crate::dom::{listen, select_within};
use crate::form::presenter::{clear_field, field_value, present, FORM_FIELD_CSS, FORM_FIELD_STYLES};
use crate::form::validation::validate;
use crate::styles::ensure_style;

pub const FORM_ID: &str = "contact-form";
pub const SENDING_LABEL: &str = "Sending...";
pub const SENT_NOTICE: &str = "Message sent successfully! We'll get back to you soon.";
pub const FAILED_NOTICE: &str = "Failed to send message. Please try again.";

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("could not encode contact message: {0}")]
    Encode(#[from] serde_json::Error),
}

pub fn encode_payload(message: &ContactMessage) -> Result<String, SubmitError> {
    Ok(serde_json::to_string(message)?)
}

/// Stands in for a network call: encodes the payload, then just waits.
pub async fn simulate_send(message: &ContactMessage, delay_ms: u32) -> Result<(), SubmitError> {
    let payload = encode_payload(message)?;
    debug!("Simulating contact submission ({} bytes)", payload.len());
    TimeoutFuture::new(delay_ms).await;
    Ok(())
}

fn read_message(form: &HtmlFormElement) -> ContactMessage {
    let value_of = |name: &str| {
        form.query_selector(&format!("[name=\"{}\"]", name))
            .ok()
            .flatten()
            .and_then(|field| field_value(&field))
            .map(|(_, value)| value)
            .unwrap_or_default()
    };

    ContactMessage {
        name: value_of("name"),
        email: value_of("email"),
        subject: value_of("subject"),
        message: value_of("message"),
    }
}

/// Everything a submission touches on the page, in the order it touches it.
pub trait SubmitSurface {
    /// Busy state: button disabled and relabelled.
    fn begin(&mut self);
    fn notify(&mut self, message: &'static str, kind: NotificationKind);
    /// Empties the fields and drops any validation markers.
    fn reset(&mut self);
    /// Button back to its label and enabled state from before `begin`.
    fn restore(&mut self);
}

/// Reports `outcome`, then puts the form back regardless of it.
pub fn finish_submission<S: SubmitSurface>(surface: &mut S, outcome: Result<(), SubmitError>) {
    match outcome {
        Ok(()) => {
            surface.notify(SENT_NOTICE, NotificationKind::Success);
            surface.reset();
        }
        Err(e) => {
            warn!("Contact submission failed: {}", e);
            surface.notify(FAILED_NOTICE, NotificationKind::Error);
        }
    }
    surface.restore();
}

struct FormSurface {
    form: HtmlFormElement,
    dispatcher: Dispatcher,
    button: Option<HtmlButtonElement>,
    original_label: Option<String>,
}

impl FormSurface {
    fn new(form: HtmlFormElement, dispatcher: Dispatcher) -> Self {
        let button = form
            .query_selector("button[type=\"submit\"]")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());
        let original_label = button.as_ref().and_then(|b| b.text_content());
        Self { form, dispatcher, button, original_label }
    }
}

impl SubmitSurface for FormSurface {
    fn begin(&mut self) {
        if let Some(button) = &self.button {
            button.set_text_content(Some(SENDING_LABEL));
            button.set_disabled(true);
        }
    }

    fn notify(&mut self, message: &'static str, kind: NotificationKind) {
        self.dispatcher.notify(message, kind);
    }

    fn reset(&mut self) {
        self.form.reset();
        for field in select_within(&self.form, "input, textarea") {
            clear_field(&field);
        }
    }

    fn restore(&mut self) {
        if let Some(button) = &self.button {
            button.set_text_content(self.original_label.as_deref());
            button.set_disabled(false);
        }
    }
}

async fn submit(form: HtmlFormElement, dispatcher: Dispatcher, delay_ms: u32) {
    let mut surface = FormSurface::new(form, dispatcher);
    surface.begin();
    let outcome = simulate_send(&read_message(&surface.form), delay_ms).await;
    finish_submission(&mut surface, outcome);
}

pub fn install(document: &Document, config: &SiteConfig, dispatcher: Dispatcher) {
    ensure_style(FORM_FIELD_STYLES, FORM_FIELD_CSS);

    let form = match document
        .get_element_by_id(FORM_ID)
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    {
        Some(form) => form,
        None => {
            debug!("No #{} on this page", FORM_ID);
            return;
        }
    };

    for field in select_within(&form, "input, textarea") {
        let target = field.clone();
        listen(&field, "blur", move |_: Event| {
            if let Some((name, value)) = field_value(&target) {
                present(&target, &validate(&name, &value));
            }
        });

        let target = field.clone();
        listen(&field, "input", move |_: Event| clear_field(&target));
    }

    let delay_ms = config.submit_delay_ms;
    let submit_form = form.clone();
    listen(&form, "submit", move |e: Event| {
        e.prevent_default();
        spawn_local(submit(submit_form.clone(), dispatcher.clone(), delay_ms));
    });
    info!("Contact form wired");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_carries_every_field() {
        let message = ContactMessage {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Hello".into(),
            message: "I would like a tutorial on masks.".into(),
        };
        let payload: serde_json::Value = serde_json::from_str(&encode_payload(&message).unwrap()).unwrap();
        assert_eq!(payload["name"], "Ada");
        assert_eq!(payload["email"], "ada@example.com");
        assert_eq!(payload["subject"], "Hello");
        assert_eq!(payload["message"], "I would like a tutorial on masks.");
    }

    #[derive(Debug, PartialEq)]
    enum Step {
        Begin,
        Notify(&'static str, NotificationKind),
        Reset,
        Restore,
    }

    #[derive(Default)]
    struct Recorder {
        steps: Vec<Step>,
    }

    impl SubmitSurface for Recorder {
        fn begin(&mut self) {
            self.steps.push(Step::Begin);
        }

        fn notify(&mut self, message: &'static str, kind: NotificationKind) {
            self.steps.push(Step::Notify(message, kind));
        }

        fn reset(&mut self) {
            self.steps.push(Step::Reset);
        }

        fn restore(&mut self) {
            self.steps.push(Step::Restore);
        }
    }

    #[test]
    fn success_notifies_once_then_resets_then_restores() {
        let mut recorder = Recorder::default();
        finish_submission(&mut recorder, Ok(()));
        assert_eq!(
            recorder.steps,
            vec![
                Step::Notify(SENT_NOTICE, NotificationKind::Success),
                Step::Reset,
                Step::Restore,
            ]
        );
    }

    #[test]
    fn failure_keeps_fields_but_still_restores_the_button() {
        let encode_error = serde_json::from_str::<u8>("not json").unwrap_err();
        let mut recorder = Recorder::default();
        finish_submission(&mut recorder, Err(SubmitError::from(encode_error)));
        assert_eq!(
            recorder.steps,
            vec![
                Step::Notify(FAILED_NOTICE, NotificationKind::Error),
                Step::Restore,
            ]
        );
    }

    #[test]
    fn empty_form_still_encodes() {
        assert!(encode_payload(&ContactMessage::default()).is_ok());
    }
}
