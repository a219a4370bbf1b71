//! A full submission through the live form.
#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use tutorials_hub::components::overlay_host::{Dispatcher, OverlayHost, OverlayHostProps};
use tutorials_hub::config::SiteConfig;
use tutorials_hub::form::contact::{self, FORM_ID, SENDING_LABEL, SENT_NOTICE};
use tutorials_hub::form::presenter::{ERROR_CLASS, ERROR_TEXT_CLASS, FORM_FIELD_STYLES, SUCCESS_CLASS};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Event, HtmlButtonElement, HtmlInputElement, HtmlTextAreaElement};

wasm_bindgen_test_configure!(run_in_browser);

const SUBMIT_DELAY_MS: u32 = 60;

const FORM_MARKUP: &str = r#"
    <div class="form-group"><input type="text" name="name"></div>
    <div class="form-group"><input type="email" name="email"></div>
    <div class="form-group"><input type="text" name="subject"></div>
    <div class="form-group"><textarea name="message"></textarea></div>
    <button type="submit">Send Message</button>
"#;

fn input(document: &Document, name: &str) -> HtmlInputElement {
    document
        .query_selector(&format!("#{} input[name=\"{}\"]", FORM_ID, name))
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap()
}

fn blur(target: &web_sys::Element) {
    target.dispatch_event(&Event::new("blur").unwrap()).unwrap();
}

#[wasm_bindgen_test]
async fn submission_notifies_once_and_leaves_a_clean_form() {
    let document = web_sys::window().unwrap().document().unwrap();
    let body = document.body().unwrap();

    let form = document.create_element("form").unwrap();
    form.set_id(FORM_ID);
    form.set_inner_html(FORM_MARKUP);
    body.append_child(&form).unwrap();

    let overlay_root = document.create_element("div").unwrap();
    body.append_child(&overlay_root).unwrap();
    let config = SiteConfig {
        submit_delay_ms: SUBMIT_DELAY_MS,
        ..SiteConfig::default()
    };
    let handle = yew::Renderer::<OverlayHost>::with_root_and_props(
        overlay_root.clone(),
        OverlayHostProps { config: config.clone() },
    )
    .render();
    contact::install(&document, &config, Dispatcher::new((*handle).clone()));
    assert!(document.get_element_by_id(FORM_FIELD_STYLES).is_some());

    // One field left with an error, the rest marked valid.
    let name = input(&document, "name");
    name.set_value("A");
    blur(&name);
    name.set_value("Ada Lovelace");
    for (field, value) in [("email", "ada@example.com"), ("subject", "Masks")] {
        let field = input(&document, field);
        field.set_value(value);
        blur(&field);
    }
    let message: HtmlTextAreaElement = document
        .query_selector(&format!("#{} textarea", FORM_ID))
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();
    message.set_value("Please cover layer masks in depth.");
    blur(&message);
    assert!(name.class_list().contains(ERROR_CLASS));
    assert_eq!(form.query_selector_all(&format!(".{}", ERROR_TEXT_CLASS)).unwrap().length(), 1);

    let button: HtmlButtonElement = form
        .query_selector("button[type=\"submit\"]")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();
    form.dispatch_event(&Event::new("submit").unwrap()).unwrap();
    TimeoutFuture::new(10).await;
    assert_eq!(button.text_content().as_deref(), Some(SENDING_LABEL));
    assert!(button.disabled());

    TimeoutFuture::new(SUBMIT_DELAY_MS + 60).await;

    let successes = overlay_root.query_selector_all(".notification-success").unwrap();
    assert_eq!(successes.length(), 1);
    assert_eq!(
        overlay_root
            .query_selector(".notification-message")
            .unwrap()
            .unwrap()
            .text_content()
            .as_deref(),
        Some(SENT_NOTICE)
    );

    for field in ["name", "email", "subject"] {
        assert_eq!(input(&document, field).value(), "", "{}", field);
    }
    assert_eq!(message.value(), "");
    let leftover = format!(".{}, .{}, .{}", ERROR_CLASS, SUCCESS_CLASS, ERROR_TEXT_CLASS);
    assert_eq!(form.query_selector_all(&leftover).unwrap().length(), 0);

    assert_eq!(button.text_content().as_deref(), Some("Send Message"));
    assert!(!button.disabled());

    handle.destroy();
}
