use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, HtmlTextAreaElement};

use crate::form::validation::FieldVerdict;

pub const ERROR_CLASS: &str = "error";
pub const SUCCESS_CLASS: &str = "success";
pub const ERROR_TEXT_CLASS: &str = "error-text";

pub const FORM_FIELD_STYLES: &str = "form-field-styles";
pub const FORM_FIELD_CSS: &str = r#"
    .error-text {
        color: #ef4444;
        font-size: 0.875rem;
        margin-top: 0.25rem;
    }

    .form-group.error input,
    .form-group.error textarea,
    input.error,
    textarea.error {
        border-color: #ef4444;
        box-shadow: 0 0 0 3px rgba(239, 68, 68, 0.1);
    }

    .form-group.success input,
    .form-group.success textarea,
    input.success,
    textarea.success {
        border-color: #10b981;
        box-shadow: 0 0 0 3px rgba(16, 185, 129, 0.1);
    }
"#;

/// Class a field carries after its verdict is shown.
pub fn marker_class(verdict: &FieldVerdict) -> &'static str {
    if verdict.is_valid {
        SUCCESS_CLASS
    } else {
        ERROR_CLASS
    }
}

/// Name and current value of an `<input>` or `<textarea>`.
pub fn field_value(field: &Element) -> Option<(String, String)> {
    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        return Some((input.name(), input.value()));
    }
    field
        .dyn_ref::<HtmlTextAreaElement>()
        .map(|area| (area.name(), area.value()))
}

fn remove_error_text(field: &Element) {
    if let Some(parent) = field.parent_element() {
        if let Ok(Some(existing)) = parent.query_selector(&format!(".{}", ERROR_TEXT_CLASS)) {
            existing.remove();
        }
    }
}

/// Back to neutral: no markers, no error text.
pub fn clear_field(field: &Element) {
    let _ = field.class_list().remove_2(ERROR_CLASS, SUCCESS_CLASS);
    remove_error_text(field);
}

pub fn present(field: &Element, verdict: &FieldVerdict) {
    clear_field(field);
    let _ = field.class_list().add_1(marker_class(verdict));

    if let Some(message) = verdict.message.filter(|_| !verdict.is_valid) {
        show_error_text(field, message);
    }
}

fn show_error_text(field: &Element, message: &str) {
    let (document, parent) = match (field.owner_document(), field.parent_element()) {
        (Some(document), Some(parent)) => (document, parent),
        _ => return,
    };

    match document.create_element("div") {
        Ok(error) => {
            error.set_class_name(ERROR_TEXT_CLASS);
            error.set_text_content(Some(message));
            if let Err(e) = parent.append_child(&error) {
                warn!("Could not attach field error: {:?}", e);
            }
        }
        Err(e) => warn!("Could not create field error: {:?}", e),
    }
}
