use gloo_console::log;
use serde_json::Value;

/// Placeholder analytics sink: events never leave the browser, they are only
/// echoed to the console.
pub fn track_event(name: &str, data: Value) {
    log!("Event tracked:", name, data.to_string());
}
