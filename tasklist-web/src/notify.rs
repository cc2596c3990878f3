//! Blocking browser alerts for failed requests.

use shared::errors::ClientError;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// Show `message` in a `window.alert` dialog.
pub fn alert(message: &str) {
    let shown = web_sys::window().is_some_and(|window| window.alert_with_message(message).is_ok());
    if !shown {
        log(message);
    }
}

/// Alert the user about `error`, unless it is a silent validation failure.
pub fn report(error: &ClientError) {
    log(&format!("Request failed: {error:?}"));
    if error.is_user_facing() {
        alert(&error.to_string());
    }
}

/// Report the error of `result`, if any.
pub fn report_err<T>(result: &Result<T, ClientError>) {
    if let Err(error) = result {
        report(error);
    }
}
