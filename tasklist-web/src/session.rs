use gloo_storage::{LocalStorage, Storage};
use shared::session::{SessionStore, TOKEN_KEY};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// Bearer token kept in `localStorage` under [`TOKEN_KEY`].
///
/// The raw string is stored, not a JSON value, so tokens written by other
/// clients of the same origin are picked up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserSession;

impl SessionStore for BrowserSession {
    fn get(&self) -> Option<String> {
        LocalStorage::raw()
            .get_item(TOKEN_KEY)
            .ok()
            .flatten()
            .filter(|token| !token.is_empty())
    }

    fn set(&self, token: &str) {
        if LocalStorage::raw().set_item(TOKEN_KEY, token).is_err() {
            log("Unable to persist session token");
        }
    }

    fn clear(&self) {
        LocalStorage::delete(TOKEN_KEY);
    }
}
