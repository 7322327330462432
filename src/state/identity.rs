//! Per-session identity supplied by the Telegram WebApp host.
//!
//! The host exposes `window.Telegram.WebApp`; its `initData` string is the
//! opaque session token forwarded verbatim on authenticated calls. Outside
//! the host (plain browser tab, native test build) both fields stay `None`
//! and privileged flows treat that as a disablement signal.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

/// Immutable identity snapshot taken once at startup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Identity {
    /// Opaque host-issued token. Never parsed or validated client-side.
    pub token: Option<String>,
    /// Best-effort display label for the current user.
    pub display_name: Option<String>,
}

impl Identity {
    /// Read the identity from the host environment.
    ///
    /// Calls the host's `ready()` and `expand()` handshake fire-and-forget;
    /// a missing or broken host object never fails construction.
    pub fn from_host() -> Self {
        #[cfg(feature = "csr")]
        {
            let Some(webapp) = host_webapp() else {
                return Self::default();
            };

            call_host_method(&webapp, "ready");
            call_host_method(&webapp, "expand");

            let token = string_field(&webapp, "initData").filter(|data| !data.is_empty());

            let user = js_sys::Reflect::get(&webapp, &"initDataUnsafe".into())
                .ok()
                .and_then(|unsafe_data| js_sys::Reflect::get(&unsafe_data, &"user".into()).ok())
                .filter(|user| user.is_object());

            let display_name = user.as_ref().and_then(|user| {
                display_name_from_parts(
                    string_field(user, "first_name").as_deref(),
                    string_field(user, "last_name").as_deref(),
                    string_field(user, "username").as_deref(),
                )
            });

            Self {
                token,
                display_name,
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::default()
        }
    }

    /// Whether a host token is present. Absence means "browser mode":
    /// privileged calls are sent without an identity header and the
    /// backend decides what to do with them.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Assemble a display label from the host user fields.
///
/// Produces `"First Last (@username)"`, degrading to whichever parts are
/// present; returns `None` when every part is absent or empty.
pub fn display_name_from_parts(
    first_name: Option<&str>,
    last_name: Option<&str>,
    username: Option<&str>,
) -> Option<String> {
    let mut parts: Vec<&str> = Vec::new();
    if let Some(first) = first_name {
        if !first.is_empty() {
            parts.push(first);
        }
    }
    if let Some(last) = last_name {
        if !last.is_empty() {
            parts.push(last);
        }
    }

    let name = parts.join(" ");
    let name = match username.filter(|u| !u.is_empty()) {
        Some(username) if name.is_empty() => format!("@{username}"),
        Some(username) => format!("{name} (@{username})"),
        None => name,
    };

    if name.is_empty() { None } else { Some(name) }
}

/// Locate `window.Telegram.WebApp`, if the page runs inside the host.
#[cfg(feature = "csr")]
fn host_webapp() -> Option<wasm_bindgen::JsValue> {
    let window = web_sys::window()?;
    let telegram = js_sys::Reflect::get(&window, &"Telegram".into()).ok()?;
    if !telegram.is_object() {
        return None;
    }
    let webapp = js_sys::Reflect::get(&telegram, &"WebApp".into()).ok()?;
    if webapp.is_object() { Some(webapp) } else { None }
}

/// Invoke a zero-argument method on the host object, ignoring failures.
#[cfg(feature = "csr")]
fn call_host_method(target: &wasm_bindgen::JsValue, name: &str) {
    use wasm_bindgen::JsCast;

    if let Ok(method) = js_sys::Reflect::get(target, &name.into()) {
        if let Some(function) = method.dyn_ref::<js_sys::Function>() {
            let _ = function.call0(target);
        }
    }
}

/// Read a string property off an untyped host object.
#[cfg(feature = "csr")]
fn string_field(target: &wasm_bindgen::JsValue, key: &str) -> Option<String> {
    js_sys::Reflect::get(target, &key.into())
        .ok()
        .and_then(|value| value.as_string())
}
