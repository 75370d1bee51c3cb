use dioxus::prelude::{Signal, WritableExt};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{window, Event};

/// Get the browser viewport dimensions
pub fn get_viewport_size() -> (u32, u32) {
    let Some(window) = window() else {
        return (0, 0);
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0) as u32;
    let height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0) as u32;
    (width, height)
}

/// Keep a viewport signal current: sample once, then update it on every
/// resize and orientation change so breakpoint decisions stay live.
pub fn track_viewport(mut viewport: Signal<(u32, u32)>) {
    viewport.set(get_viewport_size());

    let Some(window) = window() else {
        return;
    };

    let callback = Closure::wrap(Box::new(move |_event: Event| {
        viewport.set(get_viewport_size());
    }) as Box<dyn FnMut(Event)>);

    let _ = window.add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref());
    let _ = window
        .add_event_listener_with_callback("orientationchange", callback.as_ref().unchecked_ref());

    // Keep listener alive for app lifetime.
    callback.forget();
}

/// Read a single query parameter from the current location.
/// Empty values are treated as absent.
pub fn read_query_param(key: &str) -> Option<String> {
    let window = window()?;
    let search = window.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    params.get(key).filter(|value| !value.is_empty())
}

/// Set a query parameter by replacing the current history entry.
/// No navigation, no reload, no new entry: the auto-generated session id
/// must not pollute back-navigation with throwaway ids.
pub fn replace_query_param(key: &str, value: &str) {
    set_query_param(key, value, false);
}

/// Set a query parameter by pushing a new history entry. Used for explicit
/// session switches, so the back button returns to the previous session.
pub fn push_query_param(key: &str, value: &str) {
    set_query_param(key, value, true);
}

fn set_query_param(key: &str, value: &str, push: bool) {
    let Some(window) = window() else {
        return;
    };
    let Ok(href) = window.location().href() else {
        return;
    };
    let Ok(url) = web_sys::Url::new(&href) else {
        return;
    };

    url.search_params().set(key, value);

    let Ok(history) = window.history() else {
        return;
    };
    let result = if push {
        history.push_state_with_url(&JsValue::NULL, "", Some(&url.href()))
    } else {
        history.replace_state_with_url(&JsValue::NULL, "", Some(&url.href()))
    };
    if let Err(e) = result {
        log::error!("Failed to update history state: {:?}", e);
    }
}

/// Invoke `on_change` on every popstate event (back/forward navigation).
/// The closure is leaked to keep it alive for the page lifetime, matching
/// how the page itself never unmounts.
pub fn on_location_change(on_change: impl FnMut() + 'static) {
    let Some(window) = window() else {
        return;
    };

    let mut on_change = on_change;
    let closure = Closure::wrap(Box::new(move |_e: Event| {
        on_change();
    }) as Box<dyn FnMut(Event)>);

    if let Err(e) =
        window.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())
    {
        log::error!("Failed to add popstate listener: {:?}", e);
    }

    closure.forget();
}
