//! Thin wrappers around the browser APIs the page touches.
//!
//! Everything here tolerates a missing `window`/`document` (SSR, tests) by
//! doing nothing, except the scroll lock which reports why it could not run.

use thiserror::Error;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomError {
    #[error("window unavailable")]
    NoWindow,
    #[error("document body unavailable")]
    NoBody,
}

/// Extracts the element id from a same-page anchor href.
///
/// Returns `None` for external URLs and for a bare `#`.
pub fn anchor_target(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() { None } else { Some(id) }
}

/// Smooth-scrolls to the element a nav link points at.
/// An anchor that does not resolve to an existing element is a silent no-op.
pub fn scroll_to_anchor(href: &str) {
    let Some(id) = anchor_target(href) else {
        return;
    };
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(element) = document.get_element_by_id(id) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Locks or unlocks background scrolling on the document body.
///
/// Single accessor for the shared body style; only the header menu requests
/// it, last writer wins.
pub fn set_body_scroll_locked(locked: bool) -> Result<(), DomError> {
    let window = web_sys::window().ok_or(DomError::NoWindow)?;
    let body = window
        .document()
        .and_then(|d| d.body())
        .ok_or(DomError::NoBody)?;
    let style = body.style();
    if locked {
        let _ = style.set_property("overflow", "hidden");
    } else {
        let _ = style.remove_property("overflow");
    }
    Ok(())
}

/// Current vertical scroll offset, 0 when unavailable.
pub fn scroll_offset_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Opens a fixed external URL in a new browsing context.
pub fn open_external(url: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer");
    }
}

/// Copies text to the clipboard, fire-and-forget.
pub fn copy_to_clipboard(text: &str) {
    if let Some(window) = web_sys::window() {
        let clipboard = window.navigator().clipboard();
        let _ = clipboard.write_text(text);
    }
}

/// Restarts the entire page.
pub fn reload_page() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().reload();
    }
}

/// Hard navigation to the root route.
pub fn navigate_home() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn anchor_target_extracts_ids() {
        assert_eq!(anchor_target("#features"), Some("features"));
        assert_eq!(anchor_target("#community"), Some("community"));
    }

    #[test]
    fn anchor_target_rejects_non_anchors() {
        assert_eq!(anchor_target("https://discord.gg/rnm-server"), None);
        assert_eq!(anchor_target("/terms"), None);
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target(""), None);
    }
}
