//! Thin wrappers over the browser APIs the landing page touches. Every
//! function tolerates a missing window or element and does nothing.

use log::debug;
use web_sys::{window, Document, ScrollBehavior, ScrollToOptions};

use crate::content::navigation::{self, SectionBounds, NAV_SECTIONS};

fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

pub fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

pub fn document_height() -> f64 {
    document()
        .and_then(|d| d.document_element())
        .map(|root| root.scroll_height() as f64)
        .unwrap_or(0.0)
}

/// Percent of the page scrolled right now.
pub fn page_progress() -> f64 {
    navigation::scroll_progress(scroll_y(), document_height(), viewport_height())
}

fn smooth_scroll(top: f64) {
    if let Some(window) = window() {
        let mut options = ScrollToOptions::new();
        options.top(top).behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Smooth-scrolls so the section's top sits just below the sticky header.
pub fn scroll_to_section(id: &str) {
    let Some(element) = document().and_then(|d| d.get_element_by_id(id)) else {
        debug!("No section '{}' to scroll to", id);
        return;
    };
    let top = element.get_bounding_client_rect().top();
    smooth_scroll(navigation::scroll_target(top, scroll_y()));
}

pub fn scroll_to_top() {
    smooth_scroll(0.0);
}

/// Viewport bounds of the nav sections currently in the DOM, in page order.
pub fn nav_section_bounds() -> Vec<SectionBounds<'static>> {
    let Some(document) = document() else {
        return Vec::new();
    };
    NAV_SECTIONS
        .iter()
        .filter_map(|section| {
            let rect = document.get_element_by_id(section.id)?.get_bounding_client_rect();
            Some(SectionBounds {
                id: section.id,
                top: rect.top(),
                bottom: rect.bottom(),
            })
        })
        .collect()
}

/// (top, height) of an element relative to the viewport.
pub fn element_rect(id: &str) -> Option<(f64, f64)> {
    let rect = document()?.get_element_by_id(id)?.get_bounding_client_rect();
    Some((rect.top(), rect.height()))
}

pub fn set_title(title: &str) {
    if let Some(document) = document() {
        document.set_title(title);
    }
}

/// Creates or updates `<meta {attribute}="{key}" content="...">` in `<head>`.
pub fn set_meta(attribute: &str, key: &str, content: &str) {
    let Some(document) = document() else {
        return;
    };
    let selector = format!("meta[{}=\"{}\"]", attribute, key);
    let existing = document.query_selector(&selector).ok().flatten();
    let meta = match existing {
        Some(meta) => meta,
        None => {
            let Ok(meta) = document.create_element("meta") else {
                return;
            };
            let _ = meta.set_attribute(attribute, key);
            if let Some(head) = document.head() {
                let _ = head.append_child(&meta);
            }
            meta
        }
    };
    let _ = meta.set_attribute("content", content);
}

/// Replaces the text of a `<script type="application/ld+json">` block,
/// creating it on first use.
pub fn set_json_ld(id: &str, json: &str) {
    let Some(document) = document() else {
        return;
    };
    let script = match document.get_element_by_id(id) {
        Some(script) => script,
        None => {
            let Ok(script) = document.create_element("script") else {
                return;
            };
            script.set_id(id);
            let _ = script.set_attribute("type", "application/ld+json");
            if let Some(head) = document.head() {
                let _ = head.append_child(&script);
            }
            script
        }
    };
    script.set_text_content(Some(json));
}

pub fn history_back() {
    if let Some(history) = window().and_then(|w| w.history().ok()) {
        let _ = history.back();
    }
}
