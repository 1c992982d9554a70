use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::json;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Function, Math, Reflect};
use web_sys::{window, Element};
use yew::prelude::*;

use crate::audience::selection::Audience;
use crate::audience::service::AudiencePreferenceService;
use crate::audience::store::{LocalStorageBackend, PreferenceBackend};
use crate::config;
use crate::content::navigation::{self, ACTIVE_OFFSET};
use crate::dom;

/// Quiet period before a burst of scroll events is evaluated.
const SCROLL_DEBOUNCE_MS: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    NavigationClick,
    SectionView,
    AudienceChange,
    CtaInteraction,
    ScrollProgress,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::NavigationClick => "navigation_click",
            EventKind::SectionView => "section_view",
            EventKind::AudienceChange => "audience_change",
            EventKind::CtaInteraction => "cta_interaction",
            EventKind::ScrollProgress => "scroll_progress",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    Mobile,
    Tablet,
    Desktop,
}

impl DeviceType {
    pub fn from_width(width: f64) -> Self {
        if width < 768.0 {
            DeviceType::Mobile
        } else if width < 1024.0 {
            DeviceType::Tablet
        } else {
            DeviceType::Desktop
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationEvent {
    #[serde(rename = "type")]
    pub kind: EventKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audience: Option<Audience>,
    pub timestamp: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scroll_position: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewport_height: Option<f64>,
    pub device_type: DeviceType,
    pub session_id: String,
}

/// The varying part of an event; the tracker stamps the rest.
#[derive(Debug, Clone, PartialEq)]
pub enum Interaction {
    NavigationClick(String),
    SectionView(String),
    AudienceChange(Audience),
    Cta(String),
    ScrollMilestone { percent: u32, viewport_height: f64 },
}

impl Interaction {
    pub fn into_event(self, timestamp: i64, device_type: DeviceType, session_id: &str) -> NavigationEvent {
        let mut event = NavigationEvent {
            kind: EventKind::NavigationClick,
            section: None,
            audience: None,
            timestamp,
            scroll_position: None,
            viewport_height: None,
            device_type,
            session_id: session_id.to_string(),
        };
        match self {
            Interaction::NavigationClick(section) => event.section = Some(section),
            Interaction::SectionView(section) => {
                event.kind = EventKind::SectionView;
                event.section = Some(section);
            }
            Interaction::AudienceChange(audience) => {
                event.kind = EventKind::AudienceChange;
                event.audience = Some(audience);
            }
            Interaction::Cta(cta) => {
                event.kind = EventKind::CtaInteraction;
                event.section = Some(cta);
            }
            Interaction::ScrollMilestone {
                percent,
                viewport_height,
            } => {
                event.kind = EventKind::ScrollProgress;
                event.scroll_position = Some(percent as f64);
                event.viewport_height = Some(viewport_height);
            }
        }
        event
    }
}

/// `session_<millis>_<9 base-36 chars>`, the random part drawn from `random`
/// in `[0, 1)`.
pub fn session_id(now_ms: i64, random: f64) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut fraction = random.clamp(0.0, 1.0 - f64::EPSILON);
    let suffix: String = (0..9)
        .map(|_| {
            fraction *= 36.0;
            let digit = fraction.floor();
            fraction -= digit;
            DIGITS[digit as usize % 36] as char
        })
        .collect();
    format!("session_{}_{}", now_ms, suffix)
}

/// Quarter mark a scroll percentage falls in: 0, 25, 50, 75 or 100.
pub fn scroll_milestone(percent: f64) -> u32 {
    ((percent.clamp(0.0, 100.0) / 25.0).floor() as u32) * 25
}

/// Appends to a serialized event log, keeping the newest `cap` entries. A
/// missing or corrupt log starts over.
pub fn append_capped(stored: Option<&str>, event: &NavigationEvent, cap: usize) -> String {
    let mut events: Vec<serde_json::Value> = stored
        .and_then(|raw| serde_json::from_str(raw).ok())
        .unwrap_or_default();
    events.push(json!(event));
    if events.len() > cap {
        events.drain(..events.len() - cap);
    }
    serde_json::Value::Array(events).to_string()
}

/// Rolling record of recent events under `config::NAVIGATION_EVENTS_KEY`.
pub struct EventLog {
    backend: Rc<dyn PreferenceBackend>,
}

impl EventLog {
    pub fn new(backend: Rc<dyn PreferenceBackend>) -> Self {
        Self { backend }
    }

    pub fn append(&self, event: &NavigationEvent) {
        let stored = match self.backend.get(config::NAVIGATION_EVENTS_KEY) {
            Ok(stored) => stored,
            Err(e) => {
                debug!("Event log unreadable, starting over: {}", e);
                None
            }
        };
        let updated = append_capped(stored.as_deref(), event, config::MAX_STORED_EVENTS);
        if let Err(e) = self.backend.set(config::NAVIGATION_EVENTS_KEY, &updated) {
            warn!("Failed to store navigation event: {}", e);
        }
    }
}

/// Pushes an event to `window.gtag` when the page has loaded it.
fn forward_to_gtag(event: &NavigationEvent) {
    let Some(window) = window() else {
        return;
    };
    let Ok(gtag) = Reflect::get(&window, &JsValue::from_str("gtag")) else {
        return;
    };
    let Some(gtag) = gtag.dyn_ref::<Function>() else {
        return;
    };
    let params = json!({
        "custom_parameter_section": event.section,
        "custom_parameter_audience": event.audience,
        "custom_parameter_device_type": event.device_type,
        "custom_parameter_session_id": event.session_id,
    });
    match serde_wasm_bindgen::to_value(&params) {
        Ok(params) => {
            let args = Array::of3(&JsValue::from_str("event"), &JsValue::from_str(event.kind.as_str()), &params);
            if let Err(e) = gtag.apply(&JsValue::NULL, &args) {
                warn!("gtag rejected event: {:?}", e);
            }
        }
        Err(e) => warn!("Could not convert analytics event: {}", e),
    }
}

pub struct Tracker {
    session_id: String,
    log: EventLog,
    forward: bool,
}

impl Tracker {
    pub fn new(session_id: String, log: EventLog, forward: bool) -> Self {
        Self {
            session_id,
            log,
            forward,
        }
    }

    pub fn for_browser() -> Self {
        let now = chrono::Utc::now().timestamp_millis();
        let id = session_id(now, Math::random());
        debug!("Conversion tracking session {}", id);
        Self::new(id, EventLog::new(Rc::new(LocalStorageBackend)), config::forward_analytics())
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn track(&self, interaction: Interaction) -> NavigationEvent {
        let event = interaction.into_event(
            chrono::Utc::now().timestamp_millis(),
            DeviceType::from_width(dom::viewport_width()),
            &self.session_id,
        );
        debug!("Tracked {} {:?}", event.kind.as_str(), event.section);
        self.log.append(&event);
        if self.forward {
            forward_to_gtag(&event);
        }
        event
    }
}

fn closest_attribute(target: &Element, attribute: &str) -> Option<String> {
    target
        .closest(&format!("[{}]", attribute))
        .ok()
        .flatten()
        .and_then(|element| element.get_attribute(attribute))
}

/// Invisible collector for navigation analytics. Listens for audience
/// broadcasts, clicks on `data-nav-section` / `data-cta` elements, the
/// section in view and quarter scroll milestones.
#[function_component(ConversionTracking)]
pub fn conversion_tracking() -> Html {
    let service = use_context::<AudiencePreferenceService>();
    let tracker = use_memo(|_| Tracker::for_browser(), ());

    {
        let tracker = tracker.clone();
        use_effect_with_deps(
            move |service: &Option<AudiencePreferenceService>| {
                let subscription = service.as_ref().map(|service| {
                    service.subscribe(move |audience| {
                        tracker.track(Interaction::AudienceChange(audience));
                    })
                });
                move || drop(subscription)
            },
            service,
        );
    }

    {
        let tracker = tracker.clone();
        use_effect_with_deps(
            move |_| {
                let document = window().and_then(|w| w.document());
                let click_callback = Closure::wrap(Box::new(move |e: web_sys::Event| {
                    let Some(target) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                        return;
                    };
                    if let Some(section) = closest_attribute(&target, "data-nav-section") {
                        tracker.track(Interaction::NavigationClick(section));
                    }
                    if let Some(cta) = closest_attribute(&target, "data-cta") {
                        tracker.track(Interaction::Cta(cta));
                    }
                }) as Box<dyn FnMut(web_sys::Event)>);

                if let Some(document) = &document {
                    let _ = document
                        .add_event_listener_with_callback("click", click_callback.as_ref().unchecked_ref());
                }

                move || {
                    if let Some(document) = &document {
                        let _ = document.remove_event_listener_with_callback(
                            "click",
                            click_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    {
        let tracker = tracker.clone();
        use_effect_with_deps(
            move |_| {
                let pending = Rc::new(RefCell::new(None::<gloo_timers::callback::Timeout>));
                let last_milestone = Rc::new(Cell::new(scroll_milestone(dom::page_progress())));
                let last_section = Rc::new(RefCell::new(None::<&'static str>));

                let scroll_callback = {
                    let pending = pending.clone();
                    Closure::wrap(Box::new(move || {
                        let tracker = tracker.clone();
                        let last_milestone = last_milestone.clone();
                        let last_section = last_section.clone();
                        // Replacing the timeout cancels the previous one.
                        *pending.borrow_mut() = Some(gloo_timers::callback::Timeout::new(
                            SCROLL_DEBOUNCE_MS,
                            move || {
                                let milestone = scroll_milestone(dom::page_progress());
                                if milestone != last_milestone.get() {
                                    last_milestone.set(milestone);
                                    tracker.track(Interaction::ScrollMilestone {
                                        percent: milestone,
                                        viewport_height: dom::viewport_height(),
                                    });
                                }

                                let bounds = dom::nav_section_bounds();
                                if bounds.is_empty() {
                                    return;
                                }
                                let section = navigation::active_section(&bounds, ACTIVE_OFFSET);
                                if *last_section.borrow() != Some(section) {
                                    *last_section.borrow_mut() = Some(section);
                                    tracker.track(Interaction::SectionView(section.to_string()));
                                }
                            },
                        ));
                    }) as Box<dyn FnMut()>)
                };

                let window = window();
                if let Some(window) = &window {
                    let _ = window
                        .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }

                move || {
                    if let Some(window) = &window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                    pending.borrow_mut().take();
                }
            },
            (),
        );
    }

    html! {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audience::store::testing::{MemoryBackend, UnavailableBackend};

    fn event(section: &str) -> NavigationEvent {
        Interaction::NavigationClick(section.to_string()).into_event(1_700_000_000_000, DeviceType::Desktop, "session_1_abc")
    }

    #[test]
    fn device_type_breakpoints() {
        assert_eq!(DeviceType::from_width(375.0), DeviceType::Mobile);
        assert_eq!(DeviceType::from_width(768.0), DeviceType::Tablet);
        assert_eq!(DeviceType::from_width(1023.0), DeviceType::Tablet);
        assert_eq!(DeviceType::from_width(1440.0), DeviceType::Desktop);
    }

    #[test]
    fn session_id_shape() {
        let id = session_id(1_700_000_000_000, 0.5);
        assert_eq!(id, "session_1700000000000_i00000000");
        let suffix = session_id(0, 0.123456789).rsplit('_').next().map(str::len);
        assert_eq!(suffix, Some(9));
    }

    #[test]
    fn events_serialize_with_camel_case_and_type_tag() {
        let event = Interaction::AudienceChange(Audience::Business).into_event(5, DeviceType::Mobile, "s");
        let value = json!(event);
        assert_eq!(value["type"], "audience_change");
        assert_eq!(value["audience"], "business");
        assert_eq!(value["deviceType"], "mobile");
        assert_eq!(value["sessionId"], "s");
        assert!(value.get("section").is_none());

        let scroll = Interaction::ScrollMilestone {
            percent: 50,
            viewport_height: 900.0,
        }
        .into_event(5, DeviceType::Desktop, "s");
        assert_eq!(json!(scroll)["scrollPosition"], 50.0);
    }

    #[test]
    fn milestones_snap_to_quarters() {
        assert_eq!(scroll_milestone(0.0), 0);
        assert_eq!(scroll_milestone(49.9), 25);
        assert_eq!(scroll_milestone(75.0), 75);
        assert_eq!(scroll_milestone(100.0), 100);
        assert_eq!(scroll_milestone(140.0), 100);
    }

    #[test]
    fn log_keeps_only_the_newest_entries() {
        let mut stored = None;
        for i in 0..5 {
            stored = Some(append_capped(stored.as_deref(), &event(&format!("s{}", i)), 3));
        }
        let entries: Vec<NavigationEvent> = serde_json::from_str(&stored.unwrap_or_default()).unwrap();
        let sections: Vec<_> = entries.iter().filter_map(|e| e.section.clone()).collect();
        assert_eq!(sections, vec!["s2", "s3", "s4"]);
    }

    #[test]
    fn corrupt_log_starts_over() {
        let updated = append_capped(Some("{not json"), &event("pricing"), 100);
        let entries: Vec<NavigationEvent> = serde_json::from_str(&updated).unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn event_log_writes_through_the_backend() {
        let backend = Rc::new(MemoryBackend::default());
        let log = EventLog::new(backend.clone());
        log.append(&event("for-you"));
        log.append(&event("pricing"));
        let raw = backend.raw(config::NAVIGATION_EVENTS_KEY).unwrap_or_default();
        let entries: Vec<NavigationEvent> = serde_json::from_str(&raw).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(backend.writes.get(), 2);

        // Storage going away is not an error for the page.
        EventLog::new(Rc::new(UnavailableBackend)).append(&event("pricing"));
    }
}
