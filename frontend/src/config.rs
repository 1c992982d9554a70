use log::Level;

pub const AUDIENCE_STORAGE_KEY: &str = "selectedAudience";
pub const NAVIGATION_EVENTS_KEY: &str = "we_navigation_events";
pub const MAX_STORED_EVENTS: usize = 100;

pub const SITE_URL: &str = "https://weuniversal.com";
pub const SUPPORT_EMAIL: &str = "workearn.community@gmail.com";
pub const SUPPORT_WHATSAPP: &str = "9502414128";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Analytics events are only logged locally in development builds.
#[cfg(debug_assertions)]
pub fn forward_analytics() -> bool {
    false
}

#[cfg(not(debug_assertions))]
pub fn forward_analytics() -> bool {
    true
}
