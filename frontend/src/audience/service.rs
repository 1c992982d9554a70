use std::rc::Rc;

use log::{info, warn};

use super::channel::{AudienceChannel, Subscription};
use super::selection::{Audience, InvalidAudience};
use super::store::{LocalStorageBackend, PreferenceBackend, PreferenceStore};

/// Owns the persisted preference and the broadcast channel every audience
/// consumer on the page listens to. One instance is created by `App` and
/// handed down through a Yew context.
#[derive(Clone)]
pub struct AudiencePreferenceService {
    store: Rc<PreferenceStore>,
    channel: AudienceChannel,
}

impl PartialEq for AudiencePreferenceService {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store) && self.channel.same_channel(&other.channel)
    }
}

impl AudiencePreferenceService {
    pub fn new(backend: Rc<dyn PreferenceBackend>) -> Self {
        Self {
            store: Rc::new(PreferenceStore::new(backend)),
            channel: AudienceChannel::new(),
        }
    }

    pub fn with_local_storage() -> Self {
        Self::new(Rc::new(LocalStorageBackend))
    }

    /// The stored audience, or the default when nothing valid is stored.
    pub fn current(&self) -> Audience {
        self.store.read().unwrap_or_default()
    }

    /// Producer entry point for untyped input (select values, query strings).
    /// Invalid candidates leave the store untouched and publish nothing.
    pub fn select(&self, candidate: &str) -> Result<Audience, InvalidAudience> {
        let audience = candidate.parse::<Audience>().map_err(|e| {
            warn!("Ignoring audience selection: {}", e);
            e
        })?;
        self.apply(audience);
        Ok(audience)
    }

    /// Write, then broadcast. The broadcast goes out even if the write failed.
    pub fn apply(&self, audience: Audience) {
        info!("Audience selected: {}", audience);
        self.store.write(audience);
        self.channel.publish(audience);
    }

    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(Audience) + 'static,
    {
        self.channel.subscribe(listener)
    }

    pub fn listener_count(&self) -> usize {
        self.channel.listener_count()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::super::store::testing::MemoryBackend;
    use super::*;
    use crate::config;

    fn spy(service: &AudiencePreferenceService) -> (Rc<RefCell<Vec<Audience>>>, Subscription) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sub = {
            let seen = seen.clone();
            service.subscribe(move |a| seen.borrow_mut().push(a))
        };
        (seen, sub)
    }

    #[test]
    fn current_defaults_to_worker() {
        let service = AudiencePreferenceService::new(Rc::new(MemoryBackend::default()));
        assert_eq!(service.current(), Audience::Worker);
    }

    #[test]
    fn select_writes_before_publishing() {
        let backend = Rc::new(MemoryBackend::default());
        let service = AudiencePreferenceService::new(backend.clone());
        let stored_at_delivery = Rc::new(RefCell::new(None));
        let _sub = {
            let backend = backend.clone();
            let stored_at_delivery = stored_at_delivery.clone();
            service.subscribe(move |_| {
                *stored_at_delivery.borrow_mut() = backend.raw(config::AUDIENCE_STORAGE_KEY);
            })
        };

        assert_eq!(service.select("investor"), Ok(Audience::Investor));
        assert_eq!(stored_at_delivery.borrow().as_deref(), Some("investor"));
    }

    #[test]
    fn invalid_selection_changes_nothing() {
        let backend = Rc::new(MemoryBackend::with_entry(config::AUDIENCE_STORAGE_KEY, "business"));
        let service = AudiencePreferenceService::new(backend.clone());
        let (seen, _sub) = spy(&service);

        assert_eq!(
            service.select("admin"),
            Err(InvalidAudience("admin".to_string()))
        );
        assert!(seen.borrow().is_empty());
        assert_eq!(service.current(), Audience::Business);
        assert_eq!(backend.writes.get(), 0);
    }

    #[test]
    fn broadcast_survives_failed_write() {
        let backend = Rc::new(MemoryBackend::default());
        backend.reject_writes(true);
        let service = AudiencePreferenceService::new(backend);
        let (seen, _sub) = spy(&service);

        service.apply(Audience::Business);

        assert_eq!(*seen.borrow(), vec![Audience::Business]);
        assert_eq!(service.current(), Audience::Worker);
    }

    #[test]
    fn repeated_selection_is_idempotent() {
        let backend = Rc::new(MemoryBackend::default());
        let service = AudiencePreferenceService::new(backend.clone());
        let (seen, _sub) = spy(&service);

        service.select("business").unwrap();
        let after_first = (backend.raw(config::AUDIENCE_STORAGE_KEY), service.current());
        service.select("business").unwrap();

        assert_eq!((backend.raw(config::AUDIENCE_STORAGE_KEY), service.current()), after_first);
        assert!(seen.borrow().iter().all(|a| *a == Audience::Business));
    }

    #[test]
    fn clones_share_identity() {
        let service = AudiencePreferenceService::new(Rc::new(MemoryBackend::default()));
        let other = AudiencePreferenceService::new(Rc::new(MemoryBackend::default()));
        assert!(service == service.clone());
        assert!(service != other);
    }
}
