use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, warn};
use yew::prelude::*;

use super::channel::Subscription;
use super::selection::{Audience, InvalidAudience};
use super::service::AudiencePreferenceService;

/// One mounted view of the audience preference.
///
/// Mounting reads the store (falling back to the default) and subscribes.
/// Broadcasts of a different value update the local copy and fire
/// `on_change`; repeats are ignored. `unmount` consumes the consumer, so
/// nothing can reach it after teardown.
pub struct AudienceConsumer {
    current: Rc<Cell<Audience>>,
    _subscription: Subscription,
}

impl AudienceConsumer {
    pub fn mount<F>(service: &AudiencePreferenceService, on_change: F) -> Self
    where
        F: Fn(Audience) + 'static,
    {
        let current = Rc::new(Cell::new(service.current()));
        let subscription = {
            let current = current.clone();
            service.subscribe(move |next| {
                if current.get() != next {
                    current.set(next);
                    on_change(next);
                }
            })
        };
        Self {
            current,
            _subscription: subscription,
        }
    }

    pub fn audience(&self) -> Audience {
        self.current.get()
    }

    /// Producer-side update: take the new value before the broadcast goes
    /// out so this consumer's own round-trip is a no-op.
    pub fn adopt(&self, audience: Audience) {
        self.current.set(audience);
    }

    pub fn unmount(self) {
        debug!("Audience consumer unmounted at '{}'", self.current.get());
    }
}

#[derive(Properties, PartialEq)]
pub struct AudienceProviderProps {
    pub service: AudiencePreferenceService,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(AudienceProvider)]
pub fn audience_provider(props: &AudienceProviderProps) -> Html {
    html! {
        <ContextProvider<AudiencePreferenceService> context={props.service.clone()}>
            { for props.children.iter() }
        </ContextProvider<AudiencePreferenceService>>
    }
}

#[derive(Clone)]
pub struct UseAudienceHandle {
    audience: UseStateHandle<Audience>,
    consumer: Rc<RefCell<Option<AudienceConsumer>>>,
    service: AudiencePreferenceService,
}

impl PartialEq for UseAudienceHandle {
    fn eq(&self, other: &Self) -> bool {
        *self.audience == *other.audience && self.service == other.service
    }
}

impl UseAudienceHandle {
    pub fn get(&self) -> Audience {
        *self.audience
    }

    /// Updates this component first, then writes and broadcasts.
    pub fn select(&self, audience: Audience) {
        if let Some(consumer) = self.consumer.borrow().as_ref() {
            consumer.adopt(audience);
        }
        self.audience.set(audience);
        self.service.apply(audience);
    }

    pub fn select_str(&self, candidate: &str) -> Result<Audience, InvalidAudience> {
        let audience = candidate.parse::<Audience>().map_err(|e| {
            warn!("Ignoring audience selection: {}", e);
            e
        })?;
        self.select(audience);
        Ok(audience)
    }
}

/// Current audience for the calling component, kept in sync with every
/// other consumer on the page for as long as the component is mounted.
#[hook]
pub fn use_audience() -> UseAudienceHandle {
    let context = use_context::<AudiencePreferenceService>();
    let service = (*use_state(move || {
        context.unwrap_or_else(|| {
            warn!("use_audience used outside AudienceProvider, falling back to a private service");
            AudiencePreferenceService::with_local_storage()
        })
    }))
    .clone();

    let audience = {
        let service = service.clone();
        use_state_eq(move || service.current())
    };
    let consumer = use_mut_ref(|| None::<AudienceConsumer>);

    {
        let audience = audience.clone();
        let consumer = consumer.clone();
        use_effect_with_deps(
            move |service: &AudiencePreferenceService| {
                let mounted = {
                    let audience = audience.clone();
                    AudienceConsumer::mount(service, move |next| audience.set(next))
                };
                // The store may have changed between first render and mount.
                audience.set(mounted.audience());
                *consumer.borrow_mut() = Some(mounted);

                move || {
                    if let Some(mounted) = consumer.borrow_mut().take() {
                        mounted.unmount();
                    }
                }
            },
            service.clone(),
        );
    }

    UseAudienceHandle {
        audience,
        consumer,
        service,
    }
}

#[cfg(test)]
mod tests {
    use super::super::store::testing::MemoryBackend;
    use super::*;
    use crate::config;
    use crate::content::{hero, navigation, pricing};

    fn renders() -> (Rc<RefCell<Vec<Audience>>>, impl Fn(Audience) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let record = {
            let seen = seen.clone();
            move |a: Audience| seen.borrow_mut().push(a)
        };
        (seen, record)
    }

    #[test]
    fn mount_adopts_stored_value_or_default() {
        let empty = AudiencePreferenceService::new(Rc::new(MemoryBackend::default()));
        let consumer = AudienceConsumer::mount(&empty, |_| {});
        assert_eq!(consumer.audience(), Audience::Worker);

        let stored = AudiencePreferenceService::new(Rc::new(MemoryBackend::with_entry(
            config::AUDIENCE_STORAGE_KEY,
            "investor",
        )));
        let consumer = AudienceConsumer::mount(&stored, |_| {});
        assert_eq!(consumer.audience(), Audience::Investor);
    }

    #[test]
    fn every_consumer_sees_the_new_value_once() {
        let service = AudiencePreferenceService::new(Rc::new(MemoryBackend::default()));
        let (a_seen, a_record) = renders();
        let (b_seen, b_record) = renders();
        let a = AudienceConsumer::mount(&service, a_record);
        let b = AudienceConsumer::mount(&service, b_record);

        service.apply(Audience::Business);

        assert_eq!(a.audience(), Audience::Business);
        assert_eq!(b.audience(), Audience::Business);
        assert_eq!(*a_seen.borrow(), vec![Audience::Business]);
        assert_eq!(*b_seen.borrow(), vec![Audience::Business]);
    }

    #[test]
    fn unchanged_value_does_not_rerender() {
        let service = AudiencePreferenceService::new(Rc::new(MemoryBackend::default()));
        let (seen, record) = renders();
        let _consumer = AudienceConsumer::mount(&service, record);

        service.apply(Audience::Worker);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn consumer_never_writes_back() {
        let backend = Rc::new(MemoryBackend::default());
        let service = AudiencePreferenceService::new(backend.clone());
        let _a = AudienceConsumer::mount(&service, |_| {});
        let _b = AudienceConsumer::mount(&service, |_| {});

        service.apply(Audience::Investor);
        assert_eq!(backend.writes.get(), 1);
    }

    #[test]
    fn unmount_releases_the_listener() {
        let service = AudiencePreferenceService::new(Rc::new(MemoryBackend::default()));
        let (seen, record) = renders();
        let consumer = AudienceConsumer::mount(&service, record);
        assert_eq!(service.listener_count(), 1);

        consumer.unmount();
        service.apply(Audience::Business);

        assert_eq!(service.listener_count(), 0);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn producer_adopting_first_skips_its_own_echo() {
        let service = AudiencePreferenceService::new(Rc::new(MemoryBackend::default()));
        let (header_seen, header_record) = renders();
        let (section_seen, section_record) = renders();
        let header = AudienceConsumer::mount(&service, header_record);
        let _section = AudienceConsumer::mount(&service, section_record);

        header.adopt(Audience::Investor);
        service.apply(Audience::Investor);

        assert_eq!(header.audience(), Audience::Investor);
        assert!(header_seen.borrow().is_empty());
        assert_eq!(*section_seen.borrow(), vec![Audience::Investor]);
    }

    #[test]
    fn selecting_business_from_hero_updates_header_pricing_and_reload() {
        let backend = Rc::new(MemoryBackend::default());
        let service = AudiencePreferenceService::new(backend.clone());
        let header = AudienceConsumer::mount(&service, |_| {});
        let pricing_section = AudienceConsumer::mount(&service, |_| {});
        let hero_cards = AudienceConsumer::mount(&service, |_| {});

        assert_eq!(
            navigation::header_cta(header.audience()),
            "Start Earning"
        );

        // Hero card click.
        hero_cards.adopt(Audience::Business);
        assert_eq!(service.select("business"), Ok(Audience::Business));

        assert_eq!(
            backend.raw(config::AUDIENCE_STORAGE_KEY).as_deref(),
            Some("business")
        );
        assert_eq!(
            navigation::NAV_SECTIONS[0].label_for(header.audience()),
            "Find Talent"
        );
        let tier_names: Vec<_> = pricing::tiers(pricing_section.audience())
            .iter()
            .map(|tier| tier.name)
            .collect();
        assert_eq!(tier_names, vec!["Starter", "Growth", "Professional"]);
        assert_eq!(pricing::tiers(Audience::Worker).len(), 1);
        assert_eq!(
            hero::copy(hero_cards.audience()).hero_title,
            "Find Verified Local Talent Instantly"
        );

        header.unmount();
        pricing_section.unmount();
        hero_cards.unmount();
        assert_eq!(service.listener_count(), 0);

        // Reload: fresh service over the same durable storage.
        let reloaded = AudiencePreferenceService::new(backend);
        let header = AudienceConsumer::mount(&reloaded, |_| {});
        assert_eq!(header.audience(), Audience::Business);
    }
}
