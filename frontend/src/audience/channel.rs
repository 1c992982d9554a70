use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use log::debug;

use super::selection::{Audience, AUDIENCE_CHANGED};

type Listener = Rc<dyn Fn(Audience)>;

struct Entry {
    id: u64,
    listener: Listener,
    active: Rc<Cell<bool>>,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    entries: Vec<Entry>,
    in_flight: Option<Audience>,
    pending: VecDeque<Audience>,
}

/// Synchronous, single-threaded fan-out of audience changes.
///
/// Every `publish` delivers to a snapshot of the listeners registered when
/// its delivery cycle starts, in registration order. A publish issued by a
/// listener while a cycle is running is never delivered inside that cycle:
/// it is dropped when it repeats the in-flight value, otherwise it runs as
/// its own cycle once the current one has finished.
#[derive(Clone, Default)]
pub struct AudienceChannel {
    registry: Rc<RefCell<Registry>>,
}

/// Registration handle. Dropping it (or calling [`Subscription::unsubscribe`])
/// removes the listener.
#[must_use = "dropping a Subscription unsubscribes its listener"]
pub struct Subscription {
    id: u64,
    active: Rc<Cell<bool>>,
    registry: Weak<RefCell<Registry>>,
}

impl AudienceChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(Audience) + 'static,
    {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        let active = Rc::new(Cell::new(true));
        registry.entries.push(Entry {
            id,
            listener: Rc::new(listener),
            active: active.clone(),
        });
        debug!("{} listener {} subscribed", AUDIENCE_CHANGED, id);
        Subscription {
            id,
            active,
            registry: Rc::downgrade(&self.registry),
        }
    }

    pub fn publish(&self, audience: Audience) {
        {
            let mut registry = self.registry.borrow_mut();
            if let Some(in_flight) = registry.in_flight {
                let repeats = (in_flight == audience && registry.pending.is_empty())
                    || registry.pending.back() == Some(&audience);
                if repeats {
                    debug!("Dropping re-entrant {} '{}'", AUDIENCE_CHANGED, audience);
                } else {
                    debug!("Deferring re-entrant {} '{}'", AUDIENCE_CHANGED, audience);
                    registry.pending.push_back(audience);
                }
                return;
            }
        }

        let mut next = Some(audience);
        while let Some(value) = next {
            let snapshot: Vec<(Listener, Rc<Cell<bool>>)> = {
                let mut registry = self.registry.borrow_mut();
                registry.in_flight = Some(value);
                registry
                    .entries
                    .iter()
                    .map(|entry| (entry.listener.clone(), entry.active.clone()))
                    .collect()
            };
            debug!(
                "{} '{}' -> {} listener(s)",
                AUDIENCE_CHANGED,
                value,
                snapshot.len()
            );
            for (listener, active) in snapshot {
                if active.get() {
                    listener(value);
                }
            }
            let mut registry = self.registry.borrow_mut();
            next = registry.pending.pop_front();
            if next.is_none() {
                registry.in_flight = None;
            }
        }
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().entries.len()
    }

    pub fn same_channel(&self, other: &AudienceChannel) -> bool {
        Rc::ptr_eq(&self.registry, &other.registry)
    }
}

impl Subscription {
    pub fn unsubscribe(self) {}

    pub fn is_active(&self) -> bool {
        self.active.get()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.active.set(false);
        if let Some(registry) = self.registry.upgrade() {
            let removed = {
                let mut registry = registry.borrow_mut();
                registry
                    .entries
                    .iter()
                    .position(|entry| entry.id == self.id)
                    .map(|index| registry.entries.remove(index))
            };
            // The listener may own further subscriptions; release it only
            // after the registry borrow has ended.
            drop(removed);
            debug!("{} listener {} unsubscribed", AUDIENCE_CHANGED, self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder() -> (Rc<RefCell<Vec<(usize, Audience)>>>, impl Fn(usize) -> Box<dyn Fn(Audience)>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let make = {
            let log = log.clone();
            move |tag: usize| {
                let log = log.clone();
                Box::new(move |a: Audience| log.borrow_mut().push((tag, a))) as Box<dyn Fn(Audience)>
            }
        };
        (log, make)
    }

    #[test]
    fn fans_out_once_in_subscription_order() {
        let channel = AudienceChannel::new();
        let (log, make) = recorder();
        let _subs: Vec<_> = (0..4).map(|i| channel.subscribe(make(i))).collect();

        channel.publish(Audience::Business);

        assert_eq!(
            *log.borrow(),
            vec![
                (0, Audience::Business),
                (1, Audience::Business),
                (2, Audience::Business),
                (3, Audience::Business),
            ]
        );
    }

    #[test]
    fn publish_without_listeners_is_dropped() {
        let channel = AudienceChannel::new();
        channel.publish(Audience::Investor);

        let (log, make) = recorder();
        let _sub = channel.subscribe(make(0));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn unsubscribed_listener_is_not_invoked() {
        let channel = AudienceChannel::new();
        let calls = Rc::new(Cell::new(0));
        let sub = {
            let calls = calls.clone();
            channel.subscribe(move |_| calls.set(calls.get() + 1))
        };
        channel.publish(Audience::Business);
        sub.unsubscribe();
        channel.publish(Audience::Investor);

        assert_eq!(calls.get(), 1);
        assert_eq!(channel.listener_count(), 0);
    }

    #[test]
    fn dropping_the_handle_unsubscribes() {
        let channel = AudienceChannel::new();
        {
            let _sub = channel.subscribe(|_| {});
            assert_eq!(channel.listener_count(), 1);
        }
        assert_eq!(channel.listener_count(), 0);
    }

    #[test]
    fn handle_outliving_channel_drops_cleanly() {
        let channel = AudienceChannel::new();
        let sub = channel.subscribe(|_| {});
        drop(channel);
        assert!(sub.is_active());
        drop(sub);
    }

    #[test]
    fn listener_added_mid_publish_waits_for_next_publish() {
        let channel = AudienceChannel::new();
        let late_calls = Rc::new(Cell::new(0));
        let late_sub: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

        let _adder = {
            let channel = channel.clone();
            let late_calls = late_calls.clone();
            let late_sub = late_sub.clone();
            channel.clone().subscribe(move |_| {
                if late_sub.borrow().is_none() {
                    let late_calls = late_calls.clone();
                    let sub = channel.subscribe(move |_| late_calls.set(late_calls.get() + 1));
                    *late_sub.borrow_mut() = Some(sub);
                }
            })
        };

        channel.publish(Audience::Business);
        assert_eq!(late_calls.get(), 0);

        channel.publish(Audience::Investor);
        assert_eq!(late_calls.get(), 1);
    }

    #[test]
    fn listener_removed_mid_publish_is_skipped() {
        let channel = AudienceChannel::new();
        let victim_calls = Rc::new(Cell::new(0));
        let victim: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

        let _remover = {
            let victim = victim.clone();
            channel.subscribe(move |_| {
                victim.borrow_mut().take();
            })
        };
        {
            let victim_calls = victim_calls.clone();
            *victim.borrow_mut() =
                Some(channel.subscribe(move |_| victim_calls.set(victim_calls.get() + 1)));
        }

        channel.publish(Audience::Business);
        assert_eq!(victim_calls.get(), 0);
        assert_eq!(channel.listener_count(), 1);
    }

    #[test]
    fn listener_may_unsubscribe_itself_mid_publish() {
        let channel = AudienceChannel::new();
        let (log, make) = recorder();
        let own: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        {
            let own_handle = own.clone();
            let record = make(0);
            *own.borrow_mut() = Some(channel.subscribe(move |a| {
                record(a);
                own_handle.borrow_mut().take();
            }));
        }
        let _other = channel.subscribe(make(1));

        channel.publish(Audience::Investor);
        channel.publish(Audience::Business);

        assert_eq!(
            *log.borrow(),
            vec![(0, Audience::Investor), (1, Audience::Investor), (1, Audience::Business)]
        );
    }

    #[test]
    fn reentrant_publish_of_same_value_is_not_delivered_twice() {
        let channel = AudienceChannel::new();
        let (log, make) = recorder();

        let _echo = {
            let channel = channel.clone();
            let record = make(0);
            channel.clone().subscribe(move |a| {
                record(a);
                channel.publish(a);
            })
        };
        let _b = channel.subscribe(make(1));
        let _c = channel.subscribe(make(2));

        channel.publish(Audience::Business);

        assert_eq!(
            *log.borrow(),
            vec![(0, Audience::Business), (1, Audience::Business), (2, Audience::Business)]
        );
    }

    #[test]
    fn reentrant_publish_of_new_value_runs_after_current_cycle() {
        let channel = AudienceChannel::new();
        let (log, make) = recorder();

        let _redirect = {
            let channel = channel.clone();
            let record = make(0);
            channel.clone().subscribe(move |a| {
                record(a);
                if a == Audience::Investor {
                    channel.publish(Audience::Business);
                }
            })
        };
        let _other = channel.subscribe(make(1));

        channel.publish(Audience::Investor);

        assert_eq!(
            *log.borrow(),
            vec![
                (0, Audience::Investor),
                (1, Audience::Investor),
                (0, Audience::Business),
                (1, Audience::Business),
            ]
        );
    }

    #[test]
    fn dropping_a_listener_that_owns_a_subscription() {
        let channel = AudienceChannel::new();
        let inner = channel.subscribe(|_| {});
        let outer = channel.subscribe(move |_| {
            let _keep = &inner;
        });
        assert_eq!(channel.listener_count(), 2);

        drop(outer);
        assert_eq!(channel.listener_count(), 0);
    }
}
