use crate::audience::selection::Audience;

/// Copy keyed by audience. One field per audience, so a lookup can never
/// miss.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentTable<T> {
    pub worker: T,
    pub business: T,
    pub investor: T,
}

impl<T> ContentTable<T> {
    pub const fn new(worker: T, business: T, investor: T) -> Self {
        Self {
            worker,
            business,
            investor,
        }
    }

    pub fn get(&self, audience: Audience) -> &T {
        match audience {
            Audience::Worker => &self.worker,
            Audience::Business => &self.business,
            Audience::Investor => &self.investor,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Audience, &T)> {
        Audience::ALL.into_iter().map(move |audience| (audience, self.get(audience)))
    }
}

/// Entries shown to one or more audiences.
pub trait AudienceScoped {
    fn audiences(&self) -> &[Audience];

    fn shown_to(&self, audience: Audience) -> bool {
        self.audiences().contains(&audience)
    }
}

pub fn scoped<T: AudienceScoped>(items: &[T], audience: Audience) -> Vec<&T> {
    items.iter().filter(|item| item.shown_to(audience)).collect()
}

/// Next slot of an auto-rotating carousel. A stale index from a longer list
/// (the audience just changed) restarts at the front.
pub fn rotate(current: usize, len: usize) -> usize {
    if len == 0 || current + 1 >= len {
        0
    } else {
        current + 1
    }
}

/// Index clamped into a list that may have shrunk since it was stored.
pub fn clamp_index(current: usize, len: usize) -> usize {
    current.min(len.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Tagged(&'static [Audience]);

    impl AudienceScoped for Tagged {
        fn audiences(&self) -> &[Audience] {
            self.0
        }
    }

    #[test]
    fn get_returns_matching_field() {
        let table = ContentTable::new("w", "b", "i");
        assert_eq!(*table.get(Audience::Worker), "w");
        assert_eq!(*table.get(Audience::Business), "b");
        assert_eq!(*table.get(Audience::Investor), "i");
    }

    #[test]
    fn iter_walks_audiences_in_display_order() {
        let table = ContentTable::new(1, 2, 3);
        let pairs: Vec<_> = table.iter().map(|(a, v)| (a, *v)).collect();
        assert_eq!(
            pairs,
            vec![(Audience::Worker, 1), (Audience::Business, 2), (Audience::Investor, 3)]
        );
    }

    #[test]
    fn scoped_keeps_order_and_membership() {
        let items = [
            Tagged(&[Audience::Worker]),
            Tagged(&[Audience::Business, Audience::Worker]),
            Tagged(&[Audience::Investor]),
        ];
        assert_eq!(scoped(&items, Audience::Worker).len(), 2);
        assert_eq!(scoped(&items, Audience::Investor).len(), 1);
        assert!(std::ptr::eq(scoped(&items, Audience::Business)[0], &items[1]));
    }

    #[test]
    fn rotate_wraps_and_recovers_from_stale_index() {
        assert_eq!(rotate(0, 3), 1);
        assert_eq!(rotate(2, 3), 0);
        assert_eq!(rotate(7, 3), 0);
        assert_eq!(rotate(0, 0), 0);
        assert_eq!(clamp_index(5, 3), 2);
        assert_eq!(clamp_index(1, 0), 0);
    }
}
