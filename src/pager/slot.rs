//! Lazily created page manager owned by a single list view

use tracing::debug;

use super::{
    errors::{PagerError, PagerResult},
    manager::PageManager,
};

/// Holds at most one [`PageManager`] for the lifetime of a view.
///
/// The manager is built on first access and torn down with
/// [`remove`](Self::remove); the next access after that builds a fresh one.
pub struct PagerSlot<T, F> {
    manager: Option<PageManager<T, F>>,
}

impl<T, F> Default for PagerSlot<T, F> {
    fn default() -> Self {
        Self { manager: None }
    }
}

impl<T, F> PagerSlot<T, F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Manager in this slot, building it with `make_fetcher` if the slot is empty
    pub fn get_or_create_with<M>(&mut self, make_fetcher: M) -> &mut PageManager<T, F>
    where
        M: FnOnce() -> F,
    {
        self.manager.get_or_insert_with(|| {
            debug!("Creating page manager");
            PageManager::new(make_fetcher())
        })
    }

    /// Manager in this slot, failing if none has been created
    pub fn get(&mut self) -> PagerResult<&mut PageManager<T, F>> {
        self.manager.as_mut().ok_or(PagerError::Missing)
    }

    #[cfg(test)]
    pub fn is_occupied(&self) -> bool {
        self.manager.is_some()
    }

    /// Destroy and drop the manager, if any
    pub fn remove(&mut self) {
        if let Some(mut manager) = self.manager.take() {
            manager.destroy();
            debug!("Removed page manager for {}", manager.url());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_lifecycle() {
        let mut slot: PagerSlot<u32, ()> = PagerSlot::new();
        assert!(!slot.is_occupied());
        assert!(matches!(slot.get(), Err(PagerError::Missing)));

        slot.get_or_create_with(|| ()).init("/admin/review", Some(5)).unwrap();
        assert!(slot.is_occupied());
        assert_eq!(slot.get().unwrap().row_count(), 5);

        // A second access reuses the configured manager.
        let manager = slot.get_or_create_with(|| panic!("slot should be occupied"));
        assert!(manager.is_ready());

        slot.remove();
        assert!(!slot.is_occupied());
        assert!(!slot.get_or_create_with(|| ()).is_ready());
    }

    #[test]
    fn test_remove_empty_slot() {
        let mut slot: PagerSlot<u32, ()> = PagerSlot::default();
        slot.remove();
        assert!(!slot.is_occupied());
    }
}
