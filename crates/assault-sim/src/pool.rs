//! Fixed-capacity object pool addressed by slot index.
//!
//! Storage is allocated once. Acquiring a slot never allocates, and a full
//! pool simply refuses. Released slots keep their stale contents; whoever
//! acquires a slot is expected to overwrite every field.

/// Fixed-capacity pool of reusable items.
#[derive(Debug, Clone)]
pub struct ObjectPool<T> {
    items: Vec<T>,
    active: Vec<bool>,
    active_count: usize,
}

impl<T> ObjectPool<T> {
    /// Create a pool of `capacity` items built by `factory`, all inactive.
    pub fn new(capacity: usize, mut factory: impl FnMut() -> T) -> Self {
        Self {
            items: (0..capacity).map(|_| factory()).collect(),
            active: vec![false; capacity],
            active_count: 0,
        }
    }

    /// Claim the lowest-index inactive slot.
    ///
    /// Returns its index and the (stale) item, or `None` when every slot is in use.
    pub fn acquire(&mut self) -> Option<(usize, &mut T)> {
        let index = self.active.iter().position(|&a| !a)?;
        self.active[index] = true;
        self.active_count += 1;
        Some((index, &mut self.items[index]))
    }

    /// Return a slot to the pool. Out-of-range or already inactive indices are ignored.
    pub fn release(&mut self, index: usize) {
        if let Some(flag) = self.active.get_mut(index) {
            if *flag {
                *flag = false;
                self.active_count -= 1;
            }
        }
    }

    /// Release every active item matching `predicate`.
    pub fn release_if(&mut self, mut predicate: impl FnMut(&T) -> bool) {
        for (item, flag) in self.items.iter().zip(self.active.iter_mut()) {
            if *flag && predicate(item) {
                *flag = false;
                self.active_count -= 1;
            }
        }
    }

    /// Deactivate every slot.
    pub fn release_all(&mut self) {
        self.active.fill(false);
        self.active_count = 0;
    }

    /// Visit active items in slot order.
    pub fn for_each_active(&self, mut f: impl FnMut(usize, &T)) {
        for (index, item) in self.iter_active() {
            f(index, item);
        }
    }

    /// Visit active items mutably in slot order.
    pub fn for_each_active_mut(&mut self, mut f: impl FnMut(usize, &mut T)) {
        for (index, (item, &active)) in self.items.iter_mut().zip(self.active.iter()).enumerate() {
            if active {
                f(index, item);
            }
        }
    }

    /// Iterate `(index, item)` over active slots.
    pub fn iter_active(&self) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.items
            .iter()
            .enumerate()
            .filter(move |(index, _)| self.active[*index])
    }

    /// The item in `index` if that slot is active.
    pub fn get(&self, index: usize) -> Option<&T> {
        if self.is_active(index) {
            self.items.get(index)
        } else {
            None
        }
    }

    /// The item in `index` mutably if that slot is active.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if self.is_active(index) {
            self.items.get_mut(index)
        } else {
            None
        }
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active.get(index).copied().unwrap_or(false)
    }

    pub fn active_count(&self) -> usize {
        self.active_count
    }

    pub fn capacity(&self) -> usize {
        self.items.len()
    }
}
