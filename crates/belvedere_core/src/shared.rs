//! Shared, caller-owned ordered lists.
//!
//! The image stream never copies the selection it is given. The caller keeps
//! one handle, the model keeps a clone of it, and both see every push and
//! removal the other makes. The stream is single-threaded, so the handles are
//! `Rc<RefCell<_>>` and borrows never outlive a single method call.

use crate::{MediaIntent, MediaResult};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A cheaply cloned handle to an ordered list owned jointly by its holders.
///
/// # Examples
///
/// ```
/// use belvedere_core::SharedList;
///
/// let caller: SharedList<u32> = SharedList::new();
/// let model = caller.clone();
///
/// caller.push(1);
/// model.push(2);
///
/// assert_eq!(caller.snapshot(), vec![1, 2]);
/// assert!(caller.shares_storage(&model));
/// ```
pub struct SharedList<T>(Rc<RefCell<Vec<T>>>);

/// Shared list of media items.
pub type SharedMediaList = SharedList<MediaResult>;

/// Shared list of capture and pick targets.
pub type SharedIntentList = SharedList<MediaIntent>;

impl<T> SharedList<T> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(Vec::new())))
    }

    /// Append an item.
    pub fn push(&self, item: T) {
        self.0.borrow_mut().push(item);
    }

    /// Append every item of `items`.
    pub fn extend(&self, items: impl IntoIterator<Item = T>) {
        self.0.borrow_mut().extend(items);
    }

    /// Remove every item.
    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Run `f` over the current contents without copying them.
    pub fn with<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        f(&self.0.borrow())
    }

    /// Whether both handles point at the same list.
    pub fn shares_storage(&self, other: &SharedList<T>) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: Clone> SharedList<T> {
    /// Copy of the current contents.
    pub fn snapshot(&self) -> Vec<T> {
        self.0.borrow().clone()
    }

    /// Item at `index`, if present.
    pub fn get(&self, index: usize) -> Option<T> {
        self.0.borrow().get(index).cloned()
    }
}

impl<T: PartialEq> SharedList<T> {
    /// Remove the first item equal to `item`. Returns whether one was removed.
    pub fn remove_first(&self, item: &T) -> bool {
        let mut items = self.0.borrow_mut();
        match items.iter().position(|candidate| candidate == item) {
            Some(index) => {
                items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Whether an item equal to `item` is present.
    pub fn contains(&self, item: &T) -> bool {
        self.0.borrow().contains(item)
    }
}

impl<T> Clone for SharedList<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T> Default for SharedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for SharedList<T> {
    fn from(items: Vec<T>) -> Self {
        Self(Rc::new(RefCell::new(items)))
    }
}

impl<T: fmt::Debug> fmt::Debug for SharedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.borrow().iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_first_removes_one_occurrence() {
        let list = SharedList::from(vec![1, 2, 1]);
        assert!(list.remove_first(&1));
        assert_eq!(list.snapshot(), vec![2, 1]);
        assert!(!list.remove_first(&5));
    }

    #[test]
    fn test_independent_lists_do_not_share() {
        let a: SharedList<u8> = SharedList::new();
        let b: SharedList<u8> = SharedList::new();
        assert!(!a.shares_storage(&b));
        assert!(a.shares_storage(&a.clone()));
    }
}
