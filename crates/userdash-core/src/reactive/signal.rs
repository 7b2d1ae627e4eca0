//! Signal - Observable State Cell
//!
//! `Signal<T>` holds a value and notifies subscribers whenever it is written.
//!
//! ## Key Features
//!
//! - **Shared Ownership**: Clones share the same value via `Rc<RefCell<T>>`, so a
//!   controller and the view that renders it observe one cell.
//! - **Change Notification**: `set()` and `update()` call every subscriber with a
//!   snapshot of the new value.
//! - **Re-entrancy Safe**: Subscribers receive a cloned snapshot, so a callback may
//!   read or write the signal it was notified by.
//! - **Single-threaded**: `Signal<T>` is `!Send`; it lives on the UI thread.
//!
//! ## Example
//!
//! ```
//! use userdash_core::Signal;
//!
//! let count = Signal::new(0);
//! assert_eq!(count.get(), 0);
//!
//! count.set(42);
//! assert_eq!(count.get(), 42);
//!
//! count.update(|n| *n += 1);
//! assert_eq!(count.get(), 43);
//! ```

use core::cell::RefCell;
use core::fmt;
use core::sync::atomic::{AtomicUsize, Ordering};
use std::rc::Rc;

/// Handle returned by [`Signal::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(usize);

impl SubscriptionId {
	fn next() -> Self {
		static COUNTER: AtomicUsize = AtomicUsize::new(0);
		Self(COUNTER.fetch_add(1, Ordering::Relaxed))
	}
}

type Subscriber<T> = Rc<dyn Fn(&T)>;

/// An observable value shared between a controller and its view.
///
/// ## Cloning
///
/// `Signal<T>` implements `Clone`; all clones share the same value and the same
/// subscriber list.
pub struct Signal<T: 'static> {
	value: Rc<RefCell<T>>,
	subscribers: Rc<RefCell<Vec<(SubscriptionId, Subscriber<T>)>>>,
}

impl<T: 'static> Clone for Signal<T> {
	fn clone(&self) -> Self {
		Self {
			value: Rc::clone(&self.value),
			subscribers: Rc::clone(&self.subscribers),
		}
	}
}

impl<T: 'static> Signal<T> {
	/// Create a new Signal with the given initial value
	///
	/// # Example
	///
	/// ```
	/// use userdash_core::Signal;
	///
	/// let name = Signal::new(String::from("Jane"));
	/// assert_eq!(name.get(), "Jane");
	/// ```
	pub fn new(value: T) -> Self {
		Self {
			value: Rc::new(RefCell::new(value)),
			subscribers: Rc::new(RefCell::new(Vec::new())),
		}
	}

	/// Get a clone of the current value
	pub fn get(&self) -> T
	where
		T: Clone,
	{
		self.value.borrow().clone()
	}

	/// Borrow the current value for the duration of `f`
	///
	/// Avoids cloning when only a projection of the value is needed.
	///
	/// # Example
	///
	/// ```
	/// use userdash_core::Signal;
	///
	/// let items = Signal::new(vec![1, 2, 3]);
	/// assert_eq!(items.with(|v| v.len()), 3);
	/// ```
	pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
		f(&self.value.borrow())
	}

	/// Set the signal to a new value and notify subscribers
	pub fn set(&self, value: T)
	where
		T: Clone,
	{
		*self.value.borrow_mut() = value;
		self.notify();
	}

	/// Update the signal's value in place and notify subscribers once
	///
	/// # Example
	///
	/// ```
	/// use userdash_core::Signal;
	///
	/// let count = Signal::new(0);
	/// count.update(|n| *n += 1);
	/// assert_eq!(count.get(), 1);
	/// ```
	pub fn update<F>(&self, f: F)
	where
		F: FnOnce(&mut T),
		T: Clone,
	{
		f(&mut *self.value.borrow_mut());
		self.notify();
	}

	/// Register a callback invoked with the new value after every write
	///
	/// # Example
	///
	/// ```
	/// use std::cell::Cell;
	/// use std::rc::Rc;
	/// use userdash_core::Signal;
	///
	/// let count = Signal::new(0);
	/// let seen = Rc::new(Cell::new(0));
	///
	/// let seen_clone = Rc::clone(&seen);
	/// count.subscribe(move |n| seen_clone.set(*n));
	///
	/// count.set(7);
	/// assert_eq!(seen.get(), 7);
	/// ```
	pub fn subscribe<F>(&self, f: F) -> SubscriptionId
	where
		F: Fn(&T) + 'static,
	{
		let id = SubscriptionId::next();
		self.subscribers.borrow_mut().push((id, Rc::new(f)));
		id
	}

	/// Remove a subscriber. Returns `false` if the id was not registered.
	pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
		let mut subscribers = self.subscribers.borrow_mut();
		let before = subscribers.len();
		subscribers.retain(|(sub_id, _)| *sub_id != id);
		subscribers.len() != before
	}

	pub fn subscriber_count(&self) -> usize {
		self.subscribers.borrow().len()
	}

	fn notify(&self)
	where
		T: Clone,
	{
		let subscribers: Vec<Subscriber<T>> = self
			.subscribers
			.borrow()
			.iter()
			.map(|(_, f)| Rc::clone(f))
			.collect();
		if subscribers.is_empty() {
			return;
		}

		let snapshot = self.get();
		for subscriber in subscribers {
			subscriber(&snapshot);
		}
	}
}

impl<T: Default + 'static> Default for Signal<T> {
	fn default() -> Self {
		Self::new(T::default())
	}
}

impl<T: fmt::Debug + 'static> fmt::Debug for Signal<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Signal")
			.field("value", &*self.value.borrow())
			.field("subscribers", &self.subscribers.borrow().len())
			.finish()
	}
}
