use std::fmt;

use tracing::trace;

/// Change notification sent to host observers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyEvent {
	/// A value was written. `element` is `None` for whole-property writes.
	Changed {
		/// Property name.
		name: String,
		/// Array element index, if the write targeted one element.
		element: Option<usize>,
	},
	/// An array property was resized.
	ArrayCountChanged {
		/// Property name.
		name: String,
	},
	/// The host's descriptor list changed shape.
	InfoUpdated,
}

/// Handle returned by [`PropertySignals::connect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type Observer = Box<dyn FnMut(&PropertyEvent)>;

/// Observer list owned by a host.
///
/// Observers run synchronously in connection order. While blocked, events
/// are dropped rather than queued.
#[derive(Default)]
pub struct PropertySignals {
	observers: Vec<(ObserverId, Observer)>,
	next_id: u64,
	blocked: bool,
}

impl PropertySignals {
	/// Empty, unblocked signal list.
	pub fn new() -> Self {
		Self::default()
	}

	/// Register an observer.
	pub fn connect(&mut self, observer: impl FnMut(&PropertyEvent) + 'static) -> ObserverId {
		let id = ObserverId(self.next_id);
		self.next_id += 1;
		self.observers.push((id, Box::new(observer)));
		id
	}

	/// Remove an observer. Returns `false` when `id` was not connected.
	pub fn disconnect(&mut self, id: ObserverId) -> bool {
		let before = self.observers.len();
		self.observers.retain(|(item, _)| *item != id);
		self.observers.len() != before
	}

	/// Number of connected observers.
	pub fn observer_count(&self) -> usize {
		self.observers.len()
	}

	/// Suppress or resume delivery. Returns the previous state.
	pub fn set_blocked(&mut self, blocked: bool) -> bool {
		std::mem::replace(&mut self.blocked, blocked)
	}

	/// Whether delivery is suppressed.
	pub fn is_blocked(&self) -> bool {
		self.blocked
	}

	/// Deliver `event` to every observer unless blocked.
	pub fn emit(&mut self, event: &PropertyEvent) {
		if self.blocked {
			trace!(?event, "signal blocked");
			return;
		}
		for (_, observer) in &mut self.observers {
			observer(event);
		}
	}
}

impl fmt::Debug for PropertySignals {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("PropertySignals")
			.field("observers", &self.observers.len())
			.field("blocked", &self.blocked)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;
	use std::rc::Rc;

	use super::*;

	fn changed(name: &str) -> PropertyEvent {
		PropertyEvent::Changed {
			name: name.to_owned(),
			element: None,
		}
	}

	#[test]
	fn observers_run_in_connection_order() {
		let log = Rc::new(RefCell::new(Vec::new()));
		let mut signals = PropertySignals::new();
		for tag in ["a", "b"] {
			let log = Rc::clone(&log);
			signals.connect(move |event| log.borrow_mut().push((tag, event.clone())));
		}

		signals.emit(&changed("speed"));
		assert_eq!(*log.borrow(), vec![("a", changed("speed")), ("b", changed("speed"))]);
	}

	#[test]
	fn blocked_signals_drop_events() {
		let count = Rc::new(RefCell::new(0));
		let mut signals = PropertySignals::new();
		let sink = Rc::clone(&count);
		signals.connect(move |_| *sink.borrow_mut() += 1);

		assert!(!signals.set_blocked(true));
		signals.emit(&PropertyEvent::InfoUpdated);
		assert!(signals.set_blocked(false));
		signals.emit(&PropertyEvent::InfoUpdated);
		assert_eq!(*count.borrow(), 1, "blocked event is not replayed");
	}

	#[test]
	fn disconnect_removes_only_that_observer() {
		let mut signals = PropertySignals::new();
		let first = signals.connect(|_| {});
		let _second = signals.connect(|_| {});
		assert!(signals.disconnect(first));
		assert!(!signals.disconnect(first), "already removed");
		assert_eq!(signals.observer_count(), 1);
	}
}
