use tracing::warn;

use crate::prop::{Variant, VariantValue};

/// Custom get/set hooks for a property that is not a plain field.
///
/// Accessors are shared by every host of a type, so they carry no per-host
/// state. Array methods default to warning no-ops for scalar accessors.
pub trait PropertyAccessor<H>: Send + Sync {
	/// Read the whole value.
	fn get(&self, host: &H) -> Variant;

	/// Write the whole value. `value` already carries the descriptor's tag.
	fn set(&self, host: &mut H, value: &Variant);

	/// Read one array element.
	fn get_element(&self, _host: &H, index: usize) -> Variant {
		warn!(index, "accessor does not expose array elements");
		Variant::None
	}

	/// Write one array element.
	fn set_element(&self, _host: &mut H, index: usize, _value: &Variant) {
		warn!(index, "accessor does not expose array elements");
	}

	/// Current element count.
	fn count(&self, _host: &H) -> usize {
		0
	}

	/// Resize the backing array.
	fn set_count(&self, _host: &mut H, count: usize) {
		warn!(count, "accessor does not expose an array count");
	}
}

/// Type-erased scalar storage slot inside a host.
///
/// Implement this directly for storage that fn-pointer projections cannot
/// express, such as per-instance user properties kept in a map.
pub trait FieldSlot<H>: Send + Sync {
	/// Read the stored value.
	fn load(&self, host: &H) -> Variant;

	/// Store `value`. Returns `false` when it does not carry the slot's type.
	fn store(&self, host: &mut H, value: Variant) -> bool;
}

/// Type-erased array storage slot inside a host.
pub trait ArraySlot<H>: Send + Sync {
	/// Element count.
	fn count(&self, host: &H) -> usize;

	/// Resize, filling new slots with the element type's zero value.
	fn resize(&self, host: &mut H, count: usize);

	/// Read one element, `None` past the end.
	fn load(&self, host: &H, index: usize) -> Option<Variant>;

	/// Store one element. Returns `false` past the end or on a type mismatch.
	fn store(&self, host: &mut H, index: usize, value: Variant) -> bool;
}

/// Scalar field reached through a pair of projections.
pub(crate) struct ScalarField<H, T> {
	get: fn(&H) -> &T,
	get_mut: fn(&mut H) -> &mut T,
}

impl<H, T> ScalarField<H, T> {
	pub(crate) fn new(get: fn(&H) -> &T, get_mut: fn(&mut H) -> &mut T) -> Self {
		Self { get, get_mut }
	}
}

impl<H, T: VariantValue> FieldSlot<H> for ScalarField<H, T> {
	fn load(&self, host: &H) -> Variant {
		(self.get)(host).clone().into_variant()
	}

	fn store(&self, host: &mut H, value: Variant) -> bool {
		match T::from_variant(&value) {
			Some(value) => {
				*(self.get_mut)(host) = value;
				true
			}
			None => false,
		}
	}
}

/// `Vec<T>` field reached through a pair of projections.
pub(crate) struct VecField<H, T> {
	get: fn(&H) -> &Vec<T>,
	get_mut: fn(&mut H) -> &mut Vec<T>,
}

impl<H, T> VecField<H, T> {
	pub(crate) fn new(get: fn(&H) -> &Vec<T>, get_mut: fn(&mut H) -> &mut Vec<T>) -> Self {
		Self { get, get_mut }
	}
}

impl<H, T: VariantValue> ArraySlot<H> for VecField<H, T> {
	fn count(&self, host: &H) -> usize {
		(self.get)(host).len()
	}

	fn resize(&self, host: &mut H, count: usize) {
		(self.get_mut)(host).resize(count, T::default());
	}

	fn load(&self, host: &H, index: usize) -> Option<Variant> {
		(self.get)(host).get(index).map(|item| item.clone().into_variant())
	}

	fn store(&self, host: &mut H, index: usize, value: Variant) -> bool {
		let Some(value) = T::from_variant(&value) else {
			return false;
		};
		match (self.get_mut)(host).get_mut(index) {
			Some(slot) => {
				*slot = value;
				true
			}
			None => false,
		}
	}
}
