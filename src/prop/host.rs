use std::borrow::Cow;

use tracing::{debug, warn};

use crate::prop::lookup::find_property;
use crate::prop::{PropertyEvent, PropertyId, PropertyInfo, PropertySignals, PropertyStorage, Variant};


/// A type whose state is exposed as named, typed properties.
///
/// Implementors supply the descriptor list and the observer list; every
/// read, write, and resize goes through [`PropertyHostExt`].
pub trait PropertyHost: Sized + 'static {
	/// Descriptor list in declaration order. Static tables are borrowed;
	/// hosts with per-instance properties return an owned list.
	fn property_infos(&self) -> Cow<'static, [PropertyInfo<Self>]>;

	/// Observer list.
	fn signals(&self) -> &PropertySignals;

	/// Observer list, mutably.
	fn signals_mut(&mut self) -> &mut PropertySignals;
}

/// Property operations shared by every [`PropertyHost`].
///
/// Failures never panic: they log a warning and return `false`, `0`, or
/// [`Variant::None`].
pub trait PropertyHostExt: PropertyHost {
	/// Descriptor for `id`, if it exists.
	fn property_info<'a>(&self, id: impl Into<PropertyId<'a>>) -> Option<PropertyInfo<Self>> {
		let infos = self.property_infos();
		find_property(&infos, id.into()).cloned()
	}

	/// Declared default of `id`.
	fn property_default<'a>(&self, id: impl Into<PropertyId<'a>>) -> Variant {
		match resolve(self, id.into()) {
			Some(info) => info.default_value().clone(),
			None => Variant::None,
		}
	}

	/// Current value of scalar property `id`.
	fn property<'a>(&self, id: impl Into<PropertyId<'a>>) -> Variant {
		match resolve(self, id.into()) {
			Some(info) => self.property_by_info(&info),
			None => Variant::None,
		}
	}

	/// Current value of the scalar property described by `info`.
	fn property_by_info(&self, info: &PropertyInfo<Self>) -> Variant {
		if info.is_array() {
			warn!(property = info.name(), "scalar read of an array property");
			return Variant::None;
		}
		let value = match info.storage() {
			PropertyStorage::Field(slot) => slot.load(self),
			PropertyStorage::Accessor(accessor) => accessor.get(self),
			PropertyStorage::ArrayField(_) => {
				warn!(property = info.name(), "array storage on a scalar property");
				return Variant::None;
			}
		};
		debug_assert_eq!(value.ty(), info.ty(), "property '{}' produced a value of the wrong type", info.name());
		value
	}

	/// Write scalar property `id`. Refused for read-only properties.
	fn set_property<'a>(&mut self, id: impl Into<PropertyId<'a>>, value: impl Into<Variant>) -> bool {
		write_scalar(self, id.into(), value.into(), false)
	}

	/// Write scalar property `id`, ignoring the read-only flag.
	fn set_property_forced<'a>(&mut self, id: impl Into<PropertyId<'a>>, value: impl Into<Variant>) -> bool {
		write_scalar(self, id.into(), value.into(), true)
	}

	/// Element `element` of array property `id`.
	fn array_property<'a>(&self, id: impl Into<PropertyId<'a>>, element: usize) -> Variant {
		match resolve_array(self, id.into()) {
			Some(info) => read_element_by_info(self, &info, element),
			None => Variant::None,
		}
	}

	/// Write element `element` of array property `id`. Refused for read-only
	/// properties.
	fn set_array_property<'a>(&mut self, id: impl Into<PropertyId<'a>>, element: usize, value: impl Into<Variant>) -> bool {
		write_element(self, id.into(), element, value.into(), false)
	}

	/// Write element `element` of array property `id`, ignoring the read-only
	/// flag.
	fn set_array_property_forced<'a>(&mut self, id: impl Into<PropertyId<'a>>, element: usize, value: impl Into<Variant>) -> bool {
		write_element(self, id.into(), element, value.into(), true)
	}

	/// Element count of array property `id`.
	fn property_array_count<'a>(&self, id: impl Into<PropertyId<'a>>) -> usize {
		match resolve_array(self, id.into()) {
			Some(info) => array_len(self, &info),
			None => 0,
		}
	}

	/// Resize array property `id`. New field-backed elements take the
	/// declared default; one [`PropertyEvent::ArrayCountChanged`] follows any
	/// actual change.
	fn set_property_array_count<'a>(&mut self, id: impl Into<PropertyId<'a>>, count: usize) {
		if let Some(info) = resolve_array(self, id.into()) {
			resize_by_info(self, &info, count);
		}
	}

	/// Tell observers the descriptor list changed shape.
	fn notify_property_info_updated(&mut self) {
		self.signals_mut().emit(&PropertyEvent::InfoUpdated);
	}
}

impl<H: PropertyHost> PropertyHostExt for H {}

fn resolve<H: PropertyHost>(host: &H, id: PropertyId<'_>) -> Option<PropertyInfo<H>> {
	let infos = host.property_infos();
	let found = find_property(&infos, id).cloned();
	if found.is_none() {
		warn!(property = %id, "unknown property");
	}
	found
}

fn resolve_array<H: PropertyHost>(host: &H, id: PropertyId<'_>) -> Option<PropertyInfo<H>> {
	let info = resolve(host, id)?;
	if !info.is_array() {
		warn!(property = info.name(), "not an array property");
		return None;
	}
	Some(info)
}

pub(crate) fn array_len<H: PropertyHost>(host: &H, info: &PropertyInfo<H>) -> usize {
	match info.storage() {
		PropertyStorage::ArrayField(slot) => slot.count(host),
		PropertyStorage::Accessor(accessor) => accessor.count(host),
		PropertyStorage::Field(_) => 0,
	}
}

/// Convert `value` to the descriptor's type and clamp it into range.
fn prepare<H: PropertyHost>(info: &PropertyInfo<H>, value: &Variant) -> Option<Variant> {
	let Some(value) = value.coerce(info.ty()) else {
		warn!(property = info.name(), expected = %info.ty(), got = %value.ty(), "value does not fit property type");
		return None;
	};
	Some(match info.range() {
		Some(range) => value.clamped(range.min, range.max),
		None => value,
	})
}

fn write_scalar<H: PropertyHost>(host: &mut H, id: PropertyId<'_>, value: Variant, force: bool) -> bool {
	match resolve(host, id) {
		Some(info) => write_scalar_by_info(host, &info, value, force),
		None => false,
	}
}

pub(crate) fn write_scalar_by_info<H: PropertyHost>(host: &mut H, info: &PropertyInfo<H>, value: Variant, force: bool) -> bool {
	if info.is_array() {
		warn!(property = info.name(), "scalar write to an array property");
		return false;
	}
	if info.is_read_only() && !force {
		warn!(property = info.name(), "property is read-only");
		return false;
	}
	let Some(value) = prepare(info, &value) else {
		return false;
	};

	match info.storage() {
		PropertyStorage::Field(slot) => {
			if !slot.store(host, value) {
				warn!(property = info.name(), "field rejected value");
				return false;
			}
		}
		PropertyStorage::Accessor(accessor) => accessor.set(host, &value),
		PropertyStorage::ArrayField(_) => {
			warn!(property = info.name(), "array storage on a scalar property");
			return false;
		}
	}

	host.signals_mut().emit(&PropertyEvent::Changed {
		name: info.name().to_owned(),
		element: None,
	});
	true
}

fn write_element<H: PropertyHost>(host: &mut H, id: PropertyId<'_>, element: usize, value: Variant, force: bool) -> bool {
	match resolve_array(host, id) {
		Some(info) => write_element_by_info(host, &info, element, value, force),
		None => false,
	}
}

pub(crate) fn write_element_by_info<H: PropertyHost>(host: &mut H, info: &PropertyInfo<H>, element: usize, value: Variant, force: bool) -> bool {
	if info.is_read_only() && !force {
		warn!(property = info.name(), element, "property is read-only");
		return false;
	}
	let Some(value) = prepare(info, &value) else {
		return false;
	};

	match info.storage() {
		PropertyStorage::ArrayField(slot) => {
			if !slot.store(host, element, value) {
				warn!(property = info.name(), element, "array element out of range");
				return false;
			}
		}
		PropertyStorage::Accessor(accessor) => accessor.set_element(host, element, &value),
		PropertyStorage::Field(_) => {
			warn!(property = info.name(), "scalar storage on an array property");
			return false;
		}
	}

	host.signals_mut().emit(&PropertyEvent::Changed {
		name: info.name().to_owned(),
		element: Some(element),
	});
	true
}

pub(crate) fn read_element_by_info<H: PropertyHost>(host: &H, info: &PropertyInfo<H>, element: usize) -> Variant {
	match info.storage() {
		PropertyStorage::ArrayField(slot) => slot.load(host, element).unwrap_or_else(|| {
			warn!(property = info.name(), element, "array element out of range");
			Variant::None
		}),
		PropertyStorage::Accessor(accessor) => accessor.get_element(host, element),
		PropertyStorage::Field(_) => {
			warn!(property = info.name(), "scalar storage on an array property");
			Variant::None
		}
	}
}

/// Resize the array described by `info`. Growing fills new field-backed
/// elements with the declared default while signals are blocked.
pub(crate) fn resize_by_info<H: PropertyHost>(host: &mut H, info: &PropertyInfo<H>, count: usize) {
	if info.is_read_only() {
		warn!(property = info.name(), "cannot resize a read-only array");
		return;
	}

	let current = array_len(host, info);
	if current == count {
		return;
	}

	match info.storage() {
		PropertyStorage::Accessor(accessor) => accessor.set_count(host, count),
		PropertyStorage::ArrayField(slot) => {
			slot.resize(host, count);
			if count > current {
				let was_blocked = host.signals_mut().set_blocked(true);
				for element in current..count {
					write_element_by_info(host, info, element, info.default_value().clone(), true);
				}
				host.signals_mut().set_blocked(was_blocked);
			}
		}
		PropertyStorage::Field(_) => {
			warn!(property = info.name(), "scalar storage on an array property");
			return;
		}
	}

	debug!(property = info.name(), from = current, to = count, "array resized");
	host.signals_mut().emit(&PropertyEvent::ArrayCountChanged {
		name: info.name().to_owned(),
	});
}
