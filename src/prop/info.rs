use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use bitflags::bitflags;

use crate::prop::accessor::{ScalarField, VecField};
use crate::prop::{ArraySlot, FieldSlot, PropertyAccessor, Variant, VariantType, VariantValue};

bitflags! {
	/// Per-property behavior switches.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
	pub struct PropertyFlags: u32 {
		/// Writes are refused unless forced.
		const READ_ONLY = 1 << 0;
		/// Value is a resizable array of the declared type.
		const ARRAY = 1 << 1;
		/// Left out of serialized documents.
		const SKIP_SERIALIZATION = 1 << 2;
	}
}

/// Inclusive numeric bounds applied to every component on write.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyRange {
	/// Lower bound.
	pub min: f32,
	/// Upper bound.
	pub max: f32,
}

/// Where a property's value lives.
pub enum PropertyStorage<H: 'static> {
	/// Scalar slot inside the host.
	Field(Arc<dyn FieldSlot<H>>),
	/// Array slot inside the host.
	ArrayField(Arc<dyn ArraySlot<H>>),
	/// Custom accessor shared by every host of the type.
	Accessor(&'static dyn PropertyAccessor<H>),
}

impl<H: 'static> Clone for PropertyStorage<H> {
	fn clone(&self) -> Self {
		match self {
			Self::Field(slot) => Self::Field(Arc::clone(slot)),
			Self::ArrayField(slot) => Self::ArrayField(Arc::clone(slot)),
			Self::Accessor(accessor) => Self::Accessor(*accessor),
		}
	}
}

impl<H: 'static> fmt::Debug for PropertyStorage<H> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Field(_) => "Field",
			Self::ArrayField(_) => "ArrayField",
			Self::Accessor(_) => "Accessor",
		})
	}
}

/// Immutable descriptor of one property on host type `H`.
///
/// Built once per host type with [`PropertyInfo::field`],
/// [`PropertyInfo::array`], [`PropertyInfo::accessor`], or
/// [`PropertyInfo::slot`], then finished through [`PropertyInfoBuilder`].
pub struct PropertyInfo<H: 'static> {
	name: Cow<'static, str>,
	ty: VariantType,
	storage: PropertyStorage<H>,
	flags: PropertyFlags,
	range: Option<PropertyRange>,
	default: Variant,
	label: Option<Cow<'static, str>>,
	description: Option<Cow<'static, str>>,
	enum_names: &'static [&'static str],
}

impl<H: 'static> Clone for PropertyInfo<H> {
	fn clone(&self) -> Self {
		Self {
			name: self.name.clone(),
			ty: self.ty,
			storage: self.storage.clone(),
			flags: self.flags,
			range: self.range,
			default: self.default.clone(),
			label: self.label.clone(),
			description: self.description.clone(),
			enum_names: self.enum_names,
		}
	}
}

impl<H: 'static> fmt::Debug for PropertyInfo<H> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("PropertyInfo")
			.field("name", &self.name)
			.field("ty", &self.ty)
			.field("storage", &self.storage)
			.field("flags", &self.flags)
			.field("range", &self.range)
			.field("default", &self.default)
			.finish_non_exhaustive()
	}
}

impl<H: 'static> PropertyInfo<H> {
	/// Scalar property backed by a field of type `T`.
	pub fn field<T: VariantValue>(name: impl Into<Cow<'static, str>>, get: fn(&H) -> &T, get_mut: fn(&mut H) -> &mut T) -> PropertyInfoBuilder<H> {
		let slot: Arc<dyn FieldSlot<H>> = Arc::new(ScalarField::new(get, get_mut));
		PropertyInfoBuilder::new(name.into(), T::TYPE, PropertyStorage::Field(slot), PropertyFlags::empty())
	}

	/// Array property backed by a `Vec<T>` field.
	pub fn array<T: VariantValue>(name: impl Into<Cow<'static, str>>, get: fn(&H) -> &Vec<T>, get_mut: fn(&mut H) -> &mut Vec<T>) -> PropertyInfoBuilder<H> {
		let slot: Arc<dyn ArraySlot<H>> = Arc::new(VecField::new(get, get_mut));
		PropertyInfoBuilder::new(name.into(), T::TYPE, PropertyStorage::ArrayField(slot), PropertyFlags::ARRAY)
	}

	/// Property whose reads and writes go through `accessor`. Call
	/// [`PropertyInfoBuilder::array`] when the accessor exposes elements.
	pub fn accessor(name: impl Into<Cow<'static, str>>, ty: VariantType, accessor: &'static dyn PropertyAccessor<H>) -> PropertyInfoBuilder<H> {
		PropertyInfoBuilder::new(name.into(), ty, PropertyStorage::Accessor(accessor), PropertyFlags::empty())
	}

	/// Scalar property over a caller-supplied slot.
	pub fn slot(name: impl Into<Cow<'static, str>>, ty: VariantType, slot: Arc<dyn FieldSlot<H>>) -> PropertyInfoBuilder<H> {
		PropertyInfoBuilder::new(name.into(), ty, PropertyStorage::Field(slot), PropertyFlags::empty())
	}

	/// Property name, unique within its host type.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Declared value type. For arrays this is the element type.
	pub fn ty(&self) -> VariantType {
		self.ty
	}

	/// Backing storage.
	pub fn storage(&self) -> &PropertyStorage<H> {
		&self.storage
	}

	/// Behavior flags.
	pub fn flags(&self) -> PropertyFlags {
		self.flags
	}

	/// Whether plain writes are refused.
	pub fn is_read_only(&self) -> bool {
		self.flags.contains(PropertyFlags::READ_ONLY)
	}

	/// Whether the property is an array.
	pub fn is_array(&self) -> bool {
		self.flags.contains(PropertyFlags::ARRAY)
	}

	/// Whether serialization skips the property.
	pub fn skips_serialization(&self) -> bool {
		self.flags.contains(PropertyFlags::SKIP_SERIALIZATION)
	}

	/// Clamp bounds, if any.
	pub fn range(&self) -> Option<PropertyRange> {
		self.range
	}

	/// Default value. For arrays this is the default of each new element.
	pub fn default_value(&self) -> &Variant {
		&self.default
	}

	/// Display label, falling back to the name.
	pub fn label(&self) -> &str {
		self.label.as_deref().unwrap_or(&self.name)
	}

	/// Free-form description.
	pub fn description(&self) -> Option<&str> {
		self.description.as_deref()
	}

	/// Symbolic names for integer values, indexed by value.
	pub fn enum_names(&self) -> &'static [&'static str] {
		self.enum_names
	}
}

/// Builder returned by the [`PropertyInfo`] constructors.
#[must_use]
pub struct PropertyInfoBuilder<H: 'static> {
	info: PropertyInfo<H>,
}

impl<H: 'static> PropertyInfoBuilder<H> {
	fn new(name: Cow<'static, str>, ty: VariantType, storage: PropertyStorage<H>, flags: PropertyFlags) -> Self {
		Self {
			info: PropertyInfo {
				name,
				ty,
				storage,
				flags,
				range: None,
				default: ty.zero_value(),
				label: None,
				description: None,
				enum_names: &[],
			},
		}
	}

	/// Default value, converted to the declared type.
	pub fn default(mut self, value: impl Into<Variant>) -> Self {
		let value = value.into();
		let coerced = value.coerce(self.info.ty);
		debug_assert!(coerced.is_some(), "default {} does not fit property '{}' of type {}", value.ty(), self.info.name, self.info.ty);
		if let Some(value) = coerced {
			self.info.default = value;
		}
		self
	}

	/// Clamp written values into `[min, max]`.
	pub fn range(mut self, min: f32, max: f32) -> Self {
		debug_assert!(min <= max, "range of '{}' is inverted", self.info.name);
		debug_assert!(self.info.ty.is_rangeable(), "type {} of '{}' cannot be ranged", self.info.ty, self.info.name);
		self.info.range = Some(PropertyRange { min, max });
		self
	}

	/// Refuse unforced writes.
	pub fn read_only(mut self) -> Self {
		self.info.flags |= PropertyFlags::READ_ONLY;
		self
	}

	/// Mark an accessor-backed property as an array.
	pub fn array(mut self) -> Self {
		debug_assert!(
			matches!(self.info.storage, PropertyStorage::Accessor(_) | PropertyStorage::ArrayField(_)),
			"'{}' has scalar field storage",
			self.info.name
		);
		self.info.flags |= PropertyFlags::ARRAY;
		self
	}

	/// Leave the property out of serialized documents.
	pub fn skip_serialization(mut self) -> Self {
		self.info.flags |= PropertyFlags::SKIP_SERIALIZATION;
		self
	}

	/// Display label.
	pub fn label(mut self, label: impl Into<Cow<'static, str>>) -> Self {
		self.info.label = Some(label.into());
		self
	}

	/// Free-form description.
	pub fn description(mut self, description: impl Into<Cow<'static, str>>) -> Self {
		self.info.description = Some(description.into());
		self
	}

	/// Symbolic names for an integer property.
	pub fn enum_names(mut self, names: &'static [&'static str]) -> Self {
		self.info.enum_names = names;
		self
	}

	/// Finish the descriptor.
	pub fn build(self) -> PropertyInfo<H> {
		self.info
	}
}
