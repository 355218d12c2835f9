use std::fmt;

use crate::prop::PropertyInfo;

/// Property address: position in the host's list or exact name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyId<'a> {
	/// Position in the host's property list.
	Index(usize),
	/// Case-sensitive property name.
	Name(&'a str),
}

impl From<usize> for PropertyId<'_> {
	fn from(index: usize) -> Self {
		Self::Index(index)
	}
}

impl<'a> From<&'a str> for PropertyId<'a> {
	fn from(name: &'a str) -> Self {
		Self::Name(name)
	}
}

impl<'a> From<&'a String> for PropertyId<'a> {
	fn from(name: &'a String) -> Self {
		Self::Name(name)
	}
}

impl fmt::Display for PropertyId<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Index(index) => write!(f, "#{index}"),
			Self::Name(name) => f.write_str(name),
		}
	}
}

/// Descriptor at `index`, if in bounds.
pub fn find_by_index<H: 'static>(infos: &[PropertyInfo<H>], index: usize) -> Option<&PropertyInfo<H>> {
	infos.get(index)
}

/// First descriptor named exactly `name`.
pub fn find_by_name<'a, H: 'static>(infos: &'a [PropertyInfo<H>], name: &str) -> Option<&'a PropertyInfo<H>> {
	infos.iter().find(|info| info.name() == name)
}

/// Resolve either form of [`PropertyId`].
pub fn find_property<'a, H: 'static>(infos: &'a [PropertyInfo<H>], id: PropertyId<'_>) -> Option<&'a PropertyInfo<H>> {
	match id {
		PropertyId::Index(index) => find_by_index(infos, index),
		PropertyId::Name(name) => find_by_name(infos, name),
	}
}
