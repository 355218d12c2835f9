mod accessor;
mod codec;
mod curve;
mod error;
mod host;
mod info;
mod lookup;
mod math;
mod signal;
mod variant;

#[cfg(test)]
mod test_support;

/// Custom accessor trait and type-erased storage slots.
pub use accessor::{ArraySlot, FieldSlot, PropertyAccessor};
/// JSON document codec and load options.
pub use codec::{LoadOptions, deserialize, deserialize_with, from_json_str, serialize, to_json_string};
/// Min/max animation curve value.
pub use curve::{CurveKey, CurveMode, MinMaxCurve};
/// Error and result aliases.
pub use error::{PropError, Result};
/// Property host contract and its shared operations.
pub use host::{PropertyHost, PropertyHostExt};
/// Property descriptors and their builder.
pub use info::{PropertyFlags, PropertyInfo, PropertyInfoBuilder, PropertyRange, PropertyStorage};
/// Descriptor lookup by index or name.
pub use lookup::{PropertyId, find_by_index, find_by_name, find_property};
/// Fixed-size math value types.
pub use math::{Angles, Color3, Color4, Components, Mat2, Mat3, Mat3x4, Mat4, Point, Quat, Rect, Scalar, Vec2, Vec3, Vec4};
/// Change notifications and observer lists.
pub use signal::{ObserverId, PropertyEvent, PropertySignals};
/// Tagged value cell and its type tags.
pub use variant::{Guid, Variant, VariantType, VariantValue};
