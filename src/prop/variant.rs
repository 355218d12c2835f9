//! Tagged value cell used to move property values in and out of hosts.

use std::fmt;

use serde_json::Value as JsonValue;
use uuid::Uuid;

use crate::prop::curve::MinMaxCurve;
use crate::prop::math::{
	Angles, Color3, Color4, Mat2, Mat3, Mat3x4, Mat4, Point, Quat, Rect, Vec2, Vec3, Vec4, clamp_components, clamp_scalar, scan_components,
};
use crate::prop::{PropError, Result};

/// 128-bit globally unique identifier.
pub type Guid = Uuid;

/// Runtime type tag of a [`Variant`] and of a property descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantType {
	/// Empty cell.
	None,
	/// `i32`.
	Int,
	/// `i64`.
	Int64,
	/// `bool`.
	Bool,
	/// `f32`.
	Float,
	/// [`Vec2`].
	Vec2,
	/// [`Vec3`].
	Vec3,
	/// [`Vec4`].
	Vec4,
	/// [`Color3`].
	Color3,
	/// [`Color4`].
	Color4,
	/// [`Angles`].
	Angles,
	/// [`Quat`].
	Quat,
	/// [`Mat2`].
	Mat2,
	/// [`Mat3`].
	Mat3,
	/// [`Mat3x4`].
	Mat3x4,
	/// [`Mat4`].
	Mat4,
	/// [`Point`].
	Point,
	/// [`Rect`].
	Rect,
	/// [`Guid`].
	Guid,
	/// `String`.
	Str,
	/// [`MinMaxCurve`].
	MinMaxCurve,
}

impl VariantType {
	/// Stable lowercase name.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::None => "none",
			Self::Int => "int",
			Self::Int64 => "int64",
			Self::Bool => "bool",
			Self::Float => "float",
			Self::Vec2 => "vec2",
			Self::Vec3 => "vec3",
			Self::Vec4 => "vec4",
			Self::Color3 => "color3",
			Self::Color4 => "color4",
			Self::Angles => "angles",
			Self::Quat => "quat",
			Self::Mat2 => "mat2",
			Self::Mat3 => "mat3",
			Self::Mat3x4 => "mat3x4",
			Self::Mat4 => "mat4",
			Self::Point => "point",
			Self::Rect => "rect",
			Self::Guid => "guid",
			Self::Str => "string",
			Self::MinMaxCurve => "curve",
		}
	}

	/// Whether a descriptor range clamps values of this type.
	pub fn is_rangeable(self) -> bool {
		matches!(
			self,
			Self::Int | Self::Int64 | Self::Float | Self::Vec2 | Self::Vec3 | Self::Vec4 | Self::Color3 | Self::Color4 | Self::Angles | Self::Point | Self::Rect
		)
	}

	/// Default-constructed value carrying this tag.
	pub fn zero_value(self) -> Variant {
		match self {
			Self::None => Variant::None,
			Self::Int => Variant::Int(0),
			Self::Int64 => Variant::Int64(0),
			Self::Bool => Variant::Bool(false),
			Self::Float => Variant::Float(0.0),
			Self::Vec2 => Variant::Vec2(Vec2::default()),
			Self::Vec3 => Variant::Vec3(Vec3::default()),
			Self::Vec4 => Variant::Vec4(Vec4::default()),
			Self::Color3 => Variant::Color3(Color3::default()),
			Self::Color4 => Variant::Color4(Color4::default()),
			Self::Angles => Variant::Angles(Angles::default()),
			Self::Quat => Variant::Quat(Quat::default()),
			Self::Mat2 => Variant::Mat2(Mat2::default()),
			Self::Mat3 => Variant::Mat3(Mat3::default()),
			Self::Mat3x4 => Variant::Mat3x4(Mat3x4::default()),
			Self::Mat4 => Variant::Mat4(Mat4::default()),
			Self::Point => Variant::Point(Point::default()),
			Self::Rect => Variant::Rect(Rect::default()),
			Self::Guid => Variant::Guid(Guid::nil()),
			Self::Str => Variant::Str(String::new()),
			Self::MinMaxCurve => Variant::MinMaxCurve(MinMaxCurve::default()),
		}
	}
}

impl fmt::Display for VariantType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A single value of any supported property type.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Variant {
	/// Empty cell, returned by failed lookups.
	#[default]
	None,
	/// 32-bit integer.
	Int(i32),
	/// 64-bit integer.
	Int64(i64),
	/// Boolean.
	Bool(bool),
	/// 32-bit float.
	Float(f32),
	/// Two-component vector.
	Vec2(Vec2),
	/// Three-component vector.
	Vec3(Vec3),
	/// Four-component vector.
	Vec4(Vec4),
	/// RGB color.
	Color3(Color3),
	/// RGBA color.
	Color4(Color4),
	/// Euler angles.
	Angles(Angles),
	/// Rotation quaternion.
	Quat(Quat),
	/// 2x2 matrix.
	Mat2(Mat2),
	/// 3x3 matrix.
	Mat3(Mat3),
	/// 3x4 matrix.
	Mat3x4(Mat3x4),
	/// 4x4 matrix.
	Mat4(Mat4),
	/// Integer point.
	Point(Point),
	/// Integer rect.
	Rect(Rect),
	/// Unique identifier.
	Guid(Guid),
	/// UTF-8 text.
	Str(String),
	/// Min/max animation curve.
	MinMaxCurve(MinMaxCurve),
}

/// Native types that can be stored in a [`Variant`].
pub trait VariantValue: Clone + Default + Send + Sync + 'static {
	/// Tag of the variant holding this type.
	const TYPE: VariantType;

	/// Extract from a variant. Scalar numeric types also accept the other
	/// scalar numeric tags, converting with `as` semantics.
	fn from_variant(value: &Variant) -> Option<Self>;

	/// Wrap into a variant.
	fn into_variant(self) -> Variant;
}

impl VariantValue for i32 {
	const TYPE: VariantType = VariantType::Int;

	fn from_variant(value: &Variant) -> Option<Self> {
		match *value {
			Variant::Int(v) => Some(v),
			Variant::Int64(v) => Some(saturate_i32(v)),
			Variant::Float(v) => Some(v as i32),
			Variant::Bool(v) => Some(i32::from(v)),
			_ => None,
		}
	}

	fn into_variant(self) -> Variant {
		Variant::Int(self)
	}
}

/// Narrow to `i32`, pinning out-of-range values to the nearest bound.
pub(crate) fn saturate_i32(value: i64) -> i32 {
	i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}

impl VariantValue for i64 {
	const TYPE: VariantType = VariantType::Int64;

	fn from_variant(value: &Variant) -> Option<Self> {
		match *value {
			Variant::Int(v) => Some(i64::from(v)),
			Variant::Int64(v) => Some(v),
			Variant::Float(v) => Some(v as i64),
			Variant::Bool(v) => Some(i64::from(v)),
			_ => None,
		}
	}

	fn into_variant(self) -> Variant {
		Variant::Int64(self)
	}
}

impl VariantValue for f32 {
	const TYPE: VariantType = VariantType::Float;

	fn from_variant(value: &Variant) -> Option<Self> {
		match *value {
			Variant::Int(v) => Some(v as f32),
			Variant::Int64(v) => Some(v as f32),
			Variant::Float(v) => Some(v),
			Variant::Bool(v) => Some(if v { 1.0 } else { 0.0 }),
			_ => None,
		}
	}

	fn into_variant(self) -> Variant {
		Variant::Float(self)
	}
}

impl VariantValue for bool {
	const TYPE: VariantType = VariantType::Bool;

	fn from_variant(value: &Variant) -> Option<Self> {
		match *value {
			Variant::Int(v) => Some(v != 0),
			Variant::Int64(v) => Some(v != 0),
			Variant::Float(v) => Some(v != 0.0),
			Variant::Bool(v) => Some(v),
			_ => None,
		}
	}

	fn into_variant(self) -> Variant {
		Variant::Bool(self)
	}
}

macro_rules! exact_value {
	($($ty:ty => $tag:ident),+ $(,)?) => {
		$(
			impl VariantValue for $ty {
				const TYPE: VariantType = VariantType::$tag;

				fn from_variant(value: &Variant) -> Option<Self> {
					match value {
						Variant::$tag(item) => Some(item.clone()),
						_ => None,
					}
				}

				fn into_variant(self) -> Variant {
					Variant::$tag(self)
				}
			}
		)+
	};
}

exact_value!(
	Vec2 => Vec2,
	Vec3 => Vec3,
	Vec4 => Vec4,
	Color3 => Color3,
	Color4 => Color4,
	Angles => Angles,
	Quat => Quat,
	Mat2 => Mat2,
	Mat3 => Mat3,
	Mat3x4 => Mat3x4,
	Mat4 => Mat4,
	Point => Point,
	Rect => Rect,
	Guid => Guid,
	String => Str,
	MinMaxCurve => MinMaxCurve,
);

impl<T: VariantValue> From<T> for Variant {
	fn from(value: T) -> Self {
		value.into_variant()
	}
}

impl From<&str> for Variant {
	fn from(value: &str) -> Self {
		Self::Str(value.to_owned())
	}
}

impl Variant {
	/// Tag of the active variant.
	pub fn ty(&self) -> VariantType {
		match self {
			Self::None => VariantType::None,
			Self::Int(_) => VariantType::Int,
			Self::Int64(_) => VariantType::Int64,
			Self::Bool(_) => VariantType::Bool,
			Self::Float(_) => VariantType::Float,
			Self::Vec2(_) => VariantType::Vec2,
			Self::Vec3(_) => VariantType::Vec3,
			Self::Vec4(_) => VariantType::Vec4,
			Self::Color3(_) => VariantType::Color3,
			Self::Color4(_) => VariantType::Color4,
			Self::Angles(_) => VariantType::Angles,
			Self::Quat(_) => VariantType::Quat,
			Self::Mat2(_) => VariantType::Mat2,
			Self::Mat3(_) => VariantType::Mat3,
			Self::Mat3x4(_) => VariantType::Mat3x4,
			Self::Mat4(_) => VariantType::Mat4,
			Self::Point(_) => VariantType::Point,
			Self::Rect(_) => VariantType::Rect,
			Self::Guid(_) => VariantType::Guid,
			Self::Str(_) => VariantType::Str,
			Self::MinMaxCurve(_) => VariantType::MinMaxCurve,
		}
	}

	/// Whether this is the empty cell.
	pub fn is_none(&self) -> bool {
		matches!(self, Self::None)
	}

	/// Type-checked extraction. See [`VariantValue::from_variant`] for the
	/// numeric conversions it performs.
	pub fn get<T: VariantValue>(&self) -> Option<T> {
		T::from_variant(self)
	}

	/// Extraction for callers that know the tag. The empty cell yields
	/// `T::default()`; any other mismatch is a caller bug.
	pub fn get_or_default<T: VariantValue>(&self) -> T {
		match T::from_variant(self) {
			Some(value) => value,
			None => {
				debug_assert!(self.is_none(), "variant holds {}, read as {}", self.ty(), T::TYPE);
				T::default()
			}
		}
	}

	/// Convert to `ty`, or `None` when the value cannot represent it.
	pub fn coerce(&self, ty: VariantType) -> Option<Self> {
		if self.ty() == ty {
			return Some(self.clone());
		}

		match ty {
			VariantType::Int => self.get::<i32>().map(Self::Int),
			VariantType::Int64 => self.get::<i64>().map(Self::Int64),
			VariantType::Bool => self.get::<bool>().map(Self::Bool),
			VariantType::Float => self.get::<f32>().map(Self::Float),
			_ => None,
		}
	}

	/// Clamp every numeric component into `[min, max]`. Integer types use the
	/// bounds truncated toward zero. Non-rangeable types pass through.
	pub fn clamped(self, min: f32, max: f32) -> Self {
		match self {
			Self::Int(v) => Self::Int(clamp_scalar(v, min as i32, max as i32)),
			Self::Int64(v) => Self::Int64(clamp_scalar(v, min as i64, max as i64)),
			Self::Float(v) => Self::Float(clamp_scalar(v, min, max)),
			Self::Vec2(v) => Self::Vec2(clamp_components::<_, 2>(v, min, max)),
			Self::Vec3(v) => Self::Vec3(clamp_components::<_, 3>(v, min, max)),
			Self::Vec4(v) => Self::Vec4(clamp_components::<_, 4>(v, min, max)),
			Self::Color3(v) => Self::Color3(clamp_components::<_, 3>(v, min, max)),
			Self::Color4(v) => Self::Color4(clamp_components::<_, 4>(v, min, max)),
			Self::Angles(v) => Self::Angles(clamp_components::<_, 3>(v, min, max)),
			Self::Point(v) => Self::Point(clamp_components::<_, 2>(v, min, max)),
			Self::Rect(v) => Self::Rect(clamp_components::<_, 4>(v, min, max)),
			other => other,
		}
	}

	/// Canonical text form.
	pub fn to_text(&self) -> String {
		match self {
			Self::None => String::new(),
			Self::Int(v) => v.to_string(),
			Self::Int64(v) => v.to_string(),
			Self::Bool(v) => v.to_string(),
			Self::Float(v) => v.to_string(),
			Self::Vec2(v) => v.to_string(),
			Self::Vec3(v) => v.to_string(),
			Self::Vec4(v) => v.to_string(),
			Self::Color3(v) => v.to_string(),
			Self::Color4(v) => v.to_string(),
			Self::Angles(v) => v.to_string(),
			Self::Quat(v) => v.to_string(),
			Self::Mat2(v) => v.to_string(),
			Self::Mat3(v) => v.to_string(),
			Self::Mat3x4(v) => v.to_string(),
			Self::Mat4(v) => v.to_string(),
			Self::Point(v) => v.to_string(),
			Self::Rect(v) => v.to_string(),
			Self::Guid(v) => v.hyphenated().to_string(),
			Self::Str(v) => v.clone(),
			Self::MinMaxCurve(v) => v.to_string(),
		}
	}

	/// Strict parse of `text` as `ty`. Inverse of [`Variant::to_text`].
	pub fn from_text(ty: VariantType, text: &str) -> Result<Self> {
		Ok(match ty {
			VariantType::None => return Err(PropError::ParseIntoNone),
			VariantType::Int => Self::Int(parse_number(text)?),
			VariantType::Int64 => Self::Int64(parse_number(text)?),
			VariantType::Bool => Self::Bool(parse_bool(text).ok_or_else(|| PropError::InvalidBool { text: text.to_owned() })?),
			VariantType::Float => Self::Float(parse_number(text)?),
			VariantType::Vec2 => Self::Vec2(text.parse()?),
			VariantType::Vec3 => Self::Vec3(text.parse()?),
			VariantType::Vec4 => Self::Vec4(text.parse()?),
			VariantType::Color3 => Self::Color3(text.parse()?),
			VariantType::Color4 => Self::Color4(text.parse()?),
			VariantType::Angles => Self::Angles(text.parse()?),
			VariantType::Quat => Self::Quat(text.parse()?),
			VariantType::Mat2 => Self::Mat2(text.parse()?),
			VariantType::Mat3 => Self::Mat3(text.parse()?),
			VariantType::Mat3x4 => Self::Mat3x4(text.parse()?),
			VariantType::Mat4 => Self::Mat4(text.parse()?),
			VariantType::Point => Self::Point(text.parse()?),
			VariantType::Rect => Self::Rect(text.parse()?),
			VariantType::Guid => Self::Guid(Guid::parse_str(text.trim()).map_err(|source| PropError::InvalidGuid {
				text: text.to_owned(),
				source,
			})?),
			VariantType::Str => Self::Str(text.to_owned()),
			VariantType::MinMaxCurve => Self::MinMaxCurve(text.parse()?),
		})
	}

	/// Lenient parse of `text` as `ty`. Composite values keep the components
	/// that parsed and leave the rest at zero; unparsable scalars and GUIDs
	/// become the zero value.
	pub fn from_text_lenient(ty: VariantType, text: &str) -> Self {
		scan_text(ty, text).0
	}

	/// Tree-native form: numbers and booleans stay native, everything else is
	/// its canonical text. Non-finite floats become `null`.
	pub fn to_json(&self) -> JsonValue {
		match self {
			Self::None => JsonValue::Null,
			Self::Int(v) => JsonValue::from(*v),
			Self::Int64(v) => JsonValue::from(*v),
			Self::Bool(v) => JsonValue::Bool(*v),
			Self::Float(v) => float_json(*v),
			Self::Str(v) => JsonValue::String(v.clone()),
			other => JsonValue::String(other.to_text()),
		}
	}

	/// Convert a tree-native value back into `ty`. Returns `None` when the
	/// JSON kind cannot represent the type.
	pub fn from_json(ty: VariantType, json: &JsonValue) -> Option<Self> {
		from_json_checked(ty, json).map(|(value, _)| value)
	}
}

impl fmt::Display for Variant {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_text())
	}
}

fn parse_number<T: std::str::FromStr>(text: &str) -> Result<T> {
	let trimmed = text.trim();
	trimmed.parse().map_err(|_| PropError::InvalidNumber { text: trimmed.to_owned() })
}

fn parse_bool(text: &str) -> Option<bool> {
	match text.trim() {
		"true" | "1" => Some(true),
		"false" | "0" => Some(false),
		_ => None,
	}
}

fn float_json(value: f32) -> JsonValue {
	// Shortest text form: `0.1_f32` stays `0.1` and reads back as the same `f32`.
	value
		.to_string()
		.parse::<f64>()
		.ok()
		.and_then(serde_json::Number::from_f64)
		.map_or(JsonValue::Null, JsonValue::Number)
}

/// Lenient text parse that also reports whether the text described the
/// value completely.
pub(crate) fn scan_text(ty: VariantType, text: &str) -> (Variant, bool) {
	fn scan_composite<T: crate::prop::math::Components<N>, const N: usize>(text: &str, wrap: fn(T) -> Variant) -> (Variant, bool) {
		let (value, filled) = scan_components::<T, N>(text);
		(wrap(value), filled == N && text.split_whitespace().count() == N)
	}

	fn scan_scalar<T: std::str::FromStr + Default>(text: &str, wrap: fn(T) -> Variant) -> (Variant, bool) {
		match text.trim().parse::<T>() {
			Ok(value) => (wrap(value), true),
			Err(_) => {
				let first = text.split_whitespace().next().and_then(|item| item.parse::<T>().ok());
				(wrap(first.unwrap_or_default()), false)
			}
		}
	}

	match ty {
		VariantType::None => (Variant::None, false),
		VariantType::Int => scan_scalar(text, Variant::Int),
		VariantType::Int64 => scan_scalar(text, Variant::Int64),
		VariantType::Bool => match parse_bool(text) {
			Some(value) => (Variant::Bool(value), true),
			None => (Variant::Bool(false), false),
		},
		VariantType::Float => scan_scalar(text, Variant::Float),
		VariantType::Vec2 => scan_composite::<Vec2, 2>(text, Variant::Vec2),
		VariantType::Vec3 => scan_composite::<Vec3, 3>(text, Variant::Vec3),
		VariantType::Vec4 => scan_composite::<Vec4, 4>(text, Variant::Vec4),
		VariantType::Color3 => scan_composite::<Color3, 3>(text, Variant::Color3),
		VariantType::Color4 => scan_composite::<Color4, 4>(text, Variant::Color4),
		VariantType::Angles => scan_composite::<Angles, 3>(text, Variant::Angles),
		VariantType::Quat => scan_composite::<Quat, 4>(text, Variant::Quat),
		VariantType::Mat2 => scan_composite::<Mat2, 4>(text, Variant::Mat2),
		VariantType::Mat3 => scan_composite::<Mat3, 9>(text, Variant::Mat3),
		VariantType::Mat3x4 => scan_composite::<Mat3x4, 12>(text, Variant::Mat3x4),
		VariantType::Mat4 => scan_composite::<Mat4, 16>(text, Variant::Mat4),
		VariantType::Point => scan_composite::<Point, 2>(text, Variant::Point),
		VariantType::Rect => scan_composite::<Rect, 4>(text, Variant::Rect),
		VariantType::Guid => match Guid::parse_str(text.trim()) {
			Ok(value) => (Variant::Guid(value), true),
			Err(_) => (Variant::Guid(Guid::nil()), false),
		},
		VariantType::Str => (Variant::Str(text.to_owned()), true),
		VariantType::MinMaxCurve => {
			let (curve, complete) = MinMaxCurve::scan(text);
			(Variant::MinMaxCurve(curve), complete)
		}
	}
}

/// Tree-native conversion that also reports whether composite text was
/// complete. `None` means the JSON kind does not fit `ty` at all.
pub(crate) fn from_json_checked(ty: VariantType, json: &JsonValue) -> Option<(Variant, bool)> {
	let value = match ty {
		VariantType::None => return None,
		VariantType::Int => Variant::Int(json.as_i64().map(saturate_i32).or_else(|| json.as_f64().map(|v| v as i32))?),
		VariantType::Int64 => Variant::Int64(json.as_i64().or_else(|| json.as_f64().map(|v| v as i64))?),
		VariantType::Bool => Variant::Bool(match json {
			JsonValue::Bool(v) => *v,
			JsonValue::Number(v) => v.as_f64().is_some_and(|item| item != 0.0),
			_ => return None,
		}),
		VariantType::Float => Variant::Float(json.as_f64()? as f32),
		VariantType::Str => Variant::Str(json.as_str()?.to_owned()),
		_ => return Some(scan_text(ty, json.as_str()?)),
	};
	Some((value, true))
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;
	use crate::prop::curve::{CurveKey, CurveMode};

	fn samples() -> Vec<Variant> {
		vec![
			Variant::Int(-42),
			Variant::Int64(1 << 40),
			Variant::Bool(true),
			Variant::Float(0.1),
			Variant::Vec2(Vec2::new(1.5, -2.0)),
			Variant::Vec3(Vec3::new(1.0, 2.0, 3.0)),
			Variant::Vec4(Vec4::new(0.25, 0.5, 0.75, 1.0)),
			Variant::Color3(Color3::new(1.0, 0.5, 0.0)),
			Variant::Color4(Color4::new(0.2, 0.4, 0.6, 0.8)),
			Variant::Angles(Angles::new(90.0, -45.0, 0.5)),
			Variant::Quat(Quat::IDENTITY),
			Variant::Mat2(Mat2::identity()),
			Variant::Mat3(Angles::new(10.0, 20.0, 30.0).to_mat3()),
			Variant::Mat3x4(Mat3x4::identity()),
			Variant::Mat4(Mat4::identity()),
			Variant::Point(Point::new(-3, 7)),
			Variant::Rect(Rect::new(0, 0, 640, 480)),
			Variant::Guid(Guid::from_u128(0x0123_4567_89ab_cdef_0123_4567_89ab_cdef)),
			Variant::Str("hello world".to_owned()),
			Variant::MinMaxCurve(MinMaxCurve {
				mode: CurveMode::RandomBetweenTwoCurves,
				scalar: 1.5,
				min_curve: vec![CurveKey::new(0.0, 0.0)],
				max_curve: vec![CurveKey::new(0.0, 1.0), CurveKey::new(1.0, 0.5)],
			}),
		]
	}

	#[test]
	fn text_and_json_round_trip_every_type() {
		for value in samples() {
			let parsed = Variant::from_text(value.ty(), &value.to_text()).expect("canonical text parses");
			assert_eq!(parsed, value, "text round trip for {}", value.ty());

			let back = Variant::from_json(value.ty(), &value.to_json()).expect("json form converts back");
			assert_eq!(back, value, "json round trip for {}", value.ty());
		}
	}

	#[test]
	fn json_form_keeps_scalars_native() {
		assert_eq!(Variant::Int(3).to_json(), json!(3));
		assert_eq!(Variant::Bool(false).to_json(), json!(false));
		assert_eq!(Variant::Float(100.0).to_json(), json!(100.0));
		assert_eq!(Variant::Float(0.1).to_json(), json!(0.1));
		assert_eq!(Variant::Vec3(Vec3::ZERO).to_json(), json!("0 0 0"));
		assert_eq!(Variant::Float(f32::NAN).to_json(), JsonValue::Null);
	}

	#[test]
	fn guid_renders_hyphenated() {
		let guid = Guid::from_u128(0x0123_4567_89ab_cdef_0123_4567_89ab_cdef);
		assert_eq!(Variant::Guid(guid).to_text(), "01234567-89ab-cdef-0123-456789abcdef");
	}

	#[test]
	fn numeric_tags_convert_between_each_other() {
		assert_eq!(Variant::Float(7.9).get::<i32>(), Some(7));
		assert_eq!(Variant::Int(150).get::<f32>(), Some(150.0));
		assert_eq!(Variant::Int(2).get::<bool>(), Some(true));
		assert_eq!(Variant::Int(150).coerce(VariantType::Float), Some(Variant::Float(150.0)));
	}

	#[test]
	fn composite_mismatch_is_rejected() {
		assert_eq!(Variant::Vec3(Vec3::ZERO).get::<Vec2>(), None);
		assert_eq!(Variant::Str("1 2".to_owned()).get::<Vec2>(), None);
		assert_eq!(Variant::Float(1.0).coerce(VariantType::Vec3), None);
		assert_eq!(Variant::None.get_or_default::<f32>(), 0.0);
	}

	#[test]
	fn clamp_applies_to_ranged_types_only() {
		assert_eq!(Variant::Float(150.0).clamped(0.0, 100.0), Variant::Float(100.0));
		assert_eq!(Variant::Int(-5).clamped(0.0, 10.0), Variant::Int(0));
		assert_eq!(Variant::Vec2(Vec2::new(-1.0, 0.5)).clamped(0.0, 1.0), Variant::Vec2(Vec2::new(0.0, 0.5)));
		assert_eq!(Variant::Point(Point::new(-9, 9)).clamped(-2.5, 2.5), Variant::Point(Point::new(-2, 2)));
		assert_eq!(Variant::Quat(Quat::new(5.0, 0.0, 0.0, 1.0)).clamped(0.0, 1.0), Variant::Quat(Quat::new(5.0, 0.0, 0.0, 1.0)));
	}

	#[test]
	fn lenient_parse_fills_what_it_can() {
		assert_eq!(Variant::from_text_lenient(VariantType::Vec3, "1 2"), Variant::Vec3(Vec3::new(1.0, 2.0, 0.0)));
		assert_eq!(Variant::from_text_lenient(VariantType::Int, "12 apples"), Variant::Int(12));
		assert_eq!(Variant::from_text_lenient(VariantType::Guid, "nope"), Variant::Guid(Guid::nil()));

		let (_, complete) = scan_text(VariantType::Rect, "1 2 3");
		assert!(!complete);
		let (_, complete) = scan_text(VariantType::Rect, "1 2 3 4");
		assert!(complete);
	}

	#[test]
	fn strict_parse_reports_errors() {
		assert!(matches!(Variant::from_text(VariantType::Bool, "yes"), Err(PropError::InvalidBool { .. })));
		assert!(matches!(Variant::from_text(VariantType::Guid, "nope"), Err(PropError::InvalidGuid { .. })));
		assert!(matches!(Variant::from_text(VariantType::None, ""), Err(PropError::ParseIntoNone)));
		assert!(matches!(Variant::from_text(VariantType::Mat2, "1 2 3"), Err(PropError::ComponentCount { expected: 4, got: 3 })));
	}

	#[test]
	fn json_kind_mismatch_is_none() {
		assert_eq!(Variant::from_json(VariantType::Vec3, &json!(5)), None);
		assert_eq!(Variant::from_json(VariantType::Int, &json!("5")), None);
		assert_eq!(Variant::from_json(VariantType::Bool, &json!(1)), Some(Variant::Bool(true)));
	}

	#[test]
	fn wide_integers_saturate_into_int() {
		assert_eq!(Variant::from_json(VariantType::Int, &json!(3_000_000_000_i64)), Some(Variant::Int(i32::MAX)));
		assert_eq!(Variant::from_json(VariantType::Int, &json!(-3_000_000_000_i64)), Some(Variant::Int(i32::MIN)));
		assert_eq!(Variant::from_json(VariantType::Int, &json!(u64::MAX)), Some(Variant::Int(i32::MAX)));
		assert_eq!(Variant::Int64(1 << 40).coerce(VariantType::Int), Some(Variant::Int(i32::MAX)));
		assert_eq!(Variant::Int64(-7).get::<i32>(), Some(-7));
	}
}
