//! Plain component types for vector, color, angle, matrix, point, and rect values.
//!
//! These own the property system's text layout: canonical
//! whitespace-separated components in row-major order, strict parsing, and
//! lenient scanning. Rotation math goes through `glam`; the `From`
//! conversions transpose matrices to and from its column-major storage.

use std::fmt;
use std::str::FromStr;

use glam::EulerRot;

use crate::prop::{PropError, Result};

/// Scalar component of a composite value.
pub trait Scalar: Copy + Default + PartialOrd + fmt::Display + FromStr {
	/// Convert a descriptor range bound into this scalar type.
	fn from_bound(bound: f32) -> Self;
}

impl Scalar for f32 {
	fn from_bound(bound: f32) -> Self {
		bound
	}
}

impl Scalar for i32 {
	fn from_bound(bound: f32) -> Self {
		bound as i32
	}
}

/// Fixed list of scalar components in canonical text order.
pub trait Components<const N: usize>: Copy + Default {
	/// Component scalar type.
	type Scalar: Scalar;

	/// Flatten into components.
	fn to_components(self) -> [Self::Scalar; N];

	/// Rebuild from components.
	fn from_components(components: [Self::Scalar; N]) -> Self;
}

/// Clamp `value` into `[lo, hi]`.
pub(crate) fn clamp_scalar<S: PartialOrd>(value: S, lo: S, hi: S) -> S {
	if value < lo {
		lo
	} else if value > hi {
		hi
	} else {
		value
	}
}

/// Clamp every component of `value` into `[min, max]`.
pub(crate) fn clamp_components<T: Components<N>, const N: usize>(value: T, min: f32, max: f32) -> T {
	let lo = T::Scalar::from_bound(min);
	let hi = T::Scalar::from_bound(max);
	T::from_components(value.to_components().map(|item| clamp_scalar(item, lo, hi)))
}

/// Parse exactly `N` whitespace-separated components.
pub(crate) fn parse_components<T: Components<N>, const N: usize>(text: &str) -> Result<T> {
	let got = text.split_whitespace().count();
	if got != N {
		return Err(PropError::ComponentCount { expected: N, got });
	}

	let mut out = T::default().to_components();
	for (slot, token) in out.iter_mut().zip(text.split_whitespace()) {
		*slot = token.parse().map_err(|_| PropError::InvalidNumber { text: token.to_owned() })?;
	}
	Ok(T::from_components(out))
}

/// Scan up to `N` leading components, stopping at the first token that does
/// not parse. Unfilled components keep their default. Returns the value and
/// the number of components filled.
pub(crate) fn scan_components<T: Components<N>, const N: usize>(text: &str) -> (T, usize) {
	let mut out = T::default().to_components();
	let mut filled = 0;
	for (slot, token) in out.iter_mut().zip(text.split_whitespace()) {
		match token.parse() {
			Ok(item) => {
				*slot = item;
				filled += 1;
			}
			Err(_) => break,
		}
	}
	(T::from_components(out), filled)
}

fn write_components<T: Components<N>, const N: usize>(value: T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
	for (idx, item) in value.to_components().iter().enumerate() {
		if idx > 0 {
			f.write_str(" ")?;
		}
		write!(f, "{item}")?;
	}
	Ok(())
}

macro_rules! text_components {
	($name:ident, $n:literal) => {
		impl fmt::Display for $name {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				write_components::<Self, $n>(*self, f)
			}
		}

		impl FromStr for $name {
			type Err = PropError;

			fn from_str(text: &str) -> Result<Self> {
				parse_components::<Self, $n>(text)
			}
		}
	};
}

macro_rules! vector_type {
	($(#[$meta:meta])* $name:ident, $scalar:ty, $n:literal, [$($field:ident),+]) => {
		$(#[$meta])*
		#[derive(Debug, Clone, Copy, PartialEq, Default)]
		pub struct $name {
			$(
				#[doc = concat!("`", stringify!($field), "` component.")]
				pub $field: $scalar,
			)+
		}

		impl $name {
			/// Construct from components.
			pub const fn new($($field: $scalar),+) -> Self {
				Self { $($field),+ }
			}
		}

		impl Components<$n> for $name {
			type Scalar = $scalar;

			fn to_components(self) -> [$scalar; $n] {
				[$(self.$field),+]
			}

			fn from_components(components: [$scalar; $n]) -> Self {
				let [$($field),+] = components;
				Self { $($field),+ }
			}
		}

		text_components!($name, $n);
	};
}

macro_rules! matrix_type {
	($(#[$meta:meta])* $name:ident, $row:ident, $rows:literal, $cols:literal, $n:literal) => {
		$(#[$meta])*
		#[derive(Debug, Clone, Copy, PartialEq, Default)]
		pub struct $name {
			/// Rows, top to bottom.
			pub rows: [$row; $rows],
		}

		impl $name {
			/// Construct from rows.
			pub const fn new(rows: [$row; $rows]) -> Self {
				Self { rows }
			}

			/// Ones on the leading diagonal, zeros elsewhere.
			pub fn identity() -> Self {
				let mut components = [0.0; $n];
				for idx in 0..$rows {
					components[idx * $cols + idx] = 1.0;
				}
				Self::from_components(components)
			}
		}

		impl Components<$n> for $name {
			type Scalar = f32;

			fn to_components(self) -> [f32; $n] {
				let mut out = [0.0; $n];
				for (r, row) in self.rows.iter().enumerate() {
					for (c, item) in row.to_components().into_iter().enumerate() {
						out[r * $cols + c] = item;
					}
				}
				out
			}

			fn from_components(components: [f32; $n]) -> Self {
				let mut rows = [$row::default(); $rows];
				for (r, row) in rows.iter_mut().enumerate() {
					let mut items = [0.0; $cols];
					items.copy_from_slice(&components[r * $cols..(r + 1) * $cols]);
					*row = $row::from_components(items);
				}
				Self { rows }
			}
		}

		text_components!($name, $n);
	};
}

vector_type!(
	/// Two-component float vector.
	Vec2, f32, 2, [x, y]
);
vector_type!(
	/// Three-component float vector.
	Vec3, f32, 3, [x, y, z]
);
vector_type!(
	/// Four-component float vector.
	Vec4, f32, 4, [x, y, z, w]
);
vector_type!(
	/// RGB color with float channels.
	Color3, f32, 3, [r, g, b]
);
vector_type!(
	/// RGBA color with float channels.
	Color4, f32, 4, [r, g, b, a]
);
vector_type!(
	/// Euler angles in degrees.
	Angles, f32, 3, [yaw, pitch, roll]
);
vector_type!(
	/// Rotation quaternion.
	Quat, f32, 4, [x, y, z, w]
);
vector_type!(
	/// Integer point.
	Point, i32, 2, [x, y]
);
vector_type!(
	/// Integer rectangle: origin plus size.
	Rect, i32, 4, [x, y, w, h]
);

matrix_type!(
	/// 2x2 row-major matrix.
	Mat2, Vec2, 2, 2, 4
);
matrix_type!(
	/// 3x3 row-major matrix.
	Mat3, Vec3, 3, 3, 9
);
matrix_type!(
	/// 3x4 row-major affine matrix.
	Mat3x4, Vec4, 3, 4, 12
);
matrix_type!(
	/// 4x4 row-major matrix.
	Mat4, Vec4, 4, 4, 16
);

impl Vec3 {
	/// All components zero.
	pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
}

impl Quat {
	/// No rotation.
	pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);
}

impl Color3 {
	/// Opaque white.
	pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);
	/// Black.
	pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
}

impl Color4 {
	/// Opaque white.
	pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
	/// Opaque black.
	pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
	/// Fully transparent black.
	pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

	/// Build from 8-bit channels.
	pub fn from_rgba8888(r: u8, g: u8, b: u8, a: u8) -> Self {
		Self::new(f32::from(r) / 255.0, f32::from(g) / 255.0, f32::from(b) / 255.0, f32::from(a) / 255.0)
	}
}

macro_rules! glam_vector {
	($name:ident, $glam:ty, [$($field:ident),+]) => {
		impl From<$name> for $glam {
			fn from(value: $name) -> Self {
				Self::new($(value.$field),+)
			}
		}

		impl From<$glam> for $name {
			fn from(value: $glam) -> Self {
				Self::new($(value.$field),+)
			}
		}
	};
}

// Local matrices are row-major; glam stores columns, so both directions transpose.
macro_rules! glam_matrix {
	($name:ident, $glam:ty) => {
		impl From<$name> for $glam {
			fn from(value: $name) -> Self {
				<$glam>::from_cols_array(&value.to_components()).transpose()
			}
		}

		impl From<$glam> for $name {
			fn from(value: $glam) -> Self {
				Self::from_components(value.transpose().to_cols_array())
			}
		}
	};
}

glam_vector!(Vec2, glam::Vec2, [x, y]);
glam_vector!(Vec3, glam::Vec3, [x, y, z]);
glam_vector!(Vec4, glam::Vec4, [x, y, z, w]);
glam_matrix!(Mat2, glam::Mat2);
glam_matrix!(Mat3, glam::Mat3);
glam_matrix!(Mat4, glam::Mat4);

impl From<Quat> for glam::Quat {
	fn from(value: Quat) -> Self {
		Self::from_xyzw(value.x, value.y, value.z, value.w)
	}
}

impl From<glam::Quat> for Quat {
	fn from(value: glam::Quat) -> Self {
		Self::new(value.x, value.y, value.z, value.w)
	}
}

impl Angles {
	fn to_radians(self) -> (f32, f32, f32) {
		(self.yaw.to_radians(), self.pitch.to_radians(), self.roll.to_radians())
	}

	fn from_radians((yaw, pitch, roll): (f32, f32, f32)) -> Self {
		// `+ 0.0` folds negative zero so identity reads back as `0 0 0`.
		Self::new(yaw.to_degrees() + 0.0, pitch.to_degrees() + 0.0, roll.to_degrees() + 0.0)
	}

	/// Rotation matrix for yaw (about z), then pitch (about y), then roll
	/// (about x). Each row holds one rotated axis.
	pub fn to_mat3(self) -> Mat3 {
		let (yaw, pitch, roll) = self.to_radians();
		Mat3::from(glam::Mat3::from_euler(EulerRot::ZYX, yaw, pitch, roll).transpose())
	}

	/// Same rotation as [`Angles::to_mat3`], as a quaternion.
	pub fn to_quat(self) -> Quat {
		let (yaw, pitch, roll) = self.to_radians();
		Quat::from(glam::Quat::from_euler(EulerRot::ZYX, yaw, pitch, roll))
	}
}

impl Mat3 {
	/// Recover Euler angles from a rotation matrix built by [`Angles::to_mat3`].
	pub fn to_angles(self) -> Angles {
		let rotation = glam::Mat3::from(self).transpose();
		Angles::from_radians(glam::Quat::from_mat3(&rotation).to_euler(EulerRot::ZYX))
	}
}

impl Quat {
	/// Euler angles of this rotation.
	pub fn to_angles(self) -> Angles {
		let rotation = glam::Quat::from(self);
		let rotation = if rotation.length_squared() > 0.0 { rotation.normalize() } else { glam::Quat::IDENTITY };
		Angles::from_radians(rotation.to_euler(EulerRot::ZYX))
	}
}
