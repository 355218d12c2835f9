use std::fmt;
use std::str::FromStr;

use crate::prop::math::clamp_scalar;
use crate::prop::{PropError, Result};

/// How a [`MinMaxCurve`] produces its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CurveMode {
	/// Always `scalar`.
	#[default]
	Constant,
	/// `scalar` times the max curve.
	Curve,
	/// Random blend between `scalar` times the first key value of each curve.
	RandomBetweenTwoConstants,
	/// Random blend between the min and max curves, times `scalar`.
	RandomBetweenTwoCurves,
}

impl CurveMode {
	/// Numeric index used by the text form.
	pub fn index(self) -> i32 {
		match self {
			Self::Constant => 0,
			Self::Curve => 1,
			Self::RandomBetweenTwoConstants => 2,
			Self::RandomBetweenTwoCurves => 3,
		}
	}

	/// Inverse of [`CurveMode::index`].
	pub fn from_index(mode: i32) -> Option<Self> {
		match mode {
			0 => Some(Self::Constant),
			1 => Some(Self::Curve),
			2 => Some(Self::RandomBetweenTwoConstants),
			3 => Some(Self::RandomBetweenTwoCurves),
			_ => None,
		}
	}
}

/// One curve key.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CurveKey {
	/// Normalized time in `[0, 1]`.
	pub time: f32,
	/// Value at `time`.
	pub value: f32,
}

impl CurveKey {
	/// Construct a key.
	pub const fn new(time: f32, value: f32) -> Self {
		Self { time, value }
	}
}

/// Scalar animation value driven by a constant, a curve, or a random pick
/// between two of either.
///
/// Text form: `mode scalar n_min (time value)* n_max (time value)*`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MinMaxCurve {
	/// Evaluation mode.
	pub mode: CurveMode,
	/// Multiplier applied to every mode.
	pub scalar: f32,
	/// Lower curve, keys sorted by time.
	pub min_curve: Vec<CurveKey>,
	/// Upper curve, keys sorted by time.
	pub max_curve: Vec<CurveKey>,
}

impl MinMaxCurve {
	/// Constant curve.
	pub fn constant(scalar: f32) -> Self {
		Self {
			scalar,
			..Self::default()
		}
	}

	/// Evaluate at `time` with `blend` in `[0, 1]` picking between min and max.
	pub fn evaluate(&self, time: f32, blend: f32) -> f32 {
		match self.mode {
			CurveMode::Constant => self.scalar,
			CurveMode::Curve => self.scalar * sample(&self.max_curve, time),
			CurveMode::RandomBetweenTwoConstants => {
				let lo = self.min_curve.first().map_or(0.0, |key| key.value);
				let hi = self.max_curve.first().map_or(0.0, |key| key.value);
				self.scalar * lerp(lo, hi, blend)
			}
			CurveMode::RandomBetweenTwoCurves => self.scalar * lerp(sample(&self.min_curve, time), sample(&self.max_curve, time), blend),
		}
	}

	/// Lenient parse: stops at the first malformed token and keeps what was
	/// read so far. Returns the curve and whether the whole text was consumed.
	pub(crate) fn scan(text: &str) -> (Self, bool) {
		let mut tokens = text.split_whitespace();
		let mut out = Self::default();

		let Some(mode) = tokens.next().and_then(|item| item.parse::<i32>().ok()).and_then(CurveMode::from_index) else {
			return (out, false);
		};
		out.mode = mode;

		let Some(scalar) = tokens.next().and_then(|item| item.parse::<f32>().ok()) else {
			return (out, false);
		};
		out.scalar = scalar;

		if !scan_keys(&mut tokens, &mut out.min_curve) || !scan_keys(&mut tokens, &mut out.max_curve) {
			return (out, false);
		}

		let complete = tokens.next().is_none();
		(out, complete)
	}
}

fn scan_keys<'a>(tokens: &mut impl Iterator<Item = &'a str>, out: &mut Vec<CurveKey>) -> bool {
	let Some(count) = tokens.next().and_then(|item| item.parse::<usize>().ok()) else {
		return false;
	};
	for _ in 0..count {
		let time = tokens.next().and_then(|item| item.parse::<f32>().ok());
		let value = tokens.next().and_then(|item| item.parse::<f32>().ok());
		match (time, value) {
			(Some(time), Some(value)) => out.push(CurveKey { time, value }),
			_ => return false,
		}
	}
	true
}

fn sample(keys: &[CurveKey], time: f32) -> f32 {
	let (Some(first), Some(last)) = (keys.first(), keys.last()) else {
		return 0.0;
	};
	if time <= first.time {
		return first.value;
	}
	if time >= last.time {
		return last.value;
	}

	for pair in keys.windows(2) {
		let (a, b) = (pair[0], pair[1]);
		if time <= b.time {
			let span = b.time - a.time;
			if span <= 0.0 {
				return b.value;
			}
			return lerp(a.value, b.value, (time - a.time) / span);
		}
	}
	last.value
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
	a + (b - a) * clamp_scalar(t, 0.0, 1.0)
}

impl fmt::Display for MinMaxCurve {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} {}", self.mode.index(), self.scalar)?;
		for keys in [&self.min_curve, &self.max_curve] {
			write!(f, " {}", keys.len())?;
			for key in keys {
				write!(f, " {} {}", key.time, key.value)?;
			}
		}
		Ok(())
	}
}

impl FromStr for MinMaxCurve {
	type Err = PropError;

	fn from_str(text: &str) -> Result<Self> {
		let mut tokens = text.split_whitespace();
		let mode = next_number::<i32>(&mut tokens)?;
		let mode = CurveMode::from_index(mode).ok_or(PropError::InvalidCurveMode { mode })?;
		let scalar = next_number::<f32>(&mut tokens)?;
		let min_curve = parse_keys(&mut tokens)?;
		let max_curve = parse_keys(&mut tokens)?;

		let extra = tokens.count();
		if extra > 0 {
			let expected = text.split_whitespace().count() - extra;
			return Err(PropError::ComponentCount {
				expected,
				got: expected + extra,
			});
		}

		Ok(Self {
			mode,
			scalar,
			min_curve,
			max_curve,
		})
	}
}

fn next_number<'a, T: FromStr>(tokens: &mut impl Iterator<Item = &'a str>) -> Result<T> {
	let token = tokens.next().ok_or(PropError::InvalidNumber { text: String::new() })?;
	token.parse().map_err(|_| PropError::InvalidNumber { text: token.to_owned() })
}

fn parse_keys<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> Result<Vec<CurveKey>> {
	let count = next_number::<usize>(tokens)?;
	let mut keys = Vec::with_capacity(count.min(256));
	for _ in 0..count {
		let time = next_number::<f32>(tokens)?;
		let value = next_number::<f32>(tokens)?;
		keys.push(CurveKey { time, value });
	}
	Ok(keys)
}
