use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, PropError>;

/// Errors produced while parsing property text and loading property documents.
///
/// The host get/set contract never returns these; it logs and hands back a
/// sentinel instead. `PropError` covers the text, document, and CLI paths.
#[derive(Debug, Error)]
pub enum PropError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Document text is not valid JSON.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// A numeric component failed to parse.
	#[error("invalid number {text:?}")]
	InvalidNumber {
		/// Offending token.
		text: String,
	},
	/// Composite text had the wrong number of components.
	#[error("expected {expected} components, got {got}")]
	ComponentCount {
		/// Component count required by the type.
		expected: usize,
		/// Component count found in the text.
		got: usize,
	},
	/// Boolean text was neither `true`/`false` nor `1`/`0`.
	#[error("invalid bool {text:?}")]
	InvalidBool {
		/// Offending text.
		text: String,
	},
	/// GUID text did not parse.
	#[error("invalid guid {text:?}: {source}")]
	InvalidGuid {
		/// Offending text.
		text: String,
		/// Underlying parser error.
		source: uuid::Error,
	},
	/// Curve mode index out of range.
	#[error("invalid curve mode {mode}")]
	InvalidCurveMode {
		/// Parsed mode index.
		mode: i32,
	},
	/// The empty value cell has no text form to parse into.
	#[error("cannot parse text into an empty value")]
	ParseIntoNone,
	/// Strict load found text that does not fully describe a value.
	#[error("malformed {type_name} text for property {property}: {text:?}")]
	MalformedText {
		/// Property being loaded.
		property: String,
		/// Expected value type.
		type_name: &'static str,
		/// Offending document text.
		text: String,
	},
	/// Incoming array exceeded the configured element limit.
	#[error("array property {property} too large: count={count}, max={max}")]
	ArrayTooLarge {
		/// Property being loaded.
		property: String,
		/// Incoming element count.
		count: usize,
		/// Configured maximum.
		max: usize,
	},
	/// Document root is not a JSON object.
	#[error("document root must be an object, got {got}")]
	NotAnObject {
		/// JSON kind found at the root.
		got: &'static str,
	},
	/// Requested property does not exist on the host.
	#[error("unknown property {name}")]
	UnknownProperty {
		/// Requested name.
		name: String,
	},
	/// `name=value` assignment syntax is invalid.
	#[error("invalid assignment {text:?} (expected name=value)")]
	InvalidAssignment {
		/// User-provided text.
		text: String,
	},
	/// Write rejected by the host.
	#[error("property {name} rejected the write")]
	WriteRejected {
		/// Property name.
		name: String,
	},
}
