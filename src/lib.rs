//! Reflection-driven property system.
//!
//! Host types describe their state as a static list of typed property
//! descriptors; generic code reads, writes, resizes, and serializes those
//! properties by name or index without knowing the concrete type.

/// Variant values, property descriptors, hosts, and the JSON document codec.
pub mod prop;
