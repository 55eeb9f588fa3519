//! Command-line argument snapshots with typed accessors.
//!
//! This crate turns a raw argument vector into an immutable key/value
//! snapshot, built once and read everywhere. Values are scalars only
//! (text, number, boolean); `--name=value` text goes through permissive
//! numeric and boolean coercion at parse time.
//!
//! Three accessors resolve a name against a caller-supplied default with
//! increasing strictness:
//! - [`ArgSnapshot::permissive`] never fails and never checks types.
//! - [`ArgSnapshot::strict`] validates the default and falls back to it when
//!   the stored value's type disagrees.
//! - [`ArgSnapshot::strict_error`] validates the default and reports a type
//!   disagreement as an error.
//!
//! # Example
//!
//! ```
//! use argsnap::ArgSnapshot;
//!
//! let args = ArgSnapshot::parse(["tool", "--mode=dev", "--count=3", "-qv"]);
//!
//! assert_eq!(args.permissive("mode", "prod"), Some("dev".into()));
//! assert_eq!(args.permissive("count", 0), Some(3.0.into()));
//! assert_eq!(args.permissive("quiet", false), Some(false.into()));
//! assert_eq!(args.permissive("q", false), Some(true.into()));
//! ```

mod default;
mod error;
mod name;
mod snapshot;
mod value;

pub use default::IntoDefault;
pub use error::{ArgError, Result};
pub use name::normalize_name;
pub use snapshot::ArgSnapshot;
pub use value::Scalar;
