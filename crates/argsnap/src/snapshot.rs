use std::env;

use indexmap::IndexMap;
use serde::Serialize;

use crate::default::IntoDefault;
use crate::error::{ArgError, Result};
use crate::name::normalize_name;
use crate::value::Scalar;

/// An immutable snapshot of the argument vector.
///
/// Built once from the raw tokens, then read from any number of call sites
/// through the typed accessors. There is no mutation path after
/// construction, so a snapshot can be shared freely across threads.
///
/// Entries keep the order in which their names first appeared. Serializing a
/// snapshot produces a flat JSON object in that order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ArgSnapshot {
    entries: IndexMap<String, Scalar>,
}

impl ArgSnapshot {
    /// Build a snapshot from an argument vector.
    ///
    /// Two token forms are recognized; everything else is ignored, so the
    /// executable and script-path entries of a real argument vector are
    /// harmless:
    ///
    /// - `--name` or `--name=value`, where `name` is one or more ASCII
    ///   letters, underscores, or hyphens. Without a value the flag is
    ///   boolean `true`; with one, the value text is coerced (`true`/`false`
    ///   literals in any case become booleans, finite decimal forms become
    ///   numbers, an empty or all-whitespace value becomes `0`, anything
    ///   else stays text). The entry is stored under the normalized name.
    /// - `-abc`, a single hyphen followed by lowercase ASCII letters. Each
    ///   letter becomes its own boolean `true` entry.
    ///
    /// A later token with the same normalized name overwrites the earlier
    /// value.
    pub fn parse<I, S>(argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries = IndexMap::new();
        for token in argv {
            let token = token.as_ref();
            if let Some(body) = token.strip_prefix("--") {
                parse_long(&mut entries, token, body);
            } else if let Some(body) = token.strip_prefix('-') {
                parse_short(&mut entries, token, body);
            }
        }
        tracing::debug!("parsed {} argument entries", entries.len());
        Self { entries }
    }

    /// Build a snapshot from the current process arguments.
    ///
    /// Non-Unicode tokens are converted lossily; the replacement character
    /// can never form a recognized flag, so such tokens are ignored.
    pub fn from_env() -> Self {
        Self::parse(env::args_os().map(|arg| arg.to_string_lossy().into_owned()))
    }

    /// Look up a stored value by name, without any default machinery.
    ///
    /// The name is normalized the same way stored names were.
    pub fn get(&self, name: &str) -> Option<&Scalar> {
        self.entries.get(normalize_name(name).as_str())
    }

    /// Resolve `name`, never failing.
    ///
    /// Returns the stored value if present, regardless of its type.
    /// Otherwise returns the default; a default that fails validation is
    /// quietly treated as "no default".
    pub fn permissive<D: IntoDefault>(&self, name: &str, default: D) -> Option<Scalar> {
        let default = match default.into_default() {
            Ok(default) => default,
            Err(_) => None,
        };
        match self.get(name) {
            Some(value) => Some(value.clone()),
            None => default,
        }
    }

    /// Resolve `name`, requiring a valid default.
    ///
    /// An invalid default fails with [`ArgError::InvalidDefault`]. If the
    /// stored value's type differs from a non-unset default's type, the
    /// default is returned in its place; otherwise the stored value wins.
    /// An unset default never enforces matching.
    pub fn strict<D: IntoDefault>(&self, name: &str, default: D) -> Result<Option<Scalar>> {
        let default = default.into_default()?;
        match (self.get(name), default) {
            (Some(value), Some(want)) if !value.same_type(&want) => Ok(Some(want)),
            (Some(value), _) => Ok(Some(value.clone())),
            (None, default) => Ok(default),
        }
    }

    /// Resolve `name`, requiring a valid default and a matching type.
    ///
    /// Same as [`strict`](Self::strict), except a stored value whose type
    /// differs from a non-unset default's type fails with
    /// [`ArgError::TypeMismatch`] instead of being replaced.
    pub fn strict_error<D: IntoDefault>(&self, name: &str, default: D) -> Result<Option<Scalar>> {
        let default = default.into_default()?;
        match (self.get(name), default) {
            (Some(value), Some(want)) if !value.same_type(&want) => Err(ArgError::TypeMismatch {
                name: normalize_name(name),
                expected: want.type_name(),
                found: value.type_name(),
            }),
            (Some(value), _) => Ok(Some(value.clone())),
            (None, default) => Ok(default),
        }
    }

    /// Iterate over entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Scalar)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn parse_long(entries: &mut IndexMap<String, Scalar>, token: &str, body: &str) {
    let (name, value) = match body.split_once('=') {
        Some((name, value)) => (name, Some(value)),
        None => (body, None),
    };
    if name.is_empty() || !name.bytes().all(is_long_name_byte) {
        tracing::trace!("ignoring malformed long flag: {token}");
        return;
    }
    let key = normalize_name(name);
    if key.is_empty() {
        tracing::trace!("ignoring flag whose name normalizes to nothing: {token}");
        return;
    }
    let value = match value {
        Some(raw) => coerce_value(raw),
        None => Scalar::Bool(true),
    };
    entries.insert(key, value);
}

fn is_long_name_byte(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b == b'-'
}

fn parse_short(entries: &mut IndexMap<String, Scalar>, token: &str, body: &str) {
    if body.is_empty() || !body.bytes().all(|b| b.is_ascii_lowercase()) {
        tracing::trace!("ignoring malformed short flag: {token}");
        return;
    }
    for letter in body.chars() {
        entries.insert(letter.to_string(), Scalar::Bool(true));
    }
}

/// Coerce a raw `--name=value` text into a typed scalar.
///
/// Exact `true`/`false` literals (any case, no surrounding whitespace) become
/// booleans. Otherwise the trimmed text is read as a number, with empty text
/// counting as `0`. Anything that is not a finite number keeps the original
/// text untouched.
fn coerce_value(raw: &str) -> Scalar {
    if raw.eq_ignore_ascii_case("true") {
        return Scalar::Bool(true);
    }
    if raw.eq_ignore_ascii_case("false") {
        return Scalar::Bool(false);
    }
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Scalar::Num(0.0);
    }
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() => Scalar::Num(n),
        _ => Scalar::Str(raw.to_string()),
    }
}
