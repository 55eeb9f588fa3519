use serde_json::Value;

use crate::error::{ArgError, Result};
use crate::value::Scalar;

/// Conversion of a caller-supplied default into a validated optional
/// [`Scalar`].
///
/// Accepts a plain Rust scalar, an already-built [`Scalar`], `()` for "no
/// default", or a [`serde_json::Value`]. The JSON path is the only fallible
/// one: `Null` means "no default", while arrays and objects are rejected
/// with [`ArgError::InvalidDefault`]. Statically typed sources cannot fail.
pub trait IntoDefault {
    fn into_default(self) -> Result<Option<Scalar>>;
}

impl IntoDefault for () {
    fn into_default(self) -> Result<Option<Scalar>> {
        Ok(None)
    }
}

impl IntoDefault for Scalar {
    fn into_default(self) -> Result<Option<Scalar>> {
        Ok(Some(self))
    }
}

impl IntoDefault for Option<Scalar> {
    fn into_default(self) -> Result<Option<Scalar>> {
        Ok(self)
    }
}

impl IntoDefault for bool {
    fn into_default(self) -> Result<Option<Scalar>> {
        Ok(Some(Scalar::Bool(self)))
    }
}

impl IntoDefault for f64 {
    fn into_default(self) -> Result<Option<Scalar>> {
        Ok(Some(Scalar::Num(self)))
    }
}

impl IntoDefault for i64 {
    fn into_default(self) -> Result<Option<Scalar>> {
        Ok(Some(Scalar::Num(self as f64)))
    }
}

impl IntoDefault for i32 {
    fn into_default(self) -> Result<Option<Scalar>> {
        Ok(Some(Scalar::Num(self.into())))
    }
}

impl IntoDefault for u32 {
    fn into_default(self) -> Result<Option<Scalar>> {
        Ok(Some(Scalar::Num(self.into())))
    }
}

impl IntoDefault for &str {
    fn into_default(self) -> Result<Option<Scalar>> {
        Ok(Some(Scalar::Str(self.to_string())))
    }
}

impl IntoDefault for String {
    fn into_default(self) -> Result<Option<Scalar>> {
        Ok(Some(Scalar::Str(self)))
    }
}

impl IntoDefault for Value {
    fn into_default(self) -> Result<Option<Scalar>> {
        match self {
            Value::Null => Ok(None),
            Value::Bool(b) => Ok(Some(Scalar::Bool(b))),
            Value::Number(n) => Ok(n.as_f64().map(Scalar::Num)),
            Value::String(s) => Ok(Some(Scalar::Str(s))),
            Value::Array(_) => Err(ArgError::InvalidDefault { found: "array" }),
            Value::Object(_) => Err(ArgError::InvalidDefault { found: "object" }),
        }
    }
}

impl IntoDefault for &Value {
    fn into_default(self) -> Result<Option<Scalar>> {
        match self {
            Value::Null => Ok(None),
            Value::Bool(b) => Ok(Some(Scalar::Bool(*b))),
            Value::Number(n) => Ok(n.as_f64().map(Scalar::Num)),
            Value::String(s) => Ok(Some(Scalar::Str(s.clone()))),
            Value::Array(_) => Err(ArgError::InvalidDefault { found: "array" }),
            Value::Object(_) => Err(ArgError::InvalidDefault { found: "object" }),
        }
    }
}
