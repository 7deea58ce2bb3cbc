use std::collections::HashMap;

use bigdecimal::{BigDecimal, RoundingMode};
use num_bigint::BigInt;

use crate::error::Error;
use crate::types::{BindVariable, BoundQuery, FieldType, TypedValue};

/// MySQL's decimal scale ceiling. Fractional digits beyond this are
/// rounded half-up before encoding.
pub const MAX_DECIMAL_SCALE: i64 = 30;

/// A host value in one of the closed set of encodable kinds.
///
/// Narrower host types widen losslessly into these variants through the
/// `From` impls below (`i8`/`i16`/`i32` into `Int`, `f32` into `Float`).
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Text(String),
    Bytes(Vec<u8>),
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
    /// Integers that may exceed the 64-bit range; encoded as text.
    BigInt(BigInt),
    Decimal(BigDecimal),
    /// An already-encoded protocol value, passed through unchanged.
    Typed(TypedValue),
}

/// A bind value: a single scalar or a flat sequence of scalars.
///
/// The two-variant shape makes nested sequences unrepresentable; the
/// protocol has no recursive tuple type.
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    Scalar(Scalar),
    List(Vec<Scalar>),
}

impl From<i8> for Scalar {
    fn from(v: i8) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<i16> for Scalar {
    fn from(v: i16) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<u64> for Scalar {
    fn from(v: u64) -> Self {
        Self::Uint(v)
    }
}

/// Goes through the f32's own decimal rendering rather than a plain
/// widening cast, so `0.1_f32` encodes as `"0.1"` and not the longer
/// f64 rendering of the widened value.
impl From<f32> for Scalar {
    fn from(v: f32) -> Self {
        Self::Float(v.to_string().parse().unwrap_or_else(|_| f64::from(v)))
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<Vec<u8>> for Scalar {
    fn from(v: Vec<u8>) -> Self {
        Self::Bytes(v)
    }
}

impl From<&[u8]> for Scalar {
    fn from(v: &[u8]) -> Self {
        Self::Bytes(v.to_vec())
    }
}

impl From<BigInt> for Scalar {
    fn from(v: BigInt) -> Self {
        Self::BigInt(v)
    }
}

impl From<BigDecimal> for Scalar {
    fn from(v: BigDecimal) -> Self {
        Self::Decimal(v)
    }
}

impl From<TypedValue> for Scalar {
    fn from(v: TypedValue) -> Self {
        Self::Typed(v)
    }
}

/// Every host representation of "no value" encodes as `Null`.
impl<T: Into<Scalar>> From<Option<T>> for Scalar {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Self::Null,
        }
    }
}

impl From<Scalar> for BindValue {
    fn from(v: Scalar) -> Self {
        Self::Scalar(v)
    }
}

impl From<Vec<Scalar>> for BindValue {
    fn from(v: Vec<Scalar>) -> Self {
        Self::List(v)
    }
}

impl BindValue {
    /// Builds a bind value from an untyped JSON value, for callers that
    /// hold dynamic data rather than the `Scalar` sum type.
    ///
    /// Null, booleans, strings, numbers and flat arrays map onto their
    /// scalar kinds; any other shape fails with
    /// [`Error::UnsupportedValueKind`] naming the offending kind.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, Error> {
        match value {
            serde_json::Value::Array(items) => {
                let mut scalars = Vec::with_capacity(items.len());
                for item in items {
                    scalars.push(scalar_from_json(item)?);
                }
                Ok(Self::List(scalars))
            }
            other => Ok(Self::Scalar(scalar_from_json(other)?)),
        }
    }
}

fn scalar_from_json(value: &serde_json::Value) -> Result<Scalar, Error> {
    match value {
        serde_json::Value::Null => Ok(Scalar::Null),
        serde_json::Value::Bool(b) => Ok(Scalar::Bool(*b)),
        serde_json::Value::String(s) => Ok(Scalar::Text(s.clone())),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Scalar::Int(i))
            } else if let Some(u) = n.as_u64() {
                Ok(Scalar::Uint(u))
            } else if let Some(f) = n.as_f64() {
                Ok(Scalar::Float(f))
            } else {
                Err(Error::UnsupportedValueKind {
                    kind: format!("number {n}"),
                })
            }
        }
        serde_json::Value::Array(_) => Err(Error::UnsupportedValueKind {
            kind: "nested array".to_string(),
        }),
        serde_json::Value::Object(_) => Err(Error::UnsupportedValueKind {
            kind: "object".to_string(),
        }),
    }
}

/// Encodes one scalar into its wire-level (type tag, payload) pair.
///
/// The dispatch is total over the closed [`Scalar`] set; the same input
/// always yields the same pair.
pub fn encode_scalar(value: &Scalar) -> TypedValue {
    match value {
        Scalar::Null => TypedValue::null(),
        Scalar::Text(s) => TypedValue::new(FieldType::Varchar, s.as_bytes()),
        Scalar::Bytes(b) => TypedValue::new(FieldType::Varbinary, b.clone()),
        Scalar::Int(i) => TypedValue::new(FieldType::Int64, i.to_string()),
        Scalar::Uint(u) => TypedValue::new(FieldType::Uint64, u.to_string()),
        Scalar::Float(f) => TypedValue::new(FieldType::Float64, f.to_string()),
        // The protocol has no boolean type; booleans go over the wire
        // as INT64 1/0.
        Scalar::Bool(b) => TypedValue::new(FieldType::Int64, if *b { "1" } else { "0" }),
        // May exceed the 64-bit range, so encoded as text rather than
        // INT64 to avoid silent truncation.
        Scalar::BigInt(i) => TypedValue::new(FieldType::Varchar, i.to_string()),
        Scalar::Decimal(d) => {
            let d = if d.fractional_digit_count() > MAX_DECIMAL_SCALE {
                d.with_scale_round(MAX_DECIMAL_SCALE, RoundingMode::HalfUp)
            } else {
                d.clone()
            };
            TypedValue::new(FieldType::Decimal, d.to_plain_string())
        }
        Scalar::Typed(tv) => tv.clone(),
    }
}

/// Encodes a bind value into its protocol bind slot.
///
/// List elements are encoded independently and collected as a tuple;
/// an empty list fails with [`Error::EmptyListBindVariable`] before any
/// RPC is attempted.
pub fn build_bind_variable(value: &BindValue) -> Result<BindVariable, Error> {
    match value {
        BindValue::Scalar(scalar) => Ok(BindVariable::Single(encode_scalar(scalar))),
        BindValue::List(items) => {
            if items.is_empty() {
                return Err(Error::EmptyListBindVariable);
            }
            Ok(BindVariable::Tuple(items.iter().map(encode_scalar).collect()))
        }
    }
}

/// Creates a [`BoundQuery`] from a query string and its bind values.
///
/// `None` vars produce an empty bind-variable map.
pub fn bind_query(
    sql: impl Into<String>,
    vars: Option<HashMap<String, BindValue>>,
) -> Result<BoundQuery, Error> {
    let mut bind_variables = HashMap::new();
    if let Some(vars) = vars {
        for (name, value) in vars {
            bind_variables.insert(name, build_bind_variable(&value)?);
        }
    }
    Ok(BoundQuery {
        sql: sql.into(),
        bind_variables,
    })
}
