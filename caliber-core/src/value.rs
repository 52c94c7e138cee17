use crate::{Error, Result, separated_by, write_number};
use rust_decimal::{Decimal, prelude::ToPrimitive};
use std::{
    any::{self, Any},
    collections::BTreeMap,
    fmt::{self, Write},
    sync::Arc,
};
use time::OffsetDateTime;

/// Loosely typed application value flowing through the data types.
///
/// The variants mirror the shapes an application can hand in (or a driver can
/// hand back): sanitizers normalize between them, validators decide which of
/// them a type accepts.
#[derive(Default, Debug, Clone)]
pub enum Value {
    #[default]
    Null,
    Boolean(bool),
    /// Host number, integral values beyond 2^53 lose precision here.
    Number(f64),
    /// Native big integer.
    BigInt(i128),
    Decimal(Decimal),
    String(String),
    Bytes(Box<[u8]>),
    Timestamp(OffsetDateTime),
    Array(Vec<Value>),
    Map(BTreeMap<String, Value>),
    /// The "current timestamp" default marker.
    Now,
    /// Handle to a large binary object that can only be read asynchronously.
    LargeObject(u64),
    /// Value owned by a foreign library (for example a calendar type).
    Foreign(Foreign),
}

/// Opaque value coming from a library this crate does not know about.
///
/// Recognized only through an injected capability, see [`crate::Calendar`].
#[derive(Clone)]
pub struct Foreign {
    type_name: &'static str,
    value: Arc<dyn Any + Send + Sync>,
}

impl Foreign {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            type_name: any::type_name::<T>(),
            value: Arc::new(value),
        }
    }
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }
}

impl fmt::Debug for Foreign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Foreign({})", self.type_name)
    }
}

impl PartialEq for Foreign {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.value, &other.value)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Boolean(l), Self::Boolean(r)) => l == r,
            // Deep equality: NaN equals itself
            (Self::Number(l), Self::Number(r)) => l == r || (l.is_nan() && r.is_nan()),
            (Self::BigInt(l), Self::BigInt(r)) => l == r,
            (Self::Decimal(l), Self::Decimal(r)) => l == r,
            (Self::String(l), Self::String(r)) => l == r,
            (Self::Bytes(l), Self::Bytes(r)) => l == r,
            (Self::Timestamp(l), Self::Timestamp(r)) => l == r,
            (Self::Array(l), Self::Array(r)) => l == r,
            (Self::Map(l), Self::Map(r)) => l == r,
            (Self::LargeObject(l), Self::LargeObject(r)) => l == r,
            (Self::Foreign(l), Self::Foreign(r)) => l == r,
            _ => core::mem::discriminant(self) == core::mem::discriminant(other),
        }
    }
}

impl Value {
    /// Build a mapping from key/value pairs.
    pub fn map<K: Into<String>, V: Into<Value>>(entries: impl IntoIterator<Item = (K, V)>) -> Self {
        Value::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Build a sequence from anything convertible into values.
    pub fn array<V: Into<Value>>(values: impl IntoIterator<Item = V>) -> Self {
        Value::Array(values.into_iter().map(Into::into).collect())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Null, false, zero, NaN and the empty string.
    pub fn is_falsy(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Boolean(v) => !v,
            Value::Number(v) => *v == 0.0 || v.is_nan(),
            Value::BigInt(v) => *v == 0,
            Value::String(v) => v.is_empty(),
            _ => false,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v),
            _ => None,
        }
    }

    /// Short name of the shape, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(..) => "boolean",
            Value::Number(..) => "number",
            Value::BigInt(..) => "bigint",
            Value::Decimal(..) => "decimal",
            Value::String(..) => "string",
            Value::Bytes(..) => "bytes",
            Value::Timestamp(..) => "timestamp",
            Value::Array(..) => "array",
            Value::Map(..) => "map",
            Value::Now => "now",
            Value::LargeObject(..) => "large object",
            Value::Foreign(..) => "foreign",
        }
    }

    /// Converts into JSON, failing on shapes JSON cannot represent.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        use serde_json::Value as Json;
        Ok(match self {
            Value::Null => Json::Null,
            Value::Boolean(v) => Json::Bool(*v),
            Value::Number(v) if crate::is_safe_integer(*v) => Json::Number((*v as i64).into()),
            Value::Number(v) => serde_json::Number::from_f64(*v)
                .map(Json::Number)
                .unwrap_or(Json::Null),
            Value::BigInt(v) => {
                if let Ok(v) = i64::try_from(*v) {
                    Json::Number(v.into())
                } else if let Ok(v) = u64::try_from(*v) {
                    Json::Number(v.into())
                } else {
                    return Err(Error::msg(format!(
                        "Big integer {v} does not fit into a JSON number"
                    )));
                }
            }
            Value::Decimal(v) => match v.to_f64().and_then(serde_json::Number::from_f64) {
                Some(n) => Json::Number(n),
                None => Json::String(v.to_string()),
            },
            Value::String(v) => Json::String(v.clone()),
            Value::Timestamp(v) => Json::String(
                v.format(&time::format_description::well_known::Rfc3339)
                    .map_err(Error::new)?,
            ),
            Value::Array(v) => Json::Array(v.iter().map(Value::to_json).collect::<Result<_>>()?),
            Value::Map(v) => Json::Object(
                v.iter()
                    .map(|(k, v)| Ok((k.clone(), v.to_json()?)))
                    .collect::<Result<_>>()?,
            ),
            Value::Bytes(..) | Value::Now | Value::LargeObject(..) | Value::Foreign(..) => {
                return Err(Error::msg(format!(
                    "A {} value cannot be represented as JSON",
                    self.kind_name()
                )));
            }
        })
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value as Json;
        match value {
            Json::Null => Value::Null,
            Json::Bool(v) => Value::Boolean(v),
            Json::Number(v) => match v.as_i64() {
                Some(i) if i.unsigned_abs() > crate::MAX_SAFE_INTEGER as u64 => Value::BigInt(i as _),
                _ => Value::Number(v.as_f64().unwrap_or(f64::NAN)),
            },
            Json::String(v) => Value::String(v),
            Json::Array(v) => Value::Array(v.into_iter().map(Into::into).collect()),
            Json::Object(v) => Value::Map(v.into_iter().map(|(k, v)| (k, v.into())).collect()),
        }
    }
}

impl fmt::Display for Value {
    /// Inspection-like rendering used by the error messages.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        write_display(&mut out, self);
        f.write_str(&out)
    }
}

fn write_display(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Boolean(v) => out.push_str(["false", "true"][*v as usize]),
        Value::Number(v) => write_number(out, *v),
        Value::BigInt(v) => {
            let _ = write!(out, "{v}n");
        }
        Value::Decimal(v) => {
            let _ = write!(out, "Decimal({v})");
        }
        Value::String(v) => {
            let _ = write!(out, "'{}'", crate::truncate_long!(v));
        }
        Value::Bytes(v) => {
            out.push_str("<Buffer");
            for b in v.iter().take(50) {
                let _ = write!(out, " {:02x}", b);
            }
            if v.len() > 50 {
                let _ = write!(out, " ... {} more bytes", v.len() - 50);
            }
            out.push('>');
        }
        Value::Timestamp(v) => {
            let _ = write!(out, "{v}");
        }
        Value::Array(v) => {
            out.push('[');
            separated_by(out, v, |out, v| write_display(out, v), ", ");
            out.push(']');
        }
        Value::Map(v) => {
            out.push('{');
            separated_by(
                out,
                v,
                |out, (k, v)| {
                    let _ = write!(out, " {k}: ");
                    write_display(out, v);
                },
                ",",
            );
            out.push_str(if v.is_empty() { "}" } else { " }" });
        }
        Value::Now => out.push_str("NOW"),
        Value::LargeObject(v) => {
            let _ = write!(out, "LargeObject({v})");
        }
        Value::Foreign(v) => {
            let _ = write!(out, "[{}]", v.type_name());
        }
    }
}

/// Conversion between native Rust types and [`Value`].
///
/// # Examples
/// ```rust
/// use caliber_core::{AsValue, Value};
/// let v = 42i32.as_value();
/// assert_eq!(v, Value::Number(42.0));
/// let n: f64 = AsValue::try_from_value(v).unwrap();
/// assert_eq!(n, 42.0);
/// ```
pub trait AsValue {
    fn as_value(self) -> Value;
    fn try_from_value(value: Value) -> Result<Self>
    where
        Self: Sized;
}

impl<T: AsValue> From<T> for Value {
    fn from(value: T) -> Self {
        value.as_value()
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.into())
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Value::Bytes(value.into())
    }
}

macro_rules! impl_as_value {
    ($source:ty, $destination:path $(, $pat_rest:pat => $expr_rest:expr)* $(,)?) => {
        impl AsValue for $source {
            fn as_value(self) -> Value {
                $destination(self as _)
            }
            fn try_from_value(value: Value) -> Result<Self> {
                match value {
                    $destination(v) => Ok(v as _),
                    $($pat_rest => $expr_rest,)*
                    #[allow(unreachable_patterns)]
                    _ => Err(Error::msg(format!(
                        "Cannot convert {value} to {}",
                        any::type_name::<Self>(),
                    ))),
                }
            }
        }
    };
}

impl_as_value!(i8, Value::Number);
impl_as_value!(i16, Value::Number);
impl_as_value!(i32, Value::Number);
impl_as_value!(u8, Value::Number);
impl_as_value!(u16, Value::Number);
impl_as_value!(u32, Value::Number);
impl_as_value!(f32, Value::Number);
impl_as_value!(f64, Value::Number, Value::BigInt(v) => Ok(v as _));
impl_as_value!(
    i64,
    Value::BigInt,
    Value::Number(v) => {
        if v.fract() != 0.0 || v.abs() > crate::MAX_SAFE_INTEGER as f64 {
            return Err(Error::msg(format!("Value {v} is not a safe integer")));
        }
        Ok(v as _)
    },
    Value::String(ref v) => v
        .parse()
        .map_err(|e| Error::new(e).context(format!("Cannot parse '{v}' as i64"))),
);
impl_as_value!(
    i128,
    Value::BigInt,
    Value::Number(v) => {
        if v.fract() != 0.0 || v.abs() > crate::MAX_SAFE_INTEGER as f64 {
            return Err(Error::msg(format!("Value {v} is not a safe integer")));
        }
        Ok(v as _)
    },
    Value::String(ref v) => v
        .parse()
        .map_err(|e| Error::new(e).context(format!("Cannot parse '{v}' as i128"))),
);

impl AsValue for bool {
    fn as_value(self) -> Value {
        Value::Boolean(self)
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Boolean(v) => Ok(v),
            _ => Err(Error::msg(format!("Cannot convert {value} to bool"))),
        }
    }
}

impl AsValue for String {
    fn as_value(self) -> Value {
        Value::String(self)
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::String(v) => Ok(v),
            _ => Err(Error::msg(format!("Cannot convert {value} to String"))),
        }
    }
}

impl AsValue for Vec<u8> {
    fn as_value(self) -> Value {
        Value::Bytes(self.into())
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Bytes(v) => Ok(v.into()),
            _ => Err(Error::msg(format!("Cannot convert {value} to Vec<u8>"))),
        }
    }
}

impl AsValue for Decimal {
    fn as_value(self) -> Value {
        Value::Decimal(self)
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Decimal(v) => Ok(v),
            Value::BigInt(v) => Decimal::try_from_i128_with_scale(v, 0).map_err(Error::new),
            Value::Number(v) => Decimal::try_from(v).map_err(Error::new),
            Value::String(ref v) => Decimal::from_str_exact(v)
                .or_else(|_| Decimal::from_scientific(v))
                .map_err(|e| Error::new(e).context(format!("Cannot parse '{v}' as Decimal"))),
            _ => Err(Error::msg(format!("Cannot convert {value} to Decimal"))),
        }
    }
}

impl AsValue for OffsetDateTime {
    fn as_value(self) -> Value {
        Value::Timestamp(self)
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Timestamp(v) => Ok(v),
            _ => Err(Error::msg(format!("Cannot convert {value} to OffsetDateTime"))),
        }
    }
}

impl AsValue for Vec<Value> {
    fn as_value(self) -> Value {
        Value::Array(self)
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Array(v) => Ok(v),
            _ => Err(Error::msg(format!("Cannot convert {value} to Vec<Value>"))),
        }
    }
}

impl<T: AsValue> AsValue for Option<T> {
    fn as_value(self) -> Value {
        match self {
            Some(v) => v.as_value(),
            None => Value::Null,
        }
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            v => Ok(Some(T::try_from_value(v)?)),
        }
    }
}
