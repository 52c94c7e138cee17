use crate::{BindOptions, Result, Value, validation_error};

/// Only the two canonical values, no truthiness.
pub(crate) fn validate(value: &Value) -> Result<()> {
    match value {
        Value::Boolean(..) => Ok(()),
        _ => Err(validation_error(
            format!("{value} is not a valid boolean"),
            value,
        )),
    }
}

/// Numeric and single byte representations some backends use for booleans.
fn coerce(value: &Value) -> Option<bool> {
    match value {
        Value::Boolean(v) => Some(*v),
        Value::Number(v) if *v == 1.0 => Some(true),
        Value::Number(v) if *v == 0.0 => Some(false),
        Value::BigInt(1) => Some(true),
        Value::BigInt(0) => Some(false),
        Value::Bytes(v) if v.as_ref() == [1] => Some(true),
        Value::Bytes(v) if v.as_ref() == [0] => Some(false),
        _ => None,
    }
}

pub(crate) fn sanitize(value: Value) -> Value {
    match coerce(&value) {
        Some(v) => Value::Boolean(v),
        None => {
            log::trace!("Boolean sanitize left {value} unchanged");
            value
        }
    }
}

/// Last line of defense against ambiguous wire formats.
pub(crate) fn parse(value: Value) -> Result<Value> {
    if value.is_null() {
        return Ok(value);
    }
    if let Some(v) = coerce(&value) {
        return Ok(Value::Boolean(v));
    }
    match value.as_str() {
        Some("true" | "t" | "1") => Ok(Value::Boolean(true)),
        Some("false" | "f" | "0") => Ok(Value::Boolean(false)),
        _ => Err(validation_error(
            format!("Received invalid boolean value from the database: {value}"),
            &value,
        )),
    }
}

pub(crate) fn to_bindable_value(value: &Value) -> Result<Value> {
    validate(value)?;
    Ok(value.clone())
}

pub(crate) fn escape(value: &Value, options: &BindOptions) -> Result<String> {
    validate(value)?;
    match value {
        Value::Boolean(v) => Ok(options.dialect.escape_bool(*v)),
        _ => Err(validation_error(
            format!("{value} is not a valid boolean"),
            value,
        )),
    }
}
