use crate::{
    BindOptions, DataType, Dialect, Error, Result, Value, number_to_string, validation_error,
};
use std::collections::BTreeMap;

/// Range over a subtype, INTEGER when unspecified.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeType {
    pub(crate) subtype: Box<DataType>,
}

/// Options of RANGE.
#[derive(Default, Debug, Clone)]
pub struct RangeOptions {
    pub subtype: Option<DataType>,
}

impl RangeType {
    pub fn new(subtype: DataType) -> Self {
        Self {
            subtype: Box::new(subtype),
        }
    }

    pub fn subtype(&self) -> &DataType {
        &self.subtype
    }

    /// `[]` is the empty range, bounds become `{ value, inclusive }` objects.
    pub(crate) fn sanitize(&self, value: Value) -> Result<Value> {
        let Value::Array(items) = value else {
            return Ok(value);
        };
        if items.len() != 2 {
            return Ok(Value::Array(items));
        }
        let mut items = items.into_iter();
        let (Some(low), Some(high)) = (items.next(), items.next()) else {
            return Ok(Value::Array(Vec::new()));
        };
        Ok(Value::Array(vec![
            self.sanitize_bound(low, true)?,
            self.sanitize_bound(high, false)?,
        ]))
    }

    fn sanitize_bound(&self, bound: Value, inclusive: bool) -> Result<Value> {
        let (value, inclusive) = split_bound(bound, inclusive);
        let value = if value.is_null() {
            value
        } else {
            self.subtype.sanitize(value)?
        };
        Ok(make_bound(value, inclusive))
    }

    pub(crate) fn validate(&self, value: &Value) -> Result<()> {
        let items = match value {
            Value::Array(items) if items.is_empty() || items.len() == 2 => items,
            _ => {
                return Err(validation_error(
                    format!(
                        "A range must either be an array with two elements, or an empty array for the empty range. Got {value}."
                    ),
                    value,
                ));
            }
        };
        for bound in items {
            let bound = bound_value(bound);
            if !bound.is_null() {
                self.subtype.validate(bound)?;
            }
        }
        Ok(())
    }

    /// The range literal: `empty`, `[1,10)`, `(,5]`.
    pub(crate) fn to_bindable_value(&self, value: &Value, options: &BindOptions) -> Result<Value> {
        self.validate(value)?;
        let Value::Array(items) = self.sanitize(value.clone())? else {
            return Err(validation_error(format!("{value} is not a range"), value));
        };
        if items.is_empty() {
            return Ok(Value::String("empty".into()));
        }
        let mut out = String::new();
        for (i, item) in items.iter().enumerate() {
            let (bound, inclusive) = split_bound(item.clone(), i == 0);
            if i == 0 {
                out.push(if inclusive { '[' } else { '(' });
            } else {
                out.push(',');
            }
            if !bound.is_null() {
                let text = match self.subtype.to_bindable_value(&bound, options)? {
                    Value::String(v) => v,
                    Value::Number(v) => number_to_string(v),
                    v => v.to_string(),
                };
                write_range_item(&mut out, &text);
            }
            if i == 1 {
                out.push(if inclusive { ']' } else { ')' });
            }
        }
        Ok(Value::String(out))
    }
}

fn split_bound(bound: Value, inclusive: bool) -> (Value, bool) {
    match bound {
        Value::Map(mut object) if object.contains_key("value") => {
            let inclusive = match object.get("inclusive") {
                Some(Value::Boolean(v)) => *v,
                _ => inclusive,
            };
            (object.remove("value").unwrap_or_default(), inclusive)
        }
        v => (v, inclusive),
    }
}

fn bound_value(bound: &Value) -> &Value {
    match bound {
        Value::Map(object) => object.get("value").unwrap_or(bound),
        _ => bound,
    }
}

fn make_bound(value: Value, inclusive: bool) -> Value {
    Value::Map(BTreeMap::from([
        ("value".to_string(), value),
        ("inclusive".to_string(), Value::Boolean(inclusive)),
    ]))
}

fn write_range_item(out: &mut String, value: &str) {
    let quote = value.is_empty()
        || value
            .chars()
            .any(|c| matches!(c, ',' | '(' | ')' | '[' | ']' | '"' | '\\') || c.is_whitespace());
    if !quote {
        out.push_str(value);
        return;
    }
    out.push('"');
    for c in value.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
}

/// Reads a range literal returned by the store, bounds go through the subtype.
pub fn parse_range_literal(value: &str, subtype: &DataType, dialect: &dyn Dialect) -> Result<Value> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("empty") {
        return Ok(Value::Array(Vec::new()));
    }
    let invalid = || Error::msg(format!("`{}` is not a valid range literal", crate::truncate_long!(value)));
    let lower_inclusive = match value.chars().next() {
        Some('[') => true,
        Some('(') => false,
        _ => return Err(invalid()),
    };
    let upper_inclusive = match value.chars().last() {
        Some(']') => true,
        Some(')') => false,
        _ => return Err(invalid()),
    };
    let inner = &value[1..value.len() - 1];
    let mut bounds = Vec::with_capacity(2);
    let mut current = String::new();
    let mut quoted = false;
    let mut was_quoted = false;
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' if quoted => {
                if let Some(c) = chars.next() {
                    current.push(c);
                }
            }
            '"' => {
                quoted = !quoted;
                was_quoted = true;
            }
            ',' if !quoted => {
                bounds.push((std::mem::take(&mut current), was_quoted));
                was_quoted = false;
            }
            _ => current.push(c),
        }
    }
    bounds.push((current, was_quoted));
    if bounds.len() != 2 || quoted {
        return Err(invalid());
    }
    let mut result = Vec::with_capacity(2);
    for ((text, was_quoted), inclusive) in bounds.into_iter().zip([lower_inclusive, upper_inclusive]) {
        let bound = if text.is_empty() && !was_quoted {
            Value::Null
        } else {
            let parsed = subtype.parse(Value::String(text), dialect)?;
            subtype.sanitize(parsed)?
        };
        result.push(make_bound(bound, inclusive));
    }
    Ok(Value::Array(result))
}
