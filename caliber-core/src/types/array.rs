use crate::{BindOptions, DataType, DataTypeId, Dialect, Result, TypeKind, Value, separated_by, validation_error};
use anyhow::Context;

/// Sequence of one element type.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayType {
    pub(crate) element: Box<DataType>,
}

impl ArrayType {
    pub fn new(element: DataType) -> Self {
        Self {
            element: Box::new(element),
        }
    }

    pub fn element(&self) -> &DataType {
        &self.element
    }

    pub(crate) fn validate(&self, value: &Value) -> Result<()> {
        let Value::Array(items) = value else {
            return Err(validation_error(
                format!("{value} is not a valid array"),
                value,
            ));
        };
        for (i, item) in items.iter().enumerate().filter(|(_, v)| !v.is_null()) {
            self.element
                .validate(item)
                .with_context(|| format!("Element {i} of array {value} is invalid"))?;
        }
        Ok(())
    }

    pub(crate) fn sanitize(&self, value: Value) -> Result<Value> {
        match value {
            Value::Array(items) => Ok(Value::Array(
                items
                    .into_iter()
                    .map(|v| self.element.sanitize(v))
                    .collect::<Result<_>>()?,
            )),
            v => Ok(v),
        }
    }

    pub(crate) fn parse(&self, value: Value, dialect: &dyn Dialect) -> Result<Value> {
        match value {
            Value::Array(items) => Ok(Value::Array(
                items
                    .into_iter()
                    .map(|v| {
                        if v.is_null() {
                            Ok(v)
                        } else {
                            self.element.parse(v, dialect)
                        }
                    })
                    .collect::<Result<_>>()?,
            )),
            v => Ok(v),
        }
    }

    pub(crate) fn are_values_equal(&self, value: &Value, original: &Value) -> bool {
        match (value, original) {
            (Value::Array(l), Value::Array(r)) => {
                l.len() == r.len()
                    && l
                        .iter()
                        .zip(r)
                        .all(|(l, r)| self.element.are_values_equal(l, r))
            }
            _ => value == original,
        }
    }

    pub(crate) fn to_bindable_value(&self, value: &Value, options: &BindOptions) -> Result<Value> {
        self.validate(value)?;
        let Value::Array(items) = value else {
            return Ok(value.clone());
        };
        Ok(Value::Array(
            items
                .iter()
                .map(|v| {
                    if v.is_null() {
                        Ok(Value::Null)
                    } else {
                        self.element.to_bindable_value(v, options)
                    }
                })
                .collect::<Result<_>>()?,
        ))
    }

    /// `ARRAY[e1,e2]`, each element escaped by the element type.
    pub(crate) fn escape(&self, value: &Value, options: &BindOptions) -> Result<String> {
        self.validate(value)?;
        let Value::Array(items) = value else {
            return Err(validation_error(format!("{value} is not a valid array"), value));
        };
        let escaped = items
            .iter()
            .map(|v| {
                if v.is_null() {
                    Ok("NULL".to_string())
                } else {
                    self.element.escape(v, options)
                }
            })
            .collect::<Result<Vec<_>>>()?;
        let mut out = String::from("ARRAY[");
        separated_by(&mut out, escaped, |out, v| out.push_str(&v), ",");
        out.push(']');
        Ok(out)
    }
}

/// Whether `data_type` is an ARRAY whose elements belong to the `element` family.
pub fn is_array_of(data_type: &DataType, element: DataTypeId) -> bool {
    match data_type.kind() {
        TypeKind::Array(array) => array.element.data_type_id() == element,
        _ => false,
    }
}
