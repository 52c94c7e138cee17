use crate::{Result, Value, configuration_error, separated_by, validation_error};

/// Members of an ENUM, at least one and all textual.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumType {
    values: Vec<String>,
}

impl EnumType {
    pub fn new<I, V>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let values = values
            .into_iter()
            .map(|v| match v.into() {
                Value::String(v) => Ok(v),
                v => Err(configuration_error(format!(
                    "One of the values of the ENUM is not a string: {v}. Only strings can be used as ENUM values"
                ))),
            })
            .collect::<Result<Vec<_>>>()?;
        if values.is_empty() {
            return Err(configuration_error(
                "The ENUM data type requires at least one value",
            ));
        }
        Ok(Self { values })
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub(crate) fn validate(&self, value: &Value) -> Result<()> {
        match value {
            Value::String(v) if self.values.contains(v) => Ok(()),
            _ => {
                let mut choices = String::new();
                separated_by(
                    &mut choices,
                    &self.values,
                    |out, v| {
                        out.push('\'');
                        out.push_str(v);
                        out.push('\'');
                    },
                    ", ",
                );
                Err(validation_error(
                    format!("{value} is not a valid choice for enum [ {choices} ]"),
                    value,
                ))
            }
        }
    }

    /// `ENUM('a', 'b')`, quoting members through the dialect.
    pub fn write_inline(&self, out: &mut String, dialect: &dyn crate::Dialect) {
        out.push_str("ENUM(");
        separated_by(
            out,
            &self.values,
            |out, v| dialect.write_value_string(out, v),
            ", ",
        );
        out.push(')');
    }
}
