use caliber_core::{
    BindOptions, DataType, DataTypeOverride, Dialect, Result, Value, parse_json_text,
    parse_timestamp,
};

/// No native boolean: INTEGER holding 1 or 0.
pub struct SqliteBoolean;

impl DataTypeOverride for SqliteBoolean {
    fn to_sql(&self, _data_type: &DataType, _dialect: &dyn Dialect) -> Result<String> {
        Ok("INTEGER".into())
    }

    fn to_bindable_value(
        &self,
        data_type: &DataType,
        value: &Value,
        options: &BindOptions,
    ) -> Result<Value> {
        Ok(match data_type.base().to_bindable_value(value, options)? {
            Value::Boolean(v) => Value::Number(v as u8 as f64),
            v => v,
        })
    }
}

/// Timestamps are stored as text.
pub struct SqliteDate;

impl DataTypeOverride for SqliteDate {
    fn parse(&self, data_type: &DataType, value: Value, dialect: &dyn Dialect) -> Result<Value> {
        match &value {
            Value::String(v) => Ok(match parse_timestamp(v) {
                Some(v) => Value::Timestamp(v),
                None => {
                    log::trace!("Sqlite returned a date that could not be parsed: {value}");
                    value
                }
            }),
            _ => data_type.base().parse(value, dialect),
        }
    }
}

/// ENUM and UUID have no dedicated storage class.
pub struct SqliteText;

impl DataTypeOverride for SqliteText {
    fn to_sql(&self, _data_type: &DataType, _dialect: &dyn Dialect) -> Result<String> {
        Ok("TEXT".into())
    }
}

pub struct SqliteJson;

impl DataTypeOverride for SqliteJson {
    fn parse(&self, _data_type: &DataType, value: Value, _dialect: &dyn Dialect) -> Result<Value> {
        parse_json_text(value)
    }
}
