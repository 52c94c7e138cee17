use caliber_core::{
    BindOptions, DataType, DataTypeOverride, Dialect, Result, TypeKind, Value, format_timestamp,
    local_instant, parse_json_text, to_wkt, validation_error,
};

pub struct MySQLBoolean;

impl DataTypeOverride for MySQLBoolean {
    fn to_sql(&self, _data_type: &DataType, _dialect: &dyn Dialect) -> Result<String> {
        Ok("TINYINT(1)".into())
    }
}

/// DATETIME holds no offset: the wall clock of the requested timezone is stored.
pub struct MySQLDate;

impl DataTypeOverride for MySQLDate {
    fn to_bindable_value(
        &self,
        data_type: &DataType,
        value: &Value,
        options: &BindOptions,
    ) -> Result<Value> {
        data_type.base().validate(value)?;
        let instant = local_instant(value, options, data_type.calendar())?;
        Ok(Value::String(format_timestamp(instant, false)?))
    }
}

pub struct MySQLUuid;

impl DataTypeOverride for MySQLUuid {
    fn to_sql(&self, _data_type: &DataType, _dialect: &dyn Dialect) -> Result<String> {
        Ok("CHAR(36) BINARY".into())
    }
}

/// Members are declared inline.
pub struct MySQLEnum;

impl DataTypeOverride for MySQLEnum {
    fn to_sql(&self, data_type: &DataType, dialect: &dyn Dialect) -> Result<String> {
        let TypeKind::Enum(options) = data_type.kind() else {
            return data_type.base().to_sql(dialect);
        };
        let mut out = String::new();
        options.write_inline(&mut out, dialect);
        Ok(out)
    }
}

/// JSON columns may come back as text.
pub struct MySQLJson;

impl DataTypeOverride for MySQLJson {
    fn parse(&self, _data_type: &DataType, value: Value, _dialect: &dyn Dialect) -> Result<Value> {
        parse_json_text(value)
    }
}

/// Well-known text, wrapped in `ST_GeomFromText`.
pub struct MySQLGeometry;

impl DataTypeOverride for MySQLGeometry {
    fn to_bindable_value(
        &self,
        data_type: &DataType,
        value: &Value,
        _options: &BindOptions,
    ) -> Result<Value> {
        data_type.base().validate(value)?;
        to_wkt(value)
            .map(Value::String)
            .map_err(|e| validation_error(format!("{value} is not a valid geometry: {e}"), value))
    }

    fn escape(&self, data_type: &DataType, value: &Value, options: &BindOptions) -> Result<String> {
        let wkt = match self.to_bindable_value(data_type, value, options)? {
            Value::String(v) => v,
            v => v.to_string(),
        };
        let mut out = String::from("ST_GeomFromText(");
        options.dialect.write_value_string(&mut out, &wkt);
        if let TypeKind::Geometry(geometry) = data_type.kind() {
            if let Some(srid) = geometry.srid {
                out.push_str(", ");
                let mut buffer = itoa::Buffer::new();
                out.push_str(buffer.format(srid));
            }
        }
        out.push(')');
        Ok(out)
    }
}
