use caliber_core::{
    BindOptions, DataType, DataTypeId, DataTypeOverride, Dialect, Result, TypeKind, Value,
    capability_error, configuration_error,
};

/// Binary strings and blobs are BYTEA.
pub struct PostgresString;

impl DataTypeOverride for PostgresString {
    fn to_sql(&self, data_type: &DataType, dialect: &dyn Dialect) -> Result<String> {
        match data_type.kind() {
            TypeKind::String(o) | TypeKind::Char(o) if o.binary => Ok("BYTEA".into()),
            TypeKind::Blob(..) => Ok("BYTEA".into()),
            _ => data_type.base().to_sql(dialect),
        }
    }
}

/// No TINYINT, no MEDIUMINT and no display width.
pub struct PostgresInteger;

impl DataTypeOverride for PostgresInteger {
    fn to_sql(&self, data_type: &DataType, dialect: &dyn Dialect) -> Result<String> {
        let id = data_type.data_type_id();
        let (name, options) = match data_type.kind() {
            TypeKind::TinyInt(o) => {
                log::warn!("Postgres does not support TINYINT, SMALLINT will be used instead");
                ("SMALLINT", o)
            }
            TypeKind::SmallInt(o) => ("SMALLINT", o),
            TypeKind::MediumInt(o) => {
                log::warn!("Postgres does not support MEDIUMINT, INTEGER will be used instead");
                ("INTEGER", o)
            }
            TypeKind::Integer(o) => ("INTEGER", o),
            TypeKind::BigInt(o) => ("BIGINT", o),
            _ => return data_type.base().to_sql(dialect),
        };
        if options.length.is_some() {
            log::warn!("Postgres does not support a display width for {id}, it will be ignored");
        }
        Ok(name.into())
    }
}

/// FLOAT is single precision, lengths are dropped.
pub struct PostgresFloat;

impl DataTypeOverride for PostgresFloat {
    fn to_sql(&self, data_type: &DataType, dialect: &dyn Dialect) -> Result<String> {
        let (name, options) = match data_type.kind() {
            TypeKind::Float(o) | TypeKind::Real(o) => ("REAL", o),
            TypeKind::Double(o) => ("DOUBLE PRECISION", o),
            _ => return data_type.base().to_sql(dialect),
        };
        if options.length.is_some() || options.decimals.is_some() {
            log::warn!(
                "Postgres does not support a length for {}, it will be ignored",
                data_type.data_type_id()
            );
        }
        Ok(name.into())
    }
}

pub struct PostgresDate;

impl DataTypeOverride for PostgresDate {
    fn to_sql(&self, data_type: &DataType, dialect: &dyn Dialect) -> Result<String> {
        match data_type.kind() {
            TypeKind::Date(o) => Ok(match o.precision {
                Some(precision) => format!("TIMESTAMP({precision}) WITH TIME ZONE"),
                None => "TIMESTAMP WITH TIME ZONE".into(),
            }),
            _ => data_type.base().to_sql(dialect),
        }
    }
}

/// A named type, `"enum_<table>_<column>"`, derived from the usage context.
pub struct PostgresEnum;

impl DataTypeOverride for PostgresEnum {
    fn to_sql(&self, data_type: &DataType, dialect: &dyn Dialect) -> Result<String> {
        let Some(usage) = data_type.usage_context() else {
            return Err(configuration_error(
                "Postgres ENUM types are named after their column, attach the data type to a usage context first",
            ));
        };
        let (owner, member) = usage.names();
        let mut out = String::with_capacity(owner.len() + member.len() + 8);
        out.push('"');
        dialect.write_escaped(&mut out, &format!("enum_{owner}_{member}"), '"', "\"\"");
        out.push('"');
        Ok(out)
    }
}

/// Built-in range type of the subtype.
pub fn range_type_name(subtype: &DataType) -> Option<&'static str> {
    Some(match subtype.data_type_id() {
        DataTypeId::TinyInt | DataTypeId::SmallInt | DataTypeId::MediumInt | DataTypeId::Integer => {
            "int4range"
        }
        DataTypeId::BigInt => "int8range",
        DataTypeId::Decimal => "numrange",
        DataTypeId::Date => "tstzrange",
        DataTypeId::DateOnly => "daterange",
        _ => return None,
    })
}

pub struct PostgresRange;

impl PostgresRange {
    fn name(data_type: &DataType, dialect: &dyn Dialect) -> Result<&'static str> {
        let TypeKind::Range(range) = data_type.kind() else {
            return Err(capability_error(dialect.name(), "RANGE"));
        };
        range_type_name(range.subtype()).ok_or_else(|| {
            capability_error(
                dialect.name(),
                format!("RANGE({})", range.subtype().data_type_id()),
            )
        })
    }
}

impl DataTypeOverride for PostgresRange {
    fn to_sql(&self, data_type: &DataType, dialect: &dyn Dialect) -> Result<String> {
        Ok(Self::name(data_type, dialect)?.into())
    }

    fn escape(&self, data_type: &DataType, value: &Value, options: &BindOptions) -> Result<String> {
        let name = Self::name(data_type, options.dialect)?;
        let literal = data_type.base().escape(value, options)?;
        Ok(format!("{literal}::{name}"))
    }
}

/// Literal cast to the element type, empty arrays stay typed.
pub struct PostgresArray;

impl DataTypeOverride for PostgresArray {
    fn escape(&self, data_type: &DataType, value: &Value, options: &BindOptions) -> Result<String> {
        let mut out = data_type.base().escape(value, options)?;
        if let TypeKind::Array(array) = data_type.kind() {
            out.push_str("::");
            out.push_str(&array.element().to_sql(options.dialect)?);
            out.push_str("[]");
        }
        Ok(out)
    }
}

/// GeoJSON through PostGIS.
pub struct PostgresGeometry;

impl DataTypeOverride for PostgresGeometry {
    fn escape(&self, data_type: &DataType, value: &Value, options: &BindOptions) -> Result<String> {
        let json = data_type.base().escape(value, options)?;
        Ok(match data_type.kind() {
            TypeKind::Geography(..) => format!("ST_GeomFromGeoJSON({json})::geography"),
            _ => format!("ST_GeomFromGeoJSON({json})"),
        })
    }
}
