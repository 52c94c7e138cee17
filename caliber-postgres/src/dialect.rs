use crate::{
    PostgresArray, PostgresDate, PostgresEnum, PostgresFloat, PostgresGeometry, PostgresInteger,
    PostgresRange, PostgresString,
};
use caliber_core::{Capabilities, DataTypeId, DataTypeOverride, Dialect};

pub struct PostgresDialect {
    capabilities: Capabilities,
}

impl PostgresDialect {
    pub fn new() -> Self {
        Self {
            capabilities: Capabilities::new()
                .with("UNSIGNED", false)
                .with("ZEROFILL", false)
                .with_feature("CHAR", "BINARY", true)
                .with_feature("DECIMAL", "unconstrained", true)
                .with("ARRAY", true)
                .with("CIDR", true)
                .with("CITEXT", true)
                .with("GEOGRAPHY", true)
                .with("GEOMETRY", true)
                .with("HSTORE", true)
                .with("INET", true)
                .with("JSON", true)
                .with("JSONB", true)
                .with("MACADDR", true)
                .with("RANGE", true)
                .with("TSVECTOR", true),
        }
    }
}

impl Default for PostgresDialect {
    fn default() -> Self {
        Self::new()
    }
}

impl Dialect for PostgresDialect {
    fn name(&self) -> &'static str {
        "postgres"
    }

    fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    fn data_type_override(&self, id: DataTypeId) -> Option<&'static dyn DataTypeOverride> {
        Some(match id {
            DataTypeId::String | DataTypeId::Char | DataTypeId::Blob => &PostgresString,
            DataTypeId::TinyInt
            | DataTypeId::SmallInt
            | DataTypeId::MediumInt
            | DataTypeId::Integer
            | DataTypeId::BigInt => &PostgresInteger,
            DataTypeId::Float | DataTypeId::Real | DataTypeId::Double => &PostgresFloat,
            DataTypeId::Date => &PostgresDate,
            DataTypeId::Enum => &PostgresEnum,
            DataTypeId::Range => &PostgresRange,
            DataTypeId::Array => &PostgresArray,
            DataTypeId::Geometry | DataTypeId::Geography => &PostgresGeometry,
            _ => return None,
        })
    }

    /// Quotes doubled, NUL characters dropped.
    fn write_value_string(&self, out: &mut String, value: &str) {
        out.push('\'');
        for c in value.chars() {
            match c {
                '\0' => {}
                '\'' => out.push_str("''"),
                _ => out.push(c),
            }
        }
        out.push('\'');
    }

    fn write_value_blob(&self, out: &mut String, value: &[u8]) {
        out.push_str("'\\x");
        out.push_str(&hex::encode(value));
        out.push('\'');
    }

    fn write_placeholder(&self, out: &mut String, index: usize) {
        out.push('$');
        let mut buffer = itoa::Buffer::new();
        out.push_str(buffer.format(index));
    }
}
