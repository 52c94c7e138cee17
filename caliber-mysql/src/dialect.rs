use crate::{MySQLBoolean, MySQLDate, MySQLEnum, MySQLGeometry, MySQLJson, MySQLUuid};
use caliber_core::{Capabilities, DataTypeId, DataTypeOverride, Dialect};

pub struct MySQLDialect {
    capabilities: Capabilities,
}

impl MySQLDialect {
    pub fn new() -> Self {
        Self {
            capabilities: Capabilities::new()
                .with("UNSIGNED", true)
                .with("ZEROFILL", true)
                .with_feature("CHAR", "BINARY", true)
                .with_feature("DECIMAL", "unconstrained", false)
                .with("ARRAY", false)
                .with("CIDR", false)
                .with("CITEXT", false)
                .with("GEOGRAPHY", false)
                .with("GEOMETRY", true)
                .with("HSTORE", false)
                .with("INET", false)
                .with("JSON", true)
                .with("JSONB", false)
                .with("MACADDR", false)
                .with("RANGE", false),
        }
    }
}

impl Default for MySQLDialect {
    fn default() -> Self {
        Self::new()
    }
}

impl Dialect for MySQLDialect {
    fn name(&self) -> &'static str {
        "mysql"
    }

    fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    fn data_type_override(&self, id: DataTypeId) -> Option<&'static dyn DataTypeOverride> {
        Some(match id {
            DataTypeId::Boolean => &MySQLBoolean,
            DataTypeId::Date => &MySQLDate,
            DataTypeId::Uuid => &MySQLUuid,
            DataTypeId::Enum => &MySQLEnum,
            DataTypeId::Json => &MySQLJson,
            DataTypeId::Geometry => &MySQLGeometry,
            _ => return None,
        })
    }

    /// Backslash escapes for quotes and control characters.
    fn write_value_string(&self, out: &mut String, value: &str) {
        out.push('\'');
        for c in value.chars() {
            match c {
                '\0' => out.push_str("\\0"),
                '\u{8}' => out.push_str("\\b"),
                '\t' => out.push_str("\\t"),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\u{1a}' => out.push_str("\\Z"),
                '\'' => out.push_str("\\'"),
                '"' => out.push_str("\\\""),
                '\\' => out.push_str("\\\\"),
                _ => out.push(c),
            }
        }
        out.push('\'');
    }
}
