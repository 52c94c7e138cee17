use crate::{SqliteBoolean, SqliteDate, SqliteJson, SqliteText};
use caliber_core::{Capabilities, DataTypeId, DataTypeOverride, Dialect};

pub struct SqliteDialect {
    capabilities: Capabilities,
}

impl SqliteDialect {
    pub fn new() -> Self {
        Self {
            capabilities: Capabilities::new()
                .with("ZEROFILL", false)
                .with_feature("DECIMAL", "unconstrained", true)
                .with("ARRAY", false)
                .with("CIDR", false)
                .with("CITEXT", false)
                .with("GEOGRAPHY", false)
                .with("GEOMETRY", false)
                .with("HSTORE", false)
                .with("INET", false)
                .with("JSON", true)
                .with("JSONB", false)
                .with("MACADDR", false)
                .with("RANGE", false),
        }
    }
}

impl Default for SqliteDialect {
    fn default() -> Self {
        Self::new()
    }
}

/// Quotes are doubled and blobs are `X'..'`, the defaults already.
impl Dialect for SqliteDialect {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    fn data_type_override(&self, id: DataTypeId) -> Option<&'static dyn DataTypeOverride> {
        Some(match id {
            DataTypeId::Boolean => &SqliteBoolean,
            DataTypeId::Date => &SqliteDate,
            DataTypeId::Enum | DataTypeId::Uuid => &SqliteText,
            DataTypeId::Json => &SqliteJson,
            _ => return None,
        })
    }

    fn write_value_bool(&self, out: &mut String, value: bool) {
        out.push(['0', '1'][value as usize]);
    }
}
