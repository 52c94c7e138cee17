use crate::Catalog;
use std::{fmt, sync::Arc};

/// Where a data type is used.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UsageTarget {
    Attribute { model: String, attribute: String },
    Column { table: String, column: String },
}

/// Attribute or column a data type instance is attached to, plus its owning catalog.
#[derive(Clone)]
pub struct UsageContext {
    target: UsageTarget,
    catalog: Arc<Catalog>,
}

impl UsageContext {
    pub fn attribute(
        catalog: &Arc<Catalog>,
        model: impl Into<String>,
        attribute: impl Into<String>,
    ) -> Self {
        Self {
            target: UsageTarget::Attribute {
                model: model.into(),
                attribute: attribute.into(),
            },
            catalog: catalog.clone(),
        }
    }

    pub fn column(
        catalog: &Arc<Catalog>,
        table: impl Into<String>,
        column: impl Into<String>,
    ) -> Self {
        Self {
            target: UsageTarget::Column {
                table: table.into(),
                column: column.into(),
            },
            catalog: catalog.clone(),
        }
    }

    pub fn target(&self) -> &UsageTarget {
        &self.target
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Owner (model or table) and member (attribute or column) names.
    pub fn names(&self) -> (&str, &str) {
        match &self.target {
            UsageTarget::Attribute { model, attribute } => (model, attribute),
            UsageTarget::Column { table, column } => (table, column),
        }
    }
}

impl PartialEq for UsageContext {
    fn eq(&self, other: &Self) -> bool {
        self.target == other.target && Arc::ptr_eq(&self.catalog, &other.catalog)
    }
}

impl fmt::Display for UsageContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.target {
            UsageTarget::Attribute { model, attribute } => {
                write!(f, "attribute {model}#{attribute}")
            }
            UsageTarget::Column { table, column } => write!(f, "column \"{table}\".\"{column}\""),
        }
    }
}

impl fmt::Debug for UsageContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UsageContext")
            .field("target", &self.target)
            .field("catalog", &self.catalog.name())
            .finish()
    }
}
