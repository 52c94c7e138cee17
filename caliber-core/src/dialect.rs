use crate::{DataType, DataTypeId, Result, Value};
use std::{collections::BTreeMap, fmt::Write};
use time::UtcOffset;

/// Support declared by a dialect for one data type identifier (or feature key).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Support {
    Flag(bool),
    /// Supported, with sub-capabilities (e.g. `DECIMAL.unconstrained`).
    Features(BTreeMap<&'static str, bool>),
}

/// Read-only table of what a dialect supports, keyed by data type identifier.
///
/// A missing key means "no explicit restriction".
#[derive(Default, Debug, Clone)]
pub struct Capabilities {
    data_types: BTreeMap<&'static str, Support>,
}

impl Capabilities {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with(mut self, key: &'static str, supported: bool) -> Self {
        self.data_types.insert(key, Support::Flag(supported));
        self
    }

    /// Declares a sub-capability, which also marks `key` as supported.
    pub fn with_feature(mut self, key: &'static str, feature: &'static str, supported: bool) -> Self {
        let entry = self
            .data_types
            .entry(key)
            .or_insert_with(|| Support::Features(BTreeMap::new()));
        if let Support::Flag(..) = entry {
            *entry = Support::Features(BTreeMap::new());
        }
        if let Support::Features(features) = entry {
            features.insert(feature, supported);
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&Support> {
        self.data_types.get(key)
    }

    /// Present and explicitly marked unsupported.
    pub fn is_unsupported(&self, key: &str) -> bool {
        matches!(self.get(key), Some(Support::Flag(false)))
    }

    /// Present and not marked unsupported.
    pub fn is_declared(&self, key: &str) -> bool {
        matches!(self.get(key), Some(Support::Flag(true) | Support::Features(..)))
    }

    pub fn feature(&self, key: &str, feature: &str) -> Option<bool> {
        match self.get(key)? {
            Support::Features(features) => features.get(feature).copied(),
            Support::Flag(..) => None,
        }
    }
}

/// Backend policy: what it supports, which data types it specializes and how
/// it escapes literal values.
pub trait Dialect: Send + Sync {
    /// Name used in diagnostics.
    fn name(&self) -> &'static str;

    fn capabilities(&self) -> &Capabilities;

    /// Specialized behavior for the identifier, if the dialect customizes it.
    fn data_type_override(&self, _id: DataTypeId) -> Option<&'static dyn DataTypeOverride> {
        None
    }

    /// Escape occurrences of `search` char with `replace` while copying into buffer.
    fn write_escaped(&self, out: &mut String, value: &str, search: char, replace: &str) {
        let mut position = 0;
        for (i, c) in value.char_indices() {
            if c == search {
                out.push_str(&value[position..i]);
                out.push_str(replace);
                position = i + c.len_utf8();
            }
        }
        out.push_str(&value[position..]);
    }

    /// Quoted string literal, inner quotes doubled.
    fn write_value_string(&self, out: &mut String, value: &str) {
        out.push('\'');
        self.write_escaped(out, value, '\'', "''");
        out.push('\'');
    }

    /// Hex blob literal.
    fn write_value_blob(&self, out: &mut String, value: &[u8]) {
        out.push_str("X'");
        out.push_str(&hex::encode_upper(value));
        out.push('\'');
    }

    fn write_value_bool(&self, out: &mut String, value: bool) {
        out.push_str(["false", "true"][value as usize])
    }

    fn escape_string(&self, value: &str) -> String {
        let mut out = String::with_capacity(value.len() + 2);
        self.write_value_string(&mut out, value);
        out
    }

    fn escape_buffer(&self, value: &[u8]) -> String {
        let mut out = String::with_capacity(value.len() * 2 + 3);
        self.write_value_blob(&mut out, value);
        out
    }

    fn escape_bool(&self, value: bool) -> String {
        let mut out = String::new();
        self.write_value_bool(&mut out, value);
        out
    }

    /// Placeholder token for the parameter at `index` (1-based).
    fn write_placeholder(&self, out: &mut String, _index: usize) {
        out.push('?');
    }

    fn placeholder(&self, index: usize) -> String {
        let mut out = String::new();
        self.write_placeholder(&mut out, index);
        out
    }
}

/// Dialect specialization of a data type.
///
/// Every method defaults to the generic behavior, reachable through
/// [`DataType::base`]; implementors override only what differs.
pub trait DataTypeOverride: Send + Sync {
    fn check_option_support(&self, data_type: &DataType, dialect: &dyn Dialect) -> Result<()> {
        data_type.base().check_option_support(dialect)
    }

    fn validate(&self, data_type: &DataType, value: &Value) -> Result<()> {
        data_type.base().validate(value)
    }

    fn sanitize(&self, data_type: &DataType, value: Value) -> Result<Value> {
        data_type.base().sanitize(value)
    }

    fn parse(&self, data_type: &DataType, value: Value, dialect: &dyn Dialect) -> Result<Value> {
        data_type.base().parse(value, dialect)
    }

    fn are_values_equal(&self, data_type: &DataType, value: &Value, original: &Value) -> bool {
        data_type.base().are_values_equal(value, original)
    }

    fn to_bindable_value(
        &self,
        data_type: &DataType,
        value: &Value,
        options: &BindOptions,
    ) -> Result<Value> {
        data_type.base().to_bindable_value(value, options)
    }

    fn escape(&self, data_type: &DataType, value: &Value, options: &BindOptions) -> Result<String> {
        data_type.base().escape(value, options)
    }

    fn to_sql(&self, data_type: &DataType, dialect: &dyn Dialect) -> Result<String> {
        data_type.base().to_sql(dialect)
    }
}

/// Per call encoding options.
#[derive(Clone, Copy)]
pub struct BindOptions<'a> {
    pub dialect: &'a dyn Dialect,
    /// Offset timestamps are shifted to before encoding, UTC when missing.
    pub timezone: Option<UtcOffset>,
}

impl<'a> BindOptions<'a> {
    pub fn new(dialect: &'a dyn Dialect) -> Self {
        Self {
            dialect,
            timezone: None,
        }
    }

    pub fn timezone(mut self, offset: UtcOffset) -> Self {
        self.timezone = Some(offset);
        self
    }
}

impl std::fmt::Debug for BindOptions<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BindOptions")
            .field("dialect", &self.dialect.name())
            .field("timezone", &self.timezone)
            .finish()
    }
}

/// Writes a declaration with an optional parenthesized argument list.
pub(crate) fn write_declaration(out: &mut String, name: &str, args: &[u32]) {
    out.push_str(name);
    if !args.is_empty() {
        out.push('(');
        crate::separated_by(
            out,
            args,
            |out, v| {
                let _ = write!(out, "{v}");
            },
            ",",
        );
        out.push(')');
    }
}
