use crate::{
    BindOptions, Dialect, Result, Value, capability_error, configuration_error,
    dialect::write_declaration, validation_error,
};
use std::{fmt, str::FromStr};

/// Options of STRING and CHAR.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct StringType {
    pub length: Option<u32>,
    pub binary: bool,
}

impl StringType {
    pub const DEFAULT_LENGTH: u32 = 255;

    pub fn new() -> Self {
        Default::default()
    }

    pub fn length(mut self, length: u32) -> Self {
        self.length = Some(length);
        self
    }

    pub fn binary(mut self) -> Self {
        self.binary = true;
        self
    }

    pub(crate) fn validate(&self, value: &Value) -> Result<()> {
        match value {
            Value::String(..) => Ok(()),
            Value::Bytes(..) if self.binary => Ok(()),
            _ if self.binary => Err(validation_error(
                format!(
                    "{value} is not a valid binary value: Only strings and byte buffers are supported."
                ),
                value,
            )),
            _ => Err(validation_error(
                format!(
                    "{value} is not a valid string. Only the string type is accepted for non-binary strings."
                ),
                value,
            )),
        }
    }

    pub(crate) fn write_sql(&self, out: &mut String, name: &str) {
        write_declaration(out, name, &[self.length.unwrap_or(Self::DEFAULT_LENGTH)]);
        if self.binary {
            out.push_str(" BINARY");
        }
    }

    pub(crate) fn check_char_support(&self, dialect: &dyn Dialect) -> Result<()> {
        if self.binary && dialect.capabilities().feature("CHAR", "BINARY") != Some(true) {
            return Err(capability_error(dialect.name(), "CHAR.BINARY"));
        }
        Ok(())
    }

    pub(crate) fn to_bindable_value(&self, value: &Value) -> Result<Value> {
        self.validate(value)?;
        Ok(value.clone())
    }

    pub(crate) fn escape(&self, value: &Value, options: &BindOptions) -> Result<String> {
        self.validate(value)?;
        match value {
            Value::Bytes(v) => Ok(options.dialect.escape_buffer(v)),
            _ => Ok(options
                .dialect
                .escape_string(value.as_str().unwrap_or_default())),
        }
    }
}

/// Size class shared by TEXT and BLOB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeClass {
    Tiny,
    Medium,
    Long,
}

impl SizeClass {
    pub const fn prefix(&self) -> &'static str {
        match self {
            SizeClass::Tiny => "TINY",
            SizeClass::Medium => "MEDIUM",
            SizeClass::Long => "LONG",
        }
    }
}

impl FromStr for SizeClass {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("tiny") {
            Ok(SizeClass::Tiny)
        } else if s.eq_ignore_ascii_case("medium") {
            Ok(SizeClass::Medium)
        } else if s.eq_ignore_ascii_case("long") {
            Ok(SizeClass::Long)
        } else {
            Err(configuration_error(format!(
                "'{s}' is not a valid size, it must be one of 'tiny', 'medium' or 'long'"
            )))
        }
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SizeClass::Tiny => "tiny",
            SizeClass::Medium => "medium",
            SizeClass::Long => "long",
        })
    }
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct TextType {
    pub size: Option<SizeClass>,
}

impl TextType {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn size(mut self, size: SizeClass) -> Self {
        self.size = Some(size);
        self
    }

    pub(crate) fn write_sql(&self, out: &mut String) {
        if let Some(size) = self.size {
            out.push_str(size.prefix());
        }
        out.push_str("TEXT");
    }
}

/// Accepts strings only, shared by TEXT, CITEXT and the text search types.
pub(crate) fn validate_text(value: &Value) -> Result<()> {
    match value {
        Value::String(..) => Ok(()),
        _ => Err(validation_error(
            format!("{value} is not a valid string"),
            value,
        )),
    }
}
