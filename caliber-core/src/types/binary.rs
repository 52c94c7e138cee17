use crate::{BindOptions, Result, SizeClass, Value, validation_error};

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct BlobType {
    pub size: Option<SizeClass>,
}

impl BlobType {
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
        out.push_str("BLOB");
    }
}

pub(crate) fn validate_blob(value: &Value) -> Result<()> {
    match value {
        Value::String(..) | Value::Bytes(..) => Ok(()),
        Value::LargeObject(..) => Err(validation_error(
            format!(
                "{value} is a large object handle, which can only be read asynchronously. Read it into a byte buffer first"
            ),
            value,
        )),
        _ => Err(validation_error(
            format!("{value} is not a valid binary value: Only strings and byte buffers are supported."),
            value,
        )),
    }
}

/// Each character is taken as one raw 8-bit byte.
pub fn latin1_bytes(value: &str) -> Box<[u8]> {
    value.chars().map(|c| c as u32 as u8).collect()
}

pub(crate) fn blob_to_bindable_value(value: &Value) -> Result<Value> {
    validate_blob(value)?;
    Ok(match value {
        Value::String(v) => Value::Bytes(latin1_bytes(v)),
        _ => value.clone(),
    })
}

pub(crate) fn escape_blob(value: &Value, options: &BindOptions) -> Result<String> {
    match blob_to_bindable_value(value)? {
        Value::Bytes(v) => Ok(options.dialect.escape_buffer(&v)),
        v => Err(validation_error(
            format!("{v} cannot be escaped as a binary value"),
            &v,
        )),
    }
}
