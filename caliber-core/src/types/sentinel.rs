use crate::DataType;

/// Computed attribute, never persisted.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct VirtualType {
    pub(crate) return_type: Option<Box<DataType>>,
    pub(crate) fields: Vec<String>,
}

impl VirtualType {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn returning(mut self, return_type: DataType) -> Self {
        self.return_type = Some(Box::new(return_type));
        self
    }

    /// Attributes the computed value depends on.
    pub fn depends_on<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields.extend(fields.into_iter().map(Into::into));
        self
    }

    pub fn return_type(&self) -> Option<&DataType> {
        self.return_type.as_deref()
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }
}
