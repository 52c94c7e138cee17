use crate::Foreign;
use std::{fmt, sync::Arc};
use time::OffsetDateTime;

/// Recognizes date-like values owned by a foreign library.
///
/// Injected by the embedding application, a plain closure works:
/// ```rust
/// use caliber_core::{Catalog, Foreign};
/// use time::OffsetDateTime;
///
/// struct Epoch(i64);
/// let catalog = Catalog::new().with_calendar(|value: &Foreign| {
///     value
///         .downcast_ref::<Epoch>()
///         .and_then(|v| OffsetDateTime::from_unix_timestamp(v.0).ok())
/// });
/// assert!(catalog.calendar().is_some());
/// ```
pub trait Calendar: Send + Sync {
    /// Instant represented by `value`, `None` when the shape is not recognized.
    fn to_timestamp(&self, value: &Foreign) -> Option<OffsetDateTime>;
}

impl<F> Calendar for F
where
    F: Fn(&Foreign) -> Option<OffsetDateTime> + Send + Sync,
{
    fn to_timestamp(&self, value: &Foreign) -> Option<OffsetDateTime> {
        self(value)
    }
}

/// Owner of a set of attached data types, holds the application provided capabilities.
#[derive(Default, Clone)]
pub struct Catalog {
    name: String,
    calendar: Option<Arc<dyn Calendar>>,
}

impl Catalog {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_calendar(mut self, calendar: impl Calendar + 'static) -> Self {
        self.calendar = Some(Arc::new(calendar));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn calendar(&self) -> Option<&dyn Calendar> {
        self.calendar.as_deref()
    }

    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("name", &self.name)
            .field("calendar", &self.calendar.is_some())
            .finish()
    }
}
