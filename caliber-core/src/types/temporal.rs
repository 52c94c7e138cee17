use crate::{
    BindOptions, Calendar, Result, Value, type_mismatch_error, validation_error,
};
use time::{
    Date, OffsetDateTime, PrimitiveDateTime, Time, UtcOffset,
    format_description::well_known::Rfc3339, macros::format_description,
};

/// DATE options: fractional seconds precision.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct DateType {
    pub precision: Option<u8>,
}

impl DateType {
    pub fn new() -> Self {
        Default::default()
    }
    pub fn precision(mut self, precision: u8) -> Self {
        self.precision = Some(precision);
        self
    }

    pub(crate) fn write_sql(&self, out: &mut String, name: &str) {
        write_precision(out, name, self.precision);
    }

    pub(crate) fn validate(&self, value: &Value, calendar: Option<&dyn Calendar>) -> Result<()> {
        if to_timestamp(value, calendar).is_some() || matches!(value, Value::Now) {
            return Ok(());
        }
        Err(validation_error(
            format!("{value} is not a valid date"),
            value,
        ))
    }

    /// Epoch numbers and date strings become timestamps. Shapes that could
    /// never be a date are a programming error.
    pub(crate) fn sanitize(&self, value: Value, calendar: Option<&dyn Calendar>) -> Result<Value> {
        match &value {
            Value::Null | Value::Now | Value::Timestamp(..) => Ok(value),
            Value::Number(..) | Value::BigInt(..) | Value::String(..) => {
                Ok(match to_timestamp(&value, calendar) {
                    Some(v) => Value::Timestamp(v),
                    None => {
                        log::trace!("Date sanitize left {value} unchanged");
                        value
                    }
                })
            }
            Value::Foreign(foreign) => calendar
                .and_then(|c| c.to_timestamp(foreign))
                .map(Value::Timestamp)
                .ok_or_else(|| {
                    type_mismatch_error(format!(
                        "{} is not a date-like value this catalog can recognize",
                        foreign.type_name()
                    ))
                }),
            _ => Err(type_mismatch_error(format!(
                "Cannot interpret a {} value as a date: {value}",
                value.kind_name()
            ))),
        }
    }

    pub(crate) fn are_values_equal(
        &self,
        value: &Value,
        original: &Value,
        calendar: Option<&dyn Calendar>,
    ) -> bool {
        if matches!(value, Value::Now) || matches!(original, Value::Now) {
            return false;
        }
        if value.is_falsy() && original.is_falsy() {
            return true;
        }
        match (
            to_timestamp(value, calendar),
            to_timestamp(original, calendar),
        ) {
            (Some(l), Some(r)) => l == r,
            _ => value == original,
        }
    }

    /// The offset only changes the encoded text, never the instant.
    pub(crate) fn to_bindable_value(
        &self,
        value: &Value,
        options: &BindOptions,
        calendar: Option<&dyn Calendar>,
    ) -> Result<Value> {
        self.validate(value, calendar)?;
        let shifted = local_instant(value, options, calendar)?;
        Ok(Value::String(format_timestamp(shifted, true)?))
    }
}

/// TIME options: fractional seconds precision.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct TimeType {
    pub precision: Option<u8>,
}

impl TimeType {
    pub fn new() -> Self {
        Default::default()
    }
    pub fn precision(mut self, precision: u8) -> Self {
        self.precision = Some(precision);
        self
    }

    pub(crate) fn write_sql(&self, out: &mut String) {
        write_precision(out, "TIME", self.precision);
    }

    pub(crate) fn validate(&self, value: &Value) -> Result<()> {
        match value {
            Value::String(v) if parse_time(v).is_some() => Ok(()),
            Value::Timestamp(..) => Ok(()),
            _ => Err(validation_error(
                format!("{value} is not a valid time"),
                value,
            )),
        }
    }

    pub(crate) fn to_bindable_value(&self, value: &Value) -> Result<Value> {
        self.validate(value)?;
        Ok(match value {
            Value::Timestamp(v) => Value::String(format_time(v.time())?),
            _ => value.clone(),
        })
    }
}

pub(crate) fn validate_date_only(value: &Value) -> Result<()> {
    match value {
        Value::Timestamp(..) => Ok(()),
        Value::Number(..) if epoch_millis(value).is_some() => Ok(()),
        Value::String(v) if parse_date(v).is_some() || parse_timestamp(v).is_some() => Ok(()),
        _ => Err(validation_error(
            format!("{value} is not a valid date only"),
            value,
        )),
    }
}

/// Canonical `YYYY-MM-DD` text.
pub(crate) fn sanitize_date_only(value: Value) -> Value {
    let date = match &value {
        Value::Timestamp(v) => Some(v.date()),
        Value::Number(..) => epoch_millis(&value).map(OffsetDateTime::date),
        Value::String(v) => parse_date(v).or_else(|| parse_timestamp(v).map(|v| v.date())),
        _ => None,
    };
    match date.map(format_date) {
        Some(Ok(v)) => Value::String(v),
        _ => value,
    }
}

pub(crate) fn date_only_values_equal(value: &Value, original: &Value) -> bool {
    if value.is_falsy() && original.is_falsy() {
        return true;
    }
    sanitize_date_only(value.clone()) == sanitize_date_only(original.clone())
}

pub(crate) fn date_only_to_bindable_value(value: &Value) -> Result<Value> {
    validate_date_only(value)?;
    Ok(sanitize_date_only(value.clone()))
}

/// Instant a value represents, epoch numbers are milliseconds.
pub fn to_timestamp(value: &Value, calendar: Option<&dyn Calendar>) -> Option<OffsetDateTime> {
    match value {
        Value::Timestamp(v) => Some(*v),
        Value::Number(..) | Value::BigInt(..) => epoch_millis(value),
        Value::String(v) => parse_timestamp(v),
        Value::Foreign(v) => calendar?.to_timestamp(v),
        _ => None,
    }
}

fn epoch_millis(value: &Value) -> Option<OffsetDateTime> {
    let millis = match value {
        Value::Number(v) if v.is_finite() => *v as i128,
        Value::BigInt(v) => *v,
        _ => return None,
    };
    OffsetDateTime::from_unix_timestamp_nanos(millis.checked_mul(1_000_000)?).ok()
}

/// Parses a timestamp, a missing offset means UTC, a bare date means midnight.
pub fn parse_timestamp(value: &str) -> Option<OffsetDateTime> {
    let value = value.trim();
    if let Ok(v) = OffsetDateTime::parse(value, &Rfc3339) {
        return Some(v);
    }
    OffsetDateTime::parse(
        value,
        format_description!(
            "[year]-[month]-[day] [hour]:[minute]:[second].[subsecond] [offset_hour sign:mandatory]:[offset_minute]"
        ),
    )
    .or(OffsetDateTime::parse(
        value,
        format_description!(
            "[year]-[month]-[day] [hour]:[minute]:[second] [offset_hour sign:mandatory]:[offset_minute]"
        ),
    ))
    .or(OffsetDateTime::parse(
        value,
        format_description!(
            "[year]-[month]-[day] [hour]:[minute]:[second].[subsecond][offset_hour sign:mandatory]:[offset_minute]"
        ),
    ))
    .or(OffsetDateTime::parse(
        value,
        format_description!(
            "[year]-[month]-[day] [hour]:[minute]:[second][offset_hour sign:mandatory]:[offset_minute]"
        ),
    ))
    .or(OffsetDateTime::parse(
        value,
        format_description!(
            "[year]-[month]-[day] [hour]:[minute]:[second].[subsecond][offset_hour sign:mandatory]"
        ),
    ))
    .or(OffsetDateTime::parse(
        value,
        format_description!(
            "[year]-[month]-[day] [hour]:[minute]:[second][offset_hour sign:mandatory]"
        ),
    ))
    .ok()
    .or_else(|| parse_primitive(value).map(PrimitiveDateTime::assume_utc))
    .or_else(|| parse_date(value).map(|v| v.midnight().assume_utc()))
}

fn parse_primitive(value: &str) -> Option<PrimitiveDateTime> {
    PrimitiveDateTime::parse(
        value,
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]"),
    )
    .or(PrimitiveDateTime::parse(
        value,
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
    ))
    .or(PrimitiveDateTime::parse(
        value,
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond]"),
    ))
    .or(PrimitiveDateTime::parse(
        value,
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
    ))
    .or(PrimitiveDateTime::parse(
        value,
        format_description!("[year]-[month]-[day] [hour]:[minute]"),
    ))
    .ok()
}

pub fn parse_date(value: &str) -> Option<Date> {
    Date::parse(value.trim(), format_description!("[year]-[month]-[day]")).ok()
}

pub fn parse_time(value: &str) -> Option<Time> {
    let value = value.trim();
    Time::parse(
        value,
        format_description!("[hour]:[minute]:[second].[subsecond]"),
    )
    .or(Time::parse(
        value,
        format_description!("[hour]:[minute]:[second]"),
    ))
    .or(Time::parse(value, format_description!("[hour]:[minute]")))
    .ok()
}

/// `YYYY-MM-DD HH:MM:SS.mmm[ +HH:MM]`.
pub fn format_timestamp(value: OffsetDateTime, with_offset: bool) -> Result<String> {
    let result = if with_offset {
        value.format(format_description!(
            "[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:3] [offset_hour sign:mandatory]:[offset_minute]"
        ))
    } else {
        value.format(format_description!(
            "[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:3]"
        ))
    };
    Ok(result?)
}

pub fn format_date(value: Date) -> Result<String> {
    Ok(value.format(format_description!("[year]-[month]-[day]"))?)
}

fn format_time(value: Time) -> Result<String> {
    Ok(value.format(format_description!(
        "[hour]:[minute]:[second].[subsecond digits:3]"
    ))?)
}

/// Instant to encode for a DATE value, shifted to the requested offset (UTC by default).
pub fn local_instant(
    value: &Value,
    options: &BindOptions,
    calendar: Option<&dyn Calendar>,
) -> Result<OffsetDateTime> {
    let instant = match value {
        Value::Now => OffsetDateTime::now_utc(),
        _ => to_timestamp(value, calendar)
            .ok_or_else(|| validation_error(format!("{value} is not a valid date"), value))?,
    };
    let offset = options.timezone.unwrap_or(UtcOffset::UTC);
    instant
        .checked_to_offset(offset)
        .ok_or_else(|| validation_error(format!("{value} cannot be shifted to {offset}"), value))
}

fn write_precision(out: &mut String, name: &str, precision: Option<u8>) {
    out.push_str(name);
    if let Some(precision) = precision {
        out.push('(');
        let mut buffer = itoa::Buffer::new();
        out.push_str(buffer.format(precision));
        out.push(')');
    }
}
