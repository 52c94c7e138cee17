use crate::{
    BindOptions, DataTypeId, Dialect, MAX_SAFE_INTEGER, Result, Value, capability_error,
    configuration_error, dialect::write_declaration, is_integer_string, is_safe_integer,
    parse_float, parse_integer, validation_error, write_number,
};
use rust_decimal::prelude::ToPrimitive;

/// 2^127, integral host numbers below it in magnitude convert to i128 exactly.
const I128_BOUND: f64 = 170141183460469231731687303715884105728.0;

/// Options of TINYINT, SMALLINT, MEDIUMINT, INTEGER and BIGINT.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct IntegerType {
    /// Display width.
    pub length: Option<u32>,
    pub unsigned: bool,
    pub zerofill: bool,
}

impl IntegerType {
    pub fn new() -> Self {
        Default::default()
    }
    pub fn length(mut self, length: u32) -> Self {
        self.length = Some(length);
        self
    }
    pub fn unsigned(mut self) -> Self {
        self.unsigned = true;
        self
    }
    pub fn zerofill(mut self) -> Self {
        self.zerofill = true;
        self
    }

    pub(crate) fn write_sql(&self, out: &mut String, name: &str) {
        write_numeric_declaration(
            out,
            name,
            self.length,
            None,
            self.unsigned,
            self.zerofill,
        );
    }

    pub(crate) fn validate(&self, value: &Value, id: DataTypeId) -> Result<()> {
        let invalid = || {
            validation_error(
                format!("{value} is not a valid {}", id.as_str().to_lowercase()),
                value,
            )
        };
        let negative = match value {
            Value::Number(v) => {
                if !v.is_finite() || v.fract() != 0.0 {
                    return Err(invalid());
                }
                if !is_safe_integer(*v) {
                    return Err(validation_error(
                        format!(
                            "{value} is not a safe integer. Use a string or a big integer to represent it"
                        ),
                        value,
                    ));
                }
                *v < 0.0
            }
            Value::BigInt(v) => *v < 0,
            Value::Decimal(v) if v.is_integer() => v.is_sign_negative() && !v.is_zero(),
            Value::String(v) if is_integer_string(v) => {
                v.starts_with('-') && v.bytes().skip(1).any(|b| b != b'0')
            }
            _ => return Err(invalid()),
        };
        if negative && self.unsigned {
            return Err(validation_error(
                format!(
                    "{value} is not a valid unsigned {}",
                    id.as_str().to_lowercase()
                ),
                value,
            ));
        }
        Ok(())
    }

    /// Integer-looking strings and big integers become numbers, when safe.
    pub(crate) fn sanitize(&self, value: Value) -> Value {
        let parsed = match &value {
            Value::String(v) => parse_integer(v),
            Value::BigInt(v) => Some(*v),
            _ => None,
        };
        match parsed {
            Some(v) if v.unsigned_abs() <= MAX_SAFE_INTEGER as u128 => Value::Number(v as f64),
            _ => {
                log::trace!("Integer sanitize left {value} unchanged");
                value
            }
        }
    }

    /// Always a decimal string, never a lossy host number.
    pub(crate) fn sanitize_big(&self, value: Value) -> Value {
        match &value {
            Value::Number(v) if v.fract() == 0.0 && v.abs() < I128_BOUND => {
                let mut buffer = itoa::Buffer::new();
                Value::String(buffer.format(*v as i128).into())
            }
            Value::String(v) => match parse_integer(v) {
                Some(v) => {
                    let mut buffer = itoa::Buffer::new();
                    Value::String(buffer.format(v).into())
                }
                None => value,
            },
            Value::Decimal(v) if v.is_integer() => Value::String(v.trunc().normalize().to_string()),
            _ => value,
        }
    }

    pub(crate) fn to_bindable_value(&self, value: &Value, id: DataTypeId) -> Result<Value> {
        self.validate(value, id)?;
        Ok(match value {
            Value::Decimal(v) => Value::String(v.trunc().normalize().to_string()),
            _ => value.clone(),
        })
    }

    pub(crate) fn escape(&self, value: &Value, id: DataTypeId) -> Result<String> {
        let mut out = String::new();
        match self.to_bindable_value(value, id)? {
            Value::Number(v) => write_number(&mut out, v),
            Value::BigInt(v) => {
                let mut buffer = itoa::Buffer::new();
                out.push_str(buffer.format(v));
            }
            Value::String(v) => out.push_str(&v),
            v => {
                return Err(validation_error(
                    format!("{v} cannot be escaped as an integer"),
                    &v,
                ));
            }
        }
        Ok(out)
    }
}

/// Options of FLOAT, REAL and DOUBLE.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct FloatType {
    pub length: Option<u32>,
    pub decimals: Option<u32>,
    pub unsigned: bool,
    pub zerofill: bool,
}

impl FloatType {
    pub fn new() -> Self {
        Default::default()
    }
    pub fn length(mut self, length: u32) -> Self {
        self.length = Some(length);
        self
    }
    pub fn decimals(mut self, decimals: u32) -> Self {
        self.decimals = Some(decimals);
        self
    }
    pub fn unsigned(mut self) -> Self {
        self.unsigned = true;
        self
    }
    pub fn zerofill(mut self) -> Self {
        self.zerofill = true;
        self
    }

    pub(crate) fn write_sql(&self, out: &mut String, name: &str) {
        write_numeric_declaration(
            out,
            name,
            self.length,
            self.decimals,
            self.unsigned,
            self.zerofill,
        );
    }

    /// NaN and the infinities are valid floats.
    pub(crate) fn validate(&self, value: &Value, id: DataTypeId) -> Result<()> {
        match value {
            Value::Number(..) | Value::BigInt(..) | Value::Decimal(..) => Ok(()),
            Value::String(v) if parse_float(v).is_some() => Ok(()),
            _ => Err(validation_error(
                format!("{value} is not a valid {}", id.as_str().to_lowercase()),
                value,
            )),
        }
    }

    pub(crate) fn sanitize(&self, value: Value) -> Value {
        match &value {
            Value::String(v) => parse_float(v).map(Value::Number).unwrap_or(value),
            _ => value,
        }
    }

    pub(crate) fn to_bindable_value(&self, value: &Value, id: DataTypeId) -> Result<Value> {
        self.validate(value, id)?;
        let number = match value {
            Value::Number(v) => *v,
            Value::BigInt(v) => *v as f64,
            Value::Decimal(v) => v.to_f64().unwrap_or(f64::NAN),
            Value::String(v) => parse_float(v).unwrap_or(f64::NAN),
            _ => f64::NAN,
        };
        Ok(if number.is_nan() {
            Value::String("NaN".into())
        } else if number.is_infinite() {
            Value::String(
                if number.is_sign_negative() {
                    "-Infinity"
                } else {
                    "Infinity"
                }
                .into(),
            )
        } else {
            Value::Number(number)
        })
    }

    pub(crate) fn escape(&self, value: &Value, options: &BindOptions, id: DataTypeId) -> Result<String> {
        Ok(match self.to_bindable_value(value, id)? {
            Value::Number(v) => {
                let mut out = String::new();
                write_number(&mut out, v);
                out
            }
            Value::String(v) => options.dialect.escape_string(&v),
            v => {
                return Err(validation_error(
                    format!("{v} cannot be escaped as a float"),
                    &v,
                ));
            }
        })
    }
}

/// Precision and scale, both or neither.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalOptions {
    pub precision: Option<u32>,
    pub scale: Option<u32>,
    pub unsigned: bool,
    pub zerofill: bool,
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct DecimalType {
    precision_scale: Option<(u32, u32)>,
    pub unsigned: bool,
    pub zerofill: bool,
}

impl DecimalType {
    pub fn new(precision: u32, scale: u32) -> Self {
        Self {
            precision_scale: Some((precision, scale)),
            ..Default::default()
        }
    }
    /// Neither precision nor scale, legal only where the dialect supports it.
    pub fn unconstrained() -> Self {
        Default::default()
    }
    pub fn precision(&self) -> Option<u32> {
        self.precision_scale.map(|v| v.0)
    }
    pub fn scale(&self) -> Option<u32> {
        self.precision_scale.map(|v| v.1)
    }
    pub fn is_unconstrained(&self) -> bool {
        self.precision_scale.is_none()
    }
    pub fn unsigned(mut self) -> Self {
        self.unsigned = true;
        self
    }
    pub fn zerofill(mut self) -> Self {
        self.zerofill = true;
        self
    }

    pub(crate) fn write_sql(&self, out: &mut String, name: &str) {
        write_numeric_declaration(
            out,
            name,
            self.precision(),
            self.scale(),
            self.unsigned,
            self.zerofill,
        );
    }

    pub(crate) fn check_support(&self, dialect: &dyn Dialect) -> Result<()> {
        if self.is_unconstrained()
            && dialect.capabilities().feature("DECIMAL", "unconstrained") != Some(true)
        {
            return Err(capability_error(dialect.name(), "DECIMAL.unconstrained"));
        }
        Ok(())
    }

    pub(crate) fn validate(&self, value: &Value) -> Result<()> {
        match value {
            Value::Number(v) if v.is_finite() => Ok(()),
            Value::BigInt(..) | Value::Decimal(..) => Ok(()),
            Value::String(v) if is_decimal_string(v) => Ok(()),
            _ => Err(validation_error(
                format!("{value} is not a valid decimal"),
                value,
            )),
        }
    }

    pub(crate) fn to_bindable_value(&self, value: &Value) -> Result<Value> {
        self.validate(value)?;
        Ok(match value {
            Value::Decimal(v) => Value::String(v.to_string()),
            Value::BigInt(v) => {
                let mut buffer = itoa::Buffer::new();
                Value::String(buffer.format(*v).into())
            }
            _ => value.clone(),
        })
    }

    /// Validated values are written unquoted.
    pub(crate) fn escape(&self, value: &Value) -> Result<String> {
        Ok(match self.to_bindable_value(value)? {
            Value::Number(v) => {
                let mut out = String::new();
                write_number(&mut out, v);
                out
            }
            Value::String(v) => v,
            v => {
                return Err(validation_error(
                    format!("{v} cannot be escaped as a decimal"),
                    &v,
                ));
            }
        })
    }
}

impl TryFrom<DecimalOptions> for DecimalType {
    type Error = crate::Error;

    fn try_from(options: DecimalOptions) -> Result<Self> {
        let precision_scale = match (options.precision, options.scale) {
            (Some(precision), Some(scale)) => {
                if scale > precision {
                    return Err(configuration_error(format!(
                        "The scale of a DECIMAL ({scale}) cannot exceed its precision ({precision})"
                    )));
                }
                Some((precision, scale))
            }
            (None, None) => None,
            _ => {
                return Err(configuration_error(
                    "The DECIMAL data type requires that the precision and scale be specified together, or not at all",
                ));
            }
        };
        Ok(Self {
            precision_scale,
            unsigned: options.unsigned,
            zerofill: options.zerofill,
        })
    }
}

/// Shared numeric renderer: `NAME(length[,decimals])[ UNSIGNED][ ZEROFILL]`.
pub fn write_numeric_declaration(
    out: &mut String,
    name: &str,
    length: Option<u32>,
    decimals: Option<u32>,
    unsigned: bool,
    zerofill: bool,
) {
    match (length, decimals) {
        (Some(length), Some(decimals)) => write_declaration(out, name, &[length, decimals]),
        (Some(length), None) => write_declaration(out, name, &[length]),
        _ => out.push_str(name),
    }
    if unsigned {
        out.push_str(" UNSIGNED");
    }
    if zerofill {
        out.push_str(" ZEROFILL");
    }
}

/// UNSIGNED and ZEROFILL need the dialect not to reject them.
pub(crate) fn check_numeric_flags(
    dialect: &dyn Dialect,
    id: DataTypeId,
    unsigned: bool,
    zerofill: bool,
) -> Result<()> {
    let capabilities = dialect.capabilities();
    if zerofill && capabilities.is_unsupported("ZEROFILL") {
        return Err(capability_error(dialect.name(), format!("{id}.ZEROFILL")));
    }
    if unsigned && capabilities.is_unsupported("UNSIGNED") {
        return Err(capability_error(dialect.name(), format!("{id}.UNSIGNED")));
    }
    Ok(())
}

/// Matches `-?digits[.digits][e[+-]digits]`.
pub fn is_decimal_string(value: &str) -> bool {
    let mut input = value.strip_prefix('-').unwrap_or(value);
    let integral = crate::consume_while(&mut input, char::is_ascii_digit);
    let mut fraction = "";
    if let Some(rest) = input.strip_prefix('.') {
        input = rest;
        fraction = crate::consume_while(&mut input, char::is_ascii_digit);
    }
    if integral.is_empty() && fraction.is_empty() {
        return false;
    }
    if let Some(rest) = input.strip_prefix(['e', 'E']) {
        input = rest.strip_prefix(['+', '-']).unwrap_or(rest);
        if crate::consume_while(&mut input, char::is_ascii_digit).is_empty() {
            return false;
        }
    }
    input.is_empty()
}
