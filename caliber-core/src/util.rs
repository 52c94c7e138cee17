use crate::MAX_SAFE_INTEGER;

pub fn separated_by<T, F>(
    out: &mut String,
    values: impl IntoIterator<Item = T>,
    mut f: F,
    separator: &str,
) where
    F: FnMut(&mut String, T),
{
    let mut len = out.len();
    for v in values {
        if out.len() > len {
            out.push_str(separator);
        }
        len = out.len();
        f(out, v);
    }
}

pub fn consume_while<'s>(input: &mut &'s str, predicate: impl FnMut(&char) -> bool) -> &'s str {
    let len = input
        .chars()
        .take_while(predicate)
        .map(char::len_utf8)
        .sum::<usize>();
    if len == 0 {
        return "";
    }
    let result = &input[..len];
    *input = &input[len..];
    result
}

/// Writes a number the way a host scripting runtime would print it: integral
/// values without fraction, the rest in shortest round-trip form.
pub fn write_number(out: &mut String, value: f64) {
    if value.is_nan() {
        out.push_str("NaN");
    } else if value.is_infinite() {
        out.push_str(if value.is_sign_negative() {
            "-Infinity"
        } else {
            "Infinity"
        });
    } else if value.fract() == 0.0 && value.abs() < 1e21 {
        let mut buffer = itoa::Buffer::new();
        out.push_str(buffer.format(value as i128));
    } else {
        let mut buffer = ryu::Buffer::new();
        out.push_str(buffer.format(value));
    }
}

pub fn number_to_string(value: f64) -> String {
    let mut out = String::new();
    write_number(&mut out, value);
    out
}

pub fn is_safe_integer(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER as f64
}

/// Matches `-?[0-9]+`.
pub fn is_integer_string(value: &str) -> bool {
    let digits = value.strip_prefix('-').unwrap_or(value);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Parses `-?[0-9]+` into an i128, `None` on anything else or on overflow.
pub fn parse_integer(value: &str) -> Option<i128> {
    use atoi::FromRadix10SignedChecked;
    if !is_integer_string(value) {
        return None;
    }
    match i128::from_radix_10_signed_checked(value.as_bytes()) {
        (Some(v), used) if used == value.len() => Some(v),
        _ => None,
    }
}

/// Parses a complete floating point literal, `None` when trailing input remains.
pub fn parse_float(value: &str) -> Option<f64> {
    match value {
        "NaN" => Some(f64::NAN),
        "Infinity" => Some(f64::INFINITY),
        "-Infinity" => Some(f64::NEG_INFINITY),
        _ if value.is_empty() || value.trim() != value => None,
        _ => match fast_float::parse_partial::<f64, _>(value) {
            Ok((v, used)) if used == value.len() && v.is_finite() => Some(v),
            _ => None,
        },
    }
}

#[macro_export]
macro_rules! truncate_long {
    ($query:expr) => {
        format_args!(
            "{}{}",
            &$query[..$query
                .char_indices()
                .nth(497)
                .map(|(i, _)| i)
                .unwrap_or($query.len())],
            if $query.chars().count() > 497 { "..." } else { "" },
        )
    };
}
