use crate::{Error, Result, Value, validation_error};
use std::collections::BTreeMap;

/// A flat mapping whose values are all strings (or null).
pub(crate) fn validate_hstore(value: &Value) -> Result<()> {
    let Value::Map(entries) = value else {
        return Err(validation_error(
            format!("{value} is not a valid hstore, it must be a plain object"),
            value,
        ));
    };
    if let Some((key, entry)) = entries
        .iter()
        .find(|(_, v)| !matches!(v, Value::String(..) | Value::Null))
    {
        return Err(validation_error(
            format!(
                "{value} is not a valid hstore, its values must be strings but {key} is {entry}"
            ),
            value,
        ));
    }
    Ok(())
}

/// `"key"=>"value", "other"=>NULL`.
pub fn stringify_hstore(entries: &BTreeMap<String, Value>) -> String {
    let mut out = String::new();
    crate::separated_by(
        &mut out,
        entries,
        |out, (k, v)| {
            write_hstore_item(out, k);
            out.push_str("=>");
            match v.as_str() {
                Some(v) => write_hstore_item(out, v),
                None => out.push_str("NULL"),
            }
        },
        ",",
    );
    out
}

fn write_hstore_item(out: &mut String, value: &str) {
    out.push('"');
    for c in value.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
}

/// Reads back the literal produced by [`stringify_hstore`] (or returned by the driver).
pub fn parse_hstore(value: &str) -> Result<BTreeMap<String, Value>> {
    let mut result = BTreeMap::new();
    let mut input = value.trim();
    while !input.is_empty() {
        let key = read_hstore_item(&mut input)?.ok_or_else(|| {
            Error::msg(format!(
                "Unexpected NULL key in hstore literal `{}`",
                crate::truncate_long!(value)
            ))
        })?;
        input = input.trim_start().strip_prefix("=>").ok_or_else(|| {
            Error::msg(format!(
                "Expected `=>` after key `{key}` in hstore literal `{}`",
                crate::truncate_long!(value)
            ))
        })?;
        let item = read_hstore_item(&mut input)?;
        result.insert(key, item.map(Value::String).unwrap_or(Value::Null));
        input = input.trim_start();
        input = input.strip_prefix(',').unwrap_or(input).trim_start();
    }
    Ok(result)
}

fn read_hstore_item(input: &mut &str) -> Result<Option<String>> {
    *input = input.trim_start();
    if let Some(rest) = input.strip_prefix("NULL") {
        if rest
            .chars()
            .next()
            .is_none_or(|c| c.is_whitespace() || c == ',' || c == '=')
        {
            *input = rest;
            return Ok(None);
        }
    }
    let Some(rest) = input.strip_prefix('"') else {
        // Unquoted token
        let token = crate::consume_while(input, |c| !c.is_whitespace() && *c != ',' && *c != '=');
        return Ok(Some(token.to_string()));
    };
    let mut item = String::new();
    let mut chars = rest.char_indices();
    while let Some((i, c)) = chars.next() {
        match c {
            '\\' => {
                if let Some((_, c)) = chars.next() {
                    item.push(c);
                }
            }
            '"' => {
                *input = &rest[i + 1..];
                return Ok(Some(item));
            }
            _ => item.push(c),
        }
    }
    Err(Error::msg(format!(
        "Unterminated hstore item `{}`",
        crate::truncate_long!(rest)
    )))
}

pub(crate) fn hstore_to_bindable_value(value: &Value) -> Result<Value> {
    validate_hstore(value)?;
    match value {
        Value::Map(entries) => Ok(Value::String(stringify_hstore(entries))),
        _ => Ok(value.clone()),
    }
}

/// Driver returned text goes back to a mapping, anything else is left alone.
pub(crate) fn parse_hstore_value(value: Value) -> Result<Value> {
    match &value {
        Value::String(v) => parse_hstore(v)
            .map(Value::Map)
            .map_err(|e| validation_error(format!("{e:#}"), &value)),
        _ => Ok(value),
    }
}

pub(crate) fn validate_json(value: &Value) -> Result<()> {
    value
        .to_json()
        .map(|_| ())
        .map_err(|e| validation_error(format!("{value} is not a valid JSON value: {e}"), value))
}

/// Serialized JSON text.
pub(crate) fn json_to_bindable_value(value: &Value) -> Result<Value> {
    let json = value
        .to_json()
        .map_err(|e| validation_error(format!("{value} is not a valid JSON value: {e}"), value))?;
    Ok(Value::String(serde_json::to_string(&json)?))
}

/// For backends returning JSON columns as text.
pub fn parse_json_text(value: Value) -> Result<Value> {
    match &value {
        Value::String(v) => match serde_json::from_str::<serde_json::Value>(v) {
            Ok(json) => Ok(json.into()),
            Err(e) => Err(validation_error(
                format!("Received invalid JSON from the database: {e}"),
                &value,
            )),
        },
        _ => Ok(value),
    }
}
