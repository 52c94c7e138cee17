use crate::{Result, Value, validation_error};
use std::net::IpAddr;

pub(crate) fn validate_cidr(value: &Value) -> Result<()> {
    let valid = value.as_str().is_some_and(|v| {
        let Some((address, prefix)) = v.split_once('/') else {
            return false;
        };
        let Ok(address) = address.parse::<IpAddr>() else {
            return false;
        };
        let max = if address.is_ipv4() { 32 } else { 128 };
        !prefix.is_empty()
            && prefix.bytes().all(|b| b.is_ascii_digit())
            && prefix.parse::<u8>().is_ok_and(|v| v <= max)
    });
    if !valid {
        return Err(validation_error(
            format!("{value} is not a valid CIDR"),
            value,
        ));
    }
    Ok(())
}

pub(crate) fn validate_inet(value: &Value) -> Result<()> {
    if !value.as_str().is_some_and(|v| v.parse::<IpAddr>().is_ok()) {
        return Err(validation_error(
            format!("{value} is not a valid INET"),
            value,
        ));
    }
    Ok(())
}

/// Six hex pairs separated by `:` or `-`, consistently.
pub(crate) fn validate_macaddr(value: &Value) -> Result<()> {
    let valid = value.as_str().is_some_and(|v| {
        let separator = if v.contains('-') { '-' } else { ':' };
        let parts = v.split(separator).collect::<Vec<_>>();
        parts.len() == 6
            && parts
                .iter()
                .all(|p| p.len() == 2 && p.bytes().all(|b| b.is_ascii_hexdigit()))
    });
    if !valid {
        return Err(validation_error(
            format!("{value} is not a valid MACADDR"),
            value,
        ));
    }
    Ok(())
}
