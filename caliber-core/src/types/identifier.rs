use crate::{Result, Value, validation_error};
use uuid::Uuid;

/// Hyphenated UUID text, of the requested version when given.
pub(crate) fn validate_uuid(value: &Value, version: Option<usize>) -> Result<()> {
    let name = match version {
        Some(1) => "uuidv1",
        Some(4) => "uuidv4",
        _ => "uuid",
    };
    let valid = match value {
        Value::String(v) => is_hyphenated(v)
            .then(|| Uuid::try_parse(v).ok())
            .flatten()
            .is_some_and(|uuid| version.is_none_or(|version| uuid.get_version_num() == version)),
        _ => false,
    };
    if !valid {
        return Err(validation_error(
            format!("{value} is not a valid {name}"),
            value,
        ));
    }
    Ok(())
}

fn is_hyphenated(value: &str) -> bool {
    value.len() == 36
        && value
            .char_indices()
            .all(|(i, c)| matches!(i, 8 | 13 | 18 | 23) == (c == '-'))
}

/// Fresh identifier of the given version, as text.
pub(crate) fn generate(version: usize) -> Value {
    let uuid = match version {
        1 => {
            let mut node = [0u8; 6];
            node.copy_from_slice(&Uuid::new_v4().as_bytes()[..6]);
            // Random node ids carry the multicast bit
            node[0] |= 0x01;
            Uuid::now_v1(&node)
        }
        _ => Uuid::new_v4(),
    };
    Value::String(uuid.hyphenated().to_string())
}
