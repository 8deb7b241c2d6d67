use crate::utils::error::{NeisError, Result};
use serde_json::Value;

/// Result code the remote API uses for a successful lookup.
pub const CODE_SUCCESS: &str = "INFO-000";
/// Result code for "matched nothing" -- an empty result set, not a failure.
pub const CODE_NO_DATA: &str = "INFO-200";

/// Decoded remote response: either data rows or a legitimate empty result.
/// Remote-side failures surface as errors, never as this type.
#[derive(Debug)]
pub enum Envelope {
    Rows(Vec<Value>),
    Empty,
}

/// Unwraps the two-section array convention every NEIS endpoint shares:
/// section 0 carries `head`, whose second item holds a `RESULT` code/message
/// block, and section 1 carries `row`, the data records.
///
/// Both endpoint families go through here, parameterized by the data key
/// (`schoolInfo`, `elsTimetable`, ...).
pub fn decode_envelope(body: &Value, key: &str, context: &'static str) -> Result<Envelope> {
    let Some(sections) = body.get(key).and_then(Value::as_array) else {
        // Key absent entirely: the API answers this way for zero matches.
        return Ok(Envelope::Empty);
    };

    if sections.len() < 2 {
        // Truncated envelope, head-only "no data" answers included: always an
        // empty result set, never a failure.
        return Ok(Envelope::Empty);
    }

    let result_block = sections
        .first()
        .and_then(|section| section.get("head"))
        .and_then(Value::as_array)
        .and_then(|head| head.get(1))
        .and_then(|item| item.get("RESULT"));

    let Some(result_block) = result_block else {
        return Err(NeisError::EnvelopeShape {
            context,
            detail: format!("'{}' carries no head result block", key),
        });
    };

    let Some(code) = result_block.get("CODE").and_then(Value::as_str) else {
        return Err(NeisError::EnvelopeShape {
            context,
            detail: "result block has no CODE".to_string(),
        });
    };

    match code {
        CODE_NO_DATA => Ok(Envelope::Empty),
        CODE_SUCCESS => {
            let Some(rows) = sections[1].get("row").and_then(Value::as_array) else {
                return Err(NeisError::EnvelopeShape {
                    context,
                    detail: format!("'{}' data section has no row list", key),
                });
            };
            Ok(Envelope::Rows(rows.clone()))
        }
        _ => Err(remote_error(result_block, code)),
    }
}

fn remote_error(result_block: &Value, code: &str) -> NeisError {
    let message = result_block
        .get("MESSAGE")
        .and_then(Value::as_str)
        .unwrap_or("no message provided");
    NeisError::RemoteApi {
        code: code.to_string(),
        message: message.to_string(),
    }
}
