use serde::Deserialize;
use serde_json::{Map, Value};

use super::error::ClientError;
use super::models::Record;
use super::redact;

pub const SUCCESS: &str = "success";
const NO_ERROR_TEXT: &str = "no error text provided";

/// A body that has already been confirmed as `result: "success"`.
#[derive(Debug)]
pub struct ApiResponse {
    command: &'static str,
    fields: Map<String, Value>,
}

impl ApiResponse {
    /// Decode `body` and check its `result` marker.
    pub fn interpret(
        command: &'static str,
        body: &[u8],
        secrets: &[&str],
    ) -> Result<Self, ClientError> {
        let fields: Map<String, Value> =
            serde_json::from_slice(body).map_err(|source| ClientError::Decode {
                command,
                len: body.len(),
                snippet: redact::snippet(body, secrets),
                source,
            })?;

        match fields.get("result") {
            Some(Value::String(result)) if result == SUCCESS => Ok(Self { command, fields }),
            Some(_) => Err(api_error(command, &fields, secrets)),
            None => Err(ClientError::Contract {
                command,
                reason: "`result` field is missing".to_string(),
            }),
        }
    }

    pub fn into_records(self) -> Result<Vec<Record>, ClientError> {
        let command = self.command;
        let answer = self.fields.get("answer").ok_or_else(|| ClientError::Contract {
            command,
            reason: "`answer` field is missing".to_string(),
        })?;

        let entries = answer.as_array().ok_or_else(|| ClientError::Contract {
            command,
            reason: format!("`answer` is {}, expected an array", kind_of(answer)),
        })?;

        entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                Record::deserialize(entry).map_err(|e| ClientError::Contract {
                    command,
                    reason: format!("`answer[{index}]` is not a record: {e}"),
                })
            })
            .collect()
    }
}

fn api_error(command: &'static str, fields: &Map<String, Value>, secrets: &[&str]) -> ClientError {
    let code = fields.get("error_code").and_then(scalar_text);
    let text = fields
        .get("error_text")
        .and_then(scalar_text)
        .or_else(|| code.clone())
        .unwrap_or_else(|| NO_ERROR_TEXT.to_string());

    ClientError::Api {
        command,
        code,
        text: redact::scrub(&text, secrets),
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
