//! Result envelope wrapping every mock/console API payload.

use serde::{Deserialize, Serialize};

pub const RESULT_CODE_SUCCESS: i32 = 200;
pub const RESULT_TYPE_SUCCESS: &str = "success";
pub const RESULT_TYPE_ERROR: &str = "error";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub code: i32,
    pub data: Option<T>,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl<T> Envelope<T> {
    pub fn success(data: T) -> Self {
        Self {
            code: RESULT_CODE_SUCCESS,
            data: Some(data),
            message: "ok".to_string(),
            kind: RESULT_TYPE_SUCCESS.to_string(),
        }
    }

    pub fn error(code: i32, message: &str) -> Self {
        Self {
            code,
            data: None,
            message: message.to_string(),
            kind: RESULT_TYPE_ERROR.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == RESULT_CODE_SUCCESS
    }

    /// Payload of a successful envelope.
    pub fn into_data(self) -> Option<T> {
        if self.is_success() {
            self.data
        } else {
            None
        }
    }
}
