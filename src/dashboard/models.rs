// Copyright 2025 RustFS Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use serde::{Deserialize, Serialize};

/// 通用响应格式
///
/// Every dashboard endpoint wraps its payload this way, also on failure.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommonResponse<T> {
    #[serde(default)]
    pub successful: bool,

    #[serde(default)]
    pub message: String,

    pub data: Option<T>,
}

impl<T> CommonResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            successful: true,
            message: String::new(),
            data: Some(data),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            successful: false,
            message: message.into(),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::v1::backup::ScheduleDate;

    #[test]
    fn test_missing_data_without_default_payload() {
        // ScheduleDate has no Default, the envelope must still decode
        let response: CommonResponse<ScheduleDate> =
            serde_json::from_str(r#"{"successful": true, "message": "ok"}"#).expect("deserialize");
        assert!(response.successful);
        assert_eq!(response.data, None);

        let response: CommonResponse<ScheduleDate> =
            serde_json::from_str(r#"{"successful": true, "data": {"day": 2, "backupType": "Full"}}"#)
                .expect("deserialize");
        assert_eq!(response.data.map(|d| d.day), Some(2));
    }

    #[test]
    fn test_envelope_constructors() {
        let ok = serde_json::to_value(CommonResponse::ok(1)).expect("serialize");
        assert_eq!(ok, serde_json::json!({"successful": true, "message": "", "data": 1}));

        let failed = CommonResponse::<()>::failed("pools is empty");
        assert!(!failed.successful);
        assert_eq!(failed.message, "pools is empty");
        assert!(failed.data.is_none());
    }
}
