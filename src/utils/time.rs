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

use crate::types::error::Error;
use chrono::{NaiveDate, NaiveTime};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const SCHEDULE_TIME_FORMAT: &str = "%H:%M";

/// `YYYY-MM-DD HH:mm:ss`, the restore-until format the API expects
pub fn format_timestamp(date: NaiveDate, time: NaiveTime) -> String {
    date.and_time(time).format(TIMESTAMP_FORMAT).to_string()
}

/// 24-hour `HH:mm`
pub fn format_schedule_time(time: NaiveTime) -> String {
    time.format(SCHEDULE_TIME_FORMAT).to_string()
}

/// Accepts `HH:mm` as stored by the API, or `HH:mm:ss`.
pub fn parse_schedule_time(field: &str, value: &str) -> Result<NaiveTime, Error> {
    NaiveTime::parse_from_str(value, SCHEDULE_TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|e| Error::malformed(field, format!("invalid time '{}': {}", value, e)))
}

/// Serde adapter writing `HH:mm` and reading either schedule time form
pub mod schedule_time {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_schedule_time(*time))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        super::parse_schedule_time("scheduleTime", &value).map_err(de::Error::custom)
    }
}
