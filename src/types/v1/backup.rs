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
use strum::{Display, EnumString};

#[derive(Deserialize, Serialize, Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
pub enum BackupType {
    #[strum(to_string = "Full")]
    Full,

    #[strum(to_string = "Incremental")]
    Incremental,
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDate {
    pub day: u8,
    pub backup_type: BackupType,
}

/// Stored backup policy, as returned by `GET .../backupPolicy`.
///
/// Fields outside this set are dropped on deserialization.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BackupPolicy {
    #[serde(default)]
    pub dest_type: String,

    #[serde(default)]
    pub archive_path: String,

    #[serde(default)]
    pub bak_data_path: String,

    #[serde(default)]
    pub schedule_type: String,

    /// `HH:mm`
    #[serde(default)]
    pub schedule_time: String,

    #[serde(default)]
    pub schedule_dates: Vec<ScheduleDate>,
}

/// Request body of `PUT`/`POST .../backupPolicy`
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BackupPolicyBody {
    pub dest_type: String,
    pub archive_path: String,
    pub bak_data_path: String,
    pub schedule_type: String,
    pub schedule_time: String,
    pub schedule_dates: Vec<ScheduleDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oss_access_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oss_access_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bak_encryption_password: Option<String>,
}

/// Backup job kinds addressable by `GET .../backup/{type}/jobs`
#[derive(Deserialize, Serialize, Clone, Copy, Debug, Display, EnumString, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
#[strum(ascii_case_insensitive)]
pub enum JobType {
    #[strum(to_string = "FULL")]
    Full,

    #[strum(to_string = "INC")]
    Inc,

    #[strum(to_string = "ARCHIVE")]
    Archive,

    #[strum(to_string = "CLEAN")]
    Clean,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct BackupJob {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub type_: String,
    pub status: String,
    pub status_in_database: String,
    pub encryption_secret: String,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, Display, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum RestoreJobStatus {
    #[strum(to_string = "STARTING")]
    Starting,

    #[strum(to_string = "RUNNING")]
    Running,

    #[strum(to_string = "FAILED")]
    Failed,

    #[strum(to_string = "SUCCESSFUL")]
    Successful,

    #[strum(to_string = "CANCELED")]
    Canceled,

    #[strum(to_string = "ACTIVATING")]
    Activating,

    #[strum(to_string = "REPLAYING")]
    Replaying,
}

impl RestoreJobStatus {
    /// Whether the restore job will not change state anymore
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            RestoreJobStatus::Failed | RestoreJobStatus::Successful | RestoreJobStatus::Canceled
        )
    }
}
