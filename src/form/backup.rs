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

use crate::form::encrypt::{Encryptor, encrypt_field};
use crate::types::error::Error;
use crate::types::v1::backup::{BackupPolicy, BackupPolicyBody, BackupType, ScheduleDate};
use crate::utils::time::{format_schedule_time, parse_schedule_time};
use chrono::NaiveTime;
use serde::de::{Deserializer, Error as _};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

const MODE_KEY: &str = "mode";
const DAYS_KEY: &str = "days";

/// Schedule picker state: `{"mode": "Weekly", "days": [1, 3], "1": "Full", "3": "Incremental"}`.
///
/// Day keys sit next to the `mode`/`days` metadata in one object. Other
/// non-numeric keys are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScheduleDatesForm {
    pub mode: String,
    /// UI only, never sent
    pub days: Vec<u8>,
    pub entries: BTreeMap<u8, BackupType>,
}

impl ScheduleDatesForm {
    /// Whether any scheduled day runs a full backup
    pub fn has_full_backup(&self) -> bool {
        self.entries.values().any(|t| *t == BackupType::Full)
    }
}

pub fn has_full_backup_scheduled(schedule_dates: &ScheduleDatesForm) -> bool {
    schedule_dates.has_full_backup()
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[serde(untagged)]
enum RawKey {
    Day(u8),
    Name(String),
}

fn is_day_key(key: &str) -> bool {
    !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit())
}

impl<'de> Deserialize<'de> for ScheduleDatesForm {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<RawKey, serde_json::Value>::deserialize(deserializer)?;
        let mut form = ScheduleDatesForm::default();

        for (key, value) in raw {
            let day = match key {
                RawKey::Day(day) => day,
                RawKey::Name(name) if name == MODE_KEY => {
                    form.mode = serde_json::from_value(value).map_err(D::Error::custom)?;
                    continue;
                }
                RawKey::Name(name) if name == DAYS_KEY => {
                    form.days = serde_json::from_value(value).map_err(D::Error::custom)?;
                    continue;
                }
                RawKey::Name(name) if is_day_key(&name) => name.parse::<u8>().map_err(|_| {
                    D::Error::custom(format!("schedule day '{}' is out of range", name))
                })?,
                RawKey::Name(_) => continue,
            };
            let backup_type = serde_json::from_value(value).map_err(D::Error::custom)?;
            form.entries.insert(day, backup_type);
        }

        Ok(form)
    }
}

impl Serialize for ScheduleDatesForm {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len() + 2))?;
        map.serialize_entry(MODE_KEY, &self.mode)?;
        map.serialize_entry(DAYS_KEY, &self.days)?;
        for (day, backup_type) in &self.entries {
            map.serialize_entry(&day.to_string(), backup_type)?;
        }
        map.end()
    }
}

/// Backup policy edit form
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BackupConfigEditable {
    #[serde(default)]
    pub dest_type: String,

    #[serde(default)]
    pub archive_path: String,

    #[serde(default)]
    pub bak_data_path: String,

    #[serde(with = "crate::utils::time::schedule_time")]
    pub schedule_time: NaiveTime,

    pub schedule_dates: ScheduleDatesForm,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oss_access_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oss_access_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bak_encryption_password: Option<String>,
}

/// Converts the edit form into a backup policy request body.
///
/// Credentials are encrypted only when a public key is given, otherwise they
/// pass through as typed.
pub fn normalize_backup_form<E>(
    input: &BackupConfigEditable,
    encryptor: &E,
    public_key: Option<&str>,
) -> Result<BackupPolicyBody, Error>
where
    E: Encryptor + ?Sized,
{
    let protect = |field: &str, value: &Option<String>| -> Result<Option<String>, Error> {
        match (value.as_deref(), public_key) {
            (Some(plain), Some(key)) if !plain.is_empty() => {
                encrypt_field(encryptor, field, plain, key).map(Some)
            }
            _ => Ok(value.clone()),
        }
    };

    if public_key.is_none() {
        debug!("no public key given, backup credentials are sent as typed");
    }

    Ok(BackupPolicyBody {
        dest_type: input.dest_type.clone(),
        archive_path: input.archive_path.clone(),
        bak_data_path: input.bak_data_path.clone(),
        schedule_type: input.schedule_dates.mode.clone(),
        schedule_time: format_schedule_time(input.schedule_time),
        schedule_dates: input
            .schedule_dates
            .entries
            .iter()
            .map(|(day, backup_type)| ScheduleDate {
                day: *day,
                backup_type: *backup_type,
            })
            .collect(),
        oss_access_id: protect("ossAccessId", &input.oss_access_id)?,
        oss_access_key: protect("ossAccessKey", &input.oss_access_key)?,
        bak_encryption_password: protect("bakEncryptionPassword", &input.bak_encryption_password)?,
    })
}

/// Fills the edit form from a stored policy. `None` means no policy is configured.
pub fn denormalize_backup_policy(
    policy: Option<&BackupPolicy>,
) -> Result<Option<BackupConfigEditable>, Error> {
    let Some(policy) = policy else {
        return Ok(None);
    };

    let schedule_dates = ScheduleDatesForm {
        mode: policy.schedule_type.clone(),
        days: policy.schedule_dates.iter().map(|d| d.day).collect(),
        entries: policy
            .schedule_dates
            .iter()
            .map(|d| (d.day, d.backup_type))
            .collect(),
    };

    Ok(Some(BackupConfigEditable {
        dest_type: policy.dest_type.clone(),
        archive_path: policy.archive_path.clone(),
        bak_data_path: policy.bak_data_path.clone(),
        schedule_time: parse_schedule_time("scheduleTime", &policy.schedule_time)?,
        schedule_dates,
        oss_access_id: None,
        oss_access_key: None,
        bak_encryption_password: None,
    }))
}

/// Compares a stored policy with an edited request body.
///
/// A field the stored policy does not carry (credentials) counts as a change
/// as soon as the body sets it.
pub fn policy_unchanged(previous: &BackupPolicy, current: &BackupPolicyBody) -> bool {
    let fields = [
        ("destType", previous.dest_type == current.dest_type),
        ("archivePath", previous.archive_path == current.archive_path),
        ("bakDataPath", previous.bak_data_path == current.bak_data_path),
        ("scheduleType", previous.schedule_type == current.schedule_type),
        ("scheduleTime", previous.schedule_time == current.schedule_time),
        ("ossAccessId", current.oss_access_id.is_none()),
        ("ossAccessKey", current.oss_access_key.is_none()),
        (
            "bakEncryptionPassword",
            current.bak_encryption_password.is_none(),
        ),
        (
            "scheduleDates",
            schedule_dates_equal(&previous.schedule_dates, &current.schedule_dates),
        ),
    ];

    match fields.iter().find(|(_, same)| !same) {
        Some((field, _)) => {
            debug!("backup policy field {} changed", field);
            false
        }
        None => true,
    }
}

fn schedule_dates_equal(previous: &[ScheduleDate], current: &[ScheduleDate]) -> bool {
    if previous.len() != current.len() {
        return false;
    }
    previous.iter().all(|pre| {
        current
            .iter()
            .find(|cur| cur.day == pre.day)
            .is_some_and(|cur| cur.backup_type == pre.backup_type)
    })
}
