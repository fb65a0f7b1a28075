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
use crate::types::v1::tenant::{
    ReplicaType, ResourcePool, RestoreSource, RestoreUntil, TenantBody, TenantRole, TenantSource,
    UnitConfig,
};
use crate::utils::time::format_timestamp;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

const SIZE_SUFFIX: &str = "Gi";

/// State of the tenant creation form
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TenantFormInput {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub namespace: Option<String>,

    #[serde(default)]
    pub tenant_name: Option<String>,

    #[serde(default)]
    pub unit_num: Option<i32>,

    #[serde(default)]
    pub charset: Option<String>,

    #[serde(default)]
    pub tenant_role: Option<TenantRole>,

    /// Overridden by the cluster the form was opened from
    #[serde(default)]
    pub obcluster: Option<String>,

    #[serde(default)]
    pub connect_white_list: Option<Vec<String>>,

    /// zone name -> priority
    #[serde(default)]
    pub pools: Option<BTreeMap<String, PoolPriority>>,

    #[serde(default)]
    pub source: Option<SourceInput>,

    #[serde(default)]
    pub root_password: Option<String>,

    #[serde(default)]
    pub unit_config: Option<UnitConfigInput>,
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PoolPriority {
    #[serde(default)]
    pub priority: Option<i32>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct SourceInput {
    #[serde(default)]
    pub tenant: Option<String>,

    #[serde(default)]
    pub restore: Option<RestoreInput>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RestoreInput {
    #[serde(rename = "type", default)]
    pub type_: Option<String>,

    #[serde(default)]
    pub archive_source: Option<String>,

    #[serde(default)]
    pub bak_data_source: Option<String>,

    pub oss_access_id: String,

    pub oss_access_key: String,

    #[serde(default)]
    pub bak_encryption_password: Option<String>,

    #[serde(default)]
    pub until: Option<UntilInput>,
}

/// Date and time pickers of the restore form
#[derive(Deserialize, Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UntilInput {
    #[serde(default)]
    pub date: Option<NaiveDate>,

    #[serde(default)]
    pub time: Option<NaiveTime>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UnitConfigInput {
    #[serde(default)]
    pub cpu_count: Option<f64>,

    #[serde(default)]
    pub memory_size: Option<SizeValue>,

    #[serde(default)]
    pub log_disk_size: Option<SizeValue>,

    #[serde(default)]
    pub max_iops: Option<i64>,

    #[serde(default)]
    pub min_iops: Option<i64>,

    #[serde(default)]
    pub iops_weight: Option<i64>,
}

/// A size input holds a number, or the raw text of the input box
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum SizeValue {
    Number(f64),
    Text(String),
}

impl SizeValue {
    fn with_suffix(&self) -> String {
        match self {
            SizeValue::Number(n) => format!("{}{}", n, SIZE_SUFFIX),
            // an empty box is left as is
            SizeValue::Text(s) if s.is_empty() => String::new(),
            SizeValue::Text(s) => format!("{}{}", s, SIZE_SUFFIX),
        }
    }
}

impl UntilInput {
    fn encode(&self) -> RestoreUntil {
        match (self.date, self.time) {
            (Some(date), Some(time)) => RestoreUntil::Timestamp {
                timestamp: format_timestamp(date, time),
            },
            _ => RestoreUntil::unlimited(),
        }
    }
}

/// Converts the tenant creation form into the body of the create request.
///
/// Credentials are encrypted with `public_key`. The form is left untouched;
/// on error nothing is returned.
pub fn normalize_tenant_create<E>(
    input: &TenantFormInput,
    cluster_name: &str,
    encryptor: &E,
    public_key: &str,
) -> Result<TenantBody, Error>
where
    E: Encryptor + ?Sized,
{
    let pools = input.pools.as_ref().map(flatten_pools);

    let source = match &input.source {
        Some(source) => normalize_source(source, encryptor, public_key)?,
        None => None,
    };

    let root_password = input
        .root_password
        .as_deref()
        .map(|password| encrypt_field(encryptor, "rootPassword", password, public_key))
        .transpose()?;

    let unit_config = input
        .unit_config
        .as_ref()
        .map(normalize_unit_config)
        .transpose()?;

    Ok(TenantBody {
        name: input.name.clone(),
        namespace: input.namespace.clone(),
        obcluster: cluster_name.to_string(),
        tenant_name: input.tenant_name.clone(),
        unit_num: input.unit_num,
        charset: input.charset.clone(),
        tenant_role: input.tenant_role,
        connect_white_list: input.connect_white_list.as_ref().map(|list| list.join(",")),
        pools,
        source,
        root_password,
        unit_config,
    })
}

/// Zones without a priority are not part of the tenant. Priority 0 is valid.
fn flatten_pools(pools: &BTreeMap<String, PoolPriority>) -> Vec<ResourcePool> {
    pools
        .iter()
        .filter_map(|(zone, pool)| match pool.priority {
            Some(priority) => Some(ResourcePool {
                zone: zone.clone(),
                priority,
                type_: ReplicaType::Full,
            }),
            None => {
                debug!("zone {} has no priority, not selected", zone);
                None
            }
        })
        .collect()
}

fn normalize_source<E>(
    source: &SourceInput,
    encryptor: &E,
    public_key: &str,
) -> Result<Option<TenantSource>, Error>
where
    E: Encryptor + ?Sized,
{
    let tenant = source.tenant.clone().filter(|t| !t.is_empty());
    let restore = source
        .restore
        .as_ref()
        .map(|restore| normalize_restore(restore, encryptor, public_key))
        .transpose()?;

    if tenant.is_none() && restore.is_none() {
        return Ok(None);
    }

    Ok(Some(TenantSource { tenant, restore }))
}

fn normalize_restore<E>(
    restore: &RestoreInput,
    encryptor: &E,
    public_key: &str,
) -> Result<RestoreSource, Error>
where
    E: Encryptor + ?Sized,
{
    let bak_encryption_password = match restore.bak_encryption_password.as_deref() {
        Some(password) if !password.is_empty() => Some(encrypt_field(
            encryptor,
            "source.restore.bakEncryptionPassword",
            password,
            public_key,
        )?),
        _ => None,
    };

    Ok(RestoreSource {
        type_: restore.type_.clone(),
        archive_source: restore.archive_source.clone(),
        bak_data_source: restore.bak_data_source.clone(),
        oss_access_id: encrypt_field(
            encryptor,
            "source.restore.ossAccessId",
            &restore.oss_access_id,
            public_key,
        )?,
        oss_access_key: encrypt_field(
            encryptor,
            "source.restore.ossAccessKey",
            &restore.oss_access_key,
            public_key,
        )?,
        bak_encryption_password,
        until: restore
            .until
            .map(|until| until.encode())
            .unwrap_or_else(RestoreUntil::unlimited),
    })
}

/// Stringifies the cpu count and appends `Gi` to the sizes that were filled in.
pub fn normalize_unit_config(unit_config: &UnitConfigInput) -> Result<UnitConfig, Error> {
    let cpu_count = unit_config
        .cpu_count
        .ok_or_else(|| Error::malformed("unitConfig.cpuCount", "cpu count is required"))?;

    Ok(UnitConfig {
        cpu_count: cpu_count.to_string(),
        memory_size: unit_config.memory_size.as_ref().map(SizeValue::with_suffix),
        log_disk_size: unit_config.log_disk_size.as_ref().map(SizeValue::with_suffix),
        max_iops: unit_config.max_iops,
        min_iops: unit_config.min_iops,
        iops_weight: unit_config.iops_weight,
    })
}
