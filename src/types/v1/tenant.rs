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
use strum::Display;

/// Locality type of a resource pool replica
#[derive(Default, Deserialize, Serialize, Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum ReplicaType {
    #[strum(to_string = "Full")]
    #[default]
    Full,

    #[strum(to_string = "Readonly")]
    Readonly,
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, Display, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum TenantRole {
    #[strum(to_string = "PRIMARY")]
    Primary,

    #[strum(to_string = "STANDBY")]
    Standby,
}

/// Request body of `PUT /api/v1/obtenants/{ns}/{name}`.
///
/// `name` and `namespace` travel in the request path and are never serialized.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TenantBody {
    #[serde(skip)]
    pub name: Option<String>,

    #[serde(skip)]
    pub namespace: Option<String>,

    pub obcluster: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_num: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charset: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_role: Option<TenantRole>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connect_white_list: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pools: Option<Vec<ResourcePool>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<TenantSource>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_password: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_config: Option<UnitConfig>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResourcePool {
    pub zone: String,
    pub priority: i32,
    #[serde(rename = "type")]
    pub type_: ReplicaType,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TenantSource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restore: Option<RestoreSource>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RestoreSource {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archive_source: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bak_data_source: Option<String>,

    pub oss_access_id: String,

    pub oss_access_key: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bak_encryption_password: Option<String>,

    pub until: RestoreUntil,
}

/// Point-in-time bound of a restore or a standby log replay
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub enum RestoreUntil {
    /// `YYYY-MM-DD HH:mm:ss`
    Timestamp { timestamp: String },
    Unlimited { unlimited: bool },
}

impl RestoreUntil {
    pub fn unlimited() -> Self {
        RestoreUntil::Unlimited { unlimited: true }
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UnitConfig {
    pub cpu_count: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_size: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_disk_size: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_iops: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_iops: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iops_weight: Option<i64>,
}

/// Body of `PATCH /api/v1/obtenants/{ns}/{name}`
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TenantPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_num: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_config: Option<PoolsUnitConfig>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PoolsUnitConfig {
    pub pools: Vec<ResourcePool>,
    pub unit_config: UnitConfig,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UnitNumber {
    pub unit_num: i32,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserCredentials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_password: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standby_ro_password: Option<String>,
}

/// Tenant row of `GET /api/v1/obtenants`
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TenantOverview {
    pub name: String,
    pub namespace: String,
    pub tenant_name: String,
    pub cluster_name: String,
    pub tenant_role: String,
    pub unit_number: i32,
    pub status: String,
    pub charset: String,
    pub locality: String,
    pub primary_zone: String,
    pub create_time: String,
    pub topology: Vec<TenantReplica>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TenantReplica {
    pub zone: String,
    pub priority: i32,
    #[serde(rename = "type")]
    pub type_: String,
    #[serde(rename = "maxCPU")]
    pub max_cpu: String,
    #[serde(rename = "minCPU")]
    pub min_cpu: String,
    pub memory_size: String,
    pub log_disk_size: String,
    pub max_iops: i64,
    pub min_iops: i64,
    pub iops_weight: i64,
}

/// Raw payload of `GET /api/v1/obtenants/{ns}/{name}`
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TenantDetail {
    #[serde(flatten)]
    pub overview: TenantOverview,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_tenant: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restore_source: Option<RestoreSourceDetail>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RestoreSourceDetail {
    #[serde(rename = "type", default)]
    pub type_: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archive_source: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bak_data_source: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub until: Option<String>,
}

/// Tenant detail reshaped for the tenant overview page
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TenantBasicInfo {
    pub info: TenantInfo,
    pub source: TenantSourceInfo,
    pub replicas: Vec<TenantReplica>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TenantInfo {
    pub name: String,
    pub namespace: String,
    pub tenant_name: String,
    pub cluster_name: String,
    pub tenant_role: String,
    pub unit_number: i32,
    pub status: String,
    pub charset: String,
    pub locality: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TenantSourceInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_tenant: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archive_source: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bak_data_source: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub until: Option<String>,
}

impl From<TenantDetail> for TenantBasicInfo {
    fn from(detail: TenantDetail) -> Self {
        let TenantDetail {
            overview,
            primary_tenant,
            restore_source,
        } = detail;

        let restore = restore_source.unwrap_or_default();
        TenantBasicInfo {
            info: TenantInfo {
                name: overview.name,
                namespace: overview.namespace,
                tenant_name: overview.tenant_name,
                cluster_name: overview.cluster_name,
                tenant_role: overview.tenant_role,
                unit_number: overview.unit_number,
                status: overview.status,
                charset: overview.charset,
                locality: overview.locality,
            },
            source: TenantSourceInfo {
                primary_tenant: primary_tenant.filter(|t| !t.is_empty()),
                archive_source: restore.archive_source.filter(|s| !s.is_empty()),
                bak_data_source: restore.bak_data_source.filter(|s| !s.is_empty()),
                until: restore.until.filter(|u| !u.is_empty()),
            },
            replicas: overview.topology,
        }
    }
}
