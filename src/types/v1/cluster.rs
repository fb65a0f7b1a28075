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

/// Cluster entry of the tenant creation page, with selectable zones
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SimpleCluster {
    pub cluster_id: i64,
    pub name: String,
    #[serde(default)]
    pub namespace: String,
    #[serde(default)]
    pub cluster_name: String,
    #[serde(default)]
    pub topology: Vec<ZoneItem>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ZoneItem {
    pub zone: String,
    #[serde(default)]
    pub checked: bool,
}

/// Cluster selector: matches by id or by name
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct ClusterTarget {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
}

impl ClusterTarget {
    pub fn matches(&self, cluster: &SimpleCluster) -> bool {
        self.id == Some(cluster.cluster_id) || self.name.as_deref() == Some(cluster.name.as_str())
    }
}
