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

/// Free resources of one OBServer
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServerResource {
    pub ob_zone: String,

    #[serde(rename = "availableCPU")]
    pub available_cpu: f64,

    /// bytes
    pub available_log_disk: i64,

    /// bytes
    pub available_memory: i64,
}

/// Parameters the dashboard needs before a tenant can be created
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EssentialParameters {
    #[serde(rename = "obServerResources", default)]
    pub server_resources: Vec<ServerResource>,
}

/// Largest unit a tenant spanning the selected zones can get
#[derive(Deserialize, Serialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct MaxResource {
    #[serde(rename = "maxCPU")]
    pub max_cpu: f64,

    #[serde(rename = "maxLogDisk")]
    pub max_log_disk: i64,

    #[serde(rename = "maxMemory")]
    pub max_memory: i64,
}
