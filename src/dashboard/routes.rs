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

//! Paths of the tenant endpoints, relative to the dashboard base url.

use crate::types::v1::backup::JobType;

pub const TENANT_PREFIX: &str = "/api/v1/obtenants";

pub fn tenants() -> String {
    TENANT_PREFIX.to_string()
}

pub fn tenant(ns: &str, name: &str) -> String {
    format!("{}/{}/{}", TENANT_PREFIX, ns, name)
}

pub fn backup_policy(ns: &str, name: &str) -> String {
    format!("{}/backupPolicy", tenant(ns, name))
}

pub fn backup_jobs(ns: &str, name: &str, job_type: JobType) -> String {
    format!("{}/backup/{}/jobs", tenant(ns, name), job_type)
}

pub fn log_replay(ns: &str, name: &str) -> String {
    format!("{}/logreplay", tenant(ns, name))
}

pub fn role(ns: &str, name: &str) -> String {
    format!("{}/role", tenant(ns, name))
}

pub fn user_credentials(ns: &str, name: &str) -> String {
    format!("{}/userCredentials", tenant(ns, name))
}

pub fn unit_number(ns: &str, name: &str) -> String {
    format!("{}/unitNumber", tenant(ns, name))
}

pub fn version(ns: &str, name: &str) -> String {
    format!("{}/version", tenant(ns, name))
}

pub fn zone_unit_config(ns: &str, name: &str, zone: &str) -> String {
    format!("{}/{}", tenant(ns, name), zone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tenant_paths() {
        assert_eq!(tenant("oceanbase", "t1"), "/api/v1/obtenants/oceanbase/t1");
        assert_eq!(
            backup_policy("oceanbase", "t1"),
            "/api/v1/obtenants/oceanbase/t1/backupPolicy"
        );
        assert_eq!(
            backup_jobs("oceanbase", "t1", JobType::Full),
            "/api/v1/obtenants/oceanbase/t1/backup/FULL/jobs"
        );
        assert_eq!(
            zone_unit_config("oceanbase", "t1", "zone1"),
            "/api/v1/obtenants/oceanbase/t1/zone1"
        );
    }
}
