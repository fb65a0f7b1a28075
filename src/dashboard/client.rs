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

use crate::dashboard::config::DashboardConfig;
use crate::dashboard::error::{ApiSnafu, HttpSnafu, MissingDataSnafu, Result, StatusSnafu};
use crate::dashboard::models::CommonResponse;
use crate::dashboard::routes;
use crate::types::v1::backup::{BackupJob, BackupPolicy, BackupPolicyBody, JobType};
use crate::types::v1::tenant::{
    RestoreUntil, TenantBasicInfo, TenantBody, TenantDetail, TenantOverview, TenantPatch,
    UnitConfig, UnitNumber, UserCredentials,
};
use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use snafu::ResultExt;
use std::sync::Arc;
use tracing::{info, warn};

const DEFAULT_JOB_LIMIT: u32 = 10;

/// Typed client of the dashboard tenant API
#[derive(Clone)]
pub struct DashboardClient {
    http: reqwest::Client,
    base_url: Arc<String>,
}

impl DashboardClient {
    pub fn new(config: &DashboardConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .cookie_store(config.cookie_session)
            .build()
            .context(HttpSnafu)?;

        Ok(Self {
            http,
            base_url: Arc::new(config.base_url.clone()),
        })
    }

    /// 列出所有 Tenants, 可按集群过滤
    pub async fn list_tenants(&self, obcluster: Option<&str>) -> Result<Vec<TenantOverview>> {
        let path = routes::tenants();
        let tenants = self
            .execute(Method::GET, &path, |req| match obcluster {
                Some(cluster) => req.query(&[("obcluster", cluster)]),
                None => req,
            })
            .await?;
        Ok(tenants.unwrap_or_default())
    }

    /// 获取 Tenant 详情
    pub async fn get_tenant(&self, ns: &str, name: &str) -> Result<TenantBasicInfo> {
        let path = routes::tenant(ns, name);
        let detail: TenantDetail = self.required(Method::GET, &path, |req| req).await?;
        Ok(detail.into())
    }

    /// 创建 Tenant
    pub async fn create_tenant(&self, ns: &str, name: &str, body: &TenantBody) -> Result<()> {
        self.send(Method::PUT, &routes::tenant(ns, name), Some(body))
            .await
    }

    /// 删除 Tenant
    pub async fn delete_tenant(&self, ns: &str, name: &str) -> Result<()> {
        self.send::<()>(Method::DELETE, &routes::tenant(ns, name), None)
            .await
    }

    pub async fn patch_tenant(&self, ns: &str, name: &str, patch: &TenantPatch) -> Result<()> {
        self.send(Method::PATCH, &routes::tenant(ns, name), Some(patch))
            .await
    }

    pub async fn create_backup_policy(
        &self,
        ns: &str,
        name: &str,
        body: &BackupPolicyBody,
    ) -> Result<()> {
        self.send(Method::PUT, &routes::backup_policy(ns, name), Some(body))
            .await
    }

    pub async fn update_backup_policy(
        &self,
        ns: &str,
        name: &str,
        body: &BackupPolicyBody,
    ) -> Result<()> {
        self.send(Method::POST, &routes::backup_policy(ns, name), Some(body))
            .await
    }

    pub async fn delete_backup_policy(&self, ns: &str, name: &str) -> Result<()> {
        self.send::<()>(Method::DELETE, &routes::backup_policy(ns, name), None)
            .await
    }

    /// `None` when the tenant has no backup policy
    pub async fn get_backup_policy(&self, ns: &str, name: &str) -> Result<Option<BackupPolicy>> {
        self.execute(Method::GET, &routes::backup_policy(ns, name), |req| req)
            .await
    }

    /// Most recent backup jobs of one kind, 10 unless `limit` says otherwise
    pub async fn list_backup_jobs(
        &self,
        ns: &str,
        name: &str,
        job_type: JobType,
        limit: Option<u32>,
    ) -> Result<Vec<BackupJob>> {
        let limit = limit.unwrap_or(DEFAULT_JOB_LIMIT);
        let jobs = self
            .execute(
                Method::GET,
                &routes::backup_jobs(ns, name, job_type),
                |req| req.query(&[("limit", limit)]),
            )
            .await?;
        Ok(jobs.unwrap_or_default())
    }

    /// 备租户回放日志
    pub async fn replay_log(&self, ns: &str, name: &str, until: &RestoreUntil) -> Result<()> {
        self.send(Method::POST, &routes::log_replay(ns, name), Some(until))
            .await
    }

    pub async fn change_tenant_role(&self, ns: &str, name: &str) -> Result<()> {
        self.send::<()>(Method::POST, &routes::role(ns, name), None)
            .await
    }

    pub async fn change_tenant_password(
        &self,
        ns: &str,
        name: &str,
        credentials: &UserCredentials,
    ) -> Result<()> {
        self.send(
            Method::POST,
            &routes::user_credentials(ns, name),
            Some(credentials),
        )
        .await
    }

    pub async fn modify_unit_number(&self, ns: &str, name: &str, unit_num: i32) -> Result<()> {
        self.send(
            Method::PUT,
            &routes::unit_number(ns, name),
            Some(&UnitNumber { unit_num }),
        )
        .await
    }

    /// 升级租户兼容版本以匹配集群版本
    pub async fn upgrade_compatibility_version(&self, ns: &str, name: &str) -> Result<()> {
        self.send::<()>(Method::POST, &routes::version(ns, name), None)
            .await
    }

    pub async fn modify_unit_config(
        &self,
        ns: &str,
        name: &str,
        zone: &str,
        unit_config: &UnitConfig,
    ) -> Result<()> {
        self.send(
            Method::PUT,
            &routes::zone_unit_config(ns, name, zone),
            Some(unit_config),
        )
        .await
    }

    /// Sends an optional JSON body and only checks the envelope.
    async fn send<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.execute::<serde_json::Value, _>(method, path, |req| match body {
            Some(body) => req.json(body),
            None => req,
        })
        .await
        .map(|_| ())
    }

    async fn required<T, F>(&self, method: Method, path: &str, build: F) -> Result<T>
    where
        T: DeserializeOwned,
        F: FnOnce(RequestBuilder) -> RequestBuilder,
    {
        match self.execute(method.clone(), path, build).await? {
            Some(data) => Ok(data),
            None => MissingDataSnafu {
                method: method.to_string(),
                path,
            }
            .fail(),
        }
    }

    async fn execute<T, F>(&self, method: Method, path: &str, build: F) -> Result<Option<T>>
    where
        T: DeserializeOwned,
        F: FnOnce(RequestBuilder) -> RequestBuilder,
    {
        let url = format!("{}{}", self.base_url, path);
        info!("{} {}", method, path);

        let response = build(self.http.request(method.clone(), url))
            .send()
            .await
            .context(HttpSnafu)?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            // error responses usually still carry the envelope
            let message = serde_json::from_str::<CommonResponse<serde_json::Value>>(&text)
                .map(|r| r.message)
                .unwrap_or(text);
            warn!("{} {} returned {}: {}", method, path, status, message);
            return StatusSnafu {
                method: method.to_string(),
                path,
                status,
                message,
            }
            .fail();
        }

        let envelope: CommonResponse<T> = response.json().await.context(HttpSnafu)?;
        if !envelope.successful {
            warn!("{} {} failed: {}", method, path, envelope.message);
            return ApiSnafu {
                method: method.to_string(),
                path,
                message: envelope.message,
            }
            .fail();
        }

        Ok(envelope.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::error::Error;
    use crate::tests::{MockDashboard, spawn_mock_dashboard};
    use crate::types::v1::tenant::{PoolsUnitConfig, ReplicaType, ResourcePool};
    use axum::body::Bytes;
    use axum::extract::{Path, Query, State};
    use axum::http::{StatusCode, Uri};
    use axum::routing::{get, put};
    use axum::{Json, Router};
    use serde_json::{Value, json};
    use std::collections::HashMap;

    async fn client_for(router: Router) -> DashboardClient {
        let base_url = spawn_mock_dashboard(router).await;
        let config = DashboardConfig::new(base_url).expect("config");
        DashboardClient::new(&config).expect("client")
    }

    #[tokio::test]
    async fn test_list_tenants_filters_by_cluster() {
        let mock = MockDashboard::default();
        let router = Router::new()
            .route(
                "/api/v1/obtenants",
                get(
                    |State(mock): State<MockDashboard>,
                     Query(query): Query<HashMap<String, String>>| async move {
                        mock.record(json!(query));
                        Json(json!({
                            "successful": true,
                            "data": [{"name": "t1", "namespace": "oceanbase", "clusterName": "c1"}]
                        }))
                    },
                ),
            )
            .with_state(mock.clone());
        let client = client_for(router).await;

        let tenants = client.list_tenants(Some("c1")).await.expect("list");

        assert_eq!(tenants.len(), 1);
        assert_eq!(tenants[0].cluster_name, "c1");
        assert_eq!(mock.requests(), vec![json!({"obcluster": "c1"})]);
    }

    #[tokio::test]
    async fn test_get_tenant_reshapes_detail() {
        let router = Router::new().route(
            "/api/v1/obtenants/{ns}/{name}",
            get(|Path((ns, name)): Path<(String, String)>| async move {
                Json(json!({
                    "successful": true,
                    "data": {
                        "name": name,
                        "namespace": ns,
                        "tenantName": "t1",
                        "tenantRole": "PRIMARY",
                        "topology": [{"zone": "zone1", "priority": 1, "type": "Full"}],
                        "restoreSource": {"type": "OSS", "archiveSource": "oss://a", "until": "2024-01-01 10:00:00"}
                    }
                }))
            }),
        );
        let client = client_for(router).await;

        let info = client.get_tenant("oceanbase", "t1").await.expect("get");

        assert_eq!(info.info.namespace, "oceanbase");
        assert_eq!(info.info.tenant_role, "PRIMARY");
        assert_eq!(info.source.archive_source.as_deref(), Some("oss://a"));
        assert_eq!(info.source.until.as_deref(), Some("2024-01-01 10:00:00"));
        assert_eq!(info.source.primary_tenant, None);
        assert_eq!(info.replicas[0].zone, "zone1");
    }

    #[tokio::test]
    async fn test_create_tenant_sends_body_without_path_fields() {
        let mock = MockDashboard::default();
        let router = Router::new()
            .route(
                "/api/v1/obtenants/{ns}/{name}",
                put(
                    |State(mock): State<MockDashboard>,
                     Path((ns, name)): Path<(String, String)>,
                     Json(body): Json<Value>| async move {
                        mock.record(json!({"ns": ns, "name": name, "body": body}));
                        Json(json!({"successful": true, "data": {}}))
                    },
                ),
            )
            .with_state(mock.clone());
        let client = client_for(router).await;

        let body = TenantBody {
            name: Some("t1".to_string()),
            namespace: Some("oceanbase".to_string()),
            obcluster: "c1".to_string(),
            pools: Some(vec![ResourcePool {
                zone: "zone1".to_string(),
                priority: 0,
                type_: ReplicaType::Full,
            }]),
            ..Default::default()
        };
        client
            .create_tenant("oceanbase", "t1", &body)
            .await
            .expect("create");

        let requests = mock.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0]["ns"], "oceanbase");
        assert_eq!(requests[0]["name"], "t1");
        assert_eq!(
            requests[0]["body"],
            json!({"obcluster": "c1", "pools": [{"zone": "zone1", "priority": 0, "type": "Full"}]})
        );
    }

    #[tokio::test]
    async fn test_unsuccessful_envelope_is_an_error() {
        let router = Router::new().route(
            "/api/v1/obtenants/{ns}/{name}",
            put(|| async { Json(CommonResponse::<()>::failed("pools is empty")) }),
        );
        let client = client_for(router).await;

        let err = client
            .create_tenant("oceanbase", "t1", &TenantBody::default())
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Api { ref message, .. } if message == "pools is empty"));
    }

    #[tokio::test]
    async fn test_error_status_keeps_server_message() {
        let router = Router::new().route(
            "/api/v1/obtenants/{ns}/{name}",
            get(|| async {
                (
                    StatusCode::NOT_FOUND,
                    Json(json!({"successful": false, "message": "tenant not found"})),
                )
            }),
        );
        let client = client_for(router).await;

        let err = client.get_tenant("oceanbase", "t9").await.unwrap_err();

        assert!(matches!(
            err,
            Error::Status { status, ref message, .. }
                if status == reqwest::StatusCode::NOT_FOUND && message == "tenant not found"
        ));
    }

    #[tokio::test]
    async fn test_get_tenant_without_data() {
        let router = Router::new().route(
            "/api/v1/obtenants/{ns}/{name}",
            get(|| async { Json(json!({"successful": true})) }),
        );
        let client = client_for(router).await;

        let err = client.get_tenant("oceanbase", "t1").await.unwrap_err();
        assert!(matches!(err, Error::MissingData { .. }));
    }

    #[tokio::test]
    async fn test_backup_policy_and_jobs() {
        let mock = MockDashboard::default();
        let router = Router::new()
            .route(
                "/api/v1/obtenants/{ns}/{name}/backupPolicy",
                get(|| async {
                    Json(json!({
                        "successful": true,
                        "data": {
                            "destType": "NFS",
                            "archivePath": "t1/archive",
                            "bakDataPath": "t1/data",
                            "scheduleType": "Weekly",
                            "scheduleTime": "04:00",
                            "scheduleDates": [{"day": 1, "backupType": "Full"}],
                            "jobKeepWindow": "1d"
                        }
                    }))
                })
                .post(
                    |State(mock): State<MockDashboard>, Json(body): Json<Value>| async move {
                        mock.record(body);
                        Json(json!({"successful": true}))
                    },
                ),
            )
            .route(
                "/api/v1/obtenants/{ns}/{name}/backup/{job_type}/jobs",
                get(
                    |State(mock): State<MockDashboard>,
                     Path((_, _, job_type)): Path<(String, String, String)>,
                     Query(query): Query<HashMap<String, String>>| async move {
                        mock.record(json!({"type": job_type, "limit": query.get("limit")}));
                        Json(json!({
                            "successful": true,
                            "data": [{"name": "job-1", "type": "FULL", "status": "SUCCESSFUL"}]
                        }))
                    },
                ),
            )
            .with_state(mock.clone());
        let client = client_for(router).await;

        let policy = client
            .get_backup_policy("oceanbase", "t1")
            .await
            .expect("get policy")
            .expect("policy is configured");
        assert_eq!(policy.schedule_type, "Weekly");

        let jobs = client
            .list_backup_jobs("oceanbase", "t1", JobType::Full, None)
            .await
            .expect("list jobs");
        assert_eq!(jobs[0].name, "job-1");

        let body = BackupPolicyBody {
            schedule_type: "Weekly".to_string(),
            ..Default::default()
        };
        client
            .update_backup_policy("oceanbase", "t1", &body)
            .await
            .expect("update policy");

        let requests = mock.requests();
        assert_eq!(requests[0], json!({"type": "FULL", "limit": "10"}));
        assert_eq!(requests[1]["scheduleType"], "Weekly");
    }

    #[tokio::test]
    async fn test_replay_log_body() {
        let mock = MockDashboard::default();
        let router = Router::new()
            .route(
                "/api/v1/obtenants/{ns}/{name}/logreplay",
                axum::routing::post(
                    |State(mock): State<MockDashboard>, Json(body): Json<Value>| async move {
                        mock.record(body);
                        Json(json!({"successful": true}))
                    },
                ),
            )
            .with_state(mock.clone());
        let client = client_for(router).await;

        client
            .replay_log("oceanbase", "t1", &RestoreUntil::unlimited())
            .await
            .expect("replay");

        assert_eq!(mock.requests(), vec![json!({"unlimited": true})]);
    }

    /// Answers every request with an empty success and records method, path and body.
    fn recording_router(mock: &MockDashboard) -> Router {
        Router::new()
            .fallback(
                |State(mock): State<MockDashboard>, method: Method, uri: Uri, body: Bytes| async move {
                    let body = serde_json::from_slice::<Value>(&body).unwrap_or(Value::Null);
                    mock.record(json!({
                        "method": method.as_str(),
                        "path": uri.path(),
                        "body": body
                    }));
                    Json(CommonResponse::ok(json!({})))
                },
            )
            .with_state(mock.clone())
    }

    #[tokio::test]
    async fn test_tenant_lifecycle_requests() {
        let mock = MockDashboard::default();
        let client = client_for(recording_router(&mock)).await;

        let unit_config = UnitConfig {
            cpu_count: "2".to_string(),
            memory_size: Some("8Gi".to_string()),
            ..Default::default()
        };
        let patch = TenantPatch {
            unit_num: None,
            unit_config: Some(PoolsUnitConfig {
                pools: vec![ResourcePool {
                    zone: "zone1".to_string(),
                    priority: 1,
                    type_: ReplicaType::Full,
                }],
                unit_config: unit_config.clone(),
            }),
        };
        let credentials = UserCredentials {
            root_password: Some("enc-root".to_string()),
            standby_ro_password: None,
        };

        client.patch_tenant("oceanbase", "t1", &patch).await.expect("patch");
        client.change_tenant_role("oceanbase", "t1").await.expect("role");
        client
            .change_tenant_password("oceanbase", "t1", &credentials)
            .await
            .expect("password");
        client
            .modify_unit_number("oceanbase", "t1", 2)
            .await
            .expect("unit number");
        client
            .upgrade_compatibility_version("oceanbase", "t1")
            .await
            .expect("version");
        client
            .modify_unit_config("oceanbase", "t1", "zone1", &unit_config)
            .await
            .expect("unit config");
        client
            .delete_backup_policy("oceanbase", "t1")
            .await
            .expect("delete policy");
        client.delete_tenant("oceanbase", "t1").await.expect("delete");

        let tenant = "/api/v1/obtenants/oceanbase/t1";
        assert_eq!(
            mock.requests(),
            vec![
                json!({
                    "method": "PATCH",
                    "path": tenant,
                    "body": {"unitConfig": {
                        "pools": [{"zone": "zone1", "priority": 1, "type": "Full"}],
                        "unitConfig": {"cpuCount": "2", "memorySize": "8Gi"}
                    }}
                }),
                json!({"method": "POST", "path": format!("{}/role", tenant), "body": null}),
                json!({
                    "method": "POST",
                    "path": format!("{}/userCredentials", tenant),
                    "body": {"rootPassword": "enc-root"}
                }),
                json!({
                    "method": "PUT",
                    "path": format!("{}/unitNumber", tenant),
                    "body": {"unitNum": 2}
                }),
                json!({"method": "POST", "path": format!("{}/version", tenant), "body": null}),
                json!({
                    "method": "PUT",
                    "path": format!("{}/zone1", tenant),
                    "body": {"cpuCount": "2", "memorySize": "8Gi"}
                }),
                json!({
                    "method": "DELETE",
                    "path": format!("{}/backupPolicy", tenant),
                    "body": null
                }),
                json!({"method": "DELETE", "path": tenant, "body": null}),
            ]
        );
    }
}
