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

use crate::dashboard::DashboardClient;
use crate::form::encrypt::NoEncryption;
use crate::form::{
    BackupConfigEditable, Encryptor, TenantFormInput, denormalize_backup_policy,
    min_available_resources, normalize_backup_form, normalize_tenant_create, policy_unchanged,
};
use crate::types::v1::backup::BackupPolicy;
use crate::types::v1::resource::{EssentialParameters, MaxResource};
use crate::types::v1::tenant::TenantBody;
use crate::{dashboard, types};
use snafu::{OptionExt, Snafu};
use std::sync::Arc;
use strum::Display;
use tracing::{debug, info};

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(transparent)]
    Dashboard { source: dashboard::error::Error },

    #[snafu(transparent)]
    Types { source: types::error::Error },

    #[snafu(display("tenant credentials need an encryptor and a public key"))]
    MissingPublicKey,

    #[snafu(display("form field '{}' is required", field))]
    MissingField { field: String },
}

/// What saving a backup policy did
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum SaveOutcome {
    #[strum(serialize = "created")]
    Created,

    #[strum(serialize = "updated")]
    Updated,

    #[strum(serialize = "unchanged")]
    Unchanged,
}

/// Couples the API client with credential encryption for the page flows.
pub struct Context {
    pub(crate) client: DashboardClient,
    pub(crate) encryptor: Option<Arc<dyn Encryptor + Send + Sync>>,
    pub(crate) public_key: Option<String>,
}

impl Context {
    pub fn new(client: DashboardClient) -> Self {
        Self {
            client,
            encryptor: None,
            public_key: None,
        }
    }

    pub fn with_encryption(
        mut self,
        encryptor: Arc<dyn Encryptor + Send + Sync>,
        public_key: impl Into<String>,
    ) -> Self {
        self.encryptor = Some(encryptor);
        self.public_key = Some(public_key.into());
        self
    }

    pub fn client(&self) -> &DashboardClient {
        &self.client
    }

    /// Normalizes the creation form and submits it. Returns the body sent.
    pub async fn create_tenant(
        &self,
        cluster_name: &str,
        form: &TenantFormInput,
    ) -> Result<TenantBody, Error> {
        let (encryptor, public_key) = self
            .encryptor
            .as_deref()
            .zip(self.public_key.as_deref())
            .context(MissingPublicKeySnafu)?;

        let ns = form.namespace.as_deref().context(MissingFieldSnafu {
            field: "namespace",
        })?;
        let name = form
            .name
            .as_deref()
            .context(MissingFieldSnafu { field: "name" })?;

        let body = normalize_tenant_create(form, cluster_name, encryptor, public_key)?;
        self.client.create_tenant(ns, name, &body).await?;

        info!("tenant {}/{} submitted to cluster {}", ns, name, cluster_name);
        Ok(body)
    }

    /// Stored policy reshaped for the edit form; `None` if there is none.
    pub async fn load_editable_policy(
        &self,
        ns: &str,
        name: &str,
    ) -> Result<Option<BackupConfigEditable>, Error> {
        let policy = self.client.get_backup_policy(ns, name).await?;
        Ok(denormalize_backup_policy(policy.as_ref())?)
    }

    /// Whether submitting `form` would change the stored policy.
    pub async fn policy_changed(
        &self,
        ns: &str,
        name: &str,
        form: &BackupConfigEditable,
    ) -> Result<bool, Error> {
        let previous = self.client.get_backup_policy(ns, name).await?;
        let body = self.normalize_backup(form)?;
        Ok(previous.is_none_or(|previous| !policy_unchanged(&previous, &body)))
    }

    /// Creates the policy when `previous` is `None`, otherwise updates it
    /// unless nothing changed.
    pub async fn save_backup_policy(
        &self,
        ns: &str,
        name: &str,
        previous: Option<&BackupPolicy>,
        form: &BackupConfigEditable,
    ) -> Result<SaveOutcome, Error> {
        let body = self.normalize_backup(form)?;

        let outcome = match previous {
            None => {
                self.client.create_backup_policy(ns, name, &body).await?;
                SaveOutcome::Created
            }
            Some(previous) if policy_unchanged(previous, &body) => SaveOutcome::Unchanged,
            Some(_) => {
                self.client.update_backup_policy(ns, name, &body).await?;
                SaveOutcome::Updated
            }
        };

        info!("backup policy of {}/{} {}", ns, name, outcome);
        Ok(outcome)
    }

    /// Largest unit a tenant over `zones` can get
    pub fn max_resources<S>(
        &self,
        zones: &[S],
        essentials: &EssentialParameters,
    ) -> Result<MaxResource, Error>
    where
        S: AsRef<str>,
    {
        let max = min_available_resources(zones, essentials)?;
        debug!(
            "max unit over {} zones: cpu {}, memory {}, log disk {}",
            zones.len(),
            max.max_cpu,
            max.max_memory,
            max.max_log_disk
        );
        Ok(max)
    }

    fn normalize_backup(
        &self,
        form: &BackupConfigEditable,
    ) -> Result<crate::types::v1::backup::BackupPolicyBody, types::error::Error> {
        match (self.encryptor.as_deref(), self.public_key.as_deref()) {
            (Some(encryptor), Some(key)) => normalize_backup_form(form, encryptor, Some(key)),
            _ => normalize_backup_form(form, &NoEncryption, None),
        }
    }
}
