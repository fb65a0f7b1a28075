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

//! Form state <-> request body conversions of the tenant and backup pages.
//!
//! Everything here is synchronous and works on borrowed input; the only
//! outside capability is the injected [`Encryptor`].

pub mod backup;
pub mod cluster;
pub mod encrypt;
pub mod resource;
pub mod tenant;

pub use backup::{
    BackupConfigEditable, ScheduleDatesForm, denormalize_backup_policy, has_full_backup_scheduled,
    normalize_backup_form, policy_unchanged,
};
pub use cluster::toggle_cluster_zone;
pub use encrypt::Encryptor;
pub use resource::min_available_resources;
pub use tenant::{TenantFormInput, normalize_tenant_create};
