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

use crate::dashboard::error::{Error, Result};
use std::time::Duration;

pub const BASE_URL_ENV: &str = "OB_DASHBOARD_URL";

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:18081";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings of the dashboard API client
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardConfig {
    /// scheme://host:port, without the `/api/v1` prefix
    pub base_url: String,
    pub timeout: Duration,
    /// keep the session cookie set by the dashboard login
    pub cookie_session: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            cookie_session: true,
        }
    }
}

impl DashboardConfig {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        let parsed = reqwest::Url::parse(&base_url).map_err(|e| Error::InvalidBaseUrl {
            url: base_url.clone(),
            message: e.to_string(),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::InvalidBaseUrl {
                url: base_url,
                message: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            ..Default::default()
        })
    }

    /// Uses `url` when given, then `OB_DASHBOARD_URL`, then the local default.
    pub fn resolve(url: Option<String>) -> Result<Self> {
        match url.or_else(|| std::env::var(BASE_URL_ENV).ok()) {
            Some(url) => Self::new(url),
            None => Ok(Self::default()),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
