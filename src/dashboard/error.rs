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

use snafu::Snafu;

/// Dashboard API 客户端错误类型
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("invalid dashboard url '{}': {}", url, message))]
    InvalidBaseUrl { url: String, message: String },

    #[snafu(display("HTTP error: {}", source))]
    Http { source: reqwest::Error },

    #[snafu(display("{} {} returned {}: {}", method, path, status, message))]
    Status {
        method: String,
        path: String,
        status: reqwest::StatusCode,
        message: String,
    },

    #[snafu(display("{} {} failed: {}", method, path, message))]
    Api {
        method: String,
        path: String,
        message: String,
    },

    #[snafu(display("{} {} returned no data", method, path))]
    MissingData { method: String, path: String },
}

/// Result type for dashboard API calls
pub type Result<T> = std::result::Result<T, Error>;
