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

use crate::types::error::{Error, IoSnafu, UnsupportedFormatSnafu};
use serde::de::DeserializeOwned;
use snafu::ResultExt;
use std::path::Path;

/// Reads a form saved as `.json`, `.yaml` or `.yml`.
pub async fn load_form<T>(path: impl AsRef<Path>) -> Result<T, Error>
where
    T: DeserializeOwned,
{
    let path = path.as_ref();
    let display = path.display().to_string();

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    let content = tokio::fs::read(path)
        .await
        .context(IoSnafu { path: &display })?;

    match extension.as_deref() {
        Some("json") => Ok(serde_json::from_slice(&content)?),
        Some("yaml") | Some("yml") => Ok(serde_yaml_ng::from_slice(&content)?),
        _ => UnsupportedFormatSnafu { path: display }.fail(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::v1::resource::EssentialParameters;
    use std::io::Write;

    #[tokio::test]
    async fn test_load_json_and_yaml() {
        let mut json = tempfile::Builder::new()
            .suffix(".json")
            .tempfile()
            .expect("temp file");
        write!(
            json,
            r#"{{"obServerResources":[{{"obZone":"zone1","availableCPU":4,"availableLogDisk":1,"availableMemory":2}}]}}"#
        )
        .expect("write");

        let mut yaml = tempfile::Builder::new()
            .suffix(".yml")
            .tempfile()
            .expect("temp file");
        writeln!(
            yaml,
            "obServerResources:\n  - obZone: zone1\n    availableCPU: 4\n    availableLogDisk: 1\n    availableMemory: 2"
        )
        .expect("write");

        let from_json: EssentialParameters = load_form(json.path()).await.expect("json form");
        let from_yaml: EssentialParameters = load_form(yaml.path()).await.expect("yaml form");

        assert_eq!(from_json, from_yaml);
        assert_eq!(from_json.server_resources[0].available_cpu, 4.0);
    }

    #[tokio::test]
    async fn test_unsupported_extension() {
        let file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");

        let err = load_form::<EssentialParameters>(file.path())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat { .. }));
    }

    #[tokio::test]
    async fn test_missing_file() {
        let err = load_form::<EssentialParameters>("/nonexistent/form.json")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
