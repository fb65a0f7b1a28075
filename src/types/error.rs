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

pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("no server resource matches zones {:?}", zones))]
    EmptyZoneSet { zones: Vec<String> },

    #[snafu(display("malformed form input at '{}': {}", field, message))]
    MalformedInput { field: String, message: String },

    #[snafu(display("encrypt '{}' failed: {}", field, source))]
    Encrypt { field: String, source: BoxedError },

    #[snafu(display("read form file '{}' error: {}", path, source))]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[snafu(display("unsupported form file '{}', expected .json, .yaml or .yml", path))]
    UnsupportedFormat { path: String },

    #[snafu(display("serde_json error: {}", source))]
    SerdeJson { source: serde_json::Error },

    #[snafu(display("serde_yaml error: {}", source))]
    SerdeYaml { source: serde_yaml_ng::Error },
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Error::SerdeJson { source }
    }
}

impl From<serde_yaml_ng::Error> for Error {
    fn from(source: serde_yaml_ng::Error) -> Self {
        Error::SerdeYaml { source }
    }
}

impl Error {
    pub fn malformed(field: impl Into<String>, message: impl Into<String>) -> Self {
        Error::MalformedInput {
            field: field.into(),
            message: message.into(),
        }
    }
}
