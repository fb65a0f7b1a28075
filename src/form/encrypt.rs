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

use crate::types::error::{BoxedError, EncryptSnafu, Error};
use snafu::ResultExt;

/// Public-key encryption of credentials before they leave the dashboard.
///
/// The dashboard never ships plaintext passwords or OSS keys; implementations
/// wrap whatever primitive the deployment uses (RSA in the browser build).
pub trait Encryptor {
    fn encrypt(&self, plaintext: &str, public_key: &str) -> Result<String, BoxedError>;
}

impl<F> Encryptor for F
where
    F: Fn(&str, &str) -> Result<String, BoxedError>,
{
    fn encrypt(&self, plaintext: &str, public_key: &str) -> Result<String, BoxedError> {
        self(plaintext, public_key)
    }
}

/// Used where no public key is configured; any call is an error.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoEncryption;

impl Encryptor for NoEncryption {
    fn encrypt(&self, _plaintext: &str, _public_key: &str) -> Result<String, BoxedError> {
        Err("no encryptor configured".into())
    }
}

pub(crate) fn encrypt_field<E>(
    encryptor: &E,
    field: &str,
    plaintext: &str,
    public_key: &str,
) -> Result<String, Error>
where
    E: Encryptor + ?Sized,
{
    encryptor
        .encrypt(plaintext, public_key)
        .context(EncryptSnafu { field })
}
