// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use log::debug;
use websig_core::{Context, ProvideSigningKey, Result, SigningKey};

use crate::constants::WEBSIG_SIGNING_KEY;

/// EnvSigningKeyProvider loads the signing key from `WEBSIG_SIGNING_KEY`.
///
/// An empty value counts as absent.
#[derive(Debug, Default)]
pub struct EnvSigningKeyProvider;

impl EnvSigningKeyProvider {
    /// Create a new EnvSigningKeyProvider.
    pub fn new() -> Self {
        Self
    }
}

impl ProvideSigningKey for EnvSigningKeyProvider {
    fn provide_signing_key(&self, ctx: &Context) -> Result<Option<SigningKey>> {
        let Some(v) = ctx.env_var(WEBSIG_SIGNING_KEY) else {
            return Ok(None);
        };
        if v.is_empty() {
            debug!("{WEBSIG_SIGNING_KEY} is set but empty, ignored");
            return Ok(None);
        }

        Ok(Some(SigningKey::from(v)))
    }
}
