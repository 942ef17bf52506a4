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

use websig_core::{Context, ProvideSigningKey, Result, SigningKey};

use crate::Config;

/// ConfigSigningKeyProvider returns the key carried by a [`Config`].
///
/// The config is used as-is; call [`Config::from_env`] first to pick up
/// environment values.
#[derive(Debug, Clone)]
pub struct ConfigSigningKeyProvider {
    config: Config,
}

impl ConfigSigningKeyProvider {
    /// Create a new ConfigSigningKeyProvider.
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

impl ProvideSigningKey for ConfigSigningKeyProvider {
    fn provide_signing_key(&self, _: &Context) -> Result<Option<SigningKey>> {
        Ok(self
            .config
            .signing_key
            .as_deref()
            .filter(|v| !v.is_empty())
            .map(SigningKey::from))
    }
}
