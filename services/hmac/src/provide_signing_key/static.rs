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

/// StaticSigningKeyProvider always returns the key it was built with.
#[derive(Debug, Clone)]
pub struct StaticSigningKeyProvider {
    key: SigningKey,
}

impl StaticSigningKeyProvider {
    /// Create a new StaticSigningKeyProvider.
    pub fn new(key: impl Into<SigningKey>) -> Self {
        Self { key: key.into() }
    }
}

impl ProvideSigningKey for StaticSigningKeyProvider {
    fn provide_signing_key(&self, _: &Context) -> Result<Option<SigningKey>> {
        Ok(Some(self.key.clone()))
    }
}
