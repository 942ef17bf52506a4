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

use websig_core::{Context, ProvideSigningKey, ProvideSigningKeyChain, Result, SigningKey};

use crate::provide_signing_key::EnvSigningKeyProvider;

/// DefaultSigningKeyProvider will try to load the signing key from different sources.
///
/// Resolution order:
///
/// 1. Environment variables
#[derive(Debug)]
pub struct DefaultSigningKeyProvider {
    chain: ProvideSigningKeyChain,
}

impl Default for DefaultSigningKeyProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultSigningKeyProvider {
    /// Create a new DefaultSigningKeyProvider
    pub fn new() -> Self {
        let chain = ProvideSigningKeyChain::new().push(EnvSigningKeyProvider::new());

        Self { chain }
    }

    /// Create with a custom provider chain.
    pub fn with_chain(chain: ProvideSigningKeyChain) -> Self {
        Self { chain }
    }

    /// Add a provider to the front of the default chain.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use websig_hmac::{DefaultSigningKeyProvider, StaticSigningKeyProvider};
    ///
    /// let provider = DefaultSigningKeyProvider::new()
    ///     .push_front(StaticSigningKeyProvider::new("my-signing-key"));
    /// ```
    pub fn push_front(mut self, provider: impl ProvideSigningKey) -> Self {
        self.chain = self.chain.push_front(provider);
        self
    }
}

impl ProvideSigningKey for DefaultSigningKeyProvider {
    fn provide_signing_key(&self, ctx: &Context) -> Result<Option<SigningKey>> {
        self.chain.provide_signing_key(ctx)
    }
}
