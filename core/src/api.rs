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

use std::fmt::{self, Debug};

use crate::{Body, Context, Result, SigningKey};
use crate::time::DateTime;

/// SignRequest is the trait used to sign requests and check their signatures.
///
/// Implementations keep no per-request state, so one signer can serve many
/// requests from many threads. The header list passed to `verify_request` must
/// be the same, in the same order, as the one used by `sign_request`.
pub trait SignRequest: Debug + Send + Sync + 'static {
    /// Sign the request in place, valid until `expires_at`.
    ///
    /// `expires_at` is not checked: signing with an instant in the past is
    /// allowed, verification will reject it.
    fn sign_request(
        &self,
        req: &mut http::Request<Body>,
        expires_at: DateTime,
        signed_headers: &[&str],
    ) -> Result<()>;

    /// Check the signature carried by the request.
    ///
    /// Takes the request mutably because its body may need to be buffered.
    /// The body is left readable.
    fn verify_request(&self, req: &mut http::Request<Body>, signed_headers: &[&str])
        -> Result<()>;
}

/// ProvideSigningKey is the trait used to load the signing key from the environment.
///
/// Returns `Ok(None)` if this provider has nothing to offer.
pub trait ProvideSigningKey: Debug + Send + Sync + 'static {
    /// Load signing key from current env.
    fn provide_signing_key(&self, ctx: &Context) -> Result<Option<SigningKey>>;
}

/// A chain of signing key providers that will be tried in order.
pub struct ProvideSigningKeyChain {
    providers: Vec<Box<dyn ProvideSigningKey>>,
}

impl ProvideSigningKeyChain {
    /// Create a new empty provider chain.
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Add a provider to the chain.
    pub fn push(mut self, provider: impl ProvideSigningKey) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    /// Add a provider to the front of the chain.
    pub fn push_front(mut self, provider: impl ProvideSigningKey) -> Self {
        self.providers.insert(0, Box::new(provider));
        self
    }
}

impl Default for ProvideSigningKeyChain {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for ProvideSigningKeyChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProvideSigningKeyChain")
            .field("providers_count", &self.providers.len())
            .finish()
    }
}

impl ProvideSigningKey for ProvideSigningKeyChain {
    fn provide_signing_key(&self, ctx: &Context) -> Result<Option<SigningKey>> {
        for provider in &self.providers {
            log::debug!("Trying signing key provider: {:?}", provider);

            match provider.provide_signing_key(ctx) {
                Ok(Some(key)) if key.is_valid() => {
                    log::debug!("Loaded signing key from provider: {:?}", provider);
                    return Ok(Some(key));
                }
                Ok(_) => {
                    log::debug!("No signing key found in provider: {:?}", provider);
                }
                Err(e) => {
                    log::warn!(
                        "Error loading signing key from provider {:?}: {:?}",
                        provider,
                        e
                    );
                }
            }
        }

        Ok(None)
    }
}
