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

//! HMAC-SHA256 signing with convenience APIs
//!
//! This module re-exports the HMAC signer along with helpers for common use cases.

// Re-export all HMAC signing types
pub use websig_hmac::*;

#[cfg(feature = "default-context")]
use crate::{default_context, Result};

/// Create a signer configured from the process environment.
///
/// This function creates a signer with:
/// - Default context (OS environment)
/// - Signing key from [`WEBSIG_SIGNING_KEY`]
/// - Header names and body limit from env, falling back to defaults
///
/// # Example
///
/// ```no_run
/// # fn main() -> websig_core::Result<()> {
/// let signer = websig::hmac::default_signer()?;
/// # Ok(())
/// # }
/// ```
#[cfg(feature = "default-context")]
pub fn default_signer() -> Result<RequestSigner> {
    let ctx = default_context();
    let config = Config::new().from_env(&ctx);
    RequestSigner::from_config(&ctx, &config)
}
