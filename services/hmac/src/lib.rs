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

//! HMAC-SHA256 signing for HTTP requests.
//!
//! Signing writes an expiry instant and a signature into the request headers.
//! The signature covers the URL, the method, the expiry, the headers chosen by
//! the caller and the body. Verification recomputes it and rejects the request
//! once the expiry has passed.
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use websig_core::Body;
//! use websig_hmac::RequestSigner;
//!
//! # fn main() -> websig_core::Result<()> {
//! let signer = RequestSigner::new("my-signing-key");
//!
//! let mut req = http::Request::builder()
//!     .method("POST")
//!     .uri("https://example.com/hooks")
//!     .header("X-Request-Id", "42")
//!     .body(Body::from("payload"))?;
//!
//! signer.sign_with_ttl(&mut req, Duration::from_secs(60), &["X-Request-Id"])?;
//! signer.verify(&mut req, &["X-Request-Id"])?;
//! # Ok(())
//! # }
//! ```

mod config;
pub use config::Config;

mod constants;
pub use constants::*;

mod provide_signing_key;
pub use provide_signing_key::{
    ConfigSigningKeyProvider, DefaultSigningKeyProvider, EnvSigningKeyProvider,
    StaticSigningKeyProvider,
};

mod sign_request;
pub use sign_request::RequestSigner;
