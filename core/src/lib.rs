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

//! Core components for signing and verifying HTTP requests.
//!
//! This crate provides the foundational types and traits for the websig ecosystem.
//!
//! ## Overview
//!
//! - **Body**: a request body that is read at most once and buffered so that it stays readable
//! - **SigningKey**: the shared secret, redacted whenever it is printed
//! - **Traits**: [`SignRequest`] for signing schemes and [`ProvideSigningKey`] for key loading
//! - **Context**: the environment used while loading configuration and keys
//!
//! ## Example
//!
//! ```no_run
//! use websig_core::{Body, Result, SignRequest};
//! use websig_core::time::{now, DateTime};
//!
//! fn sign_for_a_minute(signer: &dyn SignRequest) -> Result<http::Request<Body>> {
//!     let mut req = http::Request::builder()
//!         .method("POST")
//!         .uri("https://example.com/hooks")
//!         .header("X-Request-Id", "42")
//!         .body(Body::from("payload"))?;
//!
//!     let expires_at: DateTime = now() + chrono::Duration::minutes(1);
//!     signer.sign_request(&mut req, expires_at, &["X-Request-Id"])?;
//!     Ok(req)
//! }
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: Cryptographic hashing utilities
//! - [`time`]: Time formatting and parsing utilities
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod error;
pub use error::{Error, ErrorKind, Result};
mod context;
pub use context::Context;
mod env;
pub use env::{Env, NoopEnv, OsEnv, StaticEnv};
mod body;
pub use body::{Body, DEFAULT_MAX_BODY_SIZE};
mod key;
pub use key::SigningKey;
mod api;
pub use api::{ProvideSigningKey, ProvideSigningKeyChain, SignRequest};
