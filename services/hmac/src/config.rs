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

use std::fmt::{Debug, Formatter};

use http::HeaderName;
use log::warn;
use websig_core::{utils::Redact, Context, Error, Result, DEFAULT_MAX_BODY_SIZE};

use crate::constants::*;

/// Config carries all the configuration for the HMAC request signer.
#[derive(Clone, Default)]
pub struct Config {
    /// `signing_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`WEBSIG_SIGNING_KEY`]
    pub signing_key: Option<String>,
    /// `signature_header` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`WEBSIG_SIGNATURE_HEADER`]
    /// - default: [`DEFAULT_SIGNATURE_HEADER`]
    pub signature_header: Option<String>,
    /// `expiry_header` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`WEBSIG_EXPIRY_HEADER`]
    /// - default: [`DEFAULT_EXPIRY_HEADER`]
    pub expiry_header: Option<String>,
    /// `max_body_size` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`WEBSIG_MAX_BODY_SIZE`]
    /// - default: 1 MiB
    pub max_body_size: Option<usize>,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set signing_key
    pub fn with_signing_key(mut self, signing_key: impl Into<String>) -> Self {
        self.signing_key = Some(signing_key.into());
        self
    }

    /// Set signature_header
    pub fn with_signature_header(mut self, signature_header: impl Into<String>) -> Self {
        self.signature_header = Some(signature_header.into());
        self
    }

    /// Set expiry_header
    pub fn with_expiry_header(mut self, expiry_header: impl Into<String>) -> Self {
        self.expiry_header = Some(expiry_header.into());
        self
    }

    /// Set max_body_size
    pub fn with_max_body_size(mut self, max_body_size: usize) -> Self {
        self.max_body_size = Some(max_body_size);
        self
    }

    /// Load config from env.
    ///
    /// Fields that are already set are kept.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(WEBSIG_SIGNING_KEY) {
            self.signing_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(WEBSIG_SIGNATURE_HEADER) {
            self.signature_header.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(WEBSIG_EXPIRY_HEADER) {
            self.expiry_header.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(WEBSIG_MAX_BODY_SIZE) {
            match v.parse::<usize>() {
                Ok(size) => {
                    self.max_body_size.get_or_insert(size);
                }
                Err(e) => warn!("ignore invalid {WEBSIG_MAX_BODY_SIZE} {v:?}: {e}"),
            }
        }

        self
    }

    /// Resolve the signature and expiry header names, falling back to defaults.
    pub(crate) fn header_names(&self) -> Result<(HeaderName, HeaderName)> {
        let signature = parse_header_name(
            self.signature_header.as_deref(),
            DEFAULT_SIGNATURE_HEADER,
        )?;
        let expiry = parse_header_name(self.expiry_header.as_deref(), DEFAULT_EXPIRY_HEADER)?;

        if signature == expiry {
            return Err(Error::config_invalid(format!(
                "signature header and expiry header must differ, both are {signature}"
            )));
        }
        Ok((signature, expiry))
    }

    pub(crate) fn body_limit(&self) -> usize {
        self.max_body_size.unwrap_or(DEFAULT_MAX_BODY_SIZE)
    }
}

fn parse_header_name(v: Option<&str>, default: &'static str) -> Result<HeaderName> {
    let v = v.unwrap_or(default);
    HeaderName::try_from(v)
        .map_err(|e| Error::config_invalid(format!("invalid header name {v:?}")).with_source(e))
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("signing_key", &self.signing_key.as_ref().map(Redact::from))
            .field("signature_header", &self.signature_header)
            .field("expiry_header", &self.expiry_header)
            .field("max_body_size", &self.max_body_size)
            .finish()
    }
}
