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

//! HMAC-SHA256 request signer.

use std::time::Duration;

use http::header::HeaderName;
use http::HeaderValue;
use log::{debug, log_enabled, Level};
use websig_core::hash::{base64_decode, base64_hmac_sha256, hex_sha256, verify_hmac_sha256};
use websig_core::time::{format_rfc3339, now, parse_rfc3339, DateTime};
use websig_core::{
    Body, Context, Error, ProvideSigningKey, Result, SignRequest, SigningKey,
    DEFAULT_MAX_BODY_SIZE,
};

use crate::provide_signing_key::{ConfigSigningKeyProvider, DefaultSigningKeyProvider};
use crate::Config;

/// RequestSigner signs requests with HMAC-SHA256 and verifies them.
///
/// Signing adds two headers: the expiry instant (`X-Sig-Expired` by default)
/// and the base64 encoded signature (`X-Signature` by default). Both the
/// expiry and the caller selected headers are covered by the signature.
#[derive(Debug, Clone)]
pub struct RequestSigner {
    key: SigningKey,
    signature_header: HeaderName,
    expiry_header: HeaderName,
    max_body_size: usize,
    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a signer with the default header names and body limit.
    pub fn new(key: impl Into<SigningKey>) -> Self {
        Self {
            key: key.into(),
            signature_header: HeaderName::from_static("x-signature"),
            expiry_header: HeaderName::from_static("x-sig-expired"),
            max_body_size: DEFAULT_MAX_BODY_SIZE,
            time: None,
        }
    }

    /// Create a signer from config.
    ///
    /// The signing key is taken from `config.signing_key`, then from the
    /// environment. Fails with `ConfigInvalid` if no key can be found.
    pub fn from_config(ctx: &Context, config: &Config) -> Result<Self> {
        let key = DefaultSigningKeyProvider::new()
            .push_front(ConfigSigningKeyProvider::new(config.clone()))
            .provide_signing_key(ctx)?
            .ok_or_else(|| Error::config_invalid("no signing key configured"))?;
        let (signature_header, expiry_header) = config.header_names()?;

        Ok(Self {
            key,
            signature_header,
            expiry_header,
            max_body_size: config.body_limit(),
            time: None,
        })
    }

    /// Specify the current time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign and verify requests.
    /// Only use this function for testing.
    #[cfg(test)]
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    fn now(&self) -> DateTime {
        self.time.unwrap_or_else(now)
    }

    /// Sign the request, valid until `expires_at`.
    ///
    /// Any existing expiry or signature header is replaced. If signing fails
    /// the request carries no signature header at all.
    pub fn sign(
        &self,
        req: &mut http::Request<Body>,
        expires_at: DateTime,
        signed_headers: &[&str],
    ) -> Result<()> {
        let expiry = format_rfc3339(expires_at);
        req.headers_mut().remove(&self.signature_header);
        req.headers_mut()
            .insert(self.expiry_header.clone(), HeaderValue::from_str(&expiry)?);

        let signature = self.calculate_signature(req, signed_headers)?;
        req.headers_mut().insert(self.signature_header.clone(), {
            let mut value = HeaderValue::from_str(&signature)?;
            value.set_sensitive(true);

            value
        });

        Ok(())
    }

    /// Sign the request, valid for `ttl` from now.
    ///
    /// The expiry is written with whole seconds and the fraction is truncated,
    /// so the request may expire up to one second before `now + ttl`. A `ttl`
    /// under one second can yield a signature that is already expired.
    pub fn sign_with_ttl(
        &self,
        req: &mut http::Request<Body>,
        ttl: Duration,
        signed_headers: &[&str],
    ) -> Result<()> {
        let expires_at = chrono::TimeDelta::from_std(ttl)
            .ok()
            .and_then(|ttl| self.now().checked_add_signed(ttl))
            .ok_or_else(|| Error::request_invalid(format!("ttl {ttl:?} is out of range")))?;

        self.sign(req, expires_at, signed_headers)
    }

    /// Verify the signature carried by the request.
    ///
    /// Checks run in this order, the first failure wins:
    ///
    /// 1. signature header present, else `NoSignature`
    /// 2. expiry header present, else `NoExpiry`
    /// 3. signature matches, else `InvalidSignature`
    /// 4. expiry is RFC 3339, else `MalformedExpiryTimestamp`
    /// 5. expiry is still ahead of now, else `SignatureExpired`
    pub fn verify(&self, req: &mut http::Request<Body>, signed_headers: &[&str]) -> Result<()> {
        let signature = match req.headers().get(&self.signature_header) {
            Some(v) if !v.is_empty() => v.clone(),
            _ => {
                return Err(Error::no_signature(format!(
                    "header {} is missing",
                    self.signature_header
                )))
            }
        };

        let content = self.string_to_sign(req, signed_headers)?;

        let matched = signature
            .to_str()
            .ok()
            .and_then(|v| base64_decode(v).ok())
            .is_some_and(|v| verify_hmac_sha256(self.key.as_bytes(), &content, &v));
        if !matched {
            debug!("signature mismatch for {} {}", req.method(), req.uri());
            return Err(Error::invalid_signature("signature mismatch"));
        }

        let expiry = self.expiry_value(req)?;
        let expires_at = parse_rfc3339(
            expiry
                .to_str()
                .map_err(|e| Error::malformed_expiry_timestamp("expiry is not ascii").with_source(e))?,
        )?;
        if self.now() >= expires_at {
            debug!("signature for {} {} expired at {expires_at}", req.method(), req.uri());
            return Err(Error::signature_expired(format!(
                "signature expired at {}",
                format_rfc3339(expires_at)
            )));
        }

        Ok(())
    }

    /// Calculate the base64 encoded signature of the request as it is now.
    ///
    /// The expiry header must already be set. The body, if any, is buffered
    /// and stays readable.
    pub fn calculate_signature(
        &self,
        req: &mut http::Request<Body>,
        signed_headers: &[&str],
    ) -> Result<String> {
        let content = self.string_to_sign(req, signed_headers)?;
        Ok(base64_hmac_sha256(self.key.as_bytes(), &content))
    }

    fn expiry_value(&self, req: &http::Request<Body>) -> Result<HeaderValue> {
        match req.headers().get(&self.expiry_header) {
            Some(v) if !v.is_empty() => Ok(v.clone()),
            _ => Err(Error::no_expiry(format!(
                "header {} is missing",
                self.expiry_header
            ))),
        }
    }

    /// Construct the content to sign.
    ///
    /// ## Format
    ///
    /// ```text
    /// URL + Method + Expiry +
    /// (HeaderName + HeaderValue) for each non-empty signed header, in the given order +
    /// Body
    /// ```
    ///
    /// Parts are concatenated without separators. Header names are written as
    /// given by the caller, so `x-request-id` and `X-Request-Id` look up the
    /// same header but produce different signatures.
    ///
    /// The URL is the `http::Uri` rendering, which always has a path: a request
    /// to `http://example.com` is signed as `http://example.com/`. Signers that
    /// keep the URL without the trailing slash produce signatures that do not
    /// verify here.
    fn string_to_sign(
        &self,
        req: &mut http::Request<Body>,
        signed_headers: &[&str],
    ) -> Result<Vec<u8>> {
        let expiry = self.expiry_value(req)?;

        let mut s = Vec::new();
        s.extend_from_slice(req.uri().to_string().as_bytes());
        s.extend_from_slice(req.method().as_str().as_bytes());
        s.extend_from_slice(expiry.as_bytes());

        for name in signed_headers {
            match req.headers().get(*name) {
                Some(v) if !v.is_empty() => {
                    s.extend_from_slice(name.as_bytes());
                    s.extend_from_slice(v.as_bytes());
                }
                _ => continue,
            }
        }

        let body = req.body_mut().buffer(self.max_body_size)?;
        s.extend_from_slice(&body);

        if log_enabled!(Level::Debug) {
            debug!(
                "string to sign: {} {} expires {:?}, signed headers {:?}, body sha256 {}",
                req.method(),
                req.uri(),
                expiry,
                signed_headers,
                hex_sha256(&body)
            );
        }
        Ok(s)
    }
}

impl SignRequest for RequestSigner {
    fn sign_request(
        &self,
        req: &mut http::Request<Body>,
        expires_at: DateTime,
        signed_headers: &[&str],
    ) -> Result<()> {
        self.sign(req, expires_at, signed_headers)
    }

    fn verify_request(
        &self,
        req: &mut http::Request<Body>,
        signed_headers: &[&str],
    ) -> Result<()> {
        self.verify(req, signed_headers)
    }
}
