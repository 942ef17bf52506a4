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

use std::fmt;
use thiserror::Error;

/// The error type for websig operations
#[derive(Error, Debug)]
#[error("{kind}: {message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    #[source]
    source: Option<anyhow::Error>,
}

/// The kind of error that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The signature header is absent.
    NoSignature,

    /// The expiry header is absent while computing the digest.
    NoExpiry,

    /// The attached signature doesn't match the computed one.
    InvalidSignature,

    /// The signature matched but its expiry instant has passed.
    SignatureExpired,

    /// The request body exceeds the configured limit.
    BodyTooLarge,

    /// The expiry header can't be parsed as an RFC 3339 timestamp.
    MalformedExpiryTimestamp,

    /// Reading the request body failed.
    BodyReadFailure,

    /// Request cannot be signed (invalid header names or values, etc.)
    RequestInvalid,

    /// Configuration error (missing signing key, invalid values)
    ConfigInvalid,

    /// Unexpected errors
    Unexpected,
}

impl Error {
    /// Create a new error with the given kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Check if this error comes from checking the request itself.
    ///
    /// Servers should answer these with a rejection (typically `401`) instead of
    /// treating them as internal failures.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::NoSignature
                | ErrorKind::NoExpiry
                | ErrorKind::InvalidSignature
                | ErrorKind::SignatureExpired
                | ErrorKind::BodyTooLarge
                | ErrorKind::MalformedExpiryTimestamp
        )
    }
}

// Convenience constructors
impl Error {
    /// Create a no signature error
    pub fn no_signature(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NoSignature, message)
    }

    /// Create a no expiry error
    pub fn no_expiry(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NoExpiry, message)
    }

    /// Create an invalid signature error
    pub fn invalid_signature(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidSignature, message)
    }

    /// Create a signature expired error
    pub fn signature_expired(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::SignatureExpired, message)
    }

    /// Create a body too large error
    pub fn body_too_large(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::BodyTooLarge, message)
    }

    /// Create a malformed expiry timestamp error
    pub fn malformed_expiry_timestamp(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedExpiryTimestamp, message)
    }

    /// Create a body read failure error
    pub fn body_read_failure(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::BodyReadFailure, message)
    }

    /// Create a request invalid error
    pub fn request_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RequestInvalid, message)
    }

    /// Create a config invalid error
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigInvalid, message)
    }

    /// Create an unexpected error
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::NoSignature => write!(f, "no signature"),
            ErrorKind::NoExpiry => write!(f, "no signature expiry"),
            ErrorKind::InvalidSignature => write!(f, "invalid signature"),
            ErrorKind::SignatureExpired => write!(f, "signature expired"),
            ErrorKind::BodyTooLarge => write!(f, "body too large"),
            ErrorKind::MalformedExpiryTimestamp => write!(f, "malformed expiry timestamp"),
            ErrorKind::BodyReadFailure => write!(f, "body read failure"),
            ErrorKind::RequestInvalid => write!(f, "invalid request"),
            ErrorKind::ConfigInvalid => write!(f, "invalid configuration"),
            ErrorKind::Unexpected => write!(f, "unexpected error"),
        }
    }
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;

impl From<http::Error> for Error {
    fn from(err: http::Error) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::InvalidHeaderValue> for Error {
    fn from(err: http::header::InvalidHeaderValue) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

// Reading is only ever done on request bodies.
impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::body_read_failure(err.to_string()).with_source(anyhow::Error::from(err))
    }
}
