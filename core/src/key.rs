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

use bytes::Bytes;

use crate::utils::Redact;

/// SigningKey is the shared secret used to compute request signatures.
///
/// The key never leaves the process: it is not written into requests and is
/// redacted in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningKey(Bytes);

impl SigningKey {
    /// Create a new signing key from raw bytes.
    pub fn new(key: impl Into<Bytes>) -> Self {
        Self(key.into())
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Check if the key is usable for signing.
    pub fn is_valid(&self) -> bool {
        !self.0.is_empty()
    }
}

impl From<&str> for SigningKey {
    fn from(value: &str) -> Self {
        Self(Bytes::copy_from_slice(value.as_bytes()))
    }
}

impl From<String> for SigningKey {
    fn from(value: String) -> Self {
        Self(Bytes::from(value))
    }
}

impl From<Vec<u8>> for SigningKey {
    fn from(value: Vec<u8>) -> Self {
        Self(Bytes::from(value))
    }
}

impl Debug for SigningKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SigningKey")
            .field(&Redact::from(self.as_bytes()))
            .finish()
    }
}
