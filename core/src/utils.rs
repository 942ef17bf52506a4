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

//! Utility functions and types.

use std::fmt::Debug;

/// Redacts secrets in `Debug` output.
///
/// - Empty input is shown as `EMPTY`.
/// - Input shorter than 12 bytes, or containing anything but printable ASCII, is
///   fully redacted as `***`.
/// - Otherwise only the first three and the last three characters are kept.
///
/// Signing keys are arbitrary bytes, so they go through the same rules.
pub struct Redact<'a>(&'a [u8]);

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact(value.as_bytes())
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact(value.as_bytes())
    }
}

impl<'a> From<&'a [u8]> for Redact<'a> {
    fn from(value: &'a [u8]) -> Self {
        Redact(value)
    }
}

impl<'a> Debug for Redact<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let length = self.0.len();
        if length == 0 {
            return f.write_str("EMPTY");
        }
        if length < 12 || !self.0.iter().all(|b| b.is_ascii_graphic() || *b == b' ') {
            return f.write_str("***");
        }

        // Printable ASCII checked above, so byte slicing is char slicing.
        let s = String::from_utf8_lossy(self.0);
        f.write_str(&s[..3])?;
        f.write_str("***")?;
        f.write_str(&s[length - 3..])
    }
}
