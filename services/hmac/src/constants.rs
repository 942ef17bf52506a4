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

/// Default header carrying the base64 encoded signature.
pub const DEFAULT_SIGNATURE_HEADER: &str = "X-Signature";
/// Default header carrying the RFC 3339 expiry instant of the signature.
pub const DEFAULT_EXPIRY_HEADER: &str = "X-Sig-Expired";

/// Env value holding the signing key.
pub const WEBSIG_SIGNING_KEY: &str = "WEBSIG_SIGNING_KEY";
/// Env value overriding the signature header name.
pub const WEBSIG_SIGNATURE_HEADER: &str = "WEBSIG_SIGNATURE_HEADER";
/// Env value overriding the expiry header name.
pub const WEBSIG_EXPIRY_HEADER: &str = "WEBSIG_EXPIRY_HEADER";
/// Env value overriding the body size limit, in bytes.
pub const WEBSIG_MAX_BODY_SIZE: &str = "WEBSIG_MAX_BODY_SIZE";
