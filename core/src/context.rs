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

use std::fmt::Debug;
use std::sync::Arc;

use crate::env::{Env, NoopEnv};

/// Context carries the environment signers are configured from.
///
/// Nothing is read from the process unless asked: a fresh context sees no
/// variables at all. Plug in [`OsEnv`](crate::OsEnv) for the real environment
/// or [`StaticEnv`](crate::StaticEnv) for a fixed one.
///
/// ```
/// use websig_core::{Context, OsEnv};
///
/// let ctx = Context::new().with_env(OsEnv);
/// let _key = ctx.env_var("WEBSIG_SIGNING_KEY");
/// ```
#[derive(Clone, Debug)]
pub struct Context {
    env: Arc<dyn Env>,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Create a context that sees an empty environment.
    pub fn new() -> Self {
        Self {
            env: Arc::new(NoopEnv),
        }
    }

    /// Use `env` to look up variables.
    pub fn with_env(mut self, env: impl Env) -> Self {
        self.env = Arc::new(env);
        self
    }

    /// Look up a variable, `None` if unset or not valid utf-8.
    #[inline]
    pub fn env_var(&self, key: &str) -> Option<String> {
        self.env.var(key)
    }
}
