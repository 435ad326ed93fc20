// This file is part of the terraform-provider-sapdi project
//
// Copyright (C) ANEO, 2024-2024. All rights reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License")
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::time::Duration;

use thiserror::Error;

/// Errors raised while talking to the SAP DI metadata catalog
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid SAP DI host `{host}`: {reason}")]
    InvalidHost { host: String, reason: String },

    #[error("request timed out after {timeout:?}: {source}")]
    Timeout {
        timeout: Duration,
        #[source]
        source: reqwest::Error,
    },

    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// Any response whose status is not exactly 200
    #[error("status: {status}, body: {body}")]
    Status { status: u16, body: String },

    #[error("failed to decode factsheet: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
