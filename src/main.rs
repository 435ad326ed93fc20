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

use tf_provider::serve;
use tracing_subscriber::EnvFilter;

use crate::provider::SapDiProvider;

mod factsheet;
mod provider;
mod sap_di;
mod settings;
mod utils;

/// Log filter directives, e.g. `SAP_DI_LOG=debug`
const LOG_ENV: &str = "SAP_DI_LOG";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Stdout carries the plugin handshake, Terraform collects stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    serve("sapdi", SapDiProvider::default())
        .await
        .map_err(|err| anyhow::anyhow!("failed to serve the sapdi provider: {err}"))
}
