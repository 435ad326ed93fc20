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

use async_trait::async_trait;
use tracing::{info, warn};

use tf_provider::{AttributePath, DataSource, Diagnostics, Schema, ValueEmpty};

use crate::sap_di::SharedClient;
use crate::utils::{WithSchema, WithValidate};

use super::state::FactsheetState;

#[derive(Debug, Default, Clone)]
pub struct FactsheetDataSource {
    client: SharedClient,
}

impl FactsheetDataSource {
    pub fn new(client: SharedClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DataSource for FactsheetDataSource {
    type State<'a> = FactsheetState<'a>;
    type ProviderMetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        Some(FactsheetState::schema())
    }

    async fn validate<'a>(&self, diags: &mut Diagnostics, config: Self::State<'a>) -> Option<()> {
        config.validate(diags, AttributePath::default()).await;

        if diags.errors.is_empty() {
            Some(())
        } else {
            None
        }
    }

    async fn read<'a>(
        &self,
        diags: &mut Diagnostics,
        config: Self::State<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<Self::State<'a>> {
        let Some(client) = self.client.get().await else {
            diags.root_error(
                "SAP DI provider is not configured",
                "The factsheet cannot be read before the provider has created its SAP DI API client.",
            );
            return None;
        };

        let connection_id = config.connection_id.as_str();
        let dataset_uri = config.dataset_uri.as_str();
        info!(connection_id, dataset_uri, "Reading SAP DI factsheet");

        match client.get_factsheet(connection_id, dataset_uri).await {
            Ok(factsheet) => {
                let mut state = config.clone();
                state.apply(factsheet);

                info!(connection_id, dataset_uri, "Read SAP DI factsheet");
                Some(state)
            }
            Err(err) => {
                warn!(connection_id, dataset_uri, error = %err, "Failed to read SAP DI factsheet");
                diags.root_error("Unable to read SAP DI factsheet", err.to_string());
                None
            }
        }
    }
}
