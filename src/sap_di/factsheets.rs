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

use tracing::debug;
use url::Url;

use super::client::SapDiClient;
use super::error::Result;
use super::models::Factsheet;

const CONNECTIONS_PATH: [&str; 6] = [
    "app",
    "datahub-app-metadata",
    "api",
    "v1",
    "catalog",
    "connections",
];

impl SapDiClient {
    /// Endpoint of the factsheet of `dataset_uri` within `connection_id`.
    ///
    /// Both identifiers are pushed as single path segments, so the slashes of
    /// the dataset URI end up as `%2F`.
    pub fn factsheet_url(&self, connection_id: &str, dataset_uri: &str) -> Url {
        let mut url = self.host_url().clone();
        url.set_query(None);
        url.set_fragment(None);

        // The host is checked to be a base URL when the client is built
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(CONNECTIONS_PATH)
                .push(connection_id)
                .push("datasets")
                .push(dataset_uri)
                .push("factsheet");
        }

        url
    }

    /// Fetch the factsheet of a dataset
    pub async fn get_factsheet(&self, connection_id: &str, dataset_uri: &str) -> Result<Factsheet> {
        let url = self.factsheet_url(connection_id, dataset_uri);
        debug!(%url, "Fetching SAP DI factsheet");

        let body = self.execute(self.get(url)).await?;

        Ok(serde_json::from_slice(&body)?)
    }
}
