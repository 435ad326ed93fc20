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
use tracing::{debug, info};

use tf_provider::schema::{Attribute, AttributeConstraint, AttributeType};
use tf_provider::{map, Block, Description, Diagnostics, Provider, Schema, ValueEmpty};

use crate::{
    factsheet::FactsheetDataSource,
    sap_di::{SapDiClient, SharedClient},
    settings::{ProviderConfig, Settings, HOST_ENV, PASSWORD_ENV, USERNAME_ENV},
};

#[derive(Debug, Default, Clone)]
pub struct SapDiProvider {
    client: SharedClient,
}

impl SapDiProvider {
    /// Provider storing its client into `client` once configured
    pub fn new(client: SharedClient) -> Self {
        Self { client }
    }
}

fn optional_string(description: String, sensitive: bool) -> Attribute {
    Attribute {
        attr_type: AttributeType::String,
        description: Description::plain(description),
        constraint: AttributeConstraint::Optional,
        sensitive,
        ..Default::default()
    }
}

#[async_trait]
impl Provider for SapDiProvider {
    type Config<'a> = ProviderConfig<'a>;
    type MetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        Some(Schema {
            version: 1,
            block: Block {
                attributes: map! {
                    "host" => optional_string(
                        format!("URI for SAP DI. May also be provided via {HOST_ENV} environment variable."),
                        false,
                    ),
                    "username" => optional_string(
                        format!("Username for SAP DI. May also be provided via {USERNAME_ENV} environment variable."),
                        false,
                    ),
                    "password" => optional_string(
                        format!("Password for SAP DI. May also be provided via {PASSWORD_ENV} environment variable."),
                        true,
                    ),
                },
                description: Description::plain("Interact with SAP DI"),
                ..Default::default()
            },
        })
    }

    async fn validate<'a>(&self, _diags: &mut Diagnostics, _config: Self::Config<'a>) -> Option<()> {
        Some(())
    }

    async fn configure<'a>(
        &self,
        diags: &mut Diagnostics,
        terraform_version: String,
        config: Self::Config<'a>,
    ) -> Option<()> {
        info!(terraform_version, "Configuring SAP DI client");

        let settings = Settings::resolve(diags, &config, |name| std::env::var(name).ok())?;

        debug!(
            host = %settings.host,
            username = %settings.username,
            "Creating SAP DI client"
        );

        match SapDiClient::new(
            &settings.host,
            Some(&settings.username),
            Some(&settings.password),
        ) {
            Ok(client) => {
                self.client.set(client).await;
                info!(host = %settings.host, "Configured SAP DI client");
                Some(())
            }
            Err(err) => {
                diags.root_error(
                    "Unable to Create SAP DI API Client",
                    format!(
                        "An unexpected error occurred when creating the SAP DI API client. \
                        If the error is not clear, please contact the provider developers.\n\n\
                        SAP DI Client Error: {err}"
                    ),
                );
                None
            }
        }
    }

    fn get_resources(
        &self,
        _diags: &mut Diagnostics,
    ) -> Option<std::collections::HashMap<String, Box<dyn tf_provider::resource::DynamicResource>>>
    {
        Some(map! {})
    }

    fn get_data_sources(
        &self,
        _diags: &mut Diagnostics,
    ) -> Option<
        std::collections::HashMap<String, Box<dyn tf_provider::data_source::DynamicDataSource>>,
    > {
        Some(map! {
            "factsheet" => FactsheetDataSource::new(self.client.clone()),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use tf_provider::value::Value;

    use super::*;

    fn config(host: &str) -> ProviderConfig<'static> {
        ProviderConfig {
            host: Value::Value(Cow::Owned(host.to_owned())),
            username: Value::Value(Cow::Borrowed("admin")),
            password: Value::Value(Cow::Borrowed("test123")),
        }
    }

    #[tokio::test]
    async fn configure_stores_client() {
        let client = SharedClient::default();
        let provider = SapDiProvider::new(client.clone());
        let mut diags = Diagnostics::default();

        let configured = provider
            .configure(&mut diags, "1.9.0".to_owned(), config("http://di.example"))
            .await;

        assert_eq!(configured, Some(()));
        assert!(diags.errors.is_empty());
        let client = client.get().await.expect("client should be configured");
        assert_eq!(client.host_url().as_str(), "http://di.example/");
        assert_eq!(client.basic_auth(), "Basic YWRtaW46dGVzdDEyMw==");
    }

    #[tokio::test]
    async fn configure_rejects_invalid_host() {
        let client = SharedClient::default();
        let provider = SapDiProvider::new(client.clone());
        let mut diags = Diagnostics::default();

        let configured = provider
            .configure(&mut diags, "1.9.0".to_owned(), config("not a url"))
            .await;

        assert_eq!(configured, None);
        assert_eq!(diags.errors.len(), 1);
        assert_eq!(diags.errors[0].summary, "Unable to Create SAP DI API Client");
        assert!(client.get().await.is_none());
    }

    #[tokio::test]
    async fn configure_rejects_empty_host_before_any_client() {
        let client = SharedClient::default();
        let provider = SapDiProvider::new(client.clone());
        let mut diags = Diagnostics::default();

        let configured = provider
            .configure(&mut diags, "1.9.0".to_owned(), config(""))
            .await;

        assert_eq!(configured, None);
        assert_eq!(diags.errors[0].summary, "Missing SAP DI API Host");
        assert!(client.get().await.is_none());
    }

    #[test]
    fn schema_marks_password_sensitive() {
        let mut diags = Diagnostics::default();
        let schema = SapDiProvider::default().schema(&mut diags).unwrap();
        let attributes = &schema.block.attributes;

        assert_eq!(attributes.len(), 3);
        assert!(attributes["password"].sensitive);
        assert!(!attributes["host"].sensitive);
        assert!(!attributes["username"].sensitive);
    }

    #[test]
    fn exposes_factsheet_data_source_only() {
        let mut diags = Diagnostics::default();
        let provider = SapDiProvider::default();

        let data_sources = provider.get_data_sources(&mut diags).unwrap();
        let resources = provider.get_resources(&mut diags).unwrap();

        assert_eq!(data_sources.keys().collect::<Vec<_>>(), ["factsheet"]);
        assert!(resources.is_empty());
    }
}
