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

use serde::{Deserialize, Serialize};
use tf_provider::value::{Value, ValueString};
use tf_provider::{AttributePath, Diagnostics};

pub const HOST_ENV: &str = "SAP_DI_HOST";
pub const USERNAME_ENV: &str = "SAP_DI_USERNAME";
pub const PASSWORD_ENV: &str = "SAP_DI_PASSWORD";

/// Provider block as written by the practitioner
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig<'a> {
    #[serde(borrow = "'a")]
    pub host: ValueString<'a>,
    #[serde(borrow = "'a")]
    pub username: ValueString<'a>,
    #[serde(borrow = "'a")]
    pub password: ValueString<'a>,
}

struct Setting {
    attribute: &'static str,
    label: &'static str,
    env: &'static str,
}

const HOST: Setting = Setting {
    attribute: "host",
    label: "Host",
    env: HOST_ENV,
};
const USERNAME: Setting = Setting {
    attribute: "username",
    label: "Username",
    env: USERNAME_ENV,
};
const PASSWORD: Setting = Setting {
    attribute: "password",
    label: "Password",
    env: PASSWORD_ENV,
};

/// Connection settings resolved from the provider block and the environment
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    pub host: String,
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("host", &self.host)
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

impl Settings {
    /// Resolve the settings, reporting every unknown or missing value.
    ///
    /// Non-null configuration values take precedence over the environment,
    /// which is queried through `lookup`.
    pub fn resolve<F>(diags: &mut Diagnostics, config: &ProviderConfig<'_>, lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let fields = [
            (&HOST, &config.host),
            (&USERNAME, &config.username),
            (&PASSWORD, &config.password),
        ];
        let errors = diags.errors.len();

        for (setting, value) in fields {
            if value.is_unknown() {
                diags.error(
                    format!("Unknown SAP DI API {}", setting.label),
                    format!(
                        "The provider cannot create the SAP DI API client as there is an unknown configuration value for the SAP DI API {attr}. \
                        Either target apply the source of the value first, set the value statically in the configuration, or use the {env} environment variable.",
                        attr = setting.attribute,
                        env = setting.env,
                    ),
                    AttributePath::new(setting.attribute),
                );
            }
        }
        if diags.errors.len() > errors {
            return None;
        }

        let [host, username, password] = fields.map(|(setting, value)| {
            let resolved = match value {
                Value::Value(value) => value.to_string(),
                _ => lookup(setting.env).unwrap_or_default(),
            };
            if resolved.is_empty() {
                diags.error(
                    format!("Missing SAP DI API {}", setting.label),
                    format!(
                        "The provider cannot create the SAP DI API client as there is a missing or empty value for the SAP DI API {attr}. \
                        Set the {attr} value in the configuration or use the {env} environment variable. \
                        If either is already set, ensure the value is not empty.",
                        attr = setting.attribute,
                        env = setting.env,
                    ),
                    AttributePath::new(setting.attribute),
                );
            }
            resolved
        });
        if diags.errors.len() > errors {
            return None;
        }

        Some(Self {
            host,
            username,
            password,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use crate::utils::string_value;

    use super::*;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    fn config(host: &str, username: &str, password: &str) -> ProviderConfig<'static> {
        ProviderConfig {
            host: string_value(host),
            username: string_value(username),
            password: string_value(password),
        }
    }

    #[test]
    fn configuration_wins_over_environment() {
        let mut diags = Diagnostics::default();
        let settings = Settings::resolve(
            &mut diags,
            &config("http://config", "config-user", "config-pass"),
            env(&[
                (HOST_ENV, "http://env"),
                (USERNAME_ENV, "env-user"),
                (PASSWORD_ENV, "env-pass"),
            ]),
        )
        .unwrap();

        assert!(diags.errors.is_empty());
        assert_eq!(settings.host, "http://config");
        assert_eq!(settings.username, "config-user");
        assert_eq!(settings.password, "config-pass");
    }

    #[test]
    fn environment_fills_null_values() {
        let mut diags = Diagnostics::default();
        let config = ProviderConfig {
            host: Value::Null,
            username: string_value("admin"),
            password: Value::Null,
        };

        let settings = Settings::resolve(
            &mut diags,
            &config,
            env(&[(HOST_ENV, "http://env"), (PASSWORD_ENV, "env-pass")]),
        )
        .unwrap();

        assert_eq!(
            settings,
            Settings {
                host: "http://env".into(),
                username: "admin".into(),
                password: "env-pass".into(),
            }
        );
    }

    #[test]
    fn explicit_empty_value_is_missing() {
        let mut diags = Diagnostics::default();
        let settings = Settings::resolve(
            &mut diags,
            &config("", "admin", "test123"),
            env(&[(HOST_ENV, "http://env")]),
        );

        assert!(settings.is_none());
        assert_eq!(diags.errors.len(), 1);
        assert_eq!(diags.errors[0].summary, "Missing SAP DI API Host");
        assert!(diags.errors[0].detail.contains(HOST_ENV));
    }

    #[test]
    fn every_missing_value_is_reported() {
        let mut diags = Diagnostics::default();
        let settings = Settings::resolve(&mut diags, &ProviderConfig::default(), env(&[]));

        assert!(settings.is_none());
        let summaries: Vec<_> = diags.errors.iter().map(|d| &*d.summary).collect();
        assert_eq!(
            summaries,
            [
                "Missing SAP DI API Host",
                "Missing SAP DI API Username",
                "Missing SAP DI API Password"
            ]
        );
    }

    #[test]
    fn unknown_values_are_rejected() {
        let mut diags = Diagnostics::default();
        let config = ProviderConfig {
            username: Value::Unknown,
            ..config("http://config", "", "test123")
        };

        let settings = Settings::resolve(&mut diags, &config, env(&[(USERNAME_ENV, "env-user")]));

        assert!(settings.is_none());
        assert_eq!(diags.errors.len(), 1);
        assert_eq!(diags.errors[0].summary, "Unknown SAP DI API Username");
    }

    #[test]
    fn debug_masks_password() {
        let settings = Settings {
            host: "http://di.example".into(),
            username: "admin".into(),
            password: "test123".into(),
        };
        assert!(!format!("{settings:?}").contains("test123"));
    }
}
