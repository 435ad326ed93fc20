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
use tf_provider::{AttributePath, Diagnostics};

use crate::utils::{require_non_empty, WithValidate};

use super::state::FactsheetState;

#[async_trait]
impl<'a> WithValidate for FactsheetState<'a> {
    async fn validate(&self, diags: &mut Diagnostics, attr_path: AttributePath) {
        require_non_empty(
            diags,
            &self.connection_id,
            attr_path.clone().attribute("connection_id"),
        );
        require_non_empty(
            diags,
            &self.dataset_uri,
            attr_path.attribute("dataset_uri"),
        );
    }
}
