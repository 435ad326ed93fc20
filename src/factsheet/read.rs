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

use tf_provider::value::{Value, ValueList};

use crate::sap_di::{Factsheet, FactsheetColumn, FactsheetDescription, FactsheetMetadata};
use crate::utils::string_value;

use super::state::{ColumnState, DescriptionState, FactsheetState, MetadataState};

/// A factsheet has no natural identifier
pub(super) const PLACEHOLDER_ID: &str = "placeholder";

impl<'a> FactsheetState<'a> {
    /// Replace the computed attributes with the content of `factsheet`
    pub(super) fn apply(&mut self, factsheet: Factsheet) {
        self.id = string_value(PLACEHOLDER_ID);
        self.metadata = Value::Value(factsheet.metadata.into());
        self.columns = Value::Value(
            factsheet
                .columns
                .into_iter()
                .map(|column| Value::Value(column.into()))
                .collect(),
        );
    }
}

impl<'a> From<FactsheetMetadata> for MetadataState<'a> {
    fn from(metadata: FactsheetMetadata) -> Self {
        Self {
            name: string_value(metadata.name),
            uri: string_value(metadata.uri),
            connection_id: string_value(metadata.connection_id),
            descriptions: descriptions(metadata.descriptions),
        }
    }
}

impl<'a> From<FactsheetColumn> for ColumnState<'a> {
    fn from(column: FactsheetColumn) -> Self {
        Self {
            name: string_value(column.name),
            kind: string_value(column.kind),
            descriptions: descriptions(column.descriptions),
        }
    }
}

impl<'a> From<FactsheetDescription> for DescriptionState<'a> {
    fn from(description: FactsheetDescription) -> Self {
        Self {
            origin: string_value(description.origin),
            kind: string_value(description.kind),
            value: string_value(description.value),
        }
    }
}

fn descriptions<'a>(
    descriptions: Vec<FactsheetDescription>,
) -> ValueList<Value<DescriptionState<'a>>> {
    Value::Value(
        descriptions
            .into_iter()
            .map(|description| Value::Value(description.into()))
            .collect(),
    )
}
