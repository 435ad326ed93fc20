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

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tf_provider::schema::{Attribute, AttributeConstraint, AttributeType};
use tf_provider::value::{Value, ValueList, ValueString};
use tf_provider::{map, Block, Description, Schema};

use crate::utils::WithSchema;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactsheetState<'a> {
    #[serde(borrow = "'a")]
    pub connection_id: ValueString<'a>,
    #[serde(borrow = "'a")]
    pub dataset_uri: ValueString<'a>,
    #[serde(borrow = "'a")]
    pub id: ValueString<'a>,
    #[serde(borrow = "'a")]
    pub metadata: Value<MetadataState<'a>>,
    #[serde(borrow = "'a")]
    pub columns: ValueList<Value<ColumnState<'a>>>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataState<'a> {
    #[serde(borrow = "'a")]
    pub name: ValueString<'a>,
    #[serde(borrow = "'a")]
    pub uri: ValueString<'a>,
    #[serde(borrow = "'a")]
    pub connection_id: ValueString<'a>,
    #[serde(borrow = "'a")]
    pub descriptions: ValueList<Value<DescriptionState<'a>>>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnState<'a> {
    #[serde(borrow = "'a")]
    pub name: ValueString<'a>,
    #[serde(borrow = "'a", rename = "type")]
    pub kind: ValueString<'a>,
    #[serde(borrow = "'a")]
    pub descriptions: ValueList<Value<DescriptionState<'a>>>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptionState<'a> {
    #[serde(borrow = "'a")]
    pub origin: ValueString<'a>,
    #[serde(borrow = "'a", rename = "type")]
    pub kind: ValueString<'a>,
    #[serde(borrow = "'a")]
    pub value: ValueString<'a>,
}

fn computed_string(description: &str) -> Attribute {
    Attribute {
        attr_type: AttributeType::String,
        description: Description::plain(description),
        constraint: AttributeConstraint::Computed,
        ..Default::default()
    }
}

fn descriptions_attribute(description: &str) -> Attribute {
    Attribute {
        attr_type: AttributeType::AttributeList(map! {
            "origin" => computed_string("Origin of the description"),
            "type"   => computed_string("Kind of the description"),
            "value"  => computed_string("Content of the description"),
        }),
        description: Description::plain(description),
        constraint: AttributeConstraint::Computed,
        ..Default::default()
    }
}

fn metadata_attributes() -> HashMap<String, Attribute> {
    map! {
        "name"          => computed_string("Name of the dataset"),
        "uri"           => computed_string("URI of the dataset"),
        "connection_id" => computed_string("Connection owning the dataset"),
        "descriptions"  => descriptions_attribute("Descriptions of the factsheet"),
    }
}

fn column_attributes() -> HashMap<String, Attribute> {
    map! {
        "name"         => computed_string("Name of the column"),
        "type"         => computed_string("Type of the column"),
        "descriptions" => descriptions_attribute("Descriptions of the column"),
    }
}

impl<'a> WithSchema for FactsheetState<'a> {
    fn schema() -> Schema {
        Schema {
            version: 1,
            block: Block {
                attributes: map! {
                    "connection_id" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Connection of the catalog the dataset belongs to"),
                        constraint: AttributeConstraint::Required,
                        ..Default::default()
                    },
                    "dataset_uri" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Path of the dataset within the connection, e.g. `/shared/sales/orders.csv`"),
                        constraint: AttributeConstraint::Required,
                        ..Default::default()
                    },
                    "id" => computed_string("Placeholder identifier"),
                    "metadata" => Attribute {
                        attr_type: AttributeType::AttributeSingle(metadata_attributes()),
                        description: Description::plain("Metadata of the factsheet"),
                        constraint: AttributeConstraint::Computed,
                        ..Default::default()
                    },
                    "columns" => Attribute {
                        attr_type: AttributeType::AttributeList(column_attributes()),
                        description: Description::plain("Columns of the dataset"),
                        constraint: AttributeConstraint::Computed,
                        ..Default::default()
                    },
                },
                description: Description::plain("Fetches the factsheet of a dataset from the SAP DI metadata catalog"),
                ..Default::default()
            },
        }
    }
}
