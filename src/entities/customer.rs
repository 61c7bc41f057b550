// Copyright 2025 Phuong Tran.
//
// Licensed under the Apache License, Version 2.0 (the "License");
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
use serde_json::Number;
use utoipa::ToSchema;

use super::{ensure_id, numeric};
use crate::store::Entity;

/// A shopper with their embedded invoice history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub invoices: Vec<Invoice>,
}

/// An invoice embedded in a customer. Amounts are not validated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "numeric::deserialize"
    )]
    #[schema(value_type = Option<f64>)]
    pub subtotal: Option<Number>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "numeric::deserialize"
    )]
    #[schema(value_type = Option<f64>)]
    pub tax: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_shipped: Option<String>,
    #[serde(default)]
    pub line_items: Vec<LineItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LineItem {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "numeric::deserialize"
    )]
    #[schema(value_type = Option<f64>)]
    pub price: Option<Number>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "numeric::deserialize"
    )]
    #[schema(value_type = Option<f64>)]
    pub quantity: Option<Number>,
}

impl Customer {
    /// Wire name of the field invoices are looked up by.
    pub const USER_NAME_FIELD: &'static str = "userName";
}

impl Entity for Customer {
    const COLLECTION: &'static str = "customers";
    const REQUIRED_FIELDS: &'static [&'static str] = &["firstName", "lastName", "userName"];

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn assign_embedded_ids(&mut self, next_id: &mut dyn FnMut() -> String) {
        for invoice in &mut self.invoices {
            ensure_id(&mut invoice.id, next_id);
            for item in &mut invoice.line_items {
                ensure_id(&mut item.id, next_id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_customer_uses_wire_names() {
        let customer = Customer {
            id: Some("c1".to_string()),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            user_name: "jdoe".to_string(),
            invoices: vec![Invoice {
                subtotal: Some(10.into()),
                date_created: Some("2024-02-23".to_string()),
                line_items: vec![LineItem {
                    name: Some("pen".to_string()),
                    quantity: Some(2.into()),
                    ..Default::default()
                }],
                ..Default::default()
            }],
        };

        let value = serde_json::to_value(&customer).unwrap();
        assert_eq!(value["_id"], json!("c1"));
        assert_eq!(value["userName"], json!("jdoe"));
        assert_eq!(value["invoices"][0]["dateCreated"], json!("2024-02-23"));
        assert_eq!(value["invoices"][0]["lineItems"][0]["name"], json!("pen"));
        assert!(value["invoices"][0].get("tax").is_none());
    }

    #[test]
    fn test_assign_embedded_ids_reaches_line_items() {
        let mut customer = Customer {
            invoices: vec![Invoice {
                line_items: vec![LineItem::default(), LineItem::default()],
                ..Default::default()
            }],
            ..Default::default()
        };
        let mut counter = 0;
        customer.assign_embedded_ids(&mut || {
            counter += 1;
            format!("id-{counter}")
        });

        assert_eq!(customer.invoices[0].id.as_deref(), Some("id-1"));
        assert_eq!(customer.invoices[0].line_items[0].id.as_deref(), Some("id-2"));
        assert_eq!(customer.invoices[0].line_items[1].id.as_deref(), Some("id-3"));
    }
}
