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

use serde::Deserialize;
use serde_json::Number;
use utoipa::ToSchema;

use crate::entities::{numeric, Customer, Invoice, LineItem};

/// Body of a customer create. New customers start without invoices.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[schema(example = "jdoe")]
    pub user_name: Option<String>,
}

impl From<CustomerRequest> for Customer {
    fn from(request: CustomerRequest) -> Self {
        Customer {
            id: None,
            first_name: request.first_name.unwrap_or_default(),
            last_name: request.last_name.unwrap_or_default(),
            user_name: request.user_name.unwrap_or_default(),
            invoices: Vec::new(),
        }
    }
}

/// An invoice to append to a customer.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRequest {
    #[serde(default, deserialize_with = "numeric::deserialize")]
    #[schema(value_type = Option<f64>)]
    pub subtotal: Option<Number>,
    #[serde(default, deserialize_with = "numeric::deserialize")]
    #[schema(value_type = Option<f64>)]
    pub tax: Option<Number>,
    pub date_created: Option<String>,
    pub date_shipped: Option<String>,
    #[serde(default)]
    pub line_items: Vec<LineItem>,
}

impl From<InvoiceRequest> for Invoice {
    fn from(request: InvoiceRequest) -> Self {
        Invoice {
            id: None,
            subtotal: request.subtotal,
            tax: request.tax,
            date_created: request.date_created,
            date_shipped: request.date_shipped,
            line_items: request.line_items,
        }
    }
}
