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

//! Customers and their invoices.

use axum::{
    extract::{Extension, Path},
    response::Json,
};
use log::info;

use crate::api::error::{ApiError, ErrorResponse};
use crate::api::extract::ApiJson;
use crate::api::models::{CustomerRequest, InvoiceRequest};
use crate::config::WriteMode;
use crate::entities::{Customer, Invoice};
use crate::store::Repository;

use super::persist_parent;

/// Create a customer
#[utoipa::path(
    post,
    path = "/api/customers",
    operation_id = "createCustomer",
    request_body = CustomerRequest,
    responses(
        (status = 200, description = "The stored customer", body = Customer),
        (status = 500, description = "Server Exception", body = ErrorResponse),
        (status = 501, description = "MongoDB Exception", body = ErrorResponse),
    ),
    tag = "Customers"
)]
pub async fn create_customer(
    Extension(customers): Extension<Repository<Customer>>,
    ApiJson(request): ApiJson<CustomerRequest>,
) -> Result<Json<Customer>, ApiError> {
    let created = customers.create(Customer::from(request)).await?;
    info!("Created customer '{}'", created.user_name);
    Ok(Json(created))
}

/// Append an invoice to a customer
#[utoipa::path(
    post,
    path = "/api/customers/{userName}/invoices",
    operation_id = "createInvoiceByUserName",
    params(
        ("userName" = String, Path, description = "Customer user name")
    ),
    request_body = InvoiceRequest,
    responses(
        (status = 200, description = "The appended invoice", body = Invoice),
        (status = 401, description = "Invalid userName.", body = ErrorResponse),
        (status = 500, description = "Server Exception", body = ErrorResponse),
        (status = 501, description = "MongoDB Exception", body = ErrorResponse),
    ),
    tag = "Customers"
)]
pub async fn create_invoice_by_user_name(
    Extension(customers): Extension<Repository<Customer>>,
    Extension(write_mode): Extension<WriteMode>,
    Path(user_name): Path<String>,
    ApiJson(request): ApiJson<InvoiceRequest>,
) -> Result<Json<Invoice>, ApiError> {
    let Some(mut customer) = customers
        .find_by(Customer::USER_NAME_FIELD, &user_name)
        .await?
    else {
        return Err(ApiError::invalid_user_name());
    };

    customer.invoices.push(Invoice::from(request));
    let mut saved =
        persist_parent(&customers, customer, write_mode, ApiError::invalid_user_name).await?;

    let invoice = saved
        .invoices
        .pop()
        .ok_or_else(|| ApiError::server("Appended invoice missing after save"))?;
    info!("Invoice added for customer '{user_name}'");
    Ok(Json(invoice))
}

/// List a customer's invoices
#[utoipa::path(
    get,
    path = "/api/customers/{userName}/invoices",
    operation_id = "findAllInvoicesByUserName",
    params(
        ("userName" = String, Path, description = "Customer user name")
    ),
    responses(
        (status = 200, description = "Array of invoices", body = [Invoice]),
        (status = 401, description = "Invalid userName.", body = ErrorResponse),
        (status = 500, description = "Server Exception", body = ErrorResponse),
        (status = 501, description = "MongoDB Exception", body = ErrorResponse),
    ),
    tag = "Customers"
)]
pub async fn find_all_invoices_by_user_name(
    Extension(customers): Extension<Repository<Customer>>,
    Path(user_name): Path<String>,
) -> Result<Json<Vec<Invoice>>, ApiError> {
    customers
        .find_by(Customer::USER_NAME_FIELD, &user_name)
        .await?
        .map(|customer| Json(customer.invoices))
        .ok_or_else(ApiError::invalid_user_name)
}
