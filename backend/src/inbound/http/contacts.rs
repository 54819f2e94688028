//! Contacts API handlers.
//!
//! ```text
//! GET  /address_book/{addressBookId}/contacts?compareTo=b,c
//! POST /address_book/{addressBookId}/contacts {"name":"Gerald","phoneNumber":"0441"}
//! ```

use std::future::Future;
use std::time::Duration;

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::ports::{AddContactRequest, ListContactsRequest};
use crate::domain::{AddressBookId, Contact, ContactName, Error, PhoneNumber};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::{json_error_handler, query_error_handler};
use crate::inbound::http::schemas::{ContactSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    ADDRESS_BOOK_ID_FIELD, COMPARE_TO_FIELD, FieldName, NAME_FIELD, PHONE_NUMBER_FIELD,
    field_error, missing_field_error, parse_address_book_id, parse_address_book_id_list,
};

/// Query string for `GET /address_book/{addressBookId}/contacts`.
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListContactsQuery {
    /// Comma-separated address book ids to compare against. When present,
    /// only contacts not shared between the books are returned.
    #[param(example = "work,family")]
    pub compare_to: Option<String>,
}

/// Request body for `POST /address_book/{addressBookId}/contacts`.
///
/// Fields are optional at the wire level so absence is reported as a
/// field-level validation error.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddContactBody {
    #[schema(example = "Gerald")]
    pub name: Option<String>,
    #[schema(example = "0441 234 567")]
    pub phone_number: Option<String>,
}

/// Run a port call under the request deadline.
async fn with_deadline<T, F>(deadline: Duration, call: F) -> ApiResult<T>
where
    F: Future<Output = ApiResult<T>>,
{
    tokio::time::timeout(deadline, call).await.unwrap_or_else(|_| {
        warn!(?deadline, "request deadline exceeded");
        Err(Error::service_unavailable("request timed out"))
    })
}

fn required(value: Option<String>, field: FieldName) -> ApiResult<String> {
    value.ok_or_else(|| missing_field_error(field))
}

fn contact_from_body(
    body: AddContactBody,
    address_book_id: AddressBookId,
) -> ApiResult<Contact> {
    let name = required(body.name, NAME_FIELD)?;
    let phone_number = required(body.phone_number, PHONE_NUMBER_FIELD)?;
    let name =
        ContactName::new(name.as_str()).map_err(|err| field_error(NAME_FIELD, &err, &name))?;
    let phone_number = PhoneNumber::new(phone_number.as_str())
        .map_err(|err| field_error(PHONE_NUMBER_FIELD, &err, &phone_number))?;
    Ok(Contact::new(name, phone_number, address_book_id))
}

/// List an address book, optionally reduced to contacts unique across books.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use contacts::inbound::http::contacts::list_contacts;
///
/// let app = App::new().service(list_contacts);
/// ```
#[utoipa::path(
    get,
    path = "/address_book/{addressBookId}/contacts",
    params(
        ("addressBookId" = String, Path, description = "Address book identifier"),
        ListContactsQuery
    ),
    responses(
        (status = 200, description = "Contacts sorted by name", body = [ContactSchema]),
        (status = 400, description = "Invalid identifier or compareTo list", body = ErrorSchema),
        (status = 404, description = "Address book not found", body = ErrorSchema),
        (status = 503, description = "Request deadline exceeded", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["contacts"],
    operation_id = "listContacts"
)]
#[get("/address_book/{address_book_id}/contacts")]
pub async fn list_contacts(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    query: web::Query<ListContactsQuery>,
) -> ApiResult<web::Json<Vec<Contact>>> {
    let address_book_id = parse_address_book_id(
        path.into_inner(),
        ADDRESS_BOOK_ID_FIELD,
        &state.address_book_ids,
    )?;
    let compare_to = query
        .into_inner()
        .compare_to
        .map(|raw| parse_address_book_id_list(&raw, COMPARE_TO_FIELD, &state.address_book_ids))
        .transpose()?;

    let request = ListContactsRequest {
        address_book_id,
        compare_to,
    };
    let contacts =
        with_deadline(state.request_timeout, state.contacts_query.list_contacts(request)).await?;
    Ok(web::Json(contacts))
}

/// Add a contact to an address book.
#[utoipa::path(
    post,
    path = "/address_book/{addressBookId}/contacts",
    params(("addressBookId" = String, Path, description = "Address book identifier")),
    request_body = AddContactBody,
    responses(
        (status = 201, description = "Contact created", body = ContactSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 409, description = "Contact already exists", body = ErrorSchema),
        (status = 503, description = "Request deadline exceeded", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["contacts"],
    operation_id = "addContact"
)]
#[post("/address_book/{address_book_id}/contacts")]
pub async fn add_contact(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<AddContactBody>,
) -> ApiResult<HttpResponse> {
    let address_book_id = parse_address_book_id(
        path.into_inner(),
        ADDRESS_BOOK_ID_FIELD,
        &state.address_book_ids,
    )?;
    let contact = contact_from_body(payload.into_inner(), address_book_id)?;

    let created = with_deadline(
        state.request_timeout,
        state
            .contacts_command
            .add_contact(AddContactRequest { contact }),
    )
    .await?;
    Ok(HttpResponse::Created().json(created))
}

/// Register the contacts routes and their extractor error handlers.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use contacts::inbound::http::contacts::configure;
///
/// let app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .service(list_contacts)
        .service(add_contact);
}

#[cfg(test)]
#[path = "contacts_tests.rs"]
mod tests;
