//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint of the inbound layer and the
//! schema wrappers ([`ErrorSchema`], [`ErrorCodeSchema`], [`ContactSchema`])
//! that document domain types without coupling them to utoipa.
//!
//! The document is served by Swagger UI in debug builds and printed by
//! `cargo run --bin openapi-dump`.

use crate::inbound::http::contacts::AddContactBody;
use crate::inbound::http::schemas::{ContactSchema, ErrorCodeSchema, ErrorSchema};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Contacts API",
        description = "List, compare and add contacts held in address books."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::contacts::list_contacts,
        crate::inbound::http::contacts::add_contact,
        crate::inbound::http::ping::ping,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(ContactSchema, AddContactBody, ErrorSchema, ErrorCodeSchema)),
    tags(
        (name = "contacts", description = "Address book contacts"),
        (name = "ping", description = "Server clock"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
