//! Address book contacts service.
//!
//! Hexagonal layout: [`domain`] holds the contact model, reconciliation and
//! ports; [`inbound`] adapts HTTP requests onto the driving ports;
//! [`outbound`] implements the contact repository over PostgreSQL or memory.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
