//! Synchronous API client core for the contact-properties resource of a
//! marketing-CRM HTTP API.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip, making the core fully deterministic and testable.
//!
//! # Design
//! - `PropertyClient` is stateless — it holds only `base_url`.
//! - Each operation (list, create, destroy) is split into `build_*` (produces
//!   request) and `parse_*` (consumes response), so the I/O boundary is
//!   explicit.
//! - Remote lower-camel-case keys map to snake_case fields through a serde
//!   allow-list on `ContactProperty`; the `keys` module translates
//!   caller-supplied creation params, known or not, on the way out.
//! - A 409 on create surfaces as `ApiError::PropertyExists` so callers can
//!   implement create-or-fetch without string-matching error bodies.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod keys;
pub mod types;
pub mod url;

pub use client::{default_creation_params, PropertyClient};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{ContactProperty, Params};
