//! Error types for the contact-properties API client.
//!
//! # Design
//! `PropertyExists` gets a dedicated variant because create-or-fetch callers
//! need to distinguish "a property with that name already exists" (HTTP 409)
//! from "the server returned an unexpected status." All other non-2xx
//! responses land in `Request` with the raw status code and body for
//! debugging, plus a context line naming the operation that failed.

use std::fmt;

/// Errors returned by `PropertyClient` build and parse methods.
#[derive(Debug)]
pub enum ApiError {
    /// The server returned 409 from create — a contact property already
    /// exists with the requested name.
    PropertyExists {
        name: String,
        status: u16,
        body: String,
    },

    /// The server returned a non-2xx status outside the 409-on-create case.
    /// Raised for list, create, and destroy alike.
    Request {
        context: String,
        status: u16,
        body: String,
    },

    /// The response body could not be deserialized into the expected type.
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    Serialization(String),

    /// Create or destroy was invoked without a property name. The remote
    /// addresses single properties by name, so an empty name cannot form a
    /// valid URL.
    EmptyName,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::PropertyExists { name, .. } => {
                write!(f, "contact property already exists with name: {name}")
            }
            ApiError::Request {
                context, status, ..
            } => {
                write!(f, "{context} (HTTP {status})")
            }
            ApiError::Deserialization(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
            ApiError::Serialization(msg) => {
                write!(f, "serialization failed: {msg}")
            }
            ApiError::EmptyName => write!(f, "property name must not be empty"),
        }
    }
}

impl std::error::Error for ApiError {}
