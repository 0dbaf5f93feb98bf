//! Stateless HTTP request builder and response parser for the contact
//! properties API.
//!
//! # Design
//! `PropertyClient` holds only a `base_url` and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. The caller executes the actual HTTP round-trip, keeping
//! the core deterministic and free of I/O dependencies.

use serde_json::Value;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::keys::snake_to_lower_camel;
use crate::types::{ContactProperty, Params};
use crate::url::build_url;

const PROPERTIES_PATH: &str = "/contacts/v1/properties";
const PROPERTY_PATH: &str = "/contacts/v1/properties/:name";

/// Synchronous, stateless client for the contact properties API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The caller is responsible for executing the HTTP
/// round-trip between `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct PropertyClient {
    base_url: String,
}

impl PropertyClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// GET the property collection. `options` are appended verbatim as query
    /// parameters (filters, pagination hints — whatever the remote accepts).
    pub fn build_list_properties(&self, options: &[(String, String)]) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: build_url(&self.base_url, PROPERTIES_PATH, options),
            headers: Vec::new(),
            body: None,
        }
    }

    /// PUT a new property under `name`.
    ///
    /// The request body is assembled in order: `name` overrides any caller
    /// entry under `"name"`, absent fields take the defaults from
    /// [`default_creation_params`], and every key is translated to the
    /// remote's lower-camel-case convention. Caller keys outside the known
    /// field set pass through translated, not validated.
    pub fn build_create_property(&self, name: &str, params: Params) -> Result<HttpRequest, ApiError> {
        if name.is_empty() {
            return Err(ApiError::EmptyName);
        }

        let mut merged = params;
        merged.insert("name".to_string(), Value::String(name.to_string()));
        for (key, value) in default_creation_params() {
            merged.entry(key).or_insert(value);
        }
        let body: serde_json::Map<String, Value> = merged
            .into_iter()
            .map(|(key, value)| (snake_to_lower_camel(&key), value))
            .collect();
        let body =
            serde_json::to_string(&body).map_err(|e| ApiError::Serialization(e.to_string()))?;

        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: self.property_url(name),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    /// DELETE the property named by `property`. The remote archives it; no
    /// request body is needed.
    pub fn build_destroy_property(&self, property: &ContactProperty) -> Result<HttpRequest, ApiError> {
        if property.name.is_empty() {
            return Err(ApiError::EmptyName);
        }
        Ok(HttpRequest {
            method: HttpMethod::Delete,
            path: self.property_url(&property.name),
            headers: Vec::new(),
            body: None,
        })
    }

    /// Deserialize a listing response into properties in remote order.
    pub fn parse_list_properties(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<ContactProperty>, ApiError> {
        check_success(&response, "cannot list contact properties")?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    /// Interpret a create response. 409 means a property already exists with
    /// that name and maps to `ApiError::PropertyExists` so callers can branch
    /// on idempotent-create semantics.
    pub fn parse_create_property(
        &self,
        name: &str,
        response: HttpResponse,
    ) -> Result<ContactProperty, ApiError> {
        if response.status == 409 {
            return Err(ApiError::PropertyExists {
                name: name.to_string(),
                status: response.status,
                body: response.body,
            });
        }
        check_success(
            &response,
            &format!("cannot create contact property with name: {name}"),
        )?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    /// Interpret a destroy response. On success the record's destroyed flag
    /// is set; this is the only place the flag is mutated. The record is not
    /// removed from any collection — callers discard stale references.
    pub fn parse_destroy_property(
        &self,
        property: &mut ContactProperty,
        response: HttpResponse,
    ) -> Result<(), ApiError> {
        check_success(
            &response,
            &format!("cannot delete contact property with name: {}", property.name),
        )?;
        property.mark_destroyed();
        Ok(())
    }

    fn property_url(&self, name: &str) -> String {
        build_url(
            &self.base_url,
            PROPERTY_PATH,
            &[("name".to_string(), name.to_string())],
        )
    }
}

/// Default creation parameters, keyed by Rust-convention field names. Merged
/// into caller params before key translation; caller values always win.
pub fn default_creation_params() -> Params {
    let mut defaults = Params::new();
    defaults.insert("description".to_string(), Value::String(String::new()));
    defaults.insert(
        "group_name".to_string(),
        Value::String("contactinformation".to_string()),
    );
    defaults.insert("type".to_string(), Value::String("string".to_string()));
    defaults.insert("field_type".to_string(), Value::String("text".to_string()));
    defaults
}

/// Map a non-success status to `ApiError::Request` carrying the raw response.
fn check_success(response: &HttpResponse, context: &str) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::Request {
        context: context.to_string(),
        status: response.status,
        body: response.body.clone(),
    })
}
