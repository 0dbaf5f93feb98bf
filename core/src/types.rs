//! Domain DTOs for the contact-properties API.
//!
//! # Design
//! `ContactProperty` mirrors the remote property object one field at a time.
//! The serde derive with `rename_all = "camelCase"` is the allow-listed key
//! table: each known remote key maps to exactly one Rust field, and unknown
//! remote keys are dropped during deserialization, which keeps the client
//! forward-compatible with remote schema additions. Absent keys take
//! defaults, so sparse listing responses still deserialize.
//!
//! `options` stays untyped JSON. The remote defines the shape of choice
//! objects and the client passes them through without validation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Caller-supplied creation parameters, keyed by Rust-convention snake_case
/// field names. Keys outside the known field set are translated and
/// transmitted as-is, not validated.
pub type Params = serde_json::Map<String, Value>;

/// A single contact property definition as returned by the remote API.
///
/// An instance is a passive, in-memory projection of remote state. Field
/// mutation is local-only and is never synced back automatically; only
/// `PropertyClient::parse_destroy_property` flips the destroyed flag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactProperty {
    pub name: String,
    pub description: String,
    pub group_name: String,
    #[serde(rename = "type")]
    pub property_type: String,
    pub field_type: String,
    pub form_field: bool,
    pub display_order: i64,
    pub options: Vec<Value>,
    #[serde(skip)]
    destroyed: bool,
}

impl ContactProperty {
    /// Whether a successful destroy call has archived this instance. The flag
    /// is per-instance: a separately fetched copy of the same named property
    /// reports false until destroyed itself.
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub(crate) fn mark_destroyed(&mut self) {
        self.destroyed = true;
    }
}
