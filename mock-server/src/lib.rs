use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

/// A contact property as the remote API represents it: lower-camel-case keys,
/// `type` spelled literally.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Property {
    pub name: String,
    pub description: String,
    pub group_name: String,
    #[serde(rename = "type")]
    pub property_type: String,
    pub field_type: String,
    pub form_field: bool,
    pub display_order: i64,
    pub options: Vec<serde_json::Value>,
}

pub type Db = Arc<RwLock<HashMap<String, Property>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/contacts/v1/properties", get(list_properties))
        .route(
            "/contacts/v1/properties/{name}",
            put(create_property).delete(delete_property),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_properties(State(db): State<Db>) -> Json<Vec<Property>> {
    let properties = db.read().await;
    Json(properties.values().cloned().collect())
}

async fn create_property(
    State(db): State<Db>,
    Path(name): Path<String>,
    Json(input): Json<Property>,
) -> Result<Json<Property>, StatusCode> {
    let mut properties = db.write().await;
    if properties.contains_key(&name) {
        return Err(StatusCode::CONFLICT);
    }
    let mut property = input;
    // The path segment is authoritative for the name, matching the remote.
    property.name = name.clone();
    properties.insert(name, property.clone());
    Ok(Json(property))
}

async fn delete_property(
    State(db): State<Db>,
    Path(name): Path<String>,
) -> Result<StatusCode, StatusCode> {
    let mut properties = db.write().await;
    properties
        .remove(&name)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_serializes_with_camel_case_keys() {
        let property = Property {
            name: "email".to_string(),
            group_name: "contactinformation".to_string(),
            property_type: "string".to_string(),
            field_type: "text".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&property).unwrap();
        assert_eq!(json["name"], "email");
        assert_eq!(json["groupName"], "contactinformation");
        assert_eq!(json["type"], "string");
        assert_eq!(json["fieldType"], "text");
        assert_eq!(json["formField"], false);
        assert_eq!(json["displayOrder"], 0);
    }

    #[test]
    fn property_deserializes_sparse_bodies() {
        let property: Property =
            serde_json::from_str(r#"{"name":"age","type":"number"}"#).unwrap();
        assert_eq!(property.name, "age");
        assert_eq!(property.property_type, "number");
        assert_eq!(property.field_type, "");
        assert!(property.options.is_empty());
    }

    #[test]
    fn property_ignores_unknown_keys() {
        let property: Property =
            serde_json::from_str(r#"{"name":"age","futureField":true}"#).unwrap();
        assert_eq!(property.name, "age");
    }

    #[test]
    fn property_roundtrips_through_json() {
        let property = Property {
            name: "tier".to_string(),
            property_type: "enumeration".to_string(),
            field_type: "select".to_string(),
            options: vec![serde_json::json!({"label": "Gold", "value": "gold"})],
            ..Default::default()
        };
        let json = serde_json::to_string(&property).unwrap();
        let back: Property = serde_json::from_str(&json).unwrap();
        assert_eq!(back.name, property.name);
        assert_eq!(back.property_type, property.property_type);
        assert_eq!(back.options, property.options);
    }
}
