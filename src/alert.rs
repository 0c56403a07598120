//! Client notification headers attached to mutating responses.
//!
//! Successful writes carry `X-<app>-alert: <app>.<entity>.<action>` plus
//! `X-<app>-params: <id>`; id-rule failures carry
//! `X-<app>-error: error.<key>` plus `X-<app>-params: <entity>`.

use axum::http::{HeaderMap, HeaderName, HeaderValue};
use uuid::Uuid;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Copy)]
pub struct EntityAlerts<'a> {
    app_name: &'a str,
    entity_name: &'static str,
}

impl<'a> EntityAlerts<'a> {
    pub fn new(app_name: &'a str, entity_name: &'static str) -> Self {
        Self {
            app_name,
            entity_name,
        }
    }

    pub fn created(&self, id: Uuid) -> HeaderMap {
        self.alert("created", &id.to_string())
    }

    pub fn updated(&self, id: Uuid) -> HeaderMap {
        self.alert("updated", &id.to_string())
    }

    pub fn deleted(&self, id: Uuid) -> HeaderMap {
        self.alert("deleted", &id.to_string())
    }

    /// A 400 error carrying the `X-<app>-error` header.
    pub fn bad_request(&self, message: &str, error_key: &str) -> AppError {
        let mut headers = HeaderMap::new();
        self.insert(&mut headers, "error", &format!("error.{error_key}"));
        self.insert(&mut headers, "params", self.entity_name);
        AppError::BadRequestAlert {
            message: message.to_string(),
            entity_name: self.entity_name.to_string(),
            error_key: error_key.to_string(),
            headers,
        }
    }

    /// Rejects a create payload that already has an identifier.
    pub fn ensure_new(&self, id: Option<Uuid>) -> AppResult<()> {
        if id.is_some() {
            let message = format!("A new {} cannot already have an ID", self.entity_name);
            return Err(self.bad_request(&message, "idexists"));
        }
        Ok(())
    }

    /// Rejects an update payload whose id is missing or differs from the path id.
    pub fn ensure_matching_id(&self, path_id: Uuid, body_id: Option<Uuid>) -> AppResult<Uuid> {
        let Some(body_id) = body_id else {
            return Err(self.bad_request("Invalid id", "idnull"));
        };
        if body_id != path_id {
            return Err(self.bad_request("Invalid ID", "idinvalid"));
        }
        Ok(body_id)
    }

    pub fn entity_not_found(&self) -> AppError {
        self.bad_request("Entity not found", "idnotfound")
    }

    fn alert(&self, action: &str, param: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        let key = format!("{}.{}.{}", self.app_name, self.entity_name, action);
        self.insert(&mut headers, "alert", &key);
        self.insert(&mut headers, "params", param);
        headers
    }

    fn insert(&self, headers: &mut HeaderMap, suffix: &str, value: &str) {
        let name = format!("x-{}-{}", self.app_name, suffix);
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => {
                headers.insert(name, value);
            }
            _ => tracing::warn!(header = %name, "skipping invalid alert header"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alerts() -> EntityAlerts<'static> {
        EntityAlerts::new("storeApp", "shoppingCart")
    }

    #[test]
    fn created_alert_names_entity_and_id() {
        let id = Uuid::new_v4();
        let headers = alerts().created(id);
        assert_eq!(
            headers.get("x-storeapp-alert").unwrap(),
            "storeApp.shoppingCart.created"
        );
        assert_eq!(
            headers.get("x-storeapp-params").unwrap().to_str().unwrap(),
            id.to_string()
        );
    }

    #[test]
    fn ensure_new_rejects_preset_id() {
        assert!(alerts().ensure_new(None).is_ok());
        match alerts().ensure_new(Some(Uuid::new_v4())) {
            Err(AppError::BadRequestAlert {
                error_key, headers, ..
            }) => {
                assert_eq!(error_key, "idexists");
                assert_eq!(headers.get("x-storeapp-error").unwrap(), "error.idexists");
                assert_eq!(headers.get("x-storeapp-params").unwrap(), "shoppingCart");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn ensure_matching_id_checks_presence_then_equality() {
        let id = Uuid::new_v4();
        assert_eq!(alerts().ensure_matching_id(id, Some(id)).unwrap(), id);

        let missing = alerts().ensure_matching_id(id, None).unwrap_err();
        assert!(matches!(missing, AppError::BadRequestAlert { ref error_key, .. } if error_key == "idnull"));

        let mismatched = alerts()
            .ensure_matching_id(id, Some(Uuid::new_v4()))
            .unwrap_err();
        assert!(matches!(mismatched, AppError::BadRequestAlert { ref error_key, .. } if error_key == "idinvalid"));
    }
}
