use std::sync::Arc;

use crate::{alert::EntityAlerts, config::AppConfig, db::OrmConn};

#[derive(Clone)]
pub struct AppState {
    pub orm: Arc<OrmConn>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(orm: OrmConn, config: AppConfig) -> Self {
        Self {
            orm: Arc::new(orm),
            config: Arc::new(config),
        }
    }

    pub fn db(&self) -> &OrmConn {
        &self.orm
    }

    /// Alert header builder for one entity type.
    pub fn alerts(&self, entity_name: &'static str) -> EntityAlerts<'_> {
        EntityAlerts::new(&self.config.app_name, entity_name)
    }
}
