use std::sync::Arc;

use sqlx::SqlitePool;
use tera::Tera;

use crate::templates;

/// Shared application context: the database pool and compiled templates.
///
/// Constructed once at startup and cloned into every handler; there is no
/// global database handle anywhere in the app.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub templates: Arc<Tera>,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Result<Self, tera::Error> {
        Ok(Self {
            pool,
            templates: Arc::new(templates::build()?),
        })
    }
}
