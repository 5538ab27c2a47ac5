//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    analysis::{AnalysisConfig, AnalysisService, InferenceClient},
    database::{self, DatabaseError, Db},
    domain::{
        products::{ProductsService, SqliteProductsService},
        sales::{SalesService, SqliteSalesService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to prepare database")]
    Database(#[from] DatabaseError),

    #[error("failed to initialise analysis client")]
    AnalysisClient(#[source] reqwest::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub sales: Arc<dyn SalesService>,
    pub analysis: Arc<dyn AnalysisService>,
}

impl AppContext {
    /// Build application context from a database URL, applying any pending
    /// migrations first.
    ///
    /// # Errors
    ///
    /// Returns an error when the database cannot be opened or migrated, or the
    /// analysis client cannot be built.
    pub async fn from_database_url(
        url: &str,
        analysis: AnalysisConfig,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url).await?;

        database::migrate(&pool).await?;

        let db = Db::new(pool);

        Ok(Self {
            products: Arc::new(SqliteProductsService::new(db.clone())),
            sales: Arc::new(SqliteSalesService::new(db)),
            analysis: Arc::new(InferenceClient::new(analysis).map_err(AppInitError::AnalysisClient)?),
        })
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}
