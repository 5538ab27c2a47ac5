//! State

use std::sync::Arc;

use stockroom_app::context::AppContext;

use crate::config::server::DEFAULT_ANALYSIS_BODY_LIMIT;

/// Shared handler state: the application services plus request limits.
#[derive(Debug, Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
    pub(crate) analysis_body_limit: usize,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext) -> Self {
        Self {
            app,
            analysis_body_limit: DEFAULT_ANALYSIS_BODY_LIMIT,
        }
    }

    #[must_use]
    pub(crate) fn with_analysis_body_limit(mut self, bytes: usize) -> Self {
        self.analysis_body_limit = bytes;
        self
    }

    #[must_use]
    pub(crate) fn from_app_context(app: AppContext) -> Arc<Self> {
        Arc::new(Self::new(app))
    }
}
