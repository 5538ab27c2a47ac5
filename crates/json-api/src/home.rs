//! Stockroom JSON API Home Handler

use salvo::prelude::*;
use serde::{Deserialize, Serialize};

pub(crate) const WELCOME_MESSAGE: &str = "Welcome to the Stockroom inventory backend!";

/// Home response
#[derive(Debug, Serialize, Deserialize)]
pub struct HomeResponse {
    /// Greeting
    pub message: String,
}

/// Home handler
#[handler]
pub(crate) async fn handler() -> Json<HomeResponse> {
    Json(HomeResponse {
        message: WELCOME_MESSAGE.to_string(),
    })
}
