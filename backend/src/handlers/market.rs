//! HTTP handlers for mandi prices

use axum::{extract::Query, Json};
use serde::Deserialize;
use shared::SelectOption;

use super::{language_from, LangQuery};
use crate::middleware::CurrentUser;
use crate::services::market::{self, MarketPriceView};

/// States with price data
pub async fn market_states(Query(query): Query<LangQuery>) -> Json<Vec<SelectOption>> {
    Json(market::states(query.language()))
}

#[derive(Debug, Deserialize)]
pub struct PriceQuery {
    pub state: String,
    /// Crop to show; absent, empty or "all" shows every crop
    pub crop: Option<String>,
    pub lang: Option<String>,
}

/// Prices for a state, for signed-in users
pub async fn market_prices(
    current_user: CurrentUser,
    Query(query): Query<PriceQuery>,
) -> Json<Vec<MarketPriceView>> {
    let crop = query
        .crop
        .as_deref()
        .filter(|c| !c.is_empty() && *c != "all");

    tracing::debug!(user_id = %current_user.0.user_id(), state = %query.state, "Listing prices");
    Json(market::list_prices(
        &query.state,
        crop,
        language_from(query.lang.as_deref()),
    ))
}
