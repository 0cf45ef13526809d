//! Route configuration for wizard endpoints.
//!
//! Configures Axum router with wizard-related routes.

use axum::routing::{get, post, put};
use axum::Router;

use super::handlers::{
    advance, decide, get_motives, get_wizard, reset, select_motive, set_accept_throw, set_item,
    set_price, WizardAppState,
};

/// Creates the wizard router with all endpoints.
///
/// Routes:
/// - `GET /api/motives` - Motive catalog and disclaimer
/// - `GET /api/wizard` - Current wizard snapshot
/// - `PUT /api/wizard/item` - Set the item text
/// - `PUT /api/wizard/price` - Set the price text
/// - `PUT /api/wizard/motive` - Select a motive
/// - `POST /api/wizard/advance` - Move to the commitment step
/// - `PUT /api/wizard/accept-throw` - Answer the commitment question
/// - `POST /api/wizard/decide` - Issue the verdict
/// - `POST /api/wizard/reset` - Start over
pub fn wizard_router() -> Router<WizardAppState> {
    Router::new()
        .route("/api/motives", get(get_motives))
        .route("/api/wizard", get(get_wizard))
        .route("/api/wizard/item", put(set_item))
        .route("/api/wizard/price", put(set_price))
        .route("/api/wizard/motive", put(select_motive))
        .route("/api/wizard/advance", post(advance))
        .route("/api/wizard/accept-throw", put(set_accept_throw))
        .route("/api/wizard/decide", post(decide))
        .route("/api/wizard/reset", post(reset))
}
