//! HTTP handlers for wizard endpoints.
//!
//! Each handler maps one inbound user event to a `WizardAction` and returns
//! the snapshot after it.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::wizard::{
    ApplyWizardActionCommand, ApplyWizardActionError, ApplyWizardActionHandler,
    GetMotiveCatalogHandler, GetWizardError, GetWizardHandler, GetWizardQuery, MotiveCatalog,
    WizardAction,
};
use crate::domain::verdict::DecisionPolicy;
use crate::domain::wizard::{WizardError, WizardSnapshot};
use crate::ports::WizardRepository;

use super::dto::{
    ErrorResponse, SelectMotiveRequest, SetAcceptThrowRequest, SetItemRequest, SetPriceRequest,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
#[derive(Clone)]
pub struct WizardAppState {
    pub repository: Arc<dyn WizardRepository>,
    pub policy: DecisionPolicy,
}

impl WizardAppState {
    pub fn new(repository: Arc<dyn WizardRepository>, policy: DecisionPolicy) -> Self {
        Self { repository, policy }
    }

    pub fn apply_action_handler(&self) -> ApplyWizardActionHandler {
        ApplyWizardActionHandler::new(self.repository.clone())
    }

    pub fn get_wizard_handler(&self) -> GetWizardHandler {
        GetWizardHandler::new(self.repository.clone())
    }

    pub fn motive_catalog_handler(&self) -> GetMotiveCatalogHandler {
        GetMotiveCatalogHandler::new(self.policy)
    }
}

async fn apply(
    state: &WizardAppState,
    action: WizardAction,
) -> Result<Json<WizardSnapshot>, WizardApiError> {
    let result = state
        .apply_action_handler()
        .handle(ApplyWizardActionCommand { action })
        .await?;
    Ok(Json(result.snapshot))
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/motives - Motive catalog and disclaimer
pub async fn get_motives(State(state): State<WizardAppState>) -> Json<MotiveCatalog> {
    Json(state.motive_catalog_handler().handle())
}

/// GET /api/wizard - Current snapshot
pub async fn get_wizard(
    State(state): State<WizardAppState>,
) -> Result<Json<WizardSnapshot>, WizardApiError> {
    let snapshot = state.get_wizard_handler().handle(GetWizardQuery).await?;
    Ok(Json(snapshot))
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (PUT/POST endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// PUT /api/wizard/item
pub async fn set_item(
    State(state): State<WizardAppState>,
    Json(request): Json<SetItemRequest>,
) -> Result<Json<WizardSnapshot>, WizardApiError> {
    apply(&state, WizardAction::SetItem { item: request.item }).await
}

/// PUT /api/wizard/price
pub async fn set_price(
    State(state): State<WizardAppState>,
    Json(request): Json<SetPriceRequest>,
) -> Result<Json<WizardSnapshot>, WizardApiError> {
    apply(&state, WizardAction::SetPrice { price: request.price }).await
}

/// PUT /api/wizard/motive
pub async fn select_motive(
    State(state): State<WizardAppState>,
    Json(request): Json<SelectMotiveRequest>,
) -> Result<Json<WizardSnapshot>, WizardApiError> {
    apply(
        &state,
        WizardAction::SelectMotive {
            motive_id: request.motive_id,
        },
    )
    .await
}

/// POST /api/wizard/advance
pub async fn advance(
    State(state): State<WizardAppState>,
) -> Result<Json<WizardSnapshot>, WizardApiError> {
    apply(&state, WizardAction::AdvanceToCommitment).await
}

/// PUT /api/wizard/accept-throw
pub async fn set_accept_throw(
    State(state): State<WizardAppState>,
    Json(request): Json<SetAcceptThrowRequest>,
) -> Result<Json<WizardSnapshot>, WizardApiError> {
    apply(
        &state,
        WizardAction::SetAcceptThrow {
            accept_throw: request.accept_throw,
        },
    )
    .await
}

/// POST /api/wizard/decide
pub async fn decide(
    State(state): State<WizardAppState>,
) -> Result<Json<WizardSnapshot>, WizardApiError> {
    apply(&state, WizardAction::Decide).await
}

/// POST /api/wizard/reset
pub async fn reset(
    State(state): State<WizardAppState>,
) -> Result<Json<WizardSnapshot>, WizardApiError> {
    apply(&state, WizardAction::Reset).await
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts application errors to HTTP responses.
#[derive(Debug)]
pub enum WizardApiError {
    /// Action not allowed on the current step.
    Conflict(WizardError),
    /// Action allowed on this step but its preconditions are not met.
    Unprocessable(WizardError),
    Internal(String),
}

impl From<WizardError> for WizardApiError {
    fn from(err: WizardError) -> Self {
        match err {
            WizardError::GuardNotSatisfied { .. } | WizardError::AcceptanceNotChosen => {
                WizardApiError::Unprocessable(err)
            }
            WizardError::WrongStep { .. } | WizardError::InvalidTransition(_) => {
                WizardApiError::Conflict(err)
            }
        }
    }
}

impl From<ApplyWizardActionError> for WizardApiError {
    fn from(err: ApplyWizardActionError) -> Self {
        match err {
            ApplyWizardActionError::Rejected(e) => e.into(),
            ApplyWizardActionError::Infrastructure(msg) => WizardApiError::Internal(msg),
        }
    }
}

impl From<GetWizardError> for WizardApiError {
    fn from(err: GetWizardError) -> Self {
        match err {
            GetWizardError::Infrastructure(msg) => WizardApiError::Internal(msg),
        }
    }
}

fn wizard_error_response(err: &WizardError) -> ErrorResponse {
    let response = ErrorResponse::new(err.code(), err.to_string());
    match err {
        WizardError::GuardNotSatisfied { missing } => {
            response.with_details(serde_json::json!({ "missing": missing }))
        }
        WizardError::WrongStep { operation, step } => {
            response.with_details(serde_json::json!({ "operation": operation, "step": step }))
        }
        _ => response,
    }
}

impl IntoResponse for WizardApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            WizardApiError::Conflict(err) => (StatusCode::CONFLICT, wizard_error_response(&err)),
            WizardApiError::Unprocessable(err) => {
                (StatusCode::UNPROCESSABLE_ENTITY, wizard_error_response(&err))
            }
            WizardApiError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal(msg))
            }
        };

        (status, Json(error)).into_response()
    }
}
