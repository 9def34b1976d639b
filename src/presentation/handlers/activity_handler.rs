use std::sync::Arc;

use crate::{
    domain::{
        error::DomainError, models::activity::Activity,
        repositories::activity_repository::ActivityRepository,
    },
    usecase::{
        list_activities_usecase::ListActivitiesUsecase, signup_usecase::SignupUsecase,
        unregister_usecase::UnregisterUsecase,
    },
};
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

// Request

/// query string of signup and unregister
#[derive(Serialize, Deserialize)]
pub struct ParticipantQuery {
    pub email: String,
}

// Response

/// json for one entry of the activity listing
#[derive(Debug, Serialize, Deserialize)]
pub struct ActivityInfo {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl From<Activity> for ActivityInfo {
    fn from(activity: Activity) -> Self {
        Self {
            description: activity.description().to_string(),
            schedule: activity.schedule().to_string(),
            max_participants: activity.max_participants(),
            participants: activity
                .participants()
                .iter()
                .map(|email| email.as_str().to_string())
                .collect(),
        }
    }
}

/// activity name -> activity, in store order
pub type ActivitiesResponse = IndexMap<String, ActivityInfo>;

/// json for signup / unregister success
#[derive(Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// json for every error response
#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

/// DomainError rendered as an http response
pub struct ApiError(DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            DomainError::ActivityNotFound => StatusCode::NOT_FOUND,
            DomainError::AlreadySignedUp | DomainError::NotSignedUp => StatusCode::BAD_REQUEST,
            DomainError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let detail = if status.is_server_error() {
            error!(error = %self.0, "activity request failed");
            "Internal server error".to_string()
        } else {
            warn!(error = %self.0, "activity request rejected");
            self.0.to_string()
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}

/* Router Function and Handler Function */

// Activity Router

/// function return Router object
/// Suppose to be merged into main router

pub fn create_activity_router<R: ActivityRepository + Send + Sync + 'static + Clone>(
    list_service: ListActivitiesUsecase<R>,
    signup_service: SignupUsecase<R>,
    unregister_service: UnregisterUsecase<R>,
) -> Router {
    let state = AppState {
        list_service: Arc::new(list_service),
        signup_service: Arc::new(signup_service),
        unregister_service: Arc::new(unregister_service),
    };

    Router::new()
        .route("/activities", get(list_activities::<R>))
        .route("/activities/{activity_name}/signup", post(signup::<R>))
        .route(
            "/activities/{activity_name}/unregister",
            post(unregister::<R>),
        )
        .with_state(state)
}

#[derive(Clone)]
pub struct AppState<R: ActivityRepository> {
    pub list_service: Arc<ListActivitiesUsecase<R>>,
    pub signup_service: Arc<SignupUsecase<R>>,
    pub unregister_service: Arc<UnregisterUsecase<R>>,
}

// handler function

/// handler function for listing every activity
async fn list_activities<R: ActivityRepository + Send + Sync>(
    State(state): State<AppState<R>>,
) -> Result<Json<ActivitiesResponse>, ApiError> {
    let activities = state.list_service.list_activities().await?;

    let response: ActivitiesResponse = activities
        .into_iter()
        .map(|(name, activity)| (name.as_str().to_string(), activity.into()))
        .collect();
    Ok(Json(response))
}

/// handler function for signup
async fn signup<R: ActivityRepository + Send + Sync>(
    State(state): State<AppState<R>>,
    Path(activity_name): Path<String>,
    Query(query): Query<ParticipantQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    let result = state
        .signup_service
        .sign_up(activity_name.clone(), query.email.clone())
        .await?;

    info!(activity = %activity_name, email = %query.email, "signed up");
    Ok(Json(MessageResponse {
        message: result.message,
    }))
}

/// handler function for unregister
async fn unregister<R: ActivityRepository + Send + Sync>(
    State(state): State<AppState<R>>,
    Path(activity_name): Path<String>,
    Query(query): Query<ParticipantQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    let result = state
        .unregister_service
        .unregister(activity_name.clone(), query.email.clone())
        .await?;

    info!(activity = %activity_name, email = %query.email, "unregistered");
    Ok(Json(MessageResponse {
        message: result.message,
    }))
}
