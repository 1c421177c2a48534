pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, patch, post},
    Router,
};

use crate::applications::handlers as application_handlers;
use crate::dashboard;
use crate::generation::handlers as generation_handlers;
use crate::resumes::extract::MAX_UPLOAD_BYTES;
use crate::resumes::handlers as resume_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Dashboard composition
        .route("/api/v1/dashboard", get(dashboard::handle_dashboard))
        // Resume API
        .route("/api/v1/resumes", post(resume_handlers::handle_upload_resume))
        .route(
            "/api/v1/resumes/current",
            get(resume_handlers::handle_current_resume),
        )
        // Application API
        .route(
            "/api/v1/applications",
            get(application_handlers::handle_list_applications),
        )
        .route(
            "/api/v1/applications/generate",
            post(generation_handlers::handle_generate),
        )
        .route(
            "/api/v1/applications/:id",
            get(application_handlers::handle_get_application)
                .delete(application_handlers::handle_delete_application),
        )
        .route(
            "/api/v1/applications/:id/status",
            patch(application_handlers::handle_update_status),
        )
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}
