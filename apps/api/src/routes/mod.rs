pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::browser::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume collection
        .route(
            "/api/v1/resumes",
            get(handlers::handle_list_resumes).post(handlers::handle_create_resume),
        )
        .route(
            "/api/v1/resumes/:id",
            get(handlers::handle_get_resume)
                .put(handlers::handle_update_resume)
                .delete(handlers::handle_delete_resume),
        )
        .route(
            "/api/v1/resumes/:id/edits",
            post(handlers::handle_edit_resume),
        )
        .route("/api/v1/resumes/:id/editor", get(handlers::handle_editor))
        .route("/api/v1/editor", get(handlers::handle_new_editor))
        // Rendering
        .route(
            "/api/v1/resumes/:id/render",
            get(handlers::handle_render_resume),
        )
        .route("/api/v1/render", post(handlers::handle_preview))
        // Identity provider
        .route("/api/v1/auth/failures", post(handlers::handle_auth_failure))
        .with_state(state)
}
