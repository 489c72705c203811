use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::auth::{AuthFailure, AuthFlow};
use crate::browser::{DashboardSession, TemplateFilter};
use crate::editor::{validate_record, EditOp, EditorSession, EditorView};
use crate::errors::AppError;
use crate::models::resume::{ResumeRecord, StoredResume};
use crate::models::user::CurrentUser;
use crate::render::html::to_html;
use crate::render::{render, RenderedDocument};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: String,
}

#[derive(Deserialize)]
pub struct ListQuery {
    pub user_id: String,
    pub display_name: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub q: String,
    pub template: Option<String>,
}

#[derive(Deserialize)]
pub struct DeleteQuery {
    pub user_id: String,
    #[serde(default)]
    pub confirmed: bool,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderFormat {
    #[default]
    Json,
    Html,
}

#[derive(Deserialize)]
pub struct RenderQuery {
    pub user_id: String,
    #[serde(default)]
    pub format: RenderFormat,
}

#[derive(Deserialize)]
pub struct SaveRequest {
    pub user_id: String,
    pub resume: ResumeRecord,
}

#[derive(Deserialize)]
pub struct EditRequest {
    pub user_id: String,
    pub ops: Vec<EditOp>,
}

#[derive(Deserialize)]
pub struct PreviewRequest {
    pub resume: ResumeRecord,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeListResponse {
    pub greeting: String,
    pub resumes: Vec<StoredResume>,
    pub total: usize,
    /// Present only when nothing is visible.
    pub empty_state_hint: Option<&'static str>,
}

#[derive(Serialize)]
pub struct CreatedResponse {
    pub id: Uuid,
}

/// The identity provider has already authenticated the caller; an empty id means
/// no one is signed in.
fn current_user(user_id: String) -> Result<CurrentUser, AppError> {
    if user_id.trim().is_empty() {
        return Err(AppError::Unauthorized);
    }
    Ok(CurrentUser::new(user_id))
}

async fn open_session(state: &AppState, user_id: String) -> Result<DashboardSession, AppError> {
    let user = current_user(user_id)?;
    Ok(DashboardSession::open(state.store.clone(), state.notifier.clone(), user).await?)
}

fn ensure_valid(record: &ResumeRecord) -> Result<(), AppError> {
    let report = validate_record(record);
    if !report.passed {
        return Err(AppError::Validation(report.summary()));
    }
    Ok(())
}

async fn fetch(state: &AppState, id: Uuid, user_id: String) -> Result<StoredResume, AppError> {
    let user = current_user(user_id)?;
    state
        .store
        .get(id, &user.id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))
}

/// GET /api/v1/resumes
pub async fn handle_list_resumes(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Result<Json<ResumeListResponse>, AppError> {
    let mut user = current_user(params.user_id)?;
    user.display_name = params.display_name;
    user.email = params.email;

    let template_filter = match params.template.as_deref() {
        None | Some("") => TemplateFilter::All,
        Some(raw) => raw
            .parse::<TemplateFilter>()
            .map_err(|e| AppError::Validation(e.to_string()))?,
    };

    let mut session =
        DashboardSession::open(state.store.clone(), state.notifier.clone(), user).await?;
    session.set_query(params.q);
    session.set_template_filter(template_filter);

    let resumes = session.visible();
    let empty_state_hint = resumes.is_empty().then(|| session.empty_state_hint());
    let response = ResumeListResponse {
        greeting: format!("Welcome, {}", session.user().greeting_name()),
        total: session.resumes().len(),
        resumes,
        empty_state_hint,
    };
    session.sign_out();

    Ok(Json(response))
}

/// POST /api/v1/resumes
pub async fn handle_create_resume(
    State(state): State<AppState>,
    Json(req): Json<SaveRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    ensure_valid(&req.resume)?;
    let mut session = open_session(&state, req.user_id).await?;
    let id = session.save(None, &req.resume).await?;
    session.sign_out();
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// GET /api/v1/resumes/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<StoredResume>, AppError> {
    Ok(Json(fetch(&state, id, params.user_id).await?))
}

/// PUT /api/v1/resumes/:id
pub async fn handle_update_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SaveRequest>,
) -> Result<StatusCode, AppError> {
    ensure_valid(&req.resume)?;
    let mut session = open_session(&state, req.user_id).await?;
    session.save(Some(id), &req.resume).await?;
    session.sign_out();
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/resumes/:id
pub async fn handle_delete_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<DeleteQuery>,
) -> Result<StatusCode, AppError> {
    let mut session = open_session(&state, params.user_id).await?;
    let deleted = session.delete(id, params.confirmed).await?;
    session.sign_out();
    if !deleted {
        debug!("Delete of resume {id} was not confirmed");
        return Err(AppError::Validation(
            "Deletion must be confirmed with confirmed=true".to_string(),
        ));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/resumes/:id/edits
///
/// Applies editor operations to the stored record and saves the whole document.
/// Nothing is written when an operation fails or the result does not validate.
pub async fn handle_edit_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<EditRequest>,
) -> Result<Json<StoredResume>, AppError> {
    let mut session = open_session(&state, req.user_id).await?;
    let existing = session
        .find(id)
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))?
        .record
        .clone();

    let mut editor = EditorSession::new(Some(existing));
    editor.apply_all(req.ops)?;
    ensure_valid(editor.draft())?;

    let saved = editor.submit(|draft| draft);
    session.save(Some(id), &saved).await?;
    let owner = session.user().id.clone();
    session.sign_out();

    // Read back from the store: the session list is not refreshed if its reload fails.
    let updated = state
        .store
        .get(id, &owner)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))?;
    Ok(Json(updated))
}

/// GET /api/v1/editor
///
/// Form state for a new resume.
pub async fn handle_new_editor() -> Json<EditorView> {
    Json(EditorSession::new(None).view())
}

/// GET /api/v1/resumes/:id/editor
///
/// Form state for editing a stored resume.
pub async fn handle_editor(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<EditorView>, AppError> {
    let stored = fetch(&state, id, params.user_id).await?;
    Ok(Json(EditorSession::new(Some(stored.record)).view()))
}

/// GET /api/v1/resumes/:id/render
pub async fn handle_render_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<RenderQuery>,
) -> Result<Response, AppError> {
    let stored = fetch(&state, id, params.user_id).await?;
    let document = render(&stored.record);
    Ok(match params.format {
        RenderFormat::Json => Json(document).into_response(),
        RenderFormat::Html => Html(to_html(&document)).into_response(),
    })
}

/// POST /api/v1/render
///
/// Live preview of an unsaved record.
pub async fn handle_preview(Json(req): Json<PreviewRequest>) -> Json<RenderedDocument> {
    Json(render(&req.resume))
}

#[derive(Deserialize)]
pub struct AuthFailureReport {
    pub flow: AuthFlow,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}

/// POST /api/v1/auth/failures
///
/// Sign-in and sign-up run against the identity provider. Clients forward the
/// provider's error here and get it back in this API's error shape, with the message
/// to show the user.
pub async fn handle_auth_failure(Json(req): Json<AuthFailureReport>) -> AppError {
    let failure = AuthFailure::classify(req.flow, &req.code, &req.message);
    warn!(
        "Identity provider rejected {:?}: code={} classified={:?}",
        req.flow, req.code, failure
    );
    AppError::Authentication(failure)
}
