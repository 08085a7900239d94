use askama::Template;
use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::history;
use crate::middleware::AuthUser;
use crate::models::{Category, CreateRecord, Record, RecordDraft};
use crate::repositories::RecordRepository;

#[derive(Clone)]
pub struct RecordsState {
    pub record_repo: RecordRepository,
}

#[derive(Debug, Deserialize)]
pub struct LogQuery {
    tab: Option<String>,
    add: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PreviousQuery {
    #[serde(default)]
    name: String,
    #[serde(default)]
    category: String,
}

#[derive(Debug, Serialize)]
pub struct PreviousEntry {
    name: String,
    sets: i64,
    reps: i64,
    weight: f64,
    created_at: chrono::DateTime<chrono::Utc>,
}

// Templates
#[derive(Template)]
#[template(path = "records/index.html")]
struct LogTemplate<'a> {
    user: AuthUser,
    tab: Category,
    records: Vec<&'a Record>,
    previous: Option<&'a Record>,
    form_open: bool,
    draft: &'a RecordDraft,
    error: Option<String>,
    notice: Option<String>,
}

/// Render the log page for one tab. The previous-attempt panel only shows
/// while the add form is open with an exercise name in it.
fn render_log_page(
    user: AuthUser,
    tab: Category,
    all_records: &[Record],
    form_open: bool,
    draft: &RecordDraft,
    error: Option<String>,
    notice: Option<String>,
) -> Result<Response> {
    let records = history::in_category(all_records, tab);
    let previous = if form_open && !draft.name.trim().is_empty() {
        history::latest_attempt(all_records, draft.name.trim(), tab)
    } else {
        None
    };

    let template = LogTemplate {
        user,
        tab,
        records,
        previous,
        form_open,
        draft,
        error,
        notice,
    };
    Ok(Html(
        template
            .render()
            .map_err(|e| AppError::Internal(e.to_string()))?,
    )
    .into_response())
}

// Handlers
pub async fn index(
    State(state): State<RecordsState>,
    auth_user: AuthUser,
    Query(query): Query<LogQuery>,
) -> Result<Response> {
    let tab = query.tab.as_deref().map(Category::parse).unwrap_or_default();
    let form_open = query.add.is_some();

    let records = state.record_repo.find_by_owner(&auth_user.id).await?;
    let draft = RecordDraft::default();

    render_log_page(auth_user, tab, &records, form_open, &draft, None, None)
}

pub async fn create(
    State(state): State<RecordsState>,
    auth_user: AuthUser,
    Form(form): Form<CreateRecord>,
) -> Result<Response> {
    let (category, draft) = form.into_draft();

    let parsed = match draft.validate() {
        Ok(parsed) => parsed,
        Err(err) => {
            // Re-render with the draft intact so nothing typed is lost
            let records = state.record_repo.find_by_owner(&auth_user.id).await?;
            return render_log_page(
                auth_user,
                category,
                &records,
                true,
                &draft,
                Some(err.to_string()),
                None,
            );
        }
    };

    let created = state
        .record_repo
        .create(
            &auth_user.id,
            &parsed.name,
            category,
            parsed.sets,
            parsed.reps,
            parsed.weight,
        )
        .await;

    match created {
        Ok(_) => Ok(Redirect::to(&format!("/?tab={}", category.as_str())).into_response()),
        Err(err) => {
            tracing::error!("Failed to save record: {}", err);
            let records = state.record_repo.find_by_owner(&auth_user.id).await?;
            render_log_page(
                auth_user,
                category,
                &records,
                true,
                &draft,
                None,
                Some("Couldn't save your entry. Please try again.".to_string()),
            )
        }
    }
}

/// JSON lookup behind the live reference panel.
pub async fn previous(
    State(state): State<RecordsState>,
    auth_user: AuthUser,
    Query(query): Query<PreviousQuery>,
) -> Result<Json<Option<PreviousEntry>>> {
    let name = query.name.trim();
    if name.is_empty() {
        return Ok(Json(None));
    }

    let category = Category::parse(&query.category);
    let records = state.record_repo.find_by_owner(&auth_user.id).await?;

    let entry = history::latest_attempt(&records, name, category).map(|record| PreviousEntry {
        name: record.name.clone(),
        sets: record.sets,
        reps: record.reps,
        weight: record.weight,
        created_at: record.created_at,
    });

    Ok(Json(entry))
}
