use crate::error::WebError;
use crate::render::{self, TablePage};
use crate::state::AppState;
use axum::body::Bytes;
use axum::extract::{Path, RawQuery, State};
use axum::http::StatusCode;
use axum::response::{Html, Json};
use axum::routing::get;
use axum::Router;
use ra_data::Value;
use ra_logic::{ParameterMap, TableLogic};
use serde::Serialize;
use tower_http::trace::TraceLayer;

/// Build the application router.
///
/// | Route | Handler |
/// |-------|---------|
/// | `GET /` | index of registered entities |
/// | `GET /{entity}` | HTML table and input form |
/// | `POST /{entity}` | add (or update, when `id` is given) from a url-encoded form |
/// | `GET /api/{entity}` | table as JSON |
/// | `GET /api/{entity}/{id}` | one row as JSON |
/// | `DELETE /api/{entity}/{id}` | delete one row |
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/{entity}", get(api_table))
        .route("/api/{entity}/{id}", get(api_row).delete(api_delete))
        .route("/{entity}", get(show_table).post(submit_form))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Decode `application/x-www-form-urlencoded` input; repeated keys accumulate.
pub fn parse_params(input: &[u8]) -> ParameterMap {
    form_urlencoded::parse(input).collect()
}

#[derive(Debug, Serialize)]
pub struct TableJson {
    pub entity: &'static str,
    pub columns: Vec<&'static str>,
    pub rows: Vec<Vec<Value>>,
}

#[derive(Debug, Serialize)]
pub struct RowJson {
    pub entity: &'static str,
    pub columns: Vec<&'static str>,
    pub row: Vec<Value>,
}

async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render::index_page(&state.factory.entity_names()))
}

async fn show_table(
    State(state): State<AppState>,
    Path(entity): Path<String>,
    RawQuery(query): RawQuery,
) -> Result<Html<String>, WebError> {
    let logic = state.logic_for(&entity)?;
    let params = parse_params(query.unwrap_or_default().as_bytes());
    render_table(logic.as_ref(), &params, None).await
}

async fn submit_form(
    State(state): State<AppState>,
    Path(entity): Path<String>,
    body: Bytes,
) -> Result<Html<String>, WebError> {
    let logic = state.logic_for(&entity)?;
    let params = parse_params(&body);
    logic.submit(&params).await?;
    tracing::info!(entity = logic.entity_name(), "form submitted");
    let notice = format!("{} saved", logic.entity_name());
    render_table(logic.as_ref(), &params, Some(notice.as_str())).await
}

async fn render_table(
    logic: &dyn TableLogic,
    params: &ParameterMap,
    notice: Option<&str>,
) -> Result<Html<String>, WebError> {
    let rows = logic.rows().await?;
    let column_names = logic.column_names();
    let column_codes = logic.column_codes();
    Ok(Html(render::table_page(&TablePage {
        entity: logic.entity_name(),
        column_names: &column_names,
        column_codes: &column_codes,
        rows: &rows,
        params,
        notice,
    })))
}

async fn api_table(
    State(state): State<AppState>,
    Path(entity): Path<String>,
) -> Result<Json<TableJson>, WebError> {
    let logic = state.logic_for(&entity)?;
    Ok(Json(TableJson {
        entity: logic.entity_name(),
        columns: logic.column_codes(),
        rows: logic.rows().await?,
    }))
}

async fn api_row(
    State(state): State<AppState>,
    Path((entity, id)): Path<(String, i64)>,
) -> Result<Json<RowJson>, WebError> {
    let logic = state.logic_for(&entity)?;
    let row = logic
        .row_with_id(id)
        .await?
        .ok_or_else(|| WebError::NotFound(format!("{} {id} not found", logic.entity_name())))?;
    Ok(Json(RowJson {
        entity: logic.entity_name(),
        columns: logic.column_codes(),
        row,
    }))
}

async fn api_delete(
    State(state): State<AppState>,
    Path((entity, id)): Path<(String, i64)>,
) -> Result<StatusCode, WebError> {
    let logic = state.logic_for(&entity)?;
    if logic.delete_with_id(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(WebError::NotFound(format!("{} {id} not found", logic.entity_name())))
    }
}
