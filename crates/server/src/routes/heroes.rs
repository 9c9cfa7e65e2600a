use axum::{extract::{Path, Query, State}, http::StatusCode, Json};
use models::{Hero, HeroId, HeroInput};
use serde::Deserialize;
use tracing::info;

use crate::errors::JsonApiError;
use crate::metrics::{record, record_operation, set_store_size};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Id of the last hero already seen; switches the listing to paged mode.
    #[serde(rename = "lastHeroId")]
    pub last_hero_id: Option<String>,
}

/// Absent or blank means "no cursor"; anything else must be an integer.
pub fn parse_cursor(raw: Option<&str>) -> Result<Option<HeroId>, JsonApiError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s
            .parse::<HeroId>()
            .map(Some)
            .map_err(|e| JsonApiError::bad_request(format!("invalid lastHeroId {s:?}: {e}"))),
    }
}

#[utoipa::path(
    get, path = "/api/heroes", tag = "heroes",
    params(ListQuery),
    responses(
        (status = 200, description = "Heroes in id order", body = [crate::openapi::HeroDoc]),
        (status = 400, description = "Malformed cursor", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Cursor does not match a hero", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(
    State(state): State<AppState>,
    Query(q): Query<ListQuery>,
) -> Result<Json<Vec<Hero>>, JsonApiError> {
    let res = match parse_cursor(q.last_hero_id.as_deref())? {
        None => {
            let all = state.heroes.list().await;
            record("list", true);
            Ok(all)
        }
        Some(cursor) => {
            let page = state.heroes.page(Some(cursor)).await;
            record_operation("page", &page);
            page
        }
    };
    Ok(Json(res?))
}

#[utoipa::path(
    post, path = "/api/heroes", tag = "heroes",
    request_body = crate::openapi::HeroInputDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::HeroDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<HeroInput>,
) -> Result<Json<Hero>, JsonApiError> {
    let res = state.heroes.create(input).await;
    record_operation("create", &res);
    let hero = res?;
    set_store_size(state.heroes.len().await);
    info!(id = hero.id, name = %hero.name, "created hero");
    Ok(Json(hero))
}

#[utoipa::path(
    get, path = "/api/heroes/{id}", tag = "heroes",
    params(("id" = i64, Path, description = "Hero id")),
    responses(
        (status = 200, description = "Found", body = crate::openapi::HeroDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<HeroId>,
) -> Result<Json<Hero>, JsonApiError> {
    let res = state.heroes.get(id).await;
    record_operation("get", &res);
    Ok(Json(res?))
}

#[utoipa::path(
    put, path = "/api/heroes/{id}", tag = "heroes",
    params(("id" = i64, Path, description = "Hero id")),
    request_body = crate::openapi::HeroInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::HeroDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<HeroId>,
    Json(input): Json<HeroInput>,
) -> Result<Json<Hero>, JsonApiError> {
    let res = state.heroes.update(id, input).await;
    record_operation("update", &res);
    let hero = res?;
    info!(id = hero.id, name = %hero.name, "updated hero");
    Ok(Json(hero))
}

#[utoipa::path(
    delete, path = "/api/heroes/{id}", tag = "heroes",
    params(("id" = i64, Path, description = "Hero id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<HeroId>,
) -> Result<StatusCode, JsonApiError> {
    let res = state.heroes.delete(id).await;
    record_operation("delete", &res);
    res?;
    set_store_size(state.heroes.len().await);
    info!(id, "deleted hero");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_cursor_accepts_missing_blank_and_integers() {
        assert_eq!(parse_cursor(None).ok(), Some(None));
        assert_eq!(parse_cursor(Some("")).ok(), Some(None));
        assert_eq!(parse_cursor(Some(" 12 ")).ok(), Some(Some(12)));
        assert_eq!(parse_cursor(Some("-1")).ok(), Some(Some(-1)));
    }

    #[test]
    fn parse_cursor_rejects_garbage() {
        let err = parse_cursor(Some("abc")).err().expect("should fail");
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        let err = parse_cursor(Some("1.5")).err().expect("should fail");
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }
}
