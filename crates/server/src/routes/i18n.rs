use axum::{extract::Path, Json};
use serde_json::{json, Value as JsonValue};

use replay_core::i18n::{self, Lang};

use crate::error::AppError;

/// GET /api/i18n/{lang}
pub async fn get_translations(Path(lang): Path<String>) -> Result<Json<JsonValue>, AppError> {
    let lang = Lang::from_code(&lang)
        .ok_or_else(|| AppError::BadRequest(format!("Unsupported language '{lang}'")))?;

    Ok(Json(json!({
        "lang": lang.code(),
        "headings": i18n::table(lang),
    })))
}
