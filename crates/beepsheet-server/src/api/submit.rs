//! CSV upload handler.
//!
//! Accepts a multipart POST with a single `file` field, runs the batch
//! pipeline in a temporary directory, and streams the packed archive back as
//! an attachment. Sheet-level problems (bad extension, malformed CSV, failed
//! validation) re-render the upload form with the message inlined; only
//! transport and IO failures surface as [`ApiError`].

use axum::{
    extract::{Multipart, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::post,
    Router,
};
use beepsheet_core::archive;
use beepsheet_core::batch::{plan_batch, write_beeps};
use beepsheet_core::{BatchError, BatchOptions};
use std::fs;
use tracing::{info, warn};

use crate::error::{ApiError, ApiResult};
use crate::{ui, AppState};

/// Download name for the packed result.
const ARCHIVE_FILENAME: &str = "beeps.tar.gz";

/// POST /submit
pub async fn generate_archive(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<Response> {
    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| ApiError::BadRequest(format!("malformed multipart body: {err}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|err| ApiError::BadRequest(format!("failed to read upload: {err}")))?;
        upload = Some((filename, data));
        break;
    }

    let Some((filename, data)) = upload else {
        return Ok(form_error("Choose a CSV file to upload."));
    };
    if filename.is_empty() {
        return Ok(form_error("Choose a CSV file to upload."));
    }
    if !state.config.is_allowed_filename(&filename) {
        return Ok(form_error(&format!(
            "'{filename}' is not an accepted file type (allowed: {})",
            state.config.allowed_extensions.join(", ")
        )));
    }

    let csv_text = match String::from_utf8(data.to_vec()) {
        Ok(text) => text,
        Err(_) => return Ok(form_error("The uploaded file is not valid UTF-8 text.")),
    };

    info!(filename = %filename, bytes = csv_text.len(), "Processing beep sheet upload");

    let options = state.config.batch_options();
    let outcome = tokio::task::spawn_blocking(move || render_archive(&csv_text, &options))
        .await
        .map_err(|err| ApiError::Internal(format!("batch task failed: {err}")))?;

    match outcome {
        Ok(archive_bytes) => {
            info!(bytes = archive_bytes.len(), "Beep sheet rendered");
            Ok(attachment_response(archive_bytes))
        }
        Err(BatchError::Io(err)) => Err(ApiError::Io(err)),
        Err(err) => {
            warn!(error = %err, "Beep sheet rejected");
            Ok(form_error(&err.to_string()))
        }
    }
}

/// Runs the batch into a scratch directory and packs the result. Blocking;
/// callers run this on a blocking task.
fn render_archive(csv_text: &str, options: &BatchOptions) -> Result<Vec<u8>, BatchError> {
    let workdir = tempfile::tempdir()?;
    let out_dir = workdir.path().join("beeps");
    let records = plan_batch(csv_text, options)?;
    fs::create_dir_all(&out_dir)?;
    write_beeps(&out_dir, &records)?;
    let bytes = archive::pack_dir_to_vec(&out_dir)?;
    Ok(bytes)
}

fn attachment_response(bytes: Vec<u8>) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/gzip".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{ARCHIVE_FILENAME}\""),
            ),
        ],
        bytes,
    )
        .into_response()
}

fn form_error(message: &str) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Html(ui::render_form(Some(message))),
    )
        .into_response()
}

/// Build upload routes
pub fn submit_routes() -> Router<AppState> {
    Router::new().route("/submit", post(generate_archive))
}
