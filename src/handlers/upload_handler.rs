use actix_multipart::{Field, Multipart};
use actix_web::{post, route, web, HttpResponse};
use futures::TryStreamExt;
use serde::Serialize;

use crate::{
    app_state::AppState,
    constants::prompts::TUTOR_SYSTEM_PROMPT,
    errors::{AppError, AppResult},
    extractors,
    services::{http_helpers::with_cors, prompt},
};

pub const DEFAULT_QUESTION_COUNT: i64 = 5;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub result: String,
}

struct UploadedFile {
    name: String,
    bytes: Vec<u8>,
}

#[derive(Default)]
struct UploadForm {
    file: Option<UploadedFile>,
    question_count: Option<String>,
}

async fn read_field_bytes(field: &mut Field) -> AppResult<Vec<u8>> {
    let mut bytes = Vec::new();
    while let Some(chunk) = field
        .try_next()
        .await
        .map_err(|_| AppError::InvalidUpload)?
    {
        bytes.extend_from_slice(&chunk);
    }
    Ok(bytes)
}

/// Walks the multipart stream collecting the `file` part and the optional
/// `questionCount` field. Unknown parts are skipped. The whole file is
/// buffered in memory; nothing is streamed past this point.
async fn read_form(payload: &mut Multipart) -> AppResult<UploadForm> {
    let mut form = UploadForm::default();

    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|_| AppError::InvalidUpload)?
    {
        match field.name() {
            "file" => {
                let file_name = field
                    .content_disposition()
                    .get_filename()
                    .map(str::to_owned);
                let bytes = read_field_bytes(&mut field).await?;
                // A part without a filename is a bare form value, not a file.
                let name = file_name.ok_or(AppError::InvalidUpload)?;
                form.file = Some(UploadedFile { name, bytes });
            }
            "questionCount" => {
                let bytes = read_field_bytes(&mut field).await?;
                form.question_count = Some(String::from_utf8_lossy(&bytes).into_owned());
            }
            _ => {}
        }
    }

    Ok(form)
}

/// Absent or unparseable counts fall back to the default. The client form
/// enforces a 1-50 range; the server intentionally does not re-validate it.
fn effective_question_count(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.trim().parse().ok())
        .unwrap_or(DEFAULT_QUESTION_COUNT)
}

#[post("/api/upload")]
pub async fn upload(
    state: web::Data<AppState>,
    mut payload: Multipart,
) -> Result<HttpResponse, AppError> {
    let form = read_form(&mut payload).await?;
    let file = form.file.ok_or(AppError::InvalidUpload)?;
    let question_count = effective_question_count(form.question_count.as_deref());

    let text = extractors::extract(&file.name, &file.bytes)?;
    let source = prompt::truncate_source(&text);
    let user_prompt = prompt::build_prompt(source, question_count);

    let result = state
        .completion
        .complete(TUTOR_SYSTEM_PROMPT, &user_prompt)
        .await?;

    Ok(with_cors(&mut HttpResponse::Ok()).json(UploadResponse { result }))
}

#[route("/api/upload", method = "OPTIONS")]
pub async fn upload_preflight() -> HttpResponse {
    with_cors(&mut HttpResponse::NoContent()).finish()
}
