use std::io::{Cursor, Read};

use base64::{engine::general_purpose, Engine as _};
use image::codecs::jpeg::JpegEncoder;
use serde::Serialize;
use tiny_http::{Request, Response};

use landcover::classify::label::label_from_masks;
use landcover::classify::visual::visual_from_masks;
use landcover::{compute_masks, enhance, PipelineError};

use crate::config::ServerConfig;
use crate::routes::json_response;
use crate::util::multipart::{extract_boundary, extract_file_part};

/// Successful classification: the dominant-cover label plus the recolored
/// visualization as a base64 JPEG. One JSON body carries both, instead of
/// the two independent response values the upstream contract hinted at.
#[derive(Serialize)]
struct ClassifyResponse {
    result: &'static str,
    image: String,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

// ---------------------------------------------------------------------------
// POST /classify
// ---------------------------------------------------------------------------

pub fn handle(request: &mut Request, cfg: &ServerConfig) -> Response<Cursor<Vec<u8>>> {
    match run_pipeline(request) {
        Ok(body) => json_response(200, body, cfg),
        Err(err) => {
            eprintln!("classify failed: {}", err);
            let status = match err {
                PipelineError::MissingInput => 400,
                PipelineError::InvalidImage(_) => 422,
                PipelineError::ProcessingFailure(_) => 500,
            };
            let body = serde_json::to_string(&ErrorResponse {
                error: err.to_string(),
            })
            .unwrap_or_else(|_| r#"{"error":"internal error"}"#.to_owned());
            json_response(status, body, cfg)
        }
    }
}

/// Runs the full request pipeline: multipart extraction, decode, enhance,
/// classify, encode. Any error is terminal and maps to a status code above.
fn run_pipeline(request: &mut Request) -> Result<String, PipelineError> {
    let image_bytes = uploaded_image(request)?;
    classify_bytes(&image_bytes)
}

/// Decodes the uploaded bytes and produces the JSON response body.
fn classify_bytes(image_bytes: &[u8]) -> Result<String, PipelineError> {
    // Decode before any pipeline stage so bad uploads fail fast.
    let rgb = image::load_from_memory(image_bytes)?.to_rgb8();

    let enhanced = enhance(&rgb)?;

    // Both classifier outputs come from one mask pass over the enhanced
    // image; the ranges and inputs are identical for the two uses.
    let masks = compute_masks(&enhanced);
    let label = label_from_masks(&masks);
    let (width, height) = enhanced.dimensions();
    let visual = visual_from_masks(width, height, &masks);

    let mut jpeg = Vec::new();
    JpegEncoder::new(&mut jpeg)
        .encode_image(&visual)
        .map_err(|e| PipelineError::ProcessingFailure(e.to_string()))?;

    let response = ClassifyResponse {
        result: label.as_str(),
        image: general_purpose::STANDARD.encode(&jpeg),
    };
    serde_json::to_string(&response)
        .map_err(|e| PipelineError::ProcessingFailure(e.to_string()))
}

/// Pulls the `image` file field out of the multipart body.
fn uploaded_image(request: &mut Request) -> Result<Vec<u8>, PipelineError> {
    let content_type = request
        .headers()
        .iter()
        .find(|h| h.field.equiv("Content-Type"))
        .map(|h| h.value.as_str().to_owned())
        .unwrap_or_default();

    if !content_type.starts_with("multipart/form-data") {
        return Err(PipelineError::MissingInput);
    }
    let boundary = extract_boundary(&content_type).ok_or(PipelineError::MissingInput)?;

    let mut body = Vec::new();
    request
        .as_reader()
        .read_to_end(&mut body)
        .map_err(|e| PipelineError::ProcessingFailure(e.to_string()))?;

    match extract_file_part(&body, &boundary, "image") {
        Some(bytes) if !bytes.is_empty() => Ok(bytes),
        _ => Err(PipelineError::MissingInput),
    }
}
