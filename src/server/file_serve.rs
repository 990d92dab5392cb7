use super::AppState;
use axum::{
    body::Body,
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use tracing::info;
use urlencoding::decode;

/// Validates that a path segment is safe and doesn't contain path
/// traversal sequences.
fn is_safe_segment(segment: &str) -> bool {
    let trimmed = segment.trim();
    !segment.contains("..")
        && !segment.contains('/')
        && !segment.contains('\\')
        && !segment.starts_with('.')
        && !segment.is_empty()
        && !trimmed.is_empty()
        && segment.len() <= 255
}

fn content_type_for(filename: &str) -> &'static str {
    let extension = filename.rsplit('.').next().unwrap_or("");
    match extension.to_ascii_lowercase().as_str() {
        "pdf" => "application/pdf",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "png" => "image/png",
        _ => "application/octet-stream",
    }
}

/// Serves a generated document from the output directory. The wildcard
/// path is `client_folder/filename`; every segment is validated on its
/// own so neither part can escape the output root.
pub async fn serve_output_file(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> Result<Response<Body>, StatusCode> {
    let decoded = decode(&path).map_err(|_| StatusCode::BAD_REQUEST)?;

    let segments: Vec<&str> = decoded.split('/').collect();
    if segments.is_empty() || !segments.iter().all(|s| is_safe_segment(s)) {
        return Err(StatusCode::BAD_REQUEST);
    }

    let filename = segments[segments.len() - 1].to_string();
    let file_path = format!(
        "{}/{}",
        state.context.config.proposal.output_dir,
        segments.join("/")
    );
    info!(%file_path, "serving generated document");

    match tokio::fs::read(&file_path).await {
        Ok(contents) => Ok(Response::builder()
            .status(StatusCode::OK)
            .header("content-type", content_type_for(&filename))
            .header(
                "content-disposition",
                format!("attachment; filename=\"{}\"", filename),
            )
            .body(Body::from(contents))
            .unwrap()),
        Err(_) => Err(StatusCode::NOT_FOUND),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safe_segments_pass() {
        assert!(is_safe_segment("Musterbau_GmbH"));
        assert!(is_safe_segment("260314_Angebot_Musterbau_GmbH ExposéProfi.pdf"));
        assert!(is_safe_segment("angebot-123.docx"));
    }

    #[test]
    fn traversal_and_hidden_segments_fail() {
        assert!(!is_safe_segment(".."));
        assert!(!is_safe_segment("../secret"));
        assert!(!is_safe_segment("..\\windows"));
        assert!(!is_safe_segment(".env"));
        assert!(!is_safe_segment(""));
        assert!(!is_safe_segment(" "));
        assert!(!is_safe_segment(&"a".repeat(256)));
    }

    #[test]
    fn content_types_match_extensions() {
        assert_eq!(content_type_for("angebot.pdf"), "application/pdf");
        assert_eq!(
            content_type_for("angebot.DOCX"),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        );
        assert_eq!(content_type_for("plan.png"), "image/png");
        assert_eq!(content_type_for("unknown.bin"), "application/octet-stream");
    }
}
