//! Video upload acknowledgement endpoint.
//!
//! Accepts the dashboard's multipart form and acknowledges receipt.
//! Storage and the analysis pipeline are out of scope, so the file content
//! is drained and discarded after the part is read.

use axum::Json;
use axum::extract::Multipart;
use axum::http::StatusCode;
use serde::Serialize;
use tracing::info;

/// Body of every upload response.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub message: String,
}

/// `POST /api/upload` - acknowledge a dashboard video upload.
///
/// 400 when the form carries no `file` part.
pub async fn upload_video(mut multipart: Multipart) -> (StatusCode, Json<UploadResponse>) {
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or("unnamed").to_string();
        let _ = field.bytes().await;
        info!("File received: {file_name}");

        return (
            StatusCode::OK,
            Json(UploadResponse {
                success: true,
                message: "File uploaded successfully".to_string(),
            }),
        );
    }

    (
        StatusCode::BAD_REQUEST,
        Json(UploadResponse {
            success: false,
            message: "No file uploaded".to_string(),
        }),
    )
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use crate::test_utils::{body_json, test_app};
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    fn multipart_request(part_name: &str) -> Request<Body> {
        let body = format!(
            "--BOUNDARY\r\n\
             Content-Disposition: form-data; name=\"{part_name}\"; filename=\"clip.mp4\"\r\n\
             Content-Type: video/mp4\r\n\
             \r\n\
             fake video bytes\r\n\
             --BOUNDARY--\r\n"
        );
        Request::builder()
            .method("POST")
            .uri("/api/upload")
            .header(
                header::CONTENT_TYPE,
                "multipart/form-data; boundary=BOUNDARY",
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_upload_acknowledges_file_part() {
        let app = test_app().await;

        let response = app.oneshot(multipart_request("file")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "File uploaded successfully");
    }

    #[tokio::test]
    async fn test_upload_without_file_part_is_rejected() {
        let app = test_app().await;

        let response = app.oneshot(multipart_request("note")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "No file uploaded");
    }
}
