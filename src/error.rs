use axum::{
    http::{header::CACHE_CONTROL, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
};

use crate::config::CACHE_CONTROL_ERROR;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Template rendering error: {0}")]
    Template(#[from] tera::Error),

    #[error("Page not found: {0}")]
    NotFound(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::NotFound(_) => self.to_string(),
            AppError::Template(_) => {
                tracing::error!("Internal error: {:?}", self);
                "Internal server error".to_string()
            }
        };

        // Hand-built so an error page renders even when templates failed to compile
        let body = format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Error {code}</title>
</head>
<body>
    <main style="font-family: system-ui, sans-serif; padding: 24px">
        <h1>Error {code}</h1>
        <p>{message}</p>
        <a href="/">Return to homepage</a>
    </main>
</body>
</html>"#,
            code = status.as_u16(),
            message = tera::escape_html(&message),
        );

        let mut response = (status, Html(body)).into_response();
        response
            .headers_mut()
            .insert(CACHE_CONTROL, HeaderValue::from_static(CACHE_CONTROL_ERROR));
        response
    }
}
