use axum::Router;
use axum::body::Body;
use axum::extract::{Path as UrlPath, State};
use axum::http::{Method, StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use futures_util::StreamExt;
use mood_pipeline::{CONTENT_TYPE, ChartError, ChartRenderer, MjpegStream, Pipeline, PipelineState};
use std::convert::Infallible;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>moodcam</title>
<link rel="stylesheet" href="/static/style.css">
</head>
<body>
<h1>moodcam</h1>
<div class="panes">
<img id="feed" src="/video_feed" alt="camera feed">
<img id="chart" src="/emotions_chart" alt="emotion chart">
</div>
<script>
setInterval(function () {
    document.getElementById("chart").src = "/emotions_chart?t=" + Date.now();
}, 2000);
</script>
</body>
</html>
"#;

/// HTTP front of the pipeline: the live feed, the aggregate chart, an index
/// page and static files.
pub struct MoodApp {
    pipeline: Arc<Pipeline>,
    renderer: Arc<ChartRenderer>,
    static_dir: PathBuf,
}

impl MoodApp {
    pub fn new(pipeline: Arc<Pipeline>, renderer: ChartRenderer, static_dir: impl Into<PathBuf>) -> Self {
        Self {
            pipeline,
            renderer: Arc::new(renderer),
            static_dir: static_dir.into(),
        }
    }

    pub fn pipeline(&self) -> &Arc<Pipeline> {
        &self.pipeline
    }

    /// Routes. Unknown paths are 404, other methods on them 405.
    pub fn router(self: Arc<Self>) -> Router {
        Router::new()
            .route("/", get(index))
            .route("/video_feed", get(video_feed))
            .route("/emotions_chart", get(emotions_chart))
            .route("/static/*path", get(static_file))
            .fallback(fallback)
            .with_state(self)
    }
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn video_feed(State(app): State<Arc<MoodApp>>) -> Response {
    if app.pipeline.state() == PipelineState::Stopped {
        return StatusCode::SERVICE_UNAVAILABLE.into_response();
    }
    let parts = MjpegStream::new(Arc::clone(&app.pipeline)).map(Ok::<_, Infallible>);
    (
        [
            (header::CONTENT_TYPE, CONTENT_TYPE),
            (header::CACHE_CONTROL, "no-cache"),
        ],
        Body::from_stream(parts),
    )
        .into_response()
}

async fn emotions_chart(State(app): State<Arc<MoodApp>>) -> Response {
    let snapshot = app.pipeline.history().snapshot();
    let renderer = Arc::clone(&app.renderer);
    let rendered = tokio::task::spawn_blocking(move || match renderer.render(&snapshot) {
        Err(ChartError::EmptyAggregate) => renderer.render_placeholder(),
        other => other,
    })
    .await;
    match rendered {
        Ok(Ok(png)) => (
            [
                (header::CONTENT_TYPE, "image/png"),
                (header::CACHE_CONTROL, "no-cache"),
            ],
            png,
        )
            .into_response(),
        Ok(Err(e)) => {
            log::error!("cannot render chart: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
        Err(e) => {
            log::error!("chart task failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn static_file(State(app): State<Arc<MoodApp>>, UrlPath(relative): UrlPath<String>) -> Response {
    let relative = relative.strip_prefix('/').unwrap_or(&relative);
    let Some(path) = safe_join(&app.static_dir, relative) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    match tokio::fs::read(&path).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, content_type_for(&path))], bytes).into_response(),
        Err(e) => {
            log::debug!("static {}: {}", path.display(), e);
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

async fn fallback(method: Method) -> StatusCode {
    if method == Method::GET || method == Method::HEAD {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::METHOD_NOT_ALLOWED
    }
}

/// `relative` under `root`, or `None` if it could escape it.
fn safe_join(root: &Path, relative: &str) -> Option<PathBuf> {
    if relative.is_empty() || relative.contains('\\') {
        return None;
    }
    let relative = Path::new(relative);
    if !relative
        .components()
        .all(|component| matches!(component, Component::Normal(_)))
    {
        return None;
    }
    Some(root.join(relative))
}

fn content_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js") => "text/javascript; charset=utf-8",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_join_rejects_escapes() {
        let root = Path::new("static");
        assert_eq!(safe_join(root, "css/site.css"), Some(PathBuf::from("static/css/site.css")));
        assert_eq!(safe_join(root, "../secret"), None);
        assert_eq!(safe_join(root, "a/../../b"), None);
        assert_eq!(safe_join(root, "/etc/passwd"), None);
        assert_eq!(safe_join(root, "a\\b"), None);
        assert_eq!(safe_join(root, ""), None);
    }

    #[test]
    fn test_content_type_by_extension() {
        assert_eq!(content_type_for(Path::new("x/style.css")), "text/css; charset=utf-8");
        assert_eq!(content_type_for(Path::new("logo.png")), "image/png");
        assert_eq!(content_type_for(Path::new("blob")), "application/octet-stream");
    }
}
