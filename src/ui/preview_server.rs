use std::convert::Infallible;
use std::net::SocketAddr;
use tokio::sync::oneshot;
use warp::Filter;
use serde_json::json;
use crate::config::constants::PREVIEW_PORT_RANGE_END;
use crate::errors::{SpacesError, SpacesResult};
use crate::ui::shared_preview::SharedPreview;

/// Page hosting the sandboxed frame. It polls `/revision` and reloads the
/// frame when the document changes.
const FRAME_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
<title>Spaces preview</title>
<style>html, body, iframe { margin: 0; width: 100%; height: 100%; border: 0; }</style>
</head>
<body>
<iframe id="preview-frame" sandbox="allow-scripts" src="/frame"></iframe>
<script>
let revision = null;
setInterval(async () => {
    const response = await fetch('/revision');
    const data = await response.json();
    if (revision !== null && data.revision !== revision) {
        document.getElementById('preview-frame').src = '/frame?r=' + data.revision;
    }
    revision = data.revision;
}, 500);
</script>
</body>
</html>
"#;

/// Local HTTP server standing in for the editor's preview frame.
pub struct PreviewServer {
    preview: SharedPreview,
    port: Option<u16>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl PreviewServer {
    pub const fn new(preview: SharedPreview) -> Self {
        Self {
            preview,
            port: None,
            shutdown_tx: None,
        }
    }

    pub fn url(&self) -> Option<String> {
        self.port.map(|port| format!("http://127.0.0.1:{port}/"))
    }

    /// Binds the first free port from `preferred_port` upwards and serves in the background.
    pub async fn start(&mut self, preferred_port: u16) -> SpacesResult<u16> {
        let port = Self::find_available_port(preferred_port).await?;
        self.port = Some(port);

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        self.shutdown_tx = Some(shutdown_tx);

        let preview_filter = {
            let preview = self.preview.clone();
            warp::any().map(move || preview.clone())
        };

        let page_route = warp::path::end()
            .and(warp::get())
            .map(|| warp::reply::html(FRAME_PAGE));

        let frame_route = warp::path("frame")
            .and(warp::path::end())
            .and(warp::get())
            .and(preview_filter.clone())
            .and_then(serve_frame);

        let revision_route = warp::path("revision")
            .and(warp::path::end())
            .and(warp::get())
            .and(preview_filter)
            .map(|preview: SharedPreview| warp::reply::json(&json!({ "revision": preview.revision() })));

        let routes = page_route.or(frame_route).or(revision_route);

        let addr: SocketAddr = ([127, 0, 0, 1], port).into();
        let (_, server) = warp::serve(routes).bind_with_graceful_shutdown(addr, async {
            shutdown_rx.await.ok();
        });

        tokio::spawn(server);

        log::info!("🌐 Preview server started on port {port}");
        Ok(port)
    }

    pub fn shutdown(&mut self) -> SpacesResult<()> {
        log::info!("🛑 Shutting down preview server...");

        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            shutdown_tx
                .send(())
                .map_err(|()| SpacesError::system_error("shutdown", "Failed to send shutdown signal"))?;
        }
        Ok(())
    }

    async fn find_available_port(preferred_port: u16) -> SpacesResult<u16> {
        for port in preferred_port..PREVIEW_PORT_RANGE_END.max(preferred_port.saturating_add(1)) {
            if let Ok(listener) = tokio::net::TcpListener::bind(format!("127.0.0.1:{port}")).await {
                drop(listener);
                return Ok(port);
            }
        }
        Err(SpacesError::system_error(
            "preview server",
            &format!("No available port from {preferred_port}"),
        ))
    }
}

async fn serve_frame(preview: SharedPreview) -> Result<impl warp::Reply, Infallible> {
    Ok(warp::reply::html(preview.document()))
}
