use axum::Router;
use std::net::SocketAddr;
use tokio::net::{TcpListener, ToSocketAddrs};
use tokio::task::JoinHandle;

/// Router served on its own task.
///
/// Dropping the server (or calling [`shutdown`](Self::shutdown)) stops
/// accepting. Connections already open keep streaming until their body ends,
/// which for the video feed is when the camera is released.
pub struct Server {
    serve_task: JoinHandle<()>,
    local_addr: SocketAddr,
}

impl Server {
    pub async fn bind(addr: impl ToSocketAddrs, router: Router) -> std::io::Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        let local_addr = listener.local_addr()?;
        let serve_task = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, router).await {
                log::error!("server stopped: {}", e);
            }
        });
        Ok(Self {
            serve_task,
            local_addr,
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub fn shutdown(&self) {
        self.serve_task.abort();
    }
}

impl Drop for Server {
    fn drop(&mut self) {
        self.serve_task.abort();
    }
}
