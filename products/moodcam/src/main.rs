use mood_base::{log, log_fatal};
use mood_camera::CameraError;
use mood_pipeline::{ChartRenderer, EmotionHistory, Pipeline};
use moodcam::{MoodApp, Server, ServerConfig, load_classifier, open_camera};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            mood_base::init_stdout_logger();
            log_fatal!("configuration error: {}", e);
        }
    };

    match config.log_dir() {
        Some(dir) => mood_base::init_file_logger(dir)?,
        None => mood_base::init_stdout_logger(),
    }
    log::info!("moodcam starting");

    let camera = match open_camera(&config) {
        Ok(camera) => camera,
        Err(CameraError::DeviceUnavailable(msg)) => {
            log_fatal!("camera unavailable: {}", msg);
        }
        Err(e) => return Err(e.into()),
    };

    // camera is released by drop if this fails
    let classifier = load_classifier(&config)?;

    let history = Arc::new(EmotionHistory::new());
    let pipeline = Arc::new(Pipeline::new(
        camera.clone(),
        classifier,
        Arc::clone(&history),
        config.pipeline().clone(),
    ));
    let app = Arc::new(MoodApp::new(
        pipeline,
        ChartRenderer::default(),
        config.static_dir(),
    ));

    let server = Server::bind(config.addr(), app.router()).await?;
    log::info!("serving on http://{}", server.local_addr());

    tokio::signal::ctrl_c().await?;
    log::info!("shutting down after {} classified frames", history.len());
    server.shutdown();
    camera.release();
    Ok(())
}
