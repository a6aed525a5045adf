use crate::{ServerConfig, SourceKind};
use mood_camera::{CameraError, FrameSource, SharedCamera, SyntheticCamera};
use mood_infer::{EmotionClassifier, InferError, NeutralClassifier};

fn frame_source(config: &ServerConfig) -> Result<Box<dyn FrameSource>, CameraError> {
    match config.source() {
        SourceKind::Synthetic => {
            let mut camera = SyntheticCamera::from_config(config.camera());
            if let Some(limit) = config.frame_limit() {
                camera = camera.with_limit(limit);
            }
            Ok(Box::new(camera))
        }
        #[cfg(feature = "v4l2")]
        SourceKind::V4l2 => Ok(Box::new(mood_camera::V4l2Camera::new(config.camera().clone()))),
        #[cfg(not(feature = "v4l2"))]
        SourceKind::V4l2 => Err(CameraError::DeviceUnavailable(format!(
            "{}: built without v4l2 support",
            config.camera().device()
        ))),
    }
}

/// Open the configured camera. Any failure is `CameraError::DeviceUnavailable`.
pub fn open_camera(config: &ServerConfig) -> Result<SharedCamera, CameraError> {
    log::info!(
        "opening {} source ({}x{} @ {} fps, {})",
        config.source(),
        config.camera().size().x,
        config.camera().size().y,
        config.camera().fps(),
        config.camera().format()
    );
    SharedCamera::open(frame_source(config)?)
}

/// Load the configured classifier, or a neutral one when no model is set.
pub fn load_classifier(config: &ServerConfig) -> Result<Box<dyn EmotionClassifier>, InferError> {
    let Some(path) = config.model_path() else {
        log::warn!("no emotion model configured, every frame is labeled neutral");
        return Ok(Box::new(NeutralClassifier));
    };

    #[cfg(feature = "onnx")]
    {
        let classifier = mood_infer::FerPlusClassifier::new(path, config.device())?;
        Ok(Box::new(classifier))
    }
    #[cfg(not(feature = "onnx"))]
    {
        Err(InferError::ModelLoad(format!(
            "{}: built without onnx support",
            path.display()
        )))
    }
}
