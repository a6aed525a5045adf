use mood_base::Vec2;
use mood_camera::CaptureFormat;
use mood_infer::Device;
use moodcam::{ConfigError, ServerConfig, SourceKind};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

fn from_vars(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    ServerConfig::from_lookup(|var| vars.get(var).cloned())
}

#[test]
fn test_defaults_without_variables() {
    let config = from_vars(&[]).unwrap();
    assert_eq!(config.addr(), "0.0.0.0:5000");
    assert_eq!(config.source(), SourceKind::default());
    assert_eq!(config.camera().device(), "/dev/video0");
    assert_eq!(config.camera().size(), Vec2::new(640, 480));
    assert_eq!(config.camera().format(), CaptureFormat::Mjpeg);
    assert_eq!(config.camera().fps(), 30);
    assert_eq!(config.frame_limit(), None);
    assert!(config.model_path().is_none());
    assert_eq!(config.device(), &Device::Cpu);
    assert_eq!(config.pipeline().classify_timeout(), Duration::from_secs(5));
    assert_eq!(config.pipeline().jpeg_quality(), 80);
    assert_eq!(config.static_dir(), Path::new("static"));
    assert!(config.log_dir().is_none());
}

#[test]
fn test_variables_override_defaults() {
    let config = from_vars(&[
        ("MOODCAM_ADDR", "127.0.0.1:8080"),
        ("MOODCAM_SOURCE", "Synthetic"),
        ("MOODCAM_DEVICE", "/dev/video2"),
        ("MOODCAM_WIDTH", "320"),
        ("MOODCAM_HEIGHT", "240"),
        ("MOODCAM_FPS", "15"),
        ("MOODCAM_CAPTURE_FORMAT", "YUYV"),
        ("MOODCAM_FRAME_LIMIT", "100"),
        ("MOODCAM_MODEL_PATH", "models/ferplus.onnx"),
        ("MOODCAM_INFER_DEVICE", "cuda:1"),
        ("MOODCAM_CLASSIFY_TIMEOUT_MS", "250"),
        ("MOODCAM_JPEG_QUALITY", "95"),
        ("MOODCAM_STATIC_DIR", "/srv/moodcam"),
        ("MOODCAM_LOG_DIR", "/var/log/moodcam"),
    ])
    .unwrap();
    assert_eq!(config.addr(), "127.0.0.1:8080");
    assert_eq!(config.source(), SourceKind::Synthetic);
    assert_eq!(config.camera().device(), "/dev/video2");
    assert_eq!(config.camera().size(), Vec2::new(320, 240));
    assert_eq!(config.camera().format(), CaptureFormat::Yuyv);
    assert_eq!(config.camera().fps(), 15);
    assert_eq!(config.frame_limit(), Some(100));
    assert_eq!(config.model_path(), Some(Path::new("models/ferplus.onnx")));
    assert_eq!(config.device(), &Device::Cuda { device_id: 1 });
    assert_eq!(config.pipeline().classify_timeout(), Duration::from_millis(250));
    assert_eq!(config.pipeline().jpeg_quality(), 95);
    assert_eq!(config.static_dir(), Path::new("/srv/moodcam"));
    assert_eq!(config.log_dir(), Some(Path::new("/var/log/moodcam")));
}

#[test]
fn test_empty_values_count_as_unset() {
    let config = from_vars(&[("MOODCAM_MODEL_PATH", ""), ("MOODCAM_WIDTH", "  ")]).unwrap();
    assert!(config.model_path().is_none());
    assert_eq!(config.camera().size().x, 640);
}

#[test]
fn test_invalid_values_name_the_variable() {
    let cases = [
        ("MOODCAM_SOURCE", "webcam"),
        ("MOODCAM_WIDTH", "wide"),
        ("MOODCAM_HEIGHT", "0"),
        ("MOODCAM_FPS", "-3"),
        ("MOODCAM_CAPTURE_FORMAT", "h264"),
        ("MOODCAM_FRAME_LIMIT", "many"),
        ("MOODCAM_INFER_DEVICE", "tpu"),
        ("MOODCAM_CLASSIFY_TIMEOUT_MS", "0"),
        ("MOODCAM_JPEG_QUALITY", "0"),
        ("MOODCAM_JPEG_QUALITY", "300"),
    ];
    for (name, value) in cases {
        match from_vars(&[(name, value)]) {
            Err(ConfigError::Invalid { var, .. }) => assert_eq!(var, name, "{name}={value}"),
            Ok(_) => panic!("{name}={value} should be rejected"),
        }
    }
}

#[test]
fn test_builder_setters() {
    let config = ServerConfig::default()
        .with_addr("127.0.0.1:0")
        .with_source(SourceKind::Synthetic)
        .with_frame_limit(5)
        .with_static_dir("assets");
    assert_eq!(config.addr(), "127.0.0.1:0");
    assert_eq!(config.source(), SourceKind::Synthetic);
    assert_eq!(config.frame_limit(), Some(5));
    assert_eq!(config.static_dir(), Path::new("assets"));
}

#[test]
fn test_source_kind_parse() {
    assert_eq!("v4l2".parse::<SourceKind>().unwrap(), SourceKind::V4l2);
    assert_eq!(" SYNTHETIC ".parse::<SourceKind>().unwrap(), SourceKind::Synthetic);
    assert!("usb".parse::<SourceKind>().is_err());
}
