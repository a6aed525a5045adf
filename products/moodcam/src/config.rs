use mood_base::Vec2;
use mood_camera::{CameraConfig, CaptureFormat};
use mood_infer::Device;
use mood_pipeline::PipelineConfig;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_ADDR: &str = "0.0.0.0:5000";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    V4l2,
    Synthetic,
}

impl Default for SourceKind {
    fn default() -> Self {
        if cfg!(feature = "v4l2") {
            SourceKind::V4l2
        } else {
            SourceKind::Synthetic
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::V4l2 => write!(f, "v4l2"),
            SourceKind::Synthetic => write!(f, "synthetic"),
        }
    }
}

impl FromStr for SourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "v4l2" => Ok(SourceKind::V4l2),
            "synthetic" => Ok(SourceKind::Synthetic),
            other => Err(format!("unknown source {other:?}, expected v4l2 or synthetic")),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid { var, value, reason } => {
                write!(f, "invalid {var}={value:?}: {reason}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Everything the `moodcam` binary needs to start.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    addr: String,
    source: SourceKind,
    camera: CameraConfig,
    frame_limit: Option<usize>,
    model_path: Option<PathBuf>,
    device: Device,
    pipeline: PipelineConfig,
    static_dir: PathBuf,
    log_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
            source: SourceKind::default(),
            camera: CameraConfig::default(),
            frame_limit: None,
            model_path: None,
            device: Device::Cpu,
            pipeline: PipelineConfig::default(),
            static_dir: PathBuf::from("static"),
            log_dir: None,
        }
    }
}

impl ServerConfig {
    pub fn with_addr(mut self, addr: impl Into<String>) -> Self {
        self.addr = addr.into();
        self
    }

    pub fn with_source(mut self, source: SourceKind) -> Self {
        self.source = source;
        self
    }

    pub fn with_camera(mut self, camera: CameraConfig) -> Self {
        self.camera = camera;
        self
    }

    /// Only honored by the synthetic source.
    pub fn with_frame_limit(mut self, limit: usize) -> Self {
        self.frame_limit = Some(limit);
        self
    }

    pub fn with_model_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.model_path = Some(path.into());
        self
    }

    pub fn with_device(mut self, device: Device) -> Self {
        self.device = device;
        self
    }

    pub fn with_pipeline(mut self, pipeline: PipelineConfig) -> Self {
        self.pipeline = pipeline;
        self
    }

    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = dir.into();
        self
    }

    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(dir.into());
        self
    }

    pub fn addr(&self) -> &str {
        &self.addr
    }

    pub fn source(&self) -> SourceKind {
        self.source
    }

    pub fn camera(&self) -> &CameraConfig {
        &self.camera
    }

    pub fn frame_limit(&self) -> Option<usize> {
        self.frame_limit
    }

    pub fn model_path(&self) -> Option<&Path> {
        self.model_path.as_deref()
    }

    pub fn device(&self) -> &Device {
        &self.device
    }

    pub fn pipeline(&self) -> &PipelineConfig {
        &self.pipeline
    }

    pub fn static_dir(&self) -> &Path {
        &self.static_dir
    }

    pub fn log_dir(&self) -> Option<&Path> {
        self.log_dir.as_deref()
    }

    /// Read `MOODCAM_*` variables from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build a config from `lookup`, which returns the value of a variable
    /// if it is set. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(addr) = get("MOODCAM_ADDR") {
            config.addr = addr.trim().to_string();
        }
        if let Some(source) = parse(&get, "MOODCAM_SOURCE")? {
            config.source = source;
        }

        let mut camera = CameraConfig::default();
        if let Some(device) = get("MOODCAM_DEVICE") {
            camera = camera.with_device(device.trim());
        }
        let default_size = camera.size();
        let width = parse_nonzero(&get, "MOODCAM_WIDTH")?.unwrap_or(default_size.x);
        let height = parse_nonzero(&get, "MOODCAM_HEIGHT")?.unwrap_or(default_size.y);
        camera = camera.with_size(Vec2::new(width, height));
        if let Some(fps) = parse_nonzero(&get, "MOODCAM_FPS")? {
            camera = camera.with_fps(fps);
        }
        if let Some(format) = parse::<CaptureFormat>(&get, "MOODCAM_CAPTURE_FORMAT")? {
            camera = camera.with_format(format);
        }
        config.camera = camera;

        config.frame_limit = parse(&get, "MOODCAM_FRAME_LIMIT")?;
        config.model_path = get("MOODCAM_MODEL_PATH").map(PathBuf::from);
        if let Some(device) = get("MOODCAM_INFER_DEVICE") {
            config.device = device
                .parse::<Device>()
                .map_err(|e| ConfigError::Invalid {
                    var: "MOODCAM_INFER_DEVICE",
                    value: device.clone(),
                    reason: e.to_string(),
                })?;
        }

        let mut pipeline = PipelineConfig::default();
        if let Some(ms) = parse_nonzero::<u64>(&get, "MOODCAM_CLASSIFY_TIMEOUT_MS")? {
            pipeline = pipeline.with_classify_timeout(Duration::from_millis(ms));
        }
        if let Some(quality) = parse::<u8>(&get, "MOODCAM_JPEG_QUALITY")? {
            if !(1..=100).contains(&quality) {
                return Err(ConfigError::Invalid {
                    var: "MOODCAM_JPEG_QUALITY",
                    value: quality.to_string(),
                    reason: "must be between 1 and 100".to_string(),
                });
            }
            pipeline = pipeline.with_jpeg_quality(quality);
        }
        config.pipeline = pipeline;

        if let Some(dir) = get("MOODCAM_STATIC_DIR") {
            config.static_dir = PathBuf::from(dir);
        }
        config.log_dir = get("MOODCAM_LOG_DIR").map(PathBuf::from);
        Ok(config)
    }
}

fn parse<T>(get: &impl Fn(&str) -> Option<String>, var: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    let Some(value) = get(var) else {
        return Ok(None);
    };
    value
        .trim()
        .parse()
        .map(Some)
        .map_err(|e: T::Err| ConfigError::Invalid {
            var,
            value,
            reason: e.to_string(),
        })
}

fn parse_nonzero<T>(
    get: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>, ConfigError>
where
    T: FromStr + Default + PartialEq + fmt::Display,
    T::Err: fmt::Display,
{
    match parse::<T>(get, var)? {
        Some(value) if value == T::default() => Err(ConfigError::Invalid {
            var,
            value: value.to_string(),
            reason: "must be greater than zero".to_string(),
        }),
        other => Ok(other),
    }
}
