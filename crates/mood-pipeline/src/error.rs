use mood_image::ImageError;
use std::fmt;

#[derive(Debug)]
pub enum ChartError {
    /// No labels recorded yet, so there is nothing to chart.
    EmptyAggregate,
    Image(ImageError),
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartError::EmptyAggregate => write!(f, "no emotions recorded"),
            ChartError::Image(err) => write!(f, "chart image error: {err}"),
        }
    }
}

impl std::error::Error for ChartError {}

impl From<ImageError> for ChartError {
    fn from(err: ImageError) -> Self {
        ChartError::Image(err)
    }
}
