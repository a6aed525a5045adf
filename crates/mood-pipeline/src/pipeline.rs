use crate::{EmotionHistory, annotate, frame_part};
use mood_camera::{CameraError, SharedCamera};
use mood_image::{Frame, encode_jpeg};
use mood_infer::{Emotion, EmotionClassifier, InferError};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    Acquiring,
    Classifying,
    Annotating,
    Emitting,
    /// Terminal. The camera has been released.
    Stopped,
}

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    classify_timeout: Duration,
    jpeg_quality: u8,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            classify_timeout: Duration::from_secs(5),
            jpeg_quality: 80,
        }
    }
}

impl PipelineConfig {
    /// Upper bound for one classification. Slower calls label the frame neutral.
    pub fn with_classify_timeout(mut self, timeout: Duration) -> Self {
        self.classify_timeout = timeout;
        self
    }

    pub fn with_jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = quality.clamp(1, 100);
        self
    }

    pub fn classify_timeout(&self) -> Duration {
        self.classify_timeout
    }

    pub fn jpeg_quality(&self) -> u8 {
        self.jpeg_quality
    }
}

type Verdict = Result<Emotion, InferError>;

/// Runs the classifier off the runtime and records one label per frame.
///
/// A call that outlives the timeout is left to finish on its own; until it
/// does, frames are labeled neutral without queuing more work behind it.
struct Labeler {
    classifier: Arc<Mutex<Box<dyn EmotionClassifier>>>,
    history: Arc<EmotionHistory>,
    timeout: Duration,
    stalled: Mutex<Option<JoinHandle<Verdict>>>,
}

impl Labeler {
    /// Classify `frame` and append the label to the history.
    async fn label(self: Arc<Self>, frame: Arc<Frame>) -> Emotion {
        let emotion = self.classify(frame).await;
        self.history.append(emotion);
        emotion
    }

    fn busy(&self) -> bool {
        let mut stalled = self.stalled.lock().unwrap_or_else(|e| e.into_inner());
        match stalled.as_ref() {
            Some(task) if !task.is_finished() => true,
            Some(_) => {
                *stalled = None;
                false
            }
            None => false,
        }
    }

    async fn classify(&self, frame: Arc<Frame>) -> Emotion {
        if self.busy() {
            log::debug!("classifier still busy with a late frame, using neutral");
            return Emotion::Neutral;
        }
        let classifier = Arc::clone(&self.classifier);
        let mut task = tokio::task::spawn_blocking(move || {
            let mut classifier = classifier.lock().unwrap_or_else(|e| e.into_inner());
            classifier.classify(&frame)
        });
        let outcome = tokio::time::timeout(self.timeout, &mut task).await;
        match outcome {
            Ok(Ok(Ok(emotion))) => emotion,
            Ok(Ok(Err(e))) => {
                log::warn!("classification failed, using neutral: {}", e);
                Emotion::Neutral
            }
            Ok(Err(e)) => {
                log::error!("classifier task failed, using neutral: {}", e);
                Emotion::Neutral
            }
            Err(_) => {
                log::warn!("classification exceeded {:?}, using neutral", self.timeout);
                *self.stalled.lock().unwrap_or_else(|e| e.into_inner()) = Some(task);
                Emotion::Neutral
            }
        }
    }
}

/// Acquire → classify → record → annotate → encode, one frame per [`step`](Self::step).
///
/// Steps are serialized: concurrent callers take turns, and each camera read
/// ends up in exactly one caller's output. Labeling runs as its own task, so a
/// frame read by a viewer that disconnects mid-step is still recorded.
pub struct Pipeline {
    camera: SharedCamera,
    labeler: Arc<Labeler>,
    history: Arc<EmotionHistory>,
    config: PipelineConfig,
    turn: tokio::sync::Mutex<()>,
    state: Mutex<PipelineState>,
}

impl Pipeline {
    pub fn new(
        camera: SharedCamera,
        classifier: Box<dyn EmotionClassifier>,
        history: Arc<EmotionHistory>,
        config: PipelineConfig,
    ) -> Self {
        let labeler = Arc::new(Labeler {
            classifier: Arc::new(Mutex::new(classifier)),
            history: Arc::clone(&history),
            timeout: config.classify_timeout,
            stalled: Mutex::new(None),
        });
        Self {
            camera,
            labeler,
            history,
            config,
            turn: tokio::sync::Mutex::new(()),
            state: Mutex::new(PipelineState::Idle),
        }
    }

    pub fn state(&self) -> PipelineState {
        *self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn history(&self) -> &Arc<EmotionHistory> {
        &self.history
    }

    pub fn camera(&self) -> &SharedCamera {
        &self.camera
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    fn set_state(&self, state: PipelineState) {
        let mut current = self.state.lock().unwrap_or_else(|e| e.into_inner());
        if *current != PipelineState::Stopped {
            *current = state;
        }
    }

    fn stop(&self) {
        self.set_state(PipelineState::Stopped);
        self.camera.release();
    }

    /// Produce the next multipart part, or `None` once the camera has ended.
    ///
    /// Invalid captures are skipped. Classification failures and timeouts
    /// label the frame neutral.
    pub async fn step(&self) -> Option<Vec<u8>> {
        let _turn = self.turn.lock().await;
        loop {
            if self.state() == PipelineState::Stopped {
                return None;
            }

            self.set_state(PipelineState::Acquiring);
            let frame = match self.camera.next_frame().await {
                Ok(frame) => Arc::new(frame),
                Err(CameraError::InvalidFrame(msg)) => {
                    log::warn!("skipping invalid frame: {}", msg);
                    continue;
                }
                Err(CameraError::EndOfStream) => {
                    log::info!("camera reported end of stream");
                    self.stop();
                    return None;
                }
                Err(e) => {
                    log::error!("camera failed: {}", e);
                    self.stop();
                    return None;
                }
            };

            self.set_state(PipelineState::Classifying);
            let labeling = tokio::spawn(Arc::clone(&self.labeler).label(Arc::clone(&frame)));
            let emotion = match labeling.await {
                Ok(emotion) => emotion,
                Err(e) => {
                    log::error!("labeling task failed, recording neutral: {}", e);
                    self.history.append(Emotion::Neutral);
                    Emotion::Neutral
                }
            };

            self.set_state(PipelineState::Annotating);
            let annotated = match annotate(&frame, emotion) {
                Ok(annotated) => annotated,
                Err(e) => {
                    log::warn!("cannot annotate frame: {}", e);
                    continue;
                }
            };
            let jpeg = match encode_jpeg(annotated, self.config.jpeg_quality).await {
                Ok(jpeg) => jpeg,
                Err(e) => {
                    log::warn!("cannot encode frame: {}", e);
                    continue;
                }
            };

            self.set_state(PipelineState::Emitting);
            let part = frame_part(&jpeg);
            self.set_state(PipelineState::Idle);
            return Some(part);
        }
    }
}
