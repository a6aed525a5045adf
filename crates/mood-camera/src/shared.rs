use crate::{CameraError, FrameSource};
use mood_image::Frame;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

struct Inner {
    source: Mutex<Box<dyn FrameSource>>,
    released: AtomicBool,
}

impl Inner {
    fn release(&self) {
        if self.released.swap(true, Ordering::AcqRel) {
            return;
        }
        // waits for an in-flight capture to return
        let mut source = self.source.lock().unwrap_or_else(|e| e.into_inner());
        source.close();
        log::info!("camera released");
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        self.release();
    }
}

/// Process-wide handle to the single opened camera.
///
/// Clones share the same device. The device is closed by the first call to
/// [`release`](Self::release), or when the last handle is dropped, whichever
/// comes first. After release every read reports `CameraError::EndOfStream`.
#[derive(Clone)]
pub struct SharedCamera {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for SharedCamera {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedCamera")
            .field("released", &self.is_released())
            .field("handles", &Arc::strong_count(&self.inner))
            .finish()
    }
}

impl SharedCamera {
    /// Open `source` and wrap it.
    ///
    /// Any failure is reported as `CameraError::DeviceUnavailable`; the source
    /// is closed before returning so a partially opened device is not leaked.
    pub fn open(mut source: Box<dyn FrameSource>) -> Result<Self, CameraError> {
        if let Err(e) = source.open() {
            source.close();
            return Err(match e {
                CameraError::DeviceUnavailable(msg) => CameraError::DeviceUnavailable(msg),
                other => CameraError::DeviceUnavailable(other.to_string()),
            });
        }
        log::info!("camera opened");
        Ok(Self {
            inner: Arc::new(Inner {
                source: Mutex::new(source),
                released: AtomicBool::new(false),
            }),
        })
    }

    /// Read the next frame on the blocking pool.
    pub async fn next_frame(&self) -> Result<Frame, CameraError> {
        if self.is_released() {
            return Err(CameraError::EndOfStream);
        }
        let inner = Arc::clone(&self.inner);
        tokio::task::spawn_blocking(move || {
            let mut source = inner.source.lock().unwrap_or_else(|e| e.into_inner());
            if inner.released.load(Ordering::Acquire) {
                return Err(CameraError::EndOfStream);
            }
            source.next_frame()
        })
        .await
        .map_err(|e| CameraError::Device(e.to_string()))?
    }

    /// Close the device. Idempotent.
    pub fn release(&self) {
        self.inner.release();
    }

    pub fn is_released(&self) -> bool {
        self.inner.released.load(Ordering::Acquire)
    }
}
