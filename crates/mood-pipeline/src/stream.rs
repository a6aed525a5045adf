use crate::Pipeline;
use futures_core::Stream;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

type StepFuture = Pin<Box<dyn Future<Output = Option<Vec<u8>>> + Send>>;

/// Multipart MJPEG body for one viewer.
///
/// Each poll drives one [`Pipeline::step`]. Nothing is captured until the
/// consumer asks for the next part, and dropping the stream stops the viewer.
pub struct MjpegStream {
    pipeline: Arc<Pipeline>,
    pending: Option<StepFuture>,
    done: bool,
}

impl MjpegStream {
    pub fn new(pipeline: Arc<Pipeline>) -> Self {
        Self {
            pipeline,
            pending: None,
            done: false,
        }
    }
}

impl Stream for MjpegStream {
    type Item = Vec<u8>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = &mut *self;
        if this.done {
            return Poll::Ready(None);
        }
        let pipeline = &this.pipeline;
        let fut = this.pending.get_or_insert_with(|| {
            let pipeline = Arc::clone(pipeline);
            Box::pin(async move { pipeline.step().await })
        });
        match fut.as_mut().poll(cx) {
            Poll::Pending => Poll::Pending,
            Poll::Ready(part) => {
                this.pending = None;
                this.done = part.is_none();
                Poll::Ready(part)
            }
        }
    }
}
