use crate::preprocess::{INPUT_SIZE, face_input, label_from_scores};
use crate::{Device, Emotion, EmotionClassifier, InferError};
use mood_image::Frame;
use ort::ndarray::Array4;
use ort::{inputs, session::Session as OrtSession, value::TensorRef};
use std::path::Path;

/// Emotion classifier running a FER+ ONNX model (8 scores, 64x64 grayscale input).
pub struct FerPlusClassifier {
    session: OrtSession,
    input_name: String,
    output_name: String,
}

impl FerPlusClassifier {
    pub fn new(model: impl AsRef<Path>, device: &Device) -> Result<Self, InferError> {
        let model = model.as_ref();
        let builder = OrtSession::builder()
            .map_err(|e| InferError::ModelLoad(format!("failed to create session builder: {}", e)))?;

        let builder = match device {
            Device::Cpu => builder,
            #[cfg(feature = "cuda")]
            Device::Cuda { device_id } => {
                use ort::execution_providers::CUDAExecutionProvider;
                let ep = CUDAExecutionProvider::default().with_device_id(*device_id);
                builder
                    .with_execution_providers([ep.build()])
                    .map_err(|_| InferError::UnsupportedDevice(device.clone()))?
            }
            #[cfg(not(feature = "cuda"))]
            Device::Cuda { .. } => return Err(InferError::UnsupportedDevice(device.clone())),
        };

        let session = builder.commit_from_file(model).map_err(|e| {
            InferError::ModelLoad(format!("failed to load {}: {}", model.display(), e))
        })?;

        let input_name = session
            .inputs()
            .first()
            .map(|input| input.name().to_string())
            .ok_or_else(|| InferError::ModelLoad("model has no inputs".to_string()))?;
        let output_name = session
            .outputs()
            .first()
            .map(|output| output.name().to_string())
            .ok_or_else(|| InferError::ModelLoad("model has no outputs".to_string()))?;

        log::info!(
            "loaded emotion model {} on {} (input {}, output {})",
            model.display(),
            device,
            input_name,
            output_name
        );
        Ok(Self {
            session,
            input_name,
            output_name,
        })
    }
}

impl EmotionClassifier for FerPlusClassifier {
    fn classify(&mut self, frame: &Frame) -> Result<Emotion, InferError> {
        let array = Array4::from_shape_vec((1, 1, INPUT_SIZE, INPUT_SIZE), face_input(frame))
            .map_err(|e| InferError::Shape(e.to_string()))?;
        let tensor = TensorRef::from_array_view(array.view())
            .map_err(|e| InferError::Runtime(format!("failed to create tensor ref: {}", e)))?;
        let outputs = self
            .session
            .run(inputs![self.input_name.as_str() => tensor])
            .map_err(|e| InferError::Runtime(format!("inference failed: {}", e)))?;
        let scores = outputs[self.output_name.as_str()]
            .try_extract_array::<f32>()
            .map_err(|e| InferError::Runtime(format!("output is not f32: {}", e)))?;
        let scores: Vec<f32> = scores.iter().copied().collect();
        label_from_scores(&scores)
    }
}
