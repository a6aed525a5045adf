#[cfg(feature = "onnx")]
mod ferplus_tests {
    use mood_infer::{Device, FerPlusClassifier, InferError};

    #[test]
    fn test_missing_model_fails_to_load() {
        let result = FerPlusClassifier::new("/nonexistent/emotion-ferplus.onnx", &Device::Cpu);
        assert!(matches!(result, Err(InferError::ModelLoad(_))));
    }
}
