#[cfg(feature = "v4l2")]
mod v4l2_tests {
    use mood_camera::{CameraConfig, CameraError, FrameSource, SharedCamera, V4l2Camera};

    #[test]
    fn test_missing_device_is_unavailable() {
        let config = CameraConfig::default().with_device("/dev/video-does-not-exist");
        let result = SharedCamera::open(Box::new(V4l2Camera::new(config)));
        assert!(matches!(result, Err(CameraError::DeviceUnavailable(_))));
    }

    #[test]
    fn test_unopened_camera_ends_stream() {
        let mut cam = V4l2Camera::new(CameraConfig::default());
        assert!(matches!(cam.next_frame(), Err(CameraError::EndOfStream)));
        cam.close();
    }
}
