use mood_infer::{Device, Emotion, InferError};

#[test]
fn test_labels_round_trip_through_text() {
    for emotion in Emotion::ALL {
        assert_eq!(emotion.to_string().parse::<Emotion>().unwrap(), emotion);
    }
}

#[test]
fn test_parse_is_case_insensitive() {
    assert_eq!("Happy".parse::<Emotion>().unwrap(), Emotion::Happy);
    assert_eq!(" SAD ".parse::<Emotion>().unwrap(), Emotion::Sad);
}

#[test]
fn test_unknown_label_rejected() {
    match "contempt".parse::<Emotion>() {
        Err(InferError::UnknownLabel(label)) => assert_eq!(label, "contempt"),
        other => panic!("expected UnknownLabel, got {:?}", other),
    }
}

#[test]
fn test_all_is_declaration_order() {
    let mut sorted = Emotion::ALL;
    sorted.sort();
    assert_eq!(sorted, Emotion::ALL);
    assert_eq!(Emotion::ALL[0], Emotion::Happy);
}

#[test]
fn test_device_parse() {
    assert_eq!("cpu".parse::<Device>().unwrap(), Device::Cpu);
    assert_eq!("CUDA".parse::<Device>().unwrap(), Device::Cuda { device_id: 0 });
    assert_eq!("cuda:2".parse::<Device>().unwrap(), Device::Cuda { device_id: 2 });
    assert!("tpu".parse::<Device>().is_err());
    assert_eq!(Device::Cuda { device_id: 1 }.to_string(), "CUDA(device_id=1)");
}
