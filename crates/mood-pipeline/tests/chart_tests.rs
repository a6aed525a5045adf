use mood_image::decode_frame;
use mood_infer::Emotion;
use mood_pipeline::{ChartError, ChartRenderer, IconTable, Snapshot, pie_slices};

fn snapshot(happy: usize, sad: usize) -> Snapshot {
    Snapshot::from_labels(
        std::iter::repeat_n(Emotion::Happy, happy).chain(std::iter::repeat_n(Emotion::Sad, sad)),
    )
}

#[test]
fn test_empty_snapshot_is_empty_aggregate() {
    let empty = Snapshot::default();
    assert!(matches!(pie_slices(&empty), Err(ChartError::EmptyAggregate)));
    assert!(matches!(
        ChartRenderer::default().render(&empty),
        Err(ChartError::EmptyAggregate)
    ));
}

#[test]
fn test_single_entry_is_full_circle() {
    let slices = pie_slices(&Snapshot::from_labels([Emotion::Angry])).unwrap();
    assert_eq!(slices.len(), 1);
    assert_eq!(slices[0].emotion, Emotion::Angry);
    assert_eq!(slices[0].sweep_deg, 360.0);
    assert_eq!(slices[0].percent_label(), "100.0%");
}

#[test]
fn test_proportions() {
    let slices = pie_slices(&snapshot(6, 4)).unwrap();
    assert_eq!(slices.len(), 2);
    assert_eq!(slices[0].emotion, Emotion::Happy);
    assert_eq!(slices[0].percent_label(), "60.0%");
    assert_eq!(slices[1].percent_label(), "40.0%");
    assert!((slices[0].start_deg - 90.0).abs() < 1e-9);
    assert!((slices[1].start_deg - (90.0 + 216.0)).abs() < 1e-9);
    let sweep: f64 = slices.iter().map(|s| s.sweep_deg).sum();
    assert!((sweep - 360.0).abs() < 1e-9);
}

#[test]
fn test_render_is_deterministic() {
    let renderer = ChartRenderer::default();
    let s = snapshot(3, 7);
    let a = renderer.render(&s).unwrap();
    let b = renderer.render(&s).unwrap();
    assert_eq!(a, b);
    assert_eq!(pie_slices(&s).unwrap(), pie_slices(&s).unwrap());
}

#[test]
fn test_render_is_png_of_configured_size() {
    let renderer = ChartRenderer::default().with_side(240);
    let png = renderer.render(&snapshot(1, 1)).unwrap();
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    let frame = decode_frame(&png).unwrap();
    assert_eq!((frame.width(), frame.height()), (240, 240));
}

#[test]
fn test_missing_icon_uses_fallback() {
    let s = snapshot(2, 2);
    let with_faces = ChartRenderer::new(IconTable::faces()).render_frame(&s).unwrap();
    let without = ChartRenderer::new(IconTable::empty()).render_frame(&s).unwrap();
    assert!(!IconTable::empty().contains(Emotion::Happy));
    assert_ne!(with_faces, without);
}

#[test]
fn test_placeholder_is_png() {
    let png = ChartRenderer::default().render_placeholder().unwrap();
    assert_eq!(&png[1..4], b"PNG");
    assert_eq!(png, ChartRenderer::default().render_placeholder().unwrap());
}
