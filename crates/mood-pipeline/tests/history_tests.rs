use mood_infer::Emotion;
use mood_pipeline::{EmotionHistory, Snapshot};
use std::sync::Arc;

#[test]
fn test_empty_history() {
    let history = EmotionHistory::new();
    let snapshot = history.snapshot();
    assert!(history.is_empty());
    assert!(snapshot.is_empty());
    assert_eq!(snapshot.total(), 0);
    assert_eq!(snapshot.iter().count(), 0);
}

#[test]
fn test_counts_sum_to_total() {
    let history = EmotionHistory::new();
    let labels = [
        Emotion::Sad,
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Disgust,
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Fear,
    ];
    for label in labels {
        history.append(label);
    }
    let snapshot = history.snapshot();
    assert_eq!(snapshot.total(), labels.len());
    assert_eq!(snapshot.iter().map(|(_, n)| n).sum::<usize>(), labels.len());
    assert_eq!(snapshot.count(Emotion::Sad), 3);
    assert_eq!(snapshot.count(Emotion::Angry), 0);
    assert_eq!(history.entries(), labels.to_vec());
}

#[test]
fn test_snapshot_iterates_in_label_order() {
    let snapshot = Snapshot::from_labels([Emotion::Disgust, Emotion::Sad, Emotion::Happy]);
    let order: Vec<_> = snapshot.iter().map(|(e, _)| e).collect();
    assert_eq!(order, vec![Emotion::Happy, Emotion::Sad, Emotion::Disgust]);
}

#[test]
fn test_snapshot_is_detached_from_later_appends() {
    let history = EmotionHistory::new();
    history.append(Emotion::Happy);
    let before = history.snapshot();
    history.append(Emotion::Happy);
    assert_eq!(before.total(), 1);
    assert_eq!(history.snapshot().total(), 2);
}

#[test]
fn test_readers_never_see_partial_state() {
    let history = Arc::new(EmotionHistory::new());
    let writer = {
        let history = Arc::clone(&history);
        std::thread::spawn(move || {
            for i in 0..2000 {
                history.append(Emotion::ALL[i % Emotion::ALL.len()]);
            }
        })
    };
    let readers: Vec<_> = (0..4)
        .map(|_| {
            let history = Arc::clone(&history);
            std::thread::spawn(move || {
                let mut last = 0;
                for _ in 0..500 {
                    let snapshot = history.snapshot();
                    let sum: usize = snapshot.iter().map(|(_, n)| n).sum();
                    assert_eq!(sum, snapshot.total());
                    assert!(snapshot.total() >= last);
                    last = snapshot.total();
                }
            })
        })
        .collect();
    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }
    assert_eq!(history.len(), 2000);
}
