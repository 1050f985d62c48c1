mod common;

use common::synthetic_image::disk_rgba;
use livewire::{Point, Scissors, ScissorsParams};

#[test]
fn trained_tables_stay_in_unit_range_on_curved_boundary() {
    let _ = env_logger::builder().is_test(true).try_init();
    let (w, h) = (48, 48);
    let mut scissors = Scissors::new(ScissorsParams::default()).unwrap();
    scissors.set_dimensions(w, h).unwrap();
    scissors.set_data(&disk_rgba(w, h, 24.0, 24.0, 14.0)).unwrap();

    scissors.set_point(Point::new(10, 24)).unwrap();
    let target = Point::new(24, 38);
    let path = scissors.search_to(target, 1_000).unwrap().unwrap();
    assert!(path.len() >= 8, "path too short to train: {}", path.len());

    assert_eq!(scissors.do_training(target), Ok(true));
    let model = scissors.training();
    assert_eq!(model.points().len(), path.len().min(32));
    for table in model.tables() {
        assert!(table
            .values()
            .iter()
            .all(|v| (0.0..=1.0).contains(v) && v.is_finite()));
    }
}

#[test]
fn training_on_unreached_point_is_a_no_op() {
    let (w, h) = (32, 32);
    let mut scissors = Scissors::new(ScissorsParams::default()).unwrap();
    scissors.set_dimensions(w, h).unwrap();
    scissors.set_data(&disk_rgba(w, h, 16.0, 16.0, 8.0)).unwrap();
    scissors.set_point(Point::new(2, 2)).unwrap();
    // No work done yet: the far corner has no parent chain.
    assert_eq!(scissors.do_training(Point::new(30, 30)), Ok(false));
    assert!(!scissors.training().is_trained());
    assert!(scissors.do_training(Point::new(32, 0)).is_err());
}

#[test]
fn uniform_image_searches_without_nan_costs() {
    let (w, h) = (10, 10);
    let mut scissors = Scissors::new(ScissorsParams::default()).unwrap();
    scissors.set_dimensions(w, h).unwrap();
    scissors.set_data(&vec![77u8; w * h * 4]).unwrap();
    let features = scissors.features().unwrap();
    assert!(features.gradient.data.iter().all(|&v| v == 1.0));

    scissors.set_point(Point::new(0, 0)).unwrap();
    let path = scissors.search_to(Point::new(9, 9), 10).unwrap().unwrap();
    assert_eq!(path.len(), 10);
    let cost = scissors.cost(Point::new(9, 9)).unwrap();
    assert!(cost.is_finite() && cost > 0.0);
}
