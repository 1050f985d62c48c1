mod common;

use common::synthetic_image::{checkerboard_rgba, disk_rgba, vertical_step_rgba};
use livewire::{Point, Scissors, ScissorsParams, SearchState};
use std::collections::HashSet;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn loaded(width: usize, height: usize, rgba: &[u8]) -> Scissors {
    let mut scissors = Scissors::new(ScissorsParams::default()).unwrap();
    scissors.set_dimensions(width, height).unwrap();
    scissors.set_data(rgba).unwrap();
    scissors
}

#[test]
fn path_follows_a_straight_edge() {
    init_logger();
    let (w, h, split) = (20, 20, 10);
    let mut scissors = loaded(w, h, &vertical_step_rgba(w, h, split));
    scissors.set_point(Point::new(split - 1, 2)).unwrap();

    let target = Point::new(split - 1, 17);
    let path = scissors
        .search_to(target, 100)
        .unwrap()
        .expect("target should be reachable");

    assert_eq!(path.first(), Some(&Point::new(split - 1, 2)));
    assert_eq!(path.last(), Some(&target));
    assert_eq!(path.len(), 16);
    assert!(
        path.iter().all(|p| p.x == split - 1),
        "path left the edge: {path:?}"
    );

    let features = scissors.features().unwrap();
    let laplace_sum: f32 = path.iter().map(|p| features.laplace.get(p.x, p.y)).sum();
    assert_eq!(laplace_sum, 0.0);
    assert_eq!(scissors.cost(target), Some(0.0));
}

#[test]
fn crossing_to_the_far_side_runs_along_the_edge_first() {
    init_logger();
    let (w, h, split) = (20, 20, 10);
    let mut scissors = loaded(w, h, &vertical_step_rgba(w, h, split));
    scissors.set_point(Point::new(split - 1, 2)).unwrap();

    let target = Point::new(split, 17);
    let path = scissors.search_to(target, 100).unwrap().unwrap();
    assert_eq!(path.last(), Some(&target));
    let (body, _) = path.split_at(path.len() - 1);
    assert!(
        body.iter().all(|p| p.x == split - 1),
        "expected the path to hug the edge before crossing: {path:?}"
    );
}

#[test]
fn draining_visits_every_pixel_once() {
    init_logger();
    let (w, h) = (23, 17);
    let mut scissors = loaded(w, h, &disk_rgba(w, h, 11.0, 8.0, 5.0));
    scissors.set_point(Point::new(4, 13)).unwrap();

    let mut seen = HashSet::new();
    loop {
        let links = scissors.do_work();
        if links.is_empty() {
            break;
        }
        for link in links {
            assert!(seen.insert(link.child), "{:?} popped twice", link.child);
        }
    }

    assert_eq!(seen.len(), w * h);
    assert_eq!(scissors.pending(), 0);
    for y in 0..h {
        for x in 0..w {
            let p = Point::new(x, y);
            assert!(scissors.is_visited(p));
            assert!(scissors.is_reachable(p));
        }
    }
}

#[test]
fn exhausted_search_is_left_untouched() {
    init_logger();
    let (w, h) = (12, 12);
    let mut scissors = loaded(w, h, &checkerboard_rgba(w, h, 4));
    scissors.set_point(Point::new(6, 6)).unwrap();
    while !scissors.do_work().is_empty() {}

    let snapshot: Vec<_> = (0..h)
        .flat_map(|y| (0..w).map(move |x| Point::new(x, y)))
        .map(|p| (scissors.cost(p), scissors.parent(p), scissors.is_visited(p)))
        .collect();

    for _ in 0..3 {
        assert!(scissors.do_work().is_empty());
    }
    let after: Vec<_> = (0..h)
        .flat_map(|y| (0..w).map(move |x| Point::new(x, y)))
        .map(|p| (scissors.cost(p), scissors.parent(p), scissors.is_visited(p)))
        .collect();
    assert_eq!(snapshot, after);
    assert_eq!(scissors.state(), SearchState::Searching);
}

#[test]
fn parent_chain_costs_never_decrease_towards_target() {
    init_logger();
    let (w, h) = (24, 24);
    let mut scissors = loaded(w, h, &disk_rgba(w, h, 12.0, 12.0, 7.0));
    scissors.set_point(Point::new(5, 12)).unwrap();
    let path = scissors
        .search_to(Point::new(19, 12), 1_000)
        .unwrap()
        .unwrap();
    let costs: Vec<f64> = path.iter().map(|&p| scissors.cost(p).unwrap()).collect();
    assert!(costs.windows(2).all(|c| c[0] <= c[1]), "{costs:?}");
    for pair in path.windows(2) {
        assert_eq!(scissors.parent(pair[1]), Some(pair[0]));
    }
}

#[test]
fn trained_search_keeps_to_the_learned_edge() {
    init_logger();
    let (w, h, split) = (20, 48, 10);
    let mut scissors = loaded(w, h, &vertical_step_rgba(w, h, split));
    let column = split - 1;

    scissors.set_point(Point::new(column, 2)).unwrap();
    let accepted = Point::new(column, 40);
    scissors.search_to(accepted, 100).unwrap().unwrap();
    assert_eq!(scissors.do_training(accepted), Ok(true));
    assert!(scissors.training().is_trained());
    assert_eq!(scissors.training().points().len(), 32);
    assert_eq!(scissors.training().points()[0], accepted);

    scissors.set_point(Point::new(column, 10)).unwrap();
    let path = scissors
        .search_to(Point::new(column, 35), 100)
        .unwrap()
        .unwrap();
    assert_eq!(path.len(), 26);
    assert!(path.iter().all(|p| p.x == column), "{path:?}");

    scissors.reset_training();
    assert!(!scissors.training().is_trained());
}

#[test]
fn new_image_resets_training() {
    init_logger();
    let (w, h, split) = (16, 40, 8);
    let rgba = vertical_step_rgba(w, h, split);
    let mut scissors = loaded(w, h, &rgba);
    scissors.set_point(Point::new(split - 1, 2)).unwrap();
    scissors.search_to(Point::new(split - 1, 30), 100).unwrap();
    assert_eq!(scissors.do_training(Point::new(split - 1, 30)), Ok(true));

    scissors.set_data(&rgba).unwrap();
    assert!(!scissors.training().is_trained());
    assert_eq!(scissors.state(), SearchState::Idle);
    assert_eq!(scissors.seed(), None);
}
