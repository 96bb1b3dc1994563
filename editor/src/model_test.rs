#![allow(clippy::float_cmp)]

use super::*;

fn model_of(coords: &[(f64, f64)]) -> PointModel {
    let mut model = PointModel::new();
    for &(x, y) in coords {
        model.add(Point::new(x, y));
    }
    model
}

// --- add ---

#[test]
fn new_model_is_empty() {
    let model = PointModel::new();
    assert!(model.is_empty());
    assert_eq!(model.len(), 0);
}

#[test]
fn add_appends_at_the_end() {
    let mut model = model_of(&[(0.0, 0.0), (1.0, 0.0)]);
    model.add(Point::new(5.0, 5.0));
    assert_eq!(model.len(), 3);
    assert_eq!(model.points()[2], Point::new(5.0, 5.0));
}

#[test]
fn add_preserves_insertion_order() {
    let model = model_of(&[(3.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
    let xs: Vec<f64> = model.points().iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![3.0, 1.0, 2.0]);
}

#[test]
fn add_does_not_deduplicate() {
    let model = model_of(&[(1.0, 1.0), (1.0, 1.0)]);
    assert_eq!(model.len(), 2);
}

// --- move_at ---

#[test]
fn move_at_replaces_in_place() {
    let mut model = model_of(&[(0.0, 0.0), (1.0, 0.0)]);
    assert!(model.move_at(1, Point::new(9.0, 9.0)));
    assert_eq!(model.points()[1], Point::new(9.0, 9.0));
    assert_eq!(model.len(), 2);
}

#[test]
fn move_at_out_of_bounds_is_a_no_op() {
    let mut model = model_of(&[(0.0, 0.0)]);
    assert!(!model.move_at(1, Point::new(9.0, 9.0)));
    assert_eq!(model.points()[0], Point::new(0.0, 0.0));
}

#[test]
fn move_at_on_empty_model_is_a_no_op() {
    let mut model = PointModel::new();
    assert!(!model.move_at(0, Point::new(1.0, 1.0)));
    assert!(model.is_empty());
}

// --- remove_at ---

#[test]
fn remove_at_shifts_later_indices_down() {
    let mut model = model_of(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
    assert!(model.remove_at(1));
    assert_eq!(model.len(), 2);
    assert_eq!(model.points()[0], Point::new(0.0, 0.0));
    assert_eq!(model.points()[1], Point::new(2.0, 0.0));
}

#[test]
fn remove_at_last_index() {
    let mut model = model_of(&[(0.0, 0.0), (1.0, 0.0)]);
    assert!(model.remove_at(1));
    assert_eq!(model.len(), 1);
}

#[test]
fn remove_at_out_of_bounds_is_a_no_op() {
    let mut model = model_of(&[(0.0, 0.0)]);
    assert!(!model.remove_at(1));
    assert_eq!(model.len(), 1);
}

// --- nearest ---

#[test]
fn nearest_returns_first_match_not_closest() {
    // Both points are inside the radius of the query; the earlier index
    // wins even though the later one is exactly at the query.
    let model = model_of(&[(0.0, 0.0), (0.05, 0.0)]);
    assert_eq!(model.nearest(Point::new(0.05, 0.0), 0.1), Some(0));
}

#[test]
fn nearest_misses_outside_radius() {
    let model = model_of(&[(0.0, 0.0)]);
    assert_eq!(model.nearest(Point::new(1.0, 0.0), 0.5), None);
}

#[test]
fn nearest_radius_is_exclusive() {
    let model = model_of(&[(0.0, 0.0)]);
    assert_eq!(model.nearest(Point::new(0.5, 0.0), 0.5), None);
    assert_eq!(model.nearest(Point::new(0.499, 0.0), 0.5), Some(0));
}

#[test]
fn nearest_on_empty_model() {
    let model = PointModel::new();
    assert_eq!(model.nearest(Point::new(0.0, 0.0), 10.0), None);
}

#[test]
fn nearest_skips_points_outside_radius() {
    let model = model_of(&[(10.0, 10.0), (0.0, 0.0)]);
    assert_eq!(model.nearest(Point::new(0.1, 0.0), 0.5), Some(1));
}
