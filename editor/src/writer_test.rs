#![allow(clippy::float_cmp)]

use super::*;

fn model_of(coords: &[(f64, f64)]) -> PointModel {
    let mut model = PointModel::new();
    for &(x, y) in coords {
        model.add(Point::new(x, y));
    }
    model
}

fn written(model: &PointModel) -> String {
    let mut buf = Vec::new();
    write_to(&mut buf, model).unwrap();
    String::from_utf8(buf).unwrap()
}

// --- write_to ---

#[test]
fn writes_one_normalized_line_per_point() {
    let model = model_of(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
    assert_eq!(written(&model), "0 0\n1 0\n1 1\n");
}

#[test]
fn writes_in_insertion_order() {
    let model = model_of(&[(30.0, 0.0), (10.0, 0.0), (20.0, 0.0)]);
    assert_eq!(written(&model), "3 0\n1 0\n2 0\n");
}

#[test]
fn writes_fractional_and_negative_values() {
    let model = model_of(&[(3.0, -7.0), (-15.0, 5.0)]);
    assert_eq!(written(&model), "0.3 -0.7\n-1.5 0.5\n");
}

#[test]
fn empty_model_writes_nothing() {
    assert_eq!(written(&PointModel::new()), "");
}

// --- read_from ---

#[test]
fn read_is_the_inverse_of_write() {
    let model = model_of(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (-5.0, 25.0)]);
    let back = read_from(written(&model).as_bytes()).unwrap();

    assert_eq!(back.len(), model.len());
    for (a, b) in back.points().iter().zip(model.points()) {
        assert_eq!(a, b);
    }
}

#[test]
fn read_scales_file_units_back_to_world_units() {
    let back = read_from("1 0.5\n".as_bytes()).unwrap();
    assert_eq!(back.points()[0], Point::new(10.0, 5.0));
}

#[test]
fn read_skips_blank_lines() {
    let back = read_from("0 0\n\n1 0\n".as_bytes()).unwrap();
    assert_eq!(back.len(), 2);
}

#[test]
fn read_rejects_a_line_with_one_number() {
    let err = read_from("0 0\n1\n".as_bytes()).unwrap_err();
    assert!(matches!(err, WriterError::Malformed { line: 2 }));
}

#[test]
fn read_rejects_a_line_with_three_numbers() {
    let err = read_from("0 0 0\n".as_bytes()).unwrap_err();
    assert!(matches!(err, WriterError::Malformed { line: 1 }));
}

#[test]
fn read_rejects_non_numeric_input() {
    let err = read_from("zero one\n".as_bytes()).unwrap_err();
    assert!(matches!(err, WriterError::Malformed { line: 1 }));
}

#[test]
fn malformed_error_displays_the_line_number() {
    let err = read_from("0 0\nbad\n".as_bytes()).unwrap_err();
    assert_eq!(err.to_string(), "malformed point on line 2");
}

// --- file round trip ---

#[test]
fn write_then_read_through_a_real_file() {
    let path = std::env::temp_dir().join("modeler_writer_roundtrip.model");
    let model = model_of(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);

    write(&path, &model).unwrap();
    let back = read(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(back.len(), 3);
    assert_eq!(back.points()[2], Point::new(10.0, 10.0));
}

#[test]
fn write_overwrites_an_existing_file() {
    let path = std::env::temp_dir().join("modeler_writer_overwrite.model");

    write(&path, &model_of(&[(10.0, 10.0), (20.0, 20.0)])).unwrap();
    write(&path, &model_of(&[(30.0, 0.0)])).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(contents, "3 0\n");
}

#[test]
fn write_to_an_unopenable_destination_surfaces_io_error() {
    let path = std::env::temp_dir().join("no_such_dir_modeler/out.model");
    let err = write(&path, &PointModel::new()).unwrap_err();
    assert!(matches!(err, WriterError::Io(_)));
}
