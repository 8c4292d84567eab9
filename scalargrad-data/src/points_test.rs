// scalargrad-data/src/points_test.rs

use super::*;

#[test]
fn test_point_set_creation_and_len() -> Result<(), DataError> {
    let points = PointSet::new(vec![0.1, 0.2], vec![0.3, 0.4])?;
    assert_eq!(points.len(), 2);
    assert!(!points.is_empty());

    let empty = PointSet::new(vec![], vec![])?;
    assert!(empty.is_empty());
    Ok(())
}

#[test]
fn test_point_set_length_mismatch() {
    let result = PointSet::new(vec![0.1, 0.2], vec![0.3]);
    assert_eq!(result, Err(DataError::LengthMismatch { xs: 2, ys: 1 }));
}

#[test]
fn test_point_set_get() -> Result<(), DataError> {
    let points = PointSet::new(vec![1.0, 2.0], vec![3.0, 4.0])?;
    assert_eq!(points.get(1)?, (2.0, 4.0));
    assert_eq!(
        points.get(2),
        Err(DataError::IndexOutOfBounds { index: 2, len: 2 })
    );
    let pairs: Vec<(f64, f64)> = points.iter().collect();
    assert_eq!(pairs, vec![(1.0, 3.0), (2.0, 4.0)]);
    Ok(())
}

#[test]
fn test_generated_points_in_unit_square() {
    let points = PointGenerator::default().generate(200);
    assert_eq!(points.len(), 200);
    for (x, y) in points.iter() {
        assert!((0.0..1.0).contains(&x));
        assert!((0.0..1.0).contains(&y));
    }
}

#[test]
fn test_generation_is_reproducible() {
    let a = PointGenerator::seeded(DEFAULT_SEED).generate(10);
    let b = PointGenerator::seeded(DEFAULT_SEED).generate(10);
    assert_eq!(a, b);

    let c = PointGenerator::seeded(DEFAULT_SEED + 1).generate(10);
    assert_ne!(a, c);
}

#[test]
fn test_x_column_drawn_first() {
    // The first n draws of the generator form the x column
    let points = PointGenerator::seeded(11).generate(4);
    let mut rng = StdRng::seed_from_u64(11);
    let expected: Vec<f64> = (0..4).map(|_| rng.gen_range(0.0..1.0)).collect();
    assert_eq!(points.xs(), expected.as_slice());
}
