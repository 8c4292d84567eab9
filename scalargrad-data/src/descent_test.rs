use super::*;
use crate::points::PointGenerator;
use approx::assert_relative_eq;

const START: (f64, f64) = (2.0, -1.0);

#[test]
fn test_default_config() {
    let config = DescentConfig::default();
    assert_eq!(config.epochs, 1000);
    assert_eq!(config.learning_rate, 0.01);
    assert_eq!(config.step, 0.001);
}

#[test]
fn test_history_lengths() -> Result<(), DataError> {
    let points = PointGenerator::default().generate(10);
    let config = DescentConfig {
        epochs: 25,
        ..DescentConfig::default()
    };
    let history = gradient_descent(START, &points, &config, GradientMode::ClosedForm)?;
    assert_eq!(history.losses.len(), 25);
    assert_eq!(history.dl_dx.len(), 25);
    assert_eq!(history.dl_dy.len(), 25);
    assert_eq!(history.xs.len(), 26);
    assert_eq!(history.ys.len(), 26);
    assert_eq!((history.xs[0], history.ys[0]), START);
    Ok(())
}

#[test]
fn test_every_mode_decreases_loss() -> Result<(), DataError> {
    let points = PointGenerator::default().generate(30);
    let config = DescentConfig {
        epochs: 200,
        learning_rate: 0.05,
        step: 1e-4,
    };
    for mode in [
        GradientMode::ClosedForm,
        GradientMode::ForwardDifference,
        GradientMode::Autograd,
    ] {
        let history = gradient_descent(START, &points, &config, mode)?;
        let first = history.losses[0];
        let last = *history.losses.last().expect("non-zero epochs");
        assert!(last < first, "{:?}: loss went from {} to {}", mode, first, last);
    }
    Ok(())
}

#[test]
fn test_autograd_matches_closed_form_trajectory() -> Result<(), DataError> {
    let points = PointGenerator::default().generate(15);
    let config = DescentConfig {
        epochs: 50,
        ..DescentConfig::default()
    };
    let closed = gradient_descent(START, &points, &config, GradientMode::ClosedForm)?;
    let engine = gradient_descent(START, &points, &config, GradientMode::Autograd)?;

    let (cx, cy) = closed.final_point().expect("positions recorded");
    let (ex, ey) = engine.final_point().expect("positions recorded");
    assert_relative_eq!(cx, ex, epsilon = 1e-9);
    assert_relative_eq!(cy, ey, epsilon = 1e-9);
    Ok(())
}

#[test]
fn test_zero_epochs() -> Result<(), DataError> {
    let points = PointGenerator::default().generate(3);
    let config = DescentConfig {
        epochs: 0,
        ..DescentConfig::default()
    };
    let history = gradient_descent(START, &points, &config, GradientMode::Autograd)?;
    assert!(history.losses.is_empty());
    assert_eq!(history.final_point(), Some(START));
    Ok(())
}

#[test]
fn test_invalid_learning_rate() {
    let points = PointGenerator::default().generate(3);
    let config = DescentConfig {
        learning_rate: f64::NAN,
        ..DescentConfig::default()
    };
    assert!(matches!(
        gradient_descent(START, &points, &config, GradientMode::ClosedForm),
        Err(DataError::InvalidConfig(_))
    ));
}

#[test]
fn test_empty_points() {
    let empty = PointSet::new(vec![], vec![]).expect("same lengths");
    let result = gradient_descent(START, &empty, &DescentConfig::default(), GradientMode::ClosedForm);
    assert_eq!(result, Err(DataError::EmptyPointSet));
}
