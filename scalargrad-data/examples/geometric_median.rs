//! Approximates the geometric median of random points with gradient descent,
//! once per gradient source, and compares the results.

use scalargrad_data::{
    closed_form_gradient, engine_gradient, forward_difference_gradient, gradient_descent,
    DataError, DescentConfig, GradientMode, PointGenerator,
};

fn main() -> Result<(), DataError> {
    env_logger::init();

    let points = PointGenerator::default().generate(100);
    let start = (0.0, 0.0);
    let config = DescentConfig::default();

    println!("--- Gradient at the start point ---");
    println!("closed form      : {:?}", closed_form_gradient(start, &points)?);
    println!("forward diff     : {:?}", forward_difference_gradient(start, &points, config.step)?);
    println!("autograd engine  : {:?}", engine_gradient(start, &points)?);

    println!("--- Gradient descent ({} epochs) ---", config.epochs);
    for mode in [
        GradientMode::ClosedForm,
        GradientMode::ForwardDifference,
        GradientMode::Autograd,
    ] {
        let history = gradient_descent(start, &points, &config, mode)?;
        let first = history.losses.first().copied().unwrap_or_default();
        let last = history.losses.last().copied().unwrap_or_default();
        if let Some((x, y)) = history.final_point() {
            println!(
                "{:?}: loss {:.5} -> {:.5}, median estimate ({:.4}, {:.4})",
                mode, first, last, x, y
            );
        }
    }
    Ok(())
}
