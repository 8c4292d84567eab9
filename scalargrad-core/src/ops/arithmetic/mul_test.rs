#[cfg(test)]
mod tests {
    use crate::error::ScalarGradError;
    use crate::graph::Graph;
    use crate::ops::arithmetic::mul_op;
    use crate::types::OperatorTag;
    use crate::utils::testing::check_grads_near;

    #[test]
    fn test_mul_forward() -> Result<(), ScalarGradError> {
        let graph = Graph::new();
        let a = graph.leaf(2.0);
        let b = graph.leaf(-4.0);
        let c = mul_op(a, b)?;
        assert_eq!(c.value(), -8.0);
        assert_eq!(c.op(), OperatorTag::Mul);
        Ok(())
    }

    #[test]
    fn test_mul_backward() -> Result<(), ScalarGradError> {
        let graph = Graph::new();
        let a = graph.leaf(2.0);
        let b = graph.leaf(-4.0);
        let c = (a * b)?;
        c.backward();
        check_grads_near(&[a, b], &[-4.0, 2.0], 0.0);
        Ok(())
    }

    #[test]
    fn test_mul_square_counts_both_slots() -> Result<(), ScalarGradError> {
        let graph = Graph::new();
        let x = graph.leaf(3.0);
        let y = (x * x)?;
        assert_eq!(y.value(), 9.0);
        y.backward();
        assert_eq!(x.gradient(), 6.0);
        Ok(())
    }

    #[test]
    fn test_mul_reflected() -> Result<(), ScalarGradError> {
        let graph = Graph::new();
        let x = graph.leaf(1.5);
        let y = (4 * x)?;
        assert_eq!(y.value(), 6.0);
        y.backward();
        assert_eq!(x.gradient(), 4.0);
        Ok(())
    }
}
