#[cfg(test)]
mod tests {
    use crate::error::ScalarGradError;
    use crate::graph::Graph;
    use crate::ops::arithmetic::{rsub_op, sub_op};
    use crate::utils::testing::check_grads_near;

    #[test]
    fn test_sub_nodes() -> Result<(), ScalarGradError> {
        let graph = Graph::new();
        let a = graph.leaf(5.0);
        let b = graph.leaf(3.5);
        let c = sub_op(a, b)?;
        assert_eq!(c.value(), 1.5);
        c.backward();
        check_grads_near(&[a, b], &[1.0, -1.0], 0.0);
        Ok(())
    }

    #[test]
    fn test_sub_reflected_keeps_operand_order() -> Result<(), ScalarGradError> {
        let graph = Graph::new();
        let x = graph.leaf(2.0);
        let c = (5.0 - x)?;
        assert_eq!(c.value(), 3.0);
        // leaf(5) - x, not x - 5
        assert_eq!(c.children()[0].value(), 5.0);
        assert!(c.children()[1].same_node(&x));

        c.backward();
        assert_eq!(x.gradient(), -1.0);
        Ok(())
    }

    #[test]
    fn test_rsub_method_and_op() -> Result<(), ScalarGradError> {
        let graph = Graph::new();
        let x = graph.leaf(4.0);
        assert_eq!(x.rsub(1)?.value(), -3.0);
        assert_eq!(rsub_op(10, x)?.value(), 6.0);
        Ok(())
    }

    #[test]
    fn test_sub_same_node() -> Result<(), ScalarGradError> {
        let graph = Graph::new();
        let x = graph.leaf(4.0);
        let y = (x - x)?;
        assert_eq!(y.value(), 0.0);
        y.backward();
        assert_eq!(x.gradient(), 0.0);
        Ok(())
    }
}
