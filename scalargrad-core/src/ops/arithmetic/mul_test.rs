use super::*;
use crate::value::Graph;
use approx::assert_relative_eq;

#[test]
fn test_mul_forward_backward() -> Result<(), ScalarGradError> {
    let graph = Graph::new();
    let a = graph.leaf(2.0);
    let b = graph.leaf(-3.0);
    let c = mul_op(&a, &b)?;
    assert_relative_eq!(c.data(), -6.0);
    c.backward();
    assert_relative_eq!(a.grad(), -3.0);
    assert_relative_eq!(b.grad(), 2.0);
    Ok(())
}

#[test]
fn test_mul_square_through_reuse() -> Result<(), ScalarGradError> {
    let graph = Graph::new();
    let a = graph.leaf(-4.0);
    let c = mul_op(&a, &a)?;
    c.backward();
    assert_relative_eq!(c.data(), 16.0);
    assert_relative_eq!(a.grad(), -8.0);
    Ok(())
}

#[test]
fn test_mul_chain() -> Result<(), ScalarGradError> {
    // d = (a * b) * c
    let graph = Graph::new();
    let a = graph.leaf(1.5);
    let b = graph.leaf(2.0);
    let c = graph.leaf(-1.0);
    let ab = mul_op(&a, &b)?;
    let d = mul_op(&ab, &c)?;
    d.backward();
    assert_relative_eq!(d.data(), -3.0);
    assert_relative_eq!(a.grad(), -2.0);
    assert_relative_eq!(b.grad(), -1.5);
    assert_relative_eq!(c.grad(), 3.0);
    assert_relative_eq!(ab.grad(), -1.0);
    Ok(())
}
