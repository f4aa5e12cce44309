use super::*;
use crate::value::Graph;
use approx::assert_relative_eq;

// Helper to create a simple parameter
fn create_param(graph: &Graph, data: f64) -> Parameter {
    Parameter::new_unnamed(graph.leaf(data)).unwrap()
}

#[test]
fn test_sgd_basic_step() -> Result<(), ScalarGradError> {
    let graph = Graph::new();
    let a = create_param(&graph, 1.0);
    let b = create_param(&graph, -2.0);
    // loss = 3a + b^2  => grads (3, 2b)
    let loss = &(&*a * 3.0) + &b.pow(2.0);
    loss.backward();

    let mut optimizer = SgdOptimizer::new([&a, &b], 0.1)?;
    optimizer.step()?;

    assert_relative_eq!(a.data(), 1.0 - 0.1 * 3.0, epsilon = 1e-12);
    assert_relative_eq!(b.data(), -2.0 - 0.1 * -4.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_sgd_weight_decay() -> Result<(), ScalarGradError> {
    let graph = Graph::new();
    let a = create_param(&graph, 2.0);
    let loss = &*a * 0.5;
    loss.backward();

    let mut optimizer = SgdOptimizer::new([&a], 0.1)?.with_weight_decay(0.01)?;
    optimizer.step()?;
    // d_p = 0.5 + 0.01 * 2
    assert_relative_eq!(a.data(), 2.0 - 0.1 * 0.52, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_sgd_momentum() -> Result<(), ScalarGradError> {
    let graph = Graph::new();
    let a = create_param(&graph, 0.0);
    let checkpoint = graph.checkpoint();
    let mut optimizer = SgdOptimizer::new([&a], 1.0)?.with_momentum(0.9)?;

    // Constant gradient of 1 on every step.
    let mut expected = 0.0;
    let mut buf = 0.0;
    for _ in 0..3 {
        let loss = &*a * 1.0;
        optimizer.zero_grad();
        loss.backward();
        optimizer.step()?;
        graph.rewind(checkpoint);
        buf = 0.9 * buf + 1.0;
        expected -= buf;
        assert_relative_eq!(a.data(), expected, epsilon = 1e-12);
    }
    assert_relative_eq!(a.data(), -(1.0 + 1.9 + 2.71), epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_sgd_zero_grad() -> Result<(), ScalarGradError> {
    let graph = Graph::new();
    let a = create_param(&graph, 1.0);
    let loss = &*a * 4.0;
    loss.backward();
    let mut optimizer = SgdOptimizer::new([&a], 0.1)?;
    optimizer.zero_grad();
    assert_eq!(a.grad(), 0.0);
    optimizer.step()?;
    assert_eq!(a.data(), 1.0);
    Ok(())
}

#[test]
fn test_sgd_non_finite_gradient_is_atomic() -> Result<(), ScalarGradError> {
    let graph = Graph::new();
    let b = create_param(&graph, 1.0);
    let a = create_param(&graph, 0.0);
    // d/da sqrt(a) at 0 is infinite.
    let loss = &(&*b * 2.0) + &a.pow(0.5);
    loss.backward();
    assert!(a.grad().is_infinite());

    let mut optimizer = SgdOptimizer::new([&b, &a], 0.1)?;
    let err = optimizer.step().unwrap_err();
    assert!(err.is_numeric());
    // `b` comes first but was not touched.
    assert_eq!(b.data(), 1.0);
    assert_eq!(a.data(), 0.0);
    Ok(())
}

#[test]
fn test_sgd_invalid_hyperparameters() {
    let graph = Graph::new();
    let a = create_param(&graph, 1.0);
    for lr in [0.0, -0.1, f64::NAN, f64::INFINITY] {
        let err = SgdOptimizer::new([&a], lr).unwrap_err();
        assert!(matches!(err, ScalarGradError::InvalidLearningRate(_)));
    }
    assert!(SgdOptimizer::new([&a], 0.1).unwrap().with_momentum(1.0).is_err());
    assert!(SgdOptimizer::new([&a], 0.1).unwrap().with_weight_decay(-1.0).is_err());

    let mut optimizer = SgdOptimizer::new([&a], 0.1).unwrap();
    assert!(optimizer.set_learning_rate(0.0).is_err());
    optimizer.set_learning_rate(0.5).unwrap();
    assert_eq!(optimizer.learning_rate(), 0.5);
    assert_eq!(optimizer.parameters().len(), 1);
}
