use super::*;
use crate::utils::testing::leaves;
use crate::value::Graph;
use approx::assert_relative_eq;

#[test]
fn test_mse_mean() -> Result<(), ScalarGradError> {
    let graph = Graph::new();
    let pred = leaves(&graph, &[1.0, 2.0, 4.0]);
    let target = leaves(&graph, &[1.0, 0.0, 1.0]);
    let loss = MseLoss::default().forward(&pred, &target)?;
    // (0 + 4 + 9) / 3
    assert_relative_eq!(loss.data(), 13.0 / 3.0, epsilon = 1e-12);

    loss.backward();
    // d/dp_i = 2 (p_i - t_i) / n
    assert_relative_eq!(pred[0].grad(), 0.0);
    assert_relative_eq!(pred[1].grad(), 4.0 / 3.0, epsilon = 1e-12);
    assert_relative_eq!(pred[2].grad(), 2.0, epsilon = 1e-12);
    assert_relative_eq!(target[2].grad(), -2.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_mse_sum() -> Result<(), ScalarGradError> {
    let graph = Graph::new();
    let pred = leaves(&graph, &[0.5, -0.5]);
    let target = leaves(&graph, &[0.0, 0.0]);
    let loss = MseLoss::new(Reduction::Sum).forward(&pred, &target)?;
    assert_relative_eq!(loss.data(), 0.5);
    Ok(())
}

#[test]
fn test_mse_length_mismatch() {
    let graph = Graph::new();
    let pred = leaves(&graph, &[0.5, -0.5]);
    let target = leaves(&graph, &[0.0]);
    let err = MseLoss::default().forward(&pred, &target).unwrap_err();
    assert_eq!(err, ScalarGradError::InputWidthMismatch { expected: 1, actual: 2 });
}

#[test]
fn test_mse_empty() {
    let err = MseLoss::default().forward(&[], &[]).unwrap_err();
    assert!(matches!(err, ScalarGradError::InvalidConfiguration(_)));
}

#[test]
fn test_reduction_from_str() {
    assert_eq!("SUM".parse::<Reduction>(), Ok(Reduction::Sum));
    assert!("none".parse::<Reduction>().is_err());
}
