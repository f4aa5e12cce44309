use crate::value::{Graph, Value};

/// Checks that `actual` holds approximately the expected data.
/// Panics if lengths differ or any element differs by more than `tolerance`.
pub fn check_values_near(actual: &[Value], expected: &[f64], tolerance: f64) {
    assert_eq!(actual.len(), expected.len(), "Length mismatch");
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        let a = a.data();
        let diff = (a - e).abs();
        if diff > tolerance {
            panic!(
                "Data mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, a, e, diff, tolerance
            );
        }
    }
}

/// Creates one leaf per entry of `data`.
pub fn leaves(graph: &Graph, data: &[f64]) -> Vec<Value> {
    data.iter().map(|&x| graph.leaf(x)).collect()
}
