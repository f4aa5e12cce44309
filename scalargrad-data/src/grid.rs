use num_traits::Float;
use scalargrad_core::ScalarGradError;

/// `n` evenly spaced points from `start` to `end`, both ends included.
///
/// `n == 1` yields `[start]`, `n == 0` an empty vector. The last point is
/// exactly `end`.
///
/// # Errors
///
/// `InvalidConfiguration` if either bound is not finite or a point index cannot
/// be represented in `F`.
pub fn linspace<F: Float>(start: F, end: F, n: usize) -> Result<Vec<F>, ScalarGradError> {
    if !start.is_finite() || !end.is_finite() {
        return Err(ScalarGradError::InvalidConfiguration(
            "grid bounds must be finite".to_string(),
        ));
    }
    match n {
        0 => return Ok(Vec::new()),
        1 => return Ok(vec![start]),
        _ => {}
    }

    let to_float = |i: usize| {
        F::from(i).ok_or_else(|| {
            ScalarGradError::InvalidConfiguration(format!("grid index {} is not representable", i))
        })
    };
    let span = end - start;
    let last = to_float(n - 1)?;
    let mut points = Vec::with_capacity(n);
    for i in 0..n - 1 {
        points.push(start + span * to_float(i)? / last);
    }
    points.push(end);
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linspace_endpoints() {
        let points = linspace(-1.0_f64, 1.0, 5).unwrap();
        assert_eq!(points.len(), 5);
        assert_eq!(points[0], -1.0);
        assert_eq!(points[4], 1.0);
        assert_relative_eq!(points[1], -0.5);
        assert_relative_eq!(points[2], 0.0);
        assert_relative_eq!(points[3], 0.5);
    }

    #[test]
    fn test_linspace_degenerate_counts() {
        assert!(linspace(0.0_f64, 1.0, 0).unwrap().is_empty());
        assert_eq!(linspace(3.0_f64, 7.0, 1).unwrap(), vec![3.0]);
    }

    #[test]
    fn test_linspace_f32() {
        let points = linspace(0.0_f32, 3.0, 4).unwrap();
        assert_eq!(points, vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_linspace_rejects_non_finite_bounds() {
        assert!(matches!(
            linspace(f64::NAN, 1.0, 3),
            Err(ScalarGradError::InvalidConfiguration(_))
        ));
        assert!(linspace(0.0, f64::INFINITY, 3).is_err());
    }
}
