use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_uniform_default_range() -> Result<(), ScalarGradError> {
    let sampler = Initializer::default().sampler()?;
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..1000 {
        let x = sampler.sample(&mut rng);
        assert!((-1.0..1.0).contains(&x), "sample {} out of range", x);
    }
    Ok(())
}

#[test]
fn test_same_seed_same_samples() -> Result<(), ScalarGradError> {
    let sampler = Initializer::Normal { mean: 0.0, std: 0.5 }.sampler()?;
    let mut rng_a = StdRng::seed_from_u64(42);
    let mut rng_b = StdRng::seed_from_u64(42);
    let a: Vec<f64> = (0..16).map(|_| sampler.sample(&mut rng_a)).collect();
    let b: Vec<f64> = (0..16).map(|_| sampler.sample(&mut rng_b)).collect();
    assert_eq!(a, b);
    Ok(())
}

#[test]
fn test_constant() -> Result<(), ScalarGradError> {
    let sampler = Initializer::Constant(0.1).sampler()?;
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(sampler.sample(&mut rng), 0.1);
    Ok(())
}

#[test]
fn test_invalid_initializers() {
    let bad = [
        Initializer::Uniform { low: 1.0, high: 1.0 },
        Initializer::Uniform { low: 2.0, high: -2.0 },
        Initializer::Uniform { low: f64::NEG_INFINITY, high: 0.0 },
        Initializer::Normal { mean: 0.0, std: -1.0 },
        Initializer::Normal { mean: f64::NAN, std: 1.0 },
        Initializer::Constant(f64::INFINITY),
    ];
    for init in bad {
        let err = init.sampler().unwrap_err();
        assert!(
            matches!(err, ScalarGradError::InvalidInitializer(_)),
            "{:?} gave {:?}",
            init,
            err
        );
    }
}
