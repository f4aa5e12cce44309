use rand::rngs::StdRng;
use rand::SeedableRng;
use scalargrad_core::{Architecture, Graph, Mlp, Sample};
use std::f64::consts::PI;

// Added allow(dead_code) because usage across different test crates isn't detected easily.
#[allow(dead_code)]
pub fn sine_samples(n: usize) -> Vec<Sample> {
    (0..n)
        .map(|i| {
            let x = -PI + 2.0 * PI * i as f64 / (n - 1) as f64;
            Sample::scalar(x, x.sin())
        })
        .collect()
}

#[allow(dead_code)]
pub fn sine_model(graph: &Graph, seed: u64) -> Mlp {
    let mut rng = StdRng::seed_from_u64(seed);
    Mlp::new(graph, &Architecture::new(1, vec![16, 16, 1]), &mut rng)
        .expect("valid sine architecture")
}
