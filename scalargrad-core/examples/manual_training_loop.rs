//! # Manual Training Loop
//!
//! Trains a 2-8-1 MLP on XOR without the `Trainer`, showing each stage of a step:
//! forward pass, loss, `zero_grad`, backward pass, optimizer update, and
//! discarding the step's graph.
//!
//! `cargo run -p scalargrad-core --example manual_training_loop`

use rand::rngs::StdRng;
use rand::SeedableRng;
use scalargrad_core::nn::{Activation, Module, MseLoss};
use scalargrad_core::{Architecture, Graph, Mlp, Optimizer, ScalarGradError, SgdOptimizer, Value};

fn main() -> Result<(), ScalarGradError> {
    let graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(0);
    let arch = Architecture::new(2, vec![8, 1]).with_output_activation(Activation::Tanh);
    let model = Mlp::new(&graph, &arch, &mut rng)?;
    let mut optimizer = SgdOptimizer::new(model.parameters(), 0.1)?;
    let loss_fn = MseLoss::default();
    println!("{}", model);

    let data = [([0.0, 0.0], -1.0), ([0.0, 1.0], 1.0), ([1.0, 0.0], 1.0), ([1.0, 1.0], -1.0)];
    // Everything created after this point is per-step.
    let checkpoint = graph.checkpoint();

    for epoch in 0..500 {
        let mut predictions = Vec::new();
        let mut targets = Vec::new();
        for (x, y) in &data {
            let xs: Vec<Value> = x.iter().map(|&v| graph.constant(v)).collect();
            predictions.extend(model.forward(&xs)?);
            targets.push(graph.constant(*y));
        }
        let loss = loss_fn.forward(&predictions, &targets)?;

        optimizer.zero_grad();
        loss.backward();
        optimizer.step()?;

        if epoch % 100 == 0 {
            println!("epoch {:>3}: loss = {:.6}", epoch, loss.data());
        }
        graph.rewind(checkpoint);
    }

    for (x, y) in &data {
        println!("{:?} -> {:+.3} (target {:+})", x, model.predict(x)?[0], y);
    }
    Ok(())
}
