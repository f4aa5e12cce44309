//! JavaScript exports. Progress and results go to `console.log`.

use crate::{train_with_config, SineConfig};
use scalargrad_core::train::{ProgressEvent, MAX_TRAINING_STEPS};
use scalargrad_core::ScalarGradError;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    fn alert(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = log)]
    fn console_log_str(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => (console_log_str(&format_args!($($t)*).to_string()))
}

fn to_js(error: ScalarGradError) -> JsValue {
    JsValue::from_str(&error.to_string())
}

#[wasm_bindgen]
pub fn greet() {
    alert("Hello, scalargrad!");
}

/// Trains the default sine model and logs progress and probe results.
#[wasm_bindgen]
pub fn testing_sin() {
    let config = SineConfig::default();
    console_log!("Training 1 x {:?} x 1 on {} samples", config.hidden, config.samples);
    let mut reporter = |event: &ProgressEvent| console_log!("{}", event);
    match train_with_config(&config, &mut reporter) {
        Ok(summary) => console_log!("{}", summary),
        Err(e) => console_log!("Training failed: {}", e),
    }
}

/// Trains the default sine model for `steps` steps and returns the final loss.
#[wasm_bindgen]
pub fn train_steps(steps: i32) -> Result<f64, JsValue> {
    let steps = usize::try_from(steps).map_err(|_| {
        to_js(ScalarGradError::InvalidStepCount {
            steps: i64::from(steps),
            max: MAX_TRAINING_STEPS,
        })
    })?;
    let config = SineConfig::default().with_steps(steps);
    let mut reporter = |event: &ProgressEvent| console_log!("{}", event);
    let summary = train_with_config(&config, &mut reporter).map_err(to_js)?;
    Ok(summary.final_loss)
}
