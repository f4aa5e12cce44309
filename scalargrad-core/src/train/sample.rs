/// One training example: an input vector and the expected output vector.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub input: Vec<f64>,
    pub target: Vec<f64>,
}

impl Sample {
    pub fn new(input: Vec<f64>, target: Vec<f64>) -> Self {
        Sample { input, target }
    }

    /// A one-input, one-output example.
    pub fn scalar(x: f64, y: f64) -> Self {
        Sample::new(vec![x], vec![y])
    }
}
