use crate::error::ScalarGradError;
use crate::ops::Op;
use crate::value::Value;

/// Negates a value: `-a`.
pub fn neg_op(a: &Value) -> Result<Value, ScalarGradError> {
    a.graph().apply(Op::Neg, &[a])
}

pub(crate) fn forward(a: f64) -> f64 {
    -a
}

pub(crate) fn local_grad(_a: f64) -> f64 {
    -1.0
}
