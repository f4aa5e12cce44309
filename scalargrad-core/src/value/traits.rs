//! Operator sugar for [`Value`].
//!
//! `&a + &b`, `&a * 2.0`, `1.0 - &a` and friends call the fallible `_op`
//! functions and panic on error. A bare `f64` operand becomes a constant leaf in
//! the graph of the `Value` operand.

use crate::ops::arithmetic::{add_op, div_op, mul_op, neg_op, sub_op};
use crate::value::Value;
use std::ops::{Add, Div, Mul, Neg, Sub};

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op_fn:ident, $name:literal) => {
        impl<'a, 'b> $trait<&'b Value> for &'a Value {
            type Output = Value;

            fn $method(self, rhs: &'b Value) -> Value {
                $op_fn(self, rhs)
                    .unwrap_or_else(|e| panic!(concat!("Value ", $name, " operation failed: {:?}"), e))
            }
        }

        impl $trait<Value> for Value {
            type Output = Value;

            fn $method(self, rhs: Value) -> Value {
                (&self).$method(&rhs)
            }
        }

        impl<'b> $trait<&'b Value> for Value {
            type Output = Value;

            fn $method(self, rhs: &'b Value) -> Value {
                (&self).$method(rhs)
            }
        }

        impl<'a> $trait<f64> for &'a Value {
            type Output = Value;

            fn $method(self, rhs: f64) -> Value {
                let rhs = self.graph().constant(rhs);
                self.$method(&rhs)
            }
        }

        impl $trait<f64> for Value {
            type Output = Value;

            fn $method(self, rhs: f64) -> Value {
                (&self).$method(rhs)
            }
        }

        impl<'a> $trait<&'a Value> for f64 {
            type Output = Value;

            fn $method(self, rhs: &'a Value) -> Value {
                let lhs = rhs.graph().constant(self);
                (&lhs).$method(rhs)
            }
        }

        impl $trait<Value> for f64 {
            type Output = Value;

            fn $method(self, rhs: Value) -> Value {
                self.$method(&rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, add_op, "add");
impl_binary_op!(Sub, sub, sub_op, "sub");
impl_binary_op!(Mul, mul, mul_op, "mul");
impl_binary_op!(Div, div, div_op, "div");

impl<'a> Neg for &'a Value {
    type Output = Value;

    fn neg(self) -> Value {
        neg_op(self).unwrap_or_else(|e| panic!("Value neg operation failed: {:?}", e))
    }
}

impl Neg for Value {
    type Output = Value;

    fn neg(self) -> Value {
        -&self
    }
}
