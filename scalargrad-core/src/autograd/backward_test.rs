use super::*;
use crate::value::Graph;
use approx::assert_relative_eq;

#[test]
fn test_backward_seeds_root() {
    let graph = Graph::new();
    let a = graph.leaf(3.0);
    a.backward();
    assert_eq!(a.grad(), 1.0);
}

#[test]
fn test_backward_expression() {
    // e = (a * b + c) * f
    let graph = Graph::new();
    let a = graph.leaf(2.0);
    let b = graph.leaf(-3.0);
    let c = graph.leaf(10.0);
    let f = graph.leaf(-2.0);
    let d = &(&a * &b) + &c;
    let e = &d * &f;
    backward(&e);
    assert_relative_eq!(e.data(), -8.0);
    assert_relative_eq!(d.grad(), -2.0);
    assert_relative_eq!(f.grad(), 4.0);
    assert_relative_eq!(c.grad(), -2.0);
    assert_relative_eq!(a.grad(), 6.0);
    assert_relative_eq!(b.grad(), -4.0);
}

#[test]
fn test_backward_accumulates_over_fan_out() {
    // y = a*b + a => dy/da = b + 1
    let graph = Graph::new();
    let a = graph.leaf(-4.0);
    let b = graph.leaf(2.0);
    let y = &(&a * &b) + &a;
    y.backward();
    assert_relative_eq!(a.grad(), 3.0);
    assert_relative_eq!(b.grad(), -4.0);
}

#[test]
fn test_backward_twice_is_idempotent() {
    let graph = Graph::new();
    let a = graph.leaf(0.3);
    let b = graph.leaf(-1.2);
    let y = (&(&a * &b) + &a).tanh();
    y.backward();
    let first = (a.grad(), b.grad());
    y.backward();
    assert_eq!((a.grad(), b.grad()), first);
}

#[test]
fn test_backward_leaves_unrelated_nodes() {
    let graph = Graph::new();
    let a = graph.leaf(1.0);
    let other = graph.leaf(2.0);
    let z = &other * 3.0;
    z.backward();
    assert_relative_eq!(other.grad(), 3.0);

    let y = &a * 5.0;
    y.backward();
    assert_relative_eq!(a.grad(), 5.0);
    // `other` is not an ancestor of `y`.
    assert_relative_eq!(other.grad(), 3.0);
}

#[test]
fn test_backward_tanh_neuron() {
    // o = tanh(x1*w1 + x2*w2 + b)
    let graph = Graph::new();
    let x1 = graph.leaf(2.0);
    let x2 = graph.leaf(0.0);
    let w1 = graph.leaf(-3.0);
    let w2 = graph.leaf(1.0);
    let b = graph.leaf(6.881_373_587_019_543);
    let n = &(&(&x1 * &w1) + &(&x2 * &w2)) + &b;
    let o = n.tanh();
    o.backward();
    assert_relative_eq!(o.data(), 0.7071, epsilon = 1e-4);
    assert_relative_eq!(n.grad(), 0.5, epsilon = 1e-4);
    assert_relative_eq!(x1.grad(), -1.5, epsilon = 1e-4);
    assert_relative_eq!(w1.grad(), 1.0, epsilon = 1e-4);
    assert_relative_eq!(x2.grad(), 0.5, epsilon = 1e-4);
    assert_relative_eq!(w2.grad(), 0.0, epsilon = 1e-4);
}
