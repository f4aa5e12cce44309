use crate::autograd::graph::topological_sort;
use crate::value::Value;

/// Back-propagates from `root`, leaving `d(root)/d(node)` in the `grad` of every
/// node `root` depends on.
///
/// 1. Orders the ancestors of `root` topologically.
/// 2. Resets their gradients to zero, then seeds `root` with 1.
/// 3. Walks the ordering in reverse, adding each node's contribution to its
///    operands through the local-gradient rule of its op.
///
/// Nodes outside the ordering keep their gradients. Calling `backward` twice on
/// the same root gives identical gradients.
///
/// # Panics
/// If `root` is a stale handle.
pub fn backward(root: &Value) {
    let mut tape = root.graph().tape_mut();
    let _ = tape.node(root);
    let order = topological_sort(&tape.nodes, root.id());

    for id in &order {
        tape.nodes[id.0].grad = 0.0;
    }
    tape.nodes[root.id().0].grad = 1.0;

    for id in order.iter().rev() {
        let node = &tape.nodes[id.0];
        let (op, operands, output, upstream) = (node.op, node.operands, node.data, node.grad);
        let ids = operands.as_slice();
        if ids.is_empty() {
            continue;
        }
        let mut inputs = [0.0f64; 2];
        for (slot, operand) in inputs.iter_mut().zip(ids) {
            *slot = tape.nodes[operand.0].data;
        }
        let local = op.local_grads(inputs, output);
        for (operand, local) in ids.iter().zip(local) {
            tape.nodes[operand.0].grad += local * upstream;
        }
    }
}

#[cfg(test)]
#[path = "backward_test.rs"]
mod tests;
