use crate::value_data::{NodeId, ValueData};

/// Builds a topological ordering of every node reachable from `root`.
///
/// Depth-first post-order with operands visited in operand order: each node
/// appears once, after all of its operands, and the ordering depends only on the
/// graph structure. Iterative, so long chains cannot overflow the call stack.
///
/// Operands always precede their consumer in the arena, so indices reachable
/// from `root` never exceed `root`.
pub(crate) fn topological_sort(nodes: &[ValueData], root: NodeId) -> Vec<NodeId> {
    let mut visited = vec![false; root.0 + 1];
    let mut order = Vec::new();
    // (node, index of the next operand to visit)
    let mut stack: Vec<(NodeId, usize)> = vec![(root, 0)];
    visited[root.0] = true;

    while let Some(frame) = stack.last_mut() {
        let (id, cursor) = *frame;
        let operands = nodes[id.0].operands;
        match operands.as_slice().get(cursor) {
            Some(&operand) => {
                frame.1 += 1;
                if !visited[operand.0] {
                    visited[operand.0] = true;
                    stack.push((operand, 0));
                }
            }
            None => {
                order.push(id);
                stack.pop();
            }
        }
    }
    order
}
