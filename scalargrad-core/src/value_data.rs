use crate::ops::Op;
use std::fmt;

/// Index of a node inside a [`Graph`](crate::value::Graph) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Producers of a node, in operand order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operands {
    None,
    Unary(NodeId),
    Binary([NodeId; 2]),
}

impl Operands {
    pub(crate) fn as_slice(&self) -> &[NodeId] {
        match self {
            Operands::None => &[],
            Operands::Unary(id) => std::slice::from_ref(id),
            Operands::Binary(ids) => &ids[..],
        }
    }
}

/// Storage of a single scalar node.
///
/// `ValueData` lives inside the graph arena; user code manipulates it through
/// [`Value`](crate::value::Value) handles only.
#[derive(Debug, Clone)]
pub(crate) struct ValueData {
    pub(crate) data: f64,
    pub(crate) grad: f64,
    pub(crate) op: Op,
    pub(crate) operands: Operands,
    /// Arena epoch this node was created in.
    pub(crate) epoch: u32,
    pub(crate) label: Option<String>,
}

impl ValueData {
    pub(crate) fn leaf(data: f64, epoch: u32) -> Self {
        ValueData {
            data,
            grad: 0.0,
            op: Op::Leaf,
            operands: Operands::None,
            epoch,
            label: None,
        }
    }

    pub(crate) fn new(data: f64, op: Op, operands: Operands, epoch: u32) -> Self {
        ValueData {
            data,
            grad: 0.0,
            op,
            operands,
            epoch,
            label: None,
        }
    }

    pub(crate) fn is_leaf(&self) -> bool {
        matches!(self.op, Op::Leaf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operands_slice() {
        let a = NodeId(0);
        let b = NodeId(4);
        assert!(Operands::None.as_slice().is_empty());
        assert_eq!(Operands::Unary(b).as_slice(), &[b]);
        assert_eq!(Operands::Binary([a, b]).as_slice(), &[a, b]);
    }

    #[test]
    fn test_leaf_construction() {
        let node = ValueData::leaf(2.5, 3);
        assert!(node.is_leaf());
        assert_eq!(node.grad, 0.0);
        assert_eq!(node.epoch, 3);
        assert_eq!(NodeId(7).to_string(), "#7");
    }
}
