//! # Scalar Values and the Graph Arena
//!
//! Every scalar taking part in a differentiable computation is a node stored in a
//! [`Graph`] arena. A [`Value`] is a cheap handle to one of those nodes: cloning a
//! `Value` never copies the node, and operations on values append new nodes to the
//! arena they share.
//!
//! Long-lived leaves (model parameters) are created first and form the persistent
//! prefix of the arena. A training step records a [`Checkpoint`] once, builds its
//! forward graph on top of it, and calls [`Graph::rewind`] to throw that graph away.
//! Each rewind bumps the arena epoch; a handle to a discarded node is *stale* and any
//! access through it panics, like indexing a `Vec` out of bounds.

use crate::error::ScalarGradError;
use crate::ops::Op;
use crate::value_data::{NodeId, Operands, ValueData};
use std::cell::{Ref, RefCell, RefMut};
use std::fmt::{self, Write as _};
use std::rc::Rc;

mod traits;

/// Node storage shared by every handle of a [`Graph`].
#[derive(Debug, Default)]
pub(crate) struct Tape {
    pub(crate) nodes: Vec<ValueData>,
    pub(crate) epoch: u32,
}

impl Tape {
    /// Returns the node behind `value`, panicking if the handle is stale.
    pub(crate) fn node(&self, value: &Value) -> &ValueData {
        match self.nodes.get(value.id.0) {
            Some(node) if node.epoch == value.epoch => node,
            _ => stale_handle(value),
        }
    }

    pub(crate) fn node_mut(&mut self, value: &Value) -> &mut ValueData {
        match self.nodes.get_mut(value.id.0) {
            Some(node) if node.epoch == value.epoch => node,
            _ => stale_handle(value),
        }
    }

    fn is_live(&self, value: &Value) -> bool {
        matches!(self.nodes.get(value.id.0), Some(node) if node.epoch == value.epoch)
    }
}

fn stale_handle(value: &Value) -> ! {
    panic!(
        "stale Value handle {} (epoch {}): its node was discarded by Graph::rewind",
        value.id, value.epoch
    )
}

/// Recorded arena length, used to discard every node created after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    len: usize,
}

impl Checkpoint {
    /// Number of nodes that survive a rewind to this checkpoint.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Arena holding the nodes of a scalar computation graph.
///
/// `Graph` is a reference-counted handle: clones share the same arena. It is
/// `!Send` and `!Sync`; a graph lives on the thread that created it.
#[derive(Clone, Default)]
pub struct Graph {
    tape: Rc<RefCell<Tape>>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Graph::default()
    }

    /// Creates an empty graph with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Graph {
            tape: Rc::new(RefCell::new(Tape {
                nodes: Vec::with_capacity(capacity),
                epoch: 0,
            })),
        }
    }

    /// Appends a leaf node holding `data`.
    pub fn leaf(&self, data: f64) -> Value {
        let mut tape = self.tape_mut();
        let id = NodeId(tape.nodes.len());
        let epoch = tape.epoch;
        tape.nodes.push(ValueData::leaf(data, epoch));
        Value {
            graph: self.clone(),
            id,
            epoch,
        }
    }

    /// Appends a leaf used as a fixed operand (inputs, targets, literals).
    ///
    /// Storage is identical to [`Graph::leaf`]; the distinction is only in intent.
    pub fn constant(&self, data: f64) -> Value {
        self.leaf(data)
    }

    pub fn zero(&self) -> Value {
        self.constant(0.0)
    }

    pub fn one(&self) -> Value {
        self.constant(1.0)
    }

    /// Number of nodes currently stored.
    pub fn len(&self) -> usize {
        self.tape().nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tape().nodes.is_empty()
    }

    /// Current arena epoch; incremented by every [`Graph::rewind`].
    pub fn epoch(&self) -> u32 {
        self.tape().epoch
    }

    /// Records the current arena length.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint { len: self.len() }
    }

    /// Discards every node created after `checkpoint` and starts a new epoch.
    ///
    /// Handles to discarded nodes become stale. Nodes before the checkpoint keep
    /// their data and gradients.
    pub fn rewind(&self, checkpoint: Checkpoint) {
        let mut tape = self.tape_mut();
        let before = tape.nodes.len();
        tape.nodes.truncate(checkpoint.len);
        tape.epoch = tape.epoch.wrapping_add(1);
        log::trace!(
            "Graph rewound from {} to {} nodes (epoch {})",
            before,
            tape.nodes.len(),
            tape.epoch
        );
    }

    /// Resets the gradient of every node in the arena to zero.
    pub fn zero_grad(&self) {
        for node in self.tape_mut().nodes.iter_mut() {
            node.grad = 0.0;
        }
    }

    /// Returns `true` if both handles share the same arena.
    pub fn ptr_eq(&self, other: &Graph) -> bool {
        Rc::ptr_eq(&self.tape, &other.tape)
    }

    /// Renders the subgraph below `root` as an indented tree, one node per line.
    ///
    /// A node reachable along several paths is expanded once; later references
    /// print as `#id (shared)`.
    pub fn render(&self, root: &Value) -> String {
        let tape = self.tape();
        let _ = tape.node(root);
        let mut expanded = vec![false; root.id.0 + 1];
        let mut out = String::new();
        let mut stack = vec![(root.id, 0usize)];
        while let Some((id, depth)) = stack.pop() {
            let node = &tape.nodes[id.0];
            let indent = "  ".repeat(depth);
            if expanded[id.0] {
                let _ = writeln!(out, "{}{} (shared)", indent, id);
                continue;
            }
            expanded[id.0] = true;
            let _ = write!(
                out,
                "{}{} {} data={:.4} grad={:.4}",
                indent, id, node.op, node.data, node.grad
            );
            if let Some(label) = &node.label {
                let _ = write!(out, " [{}]", label);
            }
            out.push('\n');
            // Reversed so the first operand prints first.
            for operand in node.operands.as_slice().iter().rev() {
                stack.push((*operand, depth + 1));
            }
        }
        out
    }

    /// Appends the result of applying `op` to `operands`.
    ///
    /// Fails with `GraphMismatch` if an operand lives in another arena and with
    /// `NonFinite` if the forward rule does not produce a finite number.
    pub(crate) fn apply(&self, op: Op, operands: &[&Value]) -> Result<Value, ScalarGradError> {
        debug_assert_eq!(operands.len(), op.arity());
        if operands.iter().any(|v| !self.ptr_eq(&v.graph)) {
            return Err(ScalarGradError::GraphMismatch {
                operation: op.name().to_string(),
            });
        }

        let mut tape = self.tape_mut();
        let mut inputs = [0.0f64; 2];
        for (slot, operand) in inputs.iter_mut().zip(operands) {
            *slot = tape.node(operand).data;
        }
        let data = op.forward(inputs);
        if !data.is_finite() {
            return Err(ScalarGradError::NonFinite {
                operation: op.name().to_string(),
                value: data,
            });
        }

        let links = match *operands {
            [a] => Operands::Unary(a.id),
            [a, b] => Operands::Binary([a.id, b.id]),
            _ => Operands::None,
        };
        let id = NodeId(tape.nodes.len());
        let epoch = tape.epoch;
        tape.nodes.push(ValueData::new(data, op, links, epoch));
        Ok(Value {
            graph: self.clone(),
            id,
            epoch,
        })
    }

    pub(crate) fn tape(&self) -> Ref<'_, Tape> {
        self.tape.borrow()
    }

    pub(crate) fn tape_mut(&self) -> RefMut<'_, Tape> {
        self.tape.borrow_mut()
    }
}

impl fmt::Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tape = self.tape();
        f.debug_struct("Graph")
            .field("nodes", &tape.nodes.len())
            .field("epoch", &tape.epoch)
            .finish()
    }
}

/// Handle to a scalar node of a [`Graph`].
#[derive(Clone)]
pub struct Value {
    graph: Graph,
    id: NodeId,
    epoch: u32,
}

impl Value {
    /// The forward value of the node.
    pub fn data(&self) -> f64 {
        self.graph.tape().node(self).data
    }

    /// The accumulated gradient. Meaningful after a backward pass from a
    /// downstream node.
    pub fn grad(&self) -> f64 {
        self.graph.tape().node(self).grad
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn op(&self) -> Op {
        self.graph.tape().node(self).op
    }

    pub fn is_leaf(&self) -> bool {
        self.graph.tape().node(self).is_leaf()
    }

    /// The arena this value lives in.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Handles to the nodes this value was computed from, in operand order.
    pub fn operands(&self) -> Vec<Value> {
        let tape = self.graph.tape();
        tape.node(self)
            .operands
            .as_slice()
            .iter()
            .map(|&id| Value {
                graph: self.graph.clone(),
                id,
                epoch: tape.nodes[id.0].epoch,
            })
            .collect()
    }

    pub fn label(&self) -> Option<String> {
        self.graph.tape().node(self).label.clone()
    }

    pub fn set_label(&self, label: impl Into<String>) {
        self.graph.tape_mut().node_mut(self).label = Some(label.into());
    }

    /// Builder form of [`Value::set_label`].
    pub fn with_label(self, label: impl Into<String>) -> Self {
        self.set_label(label);
        self
    }

    /// Overwrites the data of a leaf.
    ///
    /// # Errors
    /// `NotALeaf` if the node was produced by an operation.
    pub fn set_data(&self, data: f64) -> Result<(), ScalarGradError> {
        let mut tape = self.graph.tape_mut();
        let node = tape.node_mut(self);
        if !node.is_leaf() {
            return Err(ScalarGradError::NotALeaf { node: self.id.0 });
        }
        node.data = data;
        Ok(())
    }

    pub fn zero_grad(&self) {
        self.graph.tape_mut().node_mut(self).grad = 0.0;
    }

    /// Returns `true` once the node behind this handle has been discarded.
    pub fn is_stale(&self) -> bool {
        !self.graph.tape().is_live(self)
    }

    /// Runs reverse-mode differentiation with this value as the root.
    ///
    /// See [`crate::autograd::backward`].
    pub fn backward(&self) {
        crate::autograd::backward(self)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_stale() {
            return write!(f, "Value({}, <stale>)", self.id);
        }
        let tape = self.graph.tape();
        let node = tape.node(self);
        f.debug_struct("Value")
            .field("id", &self.id)
            .field("data", &node.data)
            .field("grad", &node.grad)
            .field("op", &node.op)
            .field("label", &node.label)
            .finish()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tape = self.graph.tape();
        let node = tape.node(self);
        match &node.label {
            Some(label) => write!(f, "Value({}, data={}, grad={})", label, node.data, node.grad),
            None => write!(f, "Value(data={}, grad={})", node.data, node.grad),
        }
    }
}

#[cfg(test)]
#[path = "value_test.rs"]
mod tests;
