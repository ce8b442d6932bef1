use crate::{
    activation::Activation,
    node::{Node, NodeKind},
};

/// Evaluates like a hidden node. The kind marks the node as a network result.
///
/// ```math
/// f(x) = \frac{1}{1 + e^{-x}}
/// ```
pub fn output_node(id: Option<i64>, layer: Option<i64>) -> Node {
    output_node_with(id, layer, NodeKind::Output.default_activation())
}

pub fn output_node_with(id: Option<i64>, layer: Option<i64>, activation: Activation) -> Node {
    Node::new(NodeKind::Output, id, layer, activation)
}
