use crate::{
    activation::Activation,
    node::{Node, NodeKind},
};

/// ```math
/// f(x) = \frac{1}{1 + e^{-x}}
/// ```
pub fn hidden_node(id: Option<i64>, layer: Option<i64>) -> Node {
    hidden_node_with(id, layer, NodeKind::Hidden.default_activation())
}

pub fn hidden_node_with(id: Option<i64>, layer: Option<i64>, activation: Activation) -> Node {
    Node::new(NodeKind::Hidden, id, layer, activation)
}
