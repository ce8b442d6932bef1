use serde::{Deserialize, Serialize};

use crate::{
    activation::Activation,
    node::{Node, NodeError, NodeKind},
};

/// Declarative description of a node
///
/// `activation` names one of the built-in activations. When absent the kind's default is used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeConfig {
    pub kind: NodeKind,
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub layer: Option<i64>,
    #[serde(default)]
    pub activation: Option<String>,
}
impl NodeConfig {
    pub fn new(kind: NodeKind, id: Option<i64>, layer: Option<i64>) -> Self {
        Self {
            kind,
            id,
            layer,
            activation: None,
        }
    }

    pub fn build(&self) -> Result<Node, NodeError> {
        let activation = match (&self.activation, self.kind) {
            (None, kind) => kind.default_activation(),
            (Some(name), NodeKind::Input) => {
                let activation: Activation = name.parse()?;
                if activation != Activation::identity() {
                    log::warn!(
                        "Input node {:?} ignores activation `{}`; using identity",
                        self.id,
                        activation.name()
                    );
                }
                Activation::identity()
            }
            (Some(name), _) => name.parse()?,
        };
        Ok(Node::new(self.kind, self.id, self.layer, activation))
    }
}
