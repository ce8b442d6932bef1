//! # Terminologies
//!
//! - $f$: the activation function of the node
//! - $x$: the values delivered to the node by its incoming connections during one evaluation pass
//!   - "inputs" in code

use std::fmt;

use serde::{Deserialize, Serialize};
use strict_num::FiniteF64;
use thiserror::Error;

use crate::activation::{Activation, ActivationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Hidden,
    Input,
    Output,
}
impl NodeKind {
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Hidden => "HiddenNode",
            NodeKind::Input => "InputNode",
            NodeKind::Output => "OutputNode",
        }
    }

    /// The activation a node of this kind gets when none is given
    pub fn default_activation(&self) -> Activation {
        match self {
            NodeKind::Input => Activation::identity(),
            NodeKind::Hidden | NodeKind::Output => Activation::sigmoid(),
        }
    }
}

/// The function of this node should be
/// ```math
/// f : \mathbb{R} \to \mathbb{R}
/// ```
/// applied to
/// ```math
/// \sum x
/// ```
///
/// The node never clears its inputs on its own. The driver of an evaluation pass delivers values with [`Node::push_input`] and is responsible for calling [`Node::clear_inputs`] or [`Node::replace_inputs`] before the next pass.
#[derive(Debug, Clone)]
pub struct Node {
    kind: NodeKind,
    id: Option<i64>,
    layer: Option<i64>,
    activation: Activation,
    inputs: Vec<f64>,
    output: f64,
}
impl Node {
    pub fn new(
        kind: NodeKind,
        id: Option<i64>,
        layer: Option<i64>,
        activation: Activation,
    ) -> Self {
        Self {
            kind,
            id,
            layer,
            activation,
            inputs: vec![],
            output: 0.0,
        }
    }

    /// Recompute, cache and return the output.
    ///
    /// An empty set of inputs sums to zero. Non-finite results are returned as is.
    pub fn get_output(&mut self) -> f64 {
        let sum = sum(&self.inputs);
        self.output = self.activation.apply(sum);
        log::trace!(
            "{}: {} inputs, sum {sum}, output {}",
            self,
            self.inputs.len(),
            self.output
        );
        self.output
    }

    /// Same as [`Node::get_output`] but rejects a non-finite output.
    ///
    /// The output is cached either way.
    pub fn checked_output(&mut self) -> Result<FiniteF64, NodeError> {
        let output = self.get_output();
        FiniteF64::new(output).ok_or_else(|| NodeError::NonFiniteOutput {
            node: self.to_string(),
            value: output,
        })
    }

    pub fn push_input(&mut self, value: f64) {
        self.inputs.push(value);
    }
    pub fn extend_inputs(&mut self, values: impl IntoIterator<Item = f64>) {
        self.inputs.extend(values);
    }
    /// The cached output is left untouched.
    pub fn clear_inputs(&mut self) {
        self.inputs.clear();
    }
    pub fn replace_inputs(&mut self, values: Vec<f64>) -> Vec<f64> {
        std::mem::replace(&mut self.inputs, values)
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
    pub fn kind(&self) -> NodeKind {
        self.kind
    }
    pub fn id(&self) -> Option<i64> {
        self.id
    }
    pub fn layer(&self) -> Option<i64> {
        self.layer
    }
    pub fn activation(&self) -> &Activation {
        &self.activation
    }
    pub fn inputs(&self) -> &[f64] {
        &self.inputs
    }
    /// The last computed output, `0.0` before the first computation
    pub fn output(&self) -> f64 {
        self.output
    }
}
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} (Layer {})",
            self.name(),
            DisplayOption(self.id),
            DisplayOption(self.layer)
        )
    }
}

struct DisplayOption(Option<i64>);
impl fmt::Display for DisplayOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(x) => write!(f, "{x}"),
            None => write!(f, "None"),
        }
    }
}

/// An empty pass sums to positive zero
fn sum(x: &[f64]) -> f64 {
    x.iter().fold(0.0, |acc, x| acc + x)
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum NodeError {
    #[error("{node} produced a non-finite output `{value}`")]
    NonFiniteOutput { node: String, value: f64 },
    #[error(transparent)]
    Activation(#[from] ActivationError),
}
