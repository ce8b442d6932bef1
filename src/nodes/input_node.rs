use thiserror::Error;

use crate::{
    activation::Activation,
    node::{Node, NodeKind},
};

/// The activation is always the identity.
///
/// ```math
/// f(x) = x
/// ```
pub fn input_node(id: Option<i64>, layer: Option<i64>) -> Node {
    Node::new(NodeKind::Input, id, layer, Activation::identity())
}

/// Hands out consecutive ids to input nodes of one layer
///
/// Every id handed out is below `i64::MAX`. Once the ids run out [`InputNodeGen::gen`] fails and `next_id` stays put.
#[derive(Debug, Clone)]
pub struct InputNodeGen {
    next_id: i64,
    layer: Option<i64>,
}
impl InputNodeGen {
    pub fn new(layer: Option<i64>) -> Self {
        Self::starting_at(0, layer)
    }
    pub fn starting_at(next_id: i64, layer: Option<i64>) -> Self {
        Self { next_id, layer }
    }

    pub fn gen(&mut self, len: usize) -> Result<Vec<Node>, InputNodeBatchError> {
        let params = InputNodeBatchParams {
            start: self.next_id,
            len,
            layer: self.layer,
        };
        let end = params.end()?;
        let nodes = input_node_batch(params)?;
        self.next_id = end;
        Ok(nodes)
    }

    pub fn next_id(&self) -> i64 {
        self.next_id
    }
    pub fn layer(&self) -> Option<i64> {
        self.layer
    }
}
impl Default for InputNodeGen {
    fn default() -> Self {
        Self::new(Some(0))
    }
}

#[derive(Debug, Clone)]
pub struct InputNodeBatchParams {
    pub start: i64,
    pub len: usize,
    pub layer: Option<i64>,
}
impl InputNodeBatchParams {
    /// One past the last id of the batch
    fn end(&self) -> Result<i64, InputNodeBatchError> {
        i64::try_from(self.len)
            .ok()
            .and_then(|len| self.start.checked_add(len))
            .ok_or(InputNodeBatchError::IdOverflow {
                start: self.start,
                len: self.len,
            })
    }
}
pub fn input_node_batch(params: InputNodeBatchParams) -> Result<Vec<Node>, InputNodeBatchError> {
    let end = params.end()?;
    Ok((params.start..end)
        .map(|id| input_node(Some(id), params.layer))
        .collect())
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputNodeBatchError {
    #[error("Ids for {len} input nodes starting at {start} overflow")]
    IdOverflow { start: i64, len: usize },
}
