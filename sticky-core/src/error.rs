use crate::types::NodeId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FigureError {
    #[error("no attach target given and the figure has no branch node")]
    NoBranch,

    #[error("node {0} is not part of this figure")]
    UnknownNode(NodeId),

    #[error("splicing node {node} onto {target} would introduce a cycle")]
    Cycle { node: NodeId, target: NodeId },

    #[error("failed to write segments: {0}")]
    Io(#[from] std::io::Error),
}

pub type FigureResult<T> = Result<T, FigureError>;
