use std::error::Error as StdError;

use thiserror::Error;

use numeth_core::OutputKind;

use super::{EvalError, bisection::BracketError};

/// Errors that can occur while finding a root.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unable to find root of given function within {iters} iterations")]
    NoConvergence { iters: usize },

    #[error("invalid bracket: {0}")]
    InvalidBracket(#[from] BracketError),

    #[error("function evaluation failed")]
    Function(#[source] Box<dyn StdError + Send + Sync>),

    #[error("incorrect result type: expected scalar, found {found}")]
    IncorrectType { found: OutputKind },
}

impl<FE> From<EvalError<FE>> for Error
where
    FE: StdError + Send + Sync + 'static,
{
    fn from(err: EvalError<FE>) -> Self {
        match err {
            EvalError::Function(e) => Self::Function(Box::new(e)),
            EvalError::IncorrectType { found } => Self::IncorrectType { found },
        }
    }
}
