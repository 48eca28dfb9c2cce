use thiserror::Error;

use numeth_core::{Arg, Function, Output, OutputKind, Scalar};

/// Errors that can occur when evaluating a function for a root finder.
#[derive(Debug, Error)]
pub enum EvalError<FE> {
    /// The function failed to evaluate.
    #[error("function evaluation failed")]
    Function(#[source] FE),

    /// The function returned something other than a plain scalar.
    #[error("incorrect result type: expected scalar, found {found}")]
    IncorrectType { found: OutputKind },
}

/// Evaluates `f` at `args` and unwraps a scalar result.
///
/// # Errors
///
/// Returns [`EvalError::Function`] carrying the function's own error if the
/// evaluation fails, or [`EvalError::IncorrectType`] if the result is not a
/// scalar.
pub fn evaluate<S, F>(f: &F, args: &[Arg<S>]) -> Result<S, EvalError<F::Error>>
where
    S: Scalar,
    F: Function<S> + ?Sized,
{
    match f.eval(args).map_err(EvalError::Function)? {
        Output::Scalar(value) => Ok(value),
        other => Err(EvalError::IncorrectType { found: other.kind() }),
    }
}
