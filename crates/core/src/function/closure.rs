use crate::{Scalar, Vector};

use super::{Arg, Function, FunctionError, Output};

/// A scalar function of one scalar argument, built from a closure.
///
/// ```
/// use numeth_core::{Arg, Function, Output, ScalarFn};
///
/// let cube = ScalarFn::new(|x: f64| x * x * x);
/// assert_eq!(cube.eval(&[Arg::Scalar(2.0)]), Ok(Output::Scalar(8.0)));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ScalarFn<F> {
    f: F,
}

impl<F> ScalarFn<F> {
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<S, F> Function<S> for ScalarFn<F>
where
    S: Scalar,
    F: Fn(S) -> S,
{
    type Error = FunctionError;

    fn eval(&self, args: &[Arg<S>]) -> Result<Output<S>, FunctionError> {
        let x = single_scalar(args)?;
        Ok(Output::Scalar((self.f)(x)))
    }
}

/// A scalar function of one scalar argument that may be undefined at some inputs.
#[derive(Debug, Clone, Copy)]
pub struct FallibleFn<F> {
    f: F,
}

impl<F> FallibleFn<F> {
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<S, F> Function<S> for FallibleFn<F>
where
    S: Scalar,
    F: Fn(S) -> Result<S, FunctionError>,
{
    type Error = FunctionError;

    fn eval(&self, args: &[Arg<S>]) -> Result<Output<S>, FunctionError> {
        let x = single_scalar(args)?;
        (self.f)(x).map(Output::Scalar)
    }
}

/// A function of one vector argument with an arbitrary result shape.
#[derive(Debug, Clone, Copy)]
pub struct VectorFn<F> {
    f: F,
}

impl<F> VectorFn<F> {
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<S, F> Function<S> for VectorFn<F>
where
    S: Scalar,
    F: Fn(&Vector<S>) -> Output<S>,
{
    type Error = FunctionError;

    fn eval(&self, args: &[Arg<S>]) -> Result<Output<S>, FunctionError> {
        match args {
            [Arg::Vector(v)] => Ok((self.f)(v)),
            [_] => Err(FunctionError::ArgumentType { index: 0 }),
            _ => Err(FunctionError::Arity {
                expected: 1,
                found: args.len(),
            }),
        }
    }
}

fn single_scalar<S: Scalar>(args: &[Arg<S>]) -> Result<S, FunctionError> {
    match args {
        [Arg::Scalar(x)] => Ok(*x),
        [_] => Err(FunctionError::ArgumentType { index: 0 }),
        _ => Err(FunctionError::Arity {
            expected: 1,
            found: args.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{Orientation, OutputKind};

    #[test]
    fn scalar_fn_checks_arity() {
        let f = ScalarFn::new(|x: f64| x + 1.0);

        assert_eq!(f.eval(&[Arg::Scalar(1.0)]), Ok(Output::Scalar(2.0)));
        assert_eq!(
            f.eval(&[Arg::Scalar(1.0), Arg::Scalar(2.0)]),
            Err(FunctionError::Arity {
                expected: 1,
                found: 2
            })
        );
    }

    #[test]
    fn scalar_fn_rejects_vector_argument() {
        let f = ScalarFn::new(|x: f64| x);
        let v = Vector::zeros(Orientation::Row, 3);

        assert_eq!(
            f.eval(&[Arg::Vector(v)]),
            Err(FunctionError::ArgumentType { index: 0 })
        );
    }

    #[test]
    fn fallible_fn_propagates_domain_error() {
        let sqrt = FallibleFn::new(|x: f64| {
            if x < 0.0 {
                Err(FunctionError::Domain {
                    reason: "negative radicand",
                })
            } else {
                Ok(x.sqrt())
            }
        });

        assert_eq!(sqrt.eval(&[Arg::Scalar(4.0)]), Ok(Output::Scalar(2.0)));
        assert!(matches!(
            sqrt.eval(&[Arg::Scalar(-1.0)]),
            Err(FunctionError::Domain { .. })
        ));
    }

    #[test]
    fn vector_fn_returns_its_shape() {
        let identity = VectorFn::new(|v: &Vector<f64>| Output::Vector(v.clone()));
        let v = Vector::from_vec(Orientation::Column, vec![1.0, 2.0]);

        let output = identity.eval(&[Arg::Vector(v)]).expect("vector argument");
        assert_eq!(output.kind(), OutputKind::Vector);
    }
}
