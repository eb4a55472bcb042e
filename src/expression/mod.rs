use std::fmt::{self, Debug, Display, Formatter};

use crate::operation::{fmt_ops, Operation};

pub mod eval;
mod frames;
pub mod unparse;

pub use frames::reduce;

/// An operation log is collapsed from its most recently appended end. Implementors of this
/// trait decide what an operand and the application of an operator turn into, e.g., a number
/// for evaluation or a string for unparsing. The order in which the hooks are called is
/// the same for all implementors.
pub trait Collapse<T> {
    type Output;

    fn operand(&self, x: T) -> Self::Output;

    fn unary(&self, repr: &'static str, apply: fn(T) -> T, operand: Self::Output) -> Self::Output;

    /// # Arguments
    ///
    /// * `nearer` - collapsed operand that has been entered right before the operator
    /// * `earlier` - collapsed operand that has been entered before `nearer`
    ///
    fn binary(
        &self,
        repr: &'static str,
        apply: fn(T, T) -> T,
        nearer: Self::Output,
        earlier: Self::Output,
    ) -> Self::Output;
}

/// Result of collapsing a sequence of operations together with the prefix of the sequence
/// that has not been consumed.
///
/// If the collapse fails, e.g., since an operator lacks operands, `value` is `None` and
/// `remainder` is the complete input sequence. Partial progress is dropped.
#[derive(Clone, PartialEq, Debug)]
pub struct Reduction<'a, T, O> {
    pub value: Option<O>,
    pub remainder: &'a [Operation<T>],
}

impl<'a, T, O> Reduction<'a, T, O> {
    /// Returns `true` if all operations have been consumed.
    pub fn is_exhaustive(&self) -> bool {
        self.remainder.is_empty()
    }
}

impl<'a, T: Debug, O: Debug> Display for Reduction<'a, T, O> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{:?} with ", self.value)?;
        fmt_ops(self.remainder, f)?;
        write!(f, " left over")
    }
}
