use std::fmt::Debug;

use crate::{
    expression::{reduce, Collapse, Reduction},
    Operation,
};

/// Collapses operations into a formula string. Binary operations are parenthesized and
/// show the operand nearer to the operator first, in the order the function receives its
/// arguments. Hence, `10`, `2`, `−` is unparsed to `(2.0−10.0)`.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Default)]
pub struct Unparse;

impl<T: Debug> Collapse<T> for Unparse {
    type Output = String;

    fn operand(&self, x: T) -> String {
        format!("{:?}", x)
    }

    fn unary(&self, repr: &'static str, _: fn(T) -> T, operand: String) -> String {
        format!("{}({})", repr, operand)
    }

    fn binary(&self, repr: &'static str, _: fn(T, T) -> T, nearer: String, earlier: String) -> String {
        format!("({}{}{})", nearer, repr, earlier)
    }
}

/// Creates a formula of the operations and returns it together with what has been left over.
pub fn unparse_ops<T: Copy + Debug>(ops: &[Operation<T>]) -> Reduction<'_, T, String> {
    reduce(ops, &Unparse)
}
