#![doc(html_root_url = "https://docs.rs/calcbrain/0.1.0")]
//! Calcbrain is the brain of a postfix calculator. Operands and operators are appended to a
//! log in the order they are entered, e.g., `3`, `4`, `+`, and the log is collapsed into a
//! number or into a formula on demand.
//! ```rust
//! # use std::error::Error;
//! # fn main() -> Result<(), Box<dyn Error>> {
//! #
//! use calcbrain::Brain;
//! let mut brain = Brain::<f64>::new();
//! brain.push_operand(3.0);
//! brain.push_operand(4.0);
//! assert_eq!(brain.perform_operation("+"), Some(7.0));
//! assert_eq!(brain.format_log().ok_or("log is complete")?, "(4.0+3.0)");
//! #
//! #     Ok(())
//! # }
//! ```
//! The built-in operators are `+`, `×`, `−`, `÷`, and `√`. Unknown symbols are ignored.
//! Whenever the log cannot be collapsed, e.g., since an operator lacks operands, there is
//! simply no result.
//! ```rust
//! use calcbrain::Brain;
//! let mut brain = Brain::<f64>::new();
//! assert_eq!(brain.perform_operation("÷"), None);
//! brain.push_operand(20.0);
//! brain.push_operand(4.0);
//! assert_eq!(brain.perform_operation("%"), Some(4.0));
//! ```
//! Operators are applied to the operand entered last and to the one before. The former
//! is the first argument of the operator's function, so `20`, `4`, `÷` is `20 ÷ 4`.
//!
//! # Custom operators
//!
//! Other operator sets can be defined with factories that implement
//! [`MakeOperators`](MakeOperators), see [`Brain::from_factory`](Brain::from_factory).
//!
//! # Logging
//!
//! Entries to the log and evaluations are reported via the [`log`](https://docs.rs/log)
//! facade on the levels trace and debug.
mod brain;
mod definitions;
mod expression;
mod operation;
mod operators;
mod result;
mod util;

pub use {
    brain::Brain,
    expression::{
        eval::{eval_ops, Evaluate},
        reduce,
        unparse::{unparse_ops, Unparse},
        Collapse, Reduction,
    },
    operation::{Operation, OperationLog},
    operators::{FloatOpsFactory, MakeOperators, Operator, OperatorFn, OperatorTable},
    result::{ExError, ExResult},
};
