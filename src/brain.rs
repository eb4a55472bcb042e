use num::Float;
use std::fmt::Debug;

use crate::{
    eval_ops, expression::Reduction, unparse_ops, ExResult, MakeOperators, Operation,
    OperationLog, OperatorTable,
};

/// The calculator's brain. It owns the log of everything entered during one calculation
/// session and the table of known operators.
///
/// Operands are entered first and the operator last, as on a calculator with an enter key.
/// After each entry the whole log is evaluated. If that is not possible, e.g., because an
/// operator lacks operands, the result is `None`.
///
/// ```rust
/// use calcbrain::Brain;
/// let mut brain = Brain::<f64>::new();
/// assert_eq!(brain.push_operand(10.0), Some(10.0));
/// assert_eq!(brain.push_operand(2.0), Some(2.0));
/// assert_eq!(brain.perform_operation("−"), Some(8.0));
/// assert_eq!(brain.perform_operation("√"), Some(8.0f64.sqrt()));
/// assert_eq!(brain.format_log().unwrap(), "√((2.0−10.0))");
/// ```
#[derive(Clone, PartialEq, Debug)]
pub struct Brain<T = f64> {
    log: OperationLog<T>,
    table: OperatorTable<T>,
}

impl<T: Float + Debug> Brain<T> {
    /// Creates a brain with an empty log and the built-in operators `+`, `×`, `−`, `÷`, `√`.
    pub fn new() -> Self {
        Self::with_table(OperatorTable::default())
    }
}

impl<T: Float + Debug> Default for Brain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Brain<T>
where
    T: Float + Debug,
{
    /// Creates a brain with an empty log that knows the operators of `table`.
    pub fn with_table(table: OperatorTable<T>) -> Self {
        Brain {
            log: OperationLog::new(),
            table,
        }
    }

    /// Creates a brain with an empty log that knows the operators of the factory `OF`.
    ///
    /// # Errors
    ///
    /// See [`OperatorTable::from_ops`](OperatorTable::from_ops).
    pub fn from_factory<OF: MakeOperators<T>>() -> ExResult<Self> {
        Ok(Self::with_table(OperatorTable::from_factory::<OF>()?))
    }

    /// Appends an operand to the log and returns the evaluation of the whole log.
    pub fn push_operand(&mut self, operand: T) -> Option<T> {
        log::trace!("push operand {:?}", operand);
        self.log.push(Operation::Operand(operand));
        self.evaluate()
    }

    /// Appends the operator with symbol `repr` to the log and returns the evaluation of the
    /// whole log. Unknown symbols are ignored, the log is evaluated nevertheless.
    pub fn perform_operation(&mut self, repr: &str) -> Option<T> {
        match self.table.lookup(repr) {
            Some(op) => {
                log::trace!("push operator {}", repr);
                self.log.push(op);
            }
            None => log::debug!("ignoring unknown operator {}", repr),
        }
        self.evaluate()
    }

    /// Collapses the log into a number and returns it together with the operations that
    /// have not been consumed. The log itself stays untouched.
    pub fn reduce(&self) -> Reduction<'_, T, T> {
        let reduction = eval_ops(self.log.ops());
        log::trace!("{} = {}", self.log, reduction);
        reduction
    }

    /// Evaluates the log. Operations that are left over are ignored. Hence, after pushing
    /// only operands, the most recent one is returned.
    pub fn evaluate(&self) -> Option<T> {
        self.reduce().value
    }

    /// Creates a parenthesized formula of the log, e.g., `(4.0+3.0)` after `3`, `4`, `+`.
    /// Binary operations show the operand entered last first.
    pub fn format_log(&self) -> Option<String> {
        unparse_ops(self.log.ops()).value
    }

    pub fn ops(&self) -> &[Operation<T>] {
        self.log.ops()
    }

    pub fn log(&self) -> &OperationLog<T> {
        &self.log
    }

    pub fn table(&self) -> &OperatorTable<T> {
        &self.table
    }

    pub fn len(&self) -> usize {
        self.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }
}
