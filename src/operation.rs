use std::fmt::{self, Debug, Display, Formatter};

/// Entry of the operation log. Operators carry their symbol only for display, the
/// evaluation exclusively uses the function pointer.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Operation<T> {
    Operand(T),
    Unary {
        repr: &'static str,
        apply: fn(T) -> T,
    },
    /// `apply` receives the operand nearer to the operator first.
    Binary {
        repr: &'static str,
        apply: fn(T, T) -> T,
    },
}

impl<T> Operation<T> {
    pub fn repr(&self) -> Option<&'static str> {
        match self {
            Operation::Operand(_) => None,
            Operation::Unary { repr, .. } | Operation::Binary { repr, .. } => Some(*repr),
        }
    }
    pub fn is_operand(&self) -> bool {
        matches!(self, Operation::Operand(_))
    }
}

/// Operands are shown in their canonical decimal text, e.g., `3.0`, operators by their symbol.
impl<T: Debug> Display for Operation<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Operation::Operand(x) => write!(f, "{:?}", x),
            Operation::Unary { repr, .. } | Operation::Binary { repr, .. } => write!(f, "{}", repr),
        }
    }
}

/// Everything that has been entered so far in the order of entry. Entries can only be
/// appended; evaluation reads the log through slices and never changes it.
#[derive(Clone, PartialEq, Debug)]
pub struct OperationLog<T> {
    ops: Vec<Operation<T>>,
}

impl<T> Default for OperationLog<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> OperationLog<T> {
    pub fn new() -> Self {
        OperationLog { ops: vec![] }
    }
    pub fn push(&mut self, op: Operation<T>) {
        self.ops.push(op);
    }
    pub fn ops(&self) -> &[Operation<T>] {
        &self.ops
    }
    pub fn len(&self) -> usize {
        self.ops.len()
    }
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

pub(crate) fn fmt_ops<T: Debug>(ops: &[Operation<T>], f: &mut Formatter) -> fmt::Result {
    write!(f, "[")?;
    for (i, op) in ops.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", op)?;
    }
    write!(f, "]")
}

/// The log is displayed as list of its entries, e.g., `[3.0, 4.0, +]`.
impl<T: Debug> Display for OperationLog<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        fmt_ops(&self.ops, f)
    }
}
