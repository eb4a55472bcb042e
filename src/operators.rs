use crate::{definitions::N_OPS_ON_STACK, exerr, operation::Operation, ExResult};
use lazy_static::lazy_static;
use num::Float;
use regex::Regex;
use smallvec::SmallVec;
use std::marker::PhantomData;

/// Function of an operator, either applied to one or to two operands.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum OperatorFn<T> {
    Unary(fn(T) -> T),
    /// The first argument is the operand entered last, i.e., the one nearer to the
    /// operator. Hence, subtraction is `|a, b| b - a`.
    Binary(fn(T, T) -> T),
}

/// Operators can be custom-defined by the library-user in terms of this struct.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Operator<T> {
    /// Symbol of the operator as shown on the calculator's button, e.g., `÷` or `√`.
    pub repr: &'static str,
    pub func: OperatorFn<T>,
}

impl<T> Operator<T> {
    pub fn unary(repr: &'static str, apply: fn(T) -> T) -> Self {
        Operator {
            repr,
            func: OperatorFn::Unary(apply),
        }
    }
    pub fn bin(repr: &'static str, apply: fn(T, T) -> T) -> Self {
        Operator {
            repr,
            func: OperatorFn::Binary(apply),
        }
    }
    pub fn repr(&self) -> &'static str {
        self.repr
    }
    pub fn is_unary(&self) -> bool {
        matches!(self.func, OperatorFn::Unary(_))
    }

    /// Creates the entry of the operation log that applies this operator.
    pub fn to_operation(&self) -> Operation<T> {
        match &self.func {
            OperatorFn::Unary(apply) => Operation::Unary {
                repr: self.repr,
                apply: *apply,
            },
            OperatorFn::Binary(apply) => Operation::Binary {
                repr: self.repr,
                apply: *apply,
            },
        }
    }
}

/// To use custom operators one needs to create a factory that implements this trait.
///
/// # Example
///
/// ```rust
/// use calcbrain::{Brain, MakeOperators, Operator};
/// #[derive(Clone)]
/// struct SomeOpsFactory;
/// impl MakeOperators<f32> for SomeOpsFactory {
///     fn make() -> Vec<Operator<f32>> {
///         vec![
///             Operator::bin("^", |exponent: f32, base: f32| base.powf(exponent)),
///             Operator::unary("sin", |a: f32| a.sin()),
///         ]
///     }
/// }
/// let mut brain = Brain::<f32>::from_factory::<SomeOpsFactory>().unwrap();
/// brain.push_operand(2.0);
/// brain.push_operand(3.0);
/// assert_eq!(brain.perform_operation("^"), Some(8.0));
/// ```
pub trait MakeOperators<T>: Clone {
    /// Function that creates a vector of operators.
    fn make() -> Vec<Operator<T>>;
}

/// Factory of the calculator's built-in operators `+`, `×`, `−`, `÷`, and `√`.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub struct FloatOpsFactory<T: Float> {
    dummy: PhantomData<T>,
}

impl<T: Float> MakeOperators<T> for FloatOpsFactory<T> {
    /// Returns the built-in operators.
    fn make() -> Vec<Operator<T>> {
        vec![
            Operator::bin("+", |a: T, b: T| a + b),
            Operator::bin("×", |a: T, b: T| a * b),
            Operator::bin("−", |a: T, b: T| b - a),
            Operator::bin("÷", |a: T, b: T| b / a),
            Operator::unary("√", |a: T| a.sqrt()),
        ]
    }
}

pub type OperatorVec<T> = SmallVec<[Operator<T>; N_OPS_ON_STACK]>;

fn reads_as_number(repr: &str) -> bool {
    lazy_static! {
        static ref RE_NUMBER: Regex = Regex::new(r"^([0-9]+\.?[0-9]*|\.[0-9]+)$").unwrap();
    }
    RE_NUMBER.is_match(repr)
}

/// Immutable mapping from operator symbols to operators. It is filled once on
/// construction and only read afterwards.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct OperatorTable<T> {
    ops: OperatorVec<T>,
}

impl<T: Copy> OperatorTable<T> {
    /// Creates a table from a custom operator set.
    ///
    /// # Errors
    ///
    /// An operator with an empty symbol, with a symbol that reads as a number, or with a
    /// symbol that is already taken by another operator is rejected.
    pub fn from_ops(ops: Vec<Operator<T>>) -> ExResult<Self> {
        let mut checked = OperatorVec::<T>::new();
        for op in ops {
            if op.repr.trim().is_empty() {
                return Err(exerr!("operator symbol must not be empty"));
            }
            if reads_as_number(op.repr) {
                return Err(exerr!(
                    "operator symbol {} cannot be told apart from a number",
                    op.repr
                ));
            }
            if checked.iter().any(|known| known.repr == op.repr) {
                return Err(exerr!("operator {} is defined twice", op.repr));
            }
            checked.push(op);
        }
        Ok(OperatorTable { ops: checked })
    }

    /// Creates a table from the operators of the factory `OF`.
    pub fn from_factory<OF: MakeOperators<T>>() -> ExResult<Self> {
        Self::from_ops(OF::make())
    }

    /// Returns the operation that belongs to `repr` or `None` if the symbol is unknown.
    pub fn lookup(&self, repr: &str) -> Option<Operation<T>> {
        self.ops
            .iter()
            .find(|op| op.repr == repr)
            .map(|op| op.to_operation())
    }

    /// Known operator symbols in the order of the table.
    pub fn reprs(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.ops.iter().map(|op| op.repr)
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

impl<T: Float> Default for OperatorTable<T> {
    /// The built-in operators of [`FloatOpsFactory`](FloatOpsFactory).
    fn default() -> Self {
        OperatorTable {
            ops: FloatOpsFactory::<T>::make().into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::{
        operators::reads_as_number, Operation, Operator, OperatorFn, OperatorTable,
    };

    fn apply_bin(table: &OperatorTable<f64>, repr: &str, a: f64, b: f64) -> f64 {
        match table.lookup(repr) {
            Some(Operation::Binary { apply, .. }) => apply(a, b),
            other => panic!("expected binary operator for {}, got {:?}", repr, other),
        }
    }

    #[test]
    fn test_default_table() {
        let table = OperatorTable::<f64>::default();
        assert_eq!(table.reprs().collect::<Vec<_>>(), ["+", "×", "−", "÷", "√"]);
        assert_eq!(table.len(), 5);
        // nearer operand first
        assert_eq!(apply_bin(&table, "+", 4.0, 3.0), 7.0);
        assert_eq!(apply_bin(&table, "×", 4.0, 3.0), 12.0);
        assert_eq!(apply_bin(&table, "−", 2.0, 10.0), 8.0);
        assert_eq!(apply_bin(&table, "÷", 4.0, 20.0), 5.0);
        match table.lookup("√") {
            Some(Operation::Unary { repr, apply }) => {
                assert_eq!(repr, "√");
                assert_eq!(apply(9.0), 3.0);
            }
            other => panic!("expected unary square root, got {:?}", other),
        }
        assert!(table.lookup("?").is_none());
        assert!(table.lookup("-").is_none());
        assert!(table.lookup("").is_none());
    }

    #[test]
    fn test_from_ops() {
        let table = OperatorTable::from_ops(vec![
            Operator::bin("max", |a: f64, b: f64| a.max(b)),
            Operator::unary("neg", |a: f64| -a),
        ])
        .unwrap();
        assert!(!table.is_empty());
        assert!(table.lookup("neg").is_some());
        assert!(table.lookup("+").is_none());

        let err = OperatorTable::from_ops(vec![
            Operator::unary("neg", |a: f64| -a),
            Operator::bin("neg", |a: f64, b: f64| a - b),
        ])
        .unwrap_err();
        assert!(err.msg.contains("twice"));
        let err = OperatorTable::from_ops(vec![Operator::unary(" ", |a: f64| a)]).unwrap_err();
        assert!(err.msg.contains("empty"));
        let err = OperatorTable::from_ops(vec![Operator::unary("4.2", |a: f64| a)]).unwrap_err();
        assert!(err.msg.contains("number"));
    }

    #[test]
    fn test_operator() {
        let op = Operator::unary("neg", |a: f64| -a);
        assert!(op.is_unary());
        assert_eq!(op.repr(), "neg");
        let op = Operator::bin("+", |a: f64, b: f64| a + b);
        assert!(!op.is_unary());
        assert!(matches!(op.func, OperatorFn::Binary(_)));
        assert!(matches!(op.to_operation(), Operation::Binary { repr: "+", .. }));
    }

    #[test]
    fn test_reads_as_number() {
        assert!(reads_as_number("6"));
        assert!(reads_as_number("4."));
        assert!(reads_as_number(".4"));
        assert!(reads_as_number("23.414"));
        assert!(!reads_as_number("."));
        assert!(!reads_as_number("o.4"));
        assert!(!reads_as_number("√"));
        assert!(!reads_as_number("log2"));
    }
}
