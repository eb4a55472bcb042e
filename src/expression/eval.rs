use num::Float;

use crate::{
    expression::{reduce, Collapse, Reduction},
    Operation,
};

/// Collapses operations into a number by applying the operators' functions.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Default)]
pub struct Evaluate;

impl<T: Float> Collapse<T> for Evaluate {
    type Output = T;

    fn operand(&self, x: T) -> T {
        x
    }

    fn unary(&self, _: &'static str, apply: fn(T) -> T, operand: T) -> T {
        apply(operand)
    }

    fn binary(&self, _: &'static str, apply: fn(T, T) -> T, nearer: T, earlier: T) -> T {
        apply(nearer, earlier)
    }
}

/// Evaluates the operations and returns the value together with what has been left over.
///
/// ```rust
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// #
/// use calcbrain::{eval_ops, Operation, OperatorTable};
/// let table = OperatorTable::<f64>::default();
/// let ops = [
///     Operation::Operand(1.0),
///     Operation::Operand(10.0),
///     Operation::Operand(2.0),
///     table.lookup("−").ok_or("minus is built in")?,
/// ];
/// let reduction = eval_ops(&ops);
/// assert_eq!(reduction.value, Some(8.0));
/// assert_eq!(reduction.remainder, &ops[..1]);
/// #
/// #     Ok(())
/// # }
/// ```
pub fn eval_ops<T: Float>(ops: &[Operation<T>]) -> Reduction<'_, T, T> {
    reduce(ops, &Evaluate)
}

#[cfg(test)]
mod test {
    use crate::{eval_ops, util::assert_float_eq_f64, Operation, OperatorTable};

    fn to_ops(table: &OperatorTable<f64>, tokens: &[&str]) -> Vec<Operation<f64>> {
        tokens
            .iter()
            .map(|t| match t.parse::<f64>() {
                Ok(x) => Operation::Operand(x),
                Err(_) => table.lookup(t).unwrap(),
            })
            .collect()
    }

    #[test]
    fn test_eval() {
        let table = OperatorTable::<f64>::default();
        let test = |tokens: &[&str], reference: Option<f64>, n_left: usize| {
            let ops = to_ops(&table, tokens);
            let reduction = eval_ops(&ops);
            match (reduction.value, reference) {
                (Some(v), Some(r)) => assert_float_eq_f64(v, r),
                (v, r) => assert_eq!(v, r),
            }
            assert_eq!(reduction.remainder.len(), n_left);
        };
        test(&["3", "4", "+"], Some(7.0), 0);
        test(&["10", "2", "−"], Some(8.0), 0);
        test(&["20", "4", "÷"], Some(5.0), 0);
        test(&["9", "√"], Some(3.0), 0);
        test(&["3", "4", "×"], Some(12.0), 0);
        test(&["2", "3", "4", "×", "+"], Some(14.0), 0);
        test(&["2", "3", "+", "4", "×"], Some(20.0), 0);
        test(&["1", "2", "3", "+"], Some(5.0), 1);
        test(&["16", "√", "√"], Some(2.0), 0);
        test(&["7", "2", "÷", "1", "−"], Some(2.5), 0);
        test(&["+"], None, 1);
        test(&["5", "−"], None, 2);
        test(&["√", "+"], None, 2);
        test(&[], None, 0);
    }

    #[test]
    fn test_nan() {
        let table = OperatorTable::<f64>::default();
        let ops = to_ops(&table, &["4", "−", "√"]);
        assert!(eval_ops(&ops).value.is_none());
        let ops = to_ops(&table, &["0", "4", "−", "√"]);
        assert!(eval_ops(&ops).value.map(|v| v.is_nan()).unwrap());
        let ops = to_ops(&table, &["1", "0", "÷"]);
        assert_eq!(eval_ops(&ops).value, Some(f64::INFINITY));
    }

    #[test]
    fn test_deep() {
        let table = OperatorTable::<f64>::default();
        let plus = table.lookup("+").unwrap();
        let n = 200_000;
        let mut ops = vec![Operation::Operand(1.0)];
        for _ in 0..n {
            ops.push(Operation::Operand(1.0));
            ops.push(plus);
        }
        assert_float_eq_f64(eval_ops(&ops).value.unwrap(), (n + 1) as f64);

        let sqrt = table.lookup("√").unwrap();
        let mut ops = vec![Operation::Operand(1.0)];
        ops.extend((0..n).map(|_| sqrt));
        assert_eq!(eval_ops(&ops).value, Some(1.0));
    }
}
