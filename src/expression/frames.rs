use smallvec::SmallVec;

use crate::{
    definitions::N_FRAMES_ON_STACK,
    expression::{Collapse, Reduction},
    Operation,
};

/// Pending operator whose operands are still being collapsed. `end` is the length of the
/// sequence the operator has been taken from. It is reported as remainder if the operator
/// cannot be applied.
enum Frame<T, O> {
    Unary {
        end: usize,
        repr: &'static str,
        apply: fn(T) -> T,
    },
    Nearer {
        end: usize,
        repr: &'static str,
        apply: fn(T, T) -> T,
    },
    Earlier {
        end: usize,
        repr: &'static str,
        apply: fn(T, T) -> T,
        nearer: O,
    },
}

/// Collapses `ops` starting with the last operation.
///
/// The last operation is removed. An operand is returned as is. A unary operator is applied
/// to the collapsed rest. A binary operator collapses the rest twice. The first collapse
/// yields the operand nearer to the operator and the second one the operand entered earlier.
/// If an operand is missing, the whole sequence the operator has been taken from is
/// returned as remainder together with no value.
///
/// Instead of recursing, pending operators are kept on an explicit stack of frames, one
/// frame per recursion level. Hence, arbitrarily long logs do not overflow the call stack.
///
/// # Arguments
///
/// * `ops` - operations in the order of entry
/// * `collapse` - what operands and operator applications turn into
///
pub fn reduce<'a, T, C>(ops: &'a [Operation<T>], collapse: &C) -> Reduction<'a, T, C::Output>
where
    T: Copy,
    C: Collapse<T>,
{
    let mut frames: SmallVec<[Frame<T, C::Output>; N_FRAMES_ON_STACK]> = SmallVec::new();
    let mut end = ops.len();
    loop {
        // descend until we hit an operand or the beginning of the log
        let (mut value, mut rest) = match end.checked_sub(1).map(|idx| &ops[idx]) {
            None => (None, end),
            Some(Operation::Operand(x)) => (Some(collapse.operand(*x)), end - 1),
            Some(Operation::Unary { repr, apply }) => {
                frames.push(Frame::Unary {
                    end,
                    repr: *repr,
                    apply: *apply,
                });
                end -= 1;
                continue;
            }
            Some(Operation::Binary { repr, apply }) => {
                frames.push(Frame::Nearer {
                    end,
                    repr: *repr,
                    apply: *apply,
                });
                end -= 1;
                continue;
            }
        };
        // hand the result up to the pending operators
        loop {
            match frames.pop() {
                None => {
                    return Reduction {
                        value,
                        remainder: &ops[..rest],
                    }
                }
                Some(Frame::Unary {
                    end: frame_end,
                    repr,
                    apply,
                }) => match value.take() {
                    Some(x) => value = Some(collapse.unary(repr, apply, x)),
                    None => rest = frame_end,
                },
                Some(Frame::Nearer {
                    end: frame_end,
                    repr,
                    apply,
                }) => match value.take() {
                    Some(nearer) => {
                        frames.push(Frame::Earlier {
                            end: frame_end,
                            repr,
                            apply,
                            nearer,
                        });
                        end = rest;
                        break;
                    }
                    None => rest = frame_end,
                },
                Some(Frame::Earlier {
                    end: frame_end,
                    repr,
                    apply,
                    nearer,
                }) => match value.take() {
                    Some(earlier) => value = Some(collapse.binary(repr, apply, nearer, earlier)),
                    None => rest = frame_end,
                },
            }
        }
    }
}
