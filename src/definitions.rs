/// Inline capacity of the operator table. The built-in table has five operators.
pub const N_OPS_ON_STACK: usize = 8;
/// Inline capacity of the work stack used to collapse an operation log. Deeper logs
/// spill to the heap instead of the call stack.
pub const N_FRAMES_ON_STACK: usize = 32;
