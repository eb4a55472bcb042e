use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// This will be thrown at you if something within calcbrain went wrong. Ok, obviously it is not an
/// exception, so thrown needs to be understood figuratively. The four calls of
/// [`Brain`](crate::Brain) never return it, they report a missing result as `None`.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub struct ExError {
    pub msg: String,
}
impl ExError {
    pub fn new(msg: &str) -> ExError {
        ExError {
            msg: msg.to_string(),
        }
    }
}
impl Display for ExError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.msg)
    }
}
impl Error for ExError {}

/// Calcbrain's result type with [`ExError`](ExError) as error type.
pub type ExResult<U> = Result<U, ExError>;

/// Creates an [`ExError`](ExError) with a formatted message.
/// ```rust
/// # use std::error::Error;
/// use calcbrain::{format_exerr, ExError};
/// # fn main() -> Result<(), Box<dyn Error>> {
/// assert_eq!(format_exerr!("some error {}", 1), ExError::new("some error 1"));
/// #     Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! format_exerr {
    ($s:literal, $( $exps:expr ),*) => {
        $crate::ExError::new(format!($s, $($exps,)*).as_str())
    }
}

/// Creates an [`ExError`](ExError) from a string literal or a format string.
#[macro_export]
macro_rules! exerr {
    ($s:literal) => {
        $crate::ExError::new(format!($s).as_str())
    };
    ($s:literal, $( $exps:expr ),*) => {
        $crate::format_exerr!($s, $($exps),*)
    };
}
