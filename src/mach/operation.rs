use crate::error;
use crate::lang::{Error, Operator};

type Result<T> = std::result::Result<T, Error>;

/// Checked i32 arithmetic for the evaluator. Division truncates
/// toward zero; `i32::MIN / -1` is an overflow, not a crash.
pub struct Operation {}

impl Operation {
    pub fn add(lhs: i32, rhs: i32) -> Result<i32> {
        match lhs.checked_add(rhs) {
            Some(value) => Ok(value),
            None => Err(error!(Overflow)),
        }
    }

    pub fn subtract(lhs: i32, rhs: i32) -> Result<i32> {
        match lhs.checked_sub(rhs) {
            Some(value) => Ok(value),
            None => Err(error!(Overflow)),
        }
    }

    pub fn multiply(lhs: i32, rhs: i32) -> Result<i32> {
        match lhs.checked_mul(rhs) {
            Some(value) => Ok(value),
            None => Err(error!(Overflow)),
        }
    }

    pub fn divide(lhs: i32, rhs: i32) -> Result<i32> {
        match lhs.checked_div(rhs) {
            Some(value) => Ok(value),
            None => {
                if rhs == 0 {
                    Err(error!(DivisionByZero))
                } else {
                    Err(error!(Overflow))
                }
            }
        }
    }

    pub fn compare(operator: &Operator, lhs: i32, rhs: i32) -> Result<bool> {
        use Operator::*;
        match operator {
            Equal => Ok(lhs == rhs),
            Greater => Ok(lhs > rhs),
            Less => Ok(lhs < rhs),
            _ => Err(error!(InternalError; "UNSUPPORTED COMPARISON")),
        }
    }
}
