//! Integer arithmetic used when folding constant operations.

use binexp_parser::parser::token::op::BinOpKind;
use rug::Integer;

/// Creates an [`Integer`] with the given value.
pub fn int<T>(n: T) -> Integer
where
    Integer: From<T>,
{
    Integer::from(n)
}

/// Evaluates the binary operation on two integers.
///
/// `+`, `-` and `*` are exact. `/` and `%` round the quotient toward negative infinity, so the
/// remainder always has the sign of the divisor (`-7 / 2 = -4`, `-7 % 2 = 1`).
///
/// Returns [`None`] if the operation is `/` or `%` and the divisor is zero.
pub fn eval_binary(kind: BinOpKind, lhs: &Integer, rhs: &Integer) -> Option<Integer> {
    match kind {
        BinOpKind::Add => Some(Integer::from(lhs + rhs)),
        BinOpKind::Sub => Some(Integer::from(lhs - rhs)),
        BinOpKind::Mul => Some(Integer::from(lhs * rhs)),
        BinOpKind::Div | BinOpKind::Mod => {
            if rhs.is_zero() {
                return None;
            }

            let (quotient, remainder) = lhs.clone().div_rem_floor(rhs.clone());
            if kind == BinOpKind::Div {
                Some(quotient)
            } else {
                Some(remainder)
            }
        },
    }
}
