//! Recoverable calculator errors

use std::fmt;

///every condition the calculator reports, none of them fatal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
	///push onto a full stack, value is discarded
	StackOverflow,
	///not enough operands, stack is left alone
	StackUnderflow,
	///`/` or `%` with divisor 0, operands are restored
	DivideByZero,
	///`^` with negative exponent, operands are restored
	NegativePower,
	///one offending character
	Unrecognised(char)
}
use CalcError::*;

impl fmt::Display for CalcError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			StackOverflow => write!(f, "Stack overflow."),
			StackUnderflow => write!(f, "Stack underflow."),
			DivideByZero => write!(f, "Divide by 0."),
			NegativePower => write!(f, "Negative power."),
			Unrecognised(c) => write!(f, "Unrecognised operator or operand \"{c}\".")
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn messages_match_legacy_wording() {
		assert_eq!(StackOverflow.to_string(), "Stack overflow.");
		assert_eq!(StackUnderflow.to_string(), "Stack underflow.");
		assert_eq!(DivideByZero.to_string(), "Divide by 0.");
		assert_eq!(NegativePower.to_string(), "Negative power.");
		assert_eq!(Unrecognised('x').to_string(), "Unrecognised operator or operand \"x\".");
	}
}
