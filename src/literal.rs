//! Numeric literal parsing with saturation and legacy octal handling

///longest token that is still safe to widen into an `i64`
pub const MAX_WIDE_LEN: usize = 18;

///outcome of trying to read a token as a number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Literal {
	///saturated value ready to push
	Value(i32),
	///not of the shape `-?[0-9]+`, caller treats it as operator/command
	NotNumeric
}

///clamp a widened value to the `i32` range
#[inline(always)]
pub fn saturate(n: i64) -> i32 {
	n.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

///read a literal: optional `-`, then ASCII digits.
///
///Too-long tokens go straight to the bound matching their sign, out-of-range values clamp,
///and a leading `0` followed by more digits selects octal.
pub fn parse(token: &str) -> Literal {
	let digits = token.strip_prefix('-').unwrap_or(token);
	if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
		return Literal::NotNumeric;
	}
	let neg = digits.len() != token.len();

	if token.len() > MAX_WIDE_LEN {
		return Literal::Value(if neg {i32::MIN} else {i32::MAX});
	}

	let wide: i64 = match token.parse() {
		Ok(n) => n,
		Err(_) => return Literal::NotNumeric	//unreachable for 18 digits or fewer
	};
	if wide > i32::MAX as i64 || wide < i32::MIN as i64 {
		return Literal::Value(saturate(wide));	//bound check always uses the untruncated digits
	}

	if digits.len() > 1 && digits.starts_with('0') {
		Literal::Value(octal(digits, neg))
	}
	else {
		Literal::Value(wide as i32)
	}
}

///octal value of a digit string, cut short at the first 8 or 9 like the legacy calculator
fn octal(digits: &str, neg: bool) -> i32 {
	let valid = digits.split(['8', '9']).next().unwrap_or("");
	let mag = valid.bytes().fold(0_i64, |acc, b| acc * 8 + (b - b'0') as i64);
	saturate(if neg {-mag} else {mag})
}
