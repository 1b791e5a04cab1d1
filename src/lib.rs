//! Saturating RPN calculator: tokenizer, literal parser and bounded stack machine

#[macro_use]
extern crate lazy_static;

pub mod errors;

pub mod random;

pub mod literal;

pub mod tokens;

pub mod machine;

use std::io::{Write, BufRead};
use log::{debug, trace};

pub use errors::CalcError;
pub use machine::State;
pub use random::RandSeq;
use literal::Literal;
use tokens::Token;

///line that is answered instead of evaluated
pub const EASTER_EGG: &str = "rachid";
///the answer
pub const EASTER_EGG_MSG: &str = "Rachid is the best unit lecturer.";

///Bundle of generic IO streams, for brevity.
pub struct IOTriple<'a> {
	pub input: &'a mut dyn BufRead,
	pub output: &'a mut dyn Write,
	pub error: &'a mut dyn Write
}
#[macro_export]
///Default IO triple using stdin, stdout, stderr
macro_rules! stdio {
	() => {
		::srpn::IOTriple {
			input: &mut ::std::io::BufReader::new(::std::io::stdin()),
			output: &mut ::std::io::stdout(),
			error: &mut ::std::io::stderr()
		}
	}
}

///Evaluates one input line on the given state.
///
///Results of `=` and `d` go to `output`, calculator errors to `error`, one per line.
///A line that is exactly `rachid` only prints the easter egg message.
///Everything from the first `#` on is a comment.
///
///Terminates with `Err` only if a write on an IO stream fails.
pub fn exec(st: &mut State, io: &mut IOTriple, line: &str) -> std::io::Result<()> {
	if line == EASTER_EGG {
		writeln!(io.output, "{EASTER_EGG_MSG}")?;
		return Ok(());
	}
	let code = line.split_once('#').unwrap_or((line, "")).0;	//remove comment

	let toks = tokens::split(code);
	debug!("tokens: {toks:?}");

	for tok in toks {
		let res = match tok {
			Token::Number(raw) | Token::MinusOrNegative(raw) => match literal::parse(raw) {
				Literal::Value(n) => st.push(n).map(|_| Vec::new()),
				Literal::NotNumeric if raw == "-" => st.operate(tokens::Op::Sub).map(|_| Vec::new()),
				Literal::NotNumeric => {
					for c in raw.chars() {
						report(io, CalcError::Unrecognised(c))?;
					}
					continue;
				}
			},
			Token::Operator(op) => st.operate(op).map(|_| Vec::new()),
			Token::Command(cmd) => st.command(cmd),
			Token::Unrecognized(c) => Err(CalcError::Unrecognised(c))
		};
		match res {
			Ok(printed) => {
				for n in printed {
					writeln!(io.output, "{n}")?;
				}
			},
			Err(e) => report(io, e)?
		}
		trace!("stack: {:?}", st.stack());
	}
	Ok(())
}

fn report(io: &mut IOTriple, e: CalcError) -> std::io::Result<()> {
	debug!("{e:?}");
	writeln!(io.error, "{e}")
}

///Evaluates every line of `io.input` until end of stream.
///
///Lines may end in `\n` or `\r\n`, invalid UTF-8 is replaced rather than rejected.
///Stops early only on an IO failure.
pub fn run(st: &mut State, io: &mut IOTriple) -> std::io::Result<()> {
	let mut buf = Vec::new();
	loop {
		buf.clear();
		if io.input.read_until(b'\n', &mut buf)? == 0 {
			break;
		}
		let raw = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
		let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
		exec(st, io, &String::from_utf8_lossy(raw))?;
	}
	Ok(())
}
