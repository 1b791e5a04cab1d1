//! Bounded saturating stack and the operations on it

use log::trace;
use crate::errors::CalcError::{self, *};
use crate::literal::saturate;
use crate::random::RandSeq;
use crate::tokens::{Op, Cmd};

///maximum number of values the stack holds
pub const STACK_CAP: usize = 23;

///Bundled state storage for one calculator session
#[derive(Debug, Clone, Default)]
pub struct State {
	///main stack, top is the last element
	stk: Vec<i32>,
	///replay cursor for `r`
	rng: RandSeq
}

impl State {
	///replace the random sequence, e.g. to start from a different entry
	pub fn custom_rng(mut self, r: RandSeq) -> Self {
		self.rng = r;
		self
	}

	///stack contents, bottom first
	pub fn stack(&self) -> &[i32] {
		&self.stk
	}

	pub fn rng(&self) -> &RandSeq {
		&self.rng
	}

	///capacity-checked push, the value is dropped on overflow
	pub fn push(&mut self, n: i32) -> Result<(), CalcError> {
		if self.stk.len() >= STACK_CAP {
			return Err(StackOverflow);
		}
		self.stk.push(n);
		Ok(())
	}

	///apply a binary operator to the top two values
	pub fn operate(&mut self, op: Op) -> Result<(), CalcError> {
		if self.stk.len() < 2 {
			return Err(StackUnderflow);
		}
		let a = self.stk.pop().unwrap_or_default();	//right-hand operand, pushed last
		let b = self.stk.pop().unwrap_or_default();
		let (wa, wb) = (a as i64, b as i64);

		let res = match op {
			Op::Add => wa + wb,
			Op::Sub => wb - wa,
			Op::Mul => wa * wb,
			Op::Div | Op::Rem if a == 0 => {
				self.stk.push(b);
				self.stk.push(a);
				return Err(DivideByZero);
			},
			Op::Div => wb / wa,
			Op::Rem => wb % wa,
			Op::Pow => {
				if a < 0 {
					self.stk.push(b);
					self.stk.push(a);
					return Err(NegativePower);
				}
				wb.saturating_pow(a as u32)
			}
		};
		trace!("{b} {op:?} {a} = {res}");
		self.push(saturate(res))	//two pops guarantee room
	}

	///run a command, returning the values it prints in order
	pub fn command(&mut self, cmd: Cmd) -> Result<Vec<i32>, CalcError> {
		match cmd {
			Cmd::Peek => {
				self.stk.last().map(|n| vec![*n]).ok_or(StackUnderflow)
			},
			Cmd::Dump => {
				Ok(self.stk.iter().rev().copied().collect())
			},
			Cmd::Rand => {
				if self.stk.len() >= STACK_CAP {
					return Err(StackOverflow);	//don't waste a draw
				}
				let n = self.rng.draw();
				self.push(n)?;
				Ok(Vec::new())
			}
		}
	}
}
