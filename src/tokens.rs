//! Line splitting and token classification

use phf::phf_map;
use regex::Regex;

///arithmetic operators, all binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
	Add,
	Sub,
	Mul,
	Div,
	Rem,
	Pow
}

///stack commands that are not arithmetic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmd {
	///print top
	Peek,
	///print whole stack
	Dump,
	///push next random number
	Rand
}

pub(crate) static OPS: phf::Map<char, Op> = phf_map! {
	'+' => Op::Add,
	'-' => Op::Sub,
	'*' => Op::Mul,
	'/' => Op::Div,
	'%' => Op::Rem,
	'^' => Op::Pow,
};

pub(crate) static CMDS: phf::Map<char, Cmd> = phf_map! {
	'=' => Cmd::Peek,
	'd' => Cmd::Dump,
	'r' => Cmd::Rand,
};

///ASCII-only whitespace, no-break and other Unicode spaces are ordinary characters
const SPACES: [char; 6] = [' ', '\t', '\n', '\x0B', '\x0C', '\r'];

lazy_static! {
	///one match per raw token, whitespace runs included so the matches tile the line:
	///self-delimiting symbols, single lowercase letters, `-` with whatever sticks to it, other runs
	static ref TOKEN_RE: Regex = Regex::new(
		r"[ \t\n\x0B\x0C\r]+|[+*/%^.]|[a-z]|-[^ \t\n\x0B\x0C\r+*/%^.a-z-]*|[^ \t\n\x0B\x0C\r+*/%^.a-z-]+"
	).unwrap();
}

///one unit of work for the stack machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
	///all ASCII digits
	Number(&'a str),
	///starts with `-`: a negative literal or subtraction, decided by the literal parser
	MinusOrNegative(&'a str),
	Operator(Op),
	Command(Cmd),
	Unrecognized(char)
}

///split a comment-free line into tokens, in order
pub fn split(line: &str) -> Vec<Token<'_>> {
	let mut toks = Vec::new();
	for m in TOKEN_RE.find_iter(line) {
		let raw = m.as_str();
		if raw.starts_with(SPACES) {continue;}
		classify(raw, &mut toks);
	}
	toks
}

fn classify<'a>(raw: &'a str, toks: &mut Vec<Token<'a>>) {
	if raw.starts_with('-') {
		toks.push(Token::MinusOrNegative(raw));
		return;
	}
	if raw.bytes().all(|b| b.is_ascii_digit()) {
		toks.push(Token::Number(raw));
		return;
	}
	let mut chars = raw.chars();
	if let (Some(c), None) = (chars.next(), chars.next()) {	//single char
		if let Some(op) = OPS.get(&c) {
			toks.push(Token::Operator(*op));
			return;
		}
		if let Some(cmd) = CMDS.get(&c) {
			toks.push(Token::Command(*cmd));
			return;
		}
	}
	toks.extend(raw.chars().map(Token::Unrecognized));
}
