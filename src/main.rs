use std::str::FromStr;
use anyhow::Context;
use srpn::{stdio, State};

///environment variable selecting the log level, no logger is installed if unset
const LOG_VAR: &str = "SRPN_LOG";

fn main() -> anyhow::Result<()> {
	if let Ok(lvl) = std::env::var(LOG_VAR) {
		let level = log::Level::from_str(&lvl).ok()
			.with_context(|| format!("invalid {LOG_VAR} value \"{lvl}\""))?;
		simple_logger::init_with_level(level)?;
	}

	let mut st = State::default();
	srpn::run(&mut st, &mut stdio!()).context("lost a standard stream")?;
	Ok(())
}
