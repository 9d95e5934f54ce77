//! Command dispatch logic for roadsearch

use std::time::Instant;

use crate::cli::Cli;
use roadsearch_core::error::Result;

mod command;
mod commands;
mod macros;

pub(crate) use command::CommandContext;
use command::{Command, NoCommand};
pub(crate) use macros::trace_command;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
