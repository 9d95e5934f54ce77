//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::Cli;
use roadsearch_core::config::SearchConfig;
use roadsearch_core::error::Result;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    /// Config from `--config`, or the user config file if one exists
    pub fn load_config(&self) -> Result<SearchConfig> {
        let config = SearchConfig::resolve(self.cli.config.as_deref())?;
        super::trace_command!(self.cli, self.start, "load_config");
        Ok(config)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("roadsearch {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Compare BFS, DFS, UCS and A* route searches on a road graph.");
        println!();
        println!("Run `roadsearch --help` for usage information.");
        Ok(())
    }
}
