//! Command implementations for all roadsearch commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{compare, endpoints, search};
use roadsearch_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Search(args) => {
                let config = ctx.load_config()?;
                search::execute(ctx, &config, args)
            }
            Commands::Compare(args) => {
                let config = ctx.load_config()?;
                compare::execute(ctx, &config, args)
            }
            Commands::Endpoints(args) => endpoints::execute(ctx, args),
        }
    }
}
