mod cli;
mod commands;
mod support;

use clap::{CommandFactory, FromArgMatches};
use cli::{Cli, Commands};

fn main() {
    support::init_tracing();
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());
    let config = support::load_config_or_exit(cli.config.as_deref());

    // The operation's command-line spelling, e.g. `upper-first`.
    let op = matches
        .subcommand()
        .and_then(|(_, group)| group.subcommand_name())
        .unwrap_or_default()
        .to_string();

    match cli.command {
        Commands::Validate { rule, inputs } => commands::validate::run(rule, inputs, cli.json),
        Commands::Str(command) => commands::str_op::run(&op, command, config.str, cli.json),
        Commands::Ary(command) => commands::ary_op::run(&op, command, config.ary, cli.json),
    }
}
