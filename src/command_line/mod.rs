/// Argument parsing and the handlers behind each subcommand.
pub(crate) mod cli;
