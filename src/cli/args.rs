use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cliperest")]
#[command(about = "Operator tooling for the cliperest database", version)]
pub(crate) struct Cli {
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    pub(crate) version: Option<bool>,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Insert the sample book plus a clipping referencing it
    Seed,
    /// Interactive query executor against the configured database
    #[command(alias = "sql")]
    Query,
    /// Connect, report the connection state, disconnect
    Ping,
    /// Generate a virtual try-on image from a face and a clothing photo
    Tryon,
}
