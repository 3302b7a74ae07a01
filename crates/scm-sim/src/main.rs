use std::error::Error;

use clap::{Parser, Subcommand};

use commands::{
    mcmc::{self, McmcArgs},
    rejection::{self, RejectionArgs},
};

mod commands;
mod io;

#[derive(Parser, Debug)]
#[command(name = "scm-sim", about = "Simplicial configuration model sampler CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Draw exact uniform samples by rejection.
    Rejection(RejectionArgs),
    /// Sample with the edge-swap Markov chain.
    Mcmc(McmcArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    match cli.command {
        Command::Rejection(args) => rejection::run(&args),
        Command::Mcmc(args) => mcmc::run(&args),
    }
}
