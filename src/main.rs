use clap::Parser;
use epw2wth::cli::{
    args::Args,
    commands::{self, FAILURE_MESSAGE},
};
use std::process;

fn main() {
    let args = Args::parse();

    match commands::run(args) {
        Ok(_stats) => {
            // Success message and summary have already been printed
            process::exit(0);
        }
        Err(error) => {
            eprintln!("{}", FAILURE_MESSAGE);
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}
