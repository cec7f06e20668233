//! The Minnie hello binary.

use clap::Parser;

/// Prints the Minnie greeting.
#[derive(Parser)]
#[command(name = "minnie-hello", about = "Prints the Minnie greeting", long_about = None)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();
    println!("Hello Minnie");
}
