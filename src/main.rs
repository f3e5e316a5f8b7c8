use clap::Parser;
use devid_lib::{bootstrap, cli::Cli};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = bootstrap::run(cli) {
        eprintln!("devid failed: {e:#}");
        std::process::exit(1);
    }
}
