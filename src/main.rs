use grouper::commands::Cli;
use tracing::error;

fn main() {
    tracing_subscriber::fmt::init();

    if let Err(err) = Cli::run() {
        error!("{err:#}");
        std::process::exit(1);
    }
}
