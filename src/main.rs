use anyhow::Result;
use clap::Parser;
use confbox::cli::{self, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Routes all log::info!() etc. to the debug log file. The --log-level
    // flag takes precedence over DEBUG_LEVEL and RUST_LOG.
    confbox::debug::init_log_bridge(cli.log_level.map(Into::into));
    log::info!("Starting confbox {}", confbox::VERSION);

    let mut stdout = std::io::stdout().lock();
    let mut stderr = std::io::stderr().lock();
    let code = cli::run(cli, &mut stdout, &mut stderr)?;
    if code != 0 {
        drop(stdout);
        drop(stderr);
        std::process::exit(code);
    }
    Ok(())
}
