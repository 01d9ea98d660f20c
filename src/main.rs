use std::fs::File;

use clap::Parser;
use env_logger::{Env, Target};

use cadence::cli::Cli;
use cadence::runtime;

fn init_logging(cli: &Cli) -> cadence::Result<()> {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(path) = &cli.log_file {
        let file = File::create(path)?;
        builder.target(Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

fn main() -> cadence::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    if cli.dump_config {
        let settings = runtime::load_settings(&cli);
        print!("{}", settings.to_toml()?);
        return Ok(());
    }

    runtime::run(cli)
}
