use clap::ErrorKind;
use pngseam::{init_logging, resize_file, CarveConfig, CarveError};
use std::env;
use std::process;

fn main() {
    let config = match CarveConfig::from_args(env::args_os()) {
        Ok(config) => config,
        // Help and version are not failures; clap prints them and exits 0.
        Err(CarveError::Cli(ref e))
            if e.kind == ErrorKind::HelpDisplayed || e.kind == ErrorKind::VersionDisplayed =>
        {
            e.exit()
        }
        Err(e) => {
            match e {
                // clap's message already carries the usage text.
                CarveError::Cli(ref usage) => eprintln!("{}", usage.message),
                _ => eprintln!("pngseam: {}", e),
            }
            process::exit(e.exit_code());
        }
    };
    init_logging(config.verbosity);

    if let Err(e) = resize_file(&config) {
        eprintln!("pngseam: {}", e);
        process::exit(e.exit_code());
    }
}
