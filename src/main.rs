use std::process::ExitCode;

use clap::Parser;
use postinumero::{
    PostinumeroInput, config::PostinumeroConfig, logging::init_logging, lookup_postal,
};
use tracing::error;

pub fn main() -> ExitCode {
    if let Err(err) = init_logging() {
        eprintln!("{err}");
    }

    let input = PostinumeroInput::parse();
    let args: Vec<String> = std::env::args().collect();

    let result = PostinumeroConfig::from_env()
        .and_then(|config| lookup_postal(&config, &input, &args, std::io::stdout().lock()));

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
