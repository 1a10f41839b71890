use std::process::ExitCode;

use adaptive_icon::{IconAdapter, IconPaths};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stdout)
        .init();

    match IconAdapter::new(IconPaths::default()).run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) if err.is_fatal() => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
        Err(err) => {
            log::error!("An error occurred: {err}");
            ExitCode::SUCCESS
        }
    }
}
