use anyhow::Context;
use nanoc_drv::DriverError;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    match nanoc_drv::run(std::env::args()) {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(DriverError::BadUsage) => {
            eprintln!("{}", DriverError::BadUsage);
            std::process::exit(1);
        }
        Err(err) => Err(err).context("nanoc failed"),
    }
}
