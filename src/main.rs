use std::env;
use std::process::ExitCode;

use line_logger::{labels, Logger};

fn main() -> ExitCode {
    // Optional first argument: file to append to instead of stdout
    let path = env::args().nth(1);

    let logger = match Logger::new(path.as_deref()) {
        Ok(logger) => logger,
        Err(err) => {
            eprintln!("line_logger: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let pid = std::process::id().to_string();
    logger.info("logger started", &labels!["pid" => &pid]);
    logger.debug("output selected", &labels!["target" => path.as_deref().unwrap_or("stdout")]);

    ExitCode::SUCCESS
}
