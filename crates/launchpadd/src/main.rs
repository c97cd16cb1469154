use std::process::ExitCode;

use launchpadd::EXIT_FAILURE;

fn main() -> ExitCode {
    match launchpadd::run_daemon() {
        Ok(code) => ExitCode::from(code),
        Err(error) => {
            eprintln!("launchpadd: {error}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}
