//! detect-solutions - CI helper listing the solutions a commit range touched

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = solution_detect::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
