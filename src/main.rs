use std::process::ExitCode;

fn main() -> ExitCode {
    match session_transcripts::cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("ERROR: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
