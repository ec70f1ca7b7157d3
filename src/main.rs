use std::process::ExitCode;

fn main() -> ExitCode {
    match fred_extract::app::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}
