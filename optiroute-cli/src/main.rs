//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = optiroute_cli::run() {
        eprintln!("optiroute: {err}");
        std::process::exit(1);
    }
}
