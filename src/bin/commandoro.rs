// src/bin/commandoro.rs

use clap::Parser;
use colored::*;
use commandoro::{
    cli::Cli,
    core::{selector::SelectorError, session::Session},
    models::AppInfo,
};

/// The main entry point of the `commandoro` application.
/// It sets up logging, parses arguments, runs the session, and performs
/// centralized error handling.
fn main() {
    env_logger::init();

    let session = Session::new(Cli::parse(), AppInfo::from_build_env());
    if let Err(e) = session.run() {
        // --- Centralized Error Handling ---
        // An interrupted prompt (Ctrl+C) is a deliberate abort, not a
        // failure: exit silently with the standard interrupt exit code.
        if let Some(sel_err) = e.downcast_ref::<SelectorError>()
            && sel_err.is_interrupt()
        {
            std::process::exit(130);
        }

        // For all other errors, print a formatted message to stderr and
        // exit with a failure code. Note that failing *commands* never take
        // this path; their errors are reported in the run summary and the
        // process still exits zero.
        eprintln!("\n{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}
