// src/core/runner.rs

use crate::{
    models::{Pack, RunReport},
    system::executor,
    ui,
};
use colored::*;

/// Runs every command of a pack in order, printing per-command progress and
/// a summary, and returns the aggregated [`RunReport`].
///
/// A failing command never stops the sequence; the remaining commands still
/// run and the failure is carried into the summary. An empty pack runs zero
/// commands and reports zero completed, zero errors.
pub fn run_pack(pack: &Pack, dry_run: bool) -> RunReport {
    let mut report = RunReport::default();

    println!();
    println!("Pack name: [{}]", pack.name);
    ui::rule();

    for command in &pack.commands {
        report.attempted += 1;
        println!();
        let msg = format!("[execute {}]: {}", report.attempted, command);
        println!("{msg}");
        if executor::execute_command(command, dry_run) {
            println!("{}", "[Successfully]".green());
        } else {
            report.errors.push(format!("Error: {msg}"));
            println!("{}", "[Error]".red());
        }
        ui::rule();
    }

    ui::separator("", '=');
    println!("The command package [{}] is executed.", pack.name);
    println!(
        "Commands completed: [{}] | Errors: [{}]",
        report.succeeded(),
        report.errors.len()
    );

    report
}
