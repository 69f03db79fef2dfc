//! Check system dependencies handler.
//!
//! Checks for the commands and libraries a bot deployment needs and
//! displays them in a formatted, user-friendly way.

use clubkit_core::{Dependency, DependencyStatus, SystemProbePort};

use crate::error::CliError;

// ANSI color codes for better UX
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const BLUE: &str = "\x1b[34m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Execute the check-deps command.
///
/// Displays all dependencies in a table and fails when a required one is
/// missing, so scripted deployments can gate on the exit code.
pub fn execute(probe: &dyn SystemProbePort) -> Result<(), CliError> {
    println!("{BOLD}{BLUE}Checking system dependencies...{RESET}\n");

    let dependencies = probe.check_all_dependencies();

    println!("{BOLD}{:<14} {:<12} {:<30}{RESET}", "DEPENDENCY", "STATUS", "NOTES");
    println!("{}", "=".repeat(60));

    for dep in &dependencies {
        print_dependency(dep);
    }

    let missing_required: Vec<&Dependency> = dependencies
        .iter()
        .filter(|d| d.required && matches!(d.status, DependencyStatus::Missing))
        .collect();

    let present_required = dependencies
        .iter()
        .filter(|d| d.required && matches!(d.status, DependencyStatus::Present { .. }))
        .count();
    let total_required = dependencies.iter().filter(|d| d.required).count();

    println!("{}", "=".repeat(60));
    if missing_required.is_empty() {
        println!(
            "{GREEN}✓ All required dependencies are installed!{RESET} ({present_required}/{total_required})"
        );
        println!("\n{BOLD}You can now run: {BLUE}clubkit setup{RESET}");
        Ok(())
    } else {
        println!(
            "{RED}✗ {} required dependencies are missing.{RESET} ({present_required}/{total_required})",
            missing_required.len()
        );
        println!();
        print_installation_instructions(&missing_required);
        Err(CliError::General(
            "Missing required dependencies".to_string(),
        ))
    }
}

fn print_dependency(dep: &Dependency) {
    match &dep.status {
        DependencyStatus::Present { version } => {
            println!(
                "{:<14} {GREEN}{:<12}{RESET} {} ({version})",
                dep.name, "OK", dep.description
            );
        }
        DependencyStatus::Missing if dep.required => {
            println!(
                "{:<14} {RED}{:<12}{RESET} {}",
                dep.name, "MISSING", dep.description
            );
        }
        DependencyStatus::Missing => {
            println!(
                "{:<14} {YELLOW}{:<12}{RESET} {} (optional)",
                dep.name, "missing", dep.description
            );
        }
    }
}

fn print_installation_instructions(missing: &[&Dependency]) {
    println!("{BOLD}Installation hints:{RESET}");
    for dep in missing {
        match dep.name {
            "python3" => {
                println!("  python3:  apt install python3 python3-venv  (or: brew install python)");
            }
            "pip" => {
                println!("  pip:      apt install python3-pip  (or bundled with brew python)");
            }
            other => {
                println!("  {other}:  install via your system package manager");
            }
        }
    }
}
