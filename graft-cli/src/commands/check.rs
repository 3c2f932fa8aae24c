//! Implementation of the `check` command: compare a reference/target
//! pair and print the compatibility warnings.

use graft_core::media::{self, ProbeSession};
use graft_core::{CoreError, CoreResult, compat};
use owo_colors::OwoColorize;

use crate::cli::CheckArgs;

pub fn run_check(args: CheckArgs) -> CoreResult<()> {
    let session = ProbeSession::new();
    let reference = media::normalize(&args.reference, &session.probe(&args.reference)?)?;
    let target = media::normalize(&args.target, &session.probe(&args.target)?)?;

    let warnings = compat::check(&reference, &target);

    if args.json {
        let json = serde_json::to_string_pretty(&warnings)
            .map_err(|e| CoreError::Json(e.to_string()))?;
        println!("{json}");
        return Ok(());
    }

    if warnings.is_empty() {
        println!("{}", "No compatibility warnings.".green());
        return Ok(());
    }

    println!(
        "{} warning(s) for {} vs {}:",
        warnings.len(),
        args.reference.display(),
        args.target.display()
    );
    for warning in &warnings {
        println!("  {} {}", "warning:".yellow().bold(), warning);
    }

    // Warnings are advisory; the command still succeeds.
    Ok(())
}
