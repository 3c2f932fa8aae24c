//! Implementation of the `new` command: probe a reference/target pair,
//! report compatibility, and write the project file.

use graft_core::media::{self, ProbeSession};
use graft_core::project::{Project, store};
use graft_core::{CoreResult, compat};
use owo_colors::OwoColorize;

use crate::cli::NewArgs;

pub fn run_new(args: NewArgs) -> CoreResult<()> {
    let name = args.name.clone().unwrap_or_else(|| {
        args.project_file
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "untitled".to_string())
    });

    let session = ProbeSession::new();
    let reference = media::normalize(&args.reference, &session.probe(&args.reference)?)?;
    let target = media::normalize(&args.target, &session.probe(&args.target)?)?;

    let warnings = compat::check(&reference, &target);

    let mut project = Project::new(name);
    project.paths.reference_path = args.reference.clone();
    project.paths.target_path = args.target.clone();
    project.videos.reference = Some(reference);
    project.videos.target = Some(target);

    store::save(&args.project_file, &project)?;
    log::info!("Project written to {}", args.project_file.display());
    println!("Created project {}", args.project_file.display());

    if warnings.is_empty() {
        println!("{}", "No compatibility warnings.".green());
    } else {
        println!("{} compatibility warning(s):", warnings.len());
        for warning in &warnings {
            println!("  {} {}", "warning:".yellow().bold(), warning);
        }
    }

    Ok(())
}
