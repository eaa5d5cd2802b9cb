// src/core/session.rs

use crate::{
    cli::Cli,
    constants::{DEFAULT_CONFIG_FILENAME, DEFAULT_PACK_NAME},
    core::{loader, runner, selector},
    models::{AppInfo, PackCatalog},
    ui,
};
use anyhow::Result;
use std::{
    env,
    path::{Path, PathBuf},
};

/// One program invocation: resolve the configuration, determine the pack to
/// run (from `--name` or interactively), run it, and optionally chain the
/// `default` pack afterwards.
#[derive(Debug)]
pub struct Session {
    options: Cli,
    info: AppInfo,
}

impl Session {
    pub fn new(options: Cli, info: AppInfo) -> Self {
        Self { options, info }
    }

    /// Runs the whole session, opening and closing banners included.
    ///
    /// Command failures inside a pack are reported in the run summary and do
    /// not turn into an `Err` here; the only error path out is an
    /// interrupted or broken interactive prompt.
    pub fn run(&self) -> Result<()> {
        ui::start_banner(&self.info);

        let path = resolve_config_path(self.options.file.as_deref());
        log::debug!("Loading configuration from '{}'", path.display());
        let catalog = loader::load_catalog(&path);

        if catalog.is_empty() {
            println!("No data available...");
            ui::end_banner(&self.info);
            return Ok(());
        }

        // An explicit --name only bypasses the menu when it actually exists
        // in the catalog; otherwise the selector takes over.
        let chosen = match &self.options.name {
            Some(name) if catalog.contains(name) => name.clone(),
            _ => selector::select_pack(&catalog)?,
        };

        for name in execution_plan(&chosen, self.options.default, &catalog) {
            if let Some(pack) = catalog.get(&name) {
                runner::run_pack(pack, self.options.test);
            }
        }

        ui::end_banner(&self.info);
        Ok(())
    }
}

/// The explicit `--file` path when it exists, otherwise `config.json` next
/// to the executable (announced to the user).
fn resolve_config_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit
        && path.exists()
    {
        return path.to_path_buf();
    }
    println!("The path is not found, we are looking for the default file...");
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_default()
        .join(DEFAULT_CONFIG_FILENAME)
}

/// The ordered list of pack names one run will execute: the chosen pack,
/// then `default` when chaining is requested, `default` exists, and the
/// chosen pack is not itself `default`.
fn execution_plan(chosen: &str, chain_default: bool, catalog: &PackCatalog) -> Vec<String> {
    let mut plan = vec![chosen.to_string()];
    if chain_default && chosen != DEFAULT_PACK_NAME && catalog.contains(DEFAULT_PACK_NAME) {
        plan.push(DEFAULT_PACK_NAME.to_string());
    }
    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Pack;

    fn catalog(names: &[&str]) -> PackCatalog {
        names
            .iter()
            .map(|name| Pack::new(*name, vec!["true".to_string()]))
            .collect()
    }

    #[test]
    fn test_plan_chains_default_after_primary() {
        let catalog = catalog(&["A", "default"]);
        assert_eq!(execution_plan("A", true, &catalog), ["A", "default"]);
    }

    #[test]
    fn test_plan_without_chain_flag_runs_only_primary() {
        let catalog = catalog(&["A", "default"]);
        assert_eq!(execution_plan("A", false, &catalog), ["A"]);
    }

    #[test]
    fn test_plan_never_runs_default_twice() {
        let catalog = catalog(&["A", "default"]);
        assert_eq!(execution_plan("default", true, &catalog), ["default"]);
    }

    #[test]
    fn test_plan_skips_chaining_when_default_is_absent() {
        let catalog = catalog(&["A", "B"]);
        assert_eq!(execution_plan("A", true, &catalog), ["A"]);
    }

    #[test]
    fn test_chained_run_executes_primary_then_default() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"A": ["exit 0"], "default": ["exit 0"]}"#)
            .unwrap();
        file.flush().unwrap();

        // The exact passes a session with `--name A --default` performs.
        let catalog = loader::load_catalog(file.path());
        let plan = execution_plan("A", true, &catalog);
        assert_eq!(plan, ["A", "default"]);

        for name in &plan {
            let report = runner::run_pack(catalog.get(name).unwrap(), false);
            assert_eq!(report.attempted, 1);
            assert_eq!(report.succeeded(), 1);
            assert!(report.errors.is_empty());
        }
    }

    #[test]
    fn test_explicit_existing_path_is_used_as_is() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert_eq!(resolve_config_path(Some(file.path())), file.path());
    }

    #[test]
    fn test_missing_explicit_path_falls_back_to_default_file() {
        let path = resolve_config_path(Some(Path::new("/definitely/not/here.json")));
        assert!(path.ends_with(DEFAULT_CONFIG_FILENAME));
    }

    #[test]
    fn test_no_explicit_path_falls_back_to_default_file() {
        assert!(resolve_config_path(None).ends_with(DEFAULT_CONFIG_FILENAME));
    }
}
