//! Command dispatch for one-shot subcommands and the interactive shell

use std::io::{self, Write};
use std::sync::Arc;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::services::{DeleteOutcome, Dictionary, InsertOutcome};
use crate::application::ApplicationError;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::input::{validate, InputKind};
use crate::cli::output;
use crate::cli::shell::Shell;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, local_config_path, Settings};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::traits::{FileSystem, RealFileSystem};
use crate::infrastructure::InfraError;
use crate::util::path::absolute_display;

pub fn execute_command(cli: &Cli, settings: Settings) -> CliResult<()> {
    let settings = settings.with_store_path(cli.store.as_deref());

    match &cli.command {
        Some(Commands::Config { command }) => return config(command, &settings),
        Some(Commands::Completion { shell }) => return completion(*shell),
        _ => {}
    }

    let container = ServiceContainer::new(settings)?;
    let mut dict = container.dictionary()?;

    match &cli.command {
        Some(Commands::Insert { words }) => insert(&mut dict, words),
        Some(Commands::Delete { words }) => delete(&mut dict, words),
        Some(Commands::Search { prefix }) => search(&dict, prefix),
        Some(Commands::List) => list(&dict),
        Some(Commands::Show) => show(&dict),
        Some(Commands::Check) => check(&dict),
        Some(Commands::Shell) | None => shell(&mut dict, &container.settings.prompt),
        Some(Commands::Config { .. }) | Some(Commands::Completion { .. }) => Ok(()),
    }
}

/// Validate every word before touching the dictionary.
fn validate_all<'a>(words: &'a [String], kind: InputKind) -> CliResult<Vec<&'a str>> {
    words.iter().map(|word| validate(word, kind)).collect()
}

#[instrument(skip(dict))]
fn insert(dict: &mut Dictionary, words: &[String]) -> CliResult<()> {
    let mut out = io::stdout().lock();
    for word in validate_all(words, InputKind::Word)? {
        match dict.insert(word)? {
            InsertOutcome::Inserted => output::success(&mut out, &format!("inserted '{word}'"))?,
            InsertOutcome::Duplicate => {
                output::warning(&mut out, &format!("'{word}' is already in the dictionary"))?
            }
        }
    }
    Ok(())
}

#[instrument(skip(dict))]
fn delete(dict: &mut Dictionary, words: &[String]) -> CliResult<()> {
    let mut out = io::stdout().lock();
    for word in validate_all(words, InputKind::Word)? {
        match dict.delete(word)? {
            DeleteOutcome::Deleted => output::success(&mut out, &format!("removed '{word}'"))?,
            DeleteOutcome::NotFound => output::warning(&mut out, &format!("'{word}' not found"))?,
        }
    }
    Ok(())
}

#[instrument(skip(dict))]
fn search(dict: &Dictionary, prefix: &str) -> CliResult<()> {
    let prefix = validate(prefix, InputKind::Prefix)?;
    let matches = dict.complete(prefix);
    debug!("{} matches", matches.len());
    output::info(&mut io::stdout().lock(), &output::format_list(&matches))?;
    Ok(())
}

#[instrument(skip(dict))]
fn list(dict: &Dictionary) -> CliResult<()> {
    output::info(&mut io::stdout().lock(), &output::format_list(&dict.words()))?;
    Ok(())
}

#[instrument(skip(dict))]
fn show(dict: &Dictionary) -> CliResult<()> {
    output::info(&mut io::stdout().lock(), &dict.tree().to_display_tree())?;
    Ok(())
}

#[instrument(skip(dict))]
fn check(dict: &Dictionary) -> CliResult<()> {
    dict.tree().verify().map_err(ApplicationError::from)?;

    let mut out = io::stdout().lock();
    output::success(&mut out, "tree invariants hold")?;
    output::detail(&mut out, &format!("words:  {}", dict.len()))?;
    output::detail(&mut out, &format!("height: {}", dict.height()))?;
    Ok(())
}

#[instrument(skip(dict))]
fn shell(dict: &mut Dictionary, prompt: &str) -> CliResult<()> {
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    Shell::new(dict, stdin, stdout).with_prompt(prompt).run()
}

fn config(command: &ConfigCommands, settings: &Settings) -> CliResult<()> {
    let mut out = io::stdout().lock();
    match command {
        ConfigCommands::Show => output::info(&mut out, &settings.to_toml()?)?,
        ConfigCommands::Path => {
            let global = global_config_path()
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "(no config directory)".to_string());
            let local = std::env::current_dir()
                .map(|dir| local_config_path(&dir).display().to_string())
                .map_err(|e| InfraError::io("resolve working directory", e))?;
            output::detail(&mut out, &format!("global: {global}"))?;
            output::detail(&mut out, &format!("local:  {local}"))?;
            output::detail(
                &mut out,
                &format!("store:  {}", absolute_display(&settings.store_path).display()),
            )?;
        }
        ConfigCommands::Init => config_init(&mut out, Arc::new(RealFileSystem))?,
    }
    Ok(())
}

fn config_init(out: &mut impl Write, fs: Arc<dyn FileSystem>) -> CliResult<()> {
    let path = global_config_path()
        .ok_or_else(|| CliError::Usage("cannot determine config directory".to_string()))?;
    if fs.exists(&path) {
        return Err(CliError::Usage(format!(
            "config already exists: {}",
            path.display()
        )));
    }
    fs.ensure_parent(&path)
        .and_then(|_| fs.write(&path, &Settings::template()))
        .map_err(|e| InfraError::io(format!("write {}", path.display()), e))?;
    output::success(out, &format!("created {}", path.display()))?;
    Ok(())
}

fn completion(shell: clap_complete::Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
