//! # CLI Layer
//!
//! This module is **one possible UI client** for roster; it is not the
//! application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr, stdin prompts)
//! - Handles argument parsing
//! - Validates drafts and asks for confirmation before destructive commands
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Resolves the data dir, loads config, opens the API
//! - `handle_*()`: Per-command handlers that call the API and render output

use super::banner::Banner;
use super::render::{print_messages, render_profile, render_student_list, render_text_list};
use super::setup::{
    print_grouped_help, print_help_for_command, print_subcommand_help, Cli, Commands,
    CoreCommands, DataCommands, FilterArgs, MiscCommands, RecordArgs, RecordCommands,
    StatusFilter,
};
use clap::Parser;
use console::{colors_enabled, Term};
use directories::ProjectDirs;
use roster::api::{ConfigAction, RosterApi, RosterFilter, RosterPaths};
use roster::avatar::embed_file;
use roster::config::{RosterConfig, CONFIG_KEYS};
use roster::error::{Result, RosterError};
use roster::logging::{init_logging, Verbosity};
use roster::model::StudentDraft;
use roster::store::fs::FileStore;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const DATA_DIR_ENV: &str = "ROSTER_HOME";

struct AppContext {
    api: RosterApi<FileStore>,
    config: RosterConfig,
    banner: Banner,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Top level gets grouped help, subcommands get clap's rendering
    if cli.help {
        if cli.command.is_none() {
            print_grouped_help();
        } else {
            print_subcommand_help(&cli.command);
        }
        return Ok(());
    }

    init_logging(Verbosity::from_flag(cli.verbose));

    if let Some(Commands::Misc(MiscCommands::Help { command })) = &cli.command {
        return handle_help(command.clone());
    }

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Core(cmd)) => match cmd {
            CoreCommands::List { filter } => handle_list(&mut ctx, filter),
            CoreCommands::Search { term } => handle_search(&mut ctx, term),
            CoreCommands::Add { id, fields } => handle_add(&mut ctx, id, fields),
        },
        Some(Commands::Record(cmd)) => match cmd {
            RecordCommands::View { id } => handle_view(&mut ctx, id),
            RecordCommands::Edit { id, fields } => handle_edit(&mut ctx, id, fields),
            RecordCommands::Delete { id, yes } => handle_delete(&mut ctx, id, yes),
        },
        Some(Commands::Data(cmd)) => match cmd {
            DataCommands::Export { filter, output } => handle_export(&mut ctx, filter, output),
            DataCommands::Classes => handle_classes(&mut ctx),
            DataCommands::Reset { yes } => handle_reset(&mut ctx, yes),
        },
        Some(Commands::Misc(cmd)) => match cmd {
            MiscCommands::Config { key, value } => handle_config(&mut ctx, key, value),
            MiscCommands::Help { command } => handle_help(command),
        },
        None => handle_list(&mut ctx, FilterArgs::default()),
    }
}

/// `--data-dir` wins over `ROSTER_HOME`, which wins over the platform data dir.
fn resolve_data_dir(flag: Option<PathBuf>, env: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag.or(env) {
        return Ok(dir);
    }
    ProjectDirs::from("com", "roster", "roster")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| RosterError::Config("Could not determine a data directory".into()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let env_dir = std::env::var_os(DATA_DIR_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from);
    let data_dir = resolve_data_dir(cli.data_dir.clone(), env_dir)?;
    debug!(data_dir = %data_dir.display(), "resolved data directory");

    let config = RosterConfig::load(&data_dir)?;
    let mut banner = Banner::new(false);
    if config.banner {
        banner.enable();
    }
    if cli.no_banner {
        banner.disable();
    }

    let store = FileStore::new(data_dir.clone());
    let api = RosterApi::open(store, RosterPaths::new(data_dir))?;
    debug!(
        outcome = ?api.load_outcome(),
        location = %api.storage_location().display(),
        "roster opened"
    );

    Ok(AppContext {
        api,
        config,
        banner,
    })
}

/// `all` (any case) for the class means no class filter.
fn build_filter(args: FilterArgs, config: &RosterConfig) -> RosterFilter {
    RosterFilter {
        search: args.search.unwrap_or_default(),
        class: args
            .class
            .filter(|class| !class.trim().eq_ignore_ascii_case("all")),
        status: args.status.and_then(StatusFilter::status),
        sort_by: args.sort.unwrap_or(config.sort_by),
    }
}

fn handle_list(ctx: &mut AppContext, filter: FilterArgs) -> Result<()> {
    let filter = build_filter(filter, &ctx.config);
    let result = ctx.api.query(&filter)?;

    if ctx.banner.is_enabled() && Term::stdout().is_term() {
        ctx.banner.print();
    }
    print!(
        "{}",
        render_student_list(&result.listed_records, colors_enabled())
    );
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &mut AppContext, term: String) -> Result<()> {
    let filter = FilterArgs {
        search: Some(term),
        ..FilterArgs::default()
    };
    handle_list(ctx, filter)
}

/// Embeds the avatar file if one was given. A file that can't be read is
/// skipped and the record keeps whatever avatar it had.
fn load_avatar(path: Option<&Path>) -> Option<String> {
    let path = path?;
    match embed_file(path) {
        Ok(data_url) => Some(data_url),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not read avatar, ignoring");
            None
        }
    }
}

fn apply_fields(mut draft: StudentDraft, fields: &RecordArgs) -> StudentDraft {
    if let Some(name) = &fields.name {
        draft.name = name.clone();
    }
    if let Some(class) = &fields.class {
        draft.class = class.clone();
    }
    if let Some(email) = &fields.email {
        draft.email = email.clone();
    }
    if let Some(status) = fields.status {
        draft.status = status;
    }
    if let Some(avatar) = load_avatar(fields.avatar.as_deref()) {
        draft.avatar = Some(avatar);
    }
    draft
}

fn handle_add(ctx: &mut AppContext, id: Option<String>, fields: RecordArgs) -> Result<()> {
    let draft = StudentDraft {
        id: id.unwrap_or_default(),
        ..StudentDraft::default()
    };
    let draft = apply_fields(draft, &fields).validate()?;
    let result = ctx.api.upsert(draft)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &mut AppContext, id: String) -> Result<()> {
    let result = ctx.api.view(&id)?;
    for record in &result.listed_records {
        print!("{}", render_profile(record, colors_enabled()));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, id: String, fields: RecordArgs) -> Result<()> {
    let draft = match ctx.api.find(&id) {
        Some(record) => StudentDraft::from_record(record),
        None => {
            let result = ctx.api.view(&id)?;
            print_messages(&result.messages);
            return Ok(());
        }
    };
    let draft = apply_fields(draft, &fields).validate()?;
    let result = ctx.api.upsert(draft)?;
    print_messages(&result.messages);
    Ok(())
}

/// Reads a yes/no answer from stdin. Anything but `y`/`yes` is a no.
fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    std::io::stdout().flush().map_err(RosterError::Io)?;

    let mut answer = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut answer)
        .map_err(RosterError::Io)?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

fn handle_delete(ctx: &mut AppContext, id: String, yes: bool) -> Result<()> {
    let Some(record) = ctx.api.find(&id) else {
        let result = ctx.api.remove(&id)?;
        print_messages(&result.messages);
        return Ok(());
    };

    let prompt = format!("Delete {} ({})?", record.name, record.id);
    if !yes && !confirm(&prompt)? {
        println!("Aborted.");
        return Ok(());
    }

    let result = ctx.api.remove(&id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &mut AppContext, filter: FilterArgs, output: Option<String>) -> Result<()> {
    let filter = build_filter(filter, &ctx.config);
    let result = ctx.api.export_csv(&filter)?;
    let csv = result.csv.unwrap_or_default();

    let target = output.unwrap_or_else(|| ctx.config.export_file.clone());
    if target == "-" {
        println!("{}", csv);
        return Ok(());
    }

    std::fs::write(&target, &csv).map_err(RosterError::Io)?;
    print_messages(&result.messages);
    println!(
        "Exported {} students to {}",
        result.listed_records.len(),
        target
    );
    Ok(())
}

fn handle_classes(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.distinct_classes()?;
    print!("{}", render_text_list(&result.classes, "No classes."));
    print_messages(&result.messages);
    Ok(())
}

fn handle_reset(ctx: &mut AppContext, yes: bool) -> Result<()> {
    if !yes && !confirm("Replace all students with the demo data?")? {
        println!("Aborted.");
        return Ok(());
    }
    let result = ctx.api.reset()?;
    print!(
        "{}",
        render_student_list(&result.listed_records, colors_enabled())
    );
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let show_all = key.is_none();
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if show_all {
        let lines: Vec<String> = result
            .config
            .iter()
            .flat_map(|config| {
                CONFIG_KEYS
                    .iter()
                    .filter_map(move |k| config.get(k).map(|v| format!("{} = {}", k, v)))
            })
            .collect();
        print!("{}", render_text_list(&lines, "No configuration values."));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_help(command: Option<String>) -> Result<()> {
    match command {
        Some(cmd) => print_help_for_command(&cmd),
        None => print_grouped_help(),
    }
    Ok(())
}
