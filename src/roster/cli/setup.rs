use clap::{Args, CommandFactory, Parser, Subcommand};
use roster::model::{SortField, Status};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

fn parse_status(s: &str) -> Result<Status, String> {
    s.parse()
}

fn parse_sort_field(s: &str) -> Result<SortField, String> {
    s.parse()
}

/// The value of `--status` on list views: one status, or `all`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Only(Status),
}

impl StatusFilter {
    pub fn status(self) -> Option<Status> {
        match self {
            StatusFilter::All => None,
            StatusFilter::Only(status) => Some(status),
        }
    }
}

fn parse_status_filter(s: &str) -> Result<StatusFilter, String> {
    if s.trim().eq_ignore_ascii_case("all") {
        return Ok(StatusFilter::All);
    }
    s.parse().map(StatusFilter::Only)
}

#[derive(Parser, Debug)]
#[command(
    name = "roster",
    bin_name = "roster",
    version = get_version(),
    disable_help_flag = true,
    disable_help_subcommand = true
)]
#[command(about = "Student roster manager", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the roster data (overrides ROSTER_HOME)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Don't print the banner
    #[arg(long, global = true, help_heading = "Options")]
    pub no_banner: bool,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Print help
    #[arg(short, long, global = true)]
    pub help: bool,
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Core,
    Record,
    Data,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Core => "Core Commands:",
            CommandGroup::Record => "Per-Student Commands:",
            CommandGroup::Data => "Data Commands:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "list" | "search" | "add" => Some(CommandGroup::Core),
            "view" | "edit" | "delete" => Some(CommandGroup::Record),
            "export" | "classes" | "reset" => Some(CommandGroup::Data),
            "config" | "help" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    pub fn all() -> &'static [CommandGroup] {
        &[
            CommandGroup::Core,
            CommandGroup::Record,
            CommandGroup::Data,
            CommandGroup::Misc,
        ]
    }
}

/// Returns the custom grouped help output as a string
pub fn get_grouped_help() -> String {
    let cmd = Cli::command();
    let version = cmd.get_version().unwrap_or("unknown");

    let mut output = String::new();
    output.push_str(&format!("roster {version}\n"));
    output.push_str("Student roster manager\n");
    output.push('\n');
    output.push_str("Usage: roster [OPTIONS] [COMMAND]\n");

    let subcommands: Vec<_> = cmd.get_subcommands().collect();

    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| {
                !sc.is_hide_set() && CommandGroup::for_command(sc.get_name()) == Some(*group)
            })
            .collect();

        if !group_cmds.is_empty() {
            output.push('\n');
            output.push_str(&format!("{}\n", group.heading()));
            for sc in group_cmds {
                let name = sc.get_name();
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {:<12} {}\n", name, about));
            }
        }
    }

    output.push('\n');
    output.push_str("Options:\n");
    output.push_str("      --data-dir <DIR>  Directory holding the roster data\n");
    output.push_str("      --no-banner       Don't print the banner\n");
    output.push_str("  -v, --verbose         Verbose output\n");
    output.push_str("  -h, --help            Print help\n");
    output.push_str("  -V, --version         Print version\n");

    output
}

pub fn print_grouped_help() {
    print!("{}", get_grouped_help());
}

/// Prints help for a command by name using clap's built-in rendering
pub fn print_help_for_command(name: &str) {
    let mut cmd = Cli::command();

    for subcmd in cmd.get_subcommands_mut() {
        if subcmd.get_name() == name {
            let help = subcmd.render_help();
            print!("{}", help);
            return;
        }
    }

    eprintln!("Unknown command: {}", name);
    eprintln!();
    print_grouped_help();
}

pub fn print_subcommand_help(command: &Option<Commands>) {
    let name = match command {
        Some(Commands::Core(c)) => match c {
            CoreCommands::List { .. } => "list",
            CoreCommands::Search { .. } => "search",
            CoreCommands::Add { .. } => "add",
        },
        Some(Commands::Record(c)) => match c {
            RecordCommands::View { .. } => "view",
            RecordCommands::Edit { .. } => "edit",
            RecordCommands::Delete { .. } => "delete",
        },
        Some(Commands::Data(c)) => match c {
            DataCommands::Export { .. } => "export",
            DataCommands::Classes => "classes",
            DataCommands::Reset { .. } => "reset",
        },
        Some(Commands::Misc(c)) => match c {
            MiscCommands::Config { .. } => "config",
            MiscCommands::Help { .. } => "help",
        },
        None => {
            print_grouped_help();
            return;
        }
    };

    print_help_for_command(name);
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Core(CoreCommands),

    #[command(flatten)]
    Record(RecordCommands),

    #[command(flatten)]
    Data(DataCommands),

    #[command(flatten)]
    Misc(MiscCommands),
}

/// Search, filter and sort flags shared by `list` and `export`
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Case-insensitive match against id, name, class and email
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only students in this class ("all" or omitted for every class)
    #[arg(short, long)]
    pub class: Option<String>,

    /// Only students with this status (active, inactive, alumni or all)
    #[arg(long, value_parser = parse_status_filter)]
    pub status: Option<StatusFilter>,

    /// Sort by id, name, class, email or status
    #[arg(long, value_parser = parse_sort_field)]
    pub sort: Option<SortField>,
}

/// Record fields accepted by `add` and `edit`
#[derive(Args, Debug, Clone, Default)]
pub struct RecordArgs {
    /// Full name
    #[arg(long)]
    pub name: Option<String>,

    /// Class, e.g. 10A
    #[arg(long)]
    pub class: Option<String>,

    /// Email address
    #[arg(long)]
    pub email: Option<String>,

    /// active, inactive or alumni
    #[arg(long, value_parser = parse_status)]
    pub status: Option<Status>,

    /// Image file to embed as the avatar
    #[arg(long, value_name = "PATH")]
    pub avatar: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum CoreCommands {
    /// List students
    #[command(alias = "ls", display_order = 1)]
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Search students by id, name, class or email
    #[command(display_order = 2)]
    Search { term: String },

    /// Add a student (or replace one with the same id)
    #[command(alias = "n", display_order = 3)]
    Add {
        /// Student id, e.g. S-1005
        #[arg(long)]
        id: Option<String>,

        #[command(flatten)]
        fields: RecordArgs,
    },
}

#[derive(Subcommand, Debug)]
pub enum RecordCommands {
    /// Show a student's profile and history
    #[command(alias = "v", display_order = 10)]
    View { id: String },

    /// Change fields of an existing student
    #[command(alias = "e", display_order = 11)]
    Edit {
        id: String,

        #[command(flatten)]
        fields: RecordArgs,
    },

    /// Delete a student
    #[command(alias = "rm", display_order = 12)]
    Delete {
        id: String,

        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum DataCommands {
    /// Export the current view to CSV
    #[command(display_order = 20)]
    Export {
        #[command(flatten)]
        filter: FilterArgs,

        /// Output file ("-" for stdout); defaults to the export-file setting
        #[arg(short, long, value_name = "FILE")]
        output: Option<String>,
    },

    /// List the classes present in the roster
    #[command(display_order = 21)]
    Classes,

    /// Replace all students with the demo data
    #[command(display_order = 22)]
    Reset {
        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum MiscCommands {
    /// Get or set configuration
    #[command(display_order = 30)]
    Config {
        /// Configuration key (sort-by, export-file, banner)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Print help for roster or a subcommand
    #[command(display_order = 31)]
    Help {
        /// Subcommand to get help for
        command: Option<String>,
    },
}
