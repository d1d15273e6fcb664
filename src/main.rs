//! CLI tool to replace hex color literals in SCSS files with variables.

mod logging;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use scss_color_vars::settings::{find_workspace_root, load_settings};
use scss_color_vars::workspace::{load_variables, write_document};
use scss_color_vars::{Config, DocumentContext, DocumentKind, Error, Formatted, format_document};

#[derive(Parser, Debug)]
#[command(
    name = "scss-color-vars",
    version,
    about = "Replace hex colors in SCSS files with matching $variables"
)]
struct Cli {
    /// Variables file, relative to the workspace root.
    /// Overrides the path from the workspace settings file.
    #[arg(long, global = true, env = "SCSS_COLORS_VARIABLES_PATH")]
    variables: Option<String>,

    /// Workspace root. Defaults to the nearest ancestor holding
    /// .vscode/ or .git/.
    #[arg(long, global = true)]
    workspace: Option<PathBuf>,

    /// More log output (repeatable).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rewrite files in place.
    Apply(Files),
    /// Report files that would change; fails if any would.
    Check(Files),
    /// Print transformed content to stdout.
    Print(Files),
    /// List the variables available to each file.
    Vars(Files),
}

#[derive(Args, Debug)]
struct Files {
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

/// Per-file action; `Ok(false)` marks a file that needs attention.
type Runner = fn(&Path, &Config, Option<&Path>) -> Result<bool, Error>;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logger(logging::level_for(cli.verbose, cli.quiet)) {
        eprintln!("Failed to initialize logger: {e}");
        return ExitCode::FAILURE;
    }

    let (files, run) = match &cli.command {
        Command::Apply(args) => (&args.files, apply_file as Runner),
        Command::Check(args) => (&args.files, check_file as Runner),
        Command::Print(args) => (&args.files, print_file as Runner),
        Command::Vars(args) => (&args.files, list_vars as Runner),
    };

    let mut had_error = false;

    for path in files {
        let root = cli
            .workspace
            .clone()
            .or_else(|| find_workspace_root(path));
        log::info!("{}: workspace {root:?}", path.display());

        let config = match resolve_config(cli.variables.clone(), root.as_deref()) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{}: {e}", path.display());
                had_error = true;
                continue;
            }
        };

        match run(path, &config, root.as_deref()) {
            Ok(ok) => had_error |= !ok,
            Err(e) => {
                eprintln!("{}: {e}", path.display());
                had_error = true;
            }
        }
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Command-line value first, then the workspace settings file.
fn resolve_config(variables: Option<String>, root: Option<&Path>) -> Result<Config, Error> {
    let variables_path = match (variables, root) {
        (Some(path), _) => Some(path),
        (None, Some(root)) => load_settings(root)?,
        (None, None) => None,
    };
    Ok(Config { variables_path })
}

fn format_file(path: &Path, config: &Config, root: Option<&Path>) -> Result<Formatted, Error> {
    let document_text = fs::read_to_string(path).map_err(|source| Error::FileUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let context = DocumentContext {
        base_directory: root.map(Path::to_path_buf),
        document_text,
        document_kind: DocumentKind::from_path(path),
    };
    format_document(config, &context)
}

fn apply_file(path: &Path, config: &Config, root: Option<&Path>) -> Result<bool, Error> {
    let formatted = format_file(path, config, root)?;
    if formatted.is_changed() {
        write_document(path, &formatted.text)?;
    }
    eprintln!(
        "{}: replaced {} color(s)",
        path.display(),
        formatted.substitutions.len()
    );
    Ok(true)
}

fn check_file(path: &Path, config: &Config, root: Option<&Path>) -> Result<bool, Error> {
    let formatted = format_file(path, config, root)?;
    for sub in &formatted.substitutions {
        println!(
            "{}:{}:{}: {} -> {}",
            path.display(),
            sub.span.line,
            sub.span.column,
            sub.original,
            sub.replacement
        );
    }
    if formatted.is_changed() {
        eprintln!("{}: not formatted", path.display());
        Ok(false)
    } else {
        eprintln!("{}: formatted", path.display());
        Ok(true)
    }
}

fn print_file(path: &Path, config: &Config, root: Option<&Path>) -> Result<bool, Error> {
    let formatted = format_file(path, config, root)?;
    print!("{}", formatted.text);
    Ok(true)
}

fn list_vars(path: &Path, config: &Config, root: Option<&Path>) -> Result<bool, Error> {
    let table = load_variables(config, root)?;
    eprintln!("{}: {} variable(s)", path.display(), table.len());
    for (name, value) in table.iter() {
        println!("${name}: {value};");
    }
    Ok(true)
}
