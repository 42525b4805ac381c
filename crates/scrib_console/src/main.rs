//! `scrib`: highlight and run scripts from the command line.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use scrib_console::commands::{self, CommandError};
use scrib_console::{init_tracing, ProcessRunner};
use scrib_paths::{PathsConfig, ResourcePaths};

#[derive(Parser)]
#[command(name = "scrib", about = "Incremental script highlighter and console", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print files with syntax highlighting
    Highlight {
        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,
        /// List the styled runs of each line instead of coloring
        #[arg(long)]
        spans: bool,
        /// Theme file (default: theme.json in the config directory)
        #[arg(long, value_name = "PATH")]
        theme: Option<PathBuf>,
    },
    /// Run a script and print what it writes
    Run {
        file: PathBuf,
        /// Interpreter that reads the script from stdin
        #[arg(long, default_value = "python3")]
        interpreter: String,
        /// Extra interpreter argument (repeatable)
        #[arg(long = "arg", value_name = "ARG")]
        args: Vec<String>,
    },
    /// Print the color scheme
    Theme {
        /// Overwrite the saved scheme with the defaults
        #[arg(long)]
        reset: bool,
        #[arg(long, value_name = "PATH")]
        theme: Option<PathBuf>,
    },
    /// Print resolved resource paths
    Paths,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    let paths = ResourcePaths::new(PathsConfig::from_process("scrib"));

    match dispatch(cli.command, &paths) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn dispatch(command: Command, paths: &ResourcePaths) -> Result<(), CommandError> {
    match command {
        Command::Highlight {
            files,
            spans,
            theme,
        } => {
            let scheme = match commands::theme_store(paths, theme.as_deref()) {
                Ok(store) => store.load_or_default(),
                Err(CommandError::NoConfigDir) => scrib_theme::ColorScheme::default(),
                Err(e) => return Err(e),
            };
            print!("{}", commands::highlight_files(&files, &scheme, spans)?);
        }
        Command::Run {
            file,
            interpreter,
            args,
        } => {
            let runner = ProcessRunner::new(interpreter).with_args(args);
            let console = commands::run_script(&file, runner)?;
            print!("{}", console.stdout());
            eprint!("{}", console.stderr());
        }
        Command::Theme { reset, theme } => {
            let store = commands::theme_store(paths, theme.as_deref())?;
            print!("{}", commands::theme(&store, reset)?);
        }
        Command::Paths => print!("{}", commands::describe_paths(paths)),
    }
    Ok(())
}
