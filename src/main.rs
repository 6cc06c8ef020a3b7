//! CLI entry point for scopemap

use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use env_logger::Env;
use scopemap::{
    Config, Document, Result, eprint_summary, generate_graph, generate_structure, now_timestamp,
    print_summary, write_document,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode, to_stderr: bool) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            if to_stderr {
                io::stderr().is_terminal()
            } else {
                io::stdout().is_terminal()
            }
        }
    }
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Generate the dependency graph document
    Graph,
    /// Generate the project structure document
    Structure,
}

#[derive(Parser, Debug)]
#[command(name = "scopemap")]
#[command(about = "Generate dependency graph and project structure maps for JS/TS projects")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Project root
    #[arg(short = 'C', long = "root", default_value = ".", global = true)]
    root: PathBuf,

    /// Output path override (only with a subcommand)
    #[arg(short = 'o', long = "output", value_name = "FILE", global = true)]
    output: Option<PathBuf>,

    /// Never probe for madge; always use the built-in analyzer
    #[arg(long = "builtin", global = true)]
    builtin: bool,

    /// Number of parallel workers for import extraction
    /// (0 = auto-detect, 1 = sequential, N = use N workers)
    #[arg(short = 'j', long = "jobs", global = true)]
    jobs: Option<usize>,

    /// Print the document instead of writing it
    #[arg(long = "stdout", global = true)]
    stdout: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto", global = true)]
    color: ColorMode,
}

fn main() {
    let args = Args::try_parse().unwrap_or_else(|e| {
        if !e.use_stderr() {
            // --help and --version
            e.exit();
        }
        let _ = e.print();
        process::exit(1);
    });

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    if args.output.is_some() && args.command.is_none() {
        eprintln!("scopemap: --output requires a subcommand (graph or structure)");
        process::exit(1);
    }

    if let Err(e) = run(&args) {
        eprintln!("scopemap: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let root = if args.root.is_absolute() {
        args.root.clone()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(&args.root)
    };

    let mut config = Config::load(&root)?;
    if args.builtin {
        config.graph.builtin_only = true;
    }
    if let Some(jobs) = args.jobs {
        config.graph.jobs = jobs;
    }

    let commands: &[Command] = match args.command {
        Some(Command::Graph) => &[Command::Graph],
        Some(Command::Structure) => &[Command::Structure],
        None => &[Command::Graph, Command::Structure],
    };

    let timestamp = now_timestamp();
    for &command in commands {
        let (document, default_output) = match command {
            Command::Graph => (
                generate_graph(&root, &config.graph, &timestamp)?,
                &config.graph.output,
            ),
            Command::Structure => (
                generate_structure(&root, &config.structure, &timestamp)?,
                &config.structure.output,
            ),
        };
        let output = args
            .output
            .clone()
            .unwrap_or_else(|| root.join(default_output));
        emit(args, &document, &output)?;
    }

    Ok(())
}

/// Write or print one document, then show its summary.
fn emit(args: &Args, document: &Document, output: &Path) -> Result<()> {
    if args.stdout {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(document.content.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|e| scopemap::Error::io("cannot write", Path::new("<stdout>"), e))?;
        let _ = eprint_summary(&document.summary(None), should_use_color(args.color, true));
    } else {
        write_document(output, &document.content)?;
        let summary = document.summary(Some(output.to_path_buf()));
        let _ = print_summary(&summary, should_use_color(args.color, false));
    }
    Ok(())
}
