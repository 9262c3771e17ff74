// minic: mini-C to Python compiler with a phase explorer

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{self, ExitCode};

use clap::{ArgAction, Args, Parser, Subcommand};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use minic::config::{CompilerConfig, Intrinsic, Intrinsics, DEFAULT_PYTHON};
use minic::parser::lexer::tokenize;
use minic::parser::Parser as SourceParser;
use minic::pipeline;
use minic::trace::TracingSink;
use minic::tree;
use minic::ui::App;

type DriverResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(name = "minic", version, about = "Compile mini-C to Python")]
struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(flatten)]
    options: ConfigArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct ConfigArgs {
    /// Intrinsic call as NAME or NAME=TARGET; repeatable, replaces printf=print
    #[arg(long = "intrinsic", value_name = "NAME=TARGET", global = true)]
    intrinsics: Vec<Intrinsic>,

    /// Do not append an `if __name__ == '__main__':` block
    #[arg(long, global = true)]
    no_main_guard: bool,

    /// Python interpreter used by `run`
    #[arg(long, value_name = "PATH", default_value = DEFAULT_PYTHON, global = true)]
    python: String,
}

impl ConfigArgs {
    fn into_config(self) -> CompilerConfig {
        let defaults = CompilerConfig::default();
        CompilerConfig {
            intrinsics: if self.intrinsics.is_empty() {
                defaults.intrinsics
            } else {
                Intrinsics::new(self.intrinsics)
            },
            main_guard: !self.no_main_guard,
            python: self.python,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Print every token
    Tokens { file: PathBuf },
    /// Print the syntax tree
    Ast {
        file: PathBuf,
        /// Validate and optimize before printing
        #[arg(long)]
        optimized: bool,
    },
    /// Parse and validate without emitting anything
    Check { file: PathBuf },
    /// Compile to a Python file
    Build {
        file: PathBuf,
        /// Output path (default: the input path with a .py extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Compile, then run the result with Python
    Run {
        file: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Step through the compilation phases in a terminal UI
    Explore { file: PathBuf },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // The explorer owns the terminal; log lines would corrupt the screen
    if !matches!(cli.command, Command::Explore { .. }) {
        init_logging(cli.verbose);
    }

    let config = cli.options.into_config();
    match run_command(cli.command, &config) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn read_source(path: &Path) -> DriverResult<String> {
    fs::read_to_string(path)
        .map_err(|err| format!("cannot read '{}': {}", path.display(), err).into())
}

fn run_command(command: Command, config: &CompilerConfig) -> DriverResult<ExitCode> {
    match command {
        Command::Tokens { file } => {
            for token in tokenize(&read_source(&file)?) {
                println!("{}", token);
            }
        }
        Command::Ast { file, optimized } => {
            let source = read_source(&file)?;
            let program = if optimized {
                pipeline::compile(&source, config, &mut TracingSink)?.optimized
            } else {
                SourceParser::from_source(&source).parse_program()?
            };
            print!("{}", tree::render(&program));
        }
        Command::Check { file } => {
            pipeline::check(&read_source(&file)?, config, &mut TracingSink)?;
            println!("{}: ok", file.display());
        }
        Command::Build { file, output } => {
            build(&file, output, config)?;
        }
        Command::Run { file, output } => {
            let output = build(&file, output, config)?;
            tracing::info!(python = %config.python, "running {}", output.display());

            let status = process::Command::new(&config.python)
                .arg(&output)
                .status()
                .map_err(|err| format!("cannot run '{}': {}", config.python, err))?;

            // A signal-terminated child has no code
            let code = status.code().unwrap_or(1);
            return Ok(ExitCode::from(code.clamp(0, 255) as u8));
        }
        Command::Explore { file } => {
            explore(read_source(&file)?, config)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Compile `file` and write the Python next to it (or to `output`)
fn build(
    file: &Path,
    output: Option<PathBuf>,
    config: &CompilerConfig,
) -> DriverResult<PathBuf> {
    let source = read_source(file)?;
    let compilation = pipeline::compile(&source, config, &mut TracingSink)?;

    let output = output.unwrap_or_else(|| file.with_extension("py"));
    fs::write(&output, compilation.python)
        .map_err(|err| format!("cannot write '{}': {}", output.display(), err))?;

    eprintln!("Wrote {}", output.display());
    Ok(output)
}

fn explore(source: String, config: &CompilerConfig) -> DriverResult<()> {
    let mut app = App::new(source, config);

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res?;
    Ok(())
}
