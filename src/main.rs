use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use env_logger::Env;
use polycalc::{ByteSource, Calculator};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Log each command and the stack depth
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
  /// Run a script file, or standard input when no file is given
  Run {
    /// Path to the script
    file: Option<PathBuf>,
  },
  /// Run the given lines as a script
  Eval {
    /// Polynomials and commands, one per argument
    #[arg(required = true)]
    lines: Vec<String>,
  },
}

fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();

  let mut logger =
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
  if cli.verbose {
    logger.filter_level(log::LevelFilter::Debug);
  }
  logger.init();

  match cli.command {
    None | Some(Commands::Run { file: None }) => run(io::stdin().lock()),
    Some(Commands::Run { file: Some(path) }) => {
      let file = File::open(&path)
        .with_context(|| format!("cannot open {}", path.display()))?;
      run(BufReader::new(file))
    }
    Some(Commands::Eval { lines }) => {
      let script: String =
        lines.iter().map(|line| format!("{line}\n")).collect();
      run(io::Cursor::new(script))
    }
  }
}

fn run<R: Read>(input: R) -> anyhow::Result<()> {
  let stdout = BufWriter::new(io::stdout().lock());
  let stderr = io::stderr().lock();
  let mut calculator = Calculator::new(stdout, stderr);
  calculator
    .run(&mut ByteSource::new(input))
    .context("writing calculator output failed")?;
  log::debug!("{} lines read", calculator.line());
  Ok(())
}
