// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Parser as CliParser, Subcommand};
use log::{debug, info};
use pjson::{Directive, Info, Parser, Visitor};

#[derive(CliParser)]
#[command(name = "pjson", version, about = "Validate and inspect JSON documents")]
struct Cli {
    /// Log more; repeat for debug and trace output
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Maximum nesting of objects and arrays
    #[arg(long, default_value_t = pjson::DEFAULT_MAX_DEPTH, global = true)]
    max_depth: usize,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate each file and report its length or the first error
    Check {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Print one line per event: start, end, flags and text
    Events {
        file: PathBuf,
        /// Skip the contents of containers nested deeper than this
        #[arg(long, value_name = "N")]
        skip: Option<usize>,
        /// Stop after this many events
        #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
        stop_after: Option<u64>,
    },
    /// Strip insignificant whitespace
    Minify { file: PathBuf },
}

#[derive(Debug)]
enum CliError {
    Read { path: PathBuf, source: io::Error },
    Json { path: PathBuf, source: pjson::Error },
    Output(io::Error),
}

impl CliError {
    fn exit_code(&self) -> ExitCode {
        match self {
            CliError::Json { .. } => ExitCode::from(1),
            CliError::Read { .. } | CliError::Output(_) => ExitCode::from(2),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Read { path, source } => write!(f, "{}: {}", path.display(), source),
            CliError::Json { path, source } => write!(f, "{}: {}", path.display(), source),
            CliError::Output(source) => write!(f, "writing output: {}", source),
        }
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::Output(err)
    }
}

fn read(path: &Path) -> Result<Vec<u8>, CliError> {
    let json = fs::read(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("read {} bytes from {}", json.len(), path.display());
    Ok(json)
}

/// Prints every event it sees, optionally hiding deep subtrees or stopping
/// after a fixed count.
struct EventPrinter<'a, W> {
    json: &'a [u8],
    out: W,
    depth: usize,
    skip_deeper_than: Option<usize>,
    remaining: Option<u64>,
    failed: Option<io::Error>,
}

impl<'a, W: Write> EventPrinter<'a, W> {
    fn new(json: &'a [u8], out: W) -> Self {
        EventPrinter {
            json,
            out,
            depth: 0,
            skip_deeper_than: None,
            remaining: None,
            failed: None,
        }
    }
}

impl<W: Write> Visitor for EventPrinter<'_, W> {
    fn visit(&mut self, start: usize, end: usize, info: Info) -> Directive {
        let text = String::from_utf8_lossy(&self.json[start..end]);
        if let Err(err) = writeln!(self.out, "{start} {end} {info} {text}") {
            self.failed = Some(err);
            return Directive::Stop;
        }
        if let Some(remaining) = self.remaining.as_mut() {
            *remaining -= 1;
            if *remaining == 0 {
                return Directive::Stop;
            }
        }
        if info.contains(Info::CLOSE) {
            self.depth = self.depth.saturating_sub(1);
        } else if info.contains(Info::OPEN) {
            self.depth += 1;
            if self.skip_deeper_than.is_some_and(|max| self.depth > max) {
                return Directive::SkipSubtree;
            }
        }
        Directive::Continue
    }
}

/// Validates every file, writing one report line each. Returns whether all
/// of them passed.
fn check<W: Write>(parser: &Parser, files: &[PathBuf], out: &mut W) -> Result<bool, CliError> {
    let mut all_ok = true;
    for path in files {
        let json = read(path)?;
        match parser.validate(&json) {
            Ok(len) => writeln!(out, "{}: ok {}", path.display(), len)?,
            Err(err) => {
                all_ok = false;
                writeln!(out, "{}: {}", path.display(), err)?;
            }
        }
    }
    Ok(all_ok)
}

fn minify(parser: &Parser, json: &[u8]) -> Result<Vec<u8>, pjson::Error> {
    let mut out = Vec::with_capacity(json.len());
    parser.parse(json, |start, end, _| {
        out.extend_from_slice(&json[start..end]);
        Directive::Continue
    })?;
    Ok(out)
}

fn run(cli: Cli) -> Result<ExitCode, CliError> {
    let parser = Parser::new().with_max_depth(cli.max_depth);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Check { files } => {
            let all_ok = check(&parser, &files, &mut out)?;
            info!("checked {} file(s)", files.len());
            Ok(if all_ok {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            })
        }
        Command::Events {
            file,
            skip,
            stop_after,
        } => {
            let json = read(&file)?;
            let mut printer = EventPrinter::new(&json, &mut out);
            printer.skip_deeper_than = skip;
            printer.remaining = stop_after;
            let res = parser.parse_with(&json, &mut printer);
            if let Some(err) = printer.failed.take() {
                return Err(CliError::Output(err));
            }
            let consumed = res.map_err(|source| CliError::Json { path: file, source })?;
            info!("consumed {consumed} of {} bytes", json.len());
            Ok(ExitCode::SUCCESS)
        }
        Command::Minify { file } => {
            let json = read(&file)?;
            let minified =
                minify(&parser, &json).map_err(|source| CliError::Json { path: file, source })?;
            out.write_all(&minified)?;
            out.write_all(b"\n")?;
            Ok(ExitCode::SUCCESS)
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
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("pjson: {err}");
            err.exit_code()
        }
    }
}
