use crate::analysis::compare::{HEADER, compare_cases};
use crate::graph::graph::WeightPolicy;
use crate::scenario::basic::BasicCases;
use crate::scenario::random::RandomCases;
use crate::scenario::reader::CaseReader;
use crate::scenario::runner::{RunOptions, run_cases, write_results};
use crate::scenario::scenario::CaseSource;
use crate::traversal::engine::FifoTraversal;
use crate::traversal::solver::SolverMode;
use crate::tui::app::App;
use crate::tui::draw::draw_app;
use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use crossterm::event::{Event, KeyCode, KeyEventKind};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use std::time::Duration;
use tracing::error;
use tracing_subscriber::EnvFilter;

mod analysis;
mod graph;
mod scenario;
mod state;
mod traversal;
mod tui;

#[derive(Parser)]
#[command(name = "relaxpath", version, about = "Minimum-cost paths over streamed test cases")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Solve every test case and print one result per line (default)
    Solve(SolveArgs),
    /// Run FIFO and priority solvers side by side
    Compare(CompareArgs),
    /// Write random test cases in the input format
    Generate(GenerateArgs),
    /// Step through the FIFO traversal of one test case
    Trace(TraceArgs),
}

#[derive(Args, Default)]
struct InputArgs {
    /// Read test cases from this file instead of stdin
    #[arg(long)]
    input: Option<PathBuf>,
    /// Fail on negative edge weights instead of accepting them
    #[arg(long)]
    reject_negative_weights: bool,
}

impl InputArgs {
    fn policy(&self) -> WeightPolicy {
        if self.reject_negative_weights {
            WeightPolicy::RejectNegative
        } else {
            WeightPolicy::Permissive
        }
    }

    fn open(&self) -> anyhow::Result<Box<dyn BufRead>> {
        match &self.input {
            Some(path) => {
                let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
                Ok(Box::new(BufReader::new(file)))
            }
            None => Ok(Box::new(io::stdin().lock())),
        }
    }
}

#[derive(Args, Default)]
struct SolveArgs {
    #[command(flatten)]
    input: InputArgs,
    #[arg(long, value_enum, default_value_t)]
    mode: SolverMode,
    /// Log the elapsed time of every solve
    #[arg(long)]
    timing: bool,
}

#[derive(Args)]
struct CompareArgs {
    #[command(flatten)]
    input: InputArgs,
}

#[derive(Args)]
struct GenerateArgs {
    #[arg(long)]
    seed: u64,
    #[arg(long, default_value_t = 1)]
    cases: usize,
    #[arg(long, default_value_t = 10)]
    nodes: u32,
    #[arg(long, default_value_t = 20)]
    edges: usize,
    #[arg(long, default_value_t = 100)]
    max_weight: i32,
}

#[derive(Args)]
struct TraceArgs {
    // without --input the built-in cases are used
    #[command(flatten)]
    input: InputArgs,
    /// 1-based test case number
    #[arg(long, default_value_t = 1)]
    case: usize,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_env("RELAXPATH_LOG").unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();
    let outcome = match cli.command.unwrap_or(Command::Solve(SolveArgs::default())) {
        Command::Solve(args) => solve(args),
        Command::Compare(args) => compare(args),
        Command::Generate(args) => generate(args),
        Command::Trace(args) => trace(args),
    };
    if let Err(err) = outcome {
        error!("{:#}", err);
        std::process::exit(1);
    }
}

fn solve(args: SolveArgs) -> anyhow::Result<()> {
    let mut reader = CaseReader::new(args.input.open()?);
    let options = RunOptions {
        policy: args.input.policy(),
        timing: args.timing,
    };
    let solver = args.mode.solver();
    let results = run_cases(&mut reader, solver.as_ref(), options)?;
    write_results(&mut io::stdout().lock(), &results).context("cannot write results")?;
    Ok(())
}

fn compare(args: CompareArgs) -> anyhow::Result<()> {
    let mut reader = CaseReader::new(args.input.open()?);
    let rows = compare_cases(&mut reader, args.input.policy())?;
    let mut out = io::stdout().lock();
    writeln!(out, "{}", HEADER)?;
    for row in &rows {
        writeln!(out, "{}", row)?;
    }
    Ok(())
}

fn generate(args: GenerateArgs) -> anyhow::Result<()> {
    let mut cases = RandomCases::build(args.seed, args.cases, args.nodes, args.edges, args.max_weight);
    let mut out = io::stdout().lock();
    while let Some(case) = cases.next_case()? {
        write!(out, "{}", case)?;
    }
    writeln!(out, "0 0")?;
    Ok(())
}

fn trace(args: TraceArgs) -> anyhow::Result<()> {
    let mut source: Box<dyn CaseSource> = match &args.input.input {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
            Box::new(CaseReader::new(BufReader::new(file)))
        }
        None => Box::new(BasicCases::build()),
    };
    if args.case == 0 {
        bail!("test cases are numbered from 1");
    }
    let mut picked = None;
    for _ in 0..args.case {
        picked = source.next_case()?;
        if picked.is_none() {
            break;
        }
    }
    let Some(case) = picked else {
        bail!("there is no test case {}", args.case);
    };

    let graph = case
        .build_graph(args.input.policy())
        .with_context(|| format!("test case {}", args.case))?;
    let query = case.query();
    let traversal = FifoTraversal::new(&graph, query.source, query.destination)
        .with_context(|| format!("test case {}", args.case))?;

    let mut terminal = ratatui::init();
    let mut app = App::new(traversal, args.case, query);

    while app.running {
        terminal.draw(|frame| draw_app(frame, &app))?;

        if crossterm::event::poll(Duration::from_millis(16))? {
            match crossterm::event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') => app.running = false,
                    KeyCode::Char(' ') => app.step(),
                    KeyCode::Char('r') => app.finish(),
                    _ => continue,
                },
                _ => continue,
            }
        }
    }
    Ok(())
}
