//! ticketview - inspect, examine, and display layout-driven ticket PDFs
//!
//! Works on a JSON word dump of the PDF (one bounding box per word). The
//! verbs form a pipeline: `display` runs `examine`, which runs `inspect`.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use ticketview_core::display::{ViewObject, display_view};
use ticketview_core::examine::Examination;
use ticketview_core::inspect::{DocumentRef, InspectReport, inspect};
use ticketview_core::params::{
    DEFAULT_CLUSTER_TOLERANCE, DEFAULT_NUMBER_KEYS, DEFAULT_TYPE_KEYS, ExamineParams,
    IdentityKeys, SplitPolicy,
};
use ticketview_core::source::{JsonTokenSource, TokenSource};
use ticketview_core::Examiner;
use tracing_subscriber::EnvFilter;

/// Object shown by the display verb.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum DisplayObject {
    /// Ticket identity, counts, and keys
    Document,
    /// Unique keys, or the records of one key
    Keys,
    /// Key/value records
    Records,
}

impl From<DisplayObject> for ViewObject {
    fn from(obj: DisplayObject) -> Self {
        match obj {
            DisplayObject::Document => ViewObject::Document,
            DisplayObject::Keys => ViewObject::Keys,
            DisplayObject::Records => ViewObject::Records,
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
enum Verb {
    /// Measure physical properties of the pages
    Inspect,
    /// Infer key/value records and the ticket identity
    Examine,
    /// Display views over examined structure
    Display {
        #[arg(value_enum)]
        object: DisplayObject,
        /// "summary"/"details" for document; a key or /regex/ otherwise
        selector: Option<String>,
    },
}

/// Layout-driven PDF inspection and examination tool.
#[derive(Parser, Debug)]
#[command(name = "ticketview")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON word dump of the PDF to inspect
    #[arg(long, required = true)]
    src: PathBuf,

    /// Emit JSON output where applicable
    #[arg(long, action = ArgAction::SetTrue)]
    json: bool,

    /// Enable verbose diagnostics
    #[arg(short = 'v', long, action = ArgAction::SetTrue)]
    verbose: bool,

    // === Examine options ===
    /// Vertical distance (points) within which words share a line
    #[arg(long = "y-tolerance", default_value = "3.0")]
    y_tolerance: f64,

    /// Fixed key/value boundary x-coordinate (inferred when omitted)
    #[arg(long = "split-x")]
    split_x: Option<f64>,

    /// Narrowest gap (points) that can separate a key from its value
    #[arg(long = "min-gap", default_value = "12.0")]
    min_gap: f64,

    /// Key naming the ticket type (repeatable, default TicketType)
    #[arg(long = "type-key")]
    type_keys: Vec<String>,

    /// Key naming the ticket number (repeatable, default TicketNumber)
    #[arg(long = "number-key")]
    number_keys: Vec<String>,

    #[command(subcommand)]
    verb: Verb,
}

/// Build ExamineParams from command line arguments.
fn build_params(args: &Args) -> Result<ExamineParams> {
    let split = match args.split_x {
        Some(x) => SplitPolicy::Fixed { x },
        None => SplitPolicy::InferredGap {
            min_gap: args.min_gap,
            cluster_tolerance: DEFAULT_CLUSTER_TOLERANCE,
        },
    };
    let or_default = |given: &[String], default: &[&str]| -> Vec<String> {
        if given.is_empty() {
            default.iter().map(|s| s.to_string()).collect()
        } else {
            given.to_vec()
        }
    };
    let identity = IdentityKeys {
        type_keys: or_default(&args.type_keys, DEFAULT_TYPE_KEYS),
        number_keys: or_default(&args.number_keys, DEFAULT_NUMBER_KEYS),
    };
    Ok(ExamineParams::new(args.y_tolerance, split, identity)?)
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn run<W: Write>(args: &Args, out: &mut W) -> Result<()> {
    let params = build_params(args)?;

    // inspect
    let tokens = JsonTokenSource::open(&args.src)
        .and_then(|mut source| source.load())
        .with_context(|| format!("failed to load word dump {}", args.src.display()))?;
    let document = DocumentRef::from_path(&args.src)
        .with_context(|| format!("failed to hash {}", args.src.display()))?;
    tracing::debug!(
        src = %args.src.display(),
        pages = tokens.page_count(),
        tokens = tokens.token_count(),
        "loaded word dump"
    );
    let report = inspect(document, &tokens, params.y_tolerance);
    if let Verb::Inspect = args.verb {
        return write_report(out, &report, args.json);
    }

    // examine
    let exam = Examiner::new(params)?.examine(&tokens)?;
    let Verb::Display { object, selector } = &args.verb else {
        return write_examination(out, &exam, args);
    };

    // display
    let view = display_view(&exam, (*object).into(), selector.as_deref())?;
    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&view)?)?;
    } else {
        view.write_text(out)?;
    }
    Ok(())
}

fn write_report<W: Write>(out: &mut W, report: &InspectReport, json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", report.to_json()?)?;
    } else {
        writeln!(out, "{}", report.to_text())?;
    }
    Ok(())
}

fn write_examination<W: Write>(out: &mut W, exam: &Examination, args: &Args) -> Result<()> {
    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(exam)?)?;
        return Ok(());
    }

    let envelope = exam.envelope();
    writeln!(
        out,
        "Examined {} page(s): {} record(s), {} unique key(s)",
        envelope.pages, envelope.record_count, envelope.unique_key_count
    )?;
    match exam.identity() {
        Some(identity) => writeln!(
            out,
            "Ticket: {} {}",
            identity.ticket_type().unwrap_or("(none)"),
            identity.ticket_number().unwrap_or("(none)")
        )?,
        None => writeln!(out, "Ticket: (none)")?,
    }
    for diagnostic in exam.diagnostics() {
        writeln!(out, "warning: {diagnostic}")?;
    }
    if args.verbose {
        writeln!(out)?;
        writeln!(out, "=== KEYS ===")?;
        for key in &envelope.keys {
            writeln!(out, "{key}")?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let stdout = io::stdout();
    let mut writer = io::BufWriter::new(stdout.lock());
    let result = run(&args, &mut writer).and_then(|()| Ok(writer.flush()?));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
