use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ladle::{parse_document, RenderOptions, DEFAULT_INDENT_WIDTH};

/// Render an element-tree document as indented HTML
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Document to render, e.g. a file containing `div(@"dir=ltr", p("hello"))`.
    document: PathBuf,

    /// Spaces of indentation per nesting level.
    #[arg(short, long, default_value_t = DEFAULT_INDENT_WIDTH)]
    indent: usize,

    /// Nesting level to render the root element at.
    #[arg(short, long, default_value_t = 0)]
    level: usize,

    /// More log output on stderr; repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    tracing::debug!(document = %args.document.display(), "reading document");
    let source = match std::fs::read_to_string(&args.document) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("could not read {}: {}", args.document.display(), err);
            return ExitCode::FAILURE;
        }
    };

    let element = match parse_document(&source) {
        Ok(element) => element,
        Err(err) => {
            eprintln!("{}: {}", args.document.display(), err);
            return ExitCode::FAILURE;
        }
    };

    let options = RenderOptions::with_indent_width(args.indent);
    println!("{}", options.render(&element, args.level));
    return ExitCode::SUCCESS;
}
