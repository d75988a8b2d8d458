mod logger;

use clap::Parser;
use log::{debug, error};
use rill_runtime::syntax::source::SourceFile;
use std::io::Read;
use std::path::PathBuf;
use std::process;

/// Evaluate a program written in a small named-function calculus.
#[derive(Debug, Parser)]
#[command(about, version)]
struct Options {
    /// Program file to evaluate, or standard input if omitted.
    file: Option<PathBuf>,

    /// Print the parsed expression tree instead of evaluating it.
    #[arg(long)]
    dump_ast: bool,

    /// Give up after this many reduction steps.
    #[arg(long, value_name = "N")]
    max_steps: Option<u64>,

    /// Silence all log output.
    #[arg(short, long)]
    quiet: bool,

    /// Increase log verbosity. Can be given multiple times.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let options = Options::parse();

    logger::init();
    log_panics::init();

    if options.quiet {
        logger::quiet();
    } else {
        logger::verbose(options.verbose as usize);
    }

    process::exit(run(options));
}

fn run(options: Options) -> i32 {
    let file = match options.file {
        Some(ref path) => match SourceFile::open(path) {
            Ok(file) => file,
            Err(e) => {
                error!("opening {}: {}", path.display(), e);
                return exitcode::NOINPUT;
            }
        },
        None => {
            let mut source = String::new();

            if let Err(e) = std::io::stdin().read_to_string(&mut source) {
                error!("reading stdin: {}", e);
                return exitcode::IOERR;
            }

            SourceFile::buffer(String::from("<stdin>"), source)
        }
    };

    let name = file.name().to_string();
    debug!("evaluating {}", name);

    let expr = match rill_runtime::syntax::parse(file) {
        Ok(expr) => expr,
        Err(e) => {
            error!("{}: {}", name, e);
            return exitcode::DATAERR;
        }
    };

    debug!("parsed: {:?}", expr);

    if options.dump_ast {
        println!("{:#?}", expr);
        return exitcode::OK;
    }

    match rill_runtime::reduce_with_limit(expr, options.max_steps) {
        Ok(result) => {
            println!("{}", result);
            exitcode::OK
        }
        Err(e) => {
            error!("{}: {}", name, e);
            exitcode::DATAERR
        }
    }
}
