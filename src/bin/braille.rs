//! `braille`: translates between text and 6-dot Braille cell strings.
//!
//! **Usage:**
//! ```text
//! braille [--render] [--lenient] [--single-digit] [-v] <INPUT>...
//! ```
//!
//! Input made only of `O` and `.` is decoded to text; anything else is
//! encoded to cells.

use std::io::Write;
use std::process::ExitCode;

use anyhow::Result;
use braille_codec::{
    BrailleError, NumericPolicy, RenderOptions, Translator, TranslatorConfig, write_translation,
};
use clap::{CommandFactory, Parser};
use log::LevelFilter;

/// Translate between English text and Braille cell strings.
#[derive(Parser)]
#[command(
    name = "braille",
    about = "Translate between English text and Braille cell strings"
)]
struct Args {
    /// Text to encode, or a cell string (O and .) to decode. Several words
    /// are joined with single spaces.
    input: Vec<String>,

    /// Also print each cell as a 3x2 grid of glyphs.
    #[arg(long)]
    render: bool,

    /// Cells per rendered line (0 for a single line).
    #[arg(long, default_value_t = 16)]
    cells_per_line: usize,

    /// Encode unsupported characters as the unknown cell instead of failing.
    #[arg(long)]
    lenient: bool,

    /// Give every digit its own number sign.
    #[arg(long)]
    single_digit: bool,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    builder.parse_default_env();
    builder.format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()));
    let _ = builder.try_init();
}

/// Exit status for a missing input.
const EXIT_USAGE: u8 = 2;
/// Exit status for any other failure.
const EXIT_FAILURE: u8 = 1;

fn run(args: &Args) -> Result<()> {
    let input = args.input.join(" ");

    let translator = Translator::new(TranslatorConfig {
        numeric_policy: if args.single_digit {
            NumericPolicy::SingleDigit
        } else {
            NumericPolicy::UntilTerminator
        },
        strict: !args.lenient,
    });
    let translation = translator.translate(&input)?;

    let options = RenderOptions {
        cells_per_line: args.cells_per_line,
        ..RenderOptions::default()
    };
    let stdout = std::io::stdout();
    write_translation(
        &mut stdout.lock(),
        &translation,
        args.render.then_some(&options),
    )?;
    Ok(())
}

fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<BrailleError>() {
        Some(BrailleError::EmptyInput) => EXIT_USAGE,
        _ => EXIT_FAILURE,
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = exit_code(&err);
            if code == EXIT_USAGE {
                eprintln!("{}", Args::command().render_help());
            }
            eprintln!("error: {}", err);
            ExitCode::from(code)
        }
    }
}
