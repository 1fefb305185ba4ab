mod debug_report;

use porter_stem::{DoubleConsonant, IvitiMatch, Options, Validation, stem_verbose_with, stem_with};
use std::io::{self, IsTerminal, Read};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let config = match parse_args(std::env::args().skip(1)).and_then(CliConfig::with_stdin_fallback) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    // Tokenizing and case folding are the caller's job; the CLI does the
    // simplest version of both.
    let words: Vec<String> =
        config.input.iter().flat_map(|text| text.split_whitespace()).map(str::to_lowercase).collect();

    for word in &words {
        let outcome = if config.trace {
            stem_verbose_with(word, &config.options).map(|res| debug_report::print_run(&res, config.color))
        } else {
            stem_with(word, &config.options).map(|stem| println!("{word}\t{stem}"))
        };

        if let Err(err) = outcome {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

#[derive(Debug)]
struct CliConfig {
    /// Pieces of text to stem, in command-line order.
    input: Vec<String>,
    options: Options,
    trace: bool,
    color: bool,
}

impl CliConfig {
    /// Read stdin when the command line named no words.
    fn with_stdin_fallback(mut self) -> Result<Self, String> {
        if self.input.is_empty() {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
            self.input.push(buffer);
        }

        if self.input.iter().all(|text| text.trim().is_empty()) {
            return Err(format!("error: no input provided\n\n{}", help_text()));
        }
        Ok(self)
    }
}

/// Flags may appear before, between or after words. Everything after `--`
/// is input.
fn parse_args(args: impl IntoIterator<Item = String>) -> Result<CliConfig, String> {
    let mut config =
        CliConfig { input: Vec::new(), options: Options::default(), trace: false, color: io::stdout().is_terminal() };
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("porter-stem {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => config.color = true,
            "--no-color" => config.color = false,
            "--trace" => config.trace = true,
            "--strict" => config.options.validation = Validation::Strict,
            "--legacy-iviti" => config.options.iviti = IvitiMatch::Unanchored,
            "--same-letter-double" => config.options.double = DoubleConsonant::SameLetter,
            "--input" | "-i" => {
                let text = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                config.input.push(text);
            }
            "--" => {
                config.input.extend(args.by_ref());
                break;
            }
            _ if arg.starts_with("--input=") => config.input.push(arg["--input=".len()..].to_string()),
            _ if arg.starts_with('-') && arg.len() > 1 => return Err(format!("error: unknown option '{arg}'")),
            _ => config.input.push(arg),
        }
    }

    Ok(config)
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "porter-stem {version}

Suffix-stripping English stemmer CLI.

Usage:
  porter-stem [OPTIONS] <words...> [OPTIONS] [-- <words...>]
  porter-stem [OPTIONS] --input <text>

Input is split on whitespace and lowercased; each token is printed as
`word<TAB>stem`.

Options:
  -i, --input <text>         Text to stem. Can be repeated and mixed with
                             positional words; stdin is read when no words
                             are given.
  --strict                   Reject tokens with characters outside a-z.
  --legacy-iviti             Let the step 2 `iviti` rule match anywhere in a
                             word instead of only at its end.
  --same-letter-double       Only treat two identical consonants as a double
                             consonant (steps 1b and 5b).
  --trace                    Print a per-stage report for every word.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Logging goes to stderr and is controlled by RUST_LOG
(e.g. RUST_LOG=porter_stem=trace).

Exit codes:
  0  Success.
  1  A word was rejected (--strict).
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
    )
}
