//! typomark - render archived blog content as HTML

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use typomark::{ContentFormat, Converted, html, render};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Mode {
    /// Legacy semi-XML dialect
    Dialect,
    /// Stored HTML needing a typographic pass
    Html,
    /// CommonMark
    Markdown,
    /// Typograph an inline fragment such as a title
    Inline,
    /// Extract plain text from HTML
    Text,
}

#[derive(Parser)]
#[command(name = "typomark")]
#[command(version, about = "Render archived blog content as HTML", long_about = None)]
#[command(after_help = "EXAMPLES:
    typomark post.xml                 Convert a dialect document
    typomark -f html post.html        Typograph stored HTML
    typomark --auto post.txt          Pick the format from the content
    echo 'a - b' | typomark -f inline")]
struct Cli {
    /// Input file (reads stdin when omitted)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Content format of the input
    #[arg(short, long, value_enum, default_value_t = Mode::Dialect)]
    format: Mode,

    /// Detect dialect or HTML from the legacy XML prolog
    #[arg(long, conflicts_with = "format")]
    auto: bool,

    /// Output file (writes stdout when omitted)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Exit with failure when the conversion reported an error
    #[arg(long)]
    strict: bool,

    /// Log conversion details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Returns whether the conversion was clean, or `true` when not `--strict`.
fn run(cli: &Cli) -> typomark::Result<bool> {
    let content = read_input(cli.input.as_ref())?;

    let (fragment, clean) = if cli.auto {
        let format = ContentFormat::detect_legacy(&content, false);
        log::info!("detected {format} content");
        let rendered = render(&content, format);
        (rendered.html, rendered.error.is_none())
    } else {
        match cli.format {
            Mode::Dialect => from_render(render(&content, ContentFormat::Dialect)),
            Mode::Html => from_render(render(&content, ContentFormat::Html)),
            Mode::Markdown => from_render(render(&content, ContentFormat::Markdown)),
            Mode::Inline => from_converted(html::typograph_inline(&content)),
            Mode::Text => (html::to_text(&content), true),
        }
    };

    write_output(cli.output.as_ref(), &fragment)?;
    Ok(clean || !cli.strict)
}

fn from_render(rendered: typomark::Rendered) -> (String, bool) {
    (rendered.html, rendered.error.is_none())
}

fn from_converted(converted: Converted) -> (String, bool) {
    let clean = converted.is_ok();
    (converted.html, clean)
}

fn read_input(path: Option<&PathBuf>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut content = String::new();
            io::stdin().read_to_string(&mut content)?;
            Ok(content)
        }
    }
}

fn write_output(path: Option<&PathBuf>, fragment: &str) -> io::Result<()> {
    match path {
        Some(path) => fs::write(path, fragment),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(fragment.as_bytes())?;
            stdout.flush()
        }
    }
}
