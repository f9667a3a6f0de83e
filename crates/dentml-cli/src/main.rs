use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dentml")]
#[command(about = "dentml: indentation shorthand to markup compiler")]
#[command(version)]
struct Cli {
    /// Log pipeline stages to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compile a .dml file to markup
    Build {
        /// Input .dml file
        path: PathBuf,

        /// Keep the source's line breaks and indentation
        #[arg(long)]
        pretty: bool,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check a .dml file for errors without generating output
    Check {
        /// Input .dml file
        path: PathBuf,
    },

    /// Print the token stream of a .dml file
    Tokens {
        /// Input .dml file
        path: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Build {
            path,
            pretty,
            output,
        } => cmd_build(&path, pretty, output.as_deref()),
        Command::Check { path } => cmd_check(&path),
        Command::Tokens { path } => cmd_tokens(&path),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {message}");
    std::process::exit(1);
}

fn read_source(path: &Path) -> String {
    if !path.exists() {
        fail(format!("file not found: {}", path.display()));
    }
    match std::fs::read_to_string(path) {
        Ok(source) => {
            tracing::debug!(path = %path.display(), chars = source.chars().count(), "read source");
            source
        }
        Err(e) => fail(format!("reading {}: {e}", path.display())),
    }
}

fn cmd_build(path: &Path, pretty: bool, output: Option<&Path>) {
    let source = read_source(path);

    let fragments = match dentml_render::compile(&source, pretty) {
        Ok(fragments) => fragments,
        Err(e) => fail(e),
    };

    let result = match output {
        Some(out_path) => std::fs::File::create(out_path)
            .map(std::io::BufWriter::new)
            .and_then(|mut file| write_fragments(&mut file, fragments)),
        None => write_fragments(&mut std::io::stdout().lock(), fragments),
    };

    if let Err(e) = result {
        fail(format!("writing output: {e}"));
    }

    if let Some(out_path) = output {
        eprintln!("Built: {}", out_path.display());
    }
}

/// Stream fragments to `out` as they are rendered.
fn write_fragments(
    out: &mut impl Write,
    fragments: dentml_render::Render,
) -> std::io::Result<()> {
    let mut count = 0usize;
    let mut ends_with_newline = true;
    for fragment in fragments {
        out.write_all(fragment.as_bytes())?;
        ends_with_newline = fragment.ends_with('\n');
        count += 1;
    }
    if !ends_with_newline {
        out.write_all(b"\n")?;
    }
    tracing::debug!(fragments = count, "wrote markup");
    out.flush()
}

fn cmd_check(path: &Path) {
    let source = read_source(path);

    if let Err(e) = dentml_parser::Parser::parse(&source) {
        fail(e);
    }

    eprintln!("OK: {}", path.display());
}

fn cmd_tokens(path: &Path) {
    let source = read_source(path);

    let tokens = match dentml_lexer::Scanner::tokenize(&source) {
        Ok(tokens) => tokens,
        Err(e) => fail(e),
    };

    for token in tokens {
        println!(
            "{}:{}\t{:<12}{:?}",
            token.span.line,
            token.span.column,
            token.kind.describe(),
            token.text
        );
    }
}
