//! juji: count plus signs painted by an axis-aligned stroke script.
//!
//! Reads a stroke script (file, stdin, or inline flags), runs the
//! counting pipeline, and prints the count. Optionally prints per-stage
//! diagnostics as a table or JSON, and writes an SVG rendering of the
//! painting with its plus-sign centers marked.
//!
//! # Script format
//!
//! ```text
//! 9                      (optional stroke count)
//! 6 3 4 5 1 6 3 3 4      (lengths, whitespace or comma separated)
//! ULDRULURD              (one direction character per stroke)
//! ```

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use juji_core::DirectionPolicy;
use juji_export::SvgMetadata;

/// Count plus signs painted by an axis-aligned stroke script.
#[derive(Parser)]
#[command(name = "juji", version)]
struct Cli {
    /// Stroke script path (`-` or omitted reads stdin).
    input: Option<PathBuf>,

    /// Comma-separated stroke lengths (with --directions, replaces the
    /// script file).
    #[arg(long, value_name = "L1,L2,...", requires = "directions", conflicts_with = "input")]
    lengths: Option<String>,

    /// Direction characters, one of `UDLR` per stroke.
    #[arg(long, value_name = "DIRS", requires = "lengths", conflicts_with = "input")]
    directions: Option<String>,

    /// Fail on direction characters outside UDLR instead of skipping
    /// them with a warning.
    #[arg(long)]
    strict: bool,

    /// Print a per-stage diagnostics report to stderr.
    #[arg(long)]
    report: bool,

    /// Print diagnostics as pretty JSON on stdout instead of the count.
    #[arg(long)]
    json: bool,

    /// Write an SVG rendering of the painting.
    #[arg(long, value_name = "PATH")]
    svg: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let (lengths, directions) = read_script(cli)?;

    let policy = if cli.strict {
        DirectionPolicy::Strict
    } else {
        DirectionPolicy::Skip
    };
    let strokes =
        juji_core::parse_strokes(&lengths, &directions, policy).map_err(|e| e.to_string())?;

    let staged = juji_core::count_staged(&strokes);

    if cli.json {
        let json = serde_json::to_string_pretty(&staged.diagnostics)
            .map_err(|e| format!("Error serializing diagnostics: {e}"))?;
        println!("{json}");
    } else {
        println!("{}", staged.plus_count);
    }

    if cli.report {
        eprintln!("{}", staged.diagnostics.report());
    }

    if let Some(svg_path) = &cli.svg {
        let title = cli
            .input
            .as_deref()
            .and_then(|p| p.file_stem())
            .and_then(|s| s.to_str())
            .unwrap_or("juji");
        let description = format!(
            "{} strokes, {} plus signs",
            strokes.len(),
            staged.plus_count,
        );
        let metadata = SvgMetadata {
            title: Some(title),
            description: Some(&description),
        };
        let svg = juji_export::to_svg(&staged.path, &staged.centers, &metadata);
        std::fs::write(svg_path, &svg)
            .map_err(|e| format!("Error writing SVG to {}: {e}", svg_path.display()))?;
        eprintln!("SVG written to {} ({} bytes)", svg_path.display(), svg.len());
    }

    Ok(())
}

/// Resolve the stroke inputs from flags, a file, or stdin.
fn read_script(cli: &Cli) -> Result<(Vec<u32>, String), String> {
    if let (Some(lengths), Some(directions)) = (&cli.lengths, &cli.directions) {
        return Ok((
            parse_lengths(lengths)?,
            directions.split_whitespace().collect(),
        ));
    }

    let text = match &cli.input {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .map_err(|e| format!("Error reading {}: {e}", path.display()))?,
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| format!("Error reading stdin: {e}"))?;
            text
        }
    };
    parse_script(&text)
}

/// Parse a stroke script: an optional stroke-count line, a line of
/// lengths, and a line of direction characters.
fn parse_script(text: &str) -> Result<(Vec<u32>, String), String> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let (declared, length_line, direction_line) = match lines.as_slice() {
        [lengths, directions] => (None, *lengths, *directions),
        [count, lengths, directions] => (Some(*count), *lengths, *directions),
        _ => {
            return Err(
                "stroke script must contain two or three non-empty lines: \
                 an optional stroke count, the lengths, and the directions"
                    .to_owned(),
            );
        }
    };

    let lengths = parse_lengths(length_line)?;
    let directions: String = direction_line.split_whitespace().collect();

    if let Some(count_line) = declared {
        let declared: usize = count_line
            .parse()
            .map_err(|e| format!("invalid stroke count '{count_line}': {e}"))?;
        if declared != lengths.len() {
            return Err(format!(
                "declared stroke count {declared} does not match {} lengths",
                lengths.len(),
            ));
        }
    }

    Ok((lengths, directions))
}

/// Parse a comma- or whitespace-separated list of stroke lengths.
fn parse_lengths(text: &str) -> Result<Vec<u32>, String> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<u32>()
                .map_err(|e| format!("invalid stroke length '{token}': {e}"))
        })
        .collect()
}
