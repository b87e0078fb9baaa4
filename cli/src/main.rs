//! pandoc-opml CLI - document to OPML outline converter

use std::io;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use colored::Colorize;

use pandoc_opml::{
    ConvertOptions, Converter, JsonFormat, OutputFormat, PandocOptions, RenderOptions,
};

#[derive(Parser)]
#[command(name = "pandoc-opml")]
#[command(version)]
#[command(about = "Convert documents to OPML outlines through pandoc", long_about = None)]
struct Cli {
    /// Input document (pandoc JSON is read from stdin if not specified)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file (stdout if not specified)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "opml")]
    to: Format,

    /// Input format passed to pandoc (e.g. "markdown", "org")
    #[arg(short, long, value_name = "FORMAT")]
    from: Option<String>,

    /// pandoc executable
    #[arg(long, env = "PANDOC", default_value = "pandoc", value_name = "PATH")]
    pandoc: PathBuf,

    /// Extra argument passed to pandoc (repeatable)
    #[arg(long = "pandoc-arg", value_name = "ARG", allow_hyphen_values = true)]
    pandoc_args: Vec<String>,

    /// Treat the input file as pandoc JSON instead of running pandoc
    #[arg(long)]
    json_input: bool,

    /// Spaces per nesting level
    #[arg(long, default_value = "2", value_name = "N")]
    indent: usize,

    /// Write output without indentation
    #[arg(long)]
    compact: bool,

    /// Omit the "generated by" comment
    #[arg(long)]
    no_comment: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    /// OPML 2.0 outline
    Opml,
    /// Indented plain text
    Text,
    /// Pretty-printed JSON
    Json,
}

impl Format {
    fn output_format(self, compact: bool) -> OutputFormat {
        match self {
            Format::Opml => OutputFormat::Opml,
            Format::Text => OutputFormat::Text,
            Format::Json if compact => OutputFormat::Json(JsonFormat::Compact),
            Format::Json => OutputFormat::Json(JsonFormat::Pretty),
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut render = RenderOptions::new()
        .with_format(cli.to.output_format(cli.compact))
        .with_indent(cli.indent)
        .with_comment(!cli.no_comment);
    if cli.compact {
        render = render.compact();
    }

    let mut pandoc = PandocOptions::new().with_program(&cli.pandoc);
    if let Some(ref from) = cli.from {
        pandoc = pandoc.with_from(from);
    }
    for arg in &cli.pandoc_args {
        pandoc = pandoc.with_arg(arg);
    }

    let options = ConvertOptions::new()
        .with_render_options(render)
        .with_pandoc(pandoc)
        .with_json_input(cli.json_input);
    let converter = Converter::new(options);

    let result = match cli.input {
        Some(ref input) => converter.convert_file(input)?,
        None => {
            log::info!("reading pandoc JSON from stdin");
            converter.convert_reader(io::stdin().lock())?
        }
    };
    log::debug!(
        "rendered {} outline nodes, {} levels deep",
        result.node_count,
        result.max_depth
    );

    result.write_to(cli.output.as_deref())?;
    if let Some(ref path) = cli.output {
        report_saved(path);
    }

    Ok(())
}

fn report_saved(path: &Path) {
    eprintln!("{} {}", "Saved to".green(), path.display());
}
