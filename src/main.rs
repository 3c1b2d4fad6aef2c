use clap::{CommandFactory, Parser};
use color_notation::ColorFormat;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use css_color_extractor::error::ExtractError;
use css_color_extractor::models::{ExtractionOptions, OutputFormat, SortOrder};
use css_color_extractor::services::io_driver;

#[derive(Parser)]
#[command(name = "css-color-extractor")]
#[command(about = "Extract colors from a CSS stylesheet")]
#[command(
    after_help = "Input is read from stdin when piped, otherwise from <INPUT_FILE>.\n\
                  Without --format the output format follows the extension of <OUTPUT_FILE>\n\
                  (.css .sass .scss .less, .json .js, .html .htm) and defaults to a plain list."
)]
struct Cli {
    /// Stylesheet to read when nothing is piped to stdin
    input_file: Option<PathBuf>,

    /// File to write instead of stdout
    output_file: Option<PathBuf>,

    /// Omit greys
    #[arg(short = 'g', long)]
    without_grey: bool,

    /// Omit greys, black, and white
    #[arg(short = 'm', long)]
    without_monochrome: bool,

    /// Keep only the colors the grey/monochrome filters would omit
    #[arg(short, long)]
    inverse: bool,

    /// Keep every occurrence of a color, not just the first
    #[arg(short, long)]
    all_colors: bool,

    /// Sort colors by hue or by how often they are used
    #[arg(short, long, value_enum)]
    sort: Option<SortOrder>,

    /// Output format: css, json, or html
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Transform output color format: hexString, rgbString, percentString,
    /// hslString, hwbString, or keyword
    #[arg(short, long, value_name = "FORMAT")]
    color_format: Option<ColorFormat>,

    /// Tera template for the HTML output
    #[arg(short, long, value_name = "PATH")]
    template_html: Option<PathBuf>,
}

impl Cli {
    fn options(&self) -> ExtractionOptions {
        ExtractionOptions {
            without_grey: self.without_grey,
            without_monochrome: self.without_monochrome,
            inverse: self.inverse,
            all_colors: self.all_colors,
            sort: self.sort,
            color_format: self.color_format,
            format: self.format,
            template_html: self.template_html.clone(),
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "css_color_extractor=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .try_init()?;

    let result = io_driver::run(
        cli.input_file.as_deref(),
        cli.output_file.as_deref(),
        cli.options(),
    );

    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            let report = Report::for_error(&e);
            report.print();
            Ok(ExitCode::from(report.status()))
        }
    }
}

/// What the user sees when a run fails.
#[derive(Debug, PartialEq)]
enum Report {
    /// Usage text, printed to stdout
    Usage(String),
    /// Error message, printed in red to stderr
    Error(String),
}

impl Report {
    fn for_error(error: &ExtractError) -> Self {
        if error.is_no_input() {
            Report::Usage(Cli::command().render_help().to_string())
        } else {
            tracing::debug!(error = ?error, "Run failed");
            Report::Error(error.to_string())
        }
    }

    /// Process exit status; every failure exits with 1.
    fn status(&self) -> u8 {
        1
    }

    fn print(&self) {
        match self {
            Report::Usage(usage) => println!("{usage}"),
            Report::Error(message) => {
                eprintln!("{}", console::style(message).red().for_stderr())
            }
        }
    }
}
