use clap::Parser;
use clap::error::ErrorKind;
use std::path::PathBuf;
use std::process::ExitCode;
use svg_gallery::config::{self, Overrides};
use svg_gallery::{build, output};

#[derive(Parser)]
#[command(name = "svg-gallery")]
#[command(about = "Build a static HTML tile gallery for a directory of SVG exports")]
#[command(long_about = "\
Build a static HTML tile gallery for a directory of SVG exports

File browsers often skip filters and blend modes when thumbnailing vector
files. Open the generated page in a browser to see the real output.

Defaults can be set per directory in <SOURCE>/gallery.toml:

  title = \"SVG Gallery\"
  pattern = \"*.svg\"
  recursive = false

  [tiles]
  size = 160

Command-line flags override the file. Relative paths resolve against the
current directory.")]
#[command(version)]
#[command(args_override_self = true)]
struct Cli {
    /// Directory to scan
    source: PathBuf,

    /// Path to the gallery HTML file [default: <SOURCE>/gallery.html]
    #[arg(short, long, value_name = "FILE", allow_hyphen_values = true)]
    output: Option<PathBuf>,

    /// Glob pattern used to filter files, `*` and `?` only [default: *.svg]
    #[arg(long, value_name = "GLOB", allow_hyphen_values = true)]
    pattern: Option<String>,

    /// Search directories recursively
    #[arg(long)]
    recursive: bool,

    /// Title for the generated page [default: SVG Gallery]
    #[arg(long, value_name = "TEXT", allow_hyphen_values = true)]
    title: Option<String>,
}

impl From<Cli> for Overrides {
    fn from(cli: Cli) -> Self {
        Overrides {
            source: cli.source,
            output: cli.output,
            pattern: cli.pattern,
            recursive: cli.recursive,
            title: cli.title,
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            e.print().ok();
            return ExitCode::FAILURE;
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let project_root = std::env::current_dir()?;
    let options = config::resolve_options(&project_root, cli.into())?;
    log::debug!("resolved options: {options:?}");

    let report = build(&options)?;
    output::print_build_output(&options, &report);
    Ok(())
}
