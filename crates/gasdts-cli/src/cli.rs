use std::path::PathBuf;

use clap::Parser;

use crate::commands::generate::GenerateArgs;

#[derive(Parser, Debug)]
#[command(name = "gasdts", bin_name = "gasdts")]
#[command(about = "Generate Google Apps Script .d.ts files from an API description")]
#[command(after_help = r#"EXAMPLES:
  gasdts < description.json
  gasdts --input description.json --out-dir types/
  gasdts --input description.json --date 2020-01-01 --overrides overrides.json
  gasdts --print-overrides > overrides.json"#)]
pub struct Cli {
    /// Description document (reads stdin if omitted)
    #[arg(long, short = 'i', value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Static header prefixed to every file; `{date}` is replaced once
    #[arg(long, value_name = "FILE", default_value = "HEADER")]
    pub header: PathBuf,

    /// Directory receiving the generated files
    #[arg(long, short = 'o', value_name = "DIR", default_value = "google-apps-script")]
    pub out_dir: PathBuf,

    /// JSON file replacing tables of the built-in compatibility overrides
    #[arg(long, value_name = "FILE")]
    pub overrides: Option<PathBuf>,

    /// Date substituted into the header instead of today (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub date: Option<String>,

    /// Print the effective override table as JSON and exit
    #[arg(long)]
    pub print_overrides: bool,

    /// Log debug events (GASDTS_LOG takes precedence)
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl From<Cli> for GenerateArgs {
    fn from(cli: Cli) -> Self {
        Self {
            input: cli.input,
            header: cli.header,
            out_dir: cli.out_dir,
            overrides: cli.overrides,
            date: cli.date,
        }
    }
}
