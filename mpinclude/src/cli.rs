use clap::Parser;
use std::path::PathBuf;

/// Help text for configuration file options, shown at the bottom of --help.
const CONFIG_HELP: &str = "\
CONFIGURATION FILE (.mpinclude.toml):
  Looked up from the first PATH's directory upwards. Flags override it.

  [mpinclude]
  from_header = \"Python.h\"        # Header to rewrite away
  to_header = \"micropython.h\"     # Header to include instead
  skip_unchanged = true           # Leave files without a match untouched
";

/// Command line interface configuration using `clap`.
#[derive(Parser, Debug)]
#[command(
    name = "mpinclude",
    version,
    about = "Rewrite #include <Python.h> to #include \"micropython.h\" in C sources",
    long_about = None,
    after_help = CONFIG_HELP
)]
pub struct Cli {
    /// Source files to rewrite in place, processed in order.
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Print one line per file and a summary.
    #[arg(short, long)]
    pub verbose: bool,

    /// Show which files would change without writing anything.
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Load configuration from this file instead of searching for `.mpinclude.toml`.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Header to rewrite away (overrides config).
    #[arg(long = "from", value_name = "HEADER")]
    pub from_header: Option<String>,

    /// Header to include instead (overrides config).
    #[arg(long = "to", value_name = "HEADER")]
    pub to_header: Option<String>,

    /// Rewrite files even when nothing in them matches.
    #[arg(long)]
    pub always_write: bool,
}
