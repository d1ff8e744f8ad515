//! Command-line interface for the diagnostic catalog
//!
//! Provides commands: explain, compose, list

mod compose_cmd;
mod explain_cmd;
mod list_cmd;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::catalog::loader;
use crate::compose::{english_bundles, MessageComposer};
use crate::resolve::FragmentResolver;

pub use compose_cmd::run as compose;
pub use explain_cmd::run as explain;
pub use list_cmd::run as list;

/// sbmlmsg - compose and inspect SBML validation diagnostics
#[derive(Parser, Debug)]
#[command(name = "sbmlmsg")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Directory of bundle files taking priority over the embedded catalogs
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the category label, rule text and detail template for a code
    Explain {
        /// Error code, e.g. CORE_20906
        code: String,
    },

    /// Compose the full diagnostic for a code
    Compose {
        /// Error code, e.g. CORE_20906
        code: String,

        /// Positional template arguments
        #[arg(value_name = "ARGS")]
        args: Vec<String>,

        /// Phrasing variant (SELF, COMP, MATH)
        #[arg(long)]
        variant: Option<String>,

        /// Locale to resolve under
        #[arg(long, default_value = "en")]
        locale: String,

        /// SBML Level (requires --version)
        #[arg(long, requires = "version")]
        level: Option<u8>,

        /// SBML Version (requires --level)
        #[arg(long, requires = "level")]
        version: Option<u8>,
    },

    /// List known codes with their category labels
    List {
        /// Only list codes in this namespace (e.g. CORE)
        #[arg(long)]
        namespace: Option<String>,
    },
}

/// Build the composer. Bundles from `--data-dir` are registered first, so
/// within a specificity tier they take priority over the embedded English
/// catalogs; the first default generic encountered wins the same way.
pub(crate) fn load_composer(
    data_dir: Option<&Path>,
) -> Result<MessageComposer, Box<dyn std::error::Error>> {
    let mut builder = FragmentResolver::builder();
    if let Some(dir) = data_dir {
        builder = builder.bundles(loader::load_dir(dir)?);
    }
    builder = builder.bundles(english_bundles()?);
    Ok(MessageComposer::new(builder.build()?))
}
