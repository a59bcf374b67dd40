use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub use clap::Parser;

use crate::error::HexError;
use crate::repl::models::Endianness;

/// Usage line printed for argument errors
pub const USAGE: &str = "Usage: hexitor [OPTIONS] <FILE>";

#[derive(Parser, Debug)]
#[command(name = "hexitor", version, about, long_about = None)]
struct ClapArgs {
    /// File to edit
    /// Required. The whole file is loaded into memory; it must not be empty.
    #[clap(value_name = "FILE", help = "file to edit")]
    file: PathBuf,

    /// Byte order for the detail pane
    #[clap(
        short = 'e',
        long,
        value_enum,
        default_value = "little",
        help = "byte order used to decode values at the cursor"
    )]
    endian: Endianness,

    /// Verbose mode
    /// Optional. Write debug logs to the log file.
    #[clap(
        short = 'v',
        long,
        help = "Write logs to hexitor.log (or $HEXITOR_LOG_FILE)",
        default_value = "false"
    )]
    verbose: bool,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    file: PathBuf,
    endian: Endianness,
    verbose: bool,
}

/// Outcome of parsing that is not a usable set of arguments
#[derive(Debug)]
pub enum ArgsOutcome {
    /// `--help` / `--version`: print the text and exit successfully
    Informational(String),
    /// Anything else: print usage and exit with the usage status
    Invalid(HexError),
}

impl CommandLineArgs {
    #[allow(dead_code)]
    pub fn parse() -> Self {
        Self::from_clap(ClapArgs::parse())
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::from_clap(ClapArgs::parse_from(itr))
    }

    /// Parse without exiting the process, mapping clap failures to `HexError::Usage`
    pub fn try_parse_from<I, T>(itr: I) -> Result<Self, ArgsOutcome>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        use clap::error::ErrorKind;

        match ClapArgs::try_parse_from(itr) {
            Ok(args) => Ok(Self::from_clap(args)),
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                Err(ArgsOutcome::Informational(e.to_string()))
            }
            Err(e) => {
                tracing::debug!("Argument error: {}", e);
                Err(ArgsOutcome::Invalid(HexError::Usage(USAGE.to_string())))
            }
        }
    }

    fn from_clap(args: ClapArgs) -> Self {
        Self {
            file: args.file,
            endian: args.endian,
            verbose: args.verbose,
        }
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    pub fn endianness(&self) -> Endianness {
        self.endian
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}
