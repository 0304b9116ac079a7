use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Rename every file in a directory to a sequential, zero-padded name"
)]
pub struct Cli {
    /// The string to use as the base filename
    #[arg(short = 'n', value_name = "FILENAME")]
    pub name: Option<String>,

    /// Base filename, used when -n is not given
    #[arg(value_name = "NAME")]
    pub base: Option<String>,

    /// The directory in which to rename files (defaults to the current directory)
    #[arg(short = 'd', value_name = "DIRECTORY")]
    pub directory: Option<PathBuf>,

    /// The string placed between the base filename and the number
    #[arg(short = 's', value_name = "SEPARATOR")]
    pub separator: Option<String>,

    /// The minimum number of digits used for the file number
    #[arg(short = 'p', value_name = "PAD")]
    pub pad: Option<usize>,

    /// Include directories in the rename operation
    #[arg(short = 'i')]
    pub include_dirs: bool,

    /// Don't ask for confirmation before renaming
    #[arg(short = 'c')]
    pub no_confirm: bool,

    /// Use a named set of defaults from presets.toml
    #[arg(long)]
    pub preset: Option<String>,

    /// Log every rename
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_flags() {
        let cli = Cli::try_parse_from([
            "seqname", "-n", "photo", "-d", "/tmp", "-s", "_", "-p", "3", "-i", "-c",
        ])
        .unwrap();
        assert_eq!(cli.name.as_deref(), Some("photo"));
        assert_eq!(cli.directory, Some(PathBuf::from("/tmp")));
        assert_eq!(cli.separator.as_deref(), Some("_"));
        assert_eq!(cli.pad, Some(3));
        assert!(cli.include_dirs);
        assert!(cli.no_confirm);
    }

    #[test]
    fn accepts_positional_name() {
        let cli = Cli::try_parse_from(["seqname", "img"]).unwrap();
        assert_eq!(cli.name, None);
        assert_eq!(cli.base.as_deref(), Some("img"));
    }

    #[test]
    fn rejects_negative_pad() {
        assert!(Cli::try_parse_from(["seqname", "-p", "-2", "img"]).is_err());
    }
}
