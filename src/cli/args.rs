// args.rs - Command line arguments definition

use argh::FromArgs;

#[derive(FromArgs, Debug, Default)]
/// repcombine - Combine delimited reports with overlapping column headers.
/// If reports have different headers, columns are recombined in roughly the
/// same order and missing values are filled with a NULL marker
pub struct Args {
    /// report files to combine, in output order (.gz inputs are decompressed)
    #[argh(positional)]
    pub files: Vec<String>,

    /// input field delimiter: a single character, \t, tab, comma, pipe, semicolon or space (default: tab)
    #[argh(option, short = 'd')]
    pub delimiter: Option<String>,

    /// output field delimiter (default: same as --delimiter)
    #[argh(option, short = 'o')]
    pub output_delimiter: Option<String>,

    /// add the source file name as the first column
    #[argh(switch, short = 'f')]
    pub file_name: bool,

    /// marker for values missing from a report (default: NULL)
    #[argh(option, short = 'n')]
    pub na_value: Option<String>,

    /// transpose the output
    #[argh(switch, short = 't')]
    pub transpose: bool,

    /// column ordering: insertion, positional (default: insertion)
    #[argh(option)]
    pub ordering: Option<String>,

    /// lines starting with this character are ignored; "none" disables (default: #)
    #[argh(option)]
    pub comment_char: Option<String>,

    /// skip rows whose field count differs from the header instead of failing
    #[argh(switch)]
    pub skip_malformed: bool,

    /// write the merged table to this file instead of stdout
    #[argh(option)]
    pub output: Option<String>,

    /// path to TOML configuration file
    #[argh(option)]
    pub config: Option<String>,

    /// generate sample configuration file and exit
    #[argh(switch)]
    pub generate_config: bool,

    /// write the effective settings to this TOML file and exit
    #[argh(option)]
    pub save_config: Option<String>,

    /// print version information and exit
    #[argh(switch)]
    pub version: bool,

    /// print extra diagnostic information to stderr
    #[argh(switch, short = 'v')]
    pub verbose: bool,
}
