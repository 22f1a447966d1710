//! Command-line argument parsing and help for colordir.
//!
//! Classifies positional arguments by shape: anything containing a `*`
//! or `?` is the wildcard pattern, anything else is the directory. A
//! second argument of either kind, or an unknown flag, is a fatal usage
//! error before any listing output is produced.

use crate::ui::theme::Theme;

use std::path::PathBuf;

/// Parsed invocation: either run a listing or exit with a code.
pub enum CliAction {
    Run(Box<Options>),
    Exit(i32),
}

/// Everything the listing pipeline needs from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub dir: PathBuf,
    pub pattern: Option<String>,
    pub recursive: bool,
    pub show_total: bool,
    pub force_list: bool,
    pub force_wide: bool,
    pub pause: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            dir: PathBuf::from("."),
            pattern: None,
            recursive: false,
            show_total: false,
            force_list: false,
            force_wide: false,
            pause: false,
        }
    }
}

/// Parsed flag set or the reason parsing stopped.
enum Parsed {
    Options(Options),
    Help,
    Error(String),
}

pub fn handle_args() -> CliAction {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match parse_args(&args) {
        Parsed::Help => {
            print_help();
            CliAction::Exit(0)
        }
        Parsed::Error(msg) => {
            print_usage_error(&msg);
            CliAction::Exit(1)
        }
        Parsed::Options(opts) => {
            if !opts.dir.is_dir() {
                print_usage_error(&format!(
                    "Directory does not exist: {}",
                    opts.dir.display()
                ));
                return CliAction::Exit(1);
            }
            CliAction::Run(Box::new(opts))
        }
    }
}

fn parse_args(args: &[String]) -> Parsed {
    let mut opts = Options::default();
    let mut dir_seen = false;

    for arg in args {
        if arg.starts_with('-') {
            match arg.as_str() {
                "-r" | "--recursive" => opts.recursive = true,
                "-t" | "--total" => opts.show_total = true,
                "-l" | "--list" => opts.force_list = true,
                "-w" | "--wide" => opts.force_wide = true,
                "-p" | "--pause" => opts.pause = true,
                "-h" | "--help" => return Parsed::Help,
                _ => return Parsed::Error(format!("Unknown flag: {}", arg)),
            }
        } else if arg.contains('*') || arg.contains('?') {
            if opts.pattern.is_some() {
                return Parsed::Error("Multiple patterns are not allowed".into());
            }
            opts.pattern = Some(arg.clone());
        } else {
            if dir_seen {
                return Parsed::Error("Multiple directories are not allowed".into());
            }
            opts.dir = PathBuf::from(arg);
            dir_seen = true;
        }
    }

    Parsed::Options(opts)
}

/// Prints `Error: <msg>. Try: cdir -h` with a red tag.
fn print_usage_error(msg: &str) {
    let theme = Theme::default();
    println!(
        "{}Error:{} {}. Try: cdir -h",
        theme.error_color, theme.reset, msg
    );
}

fn print_help() {
    println!(
        r#"cdir {} - a colorful, emoji-enhanced directory listing tool

Lists directory contents with per-type color coding and icons, in a
detailed list or a multi-column grid depending on what fits on screen.

USAGE:
  cdir [FLAGS] [DIRECTORY] [PATTERN]

DIRECTORY:
  Directory to list (defaults to the current directory)

PATTERN:
  Shell wildcard applied to entry names, quoted so the shell does not
  expand it. Must contain at least one * or ?.

FLAGS:
  -r, --recursive   Recurse into subdirectories
  -t, --total       Display total size of directories
  -l, --list        Force the detailed list view
  -w, --wide        Force the multi-column view
  -p, --pause       Pause after each screen of output
  -h, --help        Print this help

EXAMPLES:
  cdir                          List the current directory
  cdir -r -l                    Recursive, detailed listing
  cdir -r "*.txt"               All .txt files, recursively
  cdir /var/log "*.log"         .log files in /var/log
  cdir "*[!0-9]*"               Names without a digit
"#,
        env!("CARGO_PKG_VERSION")
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn parse_ok(list: &[&str]) -> Options {
        match parse_args(&args(list)) {
            Parsed::Options(o) => o,
            Parsed::Help => panic!("unexpected help"),
            Parsed::Error(e) => panic!("unexpected error: {}", e),
        }
    }

    fn parse_err(list: &[&str]) -> String {
        match parse_args(&args(list)) {
            Parsed::Error(e) => e,
            _ => panic!("expected an error"),
        }
    }

    #[test]
    fn defaults_with_no_args() {
        let opts = parse_ok(&[]);
        assert_eq!(opts, Options::default());
    }

    #[test]
    fn flags_set_options() {
        let opts = parse_ok(&["-r", "--total", "-w"]);
        assert!(opts.recursive);
        assert!(opts.show_total);
        assert!(opts.force_wide);
        assert!(!opts.force_list);
        assert!(!opts.pause);
    }

    #[test]
    fn positionals_split_by_wildcard_shape() {
        let opts = parse_ok(&["/tmp", "*.rs"]);
        assert_eq!(opts.dir, PathBuf::from("/tmp"));
        assert_eq!(opts.pattern.as_deref(), Some("*.rs"));

        // Order does not matter; shape decides.
        let opts = parse_ok(&["file?.log", "/var"]);
        assert_eq!(opts.dir, PathBuf::from("/var"));
        assert_eq!(opts.pattern.as_deref(), Some("file?.log"));
    }

    #[test]
    fn duplicates_are_rejected() {
        assert!(parse_err(&["/a", "/b"]).contains("Multiple directories"));
        assert!(parse_err(&["*.a", "*.b"]).contains("Multiple patterns"));
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(parse_err(&["-x"]).contains("Unknown flag"));
        assert!(parse_err(&["--nope"]).contains("Unknown flag"));
    }

    #[test]
    fn help_flag_short_circuits() {
        assert!(matches!(parse_args(&args(&["-h", "-x"])), Parsed::Help));
        assert!(matches!(parse_args(&args(&["--help"])), Parsed::Help));
    }
}
