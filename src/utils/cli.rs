//! Command-line argument parsing and help for lister.
//!
//! When invoked with no args (lister), the current directory is listed.
//! A single positional argument selects the directory to list instead.

use crate::config::Config;

#[derive(Debug, PartialEq, Eq)]
pub enum CliAction {
    RunApp,
    RunAppAtPath(String),
    Exit,
}

/// Parses the process arguments.
pub fn handle_args() -> CliAction {
    let args: Vec<String> = std::env::args().skip(1).collect();
    parse_args(&args)
}

/// Decides what to do from the arguments after the program name.
///
/// Informational flags are handled here and end in [CliAction::Exit].
pub fn parse_args(args: &[String]) -> CliAction {
    if args.is_empty() {
        return CliAction::RunApp;
    }

    if args.len() > 1 {
        eprintln!("Error: lister accepts only one argument at a time.");
        eprintln!("Usage: lister [PATH] or lister [OPTION]");
        return CliAction::Exit;
    }

    match args[0].as_str() {
        "--version" | "-v" => {
            print_version();
            CliAction::Exit
        }
        "-h" | "--help" => {
            print_help();
            CliAction::Exit
        }
        "--init" => {
            if let Err(e) = Config::generate_default(&Config::default_path()) {
                eprintln!("Error: {}", e);
            }
            CliAction::Exit
        }
        arg if !arg.starts_with('-') && !arg.trim().is_empty() => {
            CliAction::RunAppAtPath(arg.to_string())
        }
        arg => {
            eprintln!("Unknown argument: {}", arg);
            eprintln!("Try --help for available options");
            CliAction::Exit
        }
    }
}

fn print_version() {
    println!("lister {}", env!("CARGO_PKG_VERSION"));
}

fn print_help() {
    println!(
        r#"lister - list a directory in the terminal as its entries are discovered

USAGE:
  lister [PATH]

PATH:
  Directory to list (defaults to the current directory)

OPTIONS:
      --init              Generate a default configuration file
  -h, --help              Print help information
  -v, --version           Display the current installed version of lister

KEYS:
  j / Down                Select the next entry
  k / Up                  Select the previous entry
  Home / End / G          Jump to the first or last entry
  q / Ctrl+c              Quit

ENVIRONMENT:
  LISTER_CONFIG           Override the default config path
  RUST_LOG                Override the log filter
"#
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_arguments_runs_in_cwd() {
        assert_eq!(parse_args(&[]), CliAction::RunApp);
    }

    #[test]
    fn positional_path() {
        assert_eq!(
            parse_args(&args(&["/tmp/somewhere"])),
            CliAction::RunAppAtPath("/tmp/somewhere".into())
        );
    }

    #[test]
    fn unknown_flag_and_extra_args_exit() {
        assert_eq!(parse_args(&args(&["--bogus"])), CliAction::Exit);
        assert_eq!(parse_args(&args(&["a", "b"])), CliAction::Exit);
        assert_eq!(parse_args(&args(&["   "])), CliAction::Exit);
    }
}
