//! Shell completion script generation

use std::io;

use clap::CommandFactory;
use clap_complete::{Shell, generate};

use crate::cli::Cli;

/// Write the completion script for `shell` to stdout
pub fn run(shell: Shell) {
    generate(shell, &mut Cli::command(), "condoctl", &mut io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bash_script_mentions_subcommands() {
        let mut buf = Vec::new();
        generate(Shell::Bash, &mut Cli::command(), "condoctl", &mut buf);
        let script = String::from_utf8(buf).unwrap();

        assert!(script.contains("condoctl"));
        assert!(script.contains("login"));
        assert!(script.contains("endpoints"));
    }
}
