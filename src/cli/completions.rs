//! Completions command implementation

use crate::cli::{Cli, CompletionsArgs};
use clap::CommandFactory;
use clap_complete::generate;
use std::io;

/// Handle `command-center completions` command
pub fn handle_completions(args: &CompletionsArgs) {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(args.shell, &mut cmd, bin_name, &mut io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap_complete::Shell;

    fn render(shell: Shell) -> String {
        let mut cmd = Cli::command();
        let mut buffer = Vec::new();
        generate(shell, &mut cmd, "command-center", &mut buffer);
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_completions_bash_lists_subcommands() {
        let script = render(Shell::Bash);
        assert!(script.contains("command-center"));
        assert!(script.contains("inspect"));
        assert!(script.contains("components"));
    }

    #[test]
    fn test_completions_zsh() {
        assert!(render(Shell::Zsh).contains("serve"));
    }
}
