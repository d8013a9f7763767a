//! Command line arguments.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Default log4rs configuration file.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

#[derive(Parser, Debug)]
#[command(name = "cidr-brewer")]
#[command(version, about = "A CLI utility for working with classless IP addresses")]
pub struct Cli {
    /// One or two IPv4 addresses, optionally in slash notation (e.g. 192.168.19.100/25)
    #[arg(value_name = "IP_ADDR", required = true, num_args = 1..=2)]
    pub addrs: Vec<String>,

    /// Partition the subnet into blocks of these sizes (single address only).
    /// Takes every value that follows it, so give the address first
    /// (e.g. 192.168.19.100/25 -b 16 64 16 32)
    #[arg(short, long, value_name = "SIZE", num_args = 1.., value_delimiter = ',')]
    pub block_sizes: Option<Vec<u64>>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// log4rs configuration file
    #[arg(long, value_name = "FILE", default_value = DEFAULT_LOG_CONFIG)]
    pub log_config: PathBuf,

    /// Raise the log level when no log config file is found (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_one_addr() {
        let cli = Cli::try_parse_from(["cidr-brewer", "192.168.19.100/25"]).unwrap();
        assert_eq!(cli.addrs, vec!["192.168.19.100/25"]);
        assert_eq!(cli.block_sizes, None);
        assert!(!cli.json);
        assert_eq!(cli.log_config, PathBuf::from(DEFAULT_LOG_CONFIG));
    }

    #[test]
    fn test_cli_two_addrs() {
        let cli =
            Cli::try_parse_from(["cidr-brewer", "125.47.32.170/25", "125.47.32.53/25"]).unwrap();
        assert_eq!(cli.addrs, vec!["125.47.32.170/25", "125.47.32.53/25"]);
    }

    #[test]
    fn test_cli_block_sizes() {
        let cli = Cli::try_parse_from([
            "cidr-brewer",
            "192.168.19.100/25",
            "--block-sizes",
            "16",
            "64",
            "16,32",
        ])
        .unwrap();
        assert_eq!(cli.block_sizes, Some(vec![16, 64, 16, 32]));
    }

    #[test]
    fn test_cli_block_sizes_before_addr() {
        // the address is read as another size
        assert!(Cli::try_parse_from(["cidr-brewer", "-b", "16", "32", "10.0.0.0/24"]).is_err());

        let cli =
            Cli::try_parse_from(["cidr-brewer", "-b", "16", "32", "--", "10.0.0.0/24"]).unwrap();
        assert_eq!(cli.addrs, vec!["10.0.0.0/24"]);
        assert_eq!(cli.block_sizes, Some(vec![16, 32]));

        let cli = Cli::try_parse_from(["cidr-brewer", "10.0.0.0/24", "-b", "16", "32"]).unwrap();
        assert_eq!(cli.addrs, vec!["10.0.0.0/24"]);
        assert_eq!(cli.block_sizes, Some(vec![16, 32]));
    }

    #[test]
    fn test_cli_rejects_three_addrs() {
        assert!(Cli::try_parse_from(["cidr-brewer", "1.1.1.1", "2.2.2.2", "3.3.3.3"]).is_err());
        assert!(Cli::try_parse_from(["cidr-brewer"]).is_err());
    }

    #[test]
    fn test_cli_verbose() {
        let cli = Cli::try_parse_from(["cidr-brewer", "-vv", "10.0.0.1/8"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
