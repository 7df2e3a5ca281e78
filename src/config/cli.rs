use crate::app::render::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "dcp-inventory")]
#[command(about = "Command-line client for the DepEd Computerization Program inventory API")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Path to a TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "API base address (overrides config and DCP_API_BASE_URL)")]
    pub base_url: Option<String>,

    #[arg(long, global = true, help = "Bearer token for authenticated operations")]
    pub token: Option<String>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    Batch {
        #[command(subcommand)]
        action: ResourceAction,
    },
    Configuration {
        #[command(subcommand)]
        action: ResourceAction,
    },
    Coordinator {
        #[command(subcommand)]
        action: ResourceAction,
    },
    District {
        #[command(subcommand)]
        action: ResourceAction,
    },
    Division {
        #[command(subcommand)]
        action: ResourceAction,
    },
    Municipality {
        #[command(subcommand)]
        action: ResourceAction,
    },
    Package {
        #[command(subcommand)]
        action: ResourceAction,
    },
    School {
        #[command(subcommand)]
        action: ResourceAction,
    },
    SchoolBatchList {
        #[command(subcommand)]
        action: ResourceAction,
    },
    SchoolContact {
        #[command(subcommand)]
        action: ResourceAction,
    },
    SchoolEnergy {
        #[command(subcommand)]
        action: ResourceAction,
    },
    SchoolNtc {
        #[command(subcommand)]
        action: ResourceAction,
    },
    Provider {
        #[command(subcommand)]
        action: ResourceAction,
    },
    User {
        #[command(subcommand)]
        action: UserAction,
    },
    /// Locally persisted division state
    Store {
        #[command(subcommand)]
        action: StoreAction,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum ResourceAction {
    /// List every record
    List {
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Fetch one record (composite ids as `first:second`)
    Get { id: String },
    /// List the records belonging to a parent record
    ByParent {
        parent_id: i64,
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Create one record from a JSON file
    Create {
        #[arg(long)]
        file: PathBuf,
    },
    /// Create several records from a JSON array file
    CreateAll {
        #[arg(long)]
        file: PathBuf,
    },
    /// Replace a record from a JSON file (must include its id)
    Update {
        #[arg(long)]
        file: PathBuf,
    },
    Delete {
        id: String,
        #[arg(long, help = "Report a rejected delete as 'false' instead of failing")]
        quiet_failure: bool,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum UserAction {
    #[command(flatten)]
    Common(ResourceAction),
    /// Change the allow-listed profile fields (needs --token)
    UpdateProfile {
        id: i64,
        #[arg(long)]
        file: PathBuf,
    },
    ResetPassword {
        id: i64,
        #[arg(long)]
        password: String,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum StoreAction {
    Show,
    /// Overwrite fields, e.g. `officeName="Records Section"`
    Set {
        #[arg(value_parser = parse_key_value, required = true)]
        pairs: Vec<(String, String)>,
    },
    Clear,
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", raw))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing key in '{}'", raw));
    }
    Ok((key.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_resource_command() {
        let cli = CliConfig::try_parse_from([
            "dcp-inventory",
            "--base-url",
            "http://localhost:9000/api",
            "batch",
            "list",
            "--format",
            "csv",
        ])
        .unwrap();

        assert_eq!(cli.base_url.as_deref(), Some("http://localhost:9000/api"));
        match cli.command {
            Command::Batch {
                action: ResourceAction::List { format },
            } => assert_eq!(format, OutputFormat::Csv),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_user_common_and_specific_actions() {
        let cli = CliConfig::try_parse_from(["dcp-inventory", "user", "get", "4"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::User {
                action: UserAction::Common(ResourceAction::Get { .. })
            }
        ));

        let cli = CliConfig::try_parse_from([
            "dcp-inventory",
            "user",
            "reset-password",
            "4",
            "--password",
            "n3w",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Command::User {
                action: UserAction::ResetPassword { id: 4, .. }
            }
        ));
    }

    #[test]
    fn test_parse_store_set() {
        let cli = CliConfig::try_parse_from([
            "dcp-inventory",
            "store",
            "set",
            "officeName=Records Section",
            "divisionId=3",
        ])
        .unwrap();

        match cli.command {
            Command::Store {
                action: StoreAction::Set { pairs },
            } => {
                assert_eq!(pairs[0], ("officeName".to_string(), "Records Section".to_string()));
                assert_eq!(pairs[1], ("divisionId".to_string(), "3".to_string()));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_key_value_errors() {
        assert!(parse_key_value("noequals").is_err());
        assert!(parse_key_value("=value").is_err());
        assert_eq!(
            parse_key_value("remarks=").unwrap(),
            ("remarks".to_string(), String::new())
        );
    }
}
