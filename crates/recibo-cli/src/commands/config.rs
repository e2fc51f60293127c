//! Config command - inspect and initialize configuration.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use console::style;

use recibo_core::{ReciboConfig, RuleProfile};

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    action: ConfigAction,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration as JSON
    Show {
        /// Rule profile to show
        #[arg(long, value_enum, default_value = "standard")]
        profile: ProfileArg,

        /// Include the resolved rule set, not just the profile name
        #[arg(long)]
        resolved: bool,
    },

    /// Write a default configuration file
    Init {
        /// Destination path
        #[arg(default_value = "recibo.json")]
        path: PathBuf,

        /// Rule profile to initialize with
        #[arg(long, value_enum, default_value = "standard")]
        profile: ProfileArg,
    },
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum ProfileArg {
    /// First-generation rule set
    Legacy,
    /// Current rule set
    Standard,
}

impl From<ProfileArg> for RuleProfile {
    fn from(arg: ProfileArg) -> Self {
        match arg {
            ProfileArg::Legacy => RuleProfile::Legacy,
            ProfileArg::Standard => RuleProfile::Standard,
        }
    }
}

pub async fn run(args: ConfigArgs) -> anyhow::Result<()> {
    match args.action {
        ConfigAction::Show { profile, resolved } => {
            let mut config = ReciboConfig::default();
            config.extraction.profile = profile.into();
            if resolved {
                config.extraction.rules = Some(config.extraction.effective_rules());
            }
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigAction::Init { path, profile } => {
            if path.exists() {
                anyhow::bail!("Refusing to overwrite {}", path.display());
            }
            let mut config = ReciboConfig::default();
            config.extraction.profile = profile.into();
            config.save(&path)?;
            println!("{} {}", style("Wrote").green(), path.display());
        }
    }
    Ok(())
}
