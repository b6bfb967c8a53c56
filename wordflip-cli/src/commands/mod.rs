//! CLI command implementations

use crate::output::OutputFormat;
use anyhow::Result;
use clap::{Subcommand, ValueEnum};
use wordflip_api::Scope;

pub mod generate_config;
pub mod reverse;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Reverse the word order of files, text or stdin
    Reverse(reverse::ReverseArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Check a configuration file
    Validate(validate::ValidateArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,

    /// List available reversal scopes
    Scopes,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Reverse(args) => args.execute(),
            Commands::List { subcommand } => {
                subcommand.execute();
                Ok(())
            }
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
        }
    }
}

impl ListCommands {
    /// Print the requested listing
    pub fn execute(&self) {
        for (name, description) in self.entries() {
            println!("  {name:<10} {description}");
        }
    }

    /// Name/description pairs for the listing
    pub fn entries(&self) -> Vec<(String, &'static str)> {
        match self {
            ListCommands::Formats => OutputFormat::value_variants()
                .iter()
                .filter_map(|format| {
                    format
                        .to_possible_value()
                        .map(|value| (value.get_name().to_string(), format.description()))
                })
                .collect(),
            ListCommands::Scopes => Scope::ALL
                .iter()
                .map(|scope| (scope.to_string(), scope_description(*scope)))
                .collect(),
        }
    }
}

fn scope_description(scope: Scope) -> &'static str {
    match scope {
        Scope::Text => "whole input is one sentence (default)",
        Scope::Line => "each line is reversed on its own",
    }
}
