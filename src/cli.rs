use crate::{clean::CleanOptions, release::DEFAULT_RELEASE_REPOSITORY, size::SizeUnit};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// A CLI tool for cleaning up AWS Lambda versions
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Application {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: SubCommands,

    /// Flags shared by every subcommand
    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Flags shared by every subcommand
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Specify the desired AWS region to target.
    #[arg(long, short, global = true, env = "AWS_DEFAULT_REGION")]
    pub region: Option<String>,

    /// Specify the AWS profile to leverage for authentication.
    #[arg(long, short, global = true, env = "AWS_PROFILE")]
    pub profile: Option<String>,

    /// Specify a file containing Lambdas to delete.
    #[arg(long = "listFile", short = 'l', global = true)]
    pub list_file: Option<PathBuf>,

    /// Show Lambda names and count of versions to be removed.
    #[arg(long = "moreLambdaDetails", short = 'm', global = true)]
    pub more_lambda_details: bool,

    /// Enable debug output.
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Executes a dry run.
    #[arg(long = "dryrun", short = 'd', global = true)]
    pub dry_run: bool,

    /// Displays file sizes in IEC units.
    #[arg(long = "size-iec", short = 'i', global = true)]
    pub size_iec: bool,

    /// Keep the versions referenced by an alias.
    #[arg(long = "skip-aliases", short = 's', global = true)]
    pub skip_aliases: bool,

    /// Maximum number of delete calls in flight. Unbounded when unset.
    #[arg(long = "max-concurrency", global = true, value_parser = clap::value_parser!(u16).range(1..))]
    pub max_concurrency: Option<u16>,
}

/// Subcommands of the CLI
#[derive(Debug, Subcommand)]
pub enum SubCommands {
    /// Removes all former versions of AWS lambdas except for the $LATEST version.
    Clean(CleanArgs),

    /// Print the current version number and check for a newer release.
    Version(VersionArgs),
}

/// Arguments of the clean subcommand
#[derive(Debug, Args)]
pub struct CleanArgs {
    /// The number of versions to retain from $LATEST-(n).
    #[arg(long, short, default_value_t = 1, allow_negative_numbers = true)]
    pub count: i64,
}

/// Arguments of the version subcommand
#[derive(Debug, Args)]
pub struct VersionArgs {
    /// GitHub repository (owner/name) publishing the releases.
    #[arg(long, default_value = DEFAULT_RELEASE_REPOSITORY)]
    pub repository: String,
}

impl GlobalArgs {
    /// Turn the flags into clean options for an already validated region.
    pub fn clean_options(&self, region: String, count: i64) -> CleanOptions {
        CleanOptions {
            region,
            retain: count.max(1) as usize,
            dry_run: self.dry_run,
            skip_aliases: self.skip_aliases,
            details: self.more_lambda_details,
            size_unit: SizeUnit::from_iec_flag(self.size_iec),
            max_concurrency: self.max_concurrency.map(usize::from),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_clean() {
        let app = Application::try_parse_from([
            "lambda_cleanup",
            "clean",
            "-r",
            "us-east-1",
            "-c",
            "3",
            "-d",
            "-i",
            "--listFile",
            "list.yaml",
        ])
        .unwrap();

        let count = match app.command {
            SubCommands::Clean(args) => args.count,
            _ => panic!("expected clean"),
        };
        assert_eq!(3, count);
        assert_eq!(Some("us-east-1".to_string()), app.global.region);
        assert_eq!(Some(PathBuf::from("list.yaml")), app.global.list_file);

        let options = app.global.clean_options("us-east-1".into(), count);
        assert_eq!(3, options.retain);
        assert!(options.dry_run);
        assert_eq!(SizeUnit::Iec, options.size_unit);
        assert_eq!(None, options.max_concurrency);
    }

    #[test]
    fn test_clean_options_clamp_count() {
        let app = Application::try_parse_from(["lambda_cleanup", "clean", "-c", "-2"]).unwrap();
        let options = app.global.clean_options("us-east-1".into(), -2);
        assert_eq!(1, options.retain);
        assert!(matches!(app.command, SubCommands::Clean(CleanArgs { count: -2 })));
    }

    #[test]
    fn test_reject_zero_concurrency() {
        assert!(
            Application::try_parse_from(["lambda_cleanup", "clean", "--max-concurrency", "0"])
                .is_err()
        );
    }
}
