// crates/sdk-examples-cli/src/main.rs
// ============================================================================
// Module: SDK Examples CLI Entry Point
// Description: Command dispatcher for certificate and object storage examples.
// Purpose: Run any example from one binary and check fixtures and config offline.
// Dependencies: clap, sdk-examples-acm, sdk-examples-core, sdk-examples-mock,
// sdk-examples-s3, thiserror.
// ============================================================================

//! ## Overview
//! `sdk-examples` runs one example per invocation inside a scoped
//! [`SdkRuntime`], and offers offline `fixtures check` and `config validate`
//! commands. Every failure is reported on stderr with a non-zero exit code.

// ============================================================================
// SECTION: Modules
// ============================================================================


// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;
use clap::Parser;
use clap::Subcommand;
use sdk_examples_acm::CertificateFiles;
use sdk_examples_acm::acm_client;
use sdk_examples_acm::delete_certificate;
use sdk_examples_acm::describe_certificate;
use sdk_examples_acm::get_certificate;
use sdk_examples_acm::import_certificate_from_files;
use sdk_examples_acm::list_certificates;
use sdk_examples_core::EventSinkKind;
use sdk_examples_core::ExampleError;
use sdk_examples_core::ExamplesConfig;
use sdk_examples_core::SdkRuntime;
use sdk_examples_core::output::write_stderr_line;
use sdk_examples_core::output::write_stdout_line;
use sdk_examples_mock::FixtureResponse;
use sdk_examples_mock::resolve_fixture_path;
use sdk_examples_s3::list_buckets;
use sdk_examples_s3::list_objects;
use sdk_examples_s3::s3_client;
use thiserror::Error;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "sdk-examples", disable_help_subcommand = true)]
struct Cli {
    /// Config file path (overrides `SDK_EXAMPLES_CONFIG`).
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,
    /// Region override.
    #[arg(long, value_name = "REGION", global = true)]
    region: Option<String>,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Certificate manager examples.
    Acm {
        /// Selected certificate subcommand.
        #[command(subcommand)]
        command: AcmCommand,
    },
    /// Object storage examples.
    S3 {
        /// Selected object storage subcommand.
        #[command(subcommand)]
        command: S3Command,
    },
    /// Offline fixture utilities.
    Fixtures {
        /// Selected fixture subcommand.
        #[command(subcommand)]
        command: FixturesCommand,
    },
    /// Configuration utilities.
    Config {
        /// Selected config subcommand.
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Certificate manager subcommands.
#[derive(Subcommand, Debug)]
enum AcmCommand {
    /// Import a certificate from local PEM files.
    Import(ImportArgs),
    /// Describe a certificate.
    Describe {
        /// Certificate ARN.
        arn: String,
    },
    /// List every certificate.
    List,
    /// Export a certificate and its chain.
    Get {
        /// Certificate ARN.
        arn: String,
    },
    /// Delete a certificate.
    Delete {
        /// Certificate ARN.
        arn: String,
    },
}

/// Arguments for `acm import`.
#[derive(Args, Debug)]
struct ImportArgs {
    /// Leaf certificate PEM file.
    #[arg(long, value_name = "PATH")]
    certificate: PathBuf,
    /// Certificate chain PEM file.
    #[arg(long, value_name = "PATH")]
    chain: PathBuf,
    /// Private key PEM file.
    #[arg(long, value_name = "PATH")]
    private_key: PathBuf,
}

/// Object storage subcommands.
#[derive(Subcommand, Debug)]
enum S3Command {
    /// List the objects in a bucket.
    ListObjects {
        /// Bucket to list.
        bucket: String,
    },
    /// List owned buckets.
    ListBuckets,
}

/// Fixture subcommands.
#[derive(Subcommand, Debug)]
enum FixturesCommand {
    /// Load fixtures exactly as a mock session would.
    Check {
        /// Root fixture paths resolve against (overrides `fixtures.root`).
        #[arg(long, value_name = "DIR")]
        root: Option<PathBuf>,
        /// Fixture files to check.
        #[arg(required = true, value_name = "PATH")]
        paths: Vec<PathBuf>,
    },
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Load and validate the config file.
    Validate,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for user-facing messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`].
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

impl From<ExampleError> for CliError {
    fn from(err: ExampleError) -> Self {
        Self::new(err.to_string())
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
fn run(cli: Cli) -> CliResult<ExitCode> {
    let config = load_config(cli.config.as_deref(), cli.region.as_deref())?;
    match cli.command {
        Commands::Acm {
            command,
        } => command_acm(&config, command),
        Commands::S3 {
            command,
        } => command_s3(&config, command),
        Commands::Fixtures {
            command,
        } => Ok(command_fixtures(&config, command)),
        Commands::Config {
            command,
        } => command_config(&config, &command),
    }
}

/// Loads configuration and applies the region override.
fn load_config(path: Option<&Path>, region: Option<&str>) -> CliResult<ExamplesConfig> {
    let mut config =
        ExamplesConfig::load(path).map_err(|err| CliError::new(err.to_string()))?;
    if let Some(region) = region {
        config.sdk.region = Some(region.to_string());
        config.validate().map_err(|err| CliError::new(err.to_string()))?;
    }
    Ok(config)
}

// ============================================================================
// SECTION: Example Commands
// ============================================================================

/// Executes an `acm` subcommand.
fn command_acm(config: &ExamplesConfig, command: AcmCommand) -> CliResult<ExitCode> {
    let runtime = SdkRuntime::from_config(config)?;
    let client = acm_client(runtime.sdk_config());
    let lines = match command {
        AcmCommand::Import(args) => {
            let files = CertificateFiles {
                certificate: args.certificate,
                chain: args.chain,
                private_key: args.private_key,
            };
            let arn = runtime
                .block_on("import_certificate", import_certificate_from_files(&client, &files))?;
            vec![format!("Imported certificate {arn}")]
        }
        AcmCommand::Describe {
            arn,
        } => {
            let description =
                runtime.block_on("describe_certificate", describe_certificate(&client, &arn))?;
            let mut lines = vec![
                format!("Certificate {}", description.arn),
                format!("  domain: {}", description.domain_name.as_deref().unwrap_or("-")),
                format!("  status: {}", description.status.as_deref().unwrap_or("-")),
                format!("  type: {}", description.certificate_type.as_deref().unwrap_or("-")),
            ];
            lines.extend(
                description.subject_alternative_names.iter().map(|name| format!("  san: {name}")),
            );
            lines
        }
        AcmCommand::List => {
            let listings = runtime.block_on("list_certificates", list_certificates(&client))?;
            let mut lines = vec![format!("Certificates: {}", listings.len())];
            lines.extend(listings.iter().map(|listing| {
                format!(
                    "  {} {} {}",
                    listing.arn,
                    listing.domain_name.as_deref().unwrap_or("-"),
                    listing.status.as_deref().unwrap_or("-")
                )
            }));
            lines
        }
        AcmCommand::Get {
            arn,
        } => {
            let issued = runtime.block_on("get_certificate", get_certificate(&client, &arn))?;
            let mut lines = vec![issued.certificate.trim_end().to_string()];
            if let Some(chain) = issued.chain {
                lines.push(chain.trim_end().to_string());
            }
            lines
        }
        AcmCommand::Delete {
            arn,
        } => {
            runtime.block_on("delete_certificate", delete_certificate(&client, &arn))?;
            vec![format!("Deleted certificate {arn}")]
        }
    };
    write_lines(&lines)?;
    Ok(ExitCode::SUCCESS)
}

/// Executes an `s3` subcommand.
fn command_s3(config: &ExamplesConfig, command: S3Command) -> CliResult<ExitCode> {
    let runtime = SdkRuntime::from_config(config)?;
    let client = s3_client(runtime.sdk_config(), config.sdk.force_path_style);
    let lines = match command {
        S3Command::ListObjects {
            bucket,
        } => {
            let objects = runtime.block_on("list_objects", list_objects(&client, &bucket))?;
            let mut lines = vec![format!("Objects in bucket {bucket}: {}", objects.len())];
            lines.extend(objects.iter().map(|object| format!("  {}", object.key)));
            lines
        }
        S3Command::ListBuckets => {
            let buckets = runtime.block_on("list_buckets", list_buckets(&client))?;
            let mut lines = vec![format!("Buckets: {}", buckets.len())];
            lines.extend(buckets.iter().map(|bucket| {
                format!("  {} {}", bucket.name, bucket.creation_date.as_deref().unwrap_or("-"))
            }));
            lines
        }
    };
    write_lines(&lines)?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Offline Commands
// ============================================================================

/// Executes a `fixtures` subcommand; one line per fixture, failure if any
/// fixture fails to load.
fn command_fixtures(config: &ExamplesConfig, command: FixturesCommand) -> ExitCode {
    let FixturesCommand::Check {
        root,
        paths,
    } = command;
    let root = root.or_else(|| config.fixtures.root.clone());
    let mut failed = false;
    for path in &paths {
        let checked = resolve_fixture_path(root.as_deref(), path).and_then(FixtureResponse::load);
        let line = match checked {
            Ok(fixture) => format!(
                "ok {} ({}, {} bytes)",
                path.display(),
                fixture.format().label(),
                fixture.body().len()
            ),
            Err(err) => {
                failed = true;
                format!("fail {}: {err}", path.display())
            }
        };
        if write_stdout_line(&line).is_err() {
            return ExitCode::FAILURE;
        }
    }
    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

/// Executes a `config` subcommand.
fn command_config(config: &ExamplesConfig, command: &ConfigCommand) -> CliResult<ExitCode> {
    match command {
        ConfigCommand::Validate => {
            write_lines(&[config_summary(config)])?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Renders a one-line summary of a validated config.
fn config_summary(config: &ExamplesConfig) -> String {
    let events = match config.events.sink {
        EventSinkKind::Stderr => "stderr",
        EventSinkKind::File => "file",
        EventSinkKind::None => "none",
    };
    format!(
        "config ok: region={} endpoint={} events={events}",
        config.sdk.region.as_deref().unwrap_or("default"),
        config.sdk.endpoint.as_deref().unwrap_or("default"),
    )
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes lines to stdout.
fn write_lines(lines: &[String]) -> CliResult<()> {
    for line in lines {
        write_stdout_line(line).map_err(|err| CliError::new(format!("stdout: {err}")))?;
    }
    Ok(())
}

/// Writes an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
