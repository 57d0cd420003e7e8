// crates/sdk-examples-s3/src/bin/list_objects.rs
// ============================================================================
// Module: List Objects Executable
// Description: Standalone object listing with scoped SDK runtime.
// Purpose: List one bucket and report success through the exit code.
// Dependencies: clap, sdk-examples-core, sdk-examples-s3
// ============================================================================

//! ## Overview
//! `list-objects [BUCKET]` loads the example config, starts the SDK runtime,
//! lists the bucket once, and exits `0` on success or `1` on any failure. The
//! runtime guard is dropped before the process exits on every path.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use sdk_examples_core::ExampleError;
use sdk_examples_core::ExamplesConfig;
use sdk_examples_core::SdkRuntime;
use sdk_examples_core::output::write_stderr_line;
use sdk_examples_core::output::write_stdout_line;
use sdk_examples_s3::ObjectListing;
use sdk_examples_s3::list_objects;
use sdk_examples_s3::s3_client;

// ============================================================================
// SECTION: Arguments
// ============================================================================

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "list-objects", about = "List the objects in a bucket")]
struct Args {
    /// Bucket to list.
    #[arg(default_value = "")]
    bucket: String,
    /// Region override.
    #[arg(long)]
    region: Option<String>,
    /// Config file path (defaults to `SDK_EXAMPLES_CONFIG` or `sdk-examples.toml`).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// Exit code reported when listing fails.
const FAILURE_EXIT_CODE: u8 = 1;

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(objects) => report(&args.bucket, &objects),
        Err(err) => {
            let _ = write_stderr_line(&format!("list-objects failed: {err}"));
            ExitCode::from(FAILURE_EXIT_CODE)
        }
    }
}

/// Loads config, runs the listing inside the runtime guard, and returns the
/// objects.
fn run(args: &Args) -> Result<Vec<ObjectListing>, ExampleError> {
    let mut config = ExamplesConfig::load(args.config.as_deref())
        .map_err(|err| ExampleError::InvalidInput(err.to_string()))?;
    if let Some(region) = &args.region {
        config.sdk.region = Some(region.clone());
        config.validate().map_err(|err| ExampleError::InvalidInput(err.to_string()))?;
    }
    let runtime = SdkRuntime::from_config(&config)?;
    let client = s3_client(runtime.sdk_config(), config.sdk.force_path_style);
    runtime.block_on("list_objects", list_objects(&client, &args.bucket))
}

/// Writes the listing to stdout.
fn report(bucket: &str, objects: &[ObjectListing]) -> ExitCode {
    let mut lines = vec![format!("Objects in bucket {bucket}: {}", objects.len())];
    lines.extend(objects.iter().map(|object| match object.size {
        Some(size) => format!("  {} ({size} bytes)", object.key),
        None => format!("  {}", object.key),
    }));
    for line in lines {
        if write_stdout_line(&line).is_err() {
            return ExitCode::from(FAILURE_EXIT_CODE);
        }
    }
    ExitCode::SUCCESS
}
