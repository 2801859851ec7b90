/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: LicenseRef-NvidiaProprietary
 *
 * NVIDIA CORPORATION, its affiliates and licensors retain all intellectual
 * property and proprietary rights in and to this material, related
 * documentation and any modifications thereto. Any use, reproduction,
 * disclosure or distribution of this material and related documentation
 * without an express license agreement from NVIDIA CORPORATION or
 * its affiliates is strictly prohibited.
 */

use std::path::PathBuf;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use libidrac::{CommandKind, CommandRegistry, CommandResult, Credentials};
use serde_json::Value;
use tracing::{debug, info};

use crate::cfg::cli_options::{OutputFormat, poll_interval_secs};
use crate::errors::{CliError, CliResult};
use crate::output;

// RuntimeContext is context passed to all subcommand
// dispatch handlers. This is built at the beginning of
// runtime and then passed to the appropriate dispatcher.
pub struct RuntimeContext {
    pub registry: Arc<CommandRegistry>,
    pub credentials: Credentials,
    pub config: RuntimeConfig,
    pub output_file: Pin<Box<dyn tokio::io::AsyncWrite>>,
}

// RuntimeConfig contains runtime configuration parameters extracted
// from CLI options and the config file. This should contain the
// entirety of any options that need to be leveraged by any
// downstream command handler.
pub struct RuntimeConfig {
    pub format: OutputFormat,
    pub extended: bool,
    pub save: Option<PathBuf>,
    pub poll_interval: Duration,
    pub poll_timeout: Option<Duration>,
}

impl RuntimeConfig {
    // with_poll_defaults fills in the poll pacing a command was not
    // given explicitly. Commands that never wait ignore both keys.
    pub fn with_poll_defaults(&self, mut args: Value) -> Value {
        if args.is_null() {
            args = Value::Object(Default::default());
        }
        if let Some(map) = args.as_object_mut() {
            if map.get("poll_interval_secs").is_none_or(Value::is_null) {
                map.insert(
                    "poll_interval_secs".to_string(),
                    poll_interval_secs(self.poll_interval).into(),
                );
            }
            if let Some(timeout) = self.poll_timeout
                && map.get("timeout_secs").is_none_or(Value::is_null)
            {
                map.insert("timeout_secs".to_string(), timeout.as_secs().into());
            }
        }
        args
    }
}

impl RuntimeContext {
    // run invokes one registry command, saves and renders its result,
    // and turns a command failure or a failed job/task into an error.
    pub async fn run(&mut self, kind: CommandKind, name: &str, args: Value) -> CliResult<()> {
        let args = self.config.with_poll_defaults(args);
        debug!("Invoking {kind} command {name} with {args}");
        let mut result = self
            .registry
            .invoke(kind, name, &self.credentials, args)
            .await?;

        output::save_if_needed(self.config.save.as_deref(), &result).await?;
        if self.config.extended {
            output::render(&mut self.output_file, &self.config.format, &result).await?;
        } else if result.is_ok() || !result.data.is_null() {
            // A failed command still shows the data it gathered first.
            output::render(&mut self.output_file, &self.config.format, &result.data).await?;
        }

        if let Some(error) = result.error.take() {
            return Err(CliError::CommandFailed {
                kind,
                name: name.to_string(),
                error,
            });
        }
        log_created_job(&result);

        match output::failed_state(&result.data) {
            Some(state) => Err(CliError::OperationFailed {
                what: name.to_string(),
                state,
            }),
            None => Ok(()),
        }
    }
}

// log_created_job points the operator at a job the command started
// but did not wait for.
fn log_created_job(result: &CommandResult) {
    let waited = result.data.get("Job").is_some() || result.data.get("Task").is_some();
    if let Some(job_id) = result
        .extra
        .as_ref()
        .and_then(|extra| extra.get("job_id"))
        .and_then(Value::as_str)
        && !waited
    {
        info!("Created job {job_id}, follow it with `idrac-ctl job watch --job-id {job_id}`");
    }
}
