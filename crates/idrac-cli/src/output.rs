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

use std::path::Path;
use std::pin::Pin;

use libidrac::{JobState, TaskState};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::io::AsyncWrite;

use crate::async_writeln;
use crate::cfg::cli_options::OutputFormat;
use crate::errors::{CliError, CliResult};

// render writes value to the output in the requested format.
pub async fn render<T: Serialize>(
    output_file: &mut Pin<Box<dyn AsyncWrite>>,
    format: &OutputFormat,
    value: &T,
) -> CliResult<()> {
    match format {
        OutputFormat::Json => {
            async_writeln!(output_file, "{}", serde_json::to_string_pretty(value)?)?;
        }
        OutputFormat::Yaml => {
            async_writeln!(output_file, "{}", serde_yaml::to_string(value)?)?;
        }
    }
    Ok(())
}

// save_if_needed writes data as pretty JSON when a path was given.
// Nothing ever reads the file back.
pub async fn save_if_needed<T: Serialize>(path: Option<&Path>, data: &T) -> CliResult<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let mut contents = serde_json::to_vec_pretty(data)?;
    contents.push(b'\n');
    tokio::fs::write(path, contents)
        .await
        .map_err(|error| CliError::Save {
            path: path.display().to_string(),
            error,
        })?;
    tracing::debug!("Saved output to {}", path.display());
    Ok(())
}

// failed_state finds a poll report in a command's data (either the
// data itself or its Job/Task member) and returns a description of
// the state when the operation ended badly.
pub fn failed_state(data: &Value) -> Option<String> {
    [Some(data), data.get("Job"), data.get("Task")]
        .into_iter()
        .flatten()
        .find_map(report_failure)
}

fn report_failure(report: &Value) -> Option<String> {
    let job_state = report
        .get("job_state")
        .and_then(|s| JobState::deserialize(s).ok());
    if let Some(
        state @ (JobState::Failed | JobState::CompletedWithErrors | JobState::RebootFailed),
    ) = job_state
    {
        return Some(format!("{state:?}"));
    }

    let state = report
        .get("state")
        .and_then(|s| TaskState::deserialize(s).ok());
    match state {
        Some(state @ (TaskState::Exception | TaskState::Killed)) => Some(format!("{state:?}")),
        _ => None,
    }
}
