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

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result of classifying a single HTTP response.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum OperationOutcome {
    Ok,
    Created,
    Success,
    AcceptedTaskGenerated,
    Error,
}

impl OperationOutcome {
    // from_status maps the 2xx codes the BMC uses to an outcome.
    pub fn from_status(status: u16) -> Option<OperationOutcome> {
        match status {
            200 => Some(OperationOutcome::Ok),
            201 => Some(OperationOutcome::Created),
            202 => Some(OperationOutcome::AcceptedTaskGenerated),
            204 => Some(OperationOutcome::Success),
            _ => None,
        }
    }
}

impl fmt::Display for OperationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Redfish `TaskState`. Ordered only by terminality, not by progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskState {
    New,
    Starting,
    Running,
    Suspended,
    Interrupted,
    Pending,
    Stopping,
    Completed,
    Killed,
    Exception,
    Service,
    #[serde(alias = "Cancelling")]
    Canceling,
    Cancelled,
    #[serde(other)]
    #[default]
    Unknown,
}

impl TaskState {
    // is_terminal reports whether polling should stop at this state.
    // Unknown is terminal because it is what we report once the task
    // resource has disappeared.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            TaskState::Completed
                | TaskState::Killed
                | TaskState::Exception
                | TaskState::Cancelled
                | TaskState::Unknown
        )
    }
}

impl fmt::Display for TaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Redfish `TaskStatus`. Severity, orthogonal to [`TaskState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    #[serde(rename = "OK", alias = "Ok")]
    Ok,
    Warning,
    Critical,
}

impl TaskStatus {
    pub fn is_degraded(&self) -> bool {
        matches!(self, TaskStatus::Warning | TaskStatus::Critical)
    }
}

/// Dell job model `JobState`, reported by `/Managers/<id>/Jobs/<JID>`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobState {
    Scheduled,
    Scheduling,
    Running,
    Completed,
    Downloaded,
    Downloading,
    Waiting,
    Failed,
    CompletedWithErrors,
    RebootFailed,
    RebootCompleted,
    RebootPending,
    PendingActivation,
    #[serde(other)]
    #[default]
    Unknown,
}

impl JobState {
    // is_in_progress reports whether a job still needs to be polled.
    pub fn is_in_progress(&self) -> bool {
        matches!(
            self,
            JobState::Scheduled | JobState::Scheduling | JobState::Running
        )
    }
}

impl From<JobState> for TaskState {
    fn from(state: JobState) -> TaskState {
        match state {
            JobState::Completed | JobState::Downloaded | JobState::RebootCompleted => {
                TaskState::Completed
            }
            JobState::Failed | JobState::RebootFailed | JobState::CompletedWithErrors => {
                TaskState::Exception
            }
            JobState::Scheduled
            | JobState::Waiting
            | JobState::RebootPending
            | JobState::PendingActivation => TaskState::Pending,
            JobState::Scheduling | JobState::Downloading => TaskState::Starting,
            JobState::Running => TaskState::Running,
            JobState::Unknown => TaskState::Unknown,
        }
    }
}

impl fmt::Display for JobState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// When a pending settings change takes effect
/// (`@Redfish.SettingsApplyTime`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplyTime {
    Immediate,
    #[default]
    OnReset,
    AtMaintenanceWindowStart,
    InMaintenanceWindowOnReset,
}

impl ApplyTime {
    // settings_object builds the `@Redfish.SettingsApplyTime` value
    // that goes next to the changed properties in a PATCH body.
    pub fn settings_object(&self) -> Value {
        serde_json::json!({ "ApplyTime": self })
    }
}

/// Parsed Redfish error body: `{"error": {"code", "message",
/// "@Message.ExtendedInfo": [...]}}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerError {
    pub code: Option<String>,
    pub message: String,
    pub extended_info: Vec<String>,
}

impl ServerError {
    // from_body extracts what it can from an error body. Non-JSON
    // bodies keep their raw text as the message.
    pub fn from_body(body: &str) -> ServerError {
        let Ok(value) = serde_json::from_str::<Value>(body) else {
            return ServerError {
                code: None,
                message: body.trim().to_string(),
                extended_info: Vec::new(),
            };
        };
        let error = value.get("error").unwrap_or(&value);
        let extended_info = error
            .get("@Message.ExtendedInfo")
            .and_then(Value::as_array)
            .map(|infos| {
                infos
                    .iter()
                    .filter_map(|info| info.get("Message").and_then(Value::as_str))
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        ServerError {
            code: error.get("code").and_then(Value::as_str).map(str::to_string),
            message: error
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            extended_info,
        }
    }
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        for info in &self.extended_info {
            write!(f, "; {info}")?;
        }
        Ok(())
    }
}

/// What the job/task poller observed by the time it stopped.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TaskReport {
    pub state: TaskState,
    pub status: Option<TaskStatus>,
    pub percent_complete: Option<u32>,
    pub job_state: Option<JobState>,
    pub messages: Vec<String>,
}

/// The service root links commands need, read once from `/redfish/v1`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ServiceRoot {
    pub systems: String,
    pub managers: String,
    pub update_service: Option<String>,
    pub task_service: Option<String>,
}

impl ServiceRoot {
    pub fn from_json(root: &Value) -> Option<ServiceRoot> {
        let link = |name: &str| {
            root.get(name)
                .and_then(|l| l.get("@odata.id"))
                .and_then(Value::as_str)
                .map(str::to_string)
        };
        Some(ServiceRoot {
            systems: link("Systems")?,
            managers: link("Managers")?,
            update_service: link("UpdateService"),
            task_service: link("Tasks").or_else(|| link("TaskService")),
        })
    }
}
