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

// Drives a Redfish task or Dell job to a terminal state.
//
// The loop is bounded by terminal conditions, not by a retry count:
// firmware and BIOS jobs routinely run for many minutes. Callers bound
// it with PollOptions::timeout and PollOptions::cancel instead.

use std::time::Duration;

use reqwest::Method;
use serde_json::Value;
use tokio::sync::mpsc;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::classify::ResponseClassifier;
use crate::client::{RawResponse, Transport};
use crate::error::{RedfishError, RedfishResult};
use crate::model::{JobState, TaskReport, TaskState, TaskStatus};

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);
pub const TASK_COLLECTION: &str = "/redfish/v1/TaskService/Tasks";
pub const DELL_JOB_COLLECTION: &str = "/redfish/v1/Managers/iDRAC.Embedded.1/Jobs";

#[derive(Clone, Debug)]
pub struct PollOptions {
    pub interval: Duration,
    // target_http_status makes the loop return as soon as the status
    // resource answers with this code.
    pub target_http_status: Option<u16>,
    // target_state unblocks the caller early, e.g. on Running for
    // fire-and-forget flows.
    pub target_state: Option<TaskState>,
    pub timeout: Option<Duration>,
    pub cancel: CancellationToken,
    // progress receives every increase of PercentComplete.
    pub progress: Option<mpsc::UnboundedSender<u32>>,
}

impl Default for PollOptions {
    fn default() -> Self {
        PollOptions {
            interval: DEFAULT_POLL_INTERVAL,
            target_http_status: None,
            target_state: None,
            timeout: None,
            cancel: CancellationToken::new(),
            progress: None,
        }
    }
}

impl PollOptions {
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_target_state(mut self, state: Option<TaskState>) -> Self {
        self.target_state = state;
        self
    }

    pub fn with_cancel(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }
}

// effective_interval never shrinks the caller's interval, a larger
// Retry-After from the BMC stretches it.
pub fn effective_interval(interval: Duration, retry_after: Option<Duration>) -> Duration {
    retry_after.map_or(interval, |r| r.max(interval))
}

// task_path accepts a bare id (JID_123) or a full task URI as found in
// a Location header.
pub fn task_path(task_id: &str) -> String {
    resource_path(TASK_COLLECTION, task_id)
}

// job_id_from_location extracts JID_123 from
// /redfish/v1/Managers/iDRAC.Embedded.1/Jobs/JID_123.
pub fn job_id_from_location(location: &str) -> String {
    location
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or(location)
        .to_string()
}

fn resource_path(collection: &str, id: &str) -> String {
    if id.starts_with('/') || id.starts_with("http://") || id.starts_with("https://") {
        id.to_string()
    } else {
        format!("{collection}/{id}")
    }
}

enum Step {
    Done,
    Continue,
}

// PollTracker accumulates what the loop has seen so far. It is what
// gets returned when the loop stops for any reason.
#[derive(Default)]
struct PollTracker {
    report: TaskReport,
    retry_after: Option<Duration>,
}

impl PollTracker {
    fn observe(&mut self, response: &RawResponse, options: &PollOptions) -> RedfishResult<Step> {
        let status = response.status;
        if let Some(retry_after) = response.retry_after() {
            self.retry_after = Some(retry_after);
        }

        if status >= 500 {
            warn!(
                "{} returned HTTP {status}, giving up with state {}",
                response.url, self.report.state
            );
            return Ok(Step::Done);
        }
        if status == 404 || status == 410 {
            debug!("{} is gone (HTTP {status})", response.url);
            return Ok(Step::Done);
        }
        if Some(status) == options.target_http_status {
            self.absorb_lenient(response);
            return Ok(Step::Done);
        }

        match status {
            202 => {
                self.absorb_strict(response)?;
                if self.report.status.is_some_and(|s| s.is_degraded()) {
                    warn!(
                        "{} reports TaskStatus {:?} in state {}, stopping",
                        response.url, self.report.status, self.report.state
                    );
                    return Ok(Step::Done);
                }
                if Some(self.report.state) == options.target_state {
                    return Ok(Step::Done);
                }
                Ok(Step::Continue)
            }
            200 => {
                self.absorb_strict(response)?;
                Ok(Step::Done)
            }
            _ => {
                self.absorb_lenient(response);
                debug!(
                    "{} returned HTTP {status}, state {}, still waiting",
                    response.url, self.report.state
                );
                if Some(self.report.state) == options.target_state {
                    return Ok(Step::Done);
                }
                Ok(Step::Continue)
            }
        }
    }

    // absorb_strict requires TaskState and TaskStatus. A malformed body
    // must not be read as progress.
    fn absorb_strict(&mut self, response: &RawResponse) -> RedfishResult<()> {
        let body = response.json()?;
        let state = body.get("TaskState").cloned().ok_or_else(|| missing(response, "TaskState"))?;
        let status = body.get("TaskStatus").cloned().ok_or_else(|| missing(response, "TaskStatus"))?;
        self.report.state =
            serde_json::from_value(state).map_err(|_| invalid(response, "TaskState"))?;
        self.report.status =
            Some(serde_json::from_value(status).map_err(|_| invalid(response, "TaskStatus"))?);
        self.absorb_details(&body);
        Ok(())
    }

    fn absorb_lenient(&mut self, response: &RawResponse) {
        let Ok(body) = response.json() else {
            return;
        };
        if let Some(state) = body
            .get("TaskState")
            .and_then(|s| serde_json::from_value::<TaskState>(s.clone()).ok())
        {
            self.report.state = state;
        }
        if let Some(status) = body
            .get("TaskStatus")
            .and_then(|s| serde_json::from_value::<TaskStatus>(s.clone()).ok())
        {
            self.report.status = Some(status);
        }
        self.absorb_details(&body);
    }

    fn absorb_details(&mut self, body: &Value) {
        if let Some(percent) = body.get("PercentComplete").and_then(parse_percent)
            && self.report.percent_complete.is_none_or(|p| percent > p)
        {
            self.report.percent_complete = Some(percent);
            info!("Progress {percent}% ({})", self.report.state);
        }
        let messages = collect_messages(body);
        if !messages.is_empty() {
            self.report.messages = messages;
        }
    }
}

// parse_percent accepts numbers and numeric strings; iDRAC has sent
// both.
fn parse_percent(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn collect_messages(body: &Value) -> Vec<String> {
    let mut messages: Vec<String> = body
        .get("Messages")
        .and_then(Value::as_array)
        .map(|m| {
            m.iter()
                .filter_map(|m| m.get("Message").and_then(Value::as_str))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();
    // Dell jobs carry a single Message instead.
    if let Some(message) = body.get("Message").and_then(Value::as_str) {
        messages.push(message.to_string());
    }
    messages
}

fn missing(response: &RawResponse, field: &str) -> RedfishError {
    RedfishError::UnexpectedResponse {
        url: response.url.clone(),
        reason: format!("HTTP {} without {field}", response.status),
    }
}

fn invalid(response: &RawResponse, field: &str) -> RedfishError {
    RedfishError::UnexpectedResponse {
        url: response.url.clone(),
        reason: format!("{field} is not a string"),
    }
}

pub struct TaskPoller<'a> {
    transport: &'a dyn Transport,
    job_collection: String,
}

impl<'a> TaskPoller<'a> {
    pub fn new(transport: &'a dyn Transport) -> Self {
        TaskPoller {
            transport,
            job_collection: DELL_JOB_COLLECTION.to_string(),
        }
    }

    pub fn with_job_collection(mut self, job_collection: impl Into<String>) -> Self {
        self.job_collection = job_collection.into();
        self
    }

    // await_task polls the task monitor for task_id until it is done.
    // It blocks the calling task; callers that must not block should
    // not call it and poll later instead.
    pub async fn await_task(&self, task_id: &str, options: &PollOptions) -> RedfishResult<TaskReport> {
        self.poll(&task_path(task_id), options, PollTracker::default())
            .await
    }

    // await_job checks the Dell job once and only polls when the job is
    // still scheduled or running.
    pub async fn await_job(&self, job_id: &str, options: &PollOptions) -> RedfishResult<TaskReport> {
        let job_id = job_id_from_location(job_id);
        let path = resource_path(&self.job_collection, &job_id);
        let response = self.transport.execute(Method::GET, &path, None).await?;

        if response.status == 404 || response.status == 410 {
            debug!("Job {job_id} is gone (HTTP {})", response.status);
            return Ok(TaskReport::default());
        }
        ResponseClassifier::default().classify(&response, 200, None)?;

        let body = response.json()?;
        let job_state: JobState = body
            .get("JobState")
            .cloned()
            .ok_or_else(|| missing(&response, "JobState"))
            .and_then(|s| serde_json::from_value(s).map_err(|_| invalid(&response, "JobState")))?;

        let mut tracker = PollTracker::default();
        tracker.report.job_state = Some(job_state);
        tracker.absorb_details(&body);
        if !job_state.is_in_progress() {
            debug!("Job {job_id} already {job_state}, not polling");
            tracker.report.state = job_state.into();
            return Ok(tracker.report);
        }

        tracker.report.state = job_state.into();
        self.poll(&task_path(&job_id), options, tracker).await
    }

    async fn poll(
        &self,
        path: &str,
        options: &PollOptions,
        mut tracker: PollTracker,
    ) -> RedfishResult<TaskReport> {
        let deadline = options.timeout.map(|t| Instant::now() + t);
        let mut last_percent = tracker.report.percent_complete;

        loop {
            if options.cancel.is_cancelled() {
                return Err(RedfishError::PollCancelled {
                    path: path.to_string(),
                    last_state: tracker.report.state,
                });
            }

            let response = self.transport.execute(Method::GET, path, None).await?;
            let step = tracker.observe(&response, options)?;
            if tracker.report.percent_complete != last_percent {
                last_percent = tracker.report.percent_complete;
                if let (Some(tx), Some(percent)) = (options.progress.as_ref(), last_percent) {
                    let _ = tx.send(percent);
                }
            }
            if let Step::Done = step {
                return Ok(tracker.report);
            }

            let wake = Instant::now() + effective_interval(options.interval, tracker.retry_after);
            let (wake, timed_out) = match deadline {
                Some(deadline) if deadline <= wake => (deadline, true),
                _ => (wake, false),
            };
            tokio::select! {
                biased;
                _ = options.cancel.cancelled() => {
                    return Err(RedfishError::PollCancelled {
                        path: path.to_string(),
                        last_state: tracker.report.state,
                    });
                }
                _ = tokio::time::sleep_until(wake) => {}
            }
            if timed_out {
                return Err(RedfishError::PollTimeout {
                    path: path.to_string(),
                    last_state: tracker.report.state,
                });
            }
        }
    }
}
