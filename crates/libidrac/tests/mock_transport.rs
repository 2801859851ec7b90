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

use std::collections::VecDeque;
use std::sync::Mutex;

use libidrac::{RawResponse, RedfishResult, Transport};
use reqwest::Method;
use serde_json::Value;

// ScriptedTransport answers requests from a fixed script, in order.
// Once the script runs out the last response repeats forever.
#[derive(Default)]
pub struct ScriptedTransport {
    script: Mutex<VecDeque<RawResponse>>,
    last: Mutex<Option<RawResponse>>,
    paths: Mutex<Vec<String>>,
}

impl ScriptedTransport {
    pub fn new(script: Vec<RawResponse>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.paths.lock().unwrap().len()
    }

    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Transport for ScriptedTransport {
    async fn execute(
        &self,
        _method: Method,
        path: &str,
        _body: Option<&Value>,
    ) -> RedfishResult<RawResponse> {
        self.paths.lock().unwrap().push(path.to_string());
        let next = self.script.lock().unwrap().pop_front();
        let mut last = self.last.lock().unwrap();
        if let Some(next) = next {
            *last = Some(next);
        }
        let mut response = last.clone().expect("script must not be empty");
        response.url = path.to_string();
        Ok(response)
    }
}

// task builds a task monitor response.
pub fn task(status: u16, state: &str, task_status: &str, percent: Option<u32>) -> RawResponse {
    let mut body = serde_json::json!({
        "TaskState": state,
        "TaskStatus": task_status,
    });
    if let Some(percent) = percent {
        body["PercentComplete"] = percent.into();
    }
    RawResponse::new("", status, body.to_string())
}

pub fn job(state: &str) -> RawResponse {
    let body = serde_json::json!({
        "Id": "JID_1",
        "JobState": state,
        "Message": format!("Job is {state}"),
    });
    RawResponse::new("", 200, body.to_string())
}

pub fn empty(status: u16) -> RawResponse {
    RawResponse::new("", status, "")
}
