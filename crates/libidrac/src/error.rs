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

use crate::model::{ServerError, TaskState};
use crate::registry::CommandKind;

#[derive(thiserror::Error, Debug)]
pub enum RedfishError {
    #[error("Network error talking to BMC at {url}. {source}")]
    Network { url: String, source: reqwest::Error },

    #[error("Could not build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Unauthorized at {url}: check username/password or token")]
    Unauthorized { url: String },

    #[error("Forbidden at {url}: {message}")]
    Forbidden { url: String, message: String },

    #[error("Bad request at {url}: {error}")]
    BadRequest { url: String, error: ServerError },

    #[error("BMC fault HTTP {status} at {url}: {error}")]
    ServerFault {
        url: String,
        status: u16,
        error: ServerError,
    },

    #[error("Unexpected response from {url}: {reason}")]
    UnexpectedResponse { url: String, reason: String },

    #[error("Could not deserialize response from {url}. Body: {body}. {source}")]
    JsonDeserialize {
        url: String,
        body: String,
        source: serde_json::Error,
    },

    #[error("Unsupported command {kind}/{name}")]
    UnsupportedAction { kind: CommandKind, name: String },

    #[error("Action {action} is not advertised by {resource}")]
    FailedDiscoverAction { action: String, resource: String },

    #[error("Value '{value}' is not allowed for {action}.{arg}; allowed: {allowed:?}")]
    InvalidActionArgument {
        action: String,
        arg: String,
        value: String,
        allowed: Vec<String>,
    },

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Polling {path} cancelled, last observed state {last_state}")]
    PollCancelled { path: String, last_state: TaskState },

    #[error("Polling {path} timed out, last observed state {last_state}")]
    PollTimeout { path: String, last_state: TaskState },

    #[error("Could not start runtime: {0}")]
    Runtime(String),
}

impl RedfishError {
    // is_discovery_miss reports whether the error means the requested
    // command or vendor action does not exist here. Retrying will not
    // make it appear.
    pub fn is_discovery_miss(&self) -> bool {
        matches!(
            self,
            RedfishError::UnsupportedAction { .. } | RedfishError::FailedDiscoverAction { .. }
        )
    }

    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            RedfishError::Unauthorized { .. } | RedfishError::Forbidden { .. }
        )
    }
}

pub type RedfishResult<T> = Result<T, RedfishError>;
