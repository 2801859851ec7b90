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

// src/registry/types.rs
// Common types shared by the registry, its entries and the commands
// it dispatches to.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde::ser::{SerializeStruct, Serializer};
use serde_json::Value;

use super::traits::Command;
use crate::actions::Action;
use crate::client::Endpoint;
use crate::error::{RedfishError, RedfishResult};

// CommandKind is the first level of the registry. It groups commands
// by what they do to the BMC.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandKind {
    Query,
    Update,
    Delete,
    Action,
    Job,
    Task,
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CommandKind::Query => "query",
            CommandKind::Update => "update",
            CommandKind::Delete => "delete",
            CommandKind::Action => "action",
            CommandKind::Job => "job",
            CommandKind::Task => "task",
        };
        write!(f, "{s}")
    }
}

// CommandDescriptor is what a registered command advertises about
// itself.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CommandDescriptor {
    pub kind: CommandKind,
    pub name: String,
    pub help: String,
}

// CommandFactory builds the single instance of a command. It is
// called at most once per registry entry.
pub type CommandFactory = Box<dyn Fn(&Endpoint) -> RedfishResult<Arc<dyn Command>> + Send + Sync>;

// CommandResult is the one envelope every command returns. All four
// fields are always present, unused ones are None/Null.
#[derive(Debug, Default)]
pub struct CommandResult {
    // data is the primary JSON the command produced.
    pub data: Value,
    // discovered holds the actions found on the resource the command
    // looked at, when it did discovery.
    pub discovered: Option<HashMap<String, Action>>,
    // extra carries secondary output, e.g. the job id of an operation
    // that returned without waiting.
    pub extra: Option<Value>,
    // error is the command-level failure, with whatever partial data
    // was gathered before it.
    pub error: Option<RedfishError>,
}

impl CommandResult {
    pub fn new(data: Value) -> Self {
        CommandResult {
            data,
            ..Default::default()
        }
    }

    pub fn from_error(error: RedfishError) -> Self {
        CommandResult {
            error: Some(error),
            ..Default::default()
        }
    }

    pub fn with_discovered(mut self, discovered: HashMap<String, Action>) -> Self {
        self.discovered = Some(discovered);
        self
    }

    pub fn with_extra(mut self, extra: Value) -> Self {
        self.extra = Some(extra);
        self
    }

    // with_error marks the result failed while keeping whatever data
    // and extra were gathered before the failure.
    pub fn with_error(mut self, error: RedfishError) -> Self {
        self.error = Some(error);
        self
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    // into_result lifts a command-level failure back into an Err. Used
    // by commands that call sibling commands and cannot continue
    // without their output.
    pub fn into_result(mut self) -> RedfishResult<CommandResult> {
        match self.error.take() {
            Some(error) => Err(error),
            None => Ok(self),
        }
    }
}

impl Serialize for CommandResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("CommandResult", 4)?;
        state.serialize_field("data", &self.data)?;
        state.serialize_field("discovered", &self.discovered)?;
        state.serialize_field("extra", &self.extra)?;
        state.serialize_field("error", &self.error.as_ref().map(|e| e.to_string()))?;
        state.end()
    }
}
