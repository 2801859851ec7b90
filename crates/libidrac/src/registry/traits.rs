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

// src/registry/traits.rs
// The Command trait every registered command implements, and the
// context it executes in.

use async_trait::async_trait;
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use super::core::CommandRegistry;
use super::types::{CommandKind, CommandResult};
use crate::client::Credentials;
use crate::error::RedfishResult;

// Command is one BMC operation. Instances are shared for the life of
// the registry, so implementations keep no per-call state; anything
// they cache must be compute-once and read-only.
#[async_trait]
pub trait Command: Send + Sync {
    // execute runs the command. An Err here becomes
    // CommandResult::error at the registry boundary.
    async fn execute(&self, ctx: &InvocationContext<'_>, args: Value)
    -> RedfishResult<CommandResult>;
}

// InvocationContext is handed to a command for one invoke. It lets the
// command check for and call sibling commands with the same
// credentials.
pub struct InvocationContext<'a> {
    pub registry: &'a CommandRegistry,
    pub credentials: &'a Credentials,
    pub cancel: CancellationToken,
}

impl InvocationContext<'_> {
    // contains reports whether a sibling command is registered.
    pub fn contains(&self, kind: CommandKind, name: &str) -> bool {
        self.registry.contains(kind, name)
    }

    // invoke calls a sibling command and lifts its command-level error,
    // if any, into an Err.
    pub async fn invoke(
        &self,
        kind: CommandKind,
        name: &str,
        args: Value,
    ) -> RedfishResult<CommandResult> {
        self.registry
            .invoke(kind, name, self.credentials, args)
            .await?
            .into_result()
    }
}
