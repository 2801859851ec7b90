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

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};

use super::{CommandBase, WaitArgs, decode_args, factory};
use crate::error::RedfishResult;
use crate::registry::{Command, CommandKind, CommandRegistry, CommandResult, InvocationContext};

pub fn register(registry: &mut CommandRegistry) {
    registry.register(
        CommandKind::Task,
        "task-watch",
        "Wait for a Redfish task to finish",
        factory(|base| TaskWatch { base }),
    );
}

#[derive(Debug, Deserialize)]
pub struct TaskWatchArgs {
    // task_id is a bare id or the task monitor URI from a Location
    // header.
    pub task_id: String,
    // target_http_status returns as soon as the monitor answers with
    // this status.
    #[serde(default)]
    pub target_http_status: Option<u16>,
    #[serde(flatten)]
    pub wait: WaitArgs,
}

pub struct TaskWatch {
    base: CommandBase,
}

#[async_trait]
impl Command for TaskWatch {
    async fn execute(
        &self,
        ctx: &InvocationContext<'_>,
        args: Value,
    ) -> RedfishResult<CommandResult> {
        let args: TaskWatchArgs = decode_args(args)?;
        let mut options = args.wait.poll_options(ctx.cancel.clone());
        options.target_http_status = args.target_http_status;
        let report = self.base.poller().await_task(&args.task_id, &options).await?;
        Ok(CommandResult::new(json!(report)).with_extra(json!({ "task_id": args.task_id })))
    }
}
