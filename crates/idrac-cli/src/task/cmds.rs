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

use libidrac::CommandKind;
use serde_json::{Value, json};

use super::args::WatchTask;
use crate::cfg::runtime::RuntimeContext;
use crate::errors::CliResult;

pub async fn watch(args: WatchTask, ctx: &mut RuntimeContext) -> CliResult<()> {
    ctx.run(CommandKind::Task, "task-watch", watch_args(&args))
        .await
}

pub(super) fn watch_args(args: &WatchTask) -> Value {
    let mut json = json!({
        "task_id": args.task_id,
        "target_http_status": args.target_http_status,
    });
    args.poll.apply(&mut json);
    json
}
