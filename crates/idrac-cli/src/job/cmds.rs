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

use super::args::{DeleteJob, ListJobs, ShowJob, WatchJob};
use crate::cfg::runtime::RuntimeContext;
use crate::errors::CliResult;

pub async fn list(args: ListJobs, ctx: &mut RuntimeContext) -> CliResult<()> {
    ctx.run(CommandKind::Job, "job-list", serde_json::to_value(&args)?)
        .await
}

pub async fn show(args: ShowJob, ctx: &mut RuntimeContext) -> CliResult<()> {
    ctx.run(CommandKind::Job, "job-get", serde_json::to_value(&args)?)
        .await
}

pub async fn watch(args: WatchJob, ctx: &mut RuntimeContext) -> CliResult<()> {
    ctx.run(CommandKind::Job, "job-watch", watch_args(&args))
        .await
}

pub async fn delete(args: DeleteJob, ctx: &mut RuntimeContext) -> CliResult<()> {
    ctx.run(CommandKind::Job, "job-delete", serde_json::to_value(&args)?)
        .await
}

pub(super) fn watch_args(args: &WatchJob) -> Value {
    let mut json = json!({ "job_id": args.job_id });
    args.poll.apply(&mut json);
    json
}
