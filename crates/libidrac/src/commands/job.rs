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

// Dell job queue commands, /redfish/v1/Managers/<id>/Jobs.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};

use super::{CommandBase, WaitArgs, decode_args, factory};
use crate::client::member_link;
use crate::error::RedfishResult;
use crate::poller::job_id_from_location;
use crate::registry::{Command, CommandKind, CommandRegistry, CommandResult, InvocationContext};

pub fn register(registry: &mut CommandRegistry) {
    registry.register(
        CommandKind::Job,
        "job-list",
        "List the iDRAC job queue",
        factory(|base| JobList { base }),
    );
    registry.register(
        CommandKind::Job,
        "job-get",
        "Show one job",
        factory(|base| JobGet { base }),
    );
    registry.register(
        CommandKind::Job,
        "job-watch",
        "Wait for a job to finish",
        factory(|base| JobWatch { base }),
    );
    registry.register(
        CommandKind::Job,
        "job-delete",
        "Delete a job from the queue",
        factory(|base| JobDelete { base }),
    );
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct JobListArgs {
    // expand fetches every member instead of listing links.
    pub expand: bool,
}

pub struct JobList {
    base: CommandBase,
}

#[async_trait]
impl Command for JobList {
    async fn execute(
        &self,
        _ctx: &InvocationContext<'_>,
        args: Value,
    ) -> RedfishResult<CommandResult> {
        let args: JobListArgs = decode_args(args)?;
        let collection = self.base.job_collection().await?;
        let members = self.base.client().members(&collection).await?;

        let mut jobs = Vec::with_capacity(members.len());
        for member in members {
            match member_link(&member).map(str::to_string) {
                Some(link) if args.expand => jobs.push(self.base.client().get_json(&link).await?),
                Some(link) => jobs.push(Value::String(job_id_from_location(&link))),
                None => jobs.push(member),
            }
        }
        Ok(CommandResult::new(Value::Array(jobs)))
    }
}

#[derive(Debug, Deserialize)]
pub struct JobArgs {
    pub job_id: String,
    // missing_ok turns a purged job into a null result instead of an
    // error.
    #[serde(default)]
    pub missing_ok: bool,
}

pub struct JobGet {
    base: CommandBase,
}

#[async_trait]
impl Command for JobGet {
    async fn execute(
        &self,
        _ctx: &InvocationContext<'_>,
        args: Value,
    ) -> RedfishResult<CommandResult> {
        let args: JobArgs = decode_args(args)?;
        let path = format!(
            "{}/{}",
            self.base.job_collection().await?,
            job_id_from_location(&args.job_id)
        );
        let job = if args.missing_ok {
            self.base
                .client()
                .get_optional(&path)
                .await?
                .unwrap_or(Value::Null)
        } else {
            self.base.client().get_json(&path).await?
        };
        Ok(CommandResult::new(job))
    }
}

#[derive(Debug, Deserialize)]
pub struct JobWatchArgs {
    pub job_id: String,
    #[serde(flatten)]
    pub wait: WaitArgs,
}

pub struct JobWatch {
    base: CommandBase,
}

#[async_trait]
impl Command for JobWatch {
    async fn execute(
        &self,
        ctx: &InvocationContext<'_>,
        args: Value,
    ) -> RedfishResult<CommandResult> {
        let args: JobWatchArgs = decode_args(args)?;
        let options = args.wait.poll_options(ctx.cancel.clone());
        let report = self
            .base
            .poller()
            .with_job_collection(self.base.job_collection().await?)
            .await_job(&args.job_id, &options)
            .await?;
        Ok(CommandResult::new(json!(report)).with_extra(json!({ "job_id": args.job_id })))
    }
}

pub struct JobDelete {
    base: CommandBase,
}

#[async_trait]
impl Command for JobDelete {
    async fn execute(
        &self,
        _ctx: &InvocationContext<'_>,
        args: Value,
    ) -> RedfishResult<CommandResult> {
        let args: JobArgs = decode_args(args)?;
        let job_id = job_id_from_location(&args.job_id);
        let path = format!("{}/{job_id}", self.base.job_collection().await?);
        let (outcome, _) = self.base.client().delete(&path, 200, Some(204)).await?;
        Ok(CommandResult::new(json!({ "JobId": job_id, "Outcome": outcome })))
    }
}
