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

// BIOS settings changes. iDRAC stages changes on Bios/Settings and
// applies them through a job, usually on the next reset.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Map, Value, json};
use tracing::{debug, info, warn};

use super::{CommandBase, WaitArgs, accepted_job, decode_args, factory};
use crate::actions::discover_actions;
use crate::error::{RedfishError, RedfishResult};
use crate::model::ApplyTime;
use crate::registry::{Command, CommandKind, CommandRegistry, CommandResult, InvocationContext};

const CLEAR_PENDING_ACTION: &str = "ClearPending";

pub fn register(registry: &mut CommandRegistry) {
    registry.register(
        CommandKind::Update,
        "bios-change",
        "Stage BIOS attribute changes",
        factory(|base| BiosChange { base }),
    );
    registry.register(
        CommandKind::Action,
        "clear-pending",
        "Discard staged BIOS changes",
        factory(|base| ClearPending { base }),
    );
}

#[derive(Debug, Deserialize)]
pub struct BiosChangeArgs {
    pub attributes: Map<String, Value>,
    #[serde(default)]
    pub apply_time: ApplyTime,
    // reboot resets the host after staging so an OnReset change gets
    // applied.
    #[serde(default)]
    pub reboot: bool,
    #[serde(flatten)]
    pub wait: WaitArgs,
}

pub struct BiosChange {
    base: CommandBase,
}

#[async_trait]
impl Command for BiosChange {
    async fn execute(
        &self,
        ctx: &InvocationContext<'_>,
        args: Value,
    ) -> RedfishResult<CommandResult> {
        let args: BiosChangeArgs = decode_args(args)?;
        if args.attributes.is_empty() {
            return Err(RedfishError::InvalidArguments(
                "no BIOS attributes to change".to_string(),
            ));
        }

        let settings = format!("{}/Bios/Settings", self.base.system_uri().await?);
        let body = json!({
            "Attributes": &args.attributes,
            "@Redfish.SettingsApplyTime": args.apply_time.settings_object(),
        });
        info!(
            "Staging {} BIOS attribute(s), apply time {:?}",
            args.attributes.len(),
            args.apply_time
        );
        let (outcome, response) = self
            .base
            .client()
            .patch(&settings, &body, 200, Some(202))
            .await?;

        let mut data = json!({ "Outcome": outcome });
        let job = accepted_job(outcome, &response);
        let job_id = job
            .as_ref()
            .and_then(|j| j.get("job_id"))
            .and_then(Value::as_str);

        // The settings are staged from here on. A later failure keeps the
        // job in the result so it can still be found or cleared.
        let followup = self
            .reboot_and_wait(ctx, &args, &settings, job_id, &mut data)
            .await;

        let mut result = CommandResult::new(data);
        if let Some(job) = job {
            result = result.with_extra(job);
        }
        if let Err(e) = followup {
            warn!("BIOS changes staged on {settings} but follow-up failed: {e}");
            result = result.with_error(e);
        }
        Ok(result)
    }
}

impl BiosChange {
    // reboot_and_wait runs the optional reboot and job wait after the
    // PATCH, adding their output to data.
    async fn reboot_and_wait(
        &self,
        ctx: &InvocationContext<'_>,
        args: &BiosChangeArgs,
        settings: &str,
        job_id: Option<&str>,
        data: &mut Value,
    ) -> RedfishResult<()> {
        if args.reboot {
            let reboot = ctx
                .invoke(CommandKind::Action, "reboot", Value::Null)
                .await?;
            data["Reboot"] = reboot.data;
        }

        if !args.wait.wait {
            return Ok(());
        }
        match job_id {
            Some(job_id) => {
                let options = args.wait.poll_options(ctx.cancel.clone());
                let report = self
                    .base
                    .poller()
                    .with_job_collection(self.base.job_collection().await?)
                    .await_job(job_id, &options)
                    .await?;
                data["Job"] = json!(report);
            }
            None => debug!("No job created for {settings}, nothing to wait for"),
        }
        Ok(())
    }
}

pub struct ClearPending {
    base: CommandBase,
}

#[async_trait]
impl Command for ClearPending {
    async fn execute(
        &self,
        ctx: &InvocationContext<'_>,
        _args: Value,
    ) -> RedfishResult<CommandResult> {
        let settings_uri = format!("{}/Bios/Settings", self.base.system_uri().await?);
        let settings = self.base.client().get_json(&settings_uri).await?;
        let discovered = discover_actions(&settings);
        let Some(clear) = discovered.get(CLEAR_PENDING_ACTION) else {
            return Err(RedfishError::FailedDiscoverAction {
                action: CLEAR_PENDING_ACTION.to_string(),
                resource: settings_uri,
            });
        };

        // Report what is being discarded when the BIOS query is around.
        let pending = if ctx.contains(CommandKind::Query, "bios") {
            ctx.invoke(CommandKind::Query, "bios", json!({ "pending": true }))
                .await
                .map(|r| r.data)
                .unwrap_or_else(|e| {
                    debug!("Could not read pending BIOS attributes: {e}");
                    Value::Null
                })
        } else {
            Value::Null
        };

        let (outcome, _) = self
            .base
            .client()
            .invoke_action(clear, &json!({}), 200, Some(204))
            .await?;

        Ok(CommandResult::new(json!({ "Outcome": outcome }))
            .with_discovered(discovered)
            .with_extra(json!({ "Cleared": pending })))
    }
}
