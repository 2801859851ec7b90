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
use tracing::info;

use super::{CommandBase, WaitArgs, accepted_job, decode_args, factory};
use crate::actions::discover_actions;
use crate::error::{RedfishError, RedfishResult};
use crate::registry::{Command, CommandKind, CommandRegistry, CommandResult, InvocationContext};

const RESET_ACTION: &str = "Reset";
const RESET_TYPE_ARG: &str = "ResetType";

pub fn register(registry: &mut CommandRegistry) {
    registry.register(
        CommandKind::Action,
        "reboot",
        "Reset the host through ComputerSystem.Reset",
        factory(|base| Reboot { base }),
    );
}

fn default_reset_type() -> String {
    "GracefulRestart".to_string()
}

#[derive(Debug, Deserialize)]
pub struct RebootArgs {
    #[serde(default = "default_reset_type")]
    pub reset_type: String,
    #[serde(flatten)]
    pub wait: WaitArgs,
}

pub struct Reboot {
    base: CommandBase,
}

#[async_trait]
impl Command for Reboot {
    async fn execute(
        &self,
        ctx: &InvocationContext<'_>,
        args: Value,
    ) -> RedfishResult<CommandResult> {
        let args: RebootArgs = decode_args(args)?;
        let system_uri = self.base.system_uri().await?;
        let system = self.base.client().get_json(system_uri).await?;
        let discovered = discover_actions(&system);

        let Some(reset) = discovered.get(RESET_ACTION) else {
            return Err(RedfishError::FailedDiscoverAction {
                action: RESET_ACTION.to_string(),
                resource: system_uri.to_string(),
            });
        };
        reset.validate_arg(RESET_TYPE_ARG, &args.reset_type)?;

        info!("Resetting {system_uri} with {}", args.reset_type);
        let (outcome, response) = self
            .base
            .client()
            .invoke_action(reset, &json!({ RESET_TYPE_ARG: &args.reset_type }), 204, Some(200))
            .await?;

        let mut data = json!({
            "ResetType": args.reset_type,
            "Outcome": outcome,
        });
        let job = accepted_job(outcome, &response);
        if args.wait.wait
            && let Some(location) = response.location()
        {
            let options = args.wait.poll_options(ctx.cancel.clone());
            let report = self.base.poller().await_task(location, &options).await?;
            data["Task"] = json!(report);
        }

        let mut result = CommandResult::new(data).with_discovered(discovered);
        if let Some(job) = job {
            result = result.with_extra(job);
        }
        Ok(result)
    }
}
