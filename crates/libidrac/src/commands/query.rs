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
use serde_json::{Map, Value, json};

use super::{CommandBase, decode_args, factory};
use crate::actions::discover_actions;
use crate::error::{RedfishError, RedfishResult};
use crate::registry::{Command, CommandKind, CommandRegistry, CommandResult, InvocationContext};

pub fn register(registry: &mut CommandRegistry) {
    registry.register(
        CommandKind::Query,
        "firmware-version",
        "Show the iDRAC firmware version",
        factory(|base| FirmwareVersion { base }),
    );
    registry.register(
        CommandKind::Query,
        "service-root",
        "Show the service root links",
        factory(|base| ServiceRootQuery { base }),
    );
    registry.register(
        CommandKind::Query,
        "bios",
        "Show current or pending BIOS attributes",
        factory(|base| BiosQuery { base }),
    );
    registry.register(
        CommandKind::Query,
        "manager-actions",
        "List the actions the manager advertises",
        factory(|base| ManagerActions { base }),
    );
}

pub struct FirmwareVersion {
    base: CommandBase,
}

#[async_trait]
impl Command for FirmwareVersion {
    async fn execute(
        &self,
        _ctx: &InvocationContext<'_>,
        _args: Value,
    ) -> RedfishResult<CommandResult> {
        let version = self.base.firmware_version().await?;
        Ok(CommandResult::new(json!({ "FirmwareVersion": version })))
    }
}

pub struct ServiceRootQuery {
    base: CommandBase,
}

#[async_trait]
impl Command for ServiceRootQuery {
    async fn execute(
        &self,
        _ctx: &InvocationContext<'_>,
        _args: Value,
    ) -> RedfishResult<CommandResult> {
        let root = self.base.service_root().await?;
        let data = serde_json::to_value(root).map_err(|e| RedfishError::UnexpectedResponse {
            url: self.base.client().endpoint().url(super::SERVICE_ROOT),
            reason: e.to_string(),
        })?;
        Ok(CommandResult::new(data))
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BiosQueryArgs {
    // attribute limits the output to a single attribute.
    pub attribute: Option<String>,
    // pending reads Bios/Settings, the staged but not yet applied
    // values.
    pub pending: bool,
}

pub struct BiosQuery {
    base: CommandBase,
}

#[async_trait]
impl Command for BiosQuery {
    async fn execute(
        &self,
        _ctx: &InvocationContext<'_>,
        args: Value,
    ) -> RedfishResult<CommandResult> {
        let args: BiosQueryArgs = decode_args(args)?;
        let system = self.base.system_uri().await?;
        let path = if args.pending {
            format!("{system}/Bios/Settings")
        } else {
            format!("{system}/Bios")
        };

        let bios = self.base.client().get_json(&path).await?;
        let discovered = discover_actions(&bios);
        let attributes = match bios.get("Attributes") {
            Some(Value::Object(attributes)) => attributes.clone(),
            _ => Map::new(),
        };

        let data = match args.attribute {
            Some(name) => {
                let Some(value) = attributes.get(&name) else {
                    return Err(RedfishError::InvalidArguments(format!(
                        "BIOS attribute {name} not found at {path}"
                    )));
                };
                let mut single = Map::new();
                single.insert(name, value.clone());
                Value::Object(single)
            }
            None => Value::Object(attributes),
        };
        Ok(CommandResult::new(data).with_discovered(discovered))
    }
}

pub struct ManagerActions {
    base: CommandBase,
}

#[async_trait]
impl Command for ManagerActions {
    async fn execute(
        &self,
        _ctx: &InvocationContext<'_>,
        _args: Value,
    ) -> RedfishResult<CommandResult> {
        let manager_uri = self.base.manager_uri().await?;
        let manager = self.base.client().get_json(manager_uri).await?;
        let discovered = discover_actions(&manager);
        let data = discovered
            .values()
            .map(|a| (a.name.clone(), Value::String(a.target.clone())))
            .collect::<Map<String, Value>>();
        Ok(CommandResult::new(Value::Object(data)).with_discovered(discovered))
    }
}
