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

// Built-in commands. Each submodule registers its commands with
// register(); register_all wires every one of them.

pub mod bios;
pub mod job;
pub mod query;
pub mod system;
pub mod task;

use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tokio::sync::OnceCell;
use tokio_util::sync::CancellationToken;

use crate::client::{Endpoint, RawResponse, RedfishClient};
use crate::error::{RedfishError, RedfishResult};
use crate::model::{OperationOutcome, ServiceRoot, TaskState};
use crate::poller::{PollOptions, TaskPoller, job_id_from_location};
use crate::registry::{Command, CommandFactory, CommandRegistry};

pub const SERVICE_ROOT: &str = "/redfish/v1";

pub fn register_all(registry: &mut CommandRegistry) {
    query::register(registry);
    bios::register(registry);
    system::register(registry);
    job::register(registry);
    task::register(registry);
}

// factory adapts a constructor taking a CommandBase into a
// CommandFactory.
pub(crate) fn factory<C, F>(build: F) -> CommandFactory
where
    C: Command + 'static,
    F: Fn(CommandBase) -> C + Send + Sync + 'static,
{
    Box::new(move |endpoint: &Endpoint| {
        let base = CommandBase::new(endpoint.clone())?;
        Ok(Arc::new(build(base)) as Arc<dyn Command>)
    })
}

// decode_args turns the JSON handed to invoke into a command's typed
// arguments. Null means "no arguments".
pub(crate) fn decode_args<T: DeserializeOwned>(args: Value) -> RedfishResult<T> {
    let args = if args.is_null() { json!({}) } else { args };
    serde_json::from_value(args).map_err(|e| RedfishError::InvalidArguments(e.to_string()))
}

/// Shared poll arguments for commands that can wait on the job or task
/// they start.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WaitArgs {
    pub wait: bool,
    pub poll_interval_secs: Option<u64>,
    pub timeout_secs: Option<u64>,
    pub target_state: Option<TaskState>,
}

impl WaitArgs {
    pub fn poll_options(&self, cancel: CancellationToken) -> PollOptions {
        let mut options = PollOptions::default()
            .with_timeout(self.timeout_secs.map(Duration::from_secs))
            .with_target_state(self.target_state)
            .with_cancel(cancel);
        // A zero interval would poll back to back whenever the BMC sends
        // no Retry-After.
        if let Some(secs) = self.poll_interval_secs {
            options = options.with_interval(Duration::from_secs(secs.max(1)));
        }
        options
    }
}

// CommandBase holds what every command needs: a client bound to one
// BMC and the read-only facts about that BMC, each fetched at most
// once.
#[derive(Debug)]
pub struct CommandBase {
    client: RedfishClient,
    service_root: OnceCell<ServiceRoot>,
    system_uri: OnceCell<String>,
    manager_uri: OnceCell<String>,
    firmware_version: OnceCell<String>,
}

impl CommandBase {
    pub fn new(endpoint: Endpoint) -> RedfishResult<Self> {
        Ok(CommandBase {
            client: RedfishClient::new(endpoint)?,
            service_root: OnceCell::new(),
            system_uri: OnceCell::new(),
            manager_uri: OnceCell::new(),
            firmware_version: OnceCell::new(),
        })
    }

    pub fn client(&self) -> &RedfishClient {
        &self.client
    }

    pub fn poller(&self) -> TaskPoller<'_> {
        TaskPoller::new(&self.client)
    }

    pub async fn service_root(&self) -> RedfishResult<&ServiceRoot> {
        self.service_root
            .get_or_try_init(|| async {
                let root = self.client.get_json(SERVICE_ROOT).await?;
                ServiceRoot::from_json(&root).ok_or_else(|| RedfishError::UnexpectedResponse {
                    url: self.client.endpoint().url(SERVICE_ROOT),
                    reason: "service root has no Systems or Managers link".to_string(),
                })
            })
            .await
    }

    // system_uri is the first member of the Systems collection,
    // System.Embedded.1 on iDRAC.
    pub async fn system_uri(&self) -> RedfishResult<&str> {
        self.system_uri
            .get_or_try_init(|| async {
                let systems = self.service_root().await?.systems.clone();
                self.first_member(&systems).await
            })
            .await
            .map(String::as_str)
    }

    // manager_uri is the first member of the Managers collection,
    // iDRAC.Embedded.1 on iDRAC.
    pub async fn manager_uri(&self) -> RedfishResult<&str> {
        self.manager_uri
            .get_or_try_init(|| async {
                let managers = self.service_root().await?.managers.clone();
                self.first_member(&managers).await
            })
            .await
            .map(String::as_str)
    }

    pub async fn firmware_version(&self) -> RedfishResult<&str> {
        self.firmware_version
            .get_or_try_init(|| async {
                let manager_uri = self.manager_uri().await?;
                let manager = self.client.get_json(manager_uri).await?;
                manager
                    .get("FirmwareVersion")
                    .and_then(Value::as_str)
                    .map(str::to_string)
                    .ok_or_else(|| RedfishError::UnexpectedResponse {
                        url: self.client.endpoint().url(manager_uri),
                        reason: "manager has no FirmwareVersion".to_string(),
                    })
            })
            .await
            .map(String::as_str)
    }

    pub async fn job_collection(&self) -> RedfishResult<String> {
        Ok(format!("{}/Jobs", self.manager_uri().await?))
    }

    async fn first_member(&self, collection: &str) -> RedfishResult<String> {
        self.client
            .members(collection)
            .await?
            .first()
            .and_then(|m| m.get("@odata.id"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| RedfishError::UnexpectedResponse {
                url: self.client.endpoint().url(collection),
                reason: "collection has no members".to_string(),
            })
    }
}

// accepted_job describes what an action started, for CommandResult
// extra. None when the BMC did not hand out a Location.
pub(crate) fn accepted_job(outcome: OperationOutcome, response: &RawResponse) -> Option<Value> {
    if outcome != OperationOutcome::AcceptedTaskGenerated {
        return None;
    }
    let location = response.location()?;
    Some(json!({
        "job_id": job_id_from_location(location),
        "location": location,
    }))
}
