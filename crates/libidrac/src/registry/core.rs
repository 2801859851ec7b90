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

// src/registry/core.rs
// CommandRegistry implementation: two-level kind -> name lookup and
// dispatch into the single instance of each command.
//
// The registry is filled once at startup and only read afterwards, so
// it needs no locking. Each process (or test) builds its own.

use std::collections::HashMap;

use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use super::entry::CommandEntry;
use super::traits::InvocationContext;
use super::types::{CommandDescriptor, CommandFactory, CommandKind, CommandResult};
use crate::client::{Credentials, TransportSettings};
use crate::error::{RedfishError, RedfishResult};

pub struct CommandRegistry {
    // settings are applied to every endpoint a factory is given.
    settings: TransportSettings,
    entries: HashMap<CommandKind, HashMap<String, CommandEntry>>,
    // cancel is handed to every invocation; cancelling it stops any
    // poll loop in progress.
    cancel: CancellationToken,
}

impl CommandRegistry {
    // new creates an empty registry. Commands are added with register
    // before the first invoke.
    pub fn new(settings: TransportSettings) -> Self {
        Self {
            settings,
            entries: HashMap::new(),
            cancel: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn settings(&self) -> &TransportSettings {
        &self.settings
    }

    pub fn cancellation(&self) -> CancellationToken {
        self.cancel.clone()
    }

    // register adds a command under kind/name. Registering the same
    // kind/name twice replaces the earlier entry.
    pub fn register(
        &mut self,
        kind: CommandKind,
        name: impl Into<String>,
        help: impl Into<String>,
        factory: CommandFactory,
    ) {
        let name = name.into();
        let descriptor = CommandDescriptor {
            kind,
            name: name.clone(),
            help: help.into(),
        };
        let previous = self
            .entries
            .entry(kind)
            .or_default()
            .insert(name.clone(), CommandEntry::new(descriptor, factory));
        if previous.is_some() {
            warn!("Command {kind}/{name} registered twice, keeping the last one");
        } else {
            debug!("Registered command {kind}/{name}");
        }
    }

    pub fn contains(&self, kind: CommandKind, name: &str) -> bool {
        self.entry(kind, name).is_ok()
    }

    // descriptors lists every registered command, ordered by kind then
    // name.
    pub fn descriptors(&self) -> Vec<CommandDescriptor> {
        let mut descriptors: Vec<CommandDescriptor> = self
            .entries
            .values()
            .flat_map(|names| names.values().map(|e| e.descriptor.clone()))
            .collect();
        descriptors.sort_by(|a, b| (a.kind, &a.name).cmp(&(b.kind, &b.name)));
        descriptors
    }

    // is_constructed reports whether kind/name has been materialized.
    pub fn is_constructed(&self, kind: CommandKind, name: &str) -> bool {
        self.entry(kind, name)
            .map(CommandEntry::is_constructed)
            .unwrap_or(false)
    }

    // invoke dispatches to kind/name.
    //
    // Err is only returned when the command cannot be dispatched: it is
    // not registered, or its instance could not be built. Failures of
    // the command itself come back in CommandResult::error.
    //
    // credentials are only used the first time kind/name is invoked;
    // see CommandEntry::instance.
    pub async fn invoke(
        &self,
        kind: CommandKind,
        name: &str,
        credentials: &Credentials,
        args: Value,
    ) -> RedfishResult<CommandResult> {
        let entry = self.entry(kind, name)?;
        let command = entry.instance(credentials, &self.settings)?;
        let ctx = InvocationContext {
            registry: self,
            credentials,
            cancel: self.cancel.clone(),
        };

        debug!("Invoking {kind}/{name}");
        match command.execute(&ctx, args).await {
            Ok(result) => Ok(result),
            Err(e) => {
                debug!("{kind}/{name} failed: {e}");
                Ok(CommandResult::from_error(e))
            }
        }
    }

    // invoke_blocking runs invoke to completion on a private
    // current-thread runtime. It must not be called from inside a tokio
    // runtime.
    pub fn invoke_blocking(
        &self,
        kind: CommandKind,
        name: &str,
        credentials: &Credentials,
        args: Value,
    ) -> RedfishResult<CommandResult> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| RedfishError::Runtime(e.to_string()))?;
        runtime.block_on(self.invoke(kind, name, credentials, args))
    }

    fn entry(&self, kind: CommandKind, name: &str) -> RedfishResult<&CommandEntry> {
        self.entries
            .get(&kind)
            .and_then(|names| names.get(name))
            .ok_or_else(|| RedfishError::UnsupportedAction {
                kind,
                name: name.to_string(),
            })
    }
}

impl std::fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("settings", &self.settings)
            .field("commands", &self.descriptors().len())
            .finish()
    }
}
