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

// src/registry/entry.rs
// CommandEntry pairs a command's descriptor and factory with the one
// instance the factory produces.

use std::sync::Arc;

use once_cell::sync::OnceCell;
use tracing::{debug, warn};

use super::traits::Command;
use super::types::{CommandDescriptor, CommandFactory};
use crate::client::{Credentials, Endpoint, TransportSettings};
use crate::error::RedfishResult;

pub struct CommandEntry {
    pub descriptor: CommandDescriptor,
    factory: CommandFactory,
    // instance is built on first invoke and kept together with the
    // credentials it was built for.
    instance: OnceCell<(Credentials, Arc<dyn Command>)>,
}

impl std::fmt::Debug for CommandEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandEntry")
            .field("descriptor", &self.descriptor)
            .field("factory", &"<function>")
            .field("constructed", &self.instance.get().is_some())
            .finish()
    }
}

impl CommandEntry {
    pub fn new(descriptor: CommandDescriptor, factory: CommandFactory) -> Self {
        Self {
            descriptor,
            factory,
            instance: OnceCell::new(),
        }
    }

    pub fn is_constructed(&self) -> bool {
        self.instance.get().is_some()
    }

    // instance returns the command, constructing it on first use.
    //
    // Credentials are fixed at construction. A later call with other
    // credentials is still served by the existing instance, which keeps
    // talking to the BMC it was built for; that is logged, not
    // rejected.
    pub fn instance(
        &self,
        credentials: &Credentials,
        settings: &TransportSettings,
    ) -> RedfishResult<Arc<dyn Command>> {
        let (owner, command) = self.instance.get_or_try_init(|| {
            debug!(
                "Constructing {}/{} for {}",
                self.descriptor.kind, self.descriptor.name, credentials.host
            );
            let endpoint = Endpoint {
                credentials: credentials.clone(),
                settings: settings.clone(),
            };
            let command = (self.factory)(&endpoint)?;
            Ok::<_, crate::error::RedfishError>((credentials.clone(), command))
        })?;

        if owner != credentials {
            warn!(
                "{}/{} is bound to {}@{}, ignoring credentials for {}@{}",
                self.descriptor.kind,
                self.descriptor.name,
                owner.username,
                owner.host,
                credentials.username,
                credentials.host
            );
        }
        Ok(Arc::clone(command))
    }
}
