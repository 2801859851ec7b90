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

//! Redfish client for Dell iDRAC.
//!
//! The crate discovers the actions a resource advertises, classifies
//! the BMC's responses into a small set of outcomes, drives Redfish
//! tasks and Dell jobs to completion, and dispatches named commands
//! through a [`CommandRegistry`].

pub mod actions;
pub mod classify;
pub mod client;
pub mod commands;
pub mod error;
pub mod model;
pub mod poller;
pub mod registry;

pub use actions::{Action, discover_actions, discover_member_actions};
pub use classify::ResponseClassifier;
pub use client::{
    Credentials, Endpoint, RawResponse, RedfishClient, Scheme, Transport, TransportSettings,
};
pub use error::{RedfishError, RedfishResult};
pub use model::{
    ApplyTime, JobState, OperationOutcome, ServerError, ServiceRoot, TaskReport, TaskState,
    TaskStatus,
};
pub use poller::{PollOptions, TaskPoller};
pub use registry::{
    Command, CommandDescriptor, CommandKind, CommandRegistry, CommandResult, InvocationContext,
};

// default_registry returns a registry with every built-in command
// registered.
pub fn default_registry(settings: TransportSettings) -> CommandRegistry {
    let mut registry = CommandRegistry::new(settings);
    commands::register_all(&mut registry);
    registry
}
