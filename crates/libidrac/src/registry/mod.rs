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

// src/registry/mod.rs
// Registry module coordination and re-exports for command
// registration and dispatch.

mod core;
mod entry;
pub mod traits;
pub mod types;

pub use self::core::CommandRegistry;

pub use entry::CommandEntry;
pub use traits::{Command, InvocationContext};
pub use types::{CommandDescriptor, CommandFactory, CommandKind, CommandResult};
