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
use serde_json::Value;

use super::args::BiosQuery;
use crate::cfg::runtime::RuntimeContext;
use crate::errors::CliResult;

pub async fn firmware_version(ctx: &mut RuntimeContext) -> CliResult<()> {
    ctx.run(CommandKind::Query, "firmware-version", Value::Null)
        .await
}

pub async fn service_root(ctx: &mut RuntimeContext) -> CliResult<()> {
    ctx.run(CommandKind::Query, "service-root", Value::Null).await
}

pub async fn bios(args: BiosQuery, ctx: &mut RuntimeContext) -> CliResult<()> {
    ctx.run(CommandKind::Query, "bios", serde_json::to_value(&args)?)
        .await
}

pub async fn manager_actions(ctx: &mut RuntimeContext) -> CliResult<()> {
    ctx.run(CommandKind::Query, "manager-actions", Value::Null)
        .await
}
