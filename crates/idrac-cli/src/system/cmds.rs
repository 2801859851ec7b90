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
use serde_json::{Value, json};

use super::args::Reboot;
use crate::cfg::runtime::RuntimeContext;
use crate::errors::CliResult;

pub async fn reboot(args: Reboot, ctx: &mut RuntimeContext) -> CliResult<()> {
    ctx.run(CommandKind::Action, "reboot", reboot_args(&args))
        .await
}

pub(super) fn reboot_args(args: &Reboot) -> Value {
    let mut json = json!({ "reset_type": args.reset_type });
    args.wait.apply(&mut json);
    json
}
