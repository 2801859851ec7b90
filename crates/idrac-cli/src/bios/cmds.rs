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

use libidrac::{ApplyTime, CommandKind};
use serde_json::{Map, Value, json};

use super::args::ChangeBios;
use crate::cfg::runtime::RuntimeContext;
use crate::errors::CliResult;

pub async fn change(args: ChangeBios, ctx: &mut RuntimeContext) -> CliResult<()> {
    ctx.run(CommandKind::Update, "bios-change", change_args(&args))
        .await
}

pub async fn clear_pending(ctx: &mut RuntimeContext) -> CliResult<()> {
    ctx.run(CommandKind::Action, "clear-pending", Value::Null)
        .await
}

// change_args builds the bios-change arguments. A repeated attribute
// keeps its last value.
pub(super) fn change_args(args: &ChangeBios) -> Value {
    let attributes: Map<String, Value> = args.attributes.iter().cloned().collect();
    let mut json = json!({
        "attributes": attributes,
        "apply_time": ApplyTime::from(args.apply_time),
        "reboot": args.reboot,
    });
    args.wait.apply(&mut json);
    json
}
