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

use clap::{Parser, ValueEnum};
use libidrac::ApplyTime;
use serde_json::Value;

use crate::cfg::cli_options::WaitOpts;

#[derive(Parser, Debug, Clone)]
#[clap(rename_all = "kebab_case")]
pub enum Cmd {
    #[clap(about = "Stage BIOS attribute changes on Bios/Settings")]
    Change(ChangeBios),
    #[clap(about = "Discard staged BIOS changes that have not been applied yet")]
    ClearPending,
}

#[derive(Parser, Debug, Clone)]
pub struct ChangeBios {
    #[clap(
        long = "set",
        short = 's',
        required = true,
        value_parser = parse_attribute,
        help = "Attribute to change as Name=Value, e.g. BootMode=Uefi. Repeat to change several"
    )]
    pub attributes: Vec<(String, Value)>,

    #[clap(
        long,
        value_enum,
        default_value_t = ApplyTimeArg::OnReset,
        help = "When the iDRAC applies the change"
    )]
    pub apply_time: ApplyTimeArg,

    #[clap(
        long,
        short = 'r',
        action,
        help = "Reboot the host right after staging so the change gets applied"
    )]
    pub reboot: bool,

    #[clap(flatten)]
    pub wait: WaitOpts,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplyTimeArg {
    Immediate,
    OnReset,
    AtMaintenanceWindowStart,
    InMaintenanceWindowOnReset,
}

impl From<ApplyTimeArg> for ApplyTime {
    fn from(arg: ApplyTimeArg) -> Self {
        match arg {
            ApplyTimeArg::Immediate => ApplyTime::Immediate,
            ApplyTimeArg::OnReset => ApplyTime::OnReset,
            ApplyTimeArg::AtMaintenanceWindowStart => ApplyTime::AtMaintenanceWindowStart,
            ApplyTimeArg::InMaintenanceWindowOnReset => ApplyTime::InMaintenanceWindowOnReset,
        }
    }
}

// parse_attribute splits Name=Value. Integer values are sent as JSON
// numbers, everything else as strings, matching how BIOS attribute
// registries type their values.
pub fn parse_attribute(s: &str) -> Result<(String, Value), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected Name=Value, got {s}"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing attribute name in {s}"));
    }
    let value = match value.parse::<i64>() {
        Ok(number) => Value::from(number),
        Err(_) => Value::String(value.to_string()),
    };
    Ok((name.to_string(), value))
}
