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

use clap::Parser;
use serde::Serialize;

#[derive(Parser, Debug, Clone)]
#[clap(rename_all = "kebab_case")]
pub enum Cmd {
    #[clap(about = "Show the iDRAC firmware version")]
    FirmwareVersion,
    #[clap(about = "Show the links published by the Redfish service root")]
    ServiceRoot,
    #[clap(about = "Show BIOS attributes, current or pending")]
    Bios(BiosQuery),
    #[clap(about = "List the actions the manager advertises, including Oem ones")]
    ManagerActions,
}

#[derive(Parser, Debug, Clone, Serialize)]
pub struct BiosQuery {
    #[clap(long, short = 'a', help = "Only show this attribute, e.g. BootMode")]
    pub attribute: Option<String>,

    #[clap(
        long,
        action,
        help = "Show the staged settings waiting for the next reset instead of the current ones"
    )]
    pub pending: bool,
}
