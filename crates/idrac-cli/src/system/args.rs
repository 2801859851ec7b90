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

use crate::cfg::cli_options::WaitOpts;

#[derive(Parser, Debug, Clone)]
#[clap(rename_all = "kebab_case")]
pub enum Cmd {
    #[clap(about = "Reset the host through ComputerSystem.Reset")]
    Reboot(Reboot),
}

#[derive(Parser, Debug, Clone)]
pub struct Reboot {
    #[clap(
        long,
        short = 't',
        default_value = "GracefulRestart",
        help = "ResetType to request. Checked against the values the iDRAC allows, e.g. On, ForceOff, ForceRestart, PowerCycle"
    )]
    pub reset_type: String,

    #[clap(flatten)]
    pub wait: WaitOpts,
}
