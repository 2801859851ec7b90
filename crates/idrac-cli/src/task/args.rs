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

use crate::cfg::cli_options::PollOpts;

#[derive(Parser, Debug, Clone)]
#[clap(rename_all = "kebab_case")]
pub enum Cmd {
    #[clap(about = "Poll a task monitor until the task finishes")]
    Watch(WatchTask),
}

#[derive(Parser, Debug, Clone)]
pub struct WatchTask {
    #[clap(
        long,
        short = 't',
        help = "Task id, or the task monitor URI from a Location header"
    )]
    pub task_id: String,

    #[clap(
        long,
        help = "Stop as soon as the task monitor answers with this HTTP status"
    )]
    pub target_http_status: Option<u16>,

    #[clap(flatten)]
    pub poll: PollOpts,
}
