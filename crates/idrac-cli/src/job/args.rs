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

use crate::cfg::cli_options::PollOpts;

#[derive(Parser, Debug, Clone)]
#[clap(rename_all = "kebab_case")]
pub enum Cmd {
    #[clap(about = "List the iDRAC job queue")]
    List(ListJobs),
    #[clap(about = "Show one job")]
    Show(ShowJob),
    #[clap(about = "Wait for a job to finish")]
    Watch(WatchJob),
    #[clap(about = "Delete a job from the queue")]
    Delete(DeleteJob),
}

#[derive(Parser, Debug, Clone, Serialize)]
pub struct ListJobs {
    #[clap(long, short = 'x', action, help = "Fetch every job instead of listing ids")]
    pub expand: bool,
}

#[derive(Parser, Debug, Clone, Serialize)]
pub struct ShowJob {
    #[clap(long, short = 'j', help = "Job id (JID_...) or the job's URI")]
    pub job_id: String,

    #[clap(
        long,
        action,
        help = "Print null instead of failing when the job has already been purged"
    )]
    pub missing_ok: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct WatchJob {
    #[clap(long, short = 'j', help = "Job id (JID_...) or the job's URI")]
    pub job_id: String,

    #[clap(flatten)]
    pub poll: PollOpts,
}

#[derive(Parser, Debug, Clone, Serialize)]
pub struct DeleteJob {
    #[clap(long, short = 'j', help = "Job id (JID_...) or the job's URI")]
    pub job_id: String,
}
