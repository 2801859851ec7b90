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

use clap::CommandFactory;

use super::args::Shell;
use crate::async_write;
use crate::cfg::cli_options::CliOptions;
use crate::cfg::runtime::RuntimeContext;
use crate::errors::CliResult;

const BIN_NAME: &str = "idrac-ctl";

pub async fn generate(shell: Shell, ctx: &mut RuntimeContext) -> CliResult<()> {
    let script = completion_script(shell);
    async_write!(ctx.output_file, "{script}")?;
    Ok(())
}

pub(super) fn completion_script(shell: Shell) -> String {
    let mut cmd = CliOptions::command();
    let mut script = Vec::new();
    clap_complete::generate(
        clap_complete::Shell::from(shell),
        &mut cmd,
        BIN_NAME,
        &mut script,
    );
    String::from_utf8_lossy(&script).into_owned()
}
