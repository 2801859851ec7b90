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

use std::pin::Pin;
use std::sync::Arc;

use clap::CommandFactory;
use libidrac::Credentials;
use tokio_util::sync::CancellationToken;
use tracing::metadata::LevelFilter;
use tracing::warn;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::prelude::*;

use crate::cfg::cli_options::{CliCommand, CliOptions};
use crate::cfg::dispatch::Dispatch;
use crate::cfg::runtime::{RuntimeConfig, RuntimeContext};
use crate::config::Config;

mod async_write;
mod bios;
mod cfg;
mod config;
mod errors;
mod generate_shell_complete;
mod job;
mod output;
mod query;
mod system;
mod task;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let mut options = CliOptions::load();
    setup_logging(options.debug)?;

    let Some(command) = options.commands.take() else {
        CliOptions::command().print_help()?;
        return Ok(());
    };

    if let CliCommand::DefaultConfig = command {
        print!("{}", Config::default().into_annotated_config_file());
        return Ok(());
    }

    let config = Config::try_from(&options)?;
    let cancel = CancellationToken::new();
    let registry = Arc::new(
        libidrac::default_registry(config.transport_settings()).with_cancellation(cancel.clone()),
    );
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling");
            cancel.cancel();
        }
    });

    let output_file: Pin<Box<dyn tokio::io::AsyncWrite>> = match &options.output {
        Some(path) => Box::pin(tokio::fs::File::create(path).await?),
        None => Box::pin(tokio::io::stdout()),
    };

    let runtime_config = RuntimeConfig {
        format: options.format,
        extended: options.extended,
        save: options.save.clone(),
        poll_interval: config.poll_interval,
        poll_timeout: config.poll_timeout,
    };

    // Commands that never talk to the iDRAC must not need credentials.
    let credentials = match command {
        CliCommand::Commands | CliCommand::GenerateShellComplete(_) => {
            config
                .credentials()
                .unwrap_or_else(|_| Credentials::new("", "", ""))
        }
        _ => config.credentials()?,
    };

    let ctx = RuntimeContext {
        registry,
        credentials,
        config: runtime_config,
        output_file,
    };

    match command {
        CliCommand::Query(cmd) => cmd.dispatch(ctx).await?,
        CliCommand::Bios(cmd) => cmd.dispatch(ctx).await?,
        CliCommand::System(cmd) => cmd.dispatch(ctx).await?,
        CliCommand::Job(cmd) => cmd.dispatch(ctx).await?,
        CliCommand::Task(cmd) => cmd.dispatch(ctx).await?,
        CliCommand::Commands => list_commands(ctx).await?,
        CliCommand::GenerateShellComplete(cmd) => cmd.dispatch(ctx).await?,
        CliCommand::DefaultConfig => {}
    }

    Ok(())
}

// list_commands prints what the registry can dispatch.
async fn list_commands(mut ctx: RuntimeContext) -> errors::CliResult<()> {
    let descriptors = ctx.registry.descriptors();
    output::render(&mut ctx.output_file, &ctx.config.format, &descriptors).await
}

fn setup_logging(debug: bool) -> color_eyre::Result<()> {
    let level = if debug {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy()
        .add_directive("hyper=warn".parse()?)
        .add_directive("hyper_util=warn".parse()?)
        .add_directive("reqwest=warn".parse()?)
        .add_directive("rustls=warn".parse()?);

    // stdout carries command output, logs go to stderr.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::Layer::default()
                .compact()
                .with_writer(std::io::stderr),
        )
        .with(env_filter)
        .try_init()?;
    Ok(())
}
