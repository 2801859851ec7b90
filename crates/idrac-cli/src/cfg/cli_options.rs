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

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use libidrac::{Scheme, TaskState};
use serde_json::Value;

use crate::config::{Config, ConfigError};
use crate::{bios, generate_shell_complete, job, query, system, task};

#[derive(Parser, Debug)]
#[clap(name = "idrac-ctl")]
#[clap(about = "Manage Dell iDRAC BMCs over Redfish")]
#[clap(version)]
pub struct CliOptions {
    #[clap(
        long,
        global = true,
        env = "IDRAC_IP",
        help = "Address of the iDRAC, overriding configuration file"
    )]
    pub idrac_ip: Option<String>,

    #[clap(
        long,
        short = 'u',
        global = true,
        env = "IDRAC_USERNAME",
        help = "User to authenticate as, overriding configuration file"
    )]
    pub username: Option<String>,

    #[clap(
        long,
        short = 'p',
        global = true,
        env = "IDRAC_PASSWORD",
        hide_env_values = true,
        help = "Password for basic auth, overriding configuration file"
    )]
    pub password: Option<String>,

    #[clap(
        long,
        global = true,
        env = "IDRAC_TOKEN",
        hide_env_values = true,
        help = "Session token sent as X-Auth-Token instead of basic auth"
    )]
    pub token: Option<String>,

    #[clap(
        long,
        short = 'k',
        global = true,
        action,
        help = "Skip TLS certificate verification"
    )]
    pub insecure: bool,

    #[clap(
        long,
        global = true,
        action,
        help = "Talk plain HTTP instead of HTTPS (test rigs only)"
    )]
    pub http: bool,

    #[clap(
        long,
        global = true,
        value_parser = parse_duration,
        help = "Per-request timeout, e.g. 30s"
    )]
    pub timeout: Option<Duration>,

    #[clap(
        long,
        short = 'c',
        global = true,
        env = "IDRAC_CONFIG",
        help = "Path to TOML configuration file"
    )]
    pub config: Option<PathBuf>,

    #[clap(
        long,
        short,
        global = true,
        help = "Turn on debug logging (same as RUST_LOG=debug)"
    )]
    pub debug: bool,

    #[clap(
        long,
        short = 'f',
        global = true,
        value_enum,
        default_value_t = OutputFormat::Json,
        help = "Output format"
    )]
    pub format: OutputFormat,

    #[clap(long, short, global = true, help = "Write output to this file instead of stdout")]
    pub output: Option<String>,

    #[clap(
        long,
        global = true,
        help = "Also save the full command result as JSON to this file"
    )]
    pub save: Option<PathBuf>,

    #[clap(
        long,
        short,
        global = true,
        action,
        help = "Show the full result: data, discovered actions and extra output"
    )]
    pub extended: bool,

    #[clap(subcommand)]
    pub commands: Option<CliCommand>,
}

#[derive(Parser, Debug)]
#[clap(rename_all = "kebab_case")]
pub enum CliCommand {
    #[clap(about = "Read BMC and host state", subcommand)]
    Query(query::Cmd),
    #[clap(about = "Change or discard pending BIOS settings", subcommand)]
    Bios(bios::Cmd),
    #[clap(about = "Host power actions", subcommand)]
    System(system::Cmd),
    #[clap(about = "Inspect and manage the iDRAC job queue", subcommand)]
    Job(job::Cmd),
    #[clap(about = "Follow a Redfish task", subcommand)]
    Task(task::Cmd),
    #[clap(about = "List every command the registry knows about")]
    Commands,
    #[clap(about = "Output a default TOML config file for use with --config")]
    DefaultConfig,
    #[clap(about = "Generate shell autocomplete. Source the output of this command: `source <(idrac-ctl generate-shell-complete bash)`")]
    GenerateShellComplete(generate_shell_complete::Cmd),
}

// OutputFormat are the supported output formats.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
}

impl CliOptions {
    pub fn load() -> Self {
        Self::parse()
    }
}

impl TryFrom<&CliOptions> for Config {
    type Error = ConfigError;

    // Load the config file, or the default, allowing CLI flags (and
    // their environment variables) to override the corresponding
    // settings.
    fn try_from(options: &CliOptions) -> Result<Self, Self::Error> {
        let mut config = if let Some(config_path) = &options.config {
            Config::load(config_path)?
        } else {
            Config::default()
        };

        if let Some(idrac_ip) = &options.idrac_ip {
            config.idrac_ip = Some(idrac_ip.clone());
        }
        if let Some(username) = &options.username {
            config.username = username.clone();
        }
        if let Some(password) = &options.password {
            config.password = Some(password.clone());
        }
        if let Some(token) = &options.token {
            config.token = Some(token.clone());
        }
        if options.insecure {
            config.insecure = true;
        }
        if options.http {
            config.scheme = Scheme::Http;
        }
        if let Some(timeout) = options.timeout {
            config.timeout = timeout;
        }

        Ok(config)
    }
}

// PollOpts are the poll pacing flags shared by every command that can
// wait on a job or task.
#[derive(Parser, Debug, Clone, Default)]
pub struct PollOpts {
    #[clap(
        long,
        value_parser = parse_duration,
        help = "Poll interval while waiting, e.g. 5s, overriding configuration file"
    )]
    pub poll_interval: Option<Duration>,

    #[clap(
        long,
        value_parser = parse_duration,
        help = "Give up waiting after this long, e.g. 30m, overriding configuration file"
    )]
    pub wait_timeout: Option<Duration>,

    #[clap(
        long,
        value_parser = parse_task_state,
        help = "Stop waiting once the task reaches this TaskState, e.g. Running"
    )]
    pub until: Option<TaskState>,
}

impl PollOpts {
    // apply adds the poll arguments that were given to a command's
    // JSON arguments.
    pub fn apply(&self, args: &mut Value) {
        let Some(map) = args.as_object_mut() else {
            return;
        };
        if let Some(interval) = self.poll_interval {
            map.insert(
                "poll_interval_secs".to_string(),
                poll_interval_secs(interval).into(),
            );
        }
        if let Some(timeout) = self.wait_timeout {
            map.insert("timeout_secs".to_string(), timeout.as_secs().into());
        }
        if let Some(state) = self.until {
            map.insert("target_state".to_string(), serde_json::json!(state));
        }
    }
}

// WaitOpts is PollOpts plus the switch that turns waiting on.
#[derive(Parser, Debug, Clone, Default)]
pub struct WaitOpts {
    #[clap(
        long,
        short = 'w',
        action,
        help = "Block until the job or task this command starts finishes"
    )]
    pub wait: bool,

    #[clap(flatten)]
    pub poll: PollOpts,
}

impl WaitOpts {
    pub fn apply(&self, args: &mut Value) {
        if let Some(map) = args.as_object_mut() {
            map.insert("wait".to_string(), self.wait.into());
        }
        self.poll.apply(args);
    }
}

// poll_interval_secs rounds a poll interval to whole seconds, never
// below one.
pub fn poll_interval_secs(interval: Duration) -> u64 {
    interval.as_secs().max(1)
}

pub fn parse_duration(s: &str) -> Result<Duration, String> {
    duration_str::parse(s)
}

// parse_task_state accepts the Redfish TaskState names. Unrecognized
// names are rejected here rather than silently becoming Unknown.
pub fn parse_task_state(s: &str) -> Result<TaskState, String> {
    match serde_json::from_value::<TaskState>(Value::String(s.to_string())) {
        Ok(TaskState::Unknown) if s != "Unknown" => Err(format!("unknown TaskState {s}")),
        Ok(state) => Ok(state),
        Err(e) => Err(e.to_string()),
    }
}
