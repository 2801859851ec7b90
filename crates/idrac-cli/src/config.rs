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

use std::path::Path;
use std::time::Duration;

use duration_str::{deserialize_duration, deserialize_option_duration};
use libidrac::{Credentials, Scheme, TransportSettings};
use serde::{Deserialize, Serialize, Serializer};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Configuration for idrac-ctl. Fields are documented as comments in the output of [`Config::into_annotated_config_file`].
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idrac_ip: Option<String>,
    #[serde(default = "Defaults::username")]
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default = "Defaults::scheme")]
    pub scheme: Scheme,
    #[serde(default)]
    pub insecure: bool,
    #[serde(
        default = "Defaults::timeout",
        serialize_with = "serialize_duration",
        deserialize_with = "deserialize_duration"
    )]
    pub timeout: Duration,
    #[serde(
        default = "Defaults::poll_interval",
        serialize_with = "serialize_duration",
        deserialize_with = "deserialize_duration"
    )]
    pub poll_interval: Duration,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_optional_duration",
        deserialize_with = "deserialize_option_duration"
    )]
    pub poll_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            idrac_ip: None,
            username: Defaults::username(),
            password: None,
            token: None,
            scheme: Defaults::scheme(),
            insecure: false,
            timeout: Defaults::timeout(),
            poll_interval: Defaults::poll_interval(),
            poll_timeout: None,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|error| ConfigError::CouldNotRead {
                path: path.to_string_lossy().to_string(),
                error,
            })?;
        toml::from_str(&contents).map_err(|error| ConfigError::InvalidToml {
            path: path.to_string_lossy().to_string(),
            error,
        })
    }

    // credentials returns who to talk to. A token stands in for the
    // password, in which case the password may be left unset.
    pub fn credentials(&self) -> Result<Credentials, ConfigError> {
        let host = self
            .idrac_ip
            .as_deref()
            .filter(|host| !host.is_empty())
            .ok_or(ConfigError::MissingSetting {
                setting: "idrac_ip",
                env: "IDRAC_IP",
            })?;

        let credentials = match (&self.password, &self.token) {
            (_, Some(token)) => Credentials::new(
                host,
                &self.username,
                self.password.as_deref().unwrap_or_default(),
            )
            .with_token(token),
            (Some(password), None) => Credentials::new(host, &self.username, password),
            (None, None) => {
                return Err(ConfigError::MissingSetting {
                    setting: "password",
                    env: "IDRAC_PASSWORD",
                });
            }
        };
        Ok(credentials)
    }

    pub fn transport_settings(&self) -> TransportSettings {
        TransportSettings {
            scheme: self.scheme,
            accept_invalid_certs: self.insecure,
            timeout: self.timeout,
        }
    }

    pub fn into_annotated_config_file(self) -> String {
        let Self {
            idrac_ip: _,
            username,
            password: _,
            token: _,
            scheme,
            insecure,
            timeout,
            poll_interval,
            poll_timeout: _,
        } = self;
        let timeout = format!("{}s", timeout.as_secs());
        let poll_interval = format!("{}s", poll_interval.as_secs());
        let scheme = scheme.to_string();

        format!(
            r#"
#####
## This is a default config file for idrac-ctl. Everything in this file is optional: Any
## non-comment line in this file simply represents default values. Commented lines with a single `#`
## represent examples for optional configuration which is not part of the default config.
##
## Command line flags and the IDRAC_IP, IDRAC_USERNAME, IDRAC_PASSWORD and IDRAC_TOKEN
## environment variables take precedence over anything set here.
#####

## Address of the iDRAC.
# idrac_ip = "10.0.0.10"

## User to authenticate as.
username = {username:?}

## Password for basic auth. Prefer IDRAC_PASSWORD over storing it here.
# password = "<password>"

## Session token, sent as X-Auth-Token instead of basic auth.
# token = "<token>"

## "https" or "http". Plain http is only for test rigs.
scheme = {scheme:?}

## Skip TLS certificate verification. iDRACs ship with self-signed certificates.
insecure = {insecure}

## Per-request timeout.
timeout = {timeout:?}

## How often to poll a running job or task. A larger Retry-After from the iDRAC wins.
poll_interval = {poll_interval:?}

## Give up waiting for a job or task after this long. Unset waits forever.
# poll_timeout = "30m"
"#
        )
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config file at {path}: {error}")]
    CouldNotRead { path: String, error: std::io::Error },
    #[error("TOML error reading config file at {path}: {error}")]
    InvalidToml {
        path: String,
        error: toml::de::Error,
    },
    #[error("{setting} is not set, pass it on the command line, set {env} or add it to the config file")]
    MissingSetting {
        setting: &'static str,
        env: &'static str,
    },
}

pub struct Defaults;

impl Defaults {
    pub fn username() -> String {
        "root".to_string()
    }

    pub fn scheme() -> Scheme {
        Scheme::Https
    }

    pub fn timeout() -> Duration {
        libidrac::client::DEFAULT_TIMEOUT
    }

    pub fn poll_interval() -> Duration {
        libidrac::poller::DEFAULT_POLL_INTERVAL
    }
}

fn serialize_duration<S>(d: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format!("{}s", d.as_secs()))
}

fn serialize_optional_duration<S>(d: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match d {
        Some(d) => serialize_duration(d, serializer),
        None => serializer.serialize_none(),
    }
}
