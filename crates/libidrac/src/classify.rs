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

// Maps raw BMC responses onto OperationOutcome. iDRAC is inconsistent
// about status codes for job-creating operations, so the Location
// header wins over the status code.

use std::sync::Mutex;

use tracing::{debug, warn};

use crate::client::RawResponse;
use crate::error::{RedfishError, RedfishResult};
use crate::model::{OperationOutcome, ServerError};

#[derive(Debug, Default)]
pub struct ResponseClassifier {
    // last_error holds the parsed body of the most recent 4xx response.
    last_error: Mutex<Option<ServerError>>,
}

impl ResponseClassifier {
    // classify maps a response to an outcome, or fails for statuses the
    // caller did not declare acceptable. `expected` is the status the
    // caller wants, `ignorable` an alternative it tolerates.
    pub fn classify(
        &self,
        response: &RawResponse,
        expected: u16,
        ignorable: Option<u16>,
    ) -> RedfishResult<OperationOutcome> {
        self.classify_with_error(response, expected, ignorable)
            .map(|(outcome, _)| outcome)
    }

    // classify_with_error is classify that also returns the server error
    // parsed from this response. The classifier is shared by concurrent
    // invocations, so callers that report the error use this instead of
    // reading last_error back.
    pub fn classify_with_error(
        &self,
        response: &RawResponse,
        expected: u16,
        ignorable: Option<u16>,
    ) -> RedfishResult<(OperationOutcome, Option<ServerError>)> {
        let status = response.status;
        self.remember(None);

        if let Some(location) = response.location() {
            debug!("{} returned Location {location}, job created", response.url);
            return Ok((OperationOutcome::AcceptedTaskGenerated, None));
        }
        // Only the 2xx table entries map, so a caller "expecting" 401
        // still gets Unauthorized below.
        if (status == expected || Some(status) == ignorable)
            && let Some(outcome) = OperationOutcome::from_status(status)
        {
            return Ok((outcome, None));
        }
        if (200..300).contains(&status) {
            let outcome = OperationOutcome::from_status(status).unwrap_or(OperationOutcome::Ok);
            return Ok((outcome, None));
        }

        let mut parsed = None;
        if (400..500).contains(&status) {
            let error = ServerError::from_body(&response.body);
            self.remember(Some(error.clone()));
            match status {
                400 => {
                    return Err(RedfishError::BadRequest {
                        url: response.url.clone(),
                        error,
                    });
                }
                401 => {
                    return Err(RedfishError::Unauthorized {
                        url: response.url.clone(),
                    });
                }
                403 => {
                    return Err(RedfishError::Forbidden {
                        url: response.url.clone(),
                        message: error.to_string(),
                    });
                }
                // iDRAC answers 404 on some endpoints when the account
                // lacks the privilege to see the resource.
                404 => {
                    return Err(RedfishError::Forbidden {
                        url: response.url.clone(),
                        message: format!("not found or not permitted: {error}"),
                    });
                }
                _ => parsed = Some(error),
            }
        }

        if status >= 500 {
            return Err(RedfishError::ServerFault {
                url: response.url.clone(),
                status,
                error: ServerError::from_body(&response.body),
            });
        }

        warn!(
            "{} returned HTTP {status}, expected {expected}",
            response.url
        );
        Ok((OperationOutcome::Error, parsed))
    }

    // last_error returns the server error parsed from the last
    // classified response, if that response was a 4xx.
    pub fn last_error(&self) -> Option<ServerError> {
        self.last_error
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    fn remember(&self, error: Option<ServerError>) {
        if let Ok(mut guard) = self.last_error.lock() {
            *guard = error;
        }
    }
}
