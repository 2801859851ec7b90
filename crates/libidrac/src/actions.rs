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

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::trace;

use crate::error::{RedfishError, RedfishResult};

const ALLOWABLE_VALUES_SUFFIX: &str = "@Redfish.AllowableValues";

/// An invocable operation advertised in a resource's `Actions` block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Action {
    /// Short name, e.g. `ClearPending`.
    pub name: String,
    pub target: String,
    /// Identifier as advertised, e.g. `#DellManager.ClearPending`.
    pub full_vendor_name: String,
    pub allowed_args: BTreeMap<String, Vec<String>>,
}

impl Action {
    // validate_arg checks a proposed value against the allowable list
    // the BMC advertised. Arguments without a list are not checked.
    pub fn validate_arg(&self, arg: &str, value: &str) -> RedfishResult<()> {
        match self.allowed_args.get(arg) {
            Some(allowed) if !allowed.iter().any(|a| a == value) => {
                Err(RedfishError::InvalidActionArgument {
                    action: self.name.clone(),
                    arg: arg.to_string(),
                    value: value.to_string(),
                    allowed: allowed.clone(),
                })
            }
            _ => Ok(()),
        }
    }
}

// discover_actions parses the Actions block of a resource into a map
// keyed by short action name. Vendor actions under Oem are flattened
// in. Anything that does not look like an invocable action is skipped.
pub fn discover_actions(resource: &Value) -> HashMap<String, Action> {
    let mut discovered = HashMap::new();
    let Some(actions) = resource.get("Actions").and_then(Value::as_object) else {
        return discovered;
    };

    for (key, entry) in actions {
        if key == "Oem" {
            let Some(oem) = entry.as_object() else {
                continue;
            };
            // Oem holds either the vendor actions themselves or one
            // namespace object per vendor ("Dell": {...}).
            for (oem_key, oem_entry) in oem {
                if oem_key.contains('.') {
                    insert_action(&mut discovered, oem_key, oem_entry);
                } else if let Some(vendor_actions) = oem_entry.as_object() {
                    for (vendor_key, vendor_entry) in vendor_actions {
                        insert_action(&mut discovered, vendor_key, vendor_entry);
                    }
                }
            }
        } else {
            insert_action(&mut discovered, key, entry);
        }
    }
    discovered
}

// discover_member_actions unions discover_actions over the inline
// Members of a collection. Members that are only links contribute
// nothing here, see RedfishClient::discover_collection_actions.
pub fn discover_member_actions(collection: &Value) -> HashMap<String, Action> {
    collection
        .get("Members")
        .and_then(Value::as_array)
        .map(|members| members.iter().flat_map(discover_actions).collect())
        .unwrap_or_default()
}

fn insert_action(discovered: &mut HashMap<String, Action>, full_name: &str, entry: &Value) {
    let Some((_, name)) = full_name.rsplit_once('.') else {
        trace!("Skipping malformed action identifier {full_name}");
        return;
    };
    let Some(entry) = entry.as_object() else {
        return;
    };
    let Some(target) = entry.get("target").and_then(Value::as_str) else {
        trace!("Skipping {full_name}, no target");
        return;
    };

    discovered.insert(
        name.to_string(),
        Action {
            name: name.to_string(),
            target: target.to_string(),
            full_vendor_name: full_name.to_string(),
            allowed_args: allowed_args(entry),
        },
    );
}

fn allowed_args(entry: &Map<String, Value>) -> BTreeMap<String, Vec<String>> {
    entry
        .iter()
        .filter_map(|(key, values)| {
            let arg = key.strip_suffix(ALLOWABLE_VALUES_SUFFIX)?;
            let values = values
                .as_array()?
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect();
            Some((arg.to_string(), values))
        })
        .collect()
}
