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

// Trimmed iDRAC 7.x responses.

pub const SERVICE_ROOT_PATH: &str = "/redfish/v1";
pub const SYSTEMS_PATH: &str = "/redfish/v1/Systems";
pub const MANAGERS_PATH: &str = "/redfish/v1/Managers";
pub const SYSTEM_PATH: &str = "/redfish/v1/Systems/System.Embedded.1";
pub const MANAGER_PATH: &str = "/redfish/v1/Managers/iDRAC.Embedded.1";
pub const BIOS_PATH: &str = "/redfish/v1/Systems/System.Embedded.1/Bios";
pub const BIOS_SETTINGS_PATH: &str = "/redfish/v1/Systems/System.Embedded.1/Bios/Settings";
pub const JOBS_PATH: &str = "/redfish/v1/Managers/iDRAC.Embedded.1/Jobs";
pub const RESET_TARGET: &str =
    "/redfish/v1/Systems/System.Embedded.1/Actions/ComputerSystem.Reset";
pub const CLEAR_PENDING_TARGET: &str =
    "/redfish/v1/Systems/System.Embedded.1/Bios/Settings/Actions/Oem/DellManager.ClearPending";

pub const SERVICE_ROOT: &str = r#"{
    "@odata.id": "/redfish/v1",
    "Id": "RootService",
    "RedfishVersion": "1.17.0",
    "Systems": {"@odata.id": "/redfish/v1/Systems"},
    "Managers": {"@odata.id": "/redfish/v1/Managers"},
    "UpdateService": {"@odata.id": "/redfish/v1/UpdateService"},
    "Tasks": {"@odata.id": "/redfish/v1/TaskService"}
}"#;

pub const SYSTEMS: &str = r#"{
    "@odata.id": "/redfish/v1/Systems",
    "Members": [{"@odata.id": "/redfish/v1/Systems/System.Embedded.1"}],
    "Members@odata.count": 1
}"#;

pub const MANAGERS: &str = r#"{
    "@odata.id": "/redfish/v1/Managers",
    "Members": [{"@odata.id": "/redfish/v1/Managers/iDRAC.Embedded.1"}],
    "Members@odata.count": 1
}"#;

pub const MANAGER: &str = r##"{
    "@odata.id": "/redfish/v1/Managers/iDRAC.Embedded.1",
    "Id": "iDRAC.Embedded.1",
    "FirmwareVersion": "7.00.30.00",
    "Actions": {
        "#Manager.Reset": {
            "target": "/redfish/v1/Managers/iDRAC.Embedded.1/Actions/Manager.Reset",
            "ResetType@Redfish.AllowableValues": ["GracefulRestart"]
        },
        "Oem": {
            "#DellManager.ResetToDefaults": {
                "target": "/redfish/v1/Managers/iDRAC.Embedded.1/Actions/Oem/DellManager.ResetToDefaults",
                "ResetType@Redfish.AllowableValues": ["All", "ResetAllWithRootDefaults", "Default"]
            },
            "#OemManager.ExportSystemConfiguration": {
                "target": "/redfish/v1/Managers/iDRAC.Embedded.1/Actions/Oem/EID_674_Manager.ExportSystemConfiguration"
            }
        }
    }
}"##;

pub const SYSTEM: &str = r##"{
    "@odata.id": "/redfish/v1/Systems/System.Embedded.1",
    "Id": "System.Embedded.1",
    "PowerState": "On",
    "Actions": {
        "#ComputerSystem.Reset": {
            "target": "/redfish/v1/Systems/System.Embedded.1/Actions/ComputerSystem.Reset",
            "ResetType@Redfish.AllowableValues": ["On", "ForceOff", "ForceRestart", "GracefulRestart", "GracefulShutdown", "PushPowerButton", "Nmi", "PowerCycle"]
        }
    }
}"##;

pub const SYSTEM_NO_ACTIONS: &str = r#"{
    "@odata.id": "/redfish/v1/Systems/System.Embedded.1",
    "Id": "System.Embedded.1",
    "PowerState": "On"
}"#;

pub const BIOS: &str = r##"{
    "@odata.id": "/redfish/v1/Systems/System.Embedded.1/Bios",
    "Id": "Bios",
    "Attributes": {
        "BootMode": "Uefi",
        "SriovGlobalEnable": "Disabled",
        "ProcVirtualization": "Enabled"
    },
    "Actions": {
        "#Bios.ResetBios": {
            "target": "/redfish/v1/Systems/System.Embedded.1/Bios/Actions/Bios.ResetBios"
        }
    }
}"##;

pub const BIOS_SETTINGS: &str = r##"{
    "@odata.id": "/redfish/v1/Systems/System.Embedded.1/Bios/Settings",
    "Id": "Settings",
    "Attributes": {"SriovGlobalEnable": "Enabled"},
    "Actions": {
        "Oem": {
            "#DellManager.ClearPending": {
                "target": "/redfish/v1/Systems/System.Embedded.1/Bios/Settings/Actions/Oem/DellManager.ClearPending"
            }
        }
    }
}"##;

pub const BIOS_SETTINGS_NO_ACTIONS: &str = r#"{
    "@odata.id": "/redfish/v1/Systems/System.Embedded.1/Bios/Settings",
    "Id": "Settings",
    "Attributes": {}
}"#;

pub const JOBS: &str = r#"{
    "@odata.id": "/redfish/v1/Managers/iDRAC.Embedded.1/Jobs",
    "Members": [
        {"@odata.id": "/redfish/v1/Managers/iDRAC.Embedded.1/Jobs/JID_100"},
        {"@odata.id": "/redfish/v1/Managers/iDRAC.Embedded.1/Jobs/JID_101"}
    ]
}"#;

pub const JOB_COMPLETED: &str = r#"{
    "@odata.id": "/redfish/v1/Managers/iDRAC.Embedded.1/Jobs/JID_100",
    "Id": "JID_100",
    "JobState": "Completed",
    "JobType": "BIOSConfiguration",
    "Message": "Job completed successfully.",
    "PercentComplete": 100
}"#;

pub const BAD_REQUEST: &str = r#"{
    "error": {
        "code": "Base.1.12.GeneralError",
        "message": "A general error has occurred. See ExtendedInfo for more information",
        "@Message.ExtendedInfo": [
            {"Message": "Pending configuration values are already committed, unable to perform another set operation."}
        ]
    }
}"#;
