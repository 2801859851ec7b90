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

mod fixtures;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use fixtures::*;
use libidrac::{
    Command, CommandKind, CommandRegistry, CommandResult, Credentials, Endpoint,
    InvocationContext, OperationOutcome, RedfishClient, RedfishError, RedfishResult,
    default_registry,
};
use mock_server as ms;
use mockito::Matcher;
use serde_json::{Value, json};

// mock_discovery answers the service root and the Systems and Managers
// collections.
async fn mock_discovery(server: &mut mockito::ServerGuard, hits: usize) -> Vec<mockito::Mock> {
    vec![
        ms::add_mock(server, SERVICE_ROOT_PATH, SERVICE_ROOT, &ms::Method::Get, 200, hits).await,
        ms::add_mock(server, SYSTEMS_PATH, SYSTEMS, &ms::Method::Get, 200, hits).await,
        ms::add_mock(server, MANAGERS_PATH, MANAGERS, &ms::Method::Get, 200, hits).await,
    ]
}

fn client_for(credentials: Credentials) -> RedfishClient {
    RedfishClient::new(Endpoint {
        credentials,
        settings: ms::settings(),
    })
    .unwrap()
}

// --> RedfishClient <--
#[tokio::test]
async fn basic_auth_is_sent_without_token() {
    // set up
    let mut server = ms::create_mock_http_server().await;
    let mock = server
        .mock("GET", SERVICE_ROOT_PATH)
        .match_header("authorization", ms::BASIC_AUTH)
        .match_header("x-auth-token", Matcher::Missing)
        .with_status(200)
        .with_body(SERVICE_ROOT)
        .create_async()
        .await;
    let client = client_for(ms::credentials(&server));

    // execute
    let root = client.get_json(SERVICE_ROOT_PATH).await.unwrap();

    // verify
    mock.assert_async().await;
    assert_eq!(root["Id"], "RootService");
}

#[tokio::test]
async fn token_replaces_basic_auth() {
    let mut server = ms::create_mock_http_server().await;
    let mock = server
        .mock("GET", SERVICE_ROOT_PATH)
        .match_header("x-auth-token", "0123456789abcdef")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_body(SERVICE_ROOT)
        .create_async()
        .await;
    let client = client_for(ms::credentials(&server).with_token("0123456789abcdef"));

    client.get_json(SERVICE_ROOT_PATH).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn not_found_is_explicit_per_call() {
    let mut server = ms::create_mock_http_server().await;
    ms::add_mock(&mut server, "/redfish/v1/Gone", "", &ms::Method::Get, 404, 2).await;
    let client = client_for(ms::credentials(&server));

    let missing = client.get_optional("/redfish/v1/Gone").await.unwrap();
    assert!(missing.is_none());

    let err = client
        .get_json("/redfish/v1/Gone")
        .await
        .expect_err("404 on a required resource must fail");
    assert!(matches!(err, RedfishError::Forbidden { .. }));
}

#[tokio::test]
async fn location_header_means_job_created() {
    let mut server = ms::create_mock_http_server().await;
    server
        .mock("POST", RESET_TARGET)
        .with_status(200)
        .with_header("Location", "/redfish/v1/Managers/iDRAC.Embedded.1/Jobs/JID_7")
        .create_async()
        .await;
    let client = client_for(ms::credentials(&server));

    let (outcome, response) = client
        .post(RESET_TARGET, &json!({"ResetType": "On"}), 204, None)
        .await
        .unwrap();

    assert_eq!(outcome, OperationOutcome::AcceptedTaskGenerated);
    assert_eq!(
        response.location(),
        Some("/redfish/v1/Managers/iDRAC.Embedded.1/Jobs/JID_7")
    );
}

#[tokio::test]
async fn bad_request_message_is_kept_on_the_classifier() {
    let mut server = ms::create_mock_http_server().await;
    ms::add_mock(&mut server, BIOS_SETTINGS_PATH, BAD_REQUEST, &ms::Method::Patch, 400, 1).await;
    let client = client_for(ms::credentials(&server));

    let err = client
        .patch(BIOS_SETTINGS_PATH, &json!({"Attributes": {}}), 200, Some(202))
        .await
        .expect_err("400 must fail");

    let RedfishError::BadRequest { error, .. } = err else {
        panic!("expected BadRequest");
    };
    assert_eq!(error.code.as_deref(), Some("Base.1.12.GeneralError"));
    assert_eq!(client.classifier().last_error(), Some(error));
}

#[tokio::test]
async fn unreachable_bmc_is_a_network_error() {
    let client = RedfishClient::new(Endpoint {
        credentials: Credentials::new("127.0.0.1:1", "root", "calvin"),
        settings: ms::settings(),
    })
    .unwrap();

    let err = client
        .get_json(SERVICE_ROOT_PATH)
        .await
        .expect_err("nothing listens on port 1");

    assert!(matches!(err, RedfishError::Network { .. }));
}

#[tokio::test]
async fn collection_actions_follow_member_links() {
    let mut server = ms::create_mock_http_server().await;
    ms::add_mock(&mut server, SYSTEMS_PATH, SYSTEMS, &ms::Method::Get, 200, 1).await;
    ms::add_mock(&mut server, SYSTEM_PATH, SYSTEM, &ms::Method::Get, 200, 1).await;
    let client = client_for(ms::credentials(&server));

    let discovered = client.discover_collection_actions(SYSTEMS_PATH).await.unwrap();

    assert_eq!(discovered.len(), 1);
    assert_eq!(discovered["Reset"].target, RESET_TARGET);
}

// --> CommandRegistry <--
struct Echo;

#[async_trait::async_trait]
impl Command for Echo {
    async fn execute(
        &self,
        _ctx: &InvocationContext<'_>,
        args: Value,
    ) -> RedfishResult<CommandResult> {
        Ok(CommandResult::new(json!({"pong": args})))
    }
}

struct Failing;

#[async_trait::async_trait]
impl Command for Failing {
    async fn execute(
        &self,
        _ctx: &InvocationContext<'_>,
        _args: Value,
    ) -> RedfishResult<CommandResult> {
        Err(RedfishError::FailedDiscoverAction {
            action: "ClearPending".to_string(),
            resource: BIOS_SETTINGS_PATH.to_string(),
        })
    }
}

struct Outer;

#[async_trait::async_trait]
impl Command for Outer {
    async fn execute(
        &self,
        ctx: &InvocationContext<'_>,
        _args: Value,
    ) -> RedfishResult<CommandResult> {
        let has_missing = ctx.contains(CommandKind::Query, "missing");
        let inner = ctx
            .invoke(CommandKind::Query, "echo", json!("inner"))
            .await?;
        Ok(CommandResult::new(json!({
            "has_missing": has_missing,
            "inner": inner.data,
        })))
    }
}

fn counting_registry(constructed: Arc<AtomicUsize>) -> CommandRegistry {
    let mut registry = CommandRegistry::new(ms::settings());
    registry.register(
        CommandKind::Query,
        "echo",
        "answers pong",
        Box::new(move |_endpoint: &Endpoint| {
            constructed.fetch_add(1, Ordering::SeqCst);
            Ok(Arc::new(Echo) as Arc<dyn Command>)
        }),
    );
    registry.register(
        CommandKind::Action,
        "failing",
        "always fails",
        Box::new(|_endpoint: &Endpoint| Ok(Arc::new(Failing) as Arc<dyn Command>)),
    );
    registry.register(
        CommandKind::Action,
        "outer",
        "calls echo",
        Box::new(|_endpoint: &Endpoint| Ok(Arc::new(Outer) as Arc<dyn Command>)),
    );
    registry.register(
        CommandKind::Action,
        "unbuildable",
        "factory fails",
        Box::new(|_endpoint: &Endpoint| Err(RedfishError::InvalidArguments("no".to_string()))),
    );
    registry
}

#[tokio::test]
async fn unknown_command_is_unsupported_and_builds_nothing() {
    // set up
    let constructed = Arc::new(AtomicUsize::new(0));
    let registry = counting_registry(constructed.clone());
    let credentials = Credentials::new("bmc", "root", "calvin");

    // execute
    let by_name = registry
        .invoke(CommandKind::Query, "nonexistent-name", &credentials, Value::Null)
        .await
        .expect_err("unknown name must fail");
    let by_kind = registry
        .invoke(CommandKind::Delete, "echo", &credentials, Value::Null)
        .await
        .expect_err("unknown kind must fail");

    // verify
    assert!(matches!(by_name, RedfishError::UnsupportedAction { kind: CommandKind::Query, .. }));
    assert!(by_kind.is_discovery_miss());
    assert_eq!(constructed.load(Ordering::SeqCst), 0);
    assert!(!registry.is_constructed(CommandKind::Query, "echo"));
}

#[tokio::test]
async fn instance_is_built_once_and_credentials_fixed() {
    let constructed = Arc::new(AtomicUsize::new(0));
    let registry = counting_registry(constructed.clone());
    let first = Credentials::new("bmc-a", "root", "calvin");
    let second = Credentials::new("bmc-b", "admin", "other");

    let a = registry
        .invoke(CommandKind::Query, "echo", &first, json!(1))
        .await
        .unwrap();
    let b = registry
        .invoke(CommandKind::Query, "echo", &first, json!(2))
        .await
        .unwrap();
    let c = registry
        .invoke(CommandKind::Query, "echo", &second, json!(3))
        .await
        .unwrap();

    assert_eq!(constructed.load(Ordering::SeqCst), 1);
    assert_eq!(a.data, json!({"pong": 1}));
    assert_eq!(b.data, json!({"pong": 2}));
    assert!(c.is_ok());
}

#[tokio::test]
async fn command_failures_land_in_the_result() {
    let registry = counting_registry(Arc::new(AtomicUsize::new(0)));
    let credentials = Credentials::new("bmc", "root", "calvin");

    let result = registry
        .invoke(CommandKind::Action, "failing", &credentials, Value::Null)
        .await
        .unwrap();
    assert!(matches!(
        result.error,
        Some(RedfishError::FailedDiscoverAction { .. })
    ));
    assert_eq!(result.data, Value::Null);

    let err = registry
        .invoke(CommandKind::Action, "unbuildable", &credentials, Value::Null)
        .await
        .expect_err("factory errors are dispatch errors");
    assert!(matches!(err, RedfishError::InvalidArguments(_)));
}

#[tokio::test]
async fn commands_can_check_for_and_call_siblings() {
    let registry = counting_registry(Arc::new(AtomicUsize::new(0)));
    let credentials = Credentials::new("bmc", "root", "calvin");

    let result = registry
        .invoke(CommandKind::Action, "outer", &credentials, Value::Null)
        .await
        .unwrap();

    assert_eq!(
        result.data,
        json!({"has_missing": false, "inner": {"pong": "inner"}})
    );
}

#[test]
fn blocking_invoke_shares_dispatch() {
    let constructed = Arc::new(AtomicUsize::new(0));
    let registry = counting_registry(constructed.clone());
    let credentials = Credentials::new("bmc", "root", "calvin");

    let result = registry
        .invoke_blocking(CommandKind::Query, "echo", &credentials, json!("sync"))
        .unwrap();
    let err = registry
        .invoke_blocking(CommandKind::Task, "echo", &credentials, Value::Null)
        .expect_err("unknown kind must fail");

    assert_eq!(result.data, json!({"pong": "sync"}));
    assert!(matches!(err, RedfishError::UnsupportedAction { .. }));
    assert_eq!(constructed.load(Ordering::SeqCst), 1);
}

#[test]
fn default_registry_lists_builtin_commands() {
    let registry = default_registry(ms::settings());
    let names: Vec<String> = registry
        .descriptors()
        .into_iter()
        .map(|d| format!("{}/{}", d.kind, d.name))
        .collect();
    assert_eq!(
        names,
        vec![
            "query/bios",
            "query/firmware-version",
            "query/manager-actions",
            "query/service-root",
            "update/bios-change",
            "action/clear-pending",
            "action/reboot",
            "job/job-delete",
            "job/job-get",
            "job/job-list",
            "job/job-watch",
            "task/task-watch",
        ]
    );
}

// --> Built-in commands <--
#[tokio::test]
async fn firmware_version_is_fetched_once() {
    // set up
    let mut server = ms::create_mock_http_server().await;
    let mut mocks = mock_discovery(&mut server, 1).await;
    mocks.push(ms::add_mock(&mut server, MANAGER_PATH, MANAGER, &ms::Method::Get, 200, 1).await);
    let registry = default_registry(ms::settings());
    let credentials = ms::credentials(&server);

    // execute
    let first = registry
        .invoke(CommandKind::Query, "firmware-version", &credentials, Value::Null)
        .await
        .unwrap();
    let second = registry
        .invoke(CommandKind::Query, "firmware-version", &credentials, Value::Null)
        .await
        .unwrap();

    // verify
    assert_eq!(first.data, json!({"FirmwareVersion": "7.00.30.00"}));
    assert_eq!(first.data, second.data);
    // Systems is never needed for the manager firmware version.
    mocks.remove(1);
    for mock in mocks {
        mock.assert_async().await;
    }
}

#[tokio::test]
async fn manager_actions_include_oem() {
    let mut server = ms::create_mock_http_server().await;
    mock_discovery(&mut server, 1).await;
    ms::add_mock(&mut server, MANAGER_PATH, MANAGER, &ms::Method::Get, 200, 1).await;
    let registry = default_registry(ms::settings());

    let result = registry
        .invoke(
            CommandKind::Query,
            "manager-actions",
            &ms::credentials(&server),
            Value::Null,
        )
        .await
        .unwrap();

    let discovered = result.discovered.unwrap();
    assert_eq!(discovered.len(), 3);
    assert_eq!(
        discovered["ResetToDefaults"].allowed_args["ResetType"],
        vec!["All", "ResetAllWithRootDefaults", "Default"]
    );
    assert!(result.data.get("ExportSystemConfiguration").is_some());
}

#[tokio::test]
async fn bios_query_filters_one_attribute() {
    let mut server = ms::create_mock_http_server().await;
    mock_discovery(&mut server, 1).await;
    ms::add_mock(&mut server, BIOS_PATH, BIOS, &ms::Method::Get, 200, 2).await;
    let registry = default_registry(ms::settings());
    let credentials = ms::credentials(&server);

    let one = registry
        .invoke(
            CommandKind::Query,
            "bios",
            &credentials,
            json!({"attribute": "BootMode"}),
        )
        .await
        .unwrap();
    let missing = registry
        .invoke(
            CommandKind::Query,
            "bios",
            &credentials,
            json!({"attribute": "NoSuchThing"}),
        )
        .await
        .unwrap();

    assert_eq!(one.data, json!({"BootMode": "Uefi"}));
    assert!(one.discovered.unwrap().contains_key("ResetBios"));
    assert!(matches!(
        missing.error,
        Some(RedfishError::InvalidArguments(_))
    ));
}

#[tokio::test]
async fn clear_pending_requires_the_action() {
    let mut server = ms::create_mock_http_server().await;
    mock_discovery(&mut server, 1).await;
    ms::add_mock(
        &mut server,
        BIOS_SETTINGS_PATH,
        BIOS_SETTINGS_NO_ACTIONS,
        &ms::Method::Get,
        200,
        1,
    )
    .await;
    let registry = default_registry(ms::settings());

    let result = registry
        .invoke(
            CommandKind::Action,
            "clear-pending",
            &ms::credentials(&server),
            Value::Null,
        )
        .await
        .unwrap();

    let Some(RedfishError::FailedDiscoverAction { action, resource }) = result.error else {
        panic!("expected FailedDiscoverAction");
    };
    assert_eq!(action, "ClearPending");
    assert_eq!(resource, BIOS_SETTINGS_PATH);
}

#[tokio::test]
async fn clear_pending_reports_what_it_discards() {
    let mut server = ms::create_mock_http_server().await;
    mock_discovery(&mut server, 2).await;
    ms::add_mock(&mut server, BIOS_SETTINGS_PATH, BIOS_SETTINGS, &ms::Method::Get, 200, 2).await;
    let clear = ms::add_mock(&mut server, CLEAR_PENDING_TARGET, "{}", &ms::Method::Post, 200, 1).await;
    let registry = default_registry(ms::settings());

    let result = registry
        .invoke(
            CommandKind::Action,
            "clear-pending",
            &ms::credentials(&server),
            Value::Null,
        )
        .await
        .unwrap();

    clear.assert_async().await;
    assert!(result.is_ok());
    assert_eq!(result.data, json!({"Outcome": "Ok"}));
    assert_eq!(
        result.extra,
        Some(json!({"Cleared": {"SriovGlobalEnable": "Enabled"}}))
    );
}

#[tokio::test]
async fn reboot_rejects_values_the_bmc_does_not_allow() {
    let mut server = ms::create_mock_http_server().await;
    mock_discovery(&mut server, 1).await;
    ms::add_mock(&mut server, SYSTEM_PATH, SYSTEM, &ms::Method::Get, 200, 1).await;
    let reset = ms::add_mock(&mut server, RESET_TARGET, "", &ms::Method::Post, 204, 0).await;
    let registry = default_registry(ms::settings());

    let result = registry
        .invoke(
            CommandKind::Action,
            "reboot",
            &ms::credentials(&server),
            json!({"reset_type": "Explode"}),
        )
        .await
        .unwrap();

    reset.assert_async().await;
    assert!(matches!(
        result.error,
        Some(RedfishError::InvalidActionArgument { .. })
    ));
}

#[tokio::test]
async fn reboot_posts_reset_type() {
    let mut server = ms::create_mock_http_server().await;
    mock_discovery(&mut server, 1).await;
    ms::add_mock(&mut server, SYSTEM_PATH, SYSTEM, &ms::Method::Get, 200, 1).await;
    let reset = server
        .mock("POST", RESET_TARGET)
        .match_body(Matcher::PartialJson(json!({"ResetType": "ForceRestart"})))
        .with_status(204)
        .create_async()
        .await;
    let registry = default_registry(ms::settings());

    let result = registry
        .invoke(
            CommandKind::Action,
            "reboot",
            &ms::credentials(&server),
            json!({"reset_type": "ForceRestart"}),
        )
        .await
        .unwrap();

    reset.assert_async().await;
    assert!(result.is_ok());
    assert_eq!(result.data["Outcome"], "Success");
    assert!(result.extra.is_none());
}

#[tokio::test]
async fn bios_change_returns_job_without_waiting() {
    // set up
    let mut server = ms::create_mock_http_server().await;
    mock_discovery(&mut server, 1).await;
    let patch = server
        .mock("PATCH", BIOS_SETTINGS_PATH)
        .match_body(Matcher::PartialJson(json!({
            "Attributes": {"SriovGlobalEnable": "Enabled"},
            "@Redfish.SettingsApplyTime": {"ApplyTime": "OnReset"}
        })))
        .with_status(202)
        .with_header("Location", "/redfish/v1/Managers/iDRAC.Embedded.1/Jobs/JID_200")
        .create_async()
        .await;
    let registry = default_registry(ms::settings());

    // execute
    let result = registry
        .invoke(
            CommandKind::Update,
            "bios-change",
            &ms::credentials(&server),
            json!({"attributes": {"SriovGlobalEnable": "Enabled"}}),
        )
        .await
        .unwrap();

    // verify
    patch.assert_async().await;
    assert!(result.is_ok());
    assert_eq!(result.data["Outcome"], "AcceptedTaskGenerated");
    assert_eq!(result.extra.unwrap()["job_id"], "JID_200");
}

#[tokio::test]
async fn bios_change_waits_on_finished_job() {
    let mut server = ms::create_mock_http_server().await;
    mock_discovery(&mut server, 1).await;
    server
        .mock("PATCH", BIOS_SETTINGS_PATH)
        .with_status(202)
        .with_header("Location", "/redfish/v1/Managers/iDRAC.Embedded.1/Jobs/JID_100")
        .create_async()
        .await;
    let job = ms::add_mock(
        &mut server,
        &format!("{JOBS_PATH}/JID_100"),
        JOB_COMPLETED,
        &ms::Method::Get,
        200,
        1,
    )
    .await;
    let registry = default_registry(ms::settings());

    let result = registry
        .invoke(
            CommandKind::Update,
            "bios-change",
            &ms::credentials(&server),
            json!({
                "attributes": {"ProcVirtualization": "Disabled"},
                "apply_time": "Immediate",
                "wait": true
            }),
        )
        .await
        .unwrap();

    job.assert_async().await;
    assert!(result.is_ok());
    assert_eq!(result.data["Job"]["state"], "Completed");
    assert_eq!(result.data["Job"]["job_state"], "Completed");
}

#[tokio::test]
async fn bios_change_reboots_through_sibling_command() {
    // set up
    let mut server = ms::create_mock_http_server().await;
    mock_discovery(&mut server, 2).await;
    server
        .mock("PATCH", BIOS_SETTINGS_PATH)
        .with_status(202)
        .with_header("Location", "/redfish/v1/Managers/iDRAC.Embedded.1/Jobs/JID_300")
        .create_async()
        .await;
    ms::add_mock(&mut server, SYSTEM_PATH, SYSTEM, &ms::Method::Get, 200, 1).await;
    let reset = server
        .mock("POST", RESET_TARGET)
        .match_body(Matcher::PartialJson(json!({"ResetType": "GracefulRestart"})))
        .with_status(204)
        .expect(1)
        .create_async()
        .await;
    let registry = default_registry(ms::settings());

    // execute
    let result = registry
        .invoke(
            CommandKind::Update,
            "bios-change",
            &ms::credentials(&server),
            json!({"attributes": {"SriovGlobalEnable": "Enabled"}, "reboot": true}),
        )
        .await
        .unwrap();

    // verify
    reset.assert_async().await;
    assert!(result.is_ok());
    assert!(registry.is_constructed(CommandKind::Action, "reboot"));
    assert_eq!(result.data["Outcome"], "AcceptedTaskGenerated");
    assert_eq!(result.data["Reboot"]["Outcome"], "Success");
    assert_eq!(result.extra.unwrap()["job_id"], "JID_300");
}

#[tokio::test]
async fn bios_change_keeps_staged_job_when_reboot_fails() {
    // set up
    let mut server = ms::create_mock_http_server().await;
    mock_discovery(&mut server, 2).await;
    server
        .mock("PATCH", BIOS_SETTINGS_PATH)
        .with_status(202)
        .with_header("Location", "/redfish/v1/Managers/iDRAC.Embedded.1/Jobs/JID_300")
        .create_async()
        .await;
    ms::add_mock(
        &mut server,
        SYSTEM_PATH,
        SYSTEM_NO_ACTIONS,
        &ms::Method::Get,
        200,
        1,
    )
    .await;
    let reset = ms::add_mock(&mut server, RESET_TARGET, "", &ms::Method::Post, 204, 0).await;
    let registry = default_registry(ms::settings());

    // execute
    let result = registry
        .invoke(
            CommandKind::Update,
            "bios-change",
            &ms::credentials(&server),
            json!({"attributes": {"SriovGlobalEnable": "Enabled"}, "reboot": true}),
        )
        .await
        .unwrap();

    // verify
    reset.assert_async().await;
    assert!(matches!(
        result.error,
        Some(RedfishError::FailedDiscoverAction { .. })
    ));
    assert_eq!(result.data["Outcome"], "AcceptedTaskGenerated");
    assert!(result.data.get("Reboot").is_none());
    let extra = result.extra.expect("staged job must be kept");
    assert_eq!(extra["job_id"], "JID_300");
    assert_eq!(
        extra["location"],
        "/redfish/v1/Managers/iDRAC.Embedded.1/Jobs/JID_300"
    );
}

#[tokio::test]
async fn bios_change_needs_attributes() {
    let registry = default_registry(ms::settings());
    let credentials = Credentials::new("127.0.0.1:1", "root", "calvin");

    let result = registry
        .invoke(
            CommandKind::Update,
            "bios-change",
            &credentials,
            json!({"attributes": {}}),
        )
        .await
        .unwrap();

    assert!(matches!(
        result.error,
        Some(RedfishError::InvalidArguments(_))
    ));
}

#[tokio::test]
async fn job_commands() {
    // set up
    let mut server = ms::create_mock_http_server().await;
    mock_discovery(&mut server, 1).await;
    ms::add_mock(&mut server, JOBS_PATH, JOBS, &ms::Method::Get, 200, 1).await;
    ms::add_mock(&mut server, &format!("{JOBS_PATH}/JID_404"), "", &ms::Method::Get, 404, 2).await;
    let delete = ms::add_mock(
        &mut server,
        &format!("{JOBS_PATH}/JID_100"),
        "{}",
        &ms::Method::Delete,
        200,
        1,
    )
    .await;
    let registry = default_registry(ms::settings());
    let credentials = ms::credentials(&server);

    // execute
    let list = registry
        .invoke(CommandKind::Job, "job-list", &credentials, Value::Null)
        .await
        .unwrap();
    let purged = registry
        .invoke(
            CommandKind::Job,
            "job-get",
            &credentials,
            json!({"job_id": "JID_404", "missing_ok": true}),
        )
        .await
        .unwrap();
    let required = registry
        .invoke(
            CommandKind::Job,
            "job-get",
            &credentials,
            json!({"job_id": "JID_404"}),
        )
        .await
        .unwrap();
    let deleted = registry
        .invoke(
            CommandKind::Job,
            "job-delete",
            &credentials,
            json!({"job_id": "JID_100"}),
        )
        .await
        .unwrap();

    // verify
    assert_eq!(list.data, json!(["JID_100", "JID_101"]));
    assert_eq!(purged.data, Value::Null);
    assert!(purged.is_ok());
    assert!(matches!(required.error, Some(RedfishError::Forbidden { .. })));
    delete.assert_async().await;
    assert_eq!(deleted.data, json!({"JobId": "JID_100", "Outcome": "Ok"}));
}

#[tokio::test]
async fn job_get_requires_job_id() {
    let registry = default_registry(ms::settings());
    let credentials = Credentials::new("127.0.0.1:1", "root", "calvin");

    let result = registry
        .invoke(CommandKind::Job, "job-get", &credentials, Value::Null)
        .await
        .unwrap();

    assert!(matches!(
        result.error,
        Some(RedfishError::InvalidArguments(_))
    ));
}
