//! Tests for the create-or-update deploy engine.

mod support;

use support::RecordingExecutor;
use ups_core::deploy::{
    CREATE_UPDATE_MESSAGE, Deployer, ErrorCollector, NOT_FOUND_MESSAGE, OutcomeStatus,
    resolve_targets,
};
use ups_core::error::DeployError;
use ups_core::model::{ServiceDescriptor, Space};

const NONE: &[&str] = &[];

fn space_one() -> Space {
    Space::new(
        "One",
        vec![ServiceDescriptor::credentials(
            "UPS1",
            [("Credential1", "One"), ("Credential2", "two")],
        )],
    )
}

fn space_two() -> Space {
    Space::new(
        "Two",
        vec![
            ServiceDescriptor::credentials("UPS1", [("Credential1", "One"), ("Credential2", "two")]),
            ServiceDescriptor::credentials("UPS2", [("Credential3", "One"), ("Credential4", "two")]),
        ],
    )
}

fn route_and_syslog_space() -> Space {
    Space::new(
        "RouteAndSyslog",
        vec![
            ServiceDescriptor::route_service("UPS1", "RouteService"),
            ServiceDescriptor::syslog_drain("UPS2", "Syslog"),
        ],
    )
}

#[test]
fn create_service_issues_single_cups() {
    let executor = RecordingExecutor::new();
    let deployer = Deployer::new(&executor);
    let ups = ServiceDescriptor::credentials("UPS1", [("Credential1", "1"), ("Credential2", "2")]);

    deployer.create_service(&ups).unwrap();

    assert_eq!(
        executor.command_lines(),
        vec![r#"cups UPS1 -p '{"Credential1":"1","Credential2":"2"}'"#]
    );
}

#[test]
fn update_service_issues_single_uups() {
    let executor = RecordingExecutor::new();
    let deployer = Deployer::new(&executor);
    let ups = ServiceDescriptor::credentials("UPS1", [("Credential1", "1"), ("Credential2", "2")]);

    deployer.update_service(&ups).unwrap();

    assert_eq!(
        executor.command_lines(),
        vec![r#"uups UPS1 -p '{"Credential1":"1","Credential2":"2"}'"#]
    );
}

#[test]
fn create_service_returns_executor_error() {
    let executor = RecordingExecutor::failing_everything();
    let deployer = Deployer::new(&executor);

    let err = deployer
        .create_service(&ServiceDescriptor::syslog_drain("UPS2", "Syslog"))
        .unwrap_err();

    assert!(matches!(err, DeployError::Execution(_)));
}

#[test]
fn deploy_all_preserves_declaration_order() {
    let executor = RecordingExecutor::new();
    let mut errors = ErrorCollector::new();

    Deployer::new(&executor).deploy(&space_two(), NONE, &mut errors);

    assert_eq!(
        executor.command_lines(),
        vec![
            r#"cups UPS1 -p '{"Credential1":"One","Credential2":"two"}'"#,
            r#"cups UPS2 -p '{"Credential3":"One","Credential4":"two"}'"#,
        ]
    );
    assert!(errors.is_empty());
}

#[test]
fn deploy_single_service_space() {
    let executor = RecordingExecutor::new();
    let mut errors = ErrorCollector::new();

    let outcomes = Deployer::new(&executor).deploy(&space_one(), NONE, &mut errors);

    assert_eq!(
        executor.command_lines(),
        vec![r#"cups UPS1 -p '{"Credential1":"One","Credential2":"two"}'"#]
    );
    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0].status, OutcomeStatus::Created);
}

#[test]
fn deploy_empty_space_issues_nothing() {
    let executor = RecordingExecutor::new();
    let mut errors = ErrorCollector::new();

    let outcomes = Deployer::new(&executor).deploy(&Space::new("Zero", Vec::new()), NONE, &mut errors);

    assert!(executor.command_lines().is_empty());
    assert!(outcomes.is_empty());
    assert!(errors.is_empty());
}

#[test]
fn deploy_route_service_and_syslog_flags() {
    let executor = RecordingExecutor::new();
    let mut errors = ErrorCollector::new();

    Deployer::new(&executor).deploy(&route_and_syslog_space(), NONE, &mut errors);

    assert_eq!(
        executor.command_lines(),
        vec!["cups UPS1 -r RouteService", "cups UPS2 -l Syslog"]
    );
}

#[test]
fn deploy_credentials_without_pairs_sends_empty_route_service() {
    let executor = RecordingExecutor::new();
    let mut errors = ErrorCollector::new();
    let space = Space::new(
        "Bare",
        vec![ServiceDescriptor::credentials("UPS1", Vec::<(&str, &str)>::new())],
    );

    let outcomes = Deployer::new(&executor).deploy(&space, NONE, &mut errors);

    assert_eq!(executor.command_lines(), vec!["cups UPS1 -r "]);
    assert_eq!(outcomes[0].status, OutcomeStatus::Created);
    assert!(errors.is_empty());
}

#[test]
fn deploy_only_requested_service() {
    let executor = RecordingExecutor::new();
    let mut errors = ErrorCollector::new();

    Deployer::new(&executor).deploy(&space_two(), &["UPS2"], &mut errors);

    assert_eq!(
        executor.command_lines(),
        vec![r#"cups UPS2 -p '{"Credential3":"One","Credential4":"two"}'"#]
    );
}

#[test]
fn deploy_follows_request_order() {
    let executor = RecordingExecutor::new();
    let mut errors = ErrorCollector::new();

    Deployer::new(&executor).deploy(&route_and_syslog_space(), &["UPS2", "UPS1"], &mut errors);

    assert_eq!(
        executor.command_lines(),
        vec!["cups UPS2 -l Syslog", "cups UPS1 -r RouteService"]
    );
}

#[test]
fn deploy_unknown_service_reports_not_found() {
    let executor = RecordingExecutor::new();
    let mut errors = ErrorCollector::new();

    let outcomes = Deployer::new(&executor).deploy(&space_two(), &["NonExistentUPS"], &mut errors);

    assert!(executor.command_lines().is_empty());
    assert!(outcomes.is_empty());
    assert_eq!(errors.len(), 1);
    let (message, error) = &errors.errors()[0];
    assert_eq!(message, NOT_FOUND_MESSAGE);
    assert!(matches!(error, DeployError::NotFound { name, .. } if name == "NonExistentUPS"));
}

#[test]
fn deploy_aborts_everything_when_one_name_is_missing() {
    let executor = RecordingExecutor::new();
    let mut errors = ErrorCollector::new();

    Deployer::new(&executor).deploy(&space_two(), &["UPS1", "NonExistentUPS"], &mut errors);

    assert!(executor.command_lines().is_empty());
    assert_eq!(errors.len(), 1);
}

#[test]
fn deploy_falls_back_to_update_when_create_fails() {
    let executor = RecordingExecutor::failing_creates();
    let mut errors = ErrorCollector::new();

    let outcomes = Deployer::new(&executor).deploy(&space_one(), NONE, &mut errors);

    assert_eq!(
        executor.command_lines(),
        vec![
            r#"cups UPS1 -p '{"Credential1":"One","Credential2":"two"}'"#,
            r#"uups UPS1 -p '{"Credential1":"One","Credential2":"two"}'"#,
        ]
    );
    assert!(errors.is_empty());
    assert_eq!(outcomes[0].status, OutcomeStatus::Updated);
}

#[test]
fn deploy_reports_once_when_create_and_update_fail() {
    let executor = RecordingExecutor::failing_everything();
    let mut errors = ErrorCollector::new();

    let outcomes = Deployer::new(&executor).deploy(&space_one(), NONE, &mut errors);

    assert_eq!(executor.command_lines().len(), 2);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.errors()[0].0, CREATE_UPDATE_MESSAGE);
    assert!(matches!(errors.errors()[0].1, DeployError::Execution(_)));
    assert_eq!(outcomes[0].status, OutcomeStatus::Failed);
}

#[test]
fn deploy_fallback_for_route_service_and_syslog() {
    let executor = RecordingExecutor::failing_creates();
    let mut errors = ErrorCollector::new();

    Deployer::new(&executor).deploy(&route_and_syslog_space(), NONE, &mut errors);

    assert_eq!(
        executor.command_lines(),
        vec![
            "cups UPS1 -r RouteService",
            "uups UPS1 -r RouteService",
            "cups UPS2 -l Syslog",
            "uups UPS2 -l Syslog",
        ]
    );
    assert!(errors.is_empty());
}

#[test]
fn deploy_continues_after_a_failed_service() {
    let executor = RecordingExecutor::failing_when(|cmd| cmd.service == "UPS1");
    let mut errors = ErrorCollector::new();

    let outcomes = Deployer::new(&executor).deploy(&route_and_syslog_space(), NONE, &mut errors);

    assert_eq!(
        executor.command_lines(),
        vec![
            "cups UPS1 -r RouteService",
            "uups UPS1 -r RouteService",
            "cups UPS2 -l Syslog",
        ]
    );
    assert_eq!(errors.len(), 1);
    let statuses: Vec<OutcomeStatus> = outcomes.iter().map(|o| o.status).collect();
    assert_eq!(statuses, vec![OutcomeStatus::Failed, OutcomeStatus::Created]);
}

#[test]
fn deploy_accepts_closure_sink() {
    let executor = RecordingExecutor::failing_everything();
    let mut messages = Vec::new();

    Deployer::new(&executor).deploy(
        &route_and_syslog_space(),
        NONE,
        &mut |message: &str, _err: DeployError| messages.push(message.to_string()),
    );

    assert_eq!(messages, vec![CREATE_UPDATE_MESSAGE, CREATE_UPDATE_MESSAGE]);
}

#[test]
fn resolve_targets_returns_all_without_request() {
    let space = space_two();

    let targets = resolve_targets(&space, NONE).unwrap();

    let names: Vec<&str> = targets.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["UPS1", "UPS2"]);
}

#[test]
fn resolve_targets_fails_on_first_missing_name() {
    let space = space_two();

    let err = resolve_targets(&space, &["Missing", "AlsoMissing"]).unwrap_err();

    assert!(matches!(err, DeployError::NotFound { name, .. } if name == "Missing"));
}
