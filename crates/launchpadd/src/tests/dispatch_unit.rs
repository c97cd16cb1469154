//! Unit tests for command dispatch against mocked providers.

use launchpad_types::{AuthResult, ErrorKind, Response};
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use crate::dispatch::{CommandRegistry, Dispatcher};
use crate::providers::{AuthError, LaunchError, UpdateError};
use crate::session::{Providers, Session};

use super::support::{MockAuth, MockLaunch, MockUpdate};

struct Mocks {
    auth: MockAuth,
    launch: MockLaunch,
    update: MockUpdate,
}

impl Mocks {
    fn providers(&self) -> Providers<'_> {
        Providers {
            auth: &self.auth,
            launch: &self.launch,
            update: &self.update,
        }
    }
}

#[fixture]
fn mocks() -> Mocks {
    Mocks {
        auth: MockAuth::new(),
        launch: MockLaunch::new(),
        update: MockUpdate::new(),
    }
}

#[fixture]
fn dispatcher() -> Dispatcher {
    Dispatcher::new(CommandRegistry::with_builtins().expect("builtin registry"))
}

fn identity(username: &str) -> AuthResult {
    AuthResult::new(
        username,
        format!("uuid-{username}"),
        format!("token-{username}"),
        "client-1",
    )
}

fn authenticate_frame(username: &str) -> String {
    json!({
        "command": "authenticate",
        "params": {"username": username, "password": "secret", "clientToken": "client-1"},
    })
    .to_string()
}

fn launch_frame(version: &str) -> String {
    json!({
        "command": "launch",
        "params": {
            "name": "Survival",
            "version": version,
            "params": ["--fullscreen"],
            "vmParams": ["-Xmx2G"],
            "tweaks": ["forge"],
        },
    })
    .to_string()
}

fn error_kind(response: &Response) -> Option<ErrorKind> {
    response.error_kind()
}

#[rstest]
fn authenticate_returns_and_stores_identity(mut mocks: Mocks, dispatcher: Dispatcher) {
    mocks
        .auth
        .expect_authenticate()
        .withf(|username, password, client_token| {
            username == "steve" && password == "secret" && client_token == "client-1"
        })
        .once()
        .returning(|username, _, _| Ok(identity(username)));
    let mut session = Session::new(mocks.providers());

    let response = dispatcher.dispatch(&mut session, &authenticate_frame("steve"));

    assert_eq!(
        response,
        Response::Success(json!({
            "username": "steve",
            "uuid": "uuid-steve",
            "accessToken": "token-steve",
            "clientToken": "client-1",
        }))
    );
    assert_eq!(session.auth_result(), Some(&identity("steve")));
}

#[rstest]
fn failed_authenticate_keeps_previous_identity(mut mocks: Mocks, dispatcher: Dispatcher) {
    let mut calls = 0;
    mocks
        .auth
        .expect_authenticate()
        .times(2)
        .returning(move |username, _, _| {
            calls += 1;
            if calls == 1 {
                Ok(identity(username))
            } else {
                Err(AuthError::Rejected {
                    message: String::from("invalid credentials"),
                })
            }
        });
    let mut session = Session::new(mocks.providers());

    dispatcher.dispatch(&mut session, &authenticate_frame("alex"));
    let response = dispatcher.dispatch(&mut session, &authenticate_frame("mallory"));

    assert_eq!(error_kind(&response), Some(ErrorKind::AuthError));
    assert_eq!(session.auth_result(), Some(&identity("alex")));
}

#[rstest]
fn repeated_authenticate_replaces_identity(mut mocks: Mocks, dispatcher: Dispatcher) {
    mocks
        .auth
        .expect_authenticate()
        .times(2)
        .returning(|username, _, _| Ok(identity(username)));
    let mut session = Session::new(mocks.providers());

    dispatcher.dispatch(&mut session, &authenticate_frame("alex"));
    dispatcher.dispatch(&mut session, &authenticate_frame("steve"));

    assert_eq!(session.auth_result(), Some(&identity("steve")));
}

#[rstest]
#[case::missing_password(json!({"username": "u", "clientToken": "c"}))]
#[case::missing_client_token(json!({"username": "u", "password": "p"}))]
#[case::numeric_username(json!({"username": 7, "password": "p", "clientToken": "c"}))]
fn authenticate_rejects_bad_params_without_calling_provider(
    mocks: Mocks,
    dispatcher: Dispatcher,
    #[case] params: Value,
) {
    let mut session = Session::new(mocks.providers());
    let frame = json!({"command": "authenticate", "params": params}).to_string();

    let response = dispatcher.dispatch(&mut session, &frame);

    assert_eq!(error_kind(&response), Some(ErrorKind::ProtocolError));
    assert!(session.auth_result().is_none());
}

#[rstest]
#[case::valid(launch_frame("1.12.2"))]
#[case::missing_params(json!({"command": "launch", "params": {}}).to_string())]
fn launch_without_authentication_is_refused_first(
    mocks: Mocks,
    dispatcher: Dispatcher,
    #[case] frame: String,
) {
    let mut session = Session::new(mocks.providers());

    let response = dispatcher.dispatch(&mut session, &frame);

    assert_eq!(error_kind(&response), Some(ErrorKind::NotAuthenticated));
}

#[rstest]
fn launch_passes_config_and_identity_to_provider(mut mocks: Mocks, dispatcher: Dispatcher) {
    mocks
        .auth
        .expect_authenticate()
        .returning(|username, _, _| Ok(identity(username)));
    mocks
        .launch
        .expect_launch()
        .withf(|config, auth| {
            config.name() == "Survival"
                && config.version() == "1.12.2"
                && config.game_params() == ["--fullscreen"]
                && config.vm_params() == ["-Xmx2G"]
                && config.tweaks() == ["forge"]
                && auth.username() == "steve"
        })
        .once()
        .returning(|_, _| Ok(()));
    let mut session = Session::new(mocks.providers());

    dispatcher.dispatch(&mut session, &authenticate_frame("steve"));
    let response = dispatcher.dispatch(&mut session, &launch_frame("1.12.2"));

    assert_eq!(response, Response::Success(Response::success_marker()));
}

#[rstest]
#[case::missing_vm_params(json!({"name": "n", "version": "1.8", "params": [], "tweaks": []}))]
#[case::tweak_not_string(
    json!({"name": "n", "version": "1.8", "params": [], "vmParams": [], "tweaks": [1]})
)]
#[case::params_not_array(
    json!({"name": "n", "version": "1.8", "params": "x", "vmParams": [], "tweaks": []})
)]
#[case::missing_version(json!({"name": "n", "params": [], "vmParams": [], "tweaks": []}))]
fn launch_rejects_bad_params_after_authentication(
    mut mocks: Mocks,
    dispatcher: Dispatcher,
    #[case] params: Value,
) {
    mocks
        .auth
        .expect_authenticate()
        .returning(|username, _, _| Ok(identity(username)));
    let mut session = Session::new(mocks.providers());
    dispatcher.dispatch(&mut session, &authenticate_frame("steve"));
    let frame = json!({"command": "launch", "params": params}).to_string();

    let response = dispatcher.dispatch(&mut session, &frame);

    assert_eq!(error_kind(&response), Some(ErrorKind::ProtocolError));
}

#[rstest]
fn launch_failure_maps_to_launch_error(mut mocks: Mocks, dispatcher: Dispatcher) {
    mocks
        .auth
        .expect_authenticate()
        .returning(|username, _, _| Ok(identity(username)));
    mocks
        .launch
        .expect_launch()
        .returning(|config, _| {
            Err(LaunchError::InvalidVersion {
                version: config.version().to_owned(),
            })
        });
    let mut session = Session::new(mocks.providers());
    dispatcher.dispatch(&mut session, &authenticate_frame("steve"));

    let response = dispatcher.dispatch(&mut session, &launch_frame("snapshot"));

    assert_eq!(error_kind(&response), Some(ErrorKind::LaunchError));
}

#[rstest]
fn update_forwards_params_and_returns_marker(mut mocks: Mocks, dispatcher: Dispatcher) {
    mocks
        .update
        .expect_update()
        .withf(|params| params.get("channel") == Some(&json!("stable")))
        .once()
        .returning(|_| Ok(()));
    let mut session = Session::new(mocks.providers());
    let frame = json!({"command": "update", "params": {"channel": "stable"}}).to_string();

    let response = dispatcher.dispatch(&mut session, &frame);

    assert_eq!(response, Response::Success(Response::success_marker()));
}

#[rstest]
fn update_failure_maps_to_update_error(mut mocks: Mocks, dispatcher: Dispatcher) {
    mocks.update.expect_update().returning(|_| {
        Err(UpdateError::Failed {
            message: String::from("mirror offline"),
        })
    });
    let mut session = Session::new(mocks.providers());
    let frame = json!({"command": "update", "params": {}}).to_string();

    let response = dispatcher.dispatch(&mut session, &frame);

    assert_eq!(
        response,
        Response::error(ErrorKind::UpdateError, "update failed: mirror offline")
    );
}

#[rstest]
#[case::unknown("fly")]
#[case::wrong_case("Update")]
#[case::prefix("auth")]
#[case::empty("")]
#[case::blank("   ")]
fn unregistered_identifiers_are_unknown(
    mocks: Mocks,
    dispatcher: Dispatcher,
    #[case] command: &str,
) {
    let mut session = Session::new(mocks.providers());
    let frame = json!({"command": command, "params": {}}).to_string();

    let response = dispatcher.dispatch(&mut session, &frame);

    assert_eq!(
        response,
        Response::error(
            ErrorKind::UnknownCommand,
            format!("unknown command '{command}'")
        )
    );
}

#[rstest]
#[case::not_json(b"not json".as_slice())]
#[case::missing_params(br#"{"command":"update"}"#.as_slice())]
#[case::invalid_utf8(b"{\"command\":\"up\xffdate\",\"params\":{}}".as_slice())]
fn malformed_frames_are_protocol_errors(
    mocks: Mocks,
    dispatcher: Dispatcher,
    #[case] frame: &[u8],
) {
    let mut session = Session::new(mocks.providers());

    let response = dispatcher.dispatch(&mut session, frame);

    assert_eq!(error_kind(&response), Some(ErrorKind::ProtocolError));
}

#[rstest]
fn dispatch_frame_encodes_wire_json(mocks: Mocks, dispatcher: Dispatcher) {
    let mut session = Session::new(mocks.providers());

    let encoded = dispatcher.dispatch_frame(&mut session, r#"{"command":"fly","params":{}}"#);

    assert_eq!(
        encoded,
        r#"{"errorKind":"UnknownCommand","message":"unknown command 'fly'"}"#
    );
}
