//! Interactive session driven by scripted input.

use alloy::primitives::TxHash;
use std::sync::Arc;

use dataset_access::console::{Command, Session};
use dataset_access::controller::AccessStatus;
use dataset_access::Shutdown;

mod common;
use common::{loaded_controller, user};

async fn run_script(session: &Session, script: &str) -> String {
    let shutdown = Shutdown::new();
    let mut output = Vec::new();
    session
        .run(script.as_bytes(), &mut output, shutdown.subscribe())
        .await
        .unwrap();
    String::from_utf8(output).unwrap()
}

#[tokio::test]
async fn test_select_and_request() {
    let (controller, _contract) = loaded_controller().await;
    let controller = Arc::new(controller);
    let session = Session::new(controller.clone());

    let output = run_script(&session, "select 2\nrequest\nquit\n").await;

    assert!(output.contains("Medical Data Access System"));
    assert!(output.contains(&format!("Connected Account: {}", user())));
    assert!(output.contains("Price: 0.02 ETH per day"));
    assert!(output.contains(&format!(
        "Access granted! Your access token is: {}",
        TxHash::repeat_byte(0xab)
    )));
    assert_eq!(controller.state().access_status, Some(AccessStatus::Granted));
}

#[tokio::test]
async fn test_validation_notices() {
    let (controller, _contract) = loaded_controller().await;
    let session = Session::new(Arc::new(controller));

    let output = run_script(&session, "request\ncheck\nselect 7\nbogus\n").await;

    assert_eq!(output.matches("Please select a dataset first.").count(), 2);
    assert!(output.contains("No dataset with id 7."));
    assert!(output.contains("unknown command 'bogus'"));
}

#[tokio::test]
async fn test_check_shows_status() {
    let (controller, contract) = loaded_controller().await;
    contract.grant(1, user());
    let session = Session::new(Arc::new(controller));

    let output = run_script(&session, "select 1\ncheck\n").await;
    assert!(output.contains("Access Status: Access Granted"));
    // Checking never produces a token
    assert!(!output.contains("Your Access Token"));
}

#[tokio::test]
async fn test_shutdown_ends_session() {
    let (controller, _contract) = loaded_controller().await;
    let session = Session::new(Arc::new(controller));
    let shutdown = Shutdown::new();
    // Interrupted before the session subscribed
    shutdown.trigger();
    let receiver = shutdown.subscribe();

    // Input never ends; only the signal can stop the loop
    let (reader, _writer) = tokio::io::duplex(64);
    let mut output = Vec::new();
    session
        .run(tokio::io::BufReader::new(reader), &mut output, receiver)
        .await
        .unwrap();

    assert!(String::from_utf8(output).unwrap().contains("Medical Data Access System"));
}

#[tokio::test]
async fn test_execute_help_and_reload() {
    let (controller, _contract) = loaded_controller().await;
    let session = Session::new(Arc::new(controller));

    let help = session.execute(Command::Help).await.unwrap();
    assert!(help.contains("select <id>"));

    let reload = session.execute(Command::Reload).await.unwrap();
    assert_eq!(reload, "Loaded 3 datasets.");
    assert!(session.execute(Command::Show).await.is_none());
}
