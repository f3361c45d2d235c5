mod common;

use blockfrost_sdk::{
    BlockfrostClient, ErrorBody, GuardState, HandlerGuard, Pagination, RequestBody, SdkError,
    pagination::Order,
};
use common::{
    TEST_PROJECT_ID, initialize_logging,
    mock_blockfrost::{BLOCK_HASH, MockBlockfrost, SUBMITTED_TX_ID},
    test_config,
};
use http::StatusCode;
use pretty_assertions::assert_eq;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

fn client_for(mock: &MockBlockfrost) -> BlockfrostClient {
    let guard = HandlerGuard::new();

    BlockfrostClient::with_guard(&test_config(&mock.url), &guard).unwrap()
}

#[tokio::test]
async fn test_latest_block_carries_project_id() {
    initialize_logging();
    let mock = MockBlockfrost::start().await;
    let client = client_for(&mock);

    let block = client
        .blocks()
        .latest(&CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(block.hash, BLOCK_HASH);

    let request = mock.last_request();
    assert_eq!(request.path, "/blocks/latest");
    assert_eq!(request.project_id.as_deref(), Some(TEST_PROJECT_ID));
}

#[tokio::test]
async fn test_every_request_is_authenticated() {
    initialize_logging();
    let mock = MockBlockfrost::start().await;
    let client = client_for(&mock);
    let cancel = CancellationToken::new();

    client.health().root(&cancel).await.unwrap();
    let health = client.health().health(&cancel).await.unwrap();
    client
        .blocks()
        .txs(
            BLOCK_HASH,
            &Pagination::default().count(5).order(Order::Desc),
            &cancel,
        )
        .await
        .unwrap();

    assert!(health.is_healthy);

    let requests = mock.requests();
    assert_eq!(requests.len(), 3);
    assert!(
        requests
            .iter()
            .all(|r| r.project_id.as_deref() == Some(TEST_PROJECT_ID))
    );
}

#[tokio::test]
async fn test_not_found_is_structured() {
    initialize_logging();
    let mock = MockBlockfrost::start().await;
    let client = client_for(&mock);

    let err = client
        .blocks()
        .by_hash_or_number("12345", &CancellationToken::new())
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    match err {
        SdkError::NotFound(ErrorBody::Structured(body)) => {
            assert_eq!(body.status_code, 404);
            assert_eq!(body.error, "Not Found");
            assert_eq!(body.message, "The requested component has not been found.");
        },
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_unmapped_status_keeps_raw_body() {
    initialize_logging();
    let mock = MockBlockfrost::start().await;
    let client = client_for(&mock);

    let err = client
        .transactions()
        .by_hash(SUBMITTED_TX_ID, &CancellationToken::new())
        .await
        .unwrap_err();

    match err {
        SdkError::Api {
            status,
            body: ErrorBody::Raw(text),
        } => {
            assert_eq!(status, StatusCode::BAD_GATEWAY);
            assert!(text.contains("upstream unavailable"));
        },
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_submit_posts_cbor() {
    initialize_logging();
    let mock = MockBlockfrost::start().await;
    let client = client_for(&mock);
    let tx = vec![0x84, 0xa4, 0x00, 0x81];

    let tx_id = client
        .transactions()
        .submit(RequestBody::cbor(tx.clone()), &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(tx_id, SUBMITTED_TX_ID);

    let request = mock.last_request();
    assert_eq!(request.path, "/tx/submit");
    assert_eq!(request.content_type.as_deref(), Some("application/cbor"));
    assert_eq!(request.body, tx);
    assert_eq!(request.project_id.as_deref(), Some(TEST_PROJECT_ID));
}

#[tokio::test]
async fn test_empty_submit_is_not_sent() {
    initialize_logging();
    let mock = MockBlockfrost::start().await;
    let client = client_for(&mock);

    let err = client
        .transactions()
        .submit(RequestBody::cbor(Vec::new()), &CancellationToken::new())
        .await
        .unwrap_err();

    assert!(matches!(err, SdkError::InvalidArgument(_)));
    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn test_cancelled_token_stops_dispatch() {
    initialize_logging();
    let mock = MockBlockfrost::start().await;
    let client = client_for(&mock);
    let cancel = CancellationToken::new();
    cancel.cancel();

    let err = client.blocks().latest(&cancel).await.unwrap_err();

    assert!(matches!(err, SdkError::Cancelled));
    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn test_unreachable_host_is_transport_error() {
    initialize_logging();
    let guard = HandlerGuard::new();
    let config = test_config(&MockBlockfrost::unreachable())
        .with_request_timeout(Duration::from_secs(2));
    let client = BlockfrostClient::with_guard(&config, &guard).unwrap();

    let err = client
        .blocks()
        .latest(&CancellationToken::new())
        .await
        .unwrap_err();

    assert!(matches!(err, SdkError::Transport(_)));
}

#[tokio::test]
async fn test_second_client_on_same_guard_is_rejected() {
    initialize_logging();
    let mock = MockBlockfrost::start().await;
    let guard = HandlerGuard::new();
    let config = test_config(&mock.url);

    let first = BlockfrostClient::with_guard(&config, &guard);
    let second = BlockfrostClient::with_guard(&config, &guard);

    assert!(first.is_ok());
    assert!(matches!(second, Err(SdkError::Configuration(_))));
    assert_eq!(guard.state(), GuardState::Bound);
    assert_eq!(guard.attempts(), 2);
}
