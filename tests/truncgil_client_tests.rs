//! Truncgil client against a local canned HTTP server.

mod support;

use std::sync::Arc;
use std::time::Duration;

use altin::adapter::outbound::truncgil::TruncgilClient;
use altin::application::{CycleOutcome, Poller};
use altin::domain::{Instrument, MessageTemplate};
use altin::error::{Error, FetchError};
use altin::port::QuoteSource;
use rust_decimal_macros::dec;

use support::http::serve_once;
use support::publisher::RecordingPublisher;
use support::quotes::TODAY_JSON;

const NO_DELAY: Duration = Duration::ZERO;

#[tokio::test]
async fn ok_response_is_mapped_to_record() {
    let url = serve_once("200 OK", TODAY_JSON, NO_DELAY).await;
    let client = TruncgilClient::new(url, Duration::from_secs(5));

    let record = client.fetch().await.expect("fetch succeeds");

    assert_eq!(record.len(), 4);
    assert_eq!(record.timestamp(), Some("2026-10-18 14:00:02"));
    assert_eq!(record.quote(Instrument::Gram).buy, Some(dec!(3100.25)));
    assert_eq!(record.quote(Instrument::Ata).sell, Some(dec!(21500.75)));
    assert_eq!(record.quote(Instrument::Quarter).change_percent, Some(dec!(-0.12)));
}

#[tokio::test]
async fn non_200_status_is_a_fetch_error() {
    let url = serve_once("503 Service Unavailable", "{}", NO_DELAY).await;
    let client = TruncgilClient::new(url, Duration::from_secs(5));

    let result = client.fetch().await;

    assert!(matches!(
        result,
        Err(Error::Fetch(FetchError::Status { status: 503, .. }))
    ));
}

#[tokio::test]
async fn non_json_body_is_a_decode_error() {
    let url = serve_once("200 OK", "<html>maintenance</html>", NO_DELAY).await;
    let client = TruncgilClient::new(url, Duration::from_secs(5));

    let result = client.fetch().await;

    assert!(matches!(result, Err(Error::Fetch(FetchError::Decode(_)))));
}

#[tokio::test]
async fn partial_document_degrades_instead_of_failing() {
    let url = serve_once("200 OK", r#"{"GRA": {"Buying": "3.100,00"}}"#, NO_DELAY).await;
    let client = TruncgilClient::new(url, Duration::from_secs(5));

    let record = client.fetch().await.expect("partial data still fetches");

    assert_eq!(record.len(), 1);
    assert_eq!(record.quote(Instrument::Gram).buy, Some(dec!(3100.00)));
    assert!(record.quote(Instrument::Full).is_empty());
}

#[tokio::test]
async fn empty_object_is_not_a_price_list() {
    let url = serve_once("200 OK", "{}", NO_DELAY).await;
    let client = TruncgilClient::new(url, Duration::from_secs(5));

    let result = client.fetch().await;

    assert!(matches!(result, Err(Error::Fetch(FetchError::Empty { .. }))));
}

#[tokio::test]
async fn maintenance_body_without_gold_keys_is_a_fetch_error() {
    let url = serve_once("200 OK", r#"{"error":"maintenance"}"#, NO_DELAY).await;
    let client = TruncgilClient::new(url, Duration::from_secs(5));

    let result = client.fetch().await;

    match result {
        Err(Error::Fetch(err @ FetchError::Empty { .. })) => {
            assert!(err.to_string().contains("/v4/today.json"));
        }
        other => panic!("expected empty-feed error, got {other:?}"),
    }
}

#[tokio::test]
async fn empty_feed_skips_the_publisher() {
    let url = serve_once("200 OK", "{}", NO_DELAY).await;
    let source = TruncgilClient::new(url, Duration::from_secs(5));
    let publisher = RecordingPublisher::new();
    let poller = Poller::new(
        Arc::new(source),
        Arc::new(publisher.clone()),
        MessageTemplate::default(),
        Duration::from_secs(3600),
    );

    let outcome = poller.run_cycle().await;

    assert!(
        matches!(outcome, CycleOutcome::FetchFailed(ref reason) if reason.contains("no gold quotes"))
    );
    assert_eq!(publisher.len(), 0);
}

#[tokio::test]
async fn json_numbers_keep_their_decimal_point() {
    let url = serve_once(
        "200 OK",
        r#"{"GRA": {"Buying": 1.125, "Selling": 3100.5, "Change": -0.45}}"#,
        NO_DELAY,
    )
    .await;
    let client = TruncgilClient::new(url, Duration::from_secs(5));

    let record = client.fetch().await.expect("numeric document fetches");

    let gram = record.quote(Instrument::Gram);
    assert_eq!(gram.buy, Some(dec!(1.125)));
    assert_eq!(gram.sell, Some(dec!(3100.5)));
    assert_eq!(gram.change_percent, Some(dec!(-0.45)));
}

#[tokio::test]
async fn slow_server_hits_the_timeout() {
    let url = serve_once("200 OK", TODAY_JSON, Duration::from_secs(5)).await;
    let client = TruncgilClient::new(url, Duration::from_millis(200));

    let result = client.fetch().await;

    match result {
        Err(Error::Fetch(FetchError::Http(err))) => assert!(err.is_timeout()),
        other => panic!("expected timeout, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_host_is_a_fetch_error() {
    let client = TruncgilClient::new("http://127.0.0.1:9/today.json", Duration::from_secs(2));

    let result = client.fetch().await;

    assert!(matches!(result, Err(Error::Fetch(FetchError::Http(_)))));
}
