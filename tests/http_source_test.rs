//! `HttpSource` and `Poller` against a local HTTP server.

mod common;

use std::time::Duration;

use rust_decimal_macros::dec;
use tokio::sync::mpsc;
use tokio_test::{assert_err, assert_ok};

use stockpulse::StockPulseError;
use stockpulse::models::RankingsSnapshot;
use stockpulse::poller::{HttpSource, Poller, RankingSource};
use stockpulse::tui::{App, Message, update};

use common::{SAMPLE_BODY, serve, unused_url};

#[tokio::test]
async fn fetches_and_decodes_snapshot() {
    let mut server = serve(vec![(200, SAMPLE_BODY)]).await;
    let source = assert_ok!(HttpSource::new(server.url.as_str()));

    let snapshot = assert_ok!(source.fetch().await);

    assert_eq!(snapshot.top.len(), 2);
    assert_eq!(snapshot.top[0].ticker, "AAA");
    assert_eq!(snapshot.top[0].change, dec!(5.1));
    assert_eq!(snapshot.bottom[0].ticker, "ZZZ");
    assert_eq!(snapshot.bottom[0].change, dec!(-3.25));

    let head = server.requests.recv().await.unwrap();
    assert!(head.starts_with("GET /rankings HTTP/1.1\r\n"), "{head}");
}

#[tokio::test]
async fn non_success_status_is_http_error() {
    let server = serve(vec![(500, r#"{"detail":"boom"}"#)]).await;
    let source = HttpSource::new(server.url.as_str()).unwrap();

    let err = assert_err!(source.fetch().await);

    assert!(matches!(err, StockPulseError::Http(_)), "{err}");
}

#[tokio::test]
async fn malformed_body_is_json_error() {
    let server = serve(vec![(200, r#"{"top": [{"ticker": "AAA""#)]).await;
    let source = HttpSource::new(server.url.as_str()).unwrap();

    let err = assert_err!(source.fetch().await);

    assert!(matches!(err, StockPulseError::Json(_)), "{err}");
}

#[tokio::test]
async fn wrong_shape_is_json_error() {
    let server = serve(vec![(200, r#"{"gainers": [], "losers": []}"#)]).await;
    let source = HttpSource::new(server.url.as_str()).unwrap();

    let err = assert_err!(source.fetch().await);

    assert!(matches!(err, StockPulseError::Json(_)), "{err}");
}

#[tokio::test]
async fn connection_refused_is_http_error() {
    let source = HttpSource::new(unused_url().await).unwrap();

    let err = assert_err!(source.fetch().await);

    assert!(matches!(err, StockPulseError::Http(_)), "{err}");
}

#[tokio::test]
async fn malformed_tick_keeps_previous_rankings() {
    let server = serve(vec![(200, SAMPLE_BODY), (200, "not json")]).await;
    let source = HttpSource::new(server.url.as_str()).unwrap();
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut app = App::new("http", Duration::from_millis(50));

    let mut poller = Poller::start(source, Duration::from_millis(50), tx);

    let first = tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .unwrap()
        .unwrap();
    assert!(matches!(first, Message::Rankings(_)));
    update(&mut app, first);
    let before: RankingsSnapshot = app.snapshot();

    let second = tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .unwrap()
        .unwrap();
    assert!(matches!(second, Message::RankingsFailed(_)));
    update(&mut app, second);

    poller.stop();

    assert_eq!(app.snapshot(), before);
    assert_eq!(app.failure_count, 1);
    assert!(app.last_error.is_some());
}
