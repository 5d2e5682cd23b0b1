mod common;

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use common::{ScriptedTransport, api_key, init_logger};
use stock_common::{HistoricalPoint, Resolution, TimeRange};
use stock_fetcher::HistoricalClient;
use stock_fetcher::provider::{AlphaVantageProvider, FinnhubProvider};

fn finnhub_client(transport: &Arc<ScriptedTransport>) -> HistoricalClient {
    HistoricalClient::new(Arc::new(FinnhubProvider::new(transport.clone(), api_key())))
}

#[test]
fn ok_series_pairs_timestamps_and_closes_in_order() {
    let transport = ScriptedTransport::new()
        .reply(r#"{"s":"ok","t":[100,200,300],"c":[10.0,20.0,30.0],"o":[1,2,3]}"#);

    let points = finnhub_client(&transport).get_historical_data("aapl", Resolution::Daily, 0, 400);

    assert_eq!(
        points,
        vec![
            HistoricalPoint::new(100, 10.0),
            HistoricalPoint::new(200, 20.0),
            HistoricalPoint::new(300, 30.0),
        ]
    );
    let call = &transport.calls()[0];
    assert!(call.url.ends_with("/stock/candle"));
    assert_eq!(call.param("symbol"), Some("AAPL"));
    assert_eq!(call.param("resolution"), Some("D"));
    assert_eq!(call.param("from"), Some("0"));
    assert_eq!(call.param("to"), Some("400"));
}

#[test]
fn non_ok_status_returns_empty() {
    init_logger();
    let transport = ScriptedTransport::new().reply(r#"{"s":"no_data"}"#);

    let points = finnhub_client(&transport).get_historical_data("AAPL", Resolution::Weekly, 0, 1);

    assert!(points.is_empty());
}

#[test]
fn transport_and_decode_failures_return_empty() {
    init_logger();
    let transport = ScriptedTransport::new().fail(403).reply("<html>oops</html>");
    let client = finnhub_client(&transport);

    assert!(client.get_historical_data("AAPL", Resolution::Daily, 0, 1).is_empty());
    assert!(client.get_historical_data("AAPL", Resolution::Daily, 0, 1).is_empty());
}

#[test]
fn mismatched_arrays_are_truncated_to_the_shorter() {
    init_logger();
    let transport =
        ScriptedTransport::new().reply(r#"{"s":"ok","t":[100,200,300],"c":[10.0,20.0]}"#);

    let points = finnhub_client(&transport).get_historical_data("AAPL", Resolution::Daily, 0, 400);

    assert_eq!(
        points,
        vec![HistoricalPoint::new(100, 10.0), HistoricalPoint::new(200, 20.0)]
    );
}

#[test]
fn provider_without_time_series_returns_empty_without_calling_out() {
    init_logger();
    let transport = ScriptedTransport::new();
    let provider = AlphaVantageProvider::new(transport.clone(), api_key());
    let client = HistoricalClient::new(Arc::new(provider));

    assert!(client.get_historical_data("IBM", Resolution::Daily, 0, 1).is_empty());
    assert!(transport.calls().is_empty());
}

#[test]
fn range_helper_derives_window_and_resolution() {
    let transport = ScriptedTransport::new().reply(r#"{"s":"ok","t":[],"c":[]}"#);
    let now = Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap();

    let points = finnhub_client(&transport).get_history_for_range("nvda", TimeRange::OneWeek, now);

    assert!(points.is_empty());
    let call = &transport.calls()[0];
    let week_ago = Utc.with_ymd_and_hms(2024, 6, 8, 0, 0, 0).unwrap().timestamp();
    assert_eq!(call.param("resolution"), Some("60"));
    assert_eq!(call.param("from"), Some(week_ago.to_string().as_str()));
    assert_eq!(call.param("to"), Some(now.timestamp().to_string().as_str()));
}
