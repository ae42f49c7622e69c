mod common;

use common::pair;
use signal_dashboard_wasm::domain::errors::InfrastructureError;
use signal_dashboard_wasm::domain::market_data::{
    CandlePoint, DatabaseState, NewsItem, Pair, Sentiment, Signal, SignalKind, StatusReport, Timestamp,
};
use signal_dashboard_wasm::infrastructure::http::{decode, decode_list};

const SIGNALS: &str = r#"[
    {
        "pair": "EURUSD",
        "signal": "BUY",
        "entry_price": 1.0845,
        "stop_loss": 1.08,
        "take_profit": 1.095,
        "confidence": 82,
        "reason": "Breakout above resistance",
        "time": "2024-05-01T12:00:00Z"
    },
    {
        "pair": "XAUUSD",
        "signal": "HOLD",
        "entry_price": null,
        "stop_loss": null,
        "take_profit": null,
        "confidence": null,
        "reason": null,
        "time": 1714564800000
    }
]"#;

#[test]
fn decodes_signal_list_with_nulls_and_unknown_kind() {
    let signals: Vec<Signal> = decode(SIGNALS).unwrap();
    assert_eq!(signals.len(), 2);

    let eurusd = &signals[0];
    assert_eq!(eurusd.pair, pair("EURUSD"));
    assert_eq!(eurusd.signal, SignalKind::Buy);
    assert_eq!(eurusd.confidence, 82.0);
    assert!(eurusd.is_high_confidence());

    let gold = &signals[1];
    assert_eq!(gold.signal, SignalKind::Wait);
    assert_eq!(gold.entry_price, 0.0);
    assert_eq!(gold.reason, "");
    assert_eq!(gold.time, Timestamp::from_millis(1_714_564_800_000.0));
}

#[test]
fn signal_kind_is_case_insensitive() {
    let signal: Signal = decode(r#"{"pair":"GBPUSD","signal":"sell"}"#).unwrap();
    assert_eq!(signal.signal, SignalKind::Sell);
    assert!(signal.signal.is_actionable());
    assert!(signal.time.is_empty());
}

#[test]
fn decodes_news_sentiment() {
    let news: Vec<NewsItem> = decode(
        r#"[
            {"title":"Dollar rallies","source":"Bloomberg","date":"2024-05-01T09:00:00Z","sentiment_score":0.42},
            {"title":"Stocks slump","source":null,"date":null,"sentiment_score":-0.3},
            {"title":"Markets flat"}
        ]"#,
    )
    .unwrap();

    let sentiments: Vec<Sentiment> = news.iter().map(NewsItem::sentiment).collect();
    assert_eq!(sentiments, vec![Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral]);
    assert_eq!(news[1].source, "");
}

#[test]
fn status_accepts_label_or_flag() {
    let labelled: StatusReport = decode(r#"{"status":"running","mongodb":"connected"}"#).unwrap();
    assert!(labelled.is_running());
    assert!(labelled.database_connected());

    let flagged: StatusReport = decode(r#"{"status":"running","mongodb":false}"#).unwrap();
    assert_eq!(flagged.mongodb, Some(DatabaseState::Flag(false)));
    assert!(!flagged.database_connected());

    let stopped: StatusReport = decode(r#"{"status":"stopped"}"#).unwrap();
    assert!(!stopped.is_running());
    assert!(!stopped.database_connected());
}

#[test]
fn null_list_decodes_as_absent() {
    let list: Option<Vec<CandlePoint>> = decode("null").unwrap();
    assert!(list.is_none());
}

#[test]
fn candle_points_ignore_extra_fields() {
    let points: Vec<CandlePoint> =
        decode(r#"[{"time":"2024-05-01T12:00:00Z","open":1.0,"high":1.2,"low":0.9,"close":1.1,"volume":10}]"#)
            .unwrap();
    assert_eq!(points, vec![CandlePoint::new(Timestamp::from("2024-05-01T12:00:00Z"), 1.1)]);
}

#[test]
fn malformed_body_is_a_decode_error() {
    let result: Result<Vec<Signal>, _> = decode("<html>502 Bad Gateway</html>");
    assert!(matches!(result, Err(InfrastructureError::Decode(_))));
}

#[test]
fn pair_is_trimmed_and_must_not_be_empty() {
    assert_eq!(Pair::new(" EURUSD ".to_string()).unwrap().value(), "EURUSD");
    assert!(Pair::new("   ".to_string()).is_err());
    assert_eq!(pair("gbpjpy").to_string(), "gbpjpy");
    assert_eq!(" USDJPY".parse::<Pair>().unwrap(), pair("USDJPY"));
}

#[test]
fn wire_pair_goes_through_validation() {
    let trimmed: Pair = decode(r#"" EURUSD ""#).unwrap();
    assert_eq!(trimmed.value(), "EURUSD");

    assert!(matches!(decode::<Pair>(r#""""#), Err(InfrastructureError::Decode(_))));
    assert!(decode::<Signal>(r#"{"pair":"  ","signal":"BUY"}"#).is_err());
    assert_eq!(serde_json::to_string(&pair("EURUSD")).unwrap(), r#""EURUSD""#);
}

#[test]
fn null_title_decodes_as_empty() {
    let news: Vec<NewsItem> = decode(r#"[{"title":"Yen firms"},{"title":null,"sentiment_score":0.2}]"#).unwrap();
    assert_eq!(news.len(), 2);
    assert_eq!(news[1].title, "");
    assert_eq!(news[1].sentiment(), Sentiment::Positive);
}

#[test]
fn list_skips_rows_that_fail_to_decode() {
    let signals: Vec<Signal> = decode_list(
        r#"[
            {"pair":"","signal":"BUY"},
            {"pair":null},
            {"pair":"EURUSD","signal":"SELL","confidence":71},
            "not an object"
        ]"#,
    )
    .unwrap();

    assert_eq!(signals.len(), 1);
    assert_eq!(signals[0].pair, pair("EURUSD"));
    assert_eq!(signals[0].signal, SignalKind::Sell);
}

#[test]
fn list_null_body_is_empty_and_garbage_is_an_error() {
    assert!(decode_list::<NewsItem>("null").unwrap().is_empty());
    assert!(matches!(decode_list::<NewsItem>(r#"{"title":"x"}"#), Err(InfrastructureError::Decode(_))));
}
