//! Plain-text rendering of quotes and price history.
use chrono::{DateTime, Local, TimeZone};
use stock_common::{HistoricalPoint, Quote, TimeRange};

const TIMESTAMP_FORMAT: &str = "%b %d, %Y %H:%M:%S";

/// Quote table with one row per quote, in the given order.
pub fn quote_table(quotes: &[Quote]) -> String {
    let mut lines = vec![format!(
        "{:<8} {:>12} {:>10} {:>10}",
        "Symbol", "Price", "Change", "Change %"
    )];
    for quote in quotes {
        let trend = if quote.is_unknown() {
            ' '
        } else if quote.is_negative() {
            '▼'
        } else {
            '▲'
        };
        lines.push(format!(
            "{:<8} {:>12} {:>10} {:>10} {}",
            quote.symbol,
            format!("${}", quote.price),
            quote.change,
            quote.change_percent,
            trend
        ));
    }
    lines.join("\n")
}

/// `Last updated: Oct 16, 2026 22:33:01`
pub fn last_updated<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("Last updated: {}", at.format(TIMESTAMP_FORMAT))
}

/// One-paragraph summary of a series: span, first/last close, low/high.
pub fn history_summary(symbol: &str, range: TimeRange, points: &[HistoricalPoint]) -> String {
    let title = format!("{} Stock Price ({})", symbol, range);
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return format!("{}: no data", title);
    };

    let low = points.iter().map(|p| p.close).fold(f64::INFINITY, f64::min);
    let high = points.iter().map(|p| p.close).fold(f64::NEG_INFINITY, f64::max);
    let change = last.close - first.close;
    let change_percent = if first.close != 0.0 {
        change / first.close * 100.0
    } else {
        0.0
    };

    format!(
        "{}: {} points, {} .. {}\n  first {:.2}  last {:.2}  low {:.2}  high {:.2}  change {:.2} ({:.2}%)",
        title,
        points.len(),
        format_timestamp(first.timestamp_seconds),
        format_timestamp(last.timestamp_seconds),
        first.close,
        last.close,
        low,
        high,
        change,
        change_percent
    )
}

/// One `timestamp  close` line per point.
pub fn history_rows(points: &[HistoricalPoint]) -> String {
    points
        .iter()
        .map(|point| {
            format!(
                "{}  {:>10.2}",
                format_timestamp(point.timestamp_seconds),
                point.close
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_timestamp(seconds: i64) -> String {
    DateTime::from_timestamp(seconds, 0)
        .map(|utc| utc.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| seconds.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn table_marks_trend() {
        let table = quote_table(&[
            Quote::from_values("aapl", 189.5, 1.25, 0.66),
            Quote::from_values("tsla", 250.0, -5.0, -1.96),
            Quote::unknown("zzzz"),
        ]);
        let rows: Vec<&str> = table.lines().collect();
        assert_eq!(rows.len(), 4);
        assert!(rows[0].starts_with("Symbol"));
        assert!(rows[1].starts_with("AAPL"));
        assert!(rows[1].contains("$189.50") && rows[1].ends_with('▲'));
        assert!(rows[2].contains("-1.96%") && rows[2].ends_with('▼'));
        assert!(rows[3].contains("$0.00") && rows[3].ends_with(' '));
    }

    #[test]
    fn last_updated_format() {
        let at = Utc.with_ymd_and_hms(2026, 10, 16, 22, 33, 1).unwrap();
        assert_eq!(last_updated(&at), "Last updated: Oct 16, 2026 22:33:01");
    }

    #[test]
    fn summary_of_empty_series() {
        assert_eq!(
            history_summary("AAPL", TimeRange::OneDay, &[]),
            "AAPL Stock Price (1D): no data"
        );
    }

    #[test]
    fn summary_reports_extremes() {
        let points = [
            HistoricalPoint::new(1_700_000_000, 10.0),
            HistoricalPoint::new(1_700_086_400, 8.0),
            HistoricalPoint::new(1_700_172_800, 12.0),
        ];
        let summary = history_summary("AAPL", TimeRange::OneWeek, &points);
        assert!(summary.starts_with("AAPL Stock Price (1W): 3 points"));
        assert!(summary.contains("low 8.00  high 12.00  change 2.00 (20.00%)"));
        assert_eq!(history_rows(&points).lines().count(), 3);
    }
}
