//! Behavioral properties of the three plotting functions

use pretty_assertions::assert_eq;

use sparkchart::{
    plot_candlestick, plot_candlestick_trendline, plot_line, Canvas, CandlestickTrendline,
    ChartError, OhlcSeries, Trendline,
};

fn sample_ohlc() -> OhlcSeries {
    OhlcSeries::new(
        vec![1.0, 2.0],
        vec![3.0, 3.0],
        vec![0.0, 1.0],
        vec![2.0, 1.0],
    )
}

#[test]
fn line_chart_emits_one_segment_per_consecutive_pair() {
    for n in 2..8 {
        let series: Vec<f64> = (0..n).map(|i| (i * i) as f64).collect();
        let svg = plot_line(&series, Canvas::default()).unwrap();
        assert_eq!(svg.matches("<line").count(), n - 1, "series of length {}", n);
    }
}

#[test]
fn plotting_is_idempotent() {
    let series = [2.5, 7.0, 3.25, 9.0];
    assert_eq!(
        plot_line(&series, Canvas::default()).unwrap(),
        plot_line(&series, Canvas::default()).unwrap()
    );

    let data = CandlestickTrendline::new(sample_ohlc(), Trendline::new(0.0, 0.5), Trendline::new(4.0, 0.0));
    assert_eq!(
        plot_candlestick_trendline(&data, Canvas::default()).unwrap(),
        plot_candlestick_trendline(&data, Canvas::default()).unwrap()
    );
}

#[test]
fn normalization_is_invariant_under_positive_scaling() {
    // Powers of two scale f64 values exactly, so the outputs must be
    // byte-identical, not merely close.
    let series = [1.0, 3.5, 2.25, 4.0];
    for k in [2.0, 0.5, 1024.0] {
        let scaled: Vec<f64> = series.iter().map(|v| v * k).collect();
        assert_eq!(
            plot_line(&series, Canvas::default()).unwrap(),
            plot_line(&scaled, Canvas::default()).unwrap(),
            "scale factor {}",
            k
        );
    }

    let ohlc = sample_ohlc();
    let scaled = OhlcSeries::new(
        ohlc.open.iter().map(|v| v * 2.0).collect(),
        ohlc.high.iter().map(|v| v * 2.0).collect(),
        ohlc.low.iter().map(|v| v * 2.0).collect(),
        ohlc.close.iter().map(|v| v * 2.0).collect(),
    );
    assert_eq!(
        plot_candlestick(&ohlc, Canvas::default()).unwrap(),
        plot_candlestick(&scaled, Canvas::default()).unwrap()
    );
}

#[test]
fn line_chart_concrete_scenario() {
    // y_min 0, y_max 10 over 100x100: normalized y [0, 50, 100],
    // x positions [0, 33.33, 66.67], flipped y on emission.
    let svg = plot_line(&[0.0, 5.0, 10.0], Canvas::new(100.0, 100.0)).unwrap();
    let expected = "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"100\" height=\"100\" viewBox=\"0 0 100 100\">\n  \
         <line x1=\"0\" y1=\"100\" x2=\"33.33\" y2=\"50\" stroke=\"black\"/>\n  \
         <line x1=\"33.33\" y1=\"50\" x2=\"66.67\" y2=\"0\" stroke=\"black\"/>\n\
         </svg>";
    assert_eq!(svg, expected);
}

#[test]
fn candlestick_concrete_scenario() {
    // y_min 0 (Low/Open/Close), y_max 3 (High/Open/Close); first candle
    // bullish, second bearish.
    let svg = plot_candlestick(&sample_ohlc(), Canvas::new(100.0, 100.0)).unwrap();
    assert_eq!(svg.matches("<rect").count(), 2);
    assert_eq!(svg.matches("<line").count(), 2);
    assert!(svg.contains(r#"<rect x="-1" y="33.33" width="2" height="33.33" fill="green" stroke="green"/>"#));
    assert!(svg.contains(r##"<rect x="49" y="33.33" width="2" height="33.33" fill="#cc0022" stroke="#cc0022"/>"##));
}

#[test]
fn zero_height_body_is_preserved() {
    let ohlc = OhlcSeries::new(vec![2.0], vec![3.0], vec![1.0], vec![2.0]);
    let svg = plot_candlestick(&ohlc, Canvas::new(100.0, 100.0)).unwrap();
    assert!(svg.contains(r#"height="0""#));
    // Equality counts as bearish.
    assert!(svg.contains(r##"fill="#cc0022""##));
    assert!(!svg.contains(r#"fill="green""#));
}

#[test]
fn body_color_tracks_open_close_ordering() {
    let ohlc = OhlcSeries::new(
        vec![1.0, 3.0, 2.0],
        vec![4.0, 4.0, 4.0],
        vec![0.0, 0.0, 0.0],
        vec![2.0, 1.0, 2.0],
    );
    let svg = plot_candlestick(&ohlc, Canvas::default()).unwrap();
    let fills: Vec<&str> = svg
        .lines()
        .filter(|l| l.contains("<rect"))
        .map(|l| {
            if l.contains(r#"fill="green""#) {
                "green"
            } else {
                "#cc0022"
            }
        })
        .collect();
    // open < close, open > close, open == close
    assert_eq!(fills, vec!["green", "#cc0022", "#cc0022"]);
}

#[test]
fn trendline_endpoint_projection() {
    // length 5, support 10 + 1*step: right endpoint value 14 becomes
    // the range maximum, pinning the support line's end at the top.
    let data = CandlestickTrendline::new(
        OhlcSeries::new(
            vec![11.0; 5],
            vec![13.0; 5],
            vec![10.0; 5],
            vec![12.0; 5],
        ),
        Trendline::new(10.0, 1.0),
        Trendline::new(13.0, 0.0),
    );
    assert_eq!(data.support.value_at(4), 14.0);
    let svg = plot_candlestick_trendline(&data, Canvas::new(100.0, 100.0)).unwrap();
    assert!(svg.contains(r#"<line x1="0" y1="100" x2="80" y2="0" stroke="black" stroke-width="1"/>"#));
}

#[test]
fn structural_input_errors() {
    assert_eq!(
        plot_line(&[], Canvas::default()),
        Err(ChartError::EmptySeries)
    );
    assert_eq!(
        plot_candlestick(&OhlcSeries::default(), Canvas::default()),
        Err(ChartError::EmptySeries)
    );
    let mismatched = OhlcSeries::new(vec![1.0, 2.0], vec![3.0], vec![0.0], vec![2.0]);
    assert_eq!(
        plot_candlestick(&mismatched, Canvas::default()),
        Err(ChartError::LengthMismatch {
            open: 2,
            high: 1,
            low: 1,
            close: 1,
        })
    );
    assert_eq!(
        plot_line(&[1.0, 2.0], Canvas::new(0.0, 100.0)),
        Err(ChartError::NonPositiveCanvas {
            width: 0.0,
            height: 100.0,
        })
    );
}
