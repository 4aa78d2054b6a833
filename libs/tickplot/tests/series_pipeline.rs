//! Integration test: vendor rows through to plotted series

use std::io::Cursor;

use sprywarecsv::{QuoteReader, TradeReader};
use tickplot::series::{build_series, merge_events, SessionWindow};

const TRADES: &str = "\
20160104,9:29:59.000,ABC,T,1,0,4,1000,N,123400,200
20160104,9:30:01.500,ABC,T,1,0,4,1001,N,123400,300
20160104,9:45:00.000,ABC,T,1,0,4,1002,N,123600,150
20160104,10:10:00.000,ABC,T,1,0,4,1003,N,123500,5000
20160104,11:30:00.000,ABC,T,1,0,4,1004,N,123700,100
TRAILER,5
";

const QUOTES: &str = "\
20160104,9:30:00.000,ABC,Q,2,0,4,2000,N,123400,500,N,123600,200
20160104,10:00:00.000,ABC,Q,2,0,4,2001,N,123450,400,N,123650,100
TRAILER,2
";

fn load() -> (Vec<sprywarecsv::TradeRecord>, Vec<sprywarecsv::QuoteRecord>) {
    let trades: Result<Vec<_>, _> = TradeReader::new(Cursor::new(TRADES)).collect();
    let quotes: Result<Vec<_>, _> = QuoteReader::new(Cursor::new(QUOTES)).collect();
    (trades.unwrap(), quotes.unwrap())
}

#[test]
fn test_pipeline_uniform_time() {
    let (trades, quotes) = load();
    let events = merge_events(&trades, &quotes);
    assert_eq!(events.len(), 7);

    // Session 9:30-11:00 drops the 9:29:59 and 11:30 prints
    let window = SessionWindow::new(9.5 * 3600.0, 11.0 * 3600.0);
    let set = build_series(&events, &window, true);

    assert_eq!(set.trades.len(), 3);
    let xs: Vec<f64> = set.trades.line.iter().map(|(x, _)| *x).collect();
    assert_eq!(xs, vec![0.0, 1.0, 2.0]);

    // 9:30:01.5 print at 12.34 hits the standing bid; 9:45 print at 12.36
    // lifts the offer; the 10:10 print at 12.35 sits inside the new spread
    assert_eq!(set.red_prints.len(), 1);
    assert_eq!(set.green_prints.len(), 1);
    assert_eq!(set.red_prints.line[0], (0.0, 12.34));
    assert_eq!(set.green_prints.line[0], (1.0, 12.36));

    // Quote samples track the standing quote at each print time
    assert_eq!(set.bids.line[0].1, 12.34);
    assert_eq!(set.bids.line[2].1, 12.345);

    // The 5000 share print lands in the large marker tier
    assert_eq!(set.trades.large.len(), 1);
}

#[test]
fn test_pipeline_wall_time() {
    let (trades, quotes) = load();
    let events = merge_events(&trades, &quotes);

    let window = SessionWindow::new(9.5 * 3600.0, 11.0 * 3600.0);
    let set = build_series(&events, &window, false);

    let xs: Vec<f64> = set.trades.line.iter().map(|(x, _)| *x).collect();
    assert_eq!(
        xs,
        vec![
            9.0 * 3600.0 + 30.0 * 60.0 + 1.5,
            9.0 * 3600.0 + 45.0 * 60.0,
            10.0 * 3600.0 + 10.0 * 60.0,
        ]
    );
    assert!(xs.windows(2).all(|w| w[0] <= w[1]));
}
