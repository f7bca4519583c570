use paritydeck::{DateRangePicker, PresetMode, RangeSelection};
use paritydeck::core::date_range::month_grid;
use time::{Date, Month, Weekday};

fn d(year: i32, month: u8, day: u8) -> Date {
    Date::from_calendar_date(year, Month::try_from(month).unwrap(), day).unwrap()
}

#[test]
fn two_click_flow_commits_on_apply() {
    let mut picker = DateRangePicker::new(None, None, d(2025, 6, 1));
    assert_eq!(picker.display_label(), "Select date range");

    picker.toggle();
    picker.select_day(d(2025, 6, 10));
    assert_eq!(picker.display_label(), "10 Jun '25");

    picker.select_day(d(2025, 6, 24));
    let committed = picker.apply().expect("open picker applies");
    assert_eq!(
        committed,
        RangeSelection::Full {
            start: d(2025, 6, 10),
            end: d(2025, 6, 24)
        }
    );
    assert_eq!(picker.display_label(), "10 Jun '25 - 24 Jun '25");
}

#[test]
fn clicks_in_either_order_give_the_same_range() {
    let forward = RangeSelection::Empty
        .click(d(2025, 6, 5))
        .click(d(2025, 6, 19));
    let backward = RangeSelection::Empty
        .click(d(2025, 6, 19))
        .click(d(2025, 6, 5));
    assert_eq!(forward, backward);
    assert_eq!(forward.start(), Some(d(2025, 6, 5)));
    assert_eq!(forward.end(), Some(d(2025, 6, 19)));
}

#[test]
fn cancel_reverts_pending_edits_and_anchor() {
    let mut picker = DateRangePicker::with_preset(PresetMode::Next30Days, d(2025, 6, 1));
    picker.toggle();
    picker.select_preset(PresetMode::CustomRange);
    picker.select_day(d(2025, 9, 3));
    picker.next_month();
    picker.cancel();

    assert_eq!(picker.committed(), PresetMode::Next30Days.range(d(2025, 6, 1)));
    assert_eq!(picker.selection(), picker.committed());
    assert_eq!(picker.mode(), PresetMode::Next30Days);
    assert_eq!(picker.visible_month(), d(2025, 6, 1));

    // Cancel on a closed picker is a no-op.
    picker.cancel();
    assert_eq!(picker.visible_month(), d(2025, 6, 1));
}

#[test]
fn presets_derive_from_today() {
    let today = d(2025, 6, 1);
    assert_eq!(
        PresetMode::Next30Days.range(today),
        RangeSelection::Full {
            start: d(2025, 6, 1),
            end: d(2025, 6, 30)
        }
    );
    assert_eq!(
        PresetMode::CurrentMonth.range(d(2025, 6, 17)),
        RangeSelection::Full {
            start: d(2025, 6, 1),
            end: d(2025, 6, 30)
        }
    );
    assert_eq!(PresetMode::CustomRange.range(today), RangeSelection::Empty);
}

#[test]
fn every_month_of_the_decade_renders_42_cells() {
    for year in 2020..=2030 {
        for month in 1..=12u8 {
            let grid = month_grid(d(year, month, 1), &RangeSelection::Empty, d(2025, 1, 1));
            assert_eq!(grid.len(), 42, "{year}-{month}");
            assert_eq!(grid[0].date.weekday(), Weekday::Monday);

            let in_month: Vec<_> = grid.iter().filter(|c| c.in_month).collect();
            assert_eq!(
                in_month.len() as u8,
                time::util::days_in_year_month(year, Month::try_from(month).unwrap()),
            );
            assert!(in_month.windows(2).all(|w| w[0].date < w[1].date));
        }
    }
}
