//! Bundled mock datasets.
//!
//! Every table in the dashboard is a hard-coded literal: the rate
//! shopping pipeline that would feed a production deployment lives
//! elsewhere, and this build renders a representative snapshot of its
//! output.

use serde::Serialize;
use time::{Date, Month};

use crate::models::{Channel, DemandDay, DemandLevel, OtaRanking, ParityRecord};

fn date(year: i32, month: u8, day: u8) -> Option<Date> {
    Date::from_calendar_date(year, Month::try_from(month).ok()?, day).ok()
}

pub fn properties() -> Vec<String> {
    vec![
        "Grand Meridian Mumbai".to_string(),
        "Azure Bay Resort Goa".to_string(),
        "Cedar Court Pune".to_string(),
    ]
}

// (year, month, day, parity, loss, meet, win, revenue loss)
const PARITY_TABLE: [(i32, u8, u8, f32, f32, f32, f32, f32); 30] = [
    (2025, 6, 1, 84.2, 11.8, 72.4, 15.8, 412.0),
    (2025, 6, 2, 86.0, 10.5, 74.0, 15.5, 388.0),
    (2025, 6, 3, 81.7, 14.1, 70.2, 15.7, 455.0),
    (2025, 6, 4, 79.4, 16.3, 68.9, 14.8, 521.0),
    (2025, 6, 5, 82.5, 13.0, 71.5, 15.5, 440.0),
    (2025, 6, 6, 88.1, 8.4, 76.2, 15.4, 310.0),
    (2025, 6, 7, 90.3, 6.9, 78.0, 15.1, 265.0),
    (2025, 6, 8, 87.6, 9.2, 75.8, 15.0, 334.0),
    (2025, 6, 9, 83.9, 12.4, 72.0, 15.6, 421.0),
    (2025, 6, 10, 80.8, 15.0, 69.4, 15.6, 489.0),
    (2025, 6, 11, 78.2, 17.5, 67.0, 15.5, 545.0),
    (2025, 6, 12, 81.0, 14.8, 69.8, 15.4, 470.0),
    (2025, 6, 13, 85.4, 11.0, 73.6, 15.4, 399.0),
    (2025, 6, 14, 89.0, 7.8, 77.1, 15.1, 290.0),
    (2025, 6, 15, 91.2, 6.1, 79.0, 14.9, 244.0),
    (2025, 6, 16, 88.5, 8.9, 76.4, 14.7, 321.0),
    (2025, 6, 17, 84.7, 11.6, 72.9, 15.5, 408.0),
    (2025, 6, 18, 82.1, 13.7, 70.8, 15.5, 448.0),
    (2025, 6, 19, 79.9, 15.8, 68.3, 15.9, 510.0),
    (2025, 6, 20, 83.3, 12.9, 71.6, 15.5, 431.0),
    (2025, 6, 21, 87.0, 9.6, 75.3, 15.1, 342.0),
    (2025, 6, 22, 90.8, 6.5, 78.6, 14.9, 255.0),
    (2025, 6, 23, 86.4, 10.2, 74.7, 15.1, 370.0),
    (2025, 6, 24, 82.9, 13.3, 71.2, 15.5, 445.0),
    (2025, 6, 25, 80.1, 15.5, 68.7, 15.8, 502.0),
    (2025, 6, 26, 77.6, 18.0, 66.3, 15.7, 560.0),
    (2025, 6, 27, 81.5, 14.4, 70.0, 15.6, 462.0),
    (2025, 6, 28, 85.9, 10.8, 74.1, 15.1, 392.0),
    (2025, 6, 29, 89.4, 7.4, 77.5, 15.1, 280.0),
    (2025, 6, 30, 92.0, 5.6, 79.8, 14.6, 230.0),
];

pub fn parity_records() -> Vec<ParityRecord> {
    PARITY_TABLE
        .iter()
        .filter_map(|&(y, m, d, parity, loss, meet, win, revenue)| {
            Some(ParityRecord {
                date: date(y, m, d)?,
                parity_score: parity,
                loss_pct: loss,
                meet_pct: meet,
                win_pct: win,
                revenue_loss: revenue,
            })
        })
        .collect()
}

pub fn ota_rankings() -> Vec<OtaRanking> {
    vec![
        OtaRanking {
            channel: Channel::Booking,
            rank: 1,
            visibility: 94.0,
            price_delta_pct: -4.2,
            in_loss: true,
        },
        OtaRanking {
            channel: Channel::MakeMyTrip,
            rank: 2,
            visibility: 88.5,
            price_delta_pct: -2.1,
            in_loss: true,
        },
        OtaRanking {
            channel: Channel::Expedia,
            rank: 3,
            visibility: 81.0,
            price_delta_pct: 0.0,
            in_loss: false,
        },
        OtaRanking {
            channel: Channel::Agoda,
            rank: 4,
            visibility: 74.3,
            price_delta_pct: 1.8,
            in_loss: false,
        },
        OtaRanking {
            channel: Channel::Goibibo,
            rank: 5,
            visibility: 66.9,
            price_delta_pct: -0.9,
            in_loss: true,
        },
    ]
}

// (year, month, day, occupancy, pickup, level)
const DEMAND_TABLE: [(i32, u8, u8, f32, u16, DemandLevel); 21] = [
    (2025, 6, 1, 62.0, 8, DemandLevel::Moderate),
    (2025, 6, 2, 58.5, 5, DemandLevel::Low),
    (2025, 6, 3, 55.2, 4, DemandLevel::Low),
    (2025, 6, 4, 61.8, 7, DemandLevel::Moderate),
    (2025, 6, 5, 67.4, 11, DemandLevel::Moderate),
    (2025, 6, 6, 78.9, 18, DemandLevel::High),
    (2025, 6, 7, 85.6, 24, DemandLevel::Peak),
    (2025, 6, 8, 82.3, 19, DemandLevel::High),
    (2025, 6, 9, 64.1, 9, DemandLevel::Moderate),
    (2025, 6, 10, 59.7, 6, DemandLevel::Low),
    (2025, 6, 11, 57.0, 5, DemandLevel::Low),
    (2025, 6, 12, 63.5, 8, DemandLevel::Moderate),
    (2025, 6, 13, 74.8, 15, DemandLevel::High),
    (2025, 6, 14, 88.2, 27, DemandLevel::Peak),
    (2025, 6, 15, 86.0, 22, DemandLevel::Peak),
    (2025, 6, 16, 68.3, 12, DemandLevel::Moderate),
    (2025, 6, 17, 60.9, 7, DemandLevel::Moderate),
    (2025, 6, 18, 56.4, 4, DemandLevel::Low),
    (2025, 6, 19, 65.7, 10, DemandLevel::Moderate),
    (2025, 6, 20, 77.1, 17, DemandLevel::High),
    (2025, 6, 21, 89.5, 29, DemandLevel::Peak),
];

pub fn demand_days() -> Vec<DemandDay> {
    DEMAND_TABLE
        .iter()
        .filter_map(|&(y, m, d, occupancy, pickup, level)| {
            Some(DemandDay {
                date: date(y, m, d)?,
                occupancy_pct: occupancy,
                pickup_rooms: pickup,
                level,
            })
        })
        .collect()
}

/// Everything the dashboard ships with, for `--dump-data`.
#[derive(Debug, Serialize)]
pub struct Datasets {
    pub properties: Vec<String>,
    pub parity: Vec<ParityRecord>,
    pub rankings: Vec<OtaRanking>,
    pub demand: Vec<DemandDay>,
}

pub fn all() -> Datasets {
    Datasets {
        properties: properties(),
        parity: parity_records(),
        rankings: ota_rankings(),
        demand: demand_days(),
    }
}
