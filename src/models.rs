use serde::Serialize;
use time::Date;

use crate::core::date_range::RangeSelection;

/// One day of shopped competitive-pricing results for a property.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParityRecord {
    pub date: Date,
    /// Share of shopped rates where our price matched or beat the OTA price.
    pub parity_score: f32,
    pub loss_pct: f32,
    pub meet_pct: f32,
    pub win_pct: f32,
    /// Estimated revenue lost to undercutting, in USD.
    pub revenue_loss: f32,
}

/// OTA sales channels the dashboard shops against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Channel {
    Booking,
    Expedia,
    Agoda,
    MakeMyTrip,
    Goibibo,
}

impl Channel {
    pub const ALL: [Channel; 5] = [
        Channel::Booking,
        Channel::Expedia,
        Channel::Agoda,
        Channel::MakeMyTrip,
        Channel::Goibibo,
    ];
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Channel::Booking => "Booking.com",
            Channel::Expedia => "Expedia",
            Channel::Agoda => "Agoda",
            Channel::MakeMyTrip => "MakeMyTrip",
            Channel::Goibibo => "Goibibo",
        };
        f.write_str(name)
    }
}

/// Visibility ranking of one OTA channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OtaRanking {
    pub channel: Channel,
    pub rank: u8,
    /// 0-100 search visibility score.
    pub visibility: f32,
    /// Channel price minus our direct price, as a percentage.
    pub price_delta_pct: f32,
    /// The channel currently undercuts our direct rate.
    pub in_loss: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum DemandLevel {
    Low,
    Moderate,
    High,
    Peak,
}

impl DemandLevel {
    pub const ALL: [DemandLevel; 4] = [
        DemandLevel::Low,
        DemandLevel::Moderate,
        DemandLevel::High,
        DemandLevel::Peak,
    ];
}

impl std::fmt::Display for DemandLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DemandLevel::Low => "Low",
            DemandLevel::Moderate => "Moderate",
            DemandLevel::High => "High",
            DemandLevel::Peak => "Peak",
        };
        f.write_str(name)
    }
}

/// One day of the demand forecast.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DemandDay {
    pub date: Date,
    pub occupancy_pct: f32,
    /// Rooms picked up in the last 24h.
    pub pickup_rooms: u16,
    pub level: DemandLevel,
}

/// KPI card figures aggregated over the selected date range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KpiSummary {
    pub parity_score: f32,
    pub loss_pct: f32,
    pub meet_pct: f32,
    pub win_pct: f32,
    pub revenue_loss: f32,
    pub days: usize,
}

impl KpiSummary {
    /// Averages the rate KPIs and sums the revenue loss. `None` when
    /// no records fall in the range.
    pub fn over(records: &[ParityRecord]) -> Option<KpiSummary> {
        if records.is_empty() {
            return None;
        }
        let n = records.len() as f32;
        let sum = |f: fn(&ParityRecord) -> f32| records.iter().map(f).sum::<f32>();
        Some(KpiSummary {
            parity_score: sum(|r| r.parity_score) / n,
            loss_pct: sum(|r| r.loss_pct) / n,
            meet_pct: sum(|r| r.meet_pct) / n,
            win_pct: sum(|r| r.win_pct) / n,
            revenue_loss: sum(|r| r.revenue_loss),
            days: records.len(),
        })
    }
}

/// Restricts `records` to the committed date range. An empty selection
/// keeps everything; a lone start keeps that single day.
pub fn records_in_range(records: &[ParityRecord], range: &RangeSelection) -> Vec<ParityRecord> {
    match range {
        RangeSelection::Empty => records.to_vec(),
        _ => records
            .iter()
            .filter(|r| range.contains(r.date))
            .copied()
            .collect(),
    }
}

/// Same range policy for demand forecast days.
pub fn demand_in_range(days: &[DemandDay], range: &RangeSelection) -> Vec<DemandDay> {
    match range {
        RangeSelection::Empty => days.to_vec(),
        _ => days
            .iter()
            .filter(|d| range.contains(d.date))
            .copied()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Month;

    fn d(day: u8) -> Date {
        Date::from_calendar_date(2025, Month::June, day).unwrap()
    }

    fn record(day: u8, parity: f32, loss: f32) -> ParityRecord {
        ParityRecord {
            date: d(day),
            parity_score: parity,
            loss_pct: loss,
            meet_pct: 100.0 - loss,
            win_pct: 0.0,
            revenue_loss: 100.0,
        }
    }

    #[test]
    fn kpi_over_empty_is_none() {
        assert_eq!(KpiSummary::over(&[]), None);
    }

    #[test]
    fn kpi_averages_rates_and_sums_losses() {
        let records = [record(1, 80.0, 20.0), record(2, 90.0, 10.0)];
        let kpis = KpiSummary::over(&records).unwrap();
        assert_eq!(kpis.parity_score, 85.0);
        assert_eq!(kpis.loss_pct, 15.0);
        assert_eq!(kpis.revenue_loss, 200.0);
        assert_eq!(kpis.days, 2);
    }

    #[test]
    fn range_filter_keeps_only_contained_days() {
        let records = [
            record(1, 80.0, 20.0),
            record(5, 90.0, 10.0),
            record(9, 70.0, 30.0),
        ];
        let range = RangeSelection::Full {
            start: d(2),
            end: d(9),
        };
        let kept = records_in_range(&records, &range);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].date, d(5));
    }

    #[test]
    fn empty_range_keeps_everything() {
        let records = [record(1, 80.0, 20.0), record(5, 90.0, 10.0)];
        assert_eq!(records_in_range(&records, &RangeSelection::Empty).len(), 2);
    }
}
