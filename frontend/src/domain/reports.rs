//! KPI figures derived from the general report.

use shared::{GeneralReport, SurgeryStatus};

#[derive(Debug, Clone, PartialEq)]
pub struct KpiSummary {
    pub total_surgeries: u64,
    pub completed: u64,
    pub cancelled: u64,
    pub total_patients: u64,
    pub total_staff: u64,
    /// Percent of all surgeries, 0 when there are none
    pub completion_rate: f64,
    pub cancellation_rate: f64,
}

impl KpiSummary {
    pub fn from_report(report: &GeneralReport) -> Self {
        let total_surgeries = report.total_surgeries();
        let completed = report.count_for(&SurgeryStatus::Completed);
        let cancelled = report.count_for(&SurgeryStatus::Cancelled);

        Self {
            total_surgeries,
            completed,
            cancelled,
            total_patients: report.total_patients,
            total_staff: report.total_staff,
            completion_rate: percent(completed, total_surgeries),
            cancellation_rate: percent(cancelled, total_surgeries),
        }
    }
}

fn percent(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 * 100.0 / total as f64
    }
}

/// "42,9 %"
pub fn format_percent(value: f64) -> String {
    format!("{:.1} %", value).replace('.', ",")
}

/// One bar of the surgeries-per-status chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartBar {
    pub status: SurgeryStatus,
    pub count: u64,
}

impl ChartBar {
    pub fn label(&self) -> &str {
        self.status.label()
    }
}

/// Bars for every known status in lifecycle order (zeros included),
/// followed by any other status the backend reported.
pub fn chart_bars(report: &GeneralReport) -> Vec<ChartBar> {
    let mut bars: Vec<ChartBar> = SurgeryStatus::KNOWN
        .iter()
        .map(|status| ChartBar {
            status: status.clone(),
            count: report.count_for(status),
        })
        .collect();

    for entry in &report.surgeries_by_status {
        if let SurgeryStatus::Other(_) = entry.status {
            match bars.iter_mut().find(|bar| bar.status == entry.status) {
                Some(bar) => bar.count += entry.count,
                None => bars.push(ChartBar {
                    status: entry.status.clone(),
                    count: entry.count,
                }),
            }
        }
    }

    bars
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::StatusCount;

    fn report(counts: &[(&str, u64)]) -> GeneralReport {
        GeneralReport {
            total_patients: 120,
            total_staff: 35,
            surgeries_by_status: counts
                .iter()
                .map(|(status, count)| StatusCount {
                    status: SurgeryStatus::parse(status),
                    count: *count,
                })
                .collect(),
        }
    }

    #[test]
    fn test_kpis() {
        let summary = KpiSummary::from_report(&report(&[
            ("programada", 3),
            ("finalizada", 4),
            ("cancelada", 1),
        ]));
        assert_eq!(summary.total_surgeries, 8);
        assert_eq!(summary.completed, 4);
        assert_eq!(summary.completion_rate, 50.0);
        assert_eq!(summary.cancellation_rate, 12.5);
        assert_eq!(summary.total_patients, 120);
    }

    #[test]
    fn test_kpis_with_no_surgeries() {
        let summary = KpiSummary::from_report(&report(&[]));
        assert_eq!(summary.completion_rate, 0.0);
        assert_eq!(summary.cancellation_rate, 0.0);
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(42.857), "42,9 %");
        assert_eq!(format_percent(0.0), "0,0 %");
    }

    #[test]
    fn test_chart_bars_keep_order_and_extras() {
        let bars = chart_bars(&report(&[
            ("cancelada", 2),
            ("en espera", 1),
            ("en espera", 2),
            ("programada", 5),
        ]));
        assert_eq!(bars.len(), 7);
        assert_eq!(bars[0].status, SurgeryStatus::Scheduled);
        assert_eq!(bars[0].count, 5);
        assert_eq!(bars[1].count, 0);
        assert_eq!(bars[4].count, 2);
        assert_eq!(bars[6].label(), "en espera");
        assert_eq!(bars[6].count, 3);
    }
}
