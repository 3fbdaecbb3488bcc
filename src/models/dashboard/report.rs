use chrono::NaiveDate;
use serde::Serialize;
use sqlx::PgPool;

use crate::models::leave::LeaveDisplay;
use super::stats::{self, DepartmentLoad, GenderCounts, HeadcountStats, UPCOMING_LEAVES_LIMIT};
use super::trend::TurnoverTrend;

/// Raw aggregation results, one field per dashboard query.
#[derive(Debug, Clone, Default)]
pub struct ReportInputs {
    pub headcount: HeadcountStats,
    pub genders: GenderCounts,
    pub departments: Vec<DepartmentLoad>,
    pub trend: TurnoverTrend,
    pub average_rating: Option<f64>,
    pub on_leave: i64,
    pub upcoming_leaves: Vec<LeaveDisplay>,
    pub pending_approvals: i64,
    pub expiring_contracts: i64,
}

impl ReportInputs {
    /// Inputs for a store with no rows at all.
    pub fn empty(today: NaiveDate) -> Self {
        ReportInputs {
            trend: TurnoverTrend::empty(today),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Attendance {
    pub present_today: i64,
    pub attendance_rate: i64,
}

/// Present = active minus on leave (never below 0); the rate is a whole
/// percentage in `[0, 100]`, and 0 when nobody is active.
pub fn attendance(active_employees: i64, on_leave: i64) -> Attendance {
    let present_today = (active_employees - on_leave).clamp(0, active_employees.max(0));
    let attendance_rate = if active_employees > 0 {
        let pct = present_today as f64 / active_employees as f64 * 100.0;
        pct.round_ties_even() as i64
    } else {
        0
    };
    Attendance { present_today, attendance_rate }
}

/// Average rating to one decimal place; 0 when there are no reviews.
pub fn round_rating(average: Option<f64>) -> f64 {
    match average {
        Some(avg) if avg.is_finite() => (avg * 10.0).round_ties_even() / 10.0,
        _ => 0.0,
    }
}

/// Everything the dashboard page shows. Every field is always present;
/// an empty store yields zeros and empty lists.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    pub as_of: NaiveDate,
    pub total_employees: i64,
    pub active_employees: i64,
    pub inactive_employees: i64,
    pub new_hires: i64,
    pub resignations: i64,
    pub male_count: i64,
    pub female_count: i64,
    pub other_count: i64,
    pub dept_names: Vec<String>,
    pub dept_counts: Vec<i64>,
    pub months: Vec<String>,
    pub hires_data: Vec<i64>,
    pub resignations_data: Vec<i64>,
    pub avg_performance: f64,
    pub present_today: i64,
    pub attendance_rate: i64,
    pub on_leave: i64,
    pub upcoming_leaves: Vec<LeaveDisplay>,
    pub pending_approvals: i64,
    pub expiring_contracts: i64,
}

impl DashboardReport {
    pub fn assemble(today: NaiveDate, inputs: ReportInputs) -> Self {
        let ReportInputs {
            headcount,
            genders,
            departments,
            trend,
            average_rating,
            on_leave,
            upcoming_leaves,
            pending_approvals,
            expiring_contracts,
        } = inputs;

        let trend = if trend.months.is_empty() { TurnoverTrend::empty(today) } else { trend };
        let Attendance { present_today, attendance_rate } = attendance(headcount.active, on_leave);
        let (dept_names, dept_counts): (Vec<String>, Vec<i64>) = departments
            .into_iter()
            .map(|d| (d.name, d.employee_count))
            .unzip();

        DashboardReport {
            as_of: today,
            total_employees: headcount.total,
            active_employees: headcount.active,
            inactive_employees: headcount.inactive(),
            new_hires: headcount.new_hires,
            resignations: headcount.resignations,
            male_count: genders.male,
            female_count: genders.female,
            other_count: genders.other,
            dept_names,
            dept_counts,
            months: trend.months,
            hires_data: trend.hires,
            resignations_data: trend.resignations,
            avg_performance: round_rating(average_rating),
            present_today,
            attendance_rate,
            on_leave,
            upcoming_leaves,
            pending_approvals,
            expiring_contracts,
        }
    }

    /// Chart series as JSON text safe to embed inside a `<script>` element.
    pub fn chart_data(&self) -> ChartData {
        ChartData {
            dept_names: script_json(&self.dept_names),
            dept_counts: script_json(&self.dept_counts),
            months: script_json(&self.months),
            hires_data: script_json(&self.hires_data),
            resignations_data: script_json(&self.resignations_data),
            genders: script_json(&[self.male_count, self.female_count, self.other_count]),
        }
    }
}

/// JSON-encoded chart arrays for the dashboard script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartData {
    pub dept_names: String,
    pub dept_counts: String,
    pub months: String,
    pub hires_data: String,
    pub resignations_data: String,
    pub genders: String,
}

/// Serialize to JSON with `<` escaped so the text cannot close a script tag.
fn script_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| "[]".to_string())
        .replace('<', "\\u003c")
}

/// Run every dashboard query for `today`, one after another, and assemble the report.
pub async fn build_report(pool: &PgPool, today: NaiveDate) -> Result<DashboardReport, sqlx::Error> {
    let inputs = ReportInputs {
        headcount: stats::headcount(pool, today).await?,
        genders: stats::gender_counts(pool).await?,
        departments: stats::department_load(pool).await?,
        trend: stats::turnover_trend(pool, today).await?,
        average_rating: stats::average_rating(pool).await?,
        on_leave: stats::on_leave_count(pool, today).await?,
        upcoming_leaves: stats::upcoming_leaves(pool, today, UPCOMING_LEAVES_LIMIT).await?,
        pending_approvals: stats::pending_approvals(pool).await?,
        expiring_contracts: stats::expiring_contracts(pool, today).await?,
    };
    Ok(DashboardReport::assemble(today, inputs))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn empty_store_yields_zeroes_and_empty_lists() {
        let report = DashboardReport::assemble(today(), ReportInputs::empty(today()));
        assert_eq!(report.total_employees, 0);
        assert_eq!(report.active_employees, 0);
        assert_eq!(report.new_hires, 0);
        assert_eq!(report.attendance_rate, 0);
        assert_eq!(report.present_today, 0);
        assert_eq!(report.avg_performance, 0.0);
        assert!(report.dept_names.is_empty());
        assert!(report.dept_counts.is_empty());
        assert!(report.upcoming_leaves.is_empty());
        assert_eq!(report.months.len(), 12);
        assert_eq!(report.hires_data, vec![0; 12]);
        assert_eq!(report.resignations_data, vec![0; 12]);
        assert_eq!(report.months.last().map(String::as_str), Some("Oct 2026"));
    }

    #[test]
    fn default_inputs_still_get_a_full_trend() {
        let report = DashboardReport::assemble(today(), ReportInputs::default());
        assert_eq!(report.months.len(), 12);
    }

    #[test]
    fn single_active_employee_on_leave() {
        assert_eq!(attendance(1, 1), Attendance { present_today: 0, attendance_rate: 0 });
    }

    #[test]
    fn attendance_rate_rounds_to_whole_percent() {
        assert_eq!(attendance(3, 1).attendance_rate, 67);
        assert_eq!(attendance(4, 0).attendance_rate, 100);
        // 12.5 rounds to even.
        assert_eq!(attendance(8, 7).attendance_rate, 12);
    }

    #[test]
    fn attendance_never_negative_or_over_100() {
        for active in 0..6 {
            for on_leave in 0..9 {
                let a = attendance(active, on_leave);
                assert!(a.present_today >= 0);
                assert!(a.present_today <= active);
                assert!((0..=100).contains(&a.attendance_rate));
            }
        }
        assert_eq!(attendance(0, 3), Attendance { present_today: 0, attendance_rate: 0 });
    }

    #[test]
    fn rating_rounds_to_one_decimal() {
        assert_eq!(round_rating(None), 0.0);
        assert_eq!(round_rating(Some(3.6666)), 3.7);
        assert_eq!(round_rating(Some(4.0)), 4.0);
        assert_eq!(round_rating(Some(f64::NAN)), 0.0);
    }

    #[test]
    fn departments_split_into_parallel_arrays() {
        let inputs = ReportInputs {
            headcount: HeadcountStats { total: 5, active: 4, new_hires: 1, resignations: 1 },
            genders: GenderCounts { male: 2, female: 2, other: 1 },
            departments: vec![
                DepartmentLoad { name: "Engineering".into(), employee_count: 3 },
                DepartmentLoad { name: "Finance".into(), employee_count: 1 },
            ],
            average_rating: Some(4.25),
            on_leave: 1,
            ..ReportInputs::empty(today())
        };
        let report = DashboardReport::assemble(today(), inputs);
        assert_eq!(report.dept_names, vec!["Engineering", "Finance"]);
        assert_eq!(report.dept_counts, vec![3, 1]);
        assert_eq!(report.inactive_employees, 1);
        assert_eq!(report.male_count + report.female_count + report.other_count, report.total_employees);
        assert_eq!(report.present_today, 3);
        assert_eq!(report.attendance_rate, 75);
        assert_eq!(report.avg_performance, 4.2);
    }

    #[test]
    fn chart_json_escapes_script_breakers() {
        let inputs = ReportInputs {
            departments: vec![DepartmentLoad { name: "</script>".into(), employee_count: 0 }],
            ..ReportInputs::empty(today())
        };
        let charts = DashboardReport::assemble(today(), inputs).chart_data();
        assert!(!charts.dept_names.contains('<'));
        assert_eq!(charts.dept_counts, "[0]");
        assert_eq!(charts.genders, "[0,0,0]");
        assert!(charts.months.starts_with("[\"Nov 2025\""));
    }

    #[test]
    fn report_serializes_every_key() {
        let report = DashboardReport::assemble(today(), ReportInputs::empty(today()));
        let json = serde_json::to_value(&report).unwrap();
        for key in [
            "total_employees", "active_employees", "new_hires", "resignations",
            "male_count", "female_count", "other_count", "dept_names", "dept_counts",
            "months", "hires_data", "resignations_data", "avg_performance",
            "present_today", "attendance_rate", "on_leave", "upcoming_leaves",
            "pending_approvals", "expiring_contracts",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        assert_eq!(json["as_of"], "2026-10-19");
    }
}
