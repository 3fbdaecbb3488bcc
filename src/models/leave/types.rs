use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeaveType {
    #[serde(rename = "VL")]
    Vacation,
    #[serde(rename = "SL")]
    Sick,
    #[serde(rename = "PL")]
    Personal,
}

impl LeaveType {
    pub const ALL: [LeaveType; 3] = [LeaveType::Vacation, LeaveType::Sick, LeaveType::Personal];

    pub fn code(&self) -> &'static str {
        match self {
            LeaveType::Vacation => "VL",
            LeaveType::Sick => "SL",
            LeaveType::Personal => "PL",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LeaveType::Vacation => "Vacation Leave",
            LeaveType::Sick => "Sick Leave",
            LeaveType::Personal => "Personal Leave",
        }
    }
}

impl FromStr for LeaveType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "VL" => Ok(LeaveType::Vacation),
            "SL" => Ok(LeaveType::Sick),
            "PL" => Ok(LeaveType::Personal),
            other => Err(format!("Unknown leave type '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeaveStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "Pending",
            LeaveStatus::Approved => "Approved",
            LeaveStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeaveStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Pending" => Ok(LeaveStatus::Pending),
            "Approved" => Ok(LeaveStatus::Approved),
            "Rejected" => Ok(LeaveStatus::Rejected),
            other => Err(format!("Unknown leave status '{other}'")),
        }
    }
}

/// Leave joined with the employee's name.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct LeaveDisplay {
    pub id: i64,
    pub employee_id: i64,
    pub employee_name: String,
    pub leave_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    pub status: String,
    pub applied_at: DateTime<Utc>,
}

impl LeaveDisplay {
    pub fn type_label(&self) -> &'static str {
        self.leave_type.parse::<LeaveType>().map(|t| t.label()).unwrap_or("Leave")
    }

    /// Calendar days covered, both ends inclusive.
    pub fn days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    pub fn is_pending(&self) -> bool {
        self.status == LeaveStatus::Pending.as_str()
    }
}

#[derive(Debug)]
pub struct NewLeave {
    pub employee_id: i64,
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    pub status: LeaveStatus,
}

/// Form data from the leave request form.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct LeaveForm {
    #[serde(default)]
    pub employee_id: String,
    #[serde(default)]
    pub leave_type: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub csrf_token: String,
}
