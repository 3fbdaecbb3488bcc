use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Performance review joined with subject and reviewer names.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ReviewDisplay {
    pub id: i64,
    pub employee_id: i64,
    pub employee_name: String,
    pub reviewer_id: Option<i64>,
    pub reviewer_name: Option<String>,
    pub review_date: NaiveDate,
    pub rating: i16,
    pub comments: String,
    pub goals: String,
}

impl ReviewDisplay {
    /// "4/5".
    pub fn rating_display(&self) -> String {
        format!("{}/5", self.rating)
    }

    pub fn reviewer_label(&self) -> String {
        self.reviewer_name.clone().unwrap_or_else(|| "-".to_string())
    }
}

#[derive(Debug)]
pub struct NewReview {
    pub employee_id: i64,
    pub reviewer_id: Option<i64>,
    pub review_date: NaiveDate,
    pub rating: i16,
    pub comments: String,
    pub goals: String,
}

/// Form data from the review form.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ReviewForm {
    #[serde(default)]
    pub employee_id: String,
    #[serde(default)]
    pub reviewer_id: String,
    #[serde(default)]
    pub review_date: String,
    #[serde(default)]
    pub rating: String,
    #[serde(default)]
    pub comments: String,
    #[serde(default)]
    pub goals: String,
    #[serde(default)]
    pub csrf_token: String,
}
