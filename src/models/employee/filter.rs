use chrono::NaiveDate;
use serde::Deserialize;

use crate::validate;

/// Raw criteria from the filter form.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct EmployeeFilterForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub hire_date: String,
    #[serde(default)]
    pub csrf_token: String,
}

/// Parsed filter criteria. `None` means the criterion is not applied.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EmployeeFilter {
    pub name: Option<String>,
    pub position: Option<String>,
    pub hired_on_or_after: Option<NaiveDate>,
}

impl EmployeeFilter {
    pub fn from_form(form: &EmployeeFilterForm) -> Result<Self, String> {
        Ok(EmployeeFilter {
            name: non_empty(&form.name),
            position: non_empty(&form.position),
            hired_on_or_after: parse_hire_date(&form.hire_date)?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.position.is_none() && self.hired_on_or_after.is_none()
    }
}

/// Any well-formed date is accepted; the year floor only applies to stored records.
fn parse_hire_date(value: &str) -> Result<Option<NaiveDate>, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, validate::DATE_FORMAT)
        .map(Some)
        .map_err(|e| format!("Invalid date format or value: {e}"))
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// `%term%` with LIKE wildcards in the term escaped.
pub fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}
