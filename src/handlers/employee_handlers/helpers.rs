use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::employee::{EmployeeForm, Gender, NewEmployee};
use crate::validate;

/// Validate the add-employee form. Returns the employee to insert, with its
/// position id still to be checked against the store, or every error found.
pub fn validate_employee_form(form: &EmployeeForm) -> Result<NewEmployee, Vec<String>> {
    let mut errors: Vec<String> = vec![];
    errors.extend(validate::validate_required(&form.first_name, "First name", 50));
    errors.extend(validate::validate_required(&form.last_name, "Last name", 50));
    errors.extend(validate::validate_email(&form.email));
    errors.extend(validate::validate_optional(&form.phone, "Phone", 20));

    let position_id = collect(validate::parse_id(&form.position, "Position"), &mut errors);
    let gender = if form.gender.trim().is_empty() {
        Some(Gender::default())
    } else {
        collect(form.gender.parse::<Gender>(), &mut errors)
    };
    let date_of_birth = collect(validate::parse_date(&form.date_of_birth, "Date of birth"), &mut errors);
    let hire_date = collect(validate::parse_date(&form.hire_date, "Hire date"), &mut errors);
    let salary = collect(validate::parse_amount(&form.salary, "Salary"), &mut errors);
    let contract_end_date = collect(
        validate::parse_optional_date(&form.contract_end_date, "Contract end date"),
        &mut errors,
    );

    match (position_id, gender, date_of_birth, hire_date, salary, contract_end_date) {
        (Some(position_id), Some(gender), Some(date_of_birth), Some(hire_date), Some(salary), Some(contract_end_date))
            if errors.is_empty() =>
        {
            Ok(build(form, position_id, gender, date_of_birth, hire_date, salary, contract_end_date))
        }
        _ => Err(errors),
    }
}

fn collect<T>(result: Result<T, String>, errors: &mut Vec<String>) -> Option<T> {
    result.map_err(|e| errors.push(e)).ok()
}

fn build(
    form: &EmployeeForm,
    position_id: i64,
    gender: Gender,
    date_of_birth: NaiveDate,
    hire_date: NaiveDate,
    salary: Option<Decimal>,
    contract_end_date: Option<NaiveDate>,
) -> NewEmployee {
    NewEmployee {
        first_name: form.first_name.trim().to_string(),
        last_name: form.last_name.trim().to_string(),
        email: form.email.trim().to_string(),
        phone: form.phone.trim().to_string(),
        address: form.address.trim().to_string(),
        gender,
        date_of_birth,
        hire_date,
        position_id: Some(position_id),
        salary: salary.unwrap_or(Decimal::ZERO),
        is_active: true,
        termination_date: None,
        contract_end_date,
    }
}
