pub mod dashboard;
pub mod department;
pub mod employee;
pub mod leave;
pub mod position;
pub mod review;
