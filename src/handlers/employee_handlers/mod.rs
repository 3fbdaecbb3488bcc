pub mod helpers;
pub mod list;
pub mod create;
pub mod delete;
pub mod filter;

pub use self::list::list;
pub use self::create::{new_form, create};
pub use self::delete::{remove_page, delete};
pub use self::filter::{filter_page, filter_submit};
