pub mod course;
pub mod fields;

pub use course::{Course, CourseKey};
pub use fields::{split_list, FieldValue, LIST_DELIMITER};
