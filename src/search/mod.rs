pub mod format;
pub mod hybrid;
pub mod keywords;
pub mod vector;
