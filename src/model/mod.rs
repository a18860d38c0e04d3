pub mod course_record;
pub mod extraction_report;
