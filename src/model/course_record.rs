use serde::{Deserialize, Serialize};

/// 从课程卡片中提取出的一条记录
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct CourseRecord {
    pub title: String,
    pub link: String,
}
