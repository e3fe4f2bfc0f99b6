pub mod course;
pub mod topic;
