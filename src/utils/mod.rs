pub mod bgzf;
pub mod file_times;
pub mod inplace;
pub(crate) mod progress_bar_builder;
pub mod report;
