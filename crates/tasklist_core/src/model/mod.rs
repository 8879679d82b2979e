mod task;

pub use task::Task;
pub(crate) use task::now_rfc3339;
