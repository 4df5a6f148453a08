pub(crate) mod parallel;
pub(crate) mod partition;
pub(crate) mod sequential;
