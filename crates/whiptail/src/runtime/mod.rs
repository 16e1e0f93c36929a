mod runner;

pub use runner::{DialogRunner, ProcessRunner, RawOutput};
