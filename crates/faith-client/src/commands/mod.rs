pub mod classify;
pub mod impact;
pub mod roi;
pub mod samples;
