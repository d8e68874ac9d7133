pub mod app;
pub mod products;
pub mod samples;
