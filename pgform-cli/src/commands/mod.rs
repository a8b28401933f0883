pub mod serve;
pub mod serve_model;
