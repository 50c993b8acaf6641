pub mod common;

pub mod err;
