pub mod domain;
pub mod ports;
pub mod service;
pub mod todo_use_cases;
