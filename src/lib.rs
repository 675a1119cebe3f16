pub mod cli;
pub mod domain;
pub mod errors;
pub mod fib;
pub mod logs;
pub mod parser;
pub mod prelude;
pub mod profit;
