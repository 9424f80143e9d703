//! Background workers

pub mod scanner;
