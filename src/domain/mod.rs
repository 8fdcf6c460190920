pub mod classify;
pub mod gateway;
pub mod outcome;
pub mod ports;
pub mod request;
