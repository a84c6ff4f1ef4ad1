pub mod entities;
pub mod errors;
pub mod ports;
pub mod time_of_day;
pub mod week_days;
