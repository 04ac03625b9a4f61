pub mod error;

// Appeal timetable domain modules
pub mod appeal;
pub mod config;
pub mod timetable;

pub use error::*;

pub use appeal::*;
pub use config::*;
pub use timetable::*;
