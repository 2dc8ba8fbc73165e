pub mod historical;
pub mod scenario;
pub mod synthetic;
