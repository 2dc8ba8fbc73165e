pub mod forward;
pub mod spread;
