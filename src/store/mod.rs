pub mod attempts;
pub mod client;
