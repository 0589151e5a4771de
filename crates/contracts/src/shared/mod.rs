pub mod indicators;
pub mod provider;
