//! Running inspectors and collecting jailbreak indicators.

pub mod report;
pub mod runner;

pub use report::{DetectionReport, Jailbreak};
pub use runner::JailbreakDetector;
