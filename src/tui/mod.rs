//! Terminal frontend for the trainer.
//!
//! Organized along FP/Unix boundaries:
//! - `theme`: pure style constants
//! - `view`: pure rendering (session state → widget trees)
//! - `run`: effects (terminal lifecycle, key mapping, host loop)

pub mod run;
pub mod theme;
pub mod view;

pub use run::run;
