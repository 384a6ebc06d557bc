//! `tidyplan sample <modern|legacy>`

use anyhow::Result;

use tidyplan_core::template::{LEGACY_SAMPLE, MODERN_SAMPLE};

use crate::SampleKind;

/// Print a canned example template to stdout.
pub fn run_sample(kind: SampleKind) -> Result<()> {
    let sample = match kind {
        SampleKind::Modern => MODERN_SAMPLE,
        SampleKind::Legacy => LEGACY_SAMPLE,
    };
    println!("{sample}");
    Ok(())
}
