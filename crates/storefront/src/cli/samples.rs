use anyhow::Result;
use storefront_seq::samples::{Sample, run_all};

pub fn samples() -> Result<()> {
    for line in run_all().iter().map(format_sample) {
        println!("{line}");
    }
    Ok(())
}

fn format_sample(sample: &Sample) -> String {
    format!("{}: {}", sample.label, sample.value)
}
