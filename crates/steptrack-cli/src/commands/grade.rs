use anyhow::Result;
use steptrack_core::DanceLevel;

pub fn run(score: u32) -> Result<()> {
    let level = DanceLevel::for_score(score)?;
    println!("{level}");
    Ok(())
}
