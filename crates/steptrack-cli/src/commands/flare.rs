use std::str::FromStr;

use anyhow::{Result, anyhow};
use steptrack_core::{FlareRank, flare_skill};

pub fn run(level: u8, rank: &str) -> Result<()> {
    let flare_rank = FlareRank::from_str(rank)
        .map_err(|_| anyhow!("Invalid flare rank: {rank} (expected None, I..IX or EX)"))?;
    let skill = flare_skill(level, flare_rank)?;
    println!("{skill}");
    Ok(())
}
