use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use posemap_core::consts::DEFAULT_RAW_JOINT_COUNT;
use posemap_core::labels::Visibility;
use posemap_core::record::VideoRecord;

#[derive(Args)]
pub struct InfoArgs {
    /// Video annotation record (JSON)
    pub file: PathBuf,

    /// Joints expected per frame
    #[arg(long, default_value_t = DEFAULT_RAW_JOINT_COUNT)]
    pub joints: usize,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let record = VideoRecord::load(&args.file)
        .with_context(|| format!("Failed to read record {}", args.file.display()))?;

    println!("File:        {}", args.file.display());
    println!("Frames:      {}", record.frame_count);
    println!("Dimensions:  {}x{}", record.width(), record.height());
    println!("Joints:      {}", record.joint_columns());
    println!("Frame dir:   {}", record.frame_dir.display());
    println!("Boxes:       {}", record.bbox.len());

    let (mut visible, mut occluded, mut absent) = (0usize, 0usize, 0usize);
    for &flag in record.visibility.iter().flatten() {
        match Visibility::from_flag(flag) {
            Visibility::Visible => visible += 1,
            Visibility::Occluded => occluded += 1,
            Visibility::Absent => absent += 1,
        }
    }
    println!(
        "Annotations: {} visible, {} occluded, {} absent",
        visible, occluded, absent
    );

    if let Some(warning) = validation_warning(&record, args.joints) {
        println!("Warning:     {}", warning);
    }

    Ok(())
}

fn validation_warning(record: &VideoRecord, joints: usize) -> Option<String> {
    record.validate(joints).err().map(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(joints: usize) -> VideoRecord {
        VideoRecord {
            frame_count: 2,
            frame_dir: PathBuf::from("frames"),
            dimensions: [100, 100],
            x: vec![vec![10.0; joints]; 2],
            y: vec![vec![10.0; joints]; 2],
            visibility: vec![vec![1; joints]; 2],
            bbox: vec![],
        }
    }

    #[test]
    fn test_warns_when_joint_count_differs_from_expected() {
        let warning = validation_warning(&record(13), DEFAULT_RAW_JOINT_COUNT);
        assert!(warning.is_some_and(|w| w.contains("13 joints")));
        assert_eq!(validation_warning(&record(12), DEFAULT_RAW_JOINT_COUNT), None);
    }
}
