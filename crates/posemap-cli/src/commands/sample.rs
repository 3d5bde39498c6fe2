use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use posemap_core::config::SampleConfig;
use posemap_core::dataset::{PoseDataset, Sample};
use posemap_core::heatmap::peak;
use posemap_core::io::image_io::save_map_png;
use tracing::info;

use crate::summary::print_sample_summary;

/// Samples produced per rayon batch between progress updates.
const BATCH_SIZE: usize = 8;

#[derive(Args)]
pub struct SampleArgs {
    /// Dataset root containing `train/` and `test/` record directories
    pub root: PathBuf,

    /// Video index to sample (repeatable)
    #[arg(short, long)]
    pub index: Vec<usize>,

    /// Sample every video in the split
    #[arg(long, conflicts_with = "index")]
    pub all: bool,

    /// Seed for window selection (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Use the evaluation split (no neck synthesis)
    #[arg(long)]
    pub eval: bool,

    /// Sample config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory for PNG previews of the label and center maps
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: &SampleArgs) -> Result<()> {
    let mut config: SampleConfig = if let Some(ref config_path) = args.config {
        let contents = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;
        toml::from_str(&contents).context("Invalid sample config")?
    } else {
        SampleConfig::default()
    };
    if args.eval {
        config.train = false;
    }

    let dataset = PoseDataset::open(&args.root, config)
        .with_context(|| format!("Failed to open dataset {}", args.root.display()))?;

    let indices: Vec<usize> = if args.all {
        (0..dataset.len()).collect()
    } else if args.index.is_empty() {
        vec![0]
    } else {
        args.index.clone()
    };

    let seed = args.seed.unwrap_or_else(rand::random::<u64>);
    info!(seed, samples = indices.len(), "Producing samples");

    if let Some(ref out) = args.output {
        fs::create_dir_all(out)
            .with_context(|| format!("Failed to create {}", out.display()))?;
    }

    let pb = ProgressBar::new(indices.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    pb.set_message("Sampling");

    let mut produced = Vec::with_capacity(indices.len());
    for chunk in indices.chunks(BATCH_SIZE) {
        let samples = dataset
            .load_batch(chunk, seed)
            .context("Failed to produce samples")?;
        for (&index, sample) in chunk.iter().zip(samples) {
            if let Some(ref out) = args.output {
                write_previews(&sample, &out.join(format!("{:04}", index)))?;
            }
            produced.push((index, sample_stats(&sample)));
            pb.inc(1);
        }
    }
    pb.finish_with_message("Done");

    for (index, stats) in &produced {
        print_sample_summary(*index, stats, dataset.config());
    }

    if let Some(ref out) = args.output {
        println!("\nPreviews written to {}", out.display());
    }

    Ok(())
}

/// Figures reported per sample after its tensors are dropped.
pub struct SampleStats {
    pub start: usize,
    pub frames: usize,
    pub image_dims: (usize, usize),
    pub label_dims: (usize, usize, usize, usize),
    pub visible: Vec<usize>,
    pub labeled: Vec<usize>,
    /// Largest joint confidence per frame and its `(x, y)` label cell.
    pub peaks: Vec<Option<((usize, usize), f32)>>,
}

fn sample_stats(sample: &Sample) -> SampleStats {
    let (_, _, h, w) = sample.images.dim();
    SampleStats {
        start: sample.window.start,
        frames: sample.seq_len(),
        image_dims: (w, h),
        label_dims: sample.label_map.dim(),
        visible: sample.labels.iter().map(|l| l.visible_count()).collect(),
        labeled: sample
            .labels
            .iter()
            .map(|l| l.joints.iter().filter(|j| j.visibility.is_labeled()).count())
            .collect(),
        peaks: (0..sample.seq_len())
            .map(|k| peak(sample.joint_max(k).view()))
            .collect(),
    }
}

/// Write joint max-projection and background per frame plus the center map.
/// Maps are transposed back to `[y, x]` so previews read like the frame.
fn write_previews(sample: &Sample, dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;

    for k in 0..sample.seq_len() {
        let frame = sample.window.start + k + 1;
        save_map_png(
            sample.joint_max(k).t(),
            &dir.join(format!("{:06}_joints.png", frame)),
        )?;
        save_map_png(
            sample.background(k).t(),
            &dir.join(format!("{:06}_background.png", frame)),
        )?;
    }

    save_map_png(sample.center(), &dir.join("center.png"))?;
    Ok(())
}
