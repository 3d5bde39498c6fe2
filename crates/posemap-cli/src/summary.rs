use console::Style;
use posemap_core::config::SampleConfig;

use crate::commands::sample::SampleStats;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    mode: Style,
    disabled: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            mode: Style::new().green(),
            disabled: Style::new().dim().yellow(),
        }
    }
}

pub fn print_sample_summary(index: usize, stats: &SampleStats, config: &SampleConfig) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to(format!("Sample {}", index)));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(10)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Mode"),
        s.mode.apply_to(if config.train { "train" } else { "eval" })
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Window"),
        s.value.apply_to(format!(
            "frames {}..{}",
            stats.start + 1,
            stats.start + stats.frames
        ))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Images"),
        s.value.apply_to(format!(
            "{} x 3 x {}x{}",
            stats.frames, stats.image_dims.0, stats.image_dims.1
        ))
    );
    let (n, c, h, w) = stats.label_dims;
    println!(
        "  {:<14}{}",
        s.label.apply_to("Label map"),
        s.value.apply_to(format!("{} x {} x {}x{}", n, c, h, w))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Center map"),
        s.value.apply_to(format!(
            "1 x {}x{} (sigma {})",
            config.boxsize, config.boxsize, config.center_sigma
        ))
    );
    println!();

    println!("  {}", s.header.apply_to("Joints per frame"));
    for (k, (&visible, &labeled)) in stats.visible.iter().zip(&stats.labeled).enumerate() {
        let frame = stats.start + k + 1;
        let peak = match stats.peaks.get(k).copied().flatten() {
            Some(((x, y), v)) if v > 0.0 => format!(", peak {:.3} at ({}, {})", v, x, y),
            _ => String::new(),
        };
        if labeled == 0 {
            println!(
                "    {:<12}{}",
                s.label.apply_to(format!("{:06}", frame)),
                s.disabled.apply_to("no labels")
            );
        } else {
            println!(
                "    {:<12}{}",
                s.label.apply_to(format!("{:06}", frame)),
                s.value
                    .apply_to(format!("{} labeled, {} visible{}", labeled, visible, peak))
            );
        }
    }
}
