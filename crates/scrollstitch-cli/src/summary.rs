use console::Style;
use scrollstitch_core::pipeline::config::StitchConfig;
use scrollstitch_core::pipeline::StitchReport;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_stitch_summary(config: &StitchConfig) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Scrollstitch"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(12)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(config.input.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(config.output.display())
    );
    match config.dump_dir {
        Some(ref dir) => println!(
            "  {:<14}{}",
            s.label.apply_to("Dump"),
            s.path.apply_to(dir.display())
        ),
        None => println!(
            "  {:<14}{}",
            s.label.apply_to("Dump"),
            s.disabled.apply_to("disabled")
        ),
    }
    println!();

    let w = &config.window;
    println!("  {}", s.header.apply_to("Matching"));
    println!(
        "    {:<12}{} rows x {} cols",
        s.label.apply_to("Window"),
        s.value.apply_to(w.n_rows_in_crop),
        s.value.apply_to(w.n_cols_in_crop)
    );
    println!(
        "    {:<12}{}..{} / {}..{}",
        s.label.apply_to("Cut out"),
        s.value.apply_to(w.left_crop_from),
        s.value.apply_to(w.left_crop_to),
        s.value.apply_to(w.right_crop_from),
        s.value.apply_to(w.right_crop_to)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Threshold"),
        s.value.apply_to(config.match_score_threshold)
    );
    if config.denoising_factor > 0.0 {
        println!(
            "    {:<12}{}",
            s.label.apply_to("Denoise"),
            s.value.apply_to(config.denoising_factor)
        );
    } else {
        println!(
            "    {:<12}{}",
            s.label.apply_to("Denoise"),
            s.disabled.apply_to("off")
        );
    }
    println!();
}

pub fn print_report(report: &StitchReport, config: &StitchConfig) {
    let s = Styles::new();
    let b = &report.boundary;

    println!("  {}", s.header.apply_to("Result"));
    println!(
        "    {:<12}{} of {} ({} duplicates dropped)",
        s.label.apply_to("Frames"),
        s.value.apply_to(report.kept.len()),
        s.value.apply_to(report.frames_total),
        report.frames_total - report.kept.len()
    );
    println!(
        "    {:<12}x {}..{}, y {}..{}",
        s.label.apply_to("Content"),
        b.left,
        b.right,
        b.top,
        b.bottom
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Direction"),
        s.method.apply_to(report.direction)
    );
    for (i, m) in report.matches.iter().enumerate() {
        println!(
            "    {:<12}offset {} (score {:.5})",
            s.label.apply_to(format!("Pair {i}")),
            s.value.apply_to(m.offset),
            m.score
        );
    }
    println!(
        "    {:<12}{}x{}",
        s.label.apply_to("Size"),
        s.value.apply_to(report.output_dim.1),
        s.value.apply_to(report.output_dim.0)
    );
    println!();
    println!(
        "  Output saved to {}",
        s.path.apply_to(config.output.display())
    );
}
