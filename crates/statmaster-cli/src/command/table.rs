//! Plain-text tables for terminal output.

use statmaster_stats::{
    descriptive::{DescriptiveStats, Statistic},
    frequency::{FrequencyDistribution, OgivePoint},
    stem_leaf::StemRow,
};

const BAR_WIDTH: usize = 40;

pub(super) fn format_values(values: &[f64]) -> String {
    if values.is_empty() {
        return "none".to_string();
    }
    values
        .iter()
        .map(|v| format!("{v:.2}"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_stat_row<T>(label: &str, value: &str, stat: &Statistic<T>) {
    println!(
        "  {:<14} {:>12}   {:<36} {}",
        label, value, stat.formula.expression, stat.formula.calculation
    );
}

pub(super) fn print_stats(stats: &DescriptiveStats) {
    println!(
        "  n = {}, min = {:.2}, max = {:.2}, variance kind: {:?}",
        stats.count, stats.min, stats.max, stats.variance_kind
    );
    println!("  {:<14} {:>12}   {:<36} Calculation", "Measure", "Value", "Formula");
    println!("  {}", "-".repeat(90));
    print_stat_row("Mean", &format!("{:.3}", stats.mean.value), &stats.mean);
    print_stat_row("Median", &format!("{:.3}", stats.median.value), &stats.median);
    print_stat_row("Mode", &format_values(&stats.mode.value), &stats.mode);
    print_stat_row("Variance", &format!("{:.3}", stats.variance.value), &stats.variance);
    print_stat_row("Std. dev.", &format!("{:.3}", stats.std_dev.value), &stats.std_dev);
    print_stat_row("Range", &format!("{:.3}", stats.range.value), &stats.range);
    print_stat_row("CV", &format!("{:.2}%", stats.cv.value), &stats.cv);
    print_stat_row("Skewness", &format!("{:.3}", stats.skewness.value), &stats.skewness);
}

pub(super) fn print_frequency_table(dist: &FrequencyDistribution) {
    println!(
        "  {} classes of width {} over a range of {} (n = {})",
        dist.num_classes, dist.class_width, dist.range, dist.total
    );
    println!(
        "  {:>5} {:>21} {:>9} {:>6} {:>9} {:>6}  Histogram",
        "Class", "Limits", "Midpoint", "f", "Rel. f", "F"
    );
    println!("  {}", "-".repeat(70 + BAR_WIDTH));
    let max_frequency = dist.rows.iter().map(|r| r.frequency).max().unwrap_or(0);
    for (idx, row) in dist.rows.iter().enumerate() {
        let limits = format!(
            "{:.2} - {:.2}",
            row.class_limits.lower, row.class_limits.upper
        );
        println!(
            "  {:>5} {:>21} {:>9.2} {:>6} {:>9.3} {:>6}  {}",
            idx,
            limits,
            row.midpoint,
            row.frequency,
            row.relative_frequency,
            row.cumulative_frequency,
            bar(row.frequency, max_frequency),
        );
    }
}

fn bar(frequency: u64, max_frequency: u64) -> String {
    if max_frequency == 0 {
        return String::new();
    }
    let len = u128::from(frequency) * BAR_WIDTH as u128 / u128::from(max_frequency);
    "#".repeat(usize::try_from(len).unwrap_or(BAR_WIDTH))
}

pub(super) fn print_ogive(points: &[OgivePoint]) {
    println!("  {:>12} {:>12}", "Upper limit", "Cumulative%");
    for point in points {
        println!("  {:>12.2} {:>11.1}%", point.value, point.cumulative_percent);
    }
}

pub(super) fn print_stem_leaf(rows: &[StemRow]) {
    for row in rows {
        let leaves = row
            .leaves
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        println!("  {:>4} | {}", row.stem, leaves);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_values() {
        assert_eq!(format_values(&[]), "none");
        assert_eq!(format_values(&[1.0, 2.346]), "1.00, 2.35");
    }

    #[test]
    fn test_bar_scales_to_max() {
        assert_eq!(bar(0, 0), "");
        assert_eq!(bar(5, 5).len(), 40);
        assert_eq!(bar(1, 4).len(), 10);
    }

    #[test]
    fn test_bar_with_huge_frequencies() {
        assert_eq!(bar(u64::MAX, u64::MAX).len(), BAR_WIDTH);
        assert_eq!(bar(u64::MAX / 2, u64::MAX).len(), BAR_WIDTH / 2 - 1);
    }
}
