use std::fmt;

use owo_colors::OwoColorize;

use super::Theme;
use crate::presentation::formatters::text_bar;
use crate::presentation::view_models::{
    BadgeViewModel, BarItemViewModel, BenchmarkViewModel, ForecastChartViewModel,
    HeaderViewModel, NoteViewModel,
};

pub(crate) const BAR_COLUMNS: u16 = 20;

pub(crate) fn write_header(
    f: &mut fmt::Formatter,
    header: &HeaderViewModel,
    theme: Theme,
) -> fmt::Result {
    writeln!(f, "{}", header.title.style(theme.title()))?;
    writeln!(f, "{}", header.subtitle.style(theme.muted()))?;
    if !header.actions.is_empty() {
        let buttons: Vec<String> = header.actions.iter().map(|a| format!("[ {} ]", a)).collect();
        writeln!(f, "{}", buttons.join(" ").style(theme.muted()))?;
    }
    Ok(())
}

pub(crate) fn write_section(
    f: &mut fmt::Formatter,
    title: &str,
    description: &str,
    theme: Theme,
) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "{}", title.style(theme.section()))?;
    if !description.is_empty() {
        writeln!(f, "{}", description.style(theme.muted()))?;
    }
    Ok(())
}

pub(crate) fn bar(width_pct: f64, theme: Theme) -> String {
    let (filled, track) = text_bar(width_pct, BAR_COLUMNS);
    format!("{}{}", filled.style(theme.bar()), track.style(theme.muted()))
}

pub(crate) fn badge(badge: &BadgeViewModel, theme: Theme) -> String {
    format!("[{}]", badge.label)
        .style(theme.badge(badge.style))
        .to_string()
}

pub(crate) fn write_bar_items(
    f: &mut fmt::Formatter,
    items: &[BarItemViewModel],
    theme: Theme,
) -> fmt::Result {
    let width = items.iter().map(|i| i.label.chars().count()).max().unwrap_or(0);
    for item in items {
        writeln!(
            f,
            "  {:<width$}  {}  {:.1}",
            item.label,
            bar(item.width_pct, theme),
            item.score_pct,
            width = width
        )?;
    }
    Ok(())
}

pub(crate) fn write_benchmarks(
    f: &mut fmt::Formatter,
    metrics: &[BenchmarkViewModel],
    theme: Theme,
) -> fmt::Result {
    let width = metrics.iter().map(|m| m.metric.chars().count()).max().unwrap_or(0);
    for m in metrics {
        writeln!(
            f,
            "  {:<width$}  {}  {}{} {}",
            m.metric,
            bar(m.width_pct, theme),
            m.value,
            m.unit,
            format!("(target {}{})", m.target, m.unit).style(theme.muted()),
            width = width
        )?;
    }
    Ok(())
}

pub(crate) fn write_notes(
    f: &mut fmt::Formatter,
    notes: &[NoteViewModel],
    theme: Theme,
) -> fmt::Result {
    for note in notes {
        writeln!(f, "  {} {}", note.icon.glyph(), note.title.style(theme.title()))?;
        writeln!(f, "    {}", note.detail.style(theme.muted()))?;
    }
    Ok(())
}

/// Forecast series as a table: one row per period, `-` where a series has no value.
pub(crate) fn write_forecast_table(
    f: &mut fmt::Formatter,
    vm: &ForecastChartViewModel,
    theme: Theme,
) -> fmt::Result {
    let chart = &vm.chart;
    let lookup = |series: &[(f64, f64)], idx: usize| {
        series
            .iter()
            .find(|&&(x, _)| x as usize == idx)
            .map(|&(_, y)| format!("{}", y))
            .unwrap_or_else(|| "-".to_string())
    };

    let mut heading = format!("  {:<6} {:>8} {:>10}", "Period", "Actual", vm.predicted_label);
    if chart.has_band() {
        heading.push_str(&format!(" {:>8} {:>8}", "Lower", "Upper"));
    }
    writeln!(f, "{}", heading.style(theme.muted()))?;

    for (idx, period) in chart.periods.iter().enumerate() {
        let mut row = format!(
            "  {:<6} {:>8} {:>10}",
            period,
            lookup(&chart.actual, idx),
            lookup(&chart.predicted, idx)
        );
        if chart.has_band() {
            row.push_str(&format!(
                " {:>8} {:>8}",
                lookup(&chart.lower, idx),
                lookup(&chart.upper, idx)
            ));
        }
        if chart.boundary == Some(idx) {
            write!(f, "{}", row)?;
            writeln!(f, "  {}", "◀ last actual".style(theme.muted()))?;
        } else {
            writeln!(f, "{}", row)?;
        }
    }
    Ok(())
}
