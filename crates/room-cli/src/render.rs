//! Plain-text rendering of engine results.

use std::fmt::Write;

use room_engine::{format_minutes, AvailabilityReport, BuildingDirectory, WeekView};

/// Header line, totals, then one block per room in report order.
pub fn availability(report: &AvailabilityReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} - {} {} ~ {}",
        display_name(&report.building_name, &report.building_id),
        report.date.format("%Y-%m-%d"),
        format_minutes(report.window.start()),
        format_minutes(report.window.end()),
    );

    if report.is_empty() {
        out.push_str("No rooms found for this building.");
        return out;
    }

    let _ = writeln!(
        out,
        "{} rooms, {} available",
        report.len(),
        report.available_count()
    );

    for room in &report.rooms {
        let status = if room.available { "available" } else { "occupied" };
        let _ = write!(out, "\n{}  {}", room.room_name, status);
        for conflict in &room.conflicts {
            let _ = write!(out, "\n    {}: {}", conflict.interval, conflict.title);
        }
    }

    out
}

/// One block per day, Monday first; the anchor day is marked.
pub fn week(view: &WeekView) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        "{} ({}) - {} ~ {}",
        view.room_name,
        view.building_id,
        view.week_start.format("%Y-%m-%d"),
        view.week_end.format("%Y-%m-%d"),
    );

    for day in &view.days {
        let marker = if day.is_anchor { " *" } else { "" };
        let _ = write!(out, "\n\n{}{}", day.date.format("%a %Y-%m-%d"), marker);
        if day.records.is_empty() {
            out.push_str("\n    (no bookings)");
        }
        for record in &day.records {
            let _ = write!(out, "\n    {}: {}", record.interval, record.title);
        }
    }

    out
}

pub fn buildings(directory: &BuildingDirectory) -> String {
    directory
        .entries()
        .iter()
        .map(|(id, name)| format!("{id}\t{name}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn display_name<'a>(name: &'a str, id: &'a str) -> &'a str {
    if name.is_empty() {
        id
    } else {
        name
    }
}
