//! Plain-text chart report.

use crate::chart::{ChartData, ChartPoint};
use crate::western::{house_of, SignPosition};
use std::fmt;

/// One line per point: `Sun ☉: 22°59' Leo (142.99°)`, with ` (R)` before
/// the longitude when retrograde
pub fn point_line(point: &ChartPoint) -> String {
    let retro = if point.retrograde() { " (R)" } else { "" };
    format!(
        "{} {}: {}{} ({:.2}°)",
        point.name(),
        point.body().glyph(),
        point.sign_position(),
        retro,
        point.true_longitude()
    )
}

/// Full report: header, points, cusps, angles, aspects and warnings.
/// `orb` is only quoted when no aspect was found.
pub fn text_report(data: &ChartData, orb: f64) -> String {
    Report { data, orb }.to_string()
}

struct Report<'a> {
    data: &'a ChartData,
    orb: f64,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Report { data, orb } = *self;
        writeln!(out, "{} ({} houses)", data.kind.title(), data.house_system)?;
        writeln!(out, "Local time: {} ({})", data.local.format("%Y-%m-%d %H:%M"), data.zone)?;
        writeln!(out, "UTC: {}", data.instant.format("%Y-%m-%d %H:%M:%S"))?;
        match &data.place {
            Some(place) => writeln!(
                out,
                "Location: {} ({:.4}, {:.4})",
                place, data.location.lat, data.location.lon
            )?,
            None => writeln!(out, "Location: {:.4}, {:.4}", data.location.lat, data.location.lon)?,
        }
        writeln!(out, "{} chart", if data.day_chart { "Day" } else { "Night" })?;

        writeln!(out, "\nPoints:")?;
        for point in &data.points {
            writeln!(
                out,
                "  {} [house {}]",
                point_line(point),
                house_of(point.true_longitude(), &data.houses)
            )?;
        }

        writeln!(out, "\nHouse cusps:")?;
        for (i, cusp) in data.houses.cusps.iter().enumerate() {
            writeln!(out, "  House {}: {}", i + 1, SignPosition::from_longitude(*cusp))?;
        }
        writeln!(out, "\nAscendant: {}", SignPosition::from_longitude(data.ascendant()))?;
        writeln!(out, "Midheaven: {}", SignPosition::from_longitude(data.midheaven()))?;

        writeln!(out, "\nAspects:")?;
        if data.aspects.is_empty() {
            writeln!(out, "  No major aspects within {}° orb.", orb)?;
        }
        for aspect in &data.aspects {
            writeln!(
                out,
                "  {} - {}: {} ({:.2}°)",
                aspect.point1, aspect.point2, aspect.kind, aspect.angular_distance
            )?;
        }

        if !data.warnings.is_empty() {
            writeln!(out, "\nWarnings:")?;
            for warning in &data.warnings {
                writeln!(out, "  {}", warning)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::Body;

    #[test]
    fn test_point_line_format() {
        let sun = ChartPoint::new(Body::Sun, 142.9999, 0.95);
        assert_eq!(point_line(&sun), "Sun ☉: 22°59' Leo (143.00°)");

        let mercury = ChartPoint::new(Body::Mercury, 15.5, -0.3);
        assert_eq!(point_line(&mercury), "Mercury ☿: 15°30' Aries (R) (15.50°)");
    }
}
