use std::fmt::Write;

use crate::routing::RoutePlan;

/// Presentation style for turning a [`RoutePlan`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    /// One line per border crossing with its distance, then the total.
    PlainText,
    /// Country names only, with `+`/`|`/`-` prefixes for first/middle/last.
    Basic,
}

impl RoutePlan {
    /// Render the plan using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::Basic => self.render_basic(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(buffer, "Route from {} to {}:", self.start, self.goal);
        for leg in &self.legs {
            let _ = writeln!(
                buffer,
                "* {} --> {} ({} km.)",
                leg.from, leg.to, leg.distance
            );
        }
        let _ = writeln!(buffer, "Total distance: {} km.", self.total_distance);
        buffer
    }

    fn render_basic(&self) -> String {
        let mut buffer = String::new();
        let len = self.steps.len();
        for (i, step) in self.steps.iter().enumerate() {
            let prefix = if i == 0 {
                '+'
            } else if i + 1 == len {
                '-'
            } else {
                '|'
            };
            let _ = writeln!(buffer, "{} {}", prefix, step);
        }
        let _ = writeln!(
            buffer,
            "{} km across {} borders",
            self.total_distance,
            self.hop_count()
        );
        buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::ShortestPath;

    fn plan() -> RoutePlan {
        RoutePlan::from_path(ShortestPath {
            distance: 250,
            steps: vec!["X".into(), "Y".into(), "Z".into()],
            cumulative: vec![0, 100, 250],
        })
        .expect("non-empty path")
    }

    #[test]
    fn plain_text_lists_legs_and_total() {
        assert_eq!(
            plan().render(RouteRenderMode::PlainText),
            "Route from X to Z:\n\
             * X --> Y (100 km.)\n\
             * Y --> Z (150 km.)\n\
             Total distance: 250 km.\n"
        );
    }

    #[test]
    fn basic_marks_first_middle_and_last() {
        assert_eq!(
            plan().render(RouteRenderMode::Basic),
            "+ X\n| Y\n- Z\n250 km across 2 borders\n"
        );
    }

    #[test]
    fn single_country_route_has_no_legs() {
        let plan = RoutePlan::from_path(ShortestPath {
            distance: 0,
            steps: vec!["X".into()],
            cumulative: vec![0],
        })
        .expect("non-empty path");

        assert_eq!(
            plan.render(RouteRenderMode::PlainText),
            "Route from X to X:\nTotal distance: 0 km.\n"
        );
    }
}
