//! Demo bibliography used to seed the viewer.
//!
//! Stands in for the data-binding layer of the full tool: one set per
//! venue, one node per entry, each node registered with its owning set at
//! construction. No bibliography parsing happens here; the records are
//! fixture data.

use bibvis_core::diagram::Diagram;
use glam::Vec2;
use rand::Rng;

/// Venue groupings with the citation keys of their entries.
const VENUES: &[(&str, &[&str])] = &[
    (
        "IEEE VIS",
        &[
            "munzner2014nested",
            "satyanarayan2017vega",
            "liu2018steering",
            "kim2019glyphs",
        ],
    ),
    (
        "TVCG",
        &[
            "heer2010tour",
            "sedlmair2012design",
            "brehmer2013typology",
            "wang2021survey",
            "chen2015overview",
        ],
    ),
    (
        "EuroVis",
        &[
            "blascheck2017eyetracking",
            "isenberg2017visdata",
            "kerren2019networks",
        ],
    ),
    (
        "CHI",
        &[
            "shneiderman1996eyes",
            "amar2005lowlevel",
            "hornbaek2017usability",
            "correll2019ethics",
        ],
    ),
    ("CGF", &["telea2016multiscale", "vonlandesberger2011graphs"]),
];

/// Vertical spacing between consecutive set targets.
const TARGET_SPACING: f32 = 160.0;
/// Horizontal stagger of the target column.
const TARGET_STAGGER: f32 = 120.0;
/// Half-range of the initial random scatter around a set's spawn point.
const SPAWN_SCATTER: f32 = 40.0;

/// Builds the demo diagram.
///
/// Sets spawn scattered near the origin and drift toward targets
/// staggered down a vertical column, matching the layout's vertical
/// bias; each set's nodes spawn scattered around their set.
pub fn demo_diagram(rng: &mut impl Rng) -> Diagram {
    let mut diagram = Diagram::new();

    let rows = VENUES.len() as f32;
    for (i, (venue, keys)) in VENUES.iter().enumerate() {
        let side = if i % 2 == 0 { -1.0 } else { 1.0 };
        let target = Vec2::new(
            side * TARGET_STAGGER,
            (i as f32 - (rows - 1.0) / 2.0) * TARGET_SPACING,
        );
        let spawn = scatter(rng);
        let set = diagram.add_set(spawn, *venue, target);
        for key in *keys {
            diagram.add_node(spawn + scatter(rng), *key, set);
        }
    }

    diagram
}

fn scatter(rng: &mut impl Rng) -> Vec2 {
    Vec2::new(
        rng.random_range(-SPAWN_SCATTER..=SPAWN_SCATTER),
        rng.random_range(-SPAWN_SCATTER..=SPAWN_SCATTER),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn every_venue_becomes_a_set_with_its_entries() {
        let mut rng = StdRng::seed_from_u64(1);
        let diagram = demo_diagram(&mut rng);

        assert_eq!(diagram.sets.len(), VENUES.len());
        let entries: usize = VENUES.iter().map(|(_, keys)| keys.len()).sum();
        assert_eq!(diagram.nodes.len(), entries);

        for (set, (venue, keys)) in diagram.sets.iter().zip(VENUES) {
            assert_eq!(set.title, *venue);
            assert_eq!(set.nodes.len(), keys.len());
        }
    }

    #[test]
    fn targets_are_distinct_and_vertically_spread() {
        let mut rng = StdRng::seed_from_u64(1);
        let diagram = demo_diagram(&mut rng);

        for pair in diagram.sets.windows(2) {
            assert_ne!(pair[0].target, pair[1].target);
            assert!(pair[1].target.y - pair[0].target.y >= TARGET_SPACING - 1e-3);
        }
    }
}
