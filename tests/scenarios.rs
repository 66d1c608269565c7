use floor_allocation::engine::{
    ChartKind, ChartMode, DirectoryModel, Engine, GroupBody, Listing, Reservation, Scope,
    SelectionState, SeriesColor,
};
use floor_allocation::model::{BuildingRecord, FloorRoster, StatsScope};
use pretty_assertions::assert_eq;

const ROSTER: &str = r#"{
    "status": "success",
    "data": [
        {"id": "10", "floor": "G"},
        {"id": "11", "floor": "1"},
        {"id": "12", "floor": "2"}
    ]
}"#;

const BUILDING: &str = r#"{
    "status": "success",
    "data": {
        "building_total_area": 1000,
        "building_occupied_area": 600,
        "building_remaining_area": 400,
        "building_occupied_percentage": 60,
        "building_remaining_percentage": 40,
        "floors_data": [
            {
                "name": "G",
                "total_area": 400,
                "occupied_area": 300,
                "remaining_area": 100,
                "occupied_percentage": 75,
                "remaining_percentage": 25,
                "companies": [
                    {"name": "Globex", "occupied_percentage": 75, "occupied_area": 300}
                ]
            },
            {
                "name": "1",
                "total_area": 300,
                "occupied_percentage": 80,
                "remaining_percentage": 20,
                "remark": "blocked"
            },
            {
                "name": "2",
                "total_area": 300,
                "occupied_area": 120,
                "occupied_percentage": 40,
                "remaining_percentage": 60,
                "companies": [
                    {"name": "Acme", "occupied_percentage": 40}
                ]
            }
        ]
    }
}"#;

fn engine(scope: Scope, mode: ChartMode) -> Engine {
    let roster: FloorRoster = serde_json::from_str(ROSTER).expect("roster decodes");
    let record: BuildingRecord = serde_json::from_str(BUILDING).expect("building decodes");
    Engine::new(
        &roster,
        record,
        SelectionState::new(scope, mode),
        Reservation::default(),
    )
}

#[test]
fn blocked_floor_bar_is_muted_and_reports_reserved() {
    let chart = engine(Scope::All, ChartMode::Bar).chart();

    assert_eq!(chart.kind, ChartKind::Bar);
    assert_eq!(chart.labels, vec!["G", "1", "2"]);
    assert_eq!(chart.series[0].colors[1], SeriesColor::ReservedMuted);
    assert_eq!(chart.series[0].values[1], 0.0);

    let target = chart.resolve(1).expect("floor 1 resolves");
    assert!(target.is_blocked);
    assert_eq!(target.reserved_pct, 100.0);

    let tooltip = chart.tooltip(0, 1).expect("tooltip for floor 1");
    assert_eq!(tooltip.label, "Reserved: 100%");
}

#[test]
fn building_doughnut_has_two_slices_without_reserved() {
    let chart = engine(Scope::All, ChartMode::Doughnut).chart();

    assert_eq!(chart.kind, ChartKind::Doughnut);
    assert_eq!(chart.labels, vec!["Occupied", "Remaining"]);
    assert_eq!(chart.series.len(), 1);
    assert_eq!(chart.series[0].values, vec![60.0, 40.0]);
    assert!(!chart.series[0]
        .colors
        .iter()
        .any(|c| matches!(c, SeriesColor::Reserved | SeriesColor::ReservedMuted)));
}

#[test]
fn company_without_area_shows_not_available() {
    let engine = engine(Scope::floor("2"), ChartMode::Distributed);

    let DirectoryModel::Floor { listing, .. } = engine.directory() else {
        panic!("expected a single floor directory");
    };
    let Listing::Companies(lines) = listing else {
        panic!("expected companies on floor 2");
    };
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].name, "Acme");
    assert_eq!(lines[0].share_text(), "40%");
    assert_eq!(lines[0].area_text(), "Area: N/A sq ft");
}

#[test]
fn single_floor_bar_uses_floor_percentages() {
    let engine = engine(Scope::floor("G"), ChartMode::Bar);
    let chart = engine.chart();

    assert_eq!(chart.labels, vec!["Occupied", "Remaining"]);
    assert_eq!(chart.series[0].values, vec![75.0, 25.0]);
    assert_eq!(chart.title, "G Area Distribution");
    assert_eq!(
        engine.summary().scope,
        StatsScope::Floor {
            name: "G".to_string()
        }
    );
    assert_eq!(engine.summary().stats.total_area, 400.0);
}

#[test]
fn reserved_floor_renders_reserved_in_every_mode() {
    for mode in ChartMode::ALL {
        let chart = engine(Scope::floor("1"), mode).chart();
        assert_eq!(chart.title, "Reserved Floor", "mode {mode}");
        let row = chart.resolve(0).expect("reserved row");
        assert!(row.is_blocked, "mode {mode}");
        assert_eq!(row.occupied_pct, 0.0, "mode {mode}");
    }

    let directory = engine(Scope::floor("1"), ChartMode::Bar).directory();
    let DirectoryModel::ReservedNotice { message, .. } = directory else {
        panic!("expected reserved notice");
    };
    assert_eq!(
        message,
        "This floor is reserved and is not available for company allocation."
    );
}

#[test]
fn drilling_down_then_back_restores_building_view() {
    let mut engine = engine(Scope::All, ChartMode::Distributed);
    let before = engine.chart();

    assert!(engine.activate(2));
    assert_eq!(engine.selection().scope(), &Scope::floor("2"));
    assert_eq!(engine.chart().labels, vec!["2"]);

    engine.select(Scope::All);
    assert_eq!(engine.chart(), before);
    assert_eq!(engine.summary().scope, StatsScope::Building);
}

#[test]
fn selecting_any_floor_reports_that_floors_own_stats() {
    let record: BuildingRecord = serde_json::from_str(BUILDING).expect("building decodes");
    let floors = record.data.expect("fixture has data").floors;
    assert_eq!(floors.len(), 3);

    let mut engine = engine(Scope::All, ChartMode::Distributed);
    for floor in &floors {
        engine.select(Scope::floor(floor.name.as_str()));
        assert_eq!(
            engine.summary().scope,
            StatsScope::Floor {
                name: floor.name.clone()
            }
        );
        assert_eq!(engine.summary().stats, floor.stats(), "floor {}", floor.name);
    }
}

#[test]
fn series_stay_aligned_with_labels_in_every_mode() {
    for scope in [Scope::All, Scope::floor("G"), Scope::floor("1")] {
        for mode in ChartMode::ALL {
            let chart = engine(scope.clone(), mode).chart();
            assert_eq!(chart.targets.len(), chart.labels.len());
            for series in &chart.series {
                assert_eq!(series.values.len(), chart.labels.len(), "{scope} {mode}");
            }
        }
    }
}

#[test]
fn expanded_blocked_group_shows_notice_instead_of_companies() {
    let mut engine = engine(Scope::All, ChartMode::Distributed);
    engine.toggle("1");
    engine.toggle("2");

    let DirectoryModel::Grouped(groups) = engine.directory() else {
        panic!("expected grouped directory");
    };
    assert_eq!(groups.len(), 3);
    assert!(groups[0].body.is_none());
    assert_eq!(
        groups[1].body,
        Some(GroupBody::Reserved {
            notice: "This floor is reserved".to_string()
        })
    );
    assert!(matches!(
        &groups[2].body,
        Some(GroupBody::Listing(Listing::Companies(lines))) if lines[0].name == "Acme"
    ));
}

#[test]
fn unknown_floor_falls_back_to_building_stats() {
    let engine = engine(Scope::floor("Roof"), ChartMode::Doughnut);

    assert_eq!(engine.summary().stats.total_area, 1000.0);
    assert_eq!(engine.chart().series[0].values, vec![60.0, 40.0]);
    assert!(matches!(
        engine.directory(),
        DirectoryModel::Floor {
            listing: Listing::NoCompanies,
            ..
        }
    ));
}
