use super::aggregate::{Aggregate, CompanyEntry};
use super::format::{format_area, format_pct};
use super::registry::FloorRegistry;
use super::reservation::Reservation;
use super::selection::{Scope, SelectionState};

pub const NO_COMPANIES: &str = "No companies on this floor";

#[derive(Debug, Clone, PartialEq)]
pub struct CompanyLine {
    pub name: String,
    pub occupied_pct: f64,
    pub occupied_area: Option<f64>,
}

impl CompanyLine {
    #[must_use]
    pub fn share_text(&self) -> String {
        format!("{}%", format_pct(self.occupied_pct))
    }

    /// "Area: 1,200 sq ft", or "Area: N/A sq ft" when the area is unknown.
    #[must_use]
    pub fn area_text(&self) -> String {
        match self.occupied_area {
            Some(area) => format!("Area: {} sq ft", format_area(area)),
            None => "Area: N/A sq ft".to_string(),
        }
    }
}

impl From<&CompanyEntry> for CompanyLine {
    fn from(entry: &CompanyEntry) -> Self {
        Self {
            name: entry.name.clone(),
            occupied_pct: entry.occupied_pct,
            occupied_area: entry.occupied_area,
        }
    }
}

/// Companies on one floor, or the explicit "no companies" placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum Listing {
    Companies(Vec<CompanyLine>),
    NoCompanies,
}

impl Listing {
    fn for_floor(aggregate: &Aggregate, floor_name: &str) -> Self {
        let companies: Vec<CompanyLine> = aggregate
            .companies_on(floor_name)
            .map(CompanyLine::from)
            .collect();
        if companies.is_empty() {
            Self::NoCompanies
        } else {
            Self::Companies(companies)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GroupBody {
    Reserved { notice: String },
    Listing(Listing),
}

/// One collapsible floor in the all-floors directory.
#[derive(Debug, Clone, PartialEq)]
pub struct FloorGroup {
    pub floor_name: String,
    pub is_blocked: bool,
    pub expanded: bool,
    /// `None` while collapsed.
    pub body: Option<GroupBody>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DirectoryModel {
    ReservedNotice {
        floor_name: String,
        title: String,
        message: String,
    },
    Floor {
        floor_name: String,
        listing: Listing,
    },
    Grouped(Vec<FloorGroup>),
}

impl DirectoryModel {
    #[must_use]
    pub fn heading(&self) -> String {
        match self {
            Self::ReservedNotice { floor_name, .. } | Self::Floor { floor_name, .. } => {
                format!("{floor_name} Companies")
            }
            Self::Grouped(_) => "All Companies".to_string(),
        }
    }
}

/// Builds the company directory for the current selection.
#[must_use]
pub fn view(
    aggregate: &Aggregate,
    registry: &FloorRegistry,
    selection: &SelectionState,
    reservation: &Reservation,
) -> DirectoryModel {
    match selection.scope() {
        Scope::Floor(name) if aggregate.is_blocked(name) => DirectoryModel::ReservedNotice {
            floor_name: name.clone(),
            title: super::chart::TITLE_RESERVED.to_string(),
            message: reservation.allocation_notice(),
        },
        Scope::Floor(name) => DirectoryModel::Floor {
            floor_name: name.clone(),
            listing: Listing::for_floor(aggregate, name),
        },
        Scope::All => DirectoryModel::Grouped(
            registry
                .floors()
                .iter()
                .map(|floor| {
                    let name = floor.floor_name.as_str();
                    let is_blocked = aggregate.is_blocked(name);
                    let expanded = registry.is_expanded(name);
                    let body = expanded.then(|| {
                        if is_blocked {
                            GroupBody::Reserved {
                                notice: reservation.notice(),
                            }
                        } else {
                            GroupBody::Listing(Listing::for_floor(aggregate, name))
                        }
                    });
                    FloorGroup {
                        floor_name: name.to_string(),
                        is_blocked,
                        expanded,
                        body,
                    }
                })
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::aggregate::aggregate;
    use crate::model::{BuildingRecord, FloorDescriptor, FloorRoster};
    use pretty_assertions::assert_eq;

    fn setup(scope: Scope) -> (Aggregate, FloorRegistry, SelectionState) {
        let record: BuildingRecord = serde_json::from_str(
            r#"{
                "status": "success",
                "data": {
                    "floors_data": [
                        {"name": "G", "companies": [
                            {"name": "Acme", "occupied_percentage": 40, "occupied_area": 1200},
                            {"name": "Initech", "occupied_percentage": 12.5}
                        ]},
                        {"name": "1", "remark": "blocked", "companies": [
                            {"name": "Lab", "occupied_percentage": 100}
                        ]},
                        {"name": "2"}
                    ]
                }
            }"#,
        )
        .expect("fixture decodes");
        let roster = FloorRoster {
            status: "success".to_string(),
            data: ["G", "1", "2"]
                .iter()
                .enumerate()
                .map(|(i, n)| FloorDescriptor::new(i.to_string(), *n))
                .collect(),
        };
        let agg = aggregate(&record, &scope).expect("aggregates");
        let registry = FloorRegistry::load(&roster).expect("roster loads");
        (agg, registry, SelectionState::new(scope, Default::default()))
    }

    #[test]
    fn selected_floor_lists_its_companies() {
        let (agg, registry, selection) = setup(Scope::floor("G"));
        let model = view(&agg, &registry, &selection, &Reservation::default());
        assert_eq!(model.heading(), "G Companies");

        let DirectoryModel::Floor {
            listing: Listing::Companies(lines),
            ..
        } = &model
        else {
            panic!("expected company listing, got {model:?}");
        };
        let texts: Vec<(String, String)> = lines
            .iter()
            .map(|l| (l.share_text(), l.area_text()))
            .collect();
        assert_eq!(
            texts,
            vec![
                ("40%".to_string(), "Area: 1,200 sq ft".to_string()),
                ("12.5%".to_string(), "Area: N/A sq ft".to_string()),
            ]
        );
    }

    #[test]
    fn selected_reserved_floor_is_a_notice() {
        let (agg, registry, selection) = setup(Scope::floor("1"));
        let reservation = Reservation::new(Some("IIT-Bombay".to_string()));
        let model = view(&agg, &registry, &selection, &reservation);
        assert_eq!(
            model,
            DirectoryModel::ReservedNotice {
                floor_name: "1".to_string(),
                title: "Reserved Floor".to_string(),
                message: reservation.allocation_notice(),
            }
        );
    }

    #[test]
    fn empty_floor_gets_placeholder() {
        let (agg, registry, selection) = setup(Scope::floor("2"));
        let model = view(&agg, &registry, &selection, &Reservation::default());
        assert_eq!(
            model,
            DirectoryModel::Floor {
                floor_name: "2".to_string(),
                listing: Listing::NoCompanies,
            }
        );
    }

    #[test]
    fn grouped_view_respects_expansion_flags() {
        let (agg, mut registry, selection) = setup(Scope::All);
        registry.toggle("1");
        registry.toggle("2");

        let DirectoryModel::Grouped(groups) =
            view(&agg, &registry, &selection, &Reservation::default())
        else {
            panic!("expected grouped directory");
        };

        let summary: Vec<(&str, bool, bool)> = groups
            .iter()
            .map(|g| (g.floor_name.as_str(), g.is_blocked, g.expanded))
            .collect();
        assert_eq!(
            summary,
            vec![("G", false, false), ("1", true, true), ("2", false, true)]
        );
        assert_eq!(groups[0].body, None);
        assert_eq!(
            groups[1].body,
            Some(GroupBody::Reserved {
                notice: "This floor is reserved".to_string()
            })
        );
        assert_eq!(groups[2].body, Some(GroupBody::Listing(Listing::NoCompanies)));
    }
}
