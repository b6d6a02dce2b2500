//! Data model for a parsed putr diagnostic log.
//!
//! A log is a flat sequence of categories, each holding the items (OSM
//! entities) the validator complained about, each item holding its error
//! and note messages in first-seen order.

use serde::{Deserialize, Serialize};

/// Kind of OSM entity an item refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Relation,
    Node,
    Way,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Relation => "relation",
            Self::Node => "node",
            Self::Way => "way",
        }
    }
}

/// The closed set of category kinds putr emits.
///
/// Declaration order is the label match priority: when a line contains more
/// than one label, the first kind in `ALL` wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryKind {
    #[serde(rename = "stop_areas")]
    StopAreas,
    #[serde(rename = "route_masters")]
    RouteMasters,
    #[serde(rename = "unclassified_routes")]
    UnclassifiedRoutes,
    #[serde(rename = "ptv1_routes")]
    Ptv1Routes,
    #[serde(rename = "ptv2_routes_1")]
    Ptv2Routes1,
    #[serde(rename = "ptv2_routes_2")]
    Ptv2Routes2,
    #[serde(rename = "ptv2_routes_3")]
    Ptv2Routes3,
    #[serde(rename = "ptv2_routes_4")]
    Ptv2Routes4,
    #[serde(rename = "multipolygons")]
    Multipolygons,
    #[serde(rename = "ways")]
    Ways,
    #[serde(rename = "nodes")]
    Nodes,
    #[serde(rename = "tour_ways")]
    TourWays,
    #[serde(rename = "platforms")]
    Platforms,
    #[serde(rename = "incomplete_stop_areas")]
    IncompleteStopAreas,
}

impl CategoryKind {
    pub const ALL: [CategoryKind; 14] = [
        Self::StopAreas,
        Self::RouteMasters,
        Self::UnclassifiedRoutes,
        Self::Ptv1Routes,
        Self::Ptv2Routes1,
        Self::Ptv2Routes2,
        Self::Ptv2Routes3,
        Self::Ptv2Routes4,
        Self::Multipolygons,
        Self::Ways,
        Self::Nodes,
        Self::TourWays,
        Self::Platforms,
        Self::IncompleteStopAreas,
    ];

    /// Stable identifier, used as the section anchor and in JSON output.
    pub fn key(self) -> &'static str {
        match self {
            Self::StopAreas => "stop_areas",
            Self::RouteMasters => "route_masters",
            Self::UnclassifiedRoutes => "unclassified_routes",
            Self::Ptv1Routes => "ptv1_routes",
            Self::Ptv2Routes1 => "ptv2_routes_1",
            Self::Ptv2Routes2 => "ptv2_routes_2",
            Self::Ptv2Routes3 => "ptv2_routes_3",
            Self::Ptv2Routes4 => "ptv2_routes_4",
            Self::Multipolygons => "multipolygons",
            Self::Ways => "ways",
            Self::Nodes => "nodes",
            Self::TourWays => "tour_ways",
            Self::Platforms => "platforms",
            Self::IncompleteStopAreas => "incomplete_stop_areas",
        }
    }

    /// Display label as it appears in the log.
    pub fn label(self) -> &'static str {
        match self {
            Self::StopAreas => "Stop Areas",
            Self::RouteMasters => "Route Masters",
            Self::UnclassifiedRoutes => "Classify Routes",
            Self::Ptv1Routes => "PTv1 Routes",
            Self::Ptv2Routes1 => "PTv2 Routes 1",
            Self::Ptv2Routes2 => "PTv2 Routes 2",
            Self::Ptv2Routes3 => "PTv2 Routes 3",
            Self::Ptv2Routes4 => "PTv2 Routes 4",
            Self::Multipolygons => "Analyze MPs",
            Self::Ways => "Analyze Ways",
            Self::Nodes => "Analyze Nodes",
            Self::TourWays => "Extract Tour Ways",
            Self::Platforms => "Analyze Platforms",
            Self::IncompleteStopAreas => "Incomplete stop_areas",
        }
    }
}

/// Which message list of an item received content last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageKind {
    Error,
    Note,
}

/// One reported OSM entity inside a category.
///
/// `kind` stays `None` when the item block never contained a typed header
/// line; `id` and `name` stay empty when the header had no digit run or no
/// parenthesized group. Message text is HTML-escaped at creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub kind: Option<EntityKind>,
    pub name: String,
    pub errors: Vec<String>,
    pub notes: Vec<String>,
    /// Continuation routing marker, only meaningful while parsing.
    #[serde(skip)]
    pub last_added: Option<MessageKind>,
}

impl Item {
    pub fn num_errors(&self) -> usize {
        self.errors.len()
    }

    pub fn num_notes(&self) -> usize {
        self.notes.len()
    }
}

/// A named section of the log, in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub kind: CategoryKind,
    pub name: String,
    pub items: Vec<Item>,
}

impl Category {
    pub fn new(kind: CategoryKind) -> Self {
        Self {
            kind,
            name: kind.label().to_string(),
            items: Vec::new(),
        }
    }

    pub fn num_errors(&self) -> usize {
        self.items.iter().map(Item::num_errors).sum()
    }

    pub fn num_notes(&self) -> usize {
        self.items.iter().map(Item::num_notes).sum()
    }
}

/// Everything the renderer needs: the parsed categories plus the report
/// timestamp, which is supplied by the caller, never by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub categories: Vec<Category>,
    pub timestamp: String,
}

impl Report {
    pub fn new(categories: Vec<Category>, timestamp: impl Into<String>) -> Self {
        Self {
            categories,
            timestamp: timestamp.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_counts_sum_over_items() {
        let mut category = Category::new(CategoryKind::StopAreas);
        category.items.push(Item {
            errors: vec!["a".into(), "b".into()],
            notes: vec!["c".into()],
            ..Item::default()
        });
        category.items.push(Item {
            errors: vec!["d".into()],
            ..Item::default()
        });

        assert_eq!(category.num_errors(), 3);
        assert_eq!(category.num_notes(), 1);
    }

    #[test]
    fn all_table_covers_every_kind_once() {
        assert_eq!(CategoryKind::ALL.len(), 14);
        for (i, kind) in CategoryKind::ALL.iter().enumerate() {
            assert!(
                !CategoryKind::ALL[..i].contains(kind),
                "{kind:?} listed twice"
            );
        }
    }

    #[test]
    fn keys_and_labels_match_the_log_format() {
        assert_eq!(CategoryKind::StopAreas.key(), "stop_areas");
        assert_eq!(CategoryKind::StopAreas.label(), "Stop Areas");
        assert_eq!(CategoryKind::Ptv2Routes3.key(), "ptv2_routes_3");
        assert_eq!(CategoryKind::UnclassifiedRoutes.label(), "Classify Routes");
        assert_eq!(
            CategoryKind::IncompleteStopAreas.label(),
            "Incomplete stop_areas"
        );
    }

    #[test]
    fn json_output_uses_snake_case_keys() {
        let category = Category::new(CategoryKind::Ptv2Routes1);
        let json = serde_json::to_value(&category).unwrap();
        assert_eq!(json["kind"], "ptv2_routes_1");
        assert_eq!(json["name"], "PTv2 Routes 1");
    }
}
