//! Sidebar copy
//!
//! Critical hazards are taken from the overlay inventory so the list and the
//! map never disagree.

use serde::{Deserialize, Serialize};

use crate::overlays::hazard_overlays;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HazardNote {
    pub name: String,
    pub note: String,
}

/// Toast shown by the "Analyze Selected Site" button
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzePrompt {
    pub button: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SidebarContent {
    pub title: String,
    pub subtitle: String,
    pub tagline: String,
    pub summary_heading: String,
    pub summary: String,
    pub analyze: AnalyzePrompt,
    pub hazards: Vec<HazardNote>,
    pub opportunities: Vec<String>,
    pub footer: String,
}

impl SidebarContent {
    pub fn new() -> Self {
        Self {
            title: "Myanmar".to_string(),
            subtitle: "SMR Site Scout".to_string(),
            tagline: "Strategic SMR Placement for a Sustainable Future".to_string(),
            summary_heading: "Site Summary / Recommendations".to_string(),
            summary: "Click any location on the map to analyze SMR site suitability. \
                The system evaluates critical hazards (seismic faults, flood zones) and \
                opportunities (water access, grid connection, infrastructure). \
                Recommendations will highlight pros, cons, and suggest improvements or \
                alternative sites."
                .to_string(),
            analyze: AnalyzePrompt {
                button: "Analyze Selected Site".to_string(),
                title: "Analysis Ready".to_string(),
                description: "Click any location on the map to view detailed site suitability analysis."
                    .to_string(),
            },
            hazards: hazard_overlays()
                .iter()
                .map(|o| HazardNote {
                    name: o.name.to_string(),
                    note: o.risk.to_string(),
                })
                .collect(),
            opportunities: [
                "Proximity to water sources (cooling)",
                "Existing grid infrastructure",
                "Transport and road access",
                "Low population density zones",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            footer: "Powered by Rosatom · HackAtom Initiative".to_string(),
        }
    }
}

impl Default for SidebarContent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hazards_mirror_overlays() {
        let sidebar = SidebarContent::new();
        let hazards: Vec<(&str, &str)> = sidebar
            .hazards
            .iter()
            .map(|h| (h.name.as_str(), h.note.as_str()))
            .collect();

        assert_eq!(
            hazards,
            vec![
                ("Sagaing Fault", "Major seismic risk"),
                ("Kyaukkyan Fault", "Moderate seismic risk"),
                ("Ayeyarwady Basin", "Flood prone area"),
                ("Ayeyarwady Delta", "High flood risk"),
            ]
        );
        assert_eq!(sidebar.opportunities.len(), 4);
        assert_eq!(sidebar.analyze.title, "Analysis Ready");
    }

    #[test]
    fn test_footer_branding() {
        let sidebar = SidebarContent::new();
        assert_eq!(sidebar.footer, "Powered by Rosatom · HackAtom Initiative");

        let value = serde_json::to_value(&sidebar).unwrap();
        assert_eq!(value["footer"], "Powered by Rosatom · HackAtom Initiative");
    }
}
