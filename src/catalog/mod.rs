//! Static catalog of known rewards programs used to pre-fill new accounts.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Broad grouping of rewards programs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Airline,
    Hotel,
    Bank,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Airline, Category::Hotel, Category::Bank];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Airline => "airline",
            Category::Hotel => "hotel",
            Category::Bank => "bank",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "airline" => Ok(Category::Airline),
            "hotel" => Ok(Category::Hotel),
            "bank" => Ok(Category::Bank),
            other => Err(format!("unknown category `{other}`")),
        }
    }
}

/// A catalog-defined template for a known rewards program.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresetEntry {
    /// Stable token identifying the preset; referenced by preset-backed accounts.
    pub id: &'static str,
    pub category: Category,
    /// Short display code, snapshotted verbatim onto new accounts.
    pub short_code: &'static str,
    pub display_name: &'static str,
    /// Long label for selection menus.
    pub label: &'static str,
    /// Opaque styling token, not interpreted by the core.
    pub color_token: &'static str,
    /// Baseline valuation in cents per point.
    pub default_rate: f64,
}

/// Sentinel preset id marking a user-defined account.
pub const CUSTOM_PRESET_ID: &str = "custom";

/// Fallback styling token for custom accounts.
pub const DEFAULT_COLOR: &str = "bg-blue-600";

/// Styling tokens offered when creating a custom account.
pub const COLOR_CHOICES: &[&str] = &[
    "bg-blue-600",
    "bg-teal-700",
    "bg-indigo-900",
    "bg-sky-500",
    "bg-red-700",
    "bg-orange-500",
    "bg-purple-600",
    "bg-slate-800",
    "bg-green-600",
    "bg-pink-600",
    "bg-gray-600",
];

/// Fixed program catalog, in display order.
pub const PRESETS: &[PresetEntry] = &[
    // Airlines
    PresetEntry {
        id: "AC",
        category: Category::Airline,
        short_code: "AC",
        display_name: "Aeroplan",
        label: "Air Canada Aeroplan",
        color_token: "bg-red-700",
        default_rate: 2.0,
    },
    PresetEntry {
        id: "FB",
        category: Category::Airline,
        short_code: "FB",
        display_name: "Flying Blue",
        label: "Air France/KLM Flying Blue",
        color_token: "bg-blue-800",
        default_rate: 1.5,
    },
    PresetEntry {
        id: "CX",
        category: Category::Airline,
        short_code: "CX",
        display_name: "Asia Miles",
        label: "Cathay Asia Miles",
        color_token: "bg-teal-700",
        default_rate: 1.4,
    },
    PresetEntry {
        id: "NH",
        category: Category::Airline,
        short_code: "NH",
        display_name: "ANA Mileage Club",
        label: "ANA Mileage Club",
        color_token: "bg-blue-600",
        default_rate: 1.5,
    },
    PresetEntry {
        id: "BA",
        category: Category::Airline,
        short_code: "BA",
        display_name: "British Airways",
        label: "British Airways Avios",
        color_token: "bg-blue-900",
        default_rate: 1.3,
    },
    PresetEntry {
        id: "DL",
        category: Category::Airline,
        short_code: "DL",
        display_name: "Delta SkyMiles",
        label: "Delta SkyMiles",
        color_token: "bg-purple-700",
        default_rate: 1.1,
    },
    PresetEntry {
        id: "UA",
        category: Category::Airline,
        short_code: "UA",
        display_name: "United MileagePlus",
        label: "United MileagePlus",
        color_token: "bg-blue-500",
        default_rate: 1.2,
    },
    PresetEntry {
        id: "AS",
        category: Category::Airline,
        short_code: "AS",
        display_name: "Alaska Mileage Plan",
        label: "Alaska Airlines Mileage Plan",
        color_token: "bg-slate-700",
        default_rate: 1.8,
    },
    // Hotels
    PresetEntry {
        id: "MB",
        category: Category::Hotel,
        short_code: "MB",
        display_name: "Marriott Bonvoy",
        label: "Marriott Bonvoy",
        color_token: "bg-indigo-900",
        default_rate: 0.9,
    },
    PresetEntry {
        id: "WoH",
        category: Category::Hotel,
        short_code: "WoH",
        display_name: "World of Hyatt",
        label: "World of Hyatt",
        color_token: "bg-sky-500",
        default_rate: 2.0,
    },
    PresetEntry {
        id: "HH",
        category: Category::Hotel,
        short_code: "HH",
        display_name: "Hilton Honors",
        label: "Hilton Honors",
        color_token: "bg-blue-500",
        default_rate: 0.6,
    },
    PresetEntry {
        id: "IHG",
        category: Category::Hotel,
        short_code: "IHG",
        display_name: "IHG One Rewards",
        label: "IHG One Rewards",
        color_token: "bg-orange-600",
        default_rate: 0.6,
    },
    // Banks and transferable currencies
    PresetEntry {
        id: "MR",
        category: Category::Bank,
        short_code: "MR",
        display_name: "Amex Rewards",
        label: "Amex Membership Rewards",
        color_token: "bg-slate-800",
        default_rate: 2.2,
    },
    PresetEntry {
        id: "AM",
        category: Category::Bank,
        short_code: "AM",
        display_name: "Air Miles",
        label: "Air Miles (Reward Miles)",
        color_token: "bg-sky-400",
        default_rate: 10.5,
    },
    PresetEntry {
        id: "RBC",
        category: Category::Bank,
        short_code: "RBC",
        display_name: "RBC Avion",
        label: "RBC Avion",
        color_token: "bg-blue-700",
        default_rate: 2.0,
    },
    PresetEntry {
        id: "TD",
        category: Category::Bank,
        short_code: "TD",
        display_name: "TD Rewards",
        label: "TD Rewards",
        color_token: "bg-green-600",
        default_rate: 0.5,
    },
    PresetEntry {
        id: "C1",
        category: Category::Bank,
        short_code: "C1",
        display_name: "Capital One",
        label: "Capital One Miles",
        color_token: "bg-blue-500",
        default_rate: 1.0,
    },
    // Preset id differs from the display code for Scene+.
    PresetEntry {
        id: "BNS",
        category: Category::Bank,
        short_code: "SC",
        display_name: "Scotia Scene+",
        label: "Scotia Scene+",
        color_token: "bg-red-600",
        default_rate: 1.0,
    },
    PresetEntry {
        id: "BMO",
        category: Category::Bank,
        short_code: "BMO",
        display_name: "BMO Rewards",
        label: "BMO Rewards",
        color_token: "bg-blue-600",
        default_rate: 0.7,
    },
    PresetEntry {
        id: "CIBC",
        category: Category::Bank,
        short_code: "CIBC",
        display_name: "CIBC Aventura",
        label: "CIBC Aventura",
        color_token: "bg-red-800",
        default_rate: 1.0,
    },
];

static PRESET_INDEX: Lazy<HashMap<&'static str, &'static PresetEntry>> =
    Lazy::new(|| PRESETS.iter().map(|preset| (preset.id, preset)).collect());

/// Looks up a preset by id. The custom sentinel never resolves.
pub fn resolve(preset_id: &str) -> Option<&'static PresetEntry> {
    PRESET_INDEX.get(preset_id).copied()
}

/// Returns the presets for one category, in catalog-declaration order.
pub fn list_by_category(category: Category) -> Vec<&'static PresetEntry> {
    PRESETS
        .iter()
        .filter(|preset| preset.category == category)
        .collect()
}
