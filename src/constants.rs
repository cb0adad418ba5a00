pub const GRAPH_URL: &str = "https://graph.microsoft.com/v1.0";
pub const AUTHORITY_URL: &str = "https://login.microsoftonline.com";
pub const GRAPH_SCOPE: &str = "https://graph.microsoft.com/.default";

pub const FALLBACK_PATH: &str = "csvjson.json";
pub const PAGE_FILENAME: &str = "index.html";
pub const CSV_FILENAME: &str = "catalog.csv";

pub const DEFAULT_PRICE: &str = "Niet beschikbaar";
pub const DEFAULT_LANGUAGE: &str = "Niet gespecificeerd";
pub const DEFAULT_PLATFORM: &str = "Onbekend";

pub const FREE_MARKER: &str = "gratis";
pub const VR_MARKERS: [&str; 5] = ["vr", "oculus", "quest", "vive", "pico"];
pub const DUTCH_MARKERS: [&str; 3] = ["nl", "nederlands", "dutch"];
pub const ENGLISH_MARKERS: [&str; 1] = ["eng"];

pub const FILTERS_SLOT: &str = "<!-- gallery:filters -->";
pub const CATEGORIES_SLOT: &str = "<!-- gallery:categories -->";
pub const MODAL_SLOT: &str = "<!-- gallery:modal -->";
