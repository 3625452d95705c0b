//! Menu content - the static data the page displays
//!
//! Menus load from YAML, JSON or CSV. The CSV form only carries items; the
//! restaurant name and navigation fall back to defaults.

use crate::error::MenuError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A single dish or drink
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub category: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
}

/// A link in the navigation panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    /// Section anchor the link points at (e.g. `#menu`)
    pub target: String,
}

impl NavLink {
    fn new(label: &str, target: &str) -> Self {
        Self {
            label: label.to_string(),
            target: target.to_string(),
        }
    }
}

/// The restaurant page content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Menu {
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_links")]
    pub links: Vec<NavLink>,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_links() -> Vec<NavLink> {
    vec![
        NavLink::new("Home", "#home"),
        NavLink::new("Menu", "#menu"),
        NavLink::new("About", "#about"),
        NavLink::new("Reservations", "#reservations"),
        NavLink::new("Contact", "#contact"),
    ]
}

impl Menu {
    /// Distinct item categories in order of first appearance
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for item in &self.items {
            if !categories.iter().any(|c| c == &item.category) {
                categories.push(item.category.clone());
            }
        }
        categories
    }

    pub fn formatted_price(&self, item: &MenuItem) -> String {
        format!("{}{:.2}", self.currency, item.price)
    }

    /// Load a menu, picking the parser from the file extension
    pub fn load(path: impl AsRef<Path>) -> Result<Menu, MenuError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        let read = || {
            fs::read_to_string(path).map_err(|source| MenuError::Io {
                path: path.to_path_buf(),
                source,
            })
        };

        match extension.as_str() {
            "yaml" | "yml" => Ok(serde_yaml::from_str(&read()?)?),
            "json" => Ok(serde_json::from_str(&read()?)?),
            "csv" => {
                let contents = read()?;
                let name = path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("Menu")
                    .to_string();
                Self::from_csv(&name, contents.as_bytes())
            }
            other => Err(MenuError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Parse items from CSV with a `name,category,price,description` header
    pub fn from_csv<R: std::io::Read>(name: &str, reader: R) -> Result<Menu, MenuError> {
        let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

        let mut items = Vec::new();
        for record in reader.deserialize() {
            let item: MenuItem = record?;
            items.push(item);
        }

        Ok(Menu {
            name: name.to_string(),
            tagline: String::new(),
            currency: default_currency(),
            links: default_links(),
            items,
        })
    }

    /// Built-in menu used when no menu file is configured
    pub fn sample() -> Menu {
        let item = |name: &str, category: &str, price: f64, description: &str| MenuItem {
            name: name.to_string(),
            category: category.to_string(),
            price,
            description: description.to_string(),
        };

        Menu {
            name: "Bistro Lumière".to_string(),
            tagline: "Seasonal French cooking since 1987".to_string(),
            currency: default_currency(),
            links: default_links(),
            items: vec![
                item(
                    "French Onion Soup",
                    "Starters",
                    9.5,
                    "Caramelised onions, beef broth, gruyère crouton",
                ),
                item(
                    "Escargots de Bourgogne",
                    "Starters",
                    14.0,
                    "Garlic and parsley butter, grilled baguette",
                ),
                item(
                    "Steak Frites",
                    "Mains",
                    28.0,
                    "Hanger steak, shallot butter, hand-cut fries",
                ),
                item(
                    "Coq au Vin",
                    "Mains",
                    26.5,
                    "Braised chicken, burgundy, lardons, mushrooms",
                ),
                item(
                    "Ratatouille",
                    "Mains",
                    19.0,
                    "Provençal vegetables, basil oil",
                ),
                item(
                    "Crème Brûlée",
                    "Desserts",
                    9.0,
                    "Tahitian vanilla, burnt sugar",
                ),
                item(
                    "Tarte Tatin",
                    "Desserts",
                    10.5,
                    "Caramelised apples, crème fraîche",
                ),
                item(
                    "Kir Royal",
                    "Drinks",
                    12.0,
                    "Crème de cassis, champagne",
                ),
                item(
                    "Café au Lait",
                    "Drinks",
                    4.5,
                    "Double espresso, steamed milk",
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_categories_keep_first_appearance_order() {
        let menu = Menu::sample();
        assert_eq!(
            menu.categories(),
            vec!["Starters", "Mains", "Desserts", "Drinks"]
        );
    }

    #[test]
    fn test_formatted_price() {
        let menu = Menu::sample();
        assert_eq!(menu.formatted_price(&menu.items[0]), "$9.50");
    }

    #[test]
    fn test_load_yaml_applies_defaults() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(
            file,
            "name: Trattoria\nitems:\n  - name: Negroni\n    category: Drinks\n    price: 11\n"
        )
        .unwrap();

        let menu = Menu::load(file.path()).unwrap();
        assert_eq!(menu.name, "Trattoria");
        assert_eq!(menu.currency, "$");
        assert_eq!(menu.links.len(), 5);
        assert_eq!(menu.items[0].description, "");
        assert_eq!(menu.items[0].price, 11.0);
    }

    #[test]
    fn test_load_json() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        let json = serde_json::to_string(&Menu::sample()).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        assert_eq!(Menu::load(file.path()).unwrap(), Menu::sample());
    }

    #[test]
    fn test_load_csv_uses_file_stem_as_name() {
        let mut file = tempfile::Builder::new()
            .prefix("harbour")
            .suffix(".csv")
            .tempfile()
            .unwrap();
        writeln!(file, "name,category,price,description").unwrap();
        writeln!(file, "Oysters, Starters, 18.00, Half dozen").unwrap();
        writeln!(file, "Lemonade,Drinks,4,").unwrap();

        let menu = Menu::load(file.path()).unwrap();
        assert!(menu.name.starts_with("harbour"));
        assert_eq!(menu.items.len(), 2);
        assert_eq!(menu.items[0].category, "Starters");
        assert_eq!(menu.categories(), vec!["Starters", "Drinks"]);
    }

    #[test]
    fn test_unsupported_extension_is_rejected() {
        let err = Menu::load("menu.toml").unwrap_err();
        assert!(matches!(err, MenuError::UnsupportedFormat(ext) if ext == "toml"));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = Menu::load("/nonexistent/menu.yaml").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/menu.yaml"));
    }
}
