use serde::{Deserialize, Serialize};

use super::feature::Feature;

// ---------------------------------------------------------------------------
// ItemList: the `{ "items": [...] }` wrapper used for every collection
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemList<T> {
    pub items: Vec<T>,
}

impl<T> ItemList<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for ItemList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<'a, T> IntoIterator for &'a ItemList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

// ---------------------------------------------------------------------------
// Edition: a named product tier
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edition {
    pub id: String,
    pub name: String,
    pub description: String,
}

// ---------------------------------------------------------------------------
// DisplayMode: device / theme combinations a product can be shown in
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DisplayMode {
    DesktopLight,
    DesktopDark,
    LaptopLight,
    LaptopDark,
    MobileLight,
    MobileDark,
}

impl DisplayMode {
    pub const ALL: [DisplayMode; 6] = [
        DisplayMode::DesktopLight,
        DisplayMode::DesktopDark,
        DisplayMode::LaptopLight,
        DisplayMode::LaptopDark,
        DisplayMode::MobileLight,
        DisplayMode::MobileDark,
    ];

    /// Name of the matching flag in the product document.
    pub fn field_name(&self) -> &'static str {
        match self {
            DisplayMode::DesktopLight => "modeDesktopLight",
            DisplayMode::DesktopDark => "modeDesktopDark",
            DisplayMode::LaptopLight => "modeLaptopLight",
            DisplayMode::LaptopDark => "modeLaptopDark",
            DisplayMode::MobileLight => "modeMobileLight",
            DisplayMode::MobileDark => "modeMobileDark",
        }
    }
}

// ---------------------------------------------------------------------------
// Product: root of the baremetrics.json document
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub active: bool,
    pub tagline: String,
    pub description: String,
    #[serde(rename = "URL")]
    pub url: String,
    pub mode_desktop_light: Option<bool>,
    pub mode_desktop_dark: Option<bool>,
    pub mode_laptop_light: Option<bool>,
    pub mode_laptop_dark: Option<bool>,
    pub mode_mobile_light: Option<bool>,
    pub mode_mobile_dark: Option<bool>,
    pub editions: ItemList<Edition>,
    pub features: ItemList<Feature>,
}

impl Product {
    /// The flag for one display mode; `None` when the document leaves it unknown.
    pub fn display_mode(&self, mode: DisplayMode) -> Option<bool> {
        match mode {
            DisplayMode::DesktopLight => self.mode_desktop_light,
            DisplayMode::DesktopDark => self.mode_desktop_dark,
            DisplayMode::LaptopLight => self.mode_laptop_light,
            DisplayMode::LaptopDark => self.mode_laptop_dark,
            DisplayMode::MobileLight => self.mode_mobile_light,
            DisplayMode::MobileDark => self.mode_mobile_dark,
        }
    }

    /// All six display-mode flags in declaration order.
    pub fn display_modes(&self) -> Vec<(DisplayMode, Option<bool>)> {
        DisplayMode::ALL
            .iter()
            .map(|m| (*m, self.display_mode(*m)))
            .collect()
    }

    /// Borrowing lookup interface over this product.
    pub fn query(&self) -> crate::queries::ProductQuery<'_> {
        crate::queries::ProductQuery::new(self)
    }
}
