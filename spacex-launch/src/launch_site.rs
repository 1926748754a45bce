use serde::{Deserialize, Serialize};
use std::fmt;

/// Dropdown value meaning "every launch site".
pub const ALL_SITES_VALUE: &str = "ALL";

/// Dropdown label for [`ALL_SITES_VALUE`].
pub const ALL_SITES_LABEL: &str = "All Sites";

/// The four launch sites offered by the site dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LaunchSite {
    CcafsLc40,
    CcafsSlc40,
    KscLc39a,
    VafbSlc4e,
}

impl LaunchSite {
    /// Dropdown order.
    pub const ALL: [LaunchSite; 4] = [
        LaunchSite::CcafsLc40,
        LaunchSite::CcafsSlc40,
        LaunchSite::KscLc39a,
        LaunchSite::VafbSlc4e,
    ];

    /// Site name as it appears in the `Launch Site` column.
    pub fn name(self) -> &'static str {
        match self {
            LaunchSite::CcafsLc40 => "CCAFS LC-40",
            LaunchSite::CcafsSlc40 => "CCAFS SLC-40",
            LaunchSite::KscLc39a => "KSC LC-39A",
            LaunchSite::VafbSlc4e => "VAFB SLC-4E",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|site| site.name() == name)
    }
}

impl fmt::Display for LaunchSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The site dropdown selection.
///
/// `Site` holds any site name, not only the four fixed ones; a name that
/// matches no record simply selects nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SiteFilter {
    #[default]
    All,
    Site(String),
}

impl SiteFilter {
    /// Parse a dropdown value. `"ALL"` is the sentinel; anything else is a
    /// site name taken verbatim.
    pub fn from_value(value: &str) -> Self {
        if value == ALL_SITES_VALUE {
            SiteFilter::All
        } else {
            SiteFilter::Site(value.to_string())
        }
    }

    /// The dropdown value for this selection.
    pub fn value(&self) -> &str {
        match self {
            SiteFilter::All => ALL_SITES_VALUE,
            SiteFilter::Site(name) => name,
        }
    }

    pub fn site_name(&self) -> Option<&str> {
        match self {
            SiteFilter::All => None,
            SiteFilter::Site(name) => Some(name),
        }
    }

    /// `(value, label)` pairs for the site dropdown, "All Sites" first.
    pub fn dropdown_options() -> Vec<(String, String)> {
        let mut options = vec![(ALL_SITES_VALUE.to_string(), ALL_SITES_LABEL.to_string())];
        options.extend(
            LaunchSite::ALL
                .iter()
                .map(|site| (site.name().to_string(), site.name().to_string())),
        );
        options
    }
}

impl From<LaunchSite> for SiteFilter {
    fn from(site: LaunchSite) -> Self {
        SiteFilter::Site(site.name().to_string())
    }
}
