//! License registry and the README fragments derived from it.
//!
//! Six common licenses are supported, each with a shields.io badge and a homepage. Selections are
//! carried as free text in a [`DocumentRequest`](crate::request::DocumentRequest), so every
//! renderer accepts an optional identifier and renders an empty string for anything the registry
//! does not know.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// A supported project license.
pub enum License {
    /// Apache License 2.0.
    Apache2,
    /// BSD 2-Clause "Simplified" License.
    Bsd2,
    /// BSD 3-Clause "New" or "Revised" License.
    Bsd3,
    /// GNU General Public License v2.0.
    Gpl2,
    /// GNU General Public License v3.0.
    Gpl3,
    /// MIT License.
    Mit,
}

impl License {
    /// Every registered license, in the order they are offered to the user.
    pub const ALL: [Self; 6] = [
        Self::Apache2,
        Self::Bsd2,
        Self::Bsd3,
        Self::Gpl2,
        Self::Gpl3,
        Self::Mit,
    ];

    #[must_use]
    /// Short identifier used in answers files.
    pub fn id(self) -> &'static str {
        match self {
            Self::Apache2 => "apache2",
            Self::Bsd2 => "bsd2",
            Self::Bsd3 => "bsd3",
            Self::Gpl2 => "gpl2",
            Self::Gpl3 => "gpl3",
            Self::Mit => "mit",
        }
    }

    #[must_use]
    /// Human-readable name shown in badges and the license section.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Apache2 => "Apache 2.0",
            Self::Bsd2 => "BSD 2-Clause",
            Self::Bsd3 => "BSD 3-Clause",
            Self::Gpl2 => "GPL v2",
            Self::Gpl3 => "GPL v3",
            Self::Mit => "MIT",
        }
    }

    #[must_use]
    /// Shield image for the license badge.
    pub fn badge_url(self) -> &'static str {
        match self {
            Self::Apache2 => "https://img.shields.io/badge/License-Apache_2.0-blue.svg",
            Self::Bsd2 => "https://img.shields.io/badge/License-BSD_2--Clause-orange.svg",
            Self::Bsd3 => "https://img.shields.io/badge/License-BSD_3--Clause-blue.svg",
            Self::Gpl2 => "https://img.shields.io/badge/License-GPL_v2-blue.svg",
            Self::Gpl3 => "https://img.shields.io/badge/License-GPLv3-blue.svg",
            Self::Mit => "https://img.shields.io/badge/License-MIT-yellow.svg",
        }
    }

    #[must_use]
    /// Canonical license text.
    pub fn homepage(self) -> &'static str {
        match self {
            Self::Apache2 => "https://opensource.org/licenses/Apache-2.0",
            Self::Bsd2 => "https://opensource.org/licenses/BSD-2-Clause",
            Self::Bsd3 => "https://opensource.org/licenses/BSD-3-Clause",
            Self::Gpl2 => "https://www.gnu.org/licenses/old-licenses/gpl-2.0.en.html",
            Self::Gpl3 => "https://www.gnu.org/licenses/gpl-3.0",
            Self::Mit => "https://opensource.org/licenses/MIT",
        }
    }

    #[must_use]
    /// Resolves an identifier or display name, ignoring case, spaces and punctuation.
    ///
    /// `"mit"`, `"MIT"`, `"Apache 2.0"`, `"bsd-3-clause"` and `"GPLv3"` all resolve.
    pub fn lookup(identifier: &str) -> Option<Self> {
        let key: String = identifier
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match key.as_str() {
            "apache2" | "apache20" | "apache" => Some(Self::Apache2),
            "bsd2" | "bsd2clause" => Some(Self::Bsd2),
            "bsd3" | "bsd3clause" => Some(Self::Bsd3),
            "gpl2" | "gplv2" => Some(Self::Gpl2),
            "gpl3" | "gplv3" => Some(Self::Gpl3),
            "mit" => Some(Self::Mit),
            _ => None,
        }
    }
}

impl fmt::Display for License {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

fn resolve(license: Option<&str>) -> Option<License> {
    license.and_then(License::lookup)
}

#[must_use]
/// Image-with-link badge naming the license, or an empty string.
pub fn render_license_badge(license: Option<&str>) -> String {
    resolve(license).map_or_else(String::new, |license| {
        format!(
            "[![License: {license}]({})]({})",
            license.badge_url(),
            license.homepage()
        )
    })
}

#[must_use]
/// Homepage of the license, or an empty string.
pub fn render_license_link(license: Option<&str>) -> String {
    resolve(license).map_or_else(String::new, |license| license.homepage().to_string())
}

#[must_use]
/// The README's license section, or an empty string when no license was chosen.
pub fn render_license_section(license: Option<&str>) -> String {
    resolve(license).map_or_else(String::new, |resolved| {
        format!(
            "## License\n\nThis project is covered under the [{resolved}]({}) license.\n",
            render_license_link(license)
        )
    })
}

#[cfg(test)]
#[path = "tests/license.rs"]
mod tests;
