//! Font fallback chain.
//!
//! Candidates are tried in order against the system font database. When none
//! is installed, any installed face is used; with an empty database the
//! built-in bitmap font takes over.

use std::fmt;
use std::sync::Arc;

use resvg::usvg::{self, fontdb};

/// Preferred label families, most preferred first.
pub const FONT_CANDIDATES: &[&str] = &[
    "Arial",
    "DejaVu Sans",
    "Liberation Sans",
    "Noto Sans",
    "Helvetica",
];

/// Font selected for drawing labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontChoice {
    /// Concrete family name of an installed face
    System(String),
    /// The built-in 8x8 bitmap font
    Builtin,
}

impl fmt::Display for FontChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontChoice::System(family) => write!(f, "{}", family),
            FontChoice::Builtin => write!(f, "built-in bitmap font"),
        }
    }
}

/// Font database plus the layout options used to shape labels.
pub struct FontBook {
    options: usvg::Options<'static>,
}

impl FontBook {
    /// Load every font installed on this machine.
    pub fn system() -> FontBook {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        FontBook::from_database(db)
    }

    /// A book with no fonts at all. Labels always use the built-in font.
    pub fn empty() -> FontBook {
        FontBook::from_database(fontdb::Database::new())
    }

    pub fn from_database(db: fontdb::Database) -> FontBook {
        let mut options = usvg::Options::default();
        options.fontdb = Arc::new(db);
        FontBook { options }
    }

    pub fn options(&self) -> &usvg::Options<'static> {
        &self.options
    }

    pub fn is_empty(&self) -> bool {
        self.options.fontdb.faces().next().is_none()
    }

    /// Walk the fallback chain and return the first usable font.
    pub fn resolve(&self) -> FontChoice {
        for name in FONT_CANDIDATES {
            if let Some(family) = self.lookup(fontdb::Family::Name(name)) {
                return FontChoice::System(family);
            }
        }

        // Last system resort: whatever face happens to be installed
        let any = self
            .options
            .fontdb
            .faces()
            .find_map(|face| face.families.first().map(|(name, _)| name.clone()));

        match any {
            Some(family) => FontChoice::System(family),
            None => FontChoice::Builtin,
        }
    }

    fn lookup(&self, family: fontdb::Family<'_>) -> Option<String> {
        let db = &self.options.fontdb;
        let id = db.query(&fontdb::Query {
            families: &[family],
            weight: fontdb::Weight::NORMAL,
            stretch: fontdb::Stretch::Normal,
            style: fontdb::Style::Normal,
        })?;
        let face = db.face(id)?;
        face.families.first().map(|(name, _)| name.clone())
    }
}
