use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::ports::Identified;
use crate::utils::error::CatalogError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: i32,
    pub title: String,
    pub artist: String,
    pub price: f64,
}

impl Artwork {
    pub fn new(id: i32, title: impl Into<String>, artist: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            title: title.into(),
            artist: artist.into(),
            price,
        }
    }
}

impl Identified for Artwork {
    const KIND: &'static str = "Artwork";

    fn id(&self) -> i32 {
        self.id
    }
}

impl fmt::Display for Artwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} by {} | ₹{:?}",
            self.id, self.title, self.artist, self.price
        )
    }
}

/// A named room in the exhibition.
///
/// Artworks are linked by id, so the gallery never owns them; the artwork
/// store stays the single owner and ids are resolved on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gallery {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    artwork_ids: Vec<i32>,
}

impl Gallery {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            artwork_ids: Vec::new(),
        }
    }

    /// Linked artwork ids in link order. Duplicates are kept.
    pub fn artwork_ids(&self) -> &[i32] {
        &self.artwork_ids
    }

    pub(crate) fn link_artwork(&mut self, artwork_id: i32) {
        self.artwork_ids.push(artwork_id);
    }
}

impl Identified for Gallery {
    const KIND: &'static str = "Gallery";

    fn id(&self) -> i32 {
        self.id
    }
}

impl fmt::Display for Gallery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} (Artworks: {})",
            self.id,
            self.name,
            self.artwork_ids.len()
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "user" => Ok(Role::User),
            other => Err(CatalogError::InvalidConfigValueError {
                field: "role".to_string(),
                value: other.to_string(),
                reason: "Role must be 'admin' or 'user'".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub role: Role,
}

impl User {
    pub fn new(username: impl Into<String>, role: Role) -> Self {
        Self {
            username: username.into(),
            role,
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.username, self.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artwork_display() {
        let artwork = Artwork::new(101, "Sunset Dreams", "A. Sharma", 15000.0);
        assert_eq!(artwork.to_string(), "101 | Sunset Dreams by A. Sharma | ₹15000.0");

        let artwork = Artwork::new(7, "Monsoon", "P. Iyer", 9500.5);
        assert_eq!(artwork.to_string(), "7 | Monsoon by P. Iyer | ₹9500.5");
    }

    #[test]
    fn test_gallery_display_counts_links() {
        let mut gallery = Gallery::new(1, "Modern Art Gallery");
        assert_eq!(gallery.to_string(), "1 | Modern Art Gallery (Artworks: 0)");

        gallery.link_artwork(101);
        gallery.link_artwork(101);
        assert_eq!(gallery.to_string(), "1 | Modern Art Gallery (Artworks: 2)");
        assert_eq!(gallery.artwork_ids(), &[101, 101]);
    }

    #[test]
    fn test_role_parsing() {
        assert_eq!("Admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!(" user ".parse::<Role>().unwrap(), Role::User);
        assert!("curator".parse::<Role>().is_err());
        assert!(Role::Admin.is_admin());
        assert!(!Role::User.is_admin());
    }

    #[test]
    fn test_user_display() {
        let user = User::new("john", Role::User);
        assert_eq!(user.to_string(), "john (user)");
    }

    #[test]
    fn test_gallery_json_shape() {
        let mut gallery = Gallery::new(2, "Classic Art Gallery");
        gallery.link_artwork(103);
        let json = serde_json::to_value(&gallery).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 2, "name": "Classic Art Gallery", "artwork_ids": [103]})
        );
    }
}
