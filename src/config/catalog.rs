use crate::core::users::UserStore;
use crate::domain::model::{Role, User};
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_non_negative, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// TOML 目錄檔案的結構
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub catalog: Option<CatalogInfo>,
    #[serde(default)]
    pub galleries: Vec<GalleryEntry>,
    #[serde(default)]
    pub artworks: Vec<ArtworkEntry>,
    #[serde(default)]
    pub links: Vec<LinkEntry>,
    #[serde(default)]
    pub users: Vec<UserEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogInfo {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryEntry {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtworkEntry {
    pub id: i32,
    pub title: String,
    pub artist: String,
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkEntry {
    pub gallery: i32,
    pub artwork: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserEntry {
    pub username: String,
    pub role: String,
}

impl CatalogConfig {
    /// 從 TOML 檔案載入目錄
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析目錄
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// 目錄名稱，未設定時回傳 None
    pub fn name(&self) -> Option<&str> {
        self.catalog.as_ref().map(|c| c.name.as_str())
    }

    /// 建立使用者清單；檔案未列出使用者時沿用預設帳號
    pub fn users(&self) -> Result<UserStore> {
        if self.users.is_empty() {
            return Ok(UserStore::new());
        }

        let mut store = UserStore::empty();
        for entry in &self.users {
            let role: Role = entry.role.parse()?;
            store.add(User::new(entry.username.as_str(), role));
        }
        Ok(store)
    }

    /// 驗證目錄內容
    pub fn validate_catalog(&self) -> Result<()> {
        if let Some(info) = &self.catalog {
            validate_non_empty_string("catalog.name", &info.name)?;
        }

        for (i, gallery) in self.galleries.iter().enumerate() {
            validate_non_empty_string(&format!("galleries[{}].name", i), &gallery.name)?;
        }

        for (i, artwork) in self.artworks.iter().enumerate() {
            validate_non_empty_string(&format!("artworks[{}].title", i), &artwork.title)?;
            validate_non_empty_string(&format!("artworks[{}].artist", i), &artwork.artist)?;
            validate_non_negative(&format!("artworks[{}].price", i), artwork.price)?;
        }

        for (i, entry) in self.users.iter().enumerate() {
            validate_non_empty_string(&format!("users[{}].username", i), &entry.username)?;
            entry.role.parse::<Role>()?;
        }

        Ok(())
    }
}

impl Validate for CatalogConfig {
    fn validate(&self) -> Result<()> {
        self.validate_catalog()
    }
}
