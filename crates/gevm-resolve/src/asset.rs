use gevm_fetch::AssetDescriptor;

/// A downloadable release asset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Asset {
    pub name:         String,
    pub download_url: String,
}

impl Asset {
    pub fn new(name: impl Into<String>, download_url: impl Into<String>) -> Self {
        Self {
            name:         name.into(),
            download_url: download_url.into(),
        }
    }

    pub fn is_valid(&self) -> bool { !self.name.is_empty() && !self.download_url.is_empty() }
}

impl From<AssetDescriptor> for Asset {
    fn from(raw: AssetDescriptor) -> Self {
        Self {
            name:         raw.name,
            download_url: raw.download_url,
        }
    }
}
