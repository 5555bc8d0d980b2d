use serde::{Deserialize, Deserializer, Serialize};

/// One downloadable artifact from the Liberica release catalog.
///
/// Every field tolerates absence and `null`; the catalog is not strict about
/// which keys each entry carries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Release {
    #[serde(deserialize_with = "null_as_default")]
    pub os: String,
    #[serde(deserialize_with = "null_as_default")]
    pub architecture: String,
    #[serde(deserialize_with = "null_as_default")]
    pub package_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub feature_version: Option<u32>,
    #[serde(deserialize_with = "null_as_default")]
    pub bundle_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub filename: String,
    #[serde(deserialize_with = "null_as_default")]
    pub download_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub size: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub sha1: String,
    #[serde(rename = "LTS", deserialize_with = "null_as_default")]
    pub lts: bool,
    #[serde(rename = "GA", deserialize_with = "null_as_default")]
    pub ga: bool,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Release {
    /// Status column: `LTS | GA`, one of them, or `Stable`.
    pub fn status_label(&self) -> String {
        let mut status = Vec::new();
        if self.lts {
            status.push("LTS");
        }
        if self.ga {
            status.push("GA");
        }
        if status.is_empty() { "Stable".to_string() } else { status.join(" | ") }
    }

    pub fn sha1(&self) -> Option<&str> {
        Some(self.sha1.as_str()).filter(|sha| !sha.is_empty())
    }

    pub fn expected_size(&self) -> Option<u64> {
        Some(self.size).filter(|size| *size > 0)
    }

    pub fn package_kind(&self) -> PackageKind {
        PackageKind::from_package_type(&self.package_type)
    }
}

/// Installation strategy implied by the catalog's `packageType`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageKind {
    TarGz,
    Zip,
    Deb,
    Rpm,
    Msi,
    Other(String),
}

impl PackageKind {
    pub fn from_package_type(value: &str) -> Self {
        match value {
            "tar.gz" | "tgz" => PackageKind::TarGz,
            "zip" => PackageKind::Zip,
            "deb" => PackageKind::Deb,
            "rpm" => PackageKind::Rpm,
            "msi" => PackageKind::Msi,
            other => PackageKind::Other(other.to_string()),
        }
    }
}

/// Directory name a portable archive is expected to unpack into.
pub fn install_dir_name(filename: &str) -> &str {
    [".tar.gz", ".tgz", ".zip"]
        .iter()
        .find_map(|suffix| filename.strip_suffix(suffix))
        .unwrap_or(filename)
}
