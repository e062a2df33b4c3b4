use bundlecheck_store::DEFAULT_MANIFEST_NAME;

/// How to locate a bundle's manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleOptions {
    /// Manifest file name at the bundle root
    pub manifest_name: String,
}

impl Default for BundleOptions {
    fn default() -> Self {
        Self {
            manifest_name: DEFAULT_MANIFEST_NAME.to_string(),
        }
    }
}
