//! Access to the configuration sources.
//!
//! A configuration can be packaged either as a named asset or as a raw resource identified
//! by a number. Both are opened through a [`ResourceProvider`].

use crate::error::ConfigurationError;
use std::collections::HashMap;
use std::io::{Cursor, ErrorKind, Read};
use std::path::{Path, PathBuf};

/// The extension of the raw resource files read by [`FsResourceProvider`].
pub const RAW_RESOURCE_EXTENSION: &str = "properties";

/// Opens the streams that hold a configuration.
pub trait ResourceProvider {
    /// Opens the asset with the given name.
    fn open_asset(&self, name: &str) -> Result<Box<dyn Read>, ConfigurationError>;

    /// Opens the raw resource with the given identifier.
    fn open_raw_resource(&self, id: u32) -> Result<Box<dyn Read>, ConfigurationError>;
}

/// Reads assets from a directory and raw resources from another one.
/// The raw resource `N` is the file `N.properties`.
#[derive(Debug, Clone)]
pub struct FsResourceProvider {
    assets_dir: PathBuf,
    raw_resources_dir: PathBuf,
}

impl FsResourceProvider {
    pub fn new<A: Into<PathBuf>, R: Into<PathBuf>>(assets_dir: A, raw_resources_dir: R) -> Self {
        Self { assets_dir: assets_dir.into(), raw_resources_dir: raw_resources_dir.into() }
    }

    fn open_file(path: &Path, not_found_hint: &str) -> Result<Box<dyn Read>, ConfigurationError> {
        match std::fs::File::open(path) {
            Ok(file) => Ok(Box::new(file)),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                Err(ConfigurationError::ResourceNotFound {
                    message: format!("[{}] does not exist. {}", path.display(), not_found_hint),
                })
            }
            Err(err) => Err(ConfigurationError::IoFailure {
                message: format!("Cannot open [{}]: {}", path.display(), err),
            }),
        }
    }
}

impl ResourceProvider for FsResourceProvider {
    fn open_asset(&self, name: &str) -> Result<Box<dyn Read>, ConfigurationError> {
        Self::open_file(
            &self.assets_dir.join(name),
            "Hint: the file should be in the assets directory",
        )
    }

    fn open_raw_resource(&self, id: u32) -> Result<Box<dyn Read>, ConfigurationError> {
        Self::open_file(
            &self.raw_resources_dir.join(format!("{}.{}", id, RAW_RESOURCE_EXTENSION)),
            "Hint: the resource should be in the raw resources directory",
        )
    }
}

/// Serves assets and raw resources from memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryResourceProvider {
    assets: HashMap<String, Vec<u8>>,
    raw_resources: HashMap<u32, Vec<u8>>,
}

impl InMemoryResourceProvider {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_asset<S: Into<String>, B: Into<Vec<u8>>>(mut self, name: S, content: B) -> Self {
        self.assets.insert(name.into(), content.into());
        self
    }

    pub fn with_raw_resource<B: Into<Vec<u8>>>(mut self, id: u32, content: B) -> Self {
        self.raw_resources.insert(id, content.into());
        self
    }
}

impl ResourceProvider for InMemoryResourceProvider {
    fn open_asset(&self, name: &str) -> Result<Box<dyn Read>, ConfigurationError> {
        self.assets
            .get(name)
            .map(|content| Box::new(Cursor::new(content.clone())) as Box<dyn Read>)
            .ok_or_else(|| ConfigurationError::ResourceNotFound {
                message: format!("No asset named [{}]", name),
            })
    }

    fn open_raw_resource(&self, id: u32) -> Result<Box<dyn Read>, ConfigurationError> {
        self.raw_resources
            .get(&id)
            .map(|content| Box::new(Cursor::new(content.clone())) as Box<dyn Read>)
            .ok_or_else(|| ConfigurationError::ResourceNotFound {
                message: format!("No raw resource with id [{}]", id),
            })
    }
}
