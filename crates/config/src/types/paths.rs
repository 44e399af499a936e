//! Filesystem locations used by the data pipelines.
//!
//! None of these paths are checked for existence at load time.

use serde::Serialize;
use std::path::{Path, PathBuf};

/// Data, model output, and tile output directories.
#[derive(Debug, Clone, Serialize)]
pub struct DataDirs {
    /// Root of downloaded and derived input data.
    pub data_dir: PathBuf,
    /// Flood model output rasters.
    pub model_output: PathBuf,
    /// Directory GeoServer serves layers from.
    pub geoserver: PathBuf,
    /// BG-Flood installation directory.
    pub flood_model: PathBuf,
}

/// Settings the LiDAR-to-DEM pipeline requires to be present.
#[derive(Debug, Clone, Serialize)]
pub struct ElevationConfig {
    pub lidar_dir: PathBuf,
    pub dem_dir: PathBuf,
    /// Land boundary file; `None` when configured as empty.
    pub land_file: Option<PathBuf>,
    pub instructions_file: PathBuf,
}

impl ElevationConfig {
    pub fn land_file(&self) -> Option<&Path> {
        self.land_file.as_deref()
    }
}
