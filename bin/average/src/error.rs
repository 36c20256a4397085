use std::path::PathBuf;

use thiserror::Error;

use crate::Region;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("could not read image {}: {source}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("region {region} is empty")]
    EmptyRegion { region: Region },

    #[error("region {region} does not fit in a {width}x{height} image")]
    RegionOutOfBounds {
        region: Region,
        width: u32,
        height: u32,
    },

    #[error(transparent)]
    Color(#[from] colorpick::Error),
}
