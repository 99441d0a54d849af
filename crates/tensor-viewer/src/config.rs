use clap::Parser;
use std::path::PathBuf;

/// `tnsview` - Loads a coordinate-format sparse tensor as a 3D point cloud.
///
/// The first three modes of every record become the point position and the
/// last field is the value. The prepared scene is either logged or written
/// out as JSON for an external renderer.
#[derive(Parser, Debug)]
#[command(name = "tnsview", version, about, long_about = None)]
pub struct Config {
    /// The `.tns` file to load.
    ///
    /// One record per line: `i j k [l ...] value`, whitespace separated.
    #[arg(env = "TNSVIEW_FILE", default_value = "small_uber.tns")]
    pub file: PathBuf,

    /// Write the prepared scene (points, bounding box, wireframe edges) as JSON.
    #[arg(long, env = "TNSVIEW_DUMP")]
    pub dump: Option<PathBuf>,

    /// Pretty-print the JSON scene.
    #[arg(long, default_value_t = false)]
    pub pretty: bool,
}
