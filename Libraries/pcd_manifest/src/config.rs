//! Compiled-in manifest configuration.
//! There is no runtime configuration: the generator always describes the same
//! dataset, and `MpdBuilder::static_pcd()` seeds itself from these values.

/// Base URL every segment path is resolved against.
pub const BASE_URL: &str = "http://localhost:3000/";
/// Dataset directory prefixed to every media path.
pub const DATASET: &str = "longdress";
/// Number of point cloud objects in the scene.
pub const OBJECT_COUNT: u32 = 1;
pub const START_NUMBER: &str = "1051";
/// Total presentation duration (ISO 8601).
pub const TOTAL_DURATION: &str = "PT10S";
/// Segment duration, relative to `TIMESCALE`.
pub const SEGMENT_DURATION: &str = "30";
/// Ticks per second.
pub const TIMESCALE: &str = "30";
/// `$RepresentationID$` and `$Number$` are left for the client to fill in.
pub const FILENAME_FORMAT: &str = "S26C2AIR0$RepresentationID$_F30_$Number$";

pub const MPD_FORMAT: &str = "pointcloud/pcd";
pub const MPD_TYPE: &str = "static";
pub const PERIOD_ID: u32 = 1;

/// Fixed camera orientations per object (front, right, back, left, top, bottom).
pub const VIEW_COUNT: usize = 6;

/// Bandwidth in bits/s, indexed by `[representation][view]`.
pub const BANDWIDTHS: [[u64; VIEW_COUNT]; 3] = [
    [101 << 10, 41 << 10, 89 << 10, 97 << 10, 33 << 10, 98 << 10],    // R-1
    [133 << 10, 45 << 10, 122 << 10, 128 << 10, 37 << 10, 135 << 10], // R0
    [182 << 10, 45 << 10, 179 << 10, 179 << 10, 39 << 10, 192 << 10], // R1
];

/// View id followed by the orientation flags of that view.
/// Not rendered yet.
pub const ORIENTATIONS: [[u8; VIEW_COUNT]; VIEW_COUNT] = [
    [0, 1, 0, 1, 1, 0], // front
    [1, 1, 0, 0, 1, 1], // right
    [2, 1, 1, 1, 1, 0], // back
    [3, 1, 0, 0, 1, 1], // left
    [4, 1, 1, 1, 0, 1], // top
    [5, 0, 0, 1, 0, 1], // bottom
];
