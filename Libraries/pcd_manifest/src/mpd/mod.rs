//! Point cloud manifest data structures (MPD and related types).
//! The tree is built once by `MpdBuilder` and only read afterwards.

pub mod builder;
pub mod writer;

use crate::config::ORIENTATIONS;

/// One of the six fixed camera orientations around an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Front,
    Right,
    Back,
    Left,
    Top,
    Bottom,
}

impl View {
    /// All views in id order.
    pub const ALL: [View; 6] = [
        View::Front,
        View::Right,
        View::Back,
        View::Left,
        View::Top,
        View::Bottom,
    ];

    pub fn id(self) -> u32 {
        self as u32
    }

    pub fn name(self) -> &'static str {
        match self {
            View::Front => "front",
            View::Right => "right",
            View::Back => "back",
            View::Left => "left",
            View::Top => "top",
            View::Bottom => "bottom",
        }
    }

    /// Row of the orientation table for this view: the view id followed by its flags.
    pub fn orientation(self) -> &'static [u8; 6] {
        &ORIENTATIONS[self as usize]
    }
}

/// Addressing and timing of a representation's media segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentTemplate {
    /// Media path, still containing `$RepresentationID$` and `$Number$`.
    pub media: String,
    /// Segment duration in timescale ticks.
    pub duration: String,
    /// Ticks per second. Omitted from the output when empty.
    pub timescale: String,
    pub start_number: String,
}

/// One quality level of a view's encoded segment stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Representation {
    /// 1-based row of the bandwidth table.
    pub id: u32,
    /// Average bandwidth in bits per second.
    pub bandwidth: u64,
    pub base_url: String,
    // Zero means "not set" for the three fields below.
    pub density: u32,
    pub width: u32,
    pub height: u32,
    pub segment_template: SegmentTemplate,
}

/// Generic scheme/value/id descriptor, e.g. a spatial relationship property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptorType {
    pub scheme_id_uri: String,
    pub value: String,
    pub id: String,
}

/// The representations available for one view of one object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdaptationSet {
    pub id: u32,
    pub view_id: u32,
    pub src_object_id: u32,
    pub supplemental_properties: Vec<DescriptorType>,
    pub representations: Vec<Representation>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Period {
    pub id: u32,
    /// ISO 8601 duration, e.g. `PT10S`.
    pub duration: String,
    pub adaptation_sets: Vec<AdaptationSet>,
}

/// Root of the manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mpd {
    pub format: String,
    pub mpd_type: String,
    pub base_url: String,
    pub periods: Vec<Period>,
}

impl Mpd {
    /// Adaptation sets of every period, in document order.
    pub fn adaptation_sets(&self) -> impl Iterator<Item = &AdaptationSet> {
        self.periods.iter().flat_map(|p| p.adaptation_sets.iter())
    }
}
