use tracing::{debug, instrument};

use crate::config::{self, VIEW_COUNT};
use crate::mpd::{AdaptationSet, Mpd, Period, Representation, SegmentTemplate, View};

/// Builds the static point cloud manifest
#[derive(Debug, Clone)]
pub struct MpdBuilder {
    pub base_url: String,
    pub dataset: String,
    pub objects: u32,
    pub period_duration: String,
    pub segment_duration: String,
    pub timescale: String,
    pub start_number: String,
    pub filename_format: String,
    pub bandwidths: Vec<[u64; VIEW_COUNT]>,
}

impl Default for MpdBuilder {
    fn default() -> Self {
        Self::static_pcd()
    }
}

impl MpdBuilder {
    /// Builder seeded with the compiled-in configuration.
    pub fn static_pcd() -> Self {
        Self {
            base_url: config::BASE_URL.to_string(),
            dataset: config::DATASET.to_string(),
            objects: config::OBJECT_COUNT,
            period_duration: config::TOTAL_DURATION.to_string(),
            segment_duration: config::SEGMENT_DURATION.to_string(),
            timescale: config::TIMESCALE.to_string(),
            start_number: config::START_NUMBER.to_string(),
            filename_format: config::FILENAME_FORMAT.to_string(),
            bandwidths: config::BANDWIDTHS.to_vec(),
        }
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /**
     * Set the dataset directory.
     * Every media path starts with this name.
     */
    pub fn dataset(mut self, dataset: &str) -> Self {
        self.dataset = dataset.to_string();
        self
    }

    /**
     * Set the number of objects in the scene.
     * Each object gets one adaptation set per view.
     */
    pub fn objects(mut self, count: u32) -> Self {
        self.objects = count;
        self
    }

    pub fn period_duration(mut self, duration: &str) -> Self {
        self.period_duration = duration.to_string();
        self
    }

    /**
     * Set the segment duration and timescale.
     * The duration is expressed in ticks of the timescale (ticks per second).
     */
    pub fn segment_duration(mut self, duration: &str, timescale: &str) -> Self {
        self.segment_duration = duration.to_string();
        self.timescale = timescale.to_string();
        self
    }

    pub fn start_number(mut self, number: &str) -> Self {
        self.start_number = number.to_string();
        self
    }

    /**
     * Set the segment filename template.
     * Template tokens such as $RepresentationID$ and $Number$ are kept as-is;
     * only the view id suffix is filled in.
     */
    pub fn filename_format(mut self, format: &str) -> Self {
        self.filename_format = format.to_string();
        self
    }

    /**
     * Replace the bandwidth table.
     * Row `j` becomes representation `j + 1` in every adaptation set,
     * with the bandwidth taken from the column of the adaptation set's view.
     */
    pub fn bandwidths(mut self, table: &[[u64; VIEW_COUNT]]) -> Self {
        self.bandwidths = table.to_vec();
        self
    }

    /// Media path of every representation of `view`.
    pub fn media_path(&self, view: View) -> String {
        format!("{}/{}_{}.bin", self.dataset, self.filename_format, view.id())
    }

    /**
     * Build the manifest tree.
     * Adaptation set ids come from a single counter over objects (outer) and
     * views (inner), so they are contiguous and start at 0.
     */
    #[instrument(skip_all, fields(objects = self.objects))]
    pub fn build(&self) -> Mpd {
        let mut adaptation_sets =
            Vec::with_capacity(self.objects as usize * View::ALL.len());
        let mut next_id = 0;

        for object_id in 0..self.objects {
            for view in View::ALL {
                adaptation_sets.push(AdaptationSet {
                    id: next_id,
                    view_id: view.id(),
                    src_object_id: object_id,
                    supplemental_properties: Vec::new(),
                    representations: self.representations(view),
                });
                next_id += 1;
            }
        }

        debug!(
            "Built {} adaptation sets with {} representations each",
            adaptation_sets.len(),
            self.bandwidths.len()
        );

        Mpd {
            format: config::MPD_FORMAT.to_string(),
            mpd_type: config::MPD_TYPE.to_string(),
            base_url: self.base_url.clone(),
            periods: vec![Period {
                id: config::PERIOD_ID,
                duration: self.period_duration.clone(),
                adaptation_sets,
            }],
        }
    }

    fn representations(&self, view: View) -> Vec<Representation> {
        let media = self.media_path(view);

        self.bandwidths
            .iter()
            .enumerate()
            .map(|(j, row)| Representation {
                id: j as u32 + 1,
                bandwidth: row[view.id() as usize],
                base_url: String::new(),
                density: 0,
                width: 0,
                height: 0,
                segment_template: SegmentTemplate {
                    media: media.clone(),
                    duration: self.segment_duration.clone(),
                    timescale: self.timescale.clone(),
                    start_number: self.start_number.clone(),
                },
            })
            .collect()
    }
}

/// Build the manifest from the compiled-in configuration.
pub fn build() -> Mpd {
    MpdBuilder::static_pcd().build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_build_has_one_period_with_six_views() {
        let mpd = build();
        assert_eq!(mpd.periods.len(), 1);
        assert_eq!(mpd.periods[0].id, 1);
        assert_eq!(mpd.periods[0].duration, "PT10S");
        assert_eq!(mpd.adaptation_sets().count(), 6);
    }

    #[test]
    fn ids_are_contiguous_across_objects() {
        let mpd = MpdBuilder::static_pcd().objects(3).build();
        let ids: Vec<u32> = mpd.adaptation_sets().map(|a| a.id).collect();
        assert_eq!(ids, (0..18).collect::<Vec<_>>());

        for (position, set) in mpd.adaptation_sets().enumerate() {
            assert_eq!(set.src_object_id, position as u32 / 6);
            assert_eq!(set.view_id, position as u32 % 6);
        }
    }

    #[test]
    fn zero_objects_yield_empty_period() {
        let mpd = MpdBuilder::static_pcd().objects(0).build();
        assert_eq!(mpd.periods.len(), 1);
        assert!(mpd.periods[0].adaptation_sets.is_empty());
    }

    #[test]
    fn bandwidths_are_taken_column_wise() {
        let mpd = build();
        for set in mpd.adaptation_sets() {
            let ids: Vec<u32> = set.representations.iter().map(|r| r.id).collect();
            assert_eq!(ids, vec![1, 2, 3]);
            for (j, rep) in set.representations.iter().enumerate() {
                assert_eq!(rep.bandwidth, config::BANDWIDTHS[j][set.view_id as usize]);
            }
        }

        let front = &mpd.periods[0].adaptation_sets[0];
        let bandwidths: Vec<u64> = front.representations.iter().map(|r| r.bandwidth).collect();
        assert_eq!(bandwidths, vec![103_424, 136_192, 186_368]);
    }

    #[test]
    fn empty_bandwidth_table_gives_no_representations() {
        let mpd = MpdBuilder::static_pcd().bandwidths(&[]).build();
        assert_eq!(mpd.adaptation_sets().count(), 6);
        assert!(mpd.adaptation_sets().all(|a| a.representations.is_empty()));
    }

    #[test]
    fn media_path_only_substitutes_view_id() {
        let mpd = build();
        let left = &mpd.periods[0].adaptation_sets[3];
        let template = &left.representations[0].segment_template;
        assert_eq!(template.media, "longdress/S26C2AIR0$RepresentationID$_F30_$Number$_3.bin");
        assert_eq!(template.duration, "30");
        assert_eq!(template.timescale, "30");
        assert_eq!(template.start_number, "1051");
    }

    #[test]
    fn optional_fields_stay_unset() {
        let mpd = build();
        for rep in mpd.adaptation_sets().flat_map(|a| a.representations.iter()) {
            assert!(rep.base_url.is_empty());
            assert_eq!((rep.density, rep.width, rep.height), (0, 0, 0));
        }
        assert!(mpd.adaptation_sets().all(|a| a.supplemental_properties.is_empty()));
    }
}
