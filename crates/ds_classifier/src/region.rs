use ds_core::Region;

/// Match order is fixed: a headline mentioning several countries is tagged
/// with the first one checked. Matching is case-sensitive on purpose so
/// that "china shop" does not tag as China.
const REGION_PRIORITY: &[(&str, Region)] = &[
    ("India", Region::India),
    ("China", Region::China),
    ("USA", Region::Usa),
    ("Russia", Region::Russia),
];

/// Country centroid coordinates, keyed by label. Pakistan, Japan and Iran
/// are carried from the upstream table even though the tagger never
/// produces them; `coordinates` falls back to (0, 0) for any label the
/// table does not know.
const COUNTRY_COORDS: &[(&str, (f64, f64))] = &[
    ("India", (20.5937, 78.9629)),
    ("China", (35.8617, 104.1954)),
    ("USA", (37.0902, -95.7129)),
    ("Russia", (61.5240, 105.3188)),
    ("Pakistan", (30.3753, 69.3451)),
    ("Japan", (36.2048, 138.2529)),
    ("Iran", (32.4279, 53.6880)),
    ("Global", (0.0, 0.0)),
];

/// Tag free text with the first matching region label, or Global
pub fn tag_region(text: &str) -> Region {
    for (needle, region) in REGION_PRIORITY {
        if text.contains(needle) {
            return *region;
        }
    }
    Region::Global
}

/// Map coordinates for a region label
pub fn coordinates(region: Region) -> (f64, f64) {
    COUNTRY_COORDS
        .iter()
        .find(|(name, _)| *name == region.as_str())
        .map(|(_, coords)| *coords)
        .unwrap_or((0.0, 0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_match_is_global() {
        assert_eq!(tag_region(""), Region::Global);
        assert_eq!(tag_region("Arms trade grows in Europe"), Region::Global);
    }

    #[test]
    fn test_priority_order() {
        // India is checked before China, regardless of word order in text
        assert_eq!(tag_region("China and India hold border talks"), Region::India);
        assert_eq!(tag_region("Russia and China sign a pact"), Region::China);
    }

    #[test]
    fn test_match_is_case_sensitive() {
        assert_eq!(tag_region("india lowercased"), Region::Global);
        assert_eq!(tag_region("USA announces new budget"), Region::Usa);
        assert_eq!(tag_region("usa lowercased"), Region::Global);
    }

    #[test]
    fn test_every_taggable_region_has_coordinates() {
        // The label set and the coordinate table must stay in lockstep:
        // no reachable region may fall through to the (0, 0) default.
        for region in [
            Region::India,
            Region::China,
            Region::Usa,
            Region::Russia,
        ] {
            assert_ne!(coordinates(region), (0.0, 0.0), "{region} lacks coordinates");
        }
        assert_eq!(coordinates(Region::Global), (0.0, 0.0));
    }

    #[test]
    fn test_known_centroids() {
        assert_eq!(coordinates(Region::India), (20.5937, 78.9629));
        assert_eq!(coordinates(Region::Usa), (37.0902, -95.7129));
    }
}
