//! Species identifiers and bacterial abundance profiles
//!
//! The scoring engine recognizes a closed set of eleven skin bacteria. Lab
//! reports may carry additional keys (the "Other" remainder, typos, taxa the
//! panel does not score); those are kept on the profile but never contribute
//! to a score.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Bacterial species scored by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Species {
    CutibacteriumAcnes,
    StaphylococcusEpidermidis,
    CorynebacteriumKroppenstedtii,
    StaphylococcusAureus,
    StaphylococcusHominis,
    StaphylococcusCapitis,
    CorynebacteriumTuberculostearicum,
    CutibacteriumGranulosum,
    MicrococcusLuteus,
    StreptococcusMitis,
    RothiaMucilaginosa,
}

impl Species {
    /// All scored species in table order. Every weighted sum iterates in this
    /// order so repeated calls produce bit-identical results.
    pub const ALL: [Species; 11] = [
        Species::CutibacteriumAcnes,
        Species::StaphylococcusEpidermidis,
        Species::CorynebacteriumKroppenstedtii,
        Species::StaphylococcusAureus,
        Species::StaphylococcusHominis,
        Species::StaphylococcusCapitis,
        Species::CorynebacteriumTuberculostearicum,
        Species::CutibacteriumGranulosum,
        Species::MicrococcusLuteus,
        Species::StreptococcusMitis,
        Species::RothiaMucilaginosa,
    ];

    /// Key used in lab report payloads
    pub fn key(self) -> &'static str {
        match self {
            Species::CutibacteriumAcnes => "C.Acne",
            Species::StaphylococcusEpidermidis => "S.Epi",
            Species::CorynebacteriumKroppenstedtii => "C.Krop",
            Species::StaphylococcusAureus => "S.Aureus",
            Species::StaphylococcusHominis => "S.Hominis",
            Species::StaphylococcusCapitis => "S.Capitis",
            Species::CorynebacteriumTuberculostearicum => "C.Tuber",
            Species::CutibacteriumGranulosum => "C.Gran",
            Species::MicrococcusLuteus => "M.Luteus",
            Species::StreptococcusMitis => "Strep.Mitis",
            Species::RothiaMucilaginosa => "R.Muc",
        }
    }

    /// Full scientific name for report display
    pub fn scientific_name(self) -> &'static str {
        match self {
            Species::CutibacteriumAcnes => "Cutibacterium acnes",
            Species::StaphylococcusEpidermidis => "Staphylococcus epidermidis",
            Species::CorynebacteriumKroppenstedtii => "Corynebacterium kroppenstedtii",
            Species::StaphylococcusAureus => "Staphylococcus aureus",
            Species::StaphylococcusHominis => "Staphylococcus hominis",
            Species::StaphylococcusCapitis => "Staphylococcus capitis",
            Species::CorynebacteriumTuberculostearicum => "Corynebacterium tuberculostearicum",
            Species::CutibacteriumGranulosum => "Cutibacterium granulosum",
            Species::MicrococcusLuteus => "Micrococcus luteus",
            Species::StreptococcusMitis => "Streptococcus mitis",
            Species::RothiaMucilaginosa => "Rothia mucilaginosa",
        }
    }

    /// Look up a species by report key. Unknown keys (including "Other") return None.
    ///
    /// Matching is exact, the same as profile lookups, so a padded key like
    /// `" S.Epi "` is unrecognized everywhere.
    pub fn from_key(key: &str) -> Option<Species> {
        Species::ALL.iter().copied().find(|s| s.key() == key)
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Abundance percentages keyed by report species key
///
/// Percentages conventionally lie in [0, 100] and sum to about 100, but
/// neither is enforced: each species is scored independently.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BacterialProfile {
    abundances: FxHashMap<String, f64>,
}

impl BacterialProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the abundance for a report key (recognized or not)
    pub fn insert(&mut self, key: impl Into<String>, percentage: f64) {
        self.abundances.insert(key.into(), percentage);
    }

    /// Builder-style variant of [`insert`](Self::insert)
    pub fn with(mut self, key: impl Into<String>, percentage: f64) -> Self {
        self.insert(key, percentage);
        self
    }

    /// Observed abundance for a species, if reported.
    ///
    /// Non-finite values are treated as not reported so they stay neutral.
    pub fn get(&self, species: Species) -> Option<f64> {
        self.abundances
            .get(species.key())
            .copied()
            .filter(|v| v.is_finite())
    }

    /// Observed abundance with missing keys defaulting to 0
    pub fn percentage(&self, species: Species) -> f64 {
        self.get(species).unwrap_or(0.0)
    }

    /// Recognized species present in the profile, in table order
    pub fn recognized(&self) -> impl Iterator<Item = (Species, f64)> + '_ {
        Species::ALL
            .iter()
            .filter_map(move |&s| self.get(s).map(|pct| (s, pct)))
    }

    /// Keys the engine ignores (sorted for stable logging)
    pub fn unrecognized_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .abundances
            .keys()
            .map(String::as_str)
            .filter(|k| Species::from_key(k).is_none())
            .collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.abundances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.abundances.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for BacterialProfile {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            abundances: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_round_trip_for_all_species() {
        for s in Species::ALL {
            assert_eq!(Species::from_key(s.key()), Some(s));
        }
    }

    #[test]
    fn test_other_and_unknown_keys_are_unrecognized() {
        assert_eq!(Species::from_key("Other"), None);
        assert_eq!(Species::from_key("E.Coli"), None);
        assert_eq!(Species::from_key(" C.Acne "), None);
    }

    #[test]
    fn test_missing_and_non_finite_default_to_zero() {
        let profile = BacterialProfile::new()
            .with("S.Epi", f64::NAN)
            .with("C.Krop", f64::INFINITY);
        assert_eq!(profile.get(Species::StaphylococcusEpidermidis), None);
        assert_eq!(profile.percentage(Species::CorynebacteriumKroppenstedtii), 0.0);
        assert_eq!(profile.percentage(Species::CutibacteriumAcnes), 0.0);
        assert_eq!(profile.recognized().count(), 0);
    }

    #[test]
    fn test_recognized_follows_table_order() {
        let profile: BacterialProfile = [("R.Muc", 1.0), ("Other", 20.0), ("C.Acne", 70.0)]
            .into_iter()
            .collect();
        let order: Vec<Species> = profile.recognized().map(|(s, _)| s).collect();
        assert_eq!(
            order,
            vec![Species::CutibacteriumAcnes, Species::RothiaMucilaginosa]
        );
        assert_eq!(profile.unrecognized_keys(), vec!["Other"]);
    }

    #[test]
    fn test_padded_key_is_unrecognized() {
        let profile = BacterialProfile::new().with(" S.Epi ", 30.0);
        assert_eq!(profile.percentage(Species::StaphylococcusEpidermidis), 0.0);
        assert_eq!(profile.recognized().count(), 0);
        assert_eq!(profile.unrecognized_keys(), vec![" S.Epi "]);
    }

    #[test]
    fn test_profile_deserializes_from_flat_json_object() {
        let profile: BacterialProfile =
            serde_json::from_str(r#"{"C.Acne": 75.0, "S.Epi": 6, "Other": 19}"#).unwrap();
        assert_eq!(profile.len(), 3);
        assert_eq!(profile.percentage(Species::StaphylococcusEpidermidis), 6.0);
    }
}
