use itertools::iproduct;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Output resolutions covered by every FPS table.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
    AsRefStr,
)]
pub enum Resolution {
    #[serde(rename = "1080p")]
    #[strum(serialize = "1080p")]
    Fhd,
    #[serde(rename = "1440p")]
    #[strum(serialize = "1440p")]
    Qhd,
    #[serde(rename = "4k")]
    #[strum(serialize = "4k")]
    Uhd,
}

/// In-game quality presets, lowest first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Quality {
    Low,
    Medium,
    High,
    Ultra,
}

/// Average and 1%-low frame rate for a single cell.
///
/// `low1 <= avg` is expected of well-formed data but never enforced here.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FpsPoint {
    pub avg: u32,
    pub low1: u32,
}

impl FpsPoint {
    pub fn new(avg: u32, low1: u32) -> Self {
        Self { avg, low1 }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityRow {
    pub low: FpsPoint,
    pub medium: FpsPoint,
    pub high: FpsPoint,
    pub ultra: FpsPoint,
}

impl QualityRow {
    pub fn get(&self, quality: Quality) -> FpsPoint {
        match quality {
            Quality::Low => self.low,
            Quality::Medium => self.medium,
            Quality::High => self.high,
            Quality::Ultra => self.ultra,
        }
    }

    pub fn get_mut(&mut self, quality: Quality) -> &mut FpsPoint {
        match quality {
            Quality::Low => &mut self.low,
            Quality::Medium => &mut self.medium,
            Quality::High => &mut self.high,
            Quality::Ultra => &mut self.ultra,
        }
    }
}

/// A complete Resolution x Quality table.
///
/// The shape is closed: all 12 cells always exist, and deserializing a
/// table with a missing cell fails.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FpsTable {
    #[serde(rename = "1080p")]
    pub fhd: QualityRow,
    #[serde(rename = "1440p")]
    pub qhd: QualityRow,
    #[serde(rename = "4k")]
    pub uhd: QualityRow,
}

impl FpsTable {
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(Resolution, Quality) -> FpsPoint,
    {
        let mut table = Self::default();
        for (res, q) in iproduct!(Resolution::iter(), Quality::iter()) {
            *table.row_mut(res).get_mut(q) = f(res, q);
        }
        table
    }

    pub fn row(&self, res: Resolution) -> &QualityRow {
        match res {
            Resolution::Fhd => &self.fhd,
            Resolution::Qhd => &self.qhd,
            Resolution::Uhd => &self.uhd,
        }
    }

    pub fn row_mut(&mut self, res: Resolution) -> &mut QualityRow {
        match res {
            Resolution::Fhd => &mut self.fhd,
            Resolution::Qhd => &mut self.qhd,
            Resolution::Uhd => &mut self.uhd,
        }
    }

    #[inline(always)]
    pub fn get(&self, res: Resolution, quality: Quality) -> FpsPoint {
        self.row(res).get(quality)
    }

    /// Resolution-major walk over all 12 cells.
    pub fn cells(&self) -> impl Iterator<Item = (Resolution, Quality, FpsPoint)> + '_ {
        iproduct!(Resolution::iter(), Quality::iter()).map(move |(r, q)| (r, q, self.get(r, q)))
    }
}
