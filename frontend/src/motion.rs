use crate::browser;

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionPreference {
    Full,
    Reduced,
}

impl MotionPreference {
    pub fn from_media_match(reduce: bool) -> Self {
        if reduce {
            MotionPreference::Reduced
        } else {
            MotionPreference::Full
        }
    }

    /// Reads the user's accessibility setting. Read once per mount; later
    /// changes to the setting are not picked up.
    pub fn detect() -> Self {
        match browser::media_matches(REDUCED_MOTION_QUERY) {
            Ok(reduce) => Self::from_media_match(reduce),
            Err(err) => {
                log::warn!("Could not read motion preference, assuming full motion: {}", err);
                MotionPreference::Full
            }
        }
    }

    pub fn is_reduced(self) -> bool {
        self == MotionPreference::Reduced
    }
}
