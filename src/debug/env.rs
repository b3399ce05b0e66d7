//! `SEPARATE_SVG_*` environment variables controlling SVG output

pub(crate) mod svg {
    use std::{env, path};

    use crate::debug::svg::SvgOutputLevel;

    fn var(name: &str) -> Option<String> {
        env::var(format!("SEPARATE_SVG_{}", name)).ok()
    }

    /// `SEPARATE_SVG_OUTPUT_PATH`: the directory to write into. Nothing is written when unset.
    pub(crate) fn output_path() -> Option<path::PathBuf> {
        var("OUTPUT_PATH").map(path::PathBuf::from)
    }

    /// `SEPARATE_SVG_HIDE_LABELS`: any value hides fragment labels
    pub(crate) fn show_labels() -> bool {
        var("HIDE_LABELS").is_none()
    }

    /// `SEPARATE_SVG_OUTPUT_LEVEL`: `1` result only, `2` every split, `3` every split and its children
    pub(crate) fn output_level() -> SvgOutputLevel {
        match var("OUTPUT_LEVEL").as_deref().map(str::trim) {
            Some("3") => SvgOutputLevel::AllSteps,
            Some("2") => SvgOutputLevel::MajorSteps,
            Some("1") => SvgOutputLevel::ResultOnly,
            _ => SvgOutputLevel::None,
        }
    }
}
