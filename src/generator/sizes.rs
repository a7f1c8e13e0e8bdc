//! The fixed table of icon sizes for an iOS `AppIcon` set.

/// Source edge below which the smaller icons may look soft.
pub const MIN_SOURCE_EDGE: u32 = 1024;

/// One required output icon: a square edge length and the file it is saved as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeSpec {
    /// Edge length in pixels.
    pub edge: u32,
    /// File name inside the output directory.
    pub filename: &'static str,
}

impl SizeSpec {
    const fn new(edge: u32, filename: &'static str) -> Self {
        Self { edge, filename }
    }
}

/// Every icon the generator writes, in generation order.
///
/// 120px appears twice on purpose: the 40pt@3x and 60pt@2x slots share a
/// pixel size but need separate files.
pub const APP_ICON_SIZES: [SizeSpec; 14] = [
    SizeSpec::new(20, "icon-20.png"),
    SizeSpec::new(29, "icon-29.png"),
    SizeSpec::new(40, "icon-40.png"),
    SizeSpec::new(58, "icon-29@2x.png"),
    SizeSpec::new(60, "icon-60.png"),
    SizeSpec::new(76, "icon-76.png"),
    SizeSpec::new(80, "icon-40@2x.png"),
    SizeSpec::new(87, "icon-29@3x.png"),
    SizeSpec::new(120, "icon-40@3x.png"),
    SizeSpec::new(120, "icon-60@2x.png"),
    SizeSpec::new(152, "icon-76@2x.png"),
    SizeSpec::new(167, "icon-83.5@2x.png"),
    SizeSpec::new(180, "icon-60@3x.png"),
    SizeSpec::new(1024, "icon-1024.png"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_filenames_unique() {
        let names: HashSet<_> = APP_ICON_SIZES.iter().map(|s| s.filename).collect();

        assert_eq!(names.len(), APP_ICON_SIZES.len());
    }

    #[test]
    fn test_shared_120_edge_kept() {
        let at_120: Vec<_> = APP_ICON_SIZES
            .iter()
            .filter(|s| s.edge == 120)
            .map(|s| s.filename)
            .collect();

        assert_eq!(at_120, ["icon-40@3x.png", "icon-60@2x.png"]);
    }

    #[test]
    fn test_edges_ascending() {
        assert!(APP_ICON_SIZES.windows(2).all(|w| w[0].edge <= w[1].edge));
        assert_eq!(APP_ICON_SIZES[0].edge, 20);
        assert_eq!(APP_ICON_SIZES[13].edge, MIN_SOURCE_EDGE);
    }

    #[test]
    fn test_all_png() {
        assert!(APP_ICON_SIZES
            .iter()
            .all(|s| s.edge > 0 && s.filename.ends_with(".png")));
    }
}
