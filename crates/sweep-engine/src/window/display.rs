use winit::dpi::PhysicalSize;

/// Primary display size, or the fallback when it could not be queried.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DisplayInfo {
    pub size: PhysicalSize<u32>,
    /// `false` when `size` is the fallback.
    pub queried: bool,
}

/// Picks the display size from a monitor query result.
///
/// A missing monitor, or one reporting a zero dimension, yields `fallback`
/// and logs a warning.
pub fn resolve_display_size(
    monitor: Option<PhysicalSize<u32>>,
    fallback: PhysicalSize<u32>,
) -> DisplayInfo {
    match monitor {
        Some(size) if size.width > 0 && size.height > 0 => DisplayInfo { size, queried: true },
        _ => {
            log::warn!(
                "primary display size unavailable; using {}x{}",
                fallback.width,
                fallback.height
            );
            DisplayInfo {
                size: fallback,
                queried: false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FALLBACK: PhysicalSize<u32> = PhysicalSize::new(1280, 720);

    #[test]
    fn monitor_size_is_used_when_present() {
        let info = resolve_display_size(Some(PhysicalSize::new(2560, 1440)), FALLBACK);
        assert_eq!(info.size, PhysicalSize::new(2560, 1440));
        assert!(info.queried);
    }

    #[test]
    fn missing_monitor_falls_back() {
        let info = resolve_display_size(None, FALLBACK);
        assert_eq!(info.size, FALLBACK);
        assert!(!info.queried);
    }

    #[test]
    fn zero_sized_monitor_falls_back() {
        let info = resolve_display_size(Some(PhysicalSize::new(0, 1080)), FALLBACK);
        assert_eq!(info.size, FALLBACK);
    }
}
