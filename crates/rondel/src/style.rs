use palette::Srgba;

/// Paint attributes of the widget, supplied by the host's styling source at
/// construction time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    /// Fill of the inner disk.
    pub background: Srgba<f64>,
    /// Fill of the outer ring and the track arcs.
    pub foreground: Srgba<f64>,
    /// Stroke color of the border pass.
    pub border: Srgba<f64>,
    /// Stroke width of the border pass, in pixels.
    pub border_width: f64,
    pub labels_color: Srgba<f64>,
    pub labels_text_size: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            background: Srgba::new(0.8, 0.8, 0.8, 1.0),
            foreground: Srgba::new(0.533, 0.533, 0.533, 1.0),
            border: Srgba::new(0.267, 0.267, 0.267, 1.0),
            border_width: 8.0,
            labels_color: Srgba::new(0.0, 0.0, 0.0, 1.0),
            labels_text_size: 44.0,
        }
    }
}
