/// Measured size of one rendered label, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextExtent {
    pub width: f64,
    pub height: f64,
}

/// Text measurement used for plot margins and label decimation.
///
/// Hosts with a real text shaper can plug it in; the default estimate keeps
/// layout deterministic and backend-independent.
pub trait LabelMetrics {
    fn measure(&self, text: &str, font_size_px: f64) -> TextExtent;
}

/// Per-glyph width estimate tuned for numeric labels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EstimatedLabelMetrics;

impl LabelMetrics for EstimatedLabelMetrics {
    fn measure(&self, text: &str, font_size_px: f64) -> TextExtent {
        let units = text.chars().fold(0.0, |acc, ch| {
            acc + match ch {
                '0'..='9' => 0.62,
                '.' | ',' => 0.34,
                '-' | '+' | '%' => 0.42,
                ' ' => 0.33,
                _ => 0.58,
            }
        });
        TextExtent {
            width: (units * font_size_px).max(font_size_px),
            height: font_size_px * 1.2,
        }
    }
}

/// Widest and tallest extent over the labels of `values`.
pub(super) fn max_label_extent(
    metrics: &dyn LabelMetrics,
    values: impl Iterator<Item = i64>,
    font_size_px: f64,
) -> TextExtent {
    values.fold(TextExtent::default(), |acc, value| {
        let extent = metrics.measure(&value.to_string(), font_size_px);
        TextExtent {
            width: acc.width.max(extent.width),
            height: acc.height.max(extent.height),
        }
    })
}
