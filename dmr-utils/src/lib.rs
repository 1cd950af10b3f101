//! Shared utility functions for DMR crates.

/// Marker styling derived from a station's nitrate figures.
pub mod styling {
    use serde::{Deserialize, Serialize};

    /// Smallest marker radius in pixels.
    pub const MIN_MARKER_SIZE: f64 = 10.0;
    /// Largest marker radius in pixels.
    pub const MAX_MARKER_SIZE: f64 = 20.0;

    /// Nitrate concentration bucket, one per marker fill color.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum NitrateColor {
        Green,
        Orange,
        Red,
        DarkRed,
    }

    impl NitrateColor {
        pub const ALL: [NitrateColor; 4] = [
            NitrateColor::Green,
            NitrateColor::Orange,
            NitrateColor::Red,
            NitrateColor::DarkRed,
        ];

        pub fn hex(&self) -> &'static str {
            match self {
                NitrateColor::Green => "#22c55e",
                NitrateColor::Orange => "#f97316",
                NitrateColor::Red => "#ef4444",
                NitrateColor::DarkRed => "#dc2626",
            }
        }

        /// Legend text for the concentration interval.
        pub fn range_label(&self) -> &'static str {
            match self {
                NitrateColor::Green => "< 5.0 mg/L",
                NitrateColor::Orange => "5.0 - 7.0 mg/L",
                NitrateColor::Red => "7.0 - 9.0 mg/L",
                NitrateColor::DarkRed => ">= 9.0 mg/L",
            }
        }
    }

    /// Map a nitrate concentration (mg/L) to its color bucket.
    ///
    /// Intervals are half-open: `[0,5)`, `[5,7)`, `[7,9)`, `[9,∞)`.
    pub fn color_for(nitrate: f64) -> NitrateColor {
        if nitrate < 5.0 {
            NitrateColor::Green
        } else if nitrate < 7.0 {
            NitrateColor::Orange
        } else if nitrate < 9.0 {
            NitrateColor::Red
        } else {
            NitrateColor::DarkRed
        }
    }

    /// Scale a loading rate linearly into `[MIN_MARKER_SIZE, MAX_MARKER_SIZE]`.
    ///
    /// A degenerate range (`min == max`) yields the midpoint. Loadings outside
    /// the range are clamped so the result is always finite and in bounds.
    pub fn size_for(loading: f64, dataset_min: f64, dataset_max: f64) -> f64 {
        let span = dataset_max - dataset_min;
        if span == 0.0 || !span.is_finite() {
            return (MIN_MARKER_SIZE + MAX_MARKER_SIZE) / 2.0;
        }
        let normalized = ((loading - dataset_min) / span).clamp(0.0, 1.0);
        if normalized.is_nan() {
            return MIN_MARKER_SIZE;
        }
        MIN_MARKER_SIZE + normalized * (MAX_MARKER_SIZE - MIN_MARKER_SIZE)
    }

}

/// Text formatting for table cells and popups.
pub mod format {
    /// Format a number with comma thousands separators.
    ///
    /// Integral values print without decimals; others keep up to three
    /// fractional digits with trailing zeros removed.
    pub fn thousands(value: f64) -> String {
        let abs = value.abs();
        // Thousandths are below f64 precision past 1e15; scaling would only lose digits
        let rounded = if abs < 1e15 {
            (abs * 1000.0).round() / 1000.0
        } else {
            abs
        };
        let text = format!("{:.3}", rounded);
        let (digits, frac) = text.split_once('.').unwrap_or((text.as_str(), ""));
        let frac = frac.trim_end_matches('0');

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 5);
        if value < 0.0 && rounded > 0.0 {
            grouped.push('-');
        }
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        if !frac.is_empty() {
            grouped.push('.');
            grouped.push_str(frac);
        }
        grouped
    }

    /// Cut `text` to `max_chars` characters and append "..." when it was longer.
    pub fn truncate(text: &str, max_chars: usize) -> String {
        match text.char_indices().nth(max_chars) {
            Some((idx, _)) => format!("{}...", &text[..idx]),
            None => text.to_string(),
        }
    }

    /// Escape text for interpolation into HTML markup.
    pub fn escape_html(text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for ch in text.chars() {
            match ch {
                '&' => out.push_str("&amp;"),
                '<' => out.push_str("&lt;"),
                '>' => out.push_str("&gt;"),
                '"' => out.push_str("&quot;"),
                '\'' => out.push_str("&#39;"),
                _ => out.push(ch),
            }
        }
        out
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_thousands() {
            assert_eq!(thousands(143164.0), "143,164");
            assert_eq!(thousands(245122.0), "245,122");
            assert_eq!(thousands(440.0), "440");
            assert_eq!(thousands(6245.0), "6,245");
            assert_eq!(thousands(1234567.0), "1,234,567");
            assert_eq!(thousands(0.0), "0");
            assert_eq!(thousands(1234.5), "1,234.5");
            assert_eq!(thousands(-9817.0), "-9,817");
            assert_eq!(thousands(0.1234), "0.123");
            assert_eq!(thousands(-0.0001), "0");
        }

        #[test]
        fn test_thousands_beyond_u64() {
            assert_eq!(thousands(1e20), "100,000,000,000,000,000,000");
            assert_eq!(thousands(1e25), "10,000,000,000,000,000,905,969,664");
        }

        #[test]
        fn test_truncate() {
            assert_eq!(truncate("Boone River", 30), "Boone River");
            assert_eq!(
                truncate("Des Moines River at 2nd Avenue at Des Moines, IA", 30),
                "Des Moines River at 2nd Avenue..."
            );
            let exactly = "x".repeat(30);
            assert_eq!(truncate(&exactly, 30), exactly);
            assert_eq!(truncate("ééé", 2), "éé...");
        }

        #[test]
        fn test_escape_html() {
            assert_eq!(
                escape_html("<b>\"R&D\"</b> 'x'"),
                "&lt;b&gt;&quot;R&amp;D&quot;&lt;/b&gt; &#39;x&#39;"
            );
            assert_eq!(escape_html("plain"), "plain");
        }
    }
}
