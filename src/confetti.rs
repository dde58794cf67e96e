//! Confetti Layout
//!
//! Pure generation of a one-shot confetti burst over the viewport.

use crate::viewport::Viewport;

/// Piece colors
pub const PALETTE: [&str; 8] = [
    "#e74c3c", "#f1c40f", "#2ecc71", "#3498db", "#9b59b6", "#e67e22", "#1abc9c", "#ff69b4",
];

/// Keyframes shared by every piece; `--drift`, `--fall` and `--spin` are set per piece
pub const KEYFRAMES: &str = "@keyframes confetti-fall {\
 from { transform: translate3d(0, 0, 0) rotate(0deg); opacity: 1; }\
 to { transform: translate3d(var(--drift), var(--fall), 0) rotate(var(--spin)); opacity: 0; } }";

/// Pieces start this far above the top edge
const START_OFFSET_PX: f64 = 20.0;

/// One falling piece
#[derive(Debug, Clone, PartialEq)]
pub struct ConfettiPiece {
    /// Horizontal start position in px
    pub left: f64,
    /// Width in px; height is 40% of it
    pub size: f64,
    pub color: &'static str,
    /// Horizontal travel during the fall in px
    pub drift: f64,
    /// Total rotation in degrees
    pub spin: f64,
    /// Start delay in seconds
    pub delay: f64,
    /// Fall time in seconds
    pub duration: f64,
}

impl ConfettiPiece {
    /// Inline style for a piece falling `fall` px
    pub fn style(&self, fall: f64) -> String {
        format!(
            "position: absolute; top: -{START_OFFSET_PX}px; left: {:.1}px; width: {:.1}px; height: {:.1}px; \
             background-color: {}; --drift: {:.1}px; --fall: {:.1}px; --spin: {:.0}deg; \
             animation: confetti-fall {:.2}s ease-in {:.2}s 1 both;",
            self.left,
            self.size,
            self.size * 0.4,
            self.color,
            self.drift,
            fall + 2.0 * START_OFFSET_PX,
            self.spin,
            self.duration,
            self.delay,
        )
    }
}

/// Scatter `count` pieces across the viewport width.
///
/// `random` must yield values in `[0, 1)`.
pub fn scatter(count: usize, viewport: Viewport, mut random: impl FnMut() -> f64) -> Vec<ConfettiPiece> {
    let width = viewport.width.max(0.0);
    (0..count)
        .map(|_| {
            let left = random() * width;
            let size = 6.0 + random() * 8.0;
            let color = PALETTE[((random() * PALETTE.len() as f64) as usize).min(PALETTE.len() - 1)];
            let drift = (random() - 0.5) * 200.0;
            let spin = (random() - 0.5) * 1440.0;
            let delay = random() * 1.5;
            let duration = 2.5 + random() * 2.0;
            ConfettiPiece {
                left,
                size,
                color,
                drift,
                spin,
                delay,
                duration,
            }
        })
        .collect()
}
