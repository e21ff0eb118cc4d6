//! Shared gesture thresholds, in logical pixels.

/// Distance a pointer has to travel from its press position before a pan
/// activates. The same distance cancels a pending tap, so a press is never
/// both a drag and a tap.
pub const DRAG_THRESHOLD: f32 = 8.0;

/// Pointers a pan gesture accepts by default. More fails or cancels it.
pub const DEFAULT_MAX_POINTERS: usize = 1;
