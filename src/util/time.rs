//! Wall-clock access for message timestamps.

/// Current time in milliseconds since the Unix epoch.
///
/// Outside the browser this returns `0.0` so SSR output stays deterministic.
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}
