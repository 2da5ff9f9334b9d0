pub struct Config;

impl Config {
    /// Countdown re-render interval in milliseconds.
    ///
    /// Half a second keeps the clock visually smooth without hammering the
    /// layout engine; the display only changes once a second anyway.
    pub fn countdown_tick_ms() -> u32 {
        500
    }
}
