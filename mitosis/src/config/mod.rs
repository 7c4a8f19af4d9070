use embassy_time::Duration;
use embedded_hal::digital::OutputPin;

/// The config struct for the Mitosis keyboard.
///
/// - `indicator_config`: pins of the RGB status LED, `None` if the board has no LED
/// - `mouse_key_config`: parameters handed to the host's mouse key emulation
/// - `scan_interval`: how often the layer indicator is refreshed
pub struct KeyboardConfig<P: OutputPin> {
    pub indicator_config: Option<LayerIndicatorConfig<P>>,
    pub mouse_key_config: MouseKeyConfig,
    pub scan_interval: Duration,
}

impl<P: OutputPin> Default for KeyboardConfig<P> {
    fn default() -> Self {
        Self {
            indicator_config: None,
            mouse_key_config: MouseKeyConfig::default(),
            scan_interval: Duration::from_millis(1),
        }
    }
}

/// Pins of the RGB status LED.
///
/// The Mitosis receiver drives its LED active-low.
pub struct LayerIndicatorConfig<P: OutputPin> {
    pub red: P,
    pub green: P,
    pub blue: P,
    pub low_active: bool,
}

impl<P: OutputPin> LayerIndicatorConfig<P> {
    pub fn new(red: P, green: P, blue: P) -> Self {
        Self {
            red,
            green,
            blue,
            low_active: true,
        }
    }
}

/// Mouse key parameters, same meaning as QMK's `MOUSEKEY_*` settings
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MouseKeyConfig {
    /// Delay between pressing a movement key and the cursor starting to move, in ms
    pub delay_ms: u16,
    /// Time between cursor movements, in ms
    pub interval_ms: u16,
    /// Maximum cursor speed
    pub max_speed: u8,
    /// Number of movements until the maximum speed is reached
    pub time_to_max: u8,
    pub wheel_max_speed: u8,
    pub wheel_time_to_max: u8,
}

impl Default for MouseKeyConfig {
    fn default() -> Self {
        Self {
            delay_ms: 50,
            interval_ms: 50,
            max_speed: 10,
            time_to_max: 5,
            wheel_max_speed: 8,
            wheel_time_to_max: 40,
        }
    }
}
