//! GPIO / peripheral pin assignments for the indicator board.
//!
//! These are the *defaults* for [`ChannelMap`](crate::config::ChannelMap).
//! Drivers never read them directly: `main` resolves the configured map
//! to physical or simulated lines.

// ---------------------------------------------------------------------------
// Band indicator LEDs (active HIGH)
// ---------------------------------------------------------------------------

/// Red LED — high band, 30 °C to 45 °C.
pub const LED_RED_GPIO: i32 = 13;
/// Blue LED — mid band, 21 °C to 29 °C.
pub const LED_BLUE_GPIO: i32 = 12;
/// Green LED — low band, 17 °C to 20 °C.
pub const LED_GREEN_GPIO: i32 = 11;

/// Highest GPIO number accepted by config validation.
pub const MAX_GPIO: i32 = 48;

// ---------------------------------------------------------------------------
// UART debug console
// ---------------------------------------------------------------------------

pub const UART_TX_GPIO: i32 = 4;
pub const UART_RX_GPIO: i32 = 5;
pub const UART_BAUD: u32 = 115_200;
