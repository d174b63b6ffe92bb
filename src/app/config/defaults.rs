// SPDX-License-Identifier: MPL-2.0
//! Default timing constants for the staged experience.
//!
//! Values mirror the pacing the experience was designed around; all of them
//! can be overridden through the `[timing]` section of `settings.toml`.

/// Delay before the first intro line gives way to the second (ms).
pub const DEFAULT_INTRO_FIRST_MS: u64 = 3_500;

/// Delay before the second intro line gives way to the countdown (ms).
pub const DEFAULT_INTRO_SECOND_MS: u64 = 4_000;

/// Countdown starting value.
pub const COUNTDOWN_START: u8 = 5;

/// Interval between countdown decrements (ms).
pub const DEFAULT_COUNTDOWN_TICK_MS: u64 = 1_000;

/// How long the "Ready?" display holds after the countdown reaches zero (ms).
pub const DEFAULT_READY_HOLD_MS: u64 = 800;

/// How long the bond scene holds before auto-advancing to the final card (ms).
pub const DEFAULT_BOND_HOLD_MS: u64 = 4_500;

/// Frame clock period while the reel is playing (ms).
pub const FRAME_TICK_MS: u64 = 33;

/// Ambient tick period for the decorative layer (ms).
pub const DECOR_TICK_MS: u64 = 100;

const _: () = {
    // A zero period would spin the runtime; keep every interval positive.
    assert!(DEFAULT_COUNTDOWN_TICK_MS > 0);
    assert!(DEFAULT_READY_HOLD_MS > 0);
    assert!(FRAME_TICK_MS > 0);
    assert!(DECOR_TICK_MS > 0);
    assert!(COUNTDOWN_START > 0);
};
