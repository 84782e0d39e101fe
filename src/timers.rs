/// The rate at which the delay and sound timers count down.
pub const TIMER_TICK_HERTZ: u64 = 60;

/// The delay and sound timers.  Both count down by one per [Timers::tick()] while non-zero
/// and stop at zero; only the timer-set instructions write them otherwise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Timers {
    pub(crate) delay: u8,
    pub(crate) sound: u8,
}

impl Timers {
    /// Decrements each timer that is currently non-zero.
    pub(crate) fn tick(&mut self) {
        self.delay = self.delay.saturating_sub(1);
        self.sound = self.sound.saturating_sub(1);
    }

    /// Returns true while the host should be sounding a tone
    pub(crate) fn sound_active(&self) -> bool {
        self.sound > 0
    }
}
