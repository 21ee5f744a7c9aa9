//! Odometer counter model: animation state and the update pipeline.

use crate::display::sink::DisplaySink;
use crate::error::InitError;
use std::time::Duration;
use tokio::sync::watch;

/// Delay before the first animation after connect, letting the sink's layout
/// settle. Animating immediately on connect glitches on some renders.
pub const INITIAL_UPDATE_DELAY: Duration = Duration::from_millis(300);

/// Default roll-up animation length.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(2000);

/// Animation bookkeeping owned by one [`Odometer`] instance.
///
/// Fields are private: external writers go through [`Odometer::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationState {
    current_value: u64,
    target_value: u64,
    duration: Duration,
}

impl AnimationState {
    fn new(duration: Duration) -> Self {
        Self {
            current_value: 0,
            target_value: 0,
            duration,
        }
    }

    /// Last rendered value.
    pub fn current_value(&self) -> u64 {
        self.current_value
    }

    /// Value the display is animating toward.
    pub fn target_value(&self) -> u64 {
        self.target_value
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

/// Animated rolling counter bound to one display sink.
///
/// Lifecycle mirrors a UI widget: [`connect`](Self::connect) binds the sink
/// and initializes the display at 0, [`update`](Self::update) animates toward
/// a new value, [`disconnect`](Self::disconnect) drops sink and state.
/// Between disconnect and the next connect every update is a silent no-op.
pub struct Odometer<S: DisplaySink> {
    sink: Option<S>,
    state: Option<AnimationState>,
    duration: Duration,
}

impl<S: DisplaySink> Odometer<S> {
    /// Creates an unconnected odometer.
    ///
    /// A zero `duration` falls back to [`DEFAULT_DURATION`].
    pub fn new(duration: Duration) -> Self {
        let duration = if duration.is_zero() {
            DEFAULT_DURATION
        } else {
            duration
        };
        Self {
            sink: None,
            state: None,
            duration,
        }
    }

    /// Binds the odometer to a sink and initializes the display at 0.
    ///
    /// # Errors
    ///
    /// Returns [`InitError::MissingTarget`] when no sink is supplied. The
    /// caller logs the error and continues without the animated counter;
    /// subsequent [`update`](Self::update) calls are no-ops.
    pub fn connect(&mut self, sink: Option<S>) -> Result<(), InitError> {
        let Some(sink) = sink else {
            return Err(InitError::MissingTarget);
        };
        self.sink = Some(sink);
        self.state = Some(AnimationState::new(self.duration));
        Ok(())
    }

    /// Returns whether the odometer is bound to a sink.
    pub fn is_connected(&self) -> bool {
        self.sink.is_some() && self.state.is_some()
    }

    /// Last rendered value, if initialized.
    pub fn current_value(&self) -> Option<u64> {
        self.state.as_ref().map(AnimationState::current_value)
    }

    /// Animation bookkeeping, if initialized.
    pub fn state(&self) -> Option<&AnimationState> {
        self.state.as_ref()
    }

    /// Animates the display from the current value to `value`.
    ///
    /// A `None` value, or an odometer that is not (or no longer) connected,
    /// makes this a silent no-op rather than an error.
    pub async fn update(&mut self, value: Option<u64>) {
        let Some(value) = value else { return };
        let (Some(sink), Some(state)) = (self.sink.as_mut(), self.state.as_mut()) else {
            return;
        };

        state.target_value = value;
        sink.animate(state.current_value, value, state.duration).await;
        state.current_value = value;
    }

    /// Releases the sink and discards animation state. No teardown animation.
    pub fn disconnect(&mut self) {
        self.sink = None;
        self.state = None;
    }

    /// Drives the odometer from a value feed until the feed closes.
    ///
    /// Waits [`INITIAL_UPDATE_DELAY`] before the first animation, applying
    /// whatever value the feed holds at that point, then animates on every
    /// subsequent change. The `watch` receiver only ever yields the newest
    /// value, so updates arriving faster than the animation length are
    /// dropped in favor of the latest one (last-write-wins).
    pub async fn run(mut self, mut values: watch::Receiver<Option<u64>>) {
        tokio::time::sleep(INITIAL_UPDATE_DELAY).await;

        let initial = *values.borrow_and_update();
        self.update(initial).await;

        while values.changed().await.is_ok() {
            let value = *values.borrow_and_update();
            self.update(value).await;
        }

        self.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::sink::MockDisplaySink;

    fn connected(mock: MockDisplaySink) -> Odometer<MockDisplaySink> {
        let mut odometer = Odometer::new(DEFAULT_DURATION);
        odometer.connect(Some(mock)).unwrap();
        odometer
    }

    #[tokio::test]
    async fn test_update_animates_from_zero() {
        let mut mock = MockDisplaySink::new();
        mock.expect_animate()
            .withf(|&from, &to, &duration| {
                from == 0 && to == 42 && duration == DEFAULT_DURATION
            })
            .times(1)
            .return_const(());

        let mut odometer = connected(mock);
        assert_eq!(odometer.current_value(), Some(0));

        odometer.update(Some(42)).await;
        assert_eq!(odometer.current_value(), Some(42));
    }

    #[tokio::test]
    async fn test_sequential_updates_last_write_wins() {
        let mut mock = MockDisplaySink::new();
        mock.expect_animate()
            .withf(|&from, &to, _| from == 0 && to == 10)
            .times(1)
            .return_const(());
        mock.expect_animate()
            .withf(|&from, &to, _| from == 10 && to == 25)
            .times(1)
            .return_const(());

        let mut odometer = connected(mock);
        odometer.update(Some(10)).await;
        odometer.update(Some(25)).await;

        assert_eq!(odometer.current_value(), Some(25));
        assert_eq!(odometer.state().unwrap().target_value(), 25);
    }

    #[tokio::test]
    async fn test_update_none_is_noop() {
        let mut mock = MockDisplaySink::new();
        mock.expect_animate().times(0);

        let mut odometer = connected(mock);
        odometer.update(None).await;

        assert_eq!(odometer.current_value(), Some(0));
    }

    #[tokio::test]
    async fn test_connect_without_target_fails_soft() {
        let mut odometer: Odometer<MockDisplaySink> = Odometer::new(DEFAULT_DURATION);

        let err = odometer.connect(None).unwrap_err();
        assert!(matches!(err, InitError::MissingTarget));
        assert!(!odometer.is_connected());

        // update on an uninitialized widget stays silent
        odometer.update(Some(5)).await;
        assert_eq!(odometer.current_value(), None);
    }

    #[tokio::test]
    async fn test_update_after_disconnect_is_noop() {
        let mut mock = MockDisplaySink::new();
        mock.expect_animate().times(1).return_const(());

        let mut odometer = connected(mock);
        odometer.update(Some(3)).await;

        odometer.disconnect();
        assert!(!odometer.is_connected());

        odometer.update(Some(99)).await;
        assert_eq!(odometer.current_value(), None);
    }

    #[test]
    fn test_zero_duration_coerced_to_default() {
        let odometer: Odometer<MockDisplaySink> = Odometer::new(Duration::ZERO);
        assert_eq!(odometer.duration, DEFAULT_DURATION);
    }

    #[test]
    fn test_connect_initializes_at_zero() {
        let mut mock = MockDisplaySink::new();
        mock.expect_animate().times(0);

        let odometer = connected(mock);
        let state = odometer.state().unwrap();

        assert_eq!(state.current_value(), 0);
        assert_eq!(state.target_value(), 0);
        assert_eq!(state.duration(), DEFAULT_DURATION);
    }
}
