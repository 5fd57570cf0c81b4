//! Countdown timer background task

use std::time::Duration;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, error, info};

use crate::{
    error::CountdownError,
    presenter::Presenter,
    services::{Clock, TimeSource},
    state::{CountdownEngine, CountdownEvent},
};

/// Nominal gap between two ticks; the engine corrects for the real one
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Synchronise the engine with the time source, then tick until it completes
///
/// A failing time source is fatal and returned as is. The periodic timer is
/// dropped as soon as the engine reports completion, so no tick fires after it.
pub async fn countdown_timer_task<S, C, P>(
    mut engine: CountdownEngine,
    source: &S,
    clock: &C,
    mut presenter: P,
) -> Result<CountdownEngine, CountdownError>
where
    S: TimeSource,
    C: Clock,
    P: Presenter,
{
    info!("Starting countdown timer task");

    let authoritative_now = source.now().await.map_err(|e| {
        error!("Failed to get time from time source: {}", e);
        e
    })?;

    let events = engine.sync(authoritative_now, clock.now_millis())?;
    present_all(&mut presenter, &events);

    if engine.is_complete() {
        return Ok(engine);
    }

    let mut interval = interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        interval.tick().await;

        let events = engine.tick(clock.now_millis());
        present_all(&mut presenter, &events);

        if engine.is_complete() {
            debug!("Countdown complete, stopping timer");
            break;
        }
    }

    Ok(engine)
}

fn present_all<P: Presenter>(presenter: &mut P, events: &[CountdownEvent]) {
    for event in events {
        presenter.present(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    use crate::{
        config::CountdownConfig,
        error::TimeSourceError,
        presenter::testing::RecordingPresenter,
        state::{Completion, EngineState},
        utils::iso8601::parse,
    };

    /// Clock that follows tokio's (pausable) time
    struct TokioClock {
        origin: Instant,
    }

    impl TokioClock {
        fn new() -> Self {
            Self {
                origin: Instant::now(),
            }
        }
    }

    impl Clock for TokioClock {
        fn now_millis(&self) -> i64 {
            self.origin.elapsed().as_millis() as i64
        }
    }

    struct FixedTimeSource(DateTime<Utc>);

    impl TimeSource for FixedTimeSource {
        async fn now(&self) -> Result<DateTime<Utc>, TimeSourceError> {
            Ok(self.0)
        }
    }

    struct FailingTimeSource;

    impl TimeSource for FailingTimeSource {
        async fn now(&self) -> Result<DateTime<Utc>, TimeSourceError> {
            Err(TimeSourceError::Status {
                endpoint: "http://time.invalid".to_string(),
                status: 503,
            })
        }
    }

    fn engine(config: CountdownConfig, clock: &TokioClock) -> CountdownEngine {
        CountdownEngine::new(config, clock.now_millis()).unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn counts_down_to_completion() {
        let clock = TokioClock::new();
        let config = CountdownConfig::new(Some("2013-11-29T10:00:03.500Z".into()))
            .with_intro_message("Starts in".into());
        let source = FixedTimeSource(parse("2013-11-29T10:00:00Z").unwrap());
        let mut presenter = RecordingPresenter::default();

        let engine = countdown_timer_task(engine(config, &clock), &source, &clock, &mut presenter)
            .await
            .unwrap();

        assert_eq!(engine.state(), EngineState::Complete);
        assert_eq!(presenter.events.first(), Some(&CountdownEvent::Intro("Starts in".into())));
        assert_eq!(
            presenter.ticks(),
            vec!["00:00:00:03", "00:00:00:03", "00:00:00:02", "00:00:00:01", "00:00:00:00"]
        );
        assert_eq!(
            presenter.events.last(),
            Some(&CountdownEvent::Complete(Completion::Zeroed("00:00:00:00".into())))
        );
        assert_eq!(clock.origin.elapsed(), Duration::from_secs(5));
    }

    #[tokio::test(start_paused = true)]
    async fn past_target_never_starts_the_timer() {
        let clock = TokioClock::new();
        let config = CountdownConfig::new(Some("2013-11-29T05:00:00-05:00".into()))
            .with_complete_message("Available NOW!".into());
        let source = FixedTimeSource(parse("2013-11-30T10:00:00Z").unwrap());
        let mut presenter = RecordingPresenter::default();

        countdown_timer_task(engine(config, &clock), &source, &clock, &mut presenter)
            .await
            .unwrap();

        assert!(presenter.ticks().is_empty());
        assert_eq!(
            presenter.events,
            vec![CountdownEvent::Complete(Completion::Message("Available NOW!".into()))]
        );
        assert_eq!(clock.origin.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn time_source_failure_is_fatal() {
        let clock = TokioClock::new();
        let config = CountdownConfig::new(Some("2013-11-29T05:00:00-05:00".into()));
        let mut presenter = RecordingPresenter::default();

        let result =
            countdown_timer_task(engine(config, &clock), &FailingTimeSource, &clock, &mut presenter).await;

        assert!(matches!(
            result,
            Err(CountdownError::TimeSource(TimeSourceError::Status { status: 503, .. }))
        ));
        assert!(presenter.events.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn minute_borrow_shows_on_the_second_tick() {
        let clock = TokioClock::new();
        let config = CountdownConfig::new(Some("2013-11-29T10:02:00Z".into()));
        let source = FixedTimeSource(parse("2013-11-29T10:00:00Z").unwrap());
        let mut presenter = RecordingPresenter::default();

        let task = countdown_timer_task(engine(config, &clock), &source, &clock, &mut presenter);
        let _ = tokio::time::timeout(Duration::from_millis(2_500), task).await;

        assert_eq!(
            presenter.ticks(),
            vec!["00:00:02:00", "00:00:02:00", "00:00:01:59"]
        );
    }
}
