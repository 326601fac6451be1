//! Dashboard core: charts, counters, refresh and export behind a command interface.
//!
//! Nothing in here touches the terminal. The UI layer decides which mount
//! points exist, dispatches [`Command`]s and calls [`Dashboard::tick`] from its
//! event loop.

pub mod charts;
pub mod counters;
pub mod export;
pub mod refresh;
pub mod selector;

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use chrono::NaiveDate;
use tracing::info;

use crate::data::{counter_specs, CounterId, CounterSpec, Period};
use crate::error::DashboardError;
use charts::{ChartRegistry, ChartSlot, MountPoint};
use counters::{CounterAnimator, CounterBoard};
use refresh::RefreshState;
use selector::PeriodSelector;

/// Which mount points and counter slots are currently laid out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mounts {
    pub trend: bool,
    pub category: bool,
    pub cards: Vec<CounterId>,
}

impl Mounts {
    /// Every chart and card present
    pub fn all() -> Self {
        Mounts {
            trend: true,
            category: true,
            cards: vec![CounterId::Revenue, CounterId::Orders, CounterId::Customers],
        }
    }

    #[allow(dead_code)] // Used in tests
    pub fn none() -> Self {
        Mounts {
            trend: false,
            category: false,
            cards: Vec::new(),
        }
    }

    pub fn chart(&self, slot: ChartSlot) -> Option<MountPoint> {
        let present = match slot {
            ChartSlot::Trend => self.trend,
            ChartSlot::Category => self.category,
        };
        present.then(|| MountPoint::new(slot))
    }
}

/// Operations exposed to the UI layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SetPeriod(Period),
    Refresh,
    Export,
}

/// What a dispatched command did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    PeriodChanged(Period),
    RefreshStarted,
    Exported(PathBuf),
}

/// Dashboard state owned by the application
#[derive(Debug)]
pub struct Dashboard {
    charts: ChartRegistry,
    animator: CounterAnimator,
    board: CounterBoard,
    selector: PeriodSelector,
    refresh: RefreshState,
    export_dir: PathBuf,
}

impl Dashboard {
    pub fn new(initial_period: Period, export_dir: PathBuf, tick_interval: Duration) -> Self {
        Dashboard {
            charts: ChartRegistry::new(),
            animator: CounterAnimator::new(tick_interval),
            board: CounterBoard::new(),
            selector: PeriodSelector::new(initial_period),
            refresh: RefreshState::new(),
            export_dir,
        }
    }

    /// Render both charts and start the counters
    pub fn init(&mut self, mounts: &Mounts, now: Instant) {
        let period = self.period();
        self.board = CounterBoard::with_slots(mounts.cards.iter().copied());
        self.charts.render_trend(period, mounts.chart(ChartSlot::Trend));
        self.charts.render_category(mounts.chart(ChartSlot::Category));
        self.animator.animate(counter_specs(), &mut self.board, now);
        info!(%period, "dashboard initialised");
    }

    /// Reconcile charts and counter slots with a new layout.
    ///
    /// Charts whose mount point appeared are rendered, charts whose mount
    /// point vanished are disposed. Counters for newly laid out cards start
    /// animating from `now`.
    pub fn remount(&mut self, mounts: &Mounts, now: Instant) {
        let period = self.period();
        for slot in [ChartSlot::Trend, ChartSlot::Category] {
            let mount = mounts.chart(slot);
            match (mount.is_some(), self.charts.get(slot).is_some()) {
                (true, false) => match slot {
                    ChartSlot::Trend => {
                        self.charts.render_trend(period, mount);
                    }
                    ChartSlot::Category => {
                        self.charts.render_category(mount);
                    }
                },
                (false, true) => {
                    self.charts.dispose(slot);
                }
                _ => {}
            }
        }

        let stale: Vec<CounterId> = self
            .board
            .ids()
            .filter(|id| !mounts.cards.contains(id))
            .collect();
        for id in stale {
            self.board.detach(id);
        }
        let attached: Vec<CounterId> = mounts
            .cards
            .iter()
            .copied()
            .filter(|&id| !self.board.contains(id))
            .collect();
        for &id in &attached {
            self.board.attach(id);
        }

        if !attached.is_empty() {
            let specs: Vec<CounterSpec> = counter_specs()
                .iter()
                .filter(|spec| attached.contains(&spec.id))
                .copied()
                .collect();
            self.animator.animate(&specs, &mut self.board, now);
        }
    }

    /// Run a command from the UI layer
    pub fn dispatch(
        &mut self,
        command: Command,
        mounts: &Mounts,
        now: Instant,
    ) -> Result<Outcome, DashboardError> {
        match command {
            Command::SetPeriod(period) => {
                self.selector.activate(period);
                self.charts
                    .render_trend(period, mounts.chart(ChartSlot::Trend));
                Ok(Outcome::PeriodChanged(period))
            }
            Command::Refresh => {
                self.refresh.start(now);
                info!("refresh started");
                Ok(Outcome::RefreshStarted)
            }
            Command::Export => {
                let today = chrono::Local::now().date_naive();
                self.export_on(today).map(Outcome::Exported)
            }
        }
    }

    /// Export as of a given date
    pub fn export_on(&self, date: NaiveDate) -> Result<PathBuf, DashboardError> {
        export::export_to_dir(&self.export_dir, date, self.period())
    }

    /// Advance counters and the refresh spin
    pub fn tick(&mut self, now: Instant) {
        if self.refresh.poll(now) {
            self.animator.animate(counter_specs(), &mut self.board, now);
            info!("refresh complete, counters replayed");
        }
        self.animator.advance(&mut self.board, now);
    }

    pub fn period(&self) -> Period {
        self.selector.active()
    }

    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }

    pub fn charts(&self) -> &ChartRegistry {
        &self.charts
    }

    pub fn board(&self) -> &CounterBoard {
        &self.board
    }

    pub fn selector(&self) -> &PeriodSelector {
        &self.selector
    }

    pub fn refresh_state(&self) -> &RefreshState {
        &self.refresh
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_animating() || self.refresh.is_spinning()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::counters::TICK_INTERVAL;
    use super::refresh::SPIN_DURATION;

    fn dashboard(dir: PathBuf) -> Dashboard {
        Dashboard::new(Period::ThirtyDays, dir, TICK_INTERVAL)
    }

    #[test]
    fn test_init_renders_everything() {
        let start = Instant::now();
        let mut dash = dashboard(PathBuf::from("."));
        dash.init(&Mounts::all(), start);

        assert_eq!(dash.charts().live_count(), 2);
        assert_eq!(dash.charts().trend().unwrap().period, Period::ThirtyDays);
        assert_eq!(dash.board().text(CounterId::Revenue), Some("$0.00"));
        assert!(dash.is_animating());

        dash.tick(start + Duration::from_secs(3));
        assert_eq!(dash.board().text(CounterId::Revenue), Some("$284,562.45"));
        assert_eq!(dash.board().text(CounterId::Orders), Some("1,247"));
        assert_eq!(dash.board().text(CounterId::Customers), Some("856"));
        assert!(!dash.is_animating());
    }

    #[test]
    fn test_init_without_mounts() {
        let mut dash = dashboard(PathBuf::from("."));
        dash.init(&Mounts::none(), Instant::now());
        assert_eq!(dash.charts().live_count(), 0);
        assert!(!dash.is_animating());
    }

    #[test]
    fn test_set_period_switches_trend() {
        let now = Instant::now();
        let mounts = Mounts::all();
        let mut dash = dashboard(PathBuf::from("."));
        dash.init(&mounts, now);

        let outcome = dash
            .dispatch(Command::SetPeriod(Period::NinetyDays), &mounts, now)
            .unwrap();
        assert_eq!(outcome, Outcome::PeriodChanged(Period::NinetyDays));
        assert_eq!(dash.period(), Period::NinetyDays);
        assert_eq!(dash.charts().trend().unwrap().points.len(), 4);
        assert_eq!(dash.charts().disposed_count(), 1);
        assert_eq!(
            dash.selector().controls().iter().filter(|c| c.active).count(),
            1
        );
    }

    #[test]
    fn test_set_period_without_trend_mount() {
        let now = Instant::now();
        let mounts = Mounts {
            trend: false,
            ..Mounts::all()
        };
        let mut dash = dashboard(PathBuf::from("."));
        dash.init(&mounts, now);

        dash.dispatch(Command::SetPeriod(Period::SevenDays), &mounts, now)
            .unwrap();
        assert_eq!(dash.period(), Period::SevenDays);
        assert!(dash.charts().trend().is_none());
    }

    #[test]
    fn test_refresh_replays_counters() {
        let start = Instant::now();
        let mounts = Mounts::all();
        let mut dash = dashboard(PathBuf::from("."));
        dash.init(&mounts, start);
        dash.tick(start + Duration::from_secs(3));

        let refresh_at = start + Duration::from_secs(4);
        dash.dispatch(Command::Refresh, &mounts, refresh_at).unwrap();
        assert!(dash.refresh_state().is_spinning());

        // Counters hold their final value while spinning
        dash.tick(refresh_at + Duration::from_millis(500));
        assert_eq!(dash.board().text(CounterId::Orders), Some("1,247"));

        dash.tick(refresh_at + SPIN_DURATION);
        assert!(!dash.refresh_state().is_spinning());
        assert_eq!(dash.board().text(CounterId::Orders), Some("0"));

        dash.tick(refresh_at + SPIN_DURATION + Duration::from_secs(3));
        assert_eq!(dash.board().text(CounterId::Orders), Some("1,247"));
    }

    #[test]
    fn test_export_writes_into_export_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let mut dash = dashboard(tmp.path().to_path_buf());
        dash.init(&Mounts::all(), Instant::now());

        let outcome = dash
            .dispatch(Command::Export, &Mounts::all(), Instant::now())
            .unwrap();
        let path = match outcome {
            Outcome::Exported(path) => path,
            other => panic!("expected export outcome, got {other:?}"),
        };
        assert!(path.starts_with(tmp.path()));
        let text = std::fs::read_to_string(path).unwrap();
        assert!(text.contains("Period: 30D"));
    }

    #[test]
    fn test_remount_follows_layout() {
        let now = Instant::now();
        let mut dash = dashboard(PathBuf::from("."));
        let narrow = Mounts {
            category: false,
            cards: vec![CounterId::Revenue],
            ..Mounts::all()
        };
        dash.init(&narrow, now);
        dash.tick(now + Duration::from_secs(3));
        assert!(dash.charts().category().is_none());
        assert!(!dash.board().contains(CounterId::Orders));

        let widened_at = now + Duration::from_secs(4);
        dash.remount(&Mounts::all(), widened_at);
        assert!(dash.charts().category().is_some());
        assert_eq!(dash.board().text(CounterId::Orders), Some("0"));
        // Counters that were already on screen keep their final value
        assert_eq!(dash.board().text(CounterId::Revenue), Some("$284,562.45"));

        dash.tick(widened_at + Duration::from_secs(3));
        assert_eq!(dash.board().text(CounterId::Orders), Some("1,247"));
        assert_eq!(dash.board().text(CounterId::Customers), Some("856"));
        assert_eq!(dash.board().text(CounterId::Revenue), Some("$284,562.45"));

        dash.remount(&narrow, widened_at + Duration::from_secs(5));
        assert!(dash.charts().category().is_none());
        assert_eq!(dash.charts().disposed_count(), 1);
        assert!(!dash.board().contains(CounterId::Orders));
        // The trend chart was never rebuilt
        assert_eq!(dash.charts().trend().unwrap().period, Period::ThirtyDays);
    }
}
