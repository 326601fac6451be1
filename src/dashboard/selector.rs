//! Period selector controls.

use crate::data::Period;

/// One period button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodControl {
    pub period: Period,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct PeriodSelector {
    controls: Vec<PeriodControl>,
}

impl PeriodSelector {
    /// Selector with one control per period, `initial` active
    pub fn new(initial: Period) -> Self {
        let controls = Period::ALL
            .into_iter()
            .map(|period| PeriodControl {
                period,
                active: period == initial,
            })
            .collect();
        PeriodSelector { controls }
    }

    pub fn controls(&self) -> &[PeriodControl] {
        &self.controls
    }

    /// Make `period` the only active control
    pub fn activate(&mut self, period: Period) {
        for control in &mut self.controls {
            control.active = control.period == period;
        }
    }

    /// The active period, falling back to the first control
    pub fn active(&self) -> Period {
        self.controls
            .iter()
            .find(|c| c.active)
            .or_else(|| self.controls.first())
            .map(|c| c.period)
            .unwrap_or_default()
    }

    #[cfg(test)]
    fn set_active_flag(&mut self, period: Period, active: bool) {
        if let Some(control) = self.controls.iter_mut().find(|c| c.period == period) {
            control.active = active;
        }
    }
}
