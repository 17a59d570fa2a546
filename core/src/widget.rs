use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionState {
    Idle,
    Dragging,
}

impl InteractionState {
    pub const fn is_dragging(self) -> bool {
        matches!(self, Self::Dragging)
    }
}

impl Default for InteractionState {
    fn default() -> Self {
        Self::Idle
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EraseOutcome {
    NoChange,
    Changed,
    Revealed,
}

impl EraseOutcome {
    pub const fn has_update(self) -> bool {
        use EraseOutcome::*;
        match self {
            NoChange => false,
            Changed => true,
            Revealed => true,
        }
    }
}

/// Scratch-off state machine for one displayed prize.
///
/// The surface is only touched while dragging and before the reveal; once revealed it is
/// cleared for good and every further input is ignored.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealWidget<S = CoverageBuffer> {
    surface: S,
    config: RevealConfig,
    prize: PrizeOutcome,
    interaction: InteractionState,
    revealed: bool,
}

impl RevealWidget<CoverageBuffer> {
    pub fn new(prize: PrizeOutcome, config: RevealConfig) -> Self {
        Self::with_surface(CoverageBuffer::new(config.size), prize, config)
    }
}

impl<S: DrawingSurface> RevealWidget<S> {
    /// Wraps `surface`, painting it fully covered.
    pub fn with_surface(mut surface: S, prize: PrizeOutcome, config: RevealConfig) -> Self {
        surface.fill();
        log::debug!("scratch surface ready for {:?}", prize.label());
        Self {
            surface,
            config,
            prize,
            interaction: Default::default(),
            revealed: false,
        }
    }

    pub fn prize(&self) -> &PrizeOutcome {
        &self.prize
    }

    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    pub fn interaction(&self) -> InteractionState {
        self.interaction
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn coverage(&self) -> Coverage {
        self.surface.sample_coverage()
    }

    pub fn erased_fraction(&self) -> f64 {
        self.coverage().fraction()
    }

    /// Shows `prize`, starting over with a full cover when its label differs from the current one.
    pub fn set_prize(&mut self, prize: PrizeOutcome) -> EraseOutcome {
        if prize.label() == self.prize.label() {
            if prize == self.prize {
                return EraseOutcome::NoChange;
            }
            self.prize = prize;
            return EraseOutcome::Changed;
        }

        log::debug!("prize changed to {:?}, covering again", prize.label());
        self.prize = prize;
        self.reset();
        EraseOutcome::Changed
    }

    pub fn reset(&mut self) {
        self.surface.fill();
        self.interaction = InteractionState::Idle;
        self.revealed = false;
    }

    pub fn begin_erase(&mut self, point: PointerSample) -> EraseOutcome {
        if self.revealed {
            return EraseOutcome::NoChange;
        }

        self.interaction = InteractionState::Dragging;
        log::trace!("begin erase at {:?}", point);
        match self.stamp(point) {
            EraseOutcome::Revealed => EraseOutcome::Revealed,
            _ => EraseOutcome::Changed,
        }
    }

    pub fn continue_erase(&mut self, point: PointerSample) -> EraseOutcome {
        if self.revealed || !self.interaction.is_dragging() {
            return EraseOutcome::NoChange;
        }

        log::trace!("continue erase at {:?}", point);
        self.stamp(point)
    }

    pub fn end_erase(&mut self) -> EraseOutcome {
        match core::mem::take(&mut self.interaction) {
            InteractionState::Dragging => {
                log::trace!("end erase");
                EraseOutcome::Changed
            }
            InteractionState::Idle => EraseOutcome::NoChange,
        }
    }

    fn stamp(&mut self, point: PointerSample) -> EraseOutcome {
        let erased = self.surface.stamp_erase(point, self.config.brush_radius);
        if erased == 0 {
            return EraseOutcome::NoChange;
        }

        let coverage = self.surface.sample_coverage();
        if coverage.fraction() > self.config.threshold {
            log::debug!(
                "revealed {:?} at {}/{} erased",
                self.prize.label(),
                coverage.erased,
                coverage.total
            );
            self.revealed = true;
            self.interaction = InteractionState::Idle;
            self.surface.clear();
            EraseOutcome::Revealed
        } else {
            EraseOutcome::Changed
        }
    }
}
