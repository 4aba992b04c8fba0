/*!
A context method to return the trail to some earlier decision level.

Every assignment at a level above the target is removed from the trail and the valuation, in particular the consequences of the decision of the target level's successor.
Values lost may be saved for [phase saving](crate::config::PhaseSaving), per the configuration:

- Full saves every value lost.
- Limited saves only values lost from the (current) top level.
- None saves nothing.

Atoms which lose a value and remain eligible for decisions return to the decision heap.
*/

use crate::{
    config::PhaseSaving,
    context::GenericContext,
    db::LevelIndex,
    misc::log::targets::{self},
};

impl<R: rand::Rng> GenericContext<R> {
    /// Returns the trail and valuation to `level`, if above it.
    pub fn backjump(&mut self, level: LevelIndex) {
        if self.trail.level() <= level {
            return;
        }

        log::trace!(target: targets::BACKJUMP, "Backjump from {} to {level}", self.trail.level());

        let save_from = match self.config.phase_saving {
            PhaseSaving::None => usize::MAX,
            PhaseSaving::Limited => self.trail.level_start(self.trail.level()),
            PhaseSaving::Full => 0,
        };
        let base = self.trail.level_start(level + 1);

        for (offset, literal) in self.trail.clear_above(level).enumerate() {
            let save_value = base + offset >= save_from;
            self.atom_db.drop_value(literal.atom(), save_value);
        }
    }
}
