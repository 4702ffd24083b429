//! Hand scoring: layoff enumeration and the final point differential.

mod layoff;
mod score;

pub use layoff::layoffable;
pub use score::{score_hand, GIN_BONUS, UNDERCUT_BONUS};
