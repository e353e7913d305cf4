use crate::core::config::Configuration;
use crate::rules::movegen::Move;

/// Extra restrictions layered on top of safety-filtered move generation.
///
/// Laws can only remove moves; they never make an unsafe configuration acceptable.
pub trait LawsLike {
    #[inline]
    fn allow_move(&self, _from: &Configuration, _mv: &Move) -> bool {
        true
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoLaws;
impl LawsLike for NoLaws {}
