pub mod hinter;
pub mod morphemes;

pub use hinter::{LatinHinter, fallback_hint};
pub use morphemes::{MORPHEME_RULES, MorphemeRule};
