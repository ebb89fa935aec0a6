/*! Line filtering utilities

Every candidate line goes through an ordered, short-circuiting chain ([LineFilter]):

1. markup, links, mentions and hashtags are removed ([clean::StripMarkup]),
1. emoji and pictographs are removed ([clean::StripEmoji]),
1. whitespace is normalized ([clean::NormalizeWhitespace]),
1. short lines or lines holding navigation characters are rejected ([line::Length], [line::IllegalChars]),
1. mostly numeric/symbolic lines are rejected ([line::CharacterOnly]),
1. lines shorter than a script-dependent threshold are rejected ([line::ScriptLength]),
1. lines with too many table/code characters are rejected ([line::CharCaps]).

Detection stages implement [Filter], cleaning stages implement [Transform].
Stateful filters (such as deduplication, see [crate::processing::dedup]) implement [FilterMut].
! */
pub mod clean;
mod filter;
pub mod line;
pub mod script;

pub use filter::Filter;
pub use filter::FilterMut;
pub use filter::Transform;
pub use line::LineFilter;
