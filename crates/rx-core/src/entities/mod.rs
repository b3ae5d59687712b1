mod fact;
mod match_result;

pub use fact::InteractionFact;
pub use match_result::MatchResult;
