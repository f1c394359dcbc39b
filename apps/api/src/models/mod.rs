pub mod assessment;
pub mod progress;
pub mod recommendation;
