// Career analysis: validated inputs → providers → gap/score/roadmap → CareerAnalysis.
// The HTTP layer serializes the result and keeps nothing between requests.

pub mod handlers;
pub mod pipeline;
