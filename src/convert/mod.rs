// Template conversion — hands extracted LaTeX to the remote conversion
// service and interprets its answer.
//
// The service itself is opaque: we send `{sourceLatex, templateUrl}` and get
// back `{success, convertedLatex?, error?}`. The Converter trait keeps the
// HTTP client swappable so workflows can be tested without a network.

pub mod client;
pub mod traits;
