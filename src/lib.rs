// Resume Wizard: convert a LaTeX CV from an online editor to a new template.
//
// This is the library root. The CV core (surface + cv) is pure and
// synchronous; everything else is glue around it.

pub mod convert;
pub mod cv;
pub mod db;
pub mod output;
pub mod pipeline;
pub mod status;
pub mod surface;
pub mod templates;
