pub mod common;
pub mod jobs;
pub mod run;

pub use common::RunContext;
pub use jobs::Jobs;
pub use run::Run;
