pub mod config;
pub mod error;
pub mod extractor;
pub mod io;
pub mod mission;
pub mod parser;
pub mod paths;
pub mod prompt;
pub mod rules;
pub mod session;
pub mod theme;
pub mod two_factor;
pub mod types;

pub use error::{BrandkitError, Result};
pub use parser::{MissionParser, ProjectMissionParser};
pub use types::{BusinessContext, LogoBrief, PromptContext, ThemeColors};
