pub mod settings;

pub use settings::{
    BehaviorConfig, Config, ExportConfig, LlmConfig, NoArgsBehavior, SecurityConfig,
};
