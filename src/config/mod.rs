mod loader;
mod model;

pub use loader::{ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, RealFileSystem};
pub use model::{
    DEFAULT_LANGUAGES_OUTPUT, DEFAULT_LEETCODE_OUTPUT, FileConfig, LanguagesConfig,
    LanguagesSection, LeetcodeConfig, LeetcodeSection,
};
