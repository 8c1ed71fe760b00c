pub mod capability;
pub mod settings;

pub use capability::ForceCapability;
pub use settings::ViewSettings;
