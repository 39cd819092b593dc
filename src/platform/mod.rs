// Platform-specific code module

pub mod sysinfo_provider;

pub use sysinfo_provider::SysinfoProvider;
