// Adapters layer: concrete implementations of the domain ports.

pub mod apt_venv;

pub use apt_venv::AptVenv;
