pub mod color;
pub mod layout;
pub mod renderer;
pub mod sanitize;

pub use renderer::CertificateRenderer;
pub use sanitize::sanitize_filename;
