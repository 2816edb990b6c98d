pub mod template;

pub use template::TemplateFrameRenderer;
