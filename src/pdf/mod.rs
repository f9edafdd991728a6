mod typst;

pub use typst::TypstRenderer;

use crate::error::Result;
use crate::invoice::InvoiceData;
use std::path::Path;

/// Turns invoice data into a PDF file at `output`.
pub trait Renderer {
    fn render(&self, data: &InvoiceData, output: &Path) -> Result<()>;
}
