use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, warn};

use crate::error::{InvoiceError, Result};
use crate::invoice::InvoiceData;
use crate::pdf::Renderer;

/// Embedded Typst template for invoice generation
/// Uses a placeholder that gets replaced with the actual JSON file path
const INVOICE_TEMPLATE: &str = r##"// Invoice Template
// Data is loaded from JSON file

#let data = json("DATA_JSON_PATH")

#set page(paper: "a4", margin: 50pt)

#set text(font: ("Helvetica", "Arial", "Liberation Sans"), size: 11pt)
#set par(leading: 0.6em)

#let labeled(entries) = {
  for entry in entries [
    #strong(entry.label + ":") #entry.value #linebreak()
  ]
}

// Title and period
#align(center)[#text(size: 18pt)[#data.title]]
#v(10pt)
#strong(data.heading)
#line(length: 100%, stroke: 1pt + gray)
#v(16pt)

// Issuer
#labeled(data.issuer)
#v(10pt)

// Recipient
#strong[To: #data.recipient_name] #linebreak()
#labeled(data.recipient)
#v(18pt)

#strong[Invoice period:] #data.period
#v(12pt)

// Charge table
#table(
  columns: (150pt, 100pt, 100pt, 60pt, 100pt),
  stroke: 1pt + black,
  fill: (x, y) => if y == 0 { luma(211) },
  align: center + horizon,
  inset: (x, y) => if y == 0 { (x: 5pt, y: 12pt) } else { (x: 5pt, y: 8pt) },

  // Header
  ..data.header.map(h => strong(h)),

  // Row
  data.charge.service,
  data.charge.document_date,
  data.charge.due_date,
  data.charge.currency,
  data.charge.total_amount,
)

#v(18pt)

// Bank transfer
#strong(emph(data.bank_heading))

#labeled(data.bank)
"##;

/// Renders invoices by shelling out to the Typst CLI
#[derive(Debug, Clone)]
pub struct TypstRenderer {
    binary: PathBuf,
}

impl TypstRenderer {
    pub fn new() -> Self {
        Self::with_binary("typst")
    }

    /// Use a specific typst executable instead of the one on PATH.
    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl Default for TypstRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for TypstRenderer {
    fn render(&self, invoice_data: &InvoiceData, output_path: &Path) -> Result<()> {
        // Check if typst is available
        if Command::new(&self.binary).arg("--version").output().is_err() {
            return Err(InvoiceError::TypstNotFound);
        }

        // Template and data live in their own directory, removed on drop
        let work_dir = tempfile::Builder::new().prefix("invoice-mailer").tempdir()?;

        let json_data = serde_json::to_string(invoice_data)
            .map_err(|e| InvoiceError::PdfGeneration(e.to_string()))?;
        let json_path = work_dir.path().join("data.json");
        std::fs::write(&json_path, &json_data)?;

        // data.json is in the same directory as the template
        let template_content = INVOICE_TEMPLATE.replace("DATA_JSON_PATH", "data.json");
        let template_path = work_dir.path().join("invoice.typ");
        std::fs::write(&template_path, &template_content)?;

        debug!(binary = %self.binary.display(), output = %output_path.display(), "running typst compile");
        let output = Command::new(&self.binary)
            .arg("compile")
            .arg("--root")
            .arg(work_dir.path())
            .arg(&template_path)
            .arg(output_path)
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!(status = %output.status, "typst compile failed");
            return Err(InvoiceError::PdfGeneration(stderr.trim().to_string()));
        }

        Ok(())
    }
}
