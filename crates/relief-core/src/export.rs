use crate::error::ExportError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Stl,
    Obj,
}

impl ExportFormat {
    pub fn name(self) -> &'static str {
        match self {
            ExportFormat::Stl => "STL",
            ExportFormat::Obj => "OBJ",
        }
    }
}

/// Printable-mesh export. Not implemented for any format yet.
pub fn export_mesh(format: ExportFormat) -> Result<Vec<u8>, ExportError> {
    Err(ExportError::Unimplemented(format.name()))
}
