//! Application constants for the edaphic query tool.
//!
//! Column names follow the source dataset schema, which is Spanish
//! (Colombian agronomy survey data).

// =============================================================================
// Dataset schema
// =============================================================================

/// Geographic hierarchy columns, in drill-down order
pub const COL_DEPARTMENT: &str = "departamento";
pub const COL_MUNICIPALITY: &str = "municipio";
pub const COL_CROP: &str = "cultivo";

/// Edaphic variable columns (optional in the source data)
pub const COL_PH: &str = "ph";
pub const COL_PHOSPHORUS: &str = "fosforo_p";
pub const COL_POTASSIUM: &str = "potasio_k";

/// Display labels for the edaphic variables
pub const LABEL_PH: &str = "pH";
pub const LABEL_PHOSPHORUS: &str = "Fósforo (P)";
pub const LABEL_POTASSIUM: &str = "Potasio (K)";

// =============================================================================
// File handling
// =============================================================================

/// Extensions routed to the workbook reader; everything else is read as CSV
pub const WORKBOOK_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];
