//! # Sheet Configuration
//!
//! This module defines the physical label stock sheets are printed on.
//!
//! ## Supported Stock
//!
//! | Name | Width | Height |
//! |------|-------|--------|
//! | Label 3.6 × 5.6 | 3.6in (91.44mm) | 5.6in (142.24mm) |
//!
//! ## Usage
//!
//! ```
//! use doselabel::printer::SheetConfig;
//!
//! let config = SheetConfig::LABEL_3_6X5_6;
//! println!("Sheet: {}mm × {}mm", config.width_mm(), config.height_mm());
//! ```

use serde::Serialize;

/// Millimeters per inch.
pub const MM_PER_INCH: f32 = 25.4;

/// # Sheet Configuration
///
/// Physical size of one printed sheet. Every print page is emitted at
/// exactly this size; sheets are never scaled or merged.
///
/// ## Calculations
///
/// ```text
/// width_mm = width_in * 25.4
///
/// For LABEL_3_6X5_6:
///   width_mm  = 3.6 * 25.4 = 91.44mm
///   height_mm = 5.6 * 25.4 = 142.24mm
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SheetConfig {
    /// Stock name
    pub name: &'static str,

    /// Sheet width in inches
    pub width_in: f32,

    /// Sheet height in inches
    pub height_in: f32,
}

impl SheetConfig {
    /// # 3.6in × 5.6in Label Stock
    ///
    /// The clinic's bottle label sheet.
    ///
    /// ```text
    /// ┌──────── 3.6in ────────┐
    /// │ header                │
    /// │ instructions          │ 5.6in
    /// │ counseling            │
    /// │ clinic footer         │
    /// └───────────────────────┘
    /// ```
    pub const LABEL_3_6X5_6: Self = Self {
        name: "Label 3.6in x 5.6in",
        width_in: 3.6,
        height_in: 5.6,
    };

    /// Custom stock with the given size in inches.
    pub const fn inches(width_in: f32, height_in: f32) -> Self {
        Self {
            name: "Custom",
            width_in,
            height_in,
        }
    }

    /// Sheet width in millimeters
    ///
    /// ## Example
    ///
    /// ```
    /// use doselabel::printer::SheetConfig;
    ///
    /// let config = SheetConfig::LABEL_3_6X5_6;
    /// assert!((config.width_mm() - 91.44).abs() < 0.01);
    /// ```
    #[inline]
    pub fn width_mm(&self) -> f32 {
        self.width_in * MM_PER_INCH
    }

    /// Sheet height in millimeters
    #[inline]
    pub fn height_mm(&self) -> f32 {
        self.height_in * MM_PER_INCH
    }

    /// Convert millimeters to inches
    #[inline]
    pub fn mm_to_inches(mm: f32) -> f32 {
        mm / MM_PER_INCH
    }

    /// Print rules sizing every `.print-page` to one sheet.
    ///
    /// Only `#printable-content` is visible when printing; each page breaks
    /// after itself.
    pub fn page_css(&self) -> String {
        format!(
            "@media print {{\n\
             \x20 @page {{ size: {w}in {h}in; margin: 0; }}\n\
             \x20 body > *:not(#printable-content) {{ display: none !important; }}\n\
             \x20 #printable-content {{ display: block; }}\n\
             \x20 .print-page {{ width: {w}in; height: {h}in; overflow: hidden; \
             page-break-after: always; break-after: page; }}\n\
             \x20 .print-page:last-child {{ page-break-after: auto; break-after: auto; }}\n\
             }}\n",
            w = self.width_in,
            h = self.height_in,
        )
    }
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self::LABEL_3_6X5_6
    }
}
