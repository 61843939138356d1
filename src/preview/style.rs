//! Stylesheet for the preview page and the printed sheets.

use crate::printer::SheetConfig;

/// Screen styles shared by the preview and the printed pages.
const SHEET_CSS: &str = r#"
body { margin: 0; font-family: "Noto Sans Bengali", "Hind Siliguri", sans-serif; background: #f3f4f6; }
#preview { display: flex; flex-wrap: wrap; gap: 1rem; padding: 1rem; }
.printable-label-wrapper { margin-bottom: 1rem; }
.prescription-sheet { display: flex; flex-direction: column; box-sizing: border-box; padding: 0.25in; background: #fff; color: #000; }
.center { text-align: center; }
.bold { font-weight: 700; }
.small { font-size: 0.75rem; }
.row { display: flex; justify-content: space-between; align-items: center; font-size: 0.875rem; }
.field-value { color: #4338ca; font-weight: 800; }
.patient { margin: 0.25rem 0 1rem; }
.sequence-badge { display: inline-block; border: 1px solid #000; border-radius: 0.375rem; padding: 0.25rem 0.75rem; color: #b91c1c; font-weight: 700; font-size: 1.25rem; }
.sequence-clause { margin: 0.25rem 0 0.5rem; font-size: 0.875rem; }
.section-title { display: inline-block; border-bottom: 2px solid #1f2937; margin: 0; font-size: 1.05rem; font-weight: 800; }
.subsection-title { display: inline-block; border-bottom: 2px solid #b91c1c; margin: 0.75rem 0 0.25rem; color: #b91c1c; font-size: 1rem; }
.instruction { text-align: justify; line-height: 1.6; }
.emphasis { font-weight: 800; color: #1d4ed8; }
.placeholder { letter-spacing: 0.1em; }
.advice-list { list-style: none; padding-left: 0; text-align: left; font-size: 0.75rem; color: #1f2937; }
.doctor-info { margin-top: auto; padding-top: 1rem; }
.doctor-info p { margin: 0.125rem 0; }
#printable-content { display: none; }
"#;

/// Full stylesheet for `sheet`: screen styles, the on-screen sheet size and
/// the print rules.
pub fn stylesheet(sheet: &SheetConfig) -> String {
    format!(
        "{}.prescription-sheet {{ width: {}in; min-height: {}in; }}\n{}",
        SHEET_CSS,
        sheet.width_in,
        sheet.height_in,
        sheet.page_css()
    )
}
