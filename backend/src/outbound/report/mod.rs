//! Report rendering adapters.

mod excel;

pub use excel::ExcelReportGenerator;
