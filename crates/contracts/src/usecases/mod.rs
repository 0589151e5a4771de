pub mod common;
pub mod u501_tender_check;
